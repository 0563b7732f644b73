//! CLI context - bundles settings and flags and drives one-shot generation.

use std::io::{BufWriter, Write};

use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::{self, CopyOutcome};
use crate::error::Result;
use crate::pass::{self, CharacterClass, GenerationRequest, charset};
use crate::rand::{RandomSource, SourceKind};
use crate::settings::Settings;
use crate::tui;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Load settings (from `--config` or the default path) and pair them
    /// with the parsed flags.
    pub fn new(flags: CliFlags) -> Result<Self> {
        let path = flags.config.clone().unwrap_or_else(Settings::default_path);
        let settings = Settings::load(&path)?;
        Ok(Self { settings, flags })
    }

    /// Flags override settings; out-of-range lengths are clamped.
    pub fn request(&self) -> GenerationRequest {
        let length = self.flags.length.unwrap_or(self.settings.length);
        let mut classes = self.settings.classes;
        for (off, class) in [
            (self.flags.no_upper, CharacterClass::Uppercase),
            (self.flags.no_lower, CharacterClass::Lowercase),
            (self.flags.no_digits, CharacterClass::Digits),
            (self.flags.no_symbols, CharacterClass::Symbols),
        ] {
            if off {
                classes.remove(class);
            }
        }
        GenerationRequest::new(length, classes)
    }

    pub fn source_kind(&self) -> SourceKind {
        match self.flags.seed {
            Some(seed) => SourceKind::Seeded(seed),
            None => self.flags.rng.unwrap_or(self.settings.rng),
        }
    }

    pub fn count(&self) -> usize {
        self.requested_count().max(1)
    }

    fn requested_count(&self) -> usize {
        self.flags.number.unwrap_or(self.settings.count)
    }

    /// `(requested, used)` when the requested count had to be raised.
    pub fn count_adjustment(&self) -> Option<(usize, usize)> {
        let requested = self.requested_count();
        (requested != self.count()).then_some((requested, self.count()))
    }

    /// Run the TUI or a one-shot generation.
    pub fn run(&mut self, interactive: bool) -> Result<()> {
        quiet::set(self.flags.quiet);

        let request = self.request();
        let requested = self.flags.length.unwrap_or(self.settings.length);
        if request.length != requested {
            prompts::length_clamped(requested, request.length);
        }
        if let Some((requested, used)) = self.count_adjustment() {
            prompts::count_clamped(requested, used);
        }
        if request.classes.is_empty() {
            prompts::no_classes_selected();
        }

        let kind = self.source_kind();
        if !kind.is_strong() {
            prompts::weak_source(&kind.to_string());
        }
        let mut source = kind.into_source();

        if interactive {
            let request = GenerationRequest::new(request.length, charset::effective(request.classes));
            return tui::run(request, source);
        }

        tracing::debug!(
            length = request.length,
            count = self.count(),
            source = %kind,
            "generating"
        );
        if self.flags.clipboard {
            self.to_clipboard(&request, source.as_mut())
        } else {
            self.to_stdout(&request, source.as_mut())
        }
    }

    fn to_stdout(&self, request: &GenerationRequest, source: &mut dyn RandomSource) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        self.write_passwords(
            request,
            source,
            &mut out,
            &mut std::io::stderr(),
            prompts::stderr_color(),
        )
    }

    /// One password per line on `out`, then the strength report on `report`
    /// unless quiet.
    fn write_passwords<W: Write, E: Write>(
        &self,
        request: &GenerationRequest,
        source: &mut dyn RandomSource,
        out: &mut W,
        report: &mut E,
        color: bool,
    ) -> Result<()> {
        let mut entropy = 0.0;
        for _ in 0..self.count() {
            let password = pass::run(request, source)?;
            entropy = password.entropy_bits();
            out.write_all(password.value().as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()?;

        if !self.flags.quiet {
            prompts::write_report(report, entropy, color)?;
        }
        Ok(())
    }

    fn to_clipboard(&self, request: &GenerationRequest, source: &mut dyn RandomSource) -> Result<()> {
        let count = self.count();
        let mut passwords = String::new();
        let mut entropy = 0.0;

        for i in 0..count {
            let password = pass::run(request, source)?;
            entropy = password.entropy_bits();
            if i > 0 {
                passwords.push('\n');
            }
            passwords.push_str(password.value());
        }

        let result = match clipboard::copy(&passwords) {
            Ok(outcome) => {
                prompts::clipboard_copied(count, outcome == CopyOutcome::Terminal);
                Ok(())
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                if prompts::clipboard_fallback_prompt() {
                    println!("{passwords}");
                    Ok(())
                } else {
                    Err(e)
                }
            }
        };
        passwords.zeroize();

        if result.is_ok() {
            prompts::report(entropy);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;
    use clap::Parser;

    fn context(args: &[&str], settings: Settings) -> Context {
        let flags =
            CliFlags::try_parse_from(std::iter::once("neopass").chain(args.iter().copied()))
                .unwrap();
        Context { settings, flags }
    }

    #[test]
    fn defaults_come_from_settings() {
        let settings = Settings {
            length: 30,
            count: 4,
            ..Settings::default()
        };
        let ctx = context(&[], settings);
        assert_eq!(ctx.request().length, 30);
        assert_eq!(ctx.request().classes, ClassSet::all());
        assert_eq!(ctx.count(), 4);
        assert_eq!(ctx.source_kind(), SourceKind::Auto);
    }

    #[test]
    fn flags_override_settings() {
        let ctx = context(
            &["-l", "16", "-n", "2", "--no-lower", "--no-symbols", "--rng", "os"],
            Settings::default(),
        );
        let request = ctx.request();
        assert_eq!(request.length, 16);
        let expected: ClassSet = [CharacterClass::Uppercase, CharacterClass::Digits]
            .into_iter()
            .collect();
        assert_eq!(request.classes, expected);
        assert_eq!(ctx.count(), 2);
        assert_eq!(ctx.source_kind(), SourceKind::Os);
    }

    #[test]
    fn seed_wins_over_rng() {
        let ctx = context(&["--rng", "os", "--seed", "5"], Settings::default());
        assert_eq!(ctx.source_kind(), SourceKind::Seeded(5));
    }

    #[test]
    fn length_is_clamped_and_count_is_at_least_one() {
        let ctx = context(&["-l", "0", "-n", "0"], Settings::default());
        assert_eq!(ctx.request().length, 1);
        assert_eq!(ctx.count(), 1);
        assert_eq!(ctx.count_adjustment(), Some((0, 1)));
        let ctx = context(&["-l", "4096"], Settings::default());
        assert_eq!(ctx.request().length, 128);
    }

    #[test]
    fn all_classes_off_is_left_to_the_fallback() {
        let ctx = context(
            &["--no-upper", "--no-lower", "--no-digits", "--no-symbols"],
            Settings::default(),
        );
        assert!(ctx.request().classes.is_empty());
        assert_eq!(charset::size(ctx.request().classes), 26);
    }

    #[test]
    fn zero_count_in_settings_is_reported() {
        let settings = Settings {
            count: 0,
            ..Settings::default()
        };
        let ctx = context(&[], settings);
        assert_eq!(ctx.count(), 1);
        assert_eq!(ctx.count_adjustment(), Some((0, 1)));
        assert_eq!(context(&["-n", "3"], Settings::default()).count_adjustment(), None);
    }

    fn emit(ctx: &Context) -> (String, String) {
        let mut source = ctx.source_kind().into_source();
        let (mut out, mut report) = (Vec::new(), Vec::new());
        ctx.write_passwords(&ctx.request(), source.as_mut(), &mut out, &mut report, false)
            .unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(report).unwrap())
    }

    #[test]
    fn one_password_per_line_then_report() {
        let ctx = context(&["-n", "3", "--seed", "1", "-l", "20"], Settings::default());
        let (out, report) = emit(&ctx);

        let alphabet = charset::build(ctx.request().classes);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(out.ends_with('\n'));
        for line in &lines {
            assert_eq!(line.chars().count(), 20);
            assert!(line.chars().all(|c| alphabet.contains(c)), "{line}");
        }

        let report: Vec<&str> = report.lines().collect();
        assert_eq!(report.len(), 2);
        assert!(report[0].starts_with("Entropy: "));
        assert!(report[1].starts_with("Password strength: "));
        assert!(!out.contains("Entropy"));
    }

    #[test]
    fn quiet_suppresses_the_report() {
        let ctx = context(&["-n", "3", "--seed", "1", "-q"], Settings::default());
        let (out, report) = emit(&ctx);
        assert_eq!(out.lines().count(), 3);
        assert!(report.is_empty());
    }

    #[test]
    fn same_seed_same_output() {
        let ctx = context(&["-n", "2", "--seed", "9"], Settings::default());
        assert_eq!(emit(&ctx).0, emit(&ctx).0);
    }
}
