use std::path::PathBuf;

use clap::Parser;

use crate::rand::SourceKind;

/// Generate passwords from selectable character classes and report their
/// entropy and estimated brute-force time.
#[derive(Debug, Default, Parser)]
#[command(name = "neopass", version, about)]
pub struct CliFlags {
    /// Password length (1-128)
    #[arg(short, long, env = "NEOPASS_LENGTH")]
    pub length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short, long)]
    pub number: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Random source: auto, os or fast
    #[arg(long, env = "NEOPASS_RNG", value_name = "SOURCE")]
    pub rng: Option<SourceKind>,

    /// Seed for reproducible output (not for real passwords)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress warnings and the strength report
    #[arg(short, long)]
    pub quiet: bool,

    /// Start the interactive interface
    #[arg(short, long)]
    pub interactive: bool,

    /// Settings file
    #[arg(long, env = "NEOPASS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliFlags {
    /// Any flag that shapes the generated passwords.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.no_upper
            || self.no_lower
            || self.no_digits
            || self.no_symbols
            || self.rng.is_some()
            || self.seed.is_some()
            || self.clipboard
            || self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("neopass").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let flags = parse(&[]);
        assert!(flags.number.is_none());
        assert!(!flags.clipboard);
        assert!(!flags.interactive);
        assert!(!flags.has_explicit_args());
    }

    #[test]
    fn short_and_long_forms() {
        let flags = parse(&["-l", "20", "--number", "3", "--no-symbols", "-b", "-q"]);
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_symbols);
        assert!(flags.clipboard);
        assert!(flags.quiet);
        assert!(flags.has_explicit_args());
    }

    #[test]
    fn random_source_options() {
        assert_eq!(parse(&["--rng", "fast"]).rng, Some(SourceKind::Fast));
        assert_eq!(parse(&["--seed", "99"]).seed, Some(99));
        assert!(
            CliFlags::try_parse_from(["neopass", "--rng", "dice"]).is_err()
        );
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(CliFlags::try_parse_from(["neopass", "-l", "ten"]).is_err());
        assert!(CliFlags::try_parse_from(["neopass", "--bogus"]).is_err());
    }
}
