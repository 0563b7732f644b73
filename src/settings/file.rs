//! Read-only settings file.
//!
//! ```text
//! # ~/.config/neopass/settings
//! length = 20
//! symbols = false
//! rng = os
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use super::Settings;
use crate::error::{Error, Result};
use crate::pass::CharacterClass;

pub fn load(path: &Path, settings: &mut Settings) -> Result<()> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    parse(BufReader::new(file), settings).map_err(|(line, message)| Error::Config {
        path: path.to_path_buf(),
        line,
        message,
    })?;
    tracing::debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(())
}

/// Apply `key = value` lines to `settings`. Errors carry a 1-based line number.
fn parse<R: BufRead>(reader: R, settings: &mut Settings) -> std::result::Result<(), (usize, String)> {
    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.map_err(|e| (lineno, e.to_string()))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .ok_or_else(|| (lineno, format!("expected `key = value`, got `{line}`")))?;

        match key {
            "length" => settings.length = parse_number(value).map_err(|m| (lineno, m))?,
            "count" => settings.count = parse_number(value).map_err(|m| (lineno, m))?,
            "rng" => settings.rng = value.parse().map_err(|m| (lineno, m))?,
            other => match CharacterClass::from_label(other) {
                Some(class) => {
                    let on = parse_bool(value).map_err(|m| (lineno, m))?;
                    settings.classes.set(class, on);
                }
                None => return Err((lineno, format!("unknown setting `{other}`"))),
            },
        }
    }
    Ok(())
}

fn parse_number(value: &str) -> std::result::Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid number: {value}"))
}

fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("invalid boolean: {value}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;
    use crate::rand::SourceKind;

    fn parsed(text: &str) -> std::result::Result<Settings, (usize, String)> {
        let mut settings = Settings::default();
        parse(text.as_bytes(), &mut settings)?;
        Ok(settings)
    }

    #[test]
    fn empty_file_keeps_defaults() {
        assert_eq!(parsed("").unwrap(), Settings::default());
        assert_eq!(parsed("# nothing\n\n").unwrap(), Settings::default());
    }

    #[test]
    fn reads_all_keys() {
        let settings = parsed(
            "length = 24\ncount=3\nsymbols = off\n  digits = no\nrng = fast\n",
        )
        .unwrap();
        assert_eq!(settings.length, 24);
        assert_eq!(settings.count, 3);
        assert_eq!(settings.rng, SourceKind::Fast);
        let expected: ClassSet = [CharacterClass::Uppercase, CharacterClass::Lowercase]
            .into_iter()
            .collect();
        assert_eq!(settings.classes, expected);
    }

    #[test]
    fn reports_line_numbers() {
        let (line, message) = parsed("length = 8\n\nlength = eight\n").unwrap_err();
        assert_eq!(line, 3);
        assert!(message.contains("eight"));

        let (line, _) = parsed("colour = blue").unwrap_err();
        assert_eq!(line, 1);

        let (line, _) = parsed("# ok\nno equals sign").unwrap_err();
        assert_eq!(line, 2);
    }

    #[test]
    fn missing_file_is_defaults() {
        let path = Path::new("/nonexistent/neopass/settings");
        assert_eq!(Settings::load(path).unwrap(), Settings::default());
    }
}
