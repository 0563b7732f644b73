//! Generation defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pass::{ClassSet, DEFAULT_LENGTH, GenerationRequest};
use crate::rand::SourceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub count: usize,
    pub rng: SourceKind,
}

impl Settings {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    /// `$HOME/.config/neopass/settings`
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".config/neopass/settings")
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::all(),
            count: 1,
            rng: SourceKind::Auto,
        }
    }
}
