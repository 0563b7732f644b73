//! Password generation: alphabet building, sampling and scoring.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{GeneratedPassword, generate};
pub use strength::{BreakTime, Strength, estimate_break_time};

use crate::error::Result;
use crate::rand::RandomSource;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 12;

/// Clamp a requested length into `MIN_LENGTH..=MAX_LENGTH`.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    /// Build a request, clamping `length` into the accepted range.
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self {
            length: clamp_length(length),
            classes,
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, ClassSet::all())
    }
}

/// Build the alphabet for `request` and sample one password from it.
pub fn run<R>(request: &GenerationRequest, source: &mut R) -> Result<GeneratedPassword>
where
    R: RandomSource + ?Sized,
{
    let alphabet = charset::build(request.classes);
    generate(&alphabet, request.length, source)
}
