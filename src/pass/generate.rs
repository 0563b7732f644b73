//! Password sampling.

use std::fmt;

use zeroize::Zeroize;

use super::strength;
use crate::error::{Error, Result};
use crate::rand::RandomSource;

/// A freshly sampled password. The value is wiped when dropped.
pub struct GeneratedPassword {
    value: String,
    entropy_bits: f64,
    alphabet_size: usize,
}

impl GeneratedPassword {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("value", &"<redacted>")
            .field("entropy_bits", &self.entropy_bits)
            .field("alphabet_size", &self.alphabet_size)
            .finish()
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Sample `length` characters uniformly from `alphabet`.
///
/// Each position takes one `u32` draw and uses `alphabet[draw % len]`. When
/// `2^32` is not a multiple of the alphabet length the low indices are very
/// slightly favored (under 2^-25 relative for the alphabets used here). That
/// bias is accepted rather than corrected with rejection sampling.
pub fn generate<R>(alphabet: &str, length: usize, source: &mut R) -> Result<GeneratedPassword>
where
    R: RandomSource + ?Sized,
{
    if length == 0 {
        return Err(Error::InvalidLength(length));
    }
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let mut draws = vec![0u32; length];
    source.fill_u32(&mut draws)?;

    let value: String = draws
        .iter()
        .map(|&draw| chars[draw as usize % chars.len()])
        .collect();
    draws.zeroize();

    tracing::trace!(
        length,
        alphabet_size = chars.len(),
        source = source.name(),
        "password sampled"
    );

    Ok(GeneratedPassword {
        value,
        entropy_bits: strength::entropy_bits(length, chars.len()),
        alphabet_size: chars.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::SeededSource;
    use crate::rand::testing::{Broken, Scripted};

    #[test]
    fn output_has_requested_length_and_alphabet() {
        let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ!@%*?$&+-#";
        let mut source = SeededSource::new(42);
        for length in [1, 2, 12, 64, 128] {
            let pass = generate(alphabet, length, &mut source).unwrap();
            assert_eq!(pass.len(), length);
            assert!(pass.value().chars().all(|c| alphabet.contains(c)));
            assert_eq!(pass.alphabet_size(), alphabet.len());
        }
    }

    #[test]
    fn draws_index_modulo_alphabet_length() {
        let mut source = Scripted::new(&[0, 1, 9, 10, 23, u32::MAX]);
        let pass = generate("0123456789", 6, &mut source).unwrap();
        // u32::MAX % 10 == 5
        assert_eq!(pass.value(), "019035");
    }

    #[test]
    fn single_character_alphabet() {
        let mut source = SeededSource::new(1);
        let pass = generate("x", 5, &mut source).unwrap();
        assert_eq!(pass.value(), "xxxxx");
        assert_eq!(pass.entropy_bits(), 0.0);
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut source = SeededSource::new(1);
        assert!(matches!(
            generate("abc", 0, &mut source),
            Err(Error::InvalidLength(0))
        ));
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        let mut source = SeededSource::new(1);
        assert!(matches!(
            generate("", 4, &mut source),
            Err(Error::EmptyAlphabet)
        ));
    }

    #[test]
    fn source_failure_propagates() {
        assert!(matches!(
            generate("abc", 4, &mut Broken),
            Err(Error::RandomSource(_))
        ));
    }

    #[test]
    fn entropy_matches_formula() {
        let mut source = SeededSource::new(3);
        let pass = generate("0123456789", 12, &mut source).unwrap();
        assert!((pass.entropy_bits() - 12.0 * 10f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn debug_does_not_leak_value() {
        let mut source = Scripted::new(&[0]);
        let pass = generate("Q", 8, &mut source).unwrap();
        assert!(!format!("{pass:?}").contains("QQQQ"));
    }

    #[test]
    fn works_through_boxed_source() {
        let mut source: Box<dyn RandomSource> = Box::new(SeededSource::new(9));
        let pass = generate("ab", 10, &mut source).unwrap();
        assert_eq!(pass.len(), 10);
    }
}
