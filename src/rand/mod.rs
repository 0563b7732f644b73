//! Random sources for password sampling.
//!
//! Sampling never picks its own randomness: callers pass a [`RandomSource`].
//! [`SourceKind`] names the available strategies so the choice is made once,
//! visibly, at the call site.

mod hw;
mod mixer;

use std::fmt;
use std::str::FromStr;

use ::rand::rngs::{OsRng, StdRng};
use ::rand::{RngCore, SeedableRng};
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub use mixer::FastSource;

/// A supplier of uniformly distributed `u32` values.
pub trait RandomSource {
    /// Fill `dest` with uniform draws.
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<()>;

    /// Short human-readable name, for reports and logs.
    fn name(&self) -> &'static str;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<()> {
        (**self).fill_u32(dest)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Operating-system CSPRNG (`getrandom` and friends).
#[derive(Debug, Default)]
pub struct OsSource;

impl RandomSource for OsSource {
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<()> {
        let mut bytes = vec![0u8; dest.len() * 4];
        let filled = OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| Error::RandomSource(e.to_string()));
        if filled.is_ok() {
            for (slot, chunk) in dest.iter_mut().zip(bytes.chunks_exact(4)) {
                *slot = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            }
        }
        bytes.zeroize();
        filled
    }

    fn name(&self) -> &'static str {
        "os"
    }
}

/// Reproducible source seeded from a `u64`. Not for real secrets.
pub struct SeededSource(StdRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        SeededSource(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = self.0.next_u32();
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}

/// Uses `primary` until it fails, then `fallback` for the rest of its life.
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
    degraded: bool,
}

impl<P: RandomSource, F: RandomSource> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self {
            primary,
            fallback,
            degraded: false,
        }
    }

    /// True once the fallback has taken over.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

impl<P: RandomSource, F: RandomSource> RandomSource for WithFallback<P, F> {
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<()> {
        if !self.degraded {
            match self.primary.fill_u32(dest) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(
                        primary = self.primary.name(),
                        fallback = self.fallback.name(),
                        error = %e,
                        "random source failed, switching to fallback"
                    );
                    self.degraded = true;
                }
            }
        }
        self.fallback.fill_u32(dest)
    }

    fn name(&self) -> &'static str {
        if self.degraded {
            self.fallback.name()
        } else {
            self.primary.name()
        }
    }
}

/// Which random source to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// OS CSPRNG, with the hardware mixer as an explicit fallback.
    #[default]
    Auto,
    Os,
    Fast,
    Seeded(u64),
}

impl SourceKind {
    pub fn into_source(self) -> Box<dyn RandomSource> {
        tracing::debug!(kind = %self, "selecting random source");
        match self {
            SourceKind::Auto => Box::new(WithFallback::new(OsSource, FastSource::new())),
            SourceKind::Os => Box::new(OsSource),
            SourceKind::Fast => Box::new(FastSource::new()),
            SourceKind::Seeded(seed) => Box::new(SeededSource::new(seed)),
        }
    }

    /// Whether this source is suitable for real secrets.
    pub fn is_strong(self) -> bool {
        matches!(self, SourceKind::Auto | SourceKind::Os)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Auto => f.write_str("auto"),
            SourceKind::Os => f.write_str("os"),
            SourceKind::Fast => f.write_str("fast"),
            SourceKind::Seeded(seed) => write!(f, "seeded({seed})"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(SourceKind::Auto),
            "os" => Ok(SourceKind::Os),
            "fast" => Ok(SourceKind::Fast),
            other => Err(format!("unknown random source: {other}")),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Replays a fixed list of draws, cycling when exhausted.
    pub struct Scripted {
        draws: Vec<u32>,
        pos: usize,
    }

    impl Scripted {
        pub fn new(draws: &[u32]) -> Self {
            Self {
                draws: draws.to_vec(),
                pos: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn fill_u32(&mut self, dest: &mut [u32]) -> Result<()> {
            for slot in dest.iter_mut() {
                *slot = self.draws[self.pos % self.draws.len()];
                self.pos += 1;
            }
            Ok(())
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    /// Always fails.
    pub struct Broken;

    impl RandomSource for Broken {
        fn fill_u32(&mut self, _dest: &mut [u32]) -> Result<()> {
            Err(Error::RandomSource("unavailable".into()))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }
}
