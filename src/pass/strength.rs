//! Entropy scoring and brute-force time estimates.

use std::fmt;

/// Assumed attacker speed in guesses per second.
pub const ATTEMPTS_PER_SECOND: f64 = 1e12;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const MILLENNIUM: f64 = 31_536_000_000.0;

/// Password entropy in bits, assuming i.i.d. uniform draws with replacement.
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        if bits >= 70.0 {
            Strength::Strong
        } else if bits >= 50.0 {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    /// Accessible description, e.g. `Password strength: Strong`.
    pub fn label(self) -> String {
        format!("Password strength: {}", self.as_str())
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated time to exhaust half the keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakTime {
    Seconds,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Years(u64),
    MillionsOfYears,
}

impl fmt::Display for BreakTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakTime::Seconds => f.write_str("Can be broken in seconds."),
            BreakTime::Minutes(n) => write!(f, "Would take ~{n} minutes to break."),
            BreakTime::Hours(n) => write!(f, "Would take ~{n} hours to break."),
            BreakTime::Days(n) => write!(f, "Would take ~{n} days to break."),
            BreakTime::Years(n) => write!(f, "Would take ~{n} years to break."),
            BreakTime::MillionsOfYears => f.write_str("Would take millions of years to break."),
        }
    }
}

/// Seconds needed to search half of a `bits`-bit keyspace.
pub fn seconds_to_break(bits: f64) -> f64 {
    2f64.powf(bits - 1.0) / ATTEMPTS_PER_SECOND
}

pub fn estimate_break_time(bits: f64) -> BreakTime {
    bucket(seconds_to_break(bits))
}

fn bucket(secs: f64) -> BreakTime {
    // Inputs are non-negative, so f64::round matches round-half-up.
    if secs < MINUTE {
        BreakTime::Seconds
    } else if secs < HOUR {
        BreakTime::Minutes((secs / MINUTE).round() as u64)
    } else if secs < DAY {
        BreakTime::Hours((secs / HOUR).round() as u64)
    } else if secs < YEAR {
        BreakTime::Days((secs / DAY).round() as u64)
    } else if secs < MILLENNIUM {
        BreakTime::Years((secs / YEAR).round() as u64)
    } else {
        BreakTime::MillionsOfYears
    }
}

/// One-line report: `Entropy: 79 bits. Would take millions of years to break.`
pub fn summary(bits: f64) -> String {
    format!(
        "Entropy: {} bits. {}",
        bits.round() as u64,
        estimate_break_time(bits)
    )
}
