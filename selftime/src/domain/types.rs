//! Domain types providing compile-time safety and self-documentation

use serde::{Deserialize, Serialize};
use std::fmt;

const NANOS_PER_SEC: f64 = 1e9;

/// Duration as written by the profiler: whole seconds plus a nanosecond part.
///
/// The nanosecond part is not required to be below one second; conversion
/// simply adds it on top of `secs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanTime {
    pub secs: u64,
    pub nanos: u32,
}

impl SpanTime {
    /// Convert to fractional seconds (`secs + nanos / 1e9`)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self) -> f64 {
        self.secs as f64 + f64::from(self.nanos) / NANOS_PER_SEC
    }
}

impl fmt::Display for SpanTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_secs_f64())
    }
}

/// 1-based position of an item after ranking by self-time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Rank(pub usize);

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_time_converts_nanos() {
        let t = SpanTime { secs: 1, nanos: 500_000_000 };
        assert!((t.as_secs_f64() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_span_time_display() {
        assert_eq!(SpanTime { secs: 2, nanos: 250_000_000 }.to_string(), "2.250s");
    }

    #[test]
    fn test_rank_display() {
        assert_eq!(Rank(3).to_string(), "#3");
    }
}
