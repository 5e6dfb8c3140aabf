//! Closed frequency intervals and integer divisor ranges.

use std::fmt;
use std::ops::RangeInclusive;

/// Closed frequency range `[lo, hi]` in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyInterval {
    pub lo: f64,
    pub hi: f64,
}

impl FrequencyInterval {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Inclusive membership. NaN is never contained.
    pub fn contains(&self, hz: f64) -> bool {
        self.lo <= hz && hz <= self.hi
    }
}

impl fmt::Display for FrequencyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", format_hz(self.lo), format_hz(self.hi))
    }
}

/// Inclusive integer range for a divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisorRange {
    pub min: u32,
    pub max: u32,
}

impl DivisorRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, div: u32) -> bool {
        self.min <= div && div <= self.max
    }

    /// Clamp a (possibly negative) divisor estimate into the range.
    pub fn clamp(&self, div: i64) -> u32 {
        div.clamp(i64::from(self.min), i64::from(self.max)) as u32
    }

    pub fn iter(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl fmt::Display for DivisorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Human-readable frequency, e.g. `3.125 MHz`.
pub fn format_hz(hz: f64) -> String {
    let (scaled, unit) = if hz.abs() >= 1e6 {
        (hz / 1e6, "MHz")
    } else if hz.abs() >= 1e3 {
        (hz / 1e3, "kHz")
    } else {
        (hz, "Hz")
    };

    let mut s = format!("{scaled:.6}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    format!("{s} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_membership_is_inclusive() {
        let iv = FrequencyInterval::new(10.0e6, 400.0e6);
        assert!(iv.contains(10.0e6));
        assert!(iv.contains(400.0e6));
        assert!(!iv.contains(9.999_999e6));
        assert!(!iv.contains(f64::NAN));
    }

    #[test]
    fn divisor_clamp_handles_negative_estimates() {
        let r = DivisorRange::new(1, 128);
        assert_eq!(r.clamp(-1), 1);
        assert_eq!(r.clamp(0), 1);
        assert_eq!(r.clamp(64), 64);
        assert_eq!(r.clamp(300), 128);
    }

    #[test]
    fn format_hz_trims_trailing_zeros() {
        assert_eq!(format_hz(3.125e6), "3.125 MHz");
        assert_eq!(format_hz(25.0e6), "25 MHz");
        assert_eq!(format_hz(32_768.0), "32.768 kHz");
        assert_eq!(format_hz(50.0), "50 Hz");
    }
}
