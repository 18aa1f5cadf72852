// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logarithmic domain-to-range mapping.

use core::ops::Range;

use crate::error::{InvalidDomainError, InvalidDomainKind};
use crate::math;

/// Logarithmic scale from a strictly positive data domain onto a visual range.
///
/// Interpolation happens in natural-log space, so a domain spanning several
/// orders of magnitude (font counts, speaker populations, inequality ratios)
/// spreads evenly across the range.
///
/// Evaluation is total: inputs at or below zero are pinned to the smallest
/// positive `f64` before taking the log, so the scale never produces NaN.
#[derive(Clone, Debug, PartialEq)]
pub struct LogScale {
    domain: Range<f64>,
    range: Range<f64>,
    log_start: f64,
    log_end: f64,
    clamp: bool,
}

impl LogScale {
    /// Creates a scale mapping `domain` onto `range` in log space.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDomainError`] before any input is scaled when either
    /// domain bound is not strictly positive
    /// ([`InvalidDomainKind::NonPositive`]) or the domain has zero length
    /// ([`InvalidDomainKind::Empty`]).
    pub fn new(domain: Range<f64>, range: Range<f64>) -> Result<Self, InvalidDomainError> {
        if domain.start <= 0.0 || domain.end <= 0.0 {
            return Err(InvalidDomainError {
                start: domain.start,
                end: domain.end,
                kind: InvalidDomainKind::NonPositive,
            });
        }
        if domain.start == domain.end {
            return Err(InvalidDomainError {
                start: domain.start,
                end: domain.end,
                kind: InvalidDomainKind::Empty,
            });
        }
        let log_start = math::ln(domain.start);
        let log_end = math::ln(domain.end);
        Ok(Self {
            domain,
            range,
            log_start,
            log_end,
            clamp: false,
        })
    }

    /// Returns the same scale with clamping enabled.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Returns the data domain.
    #[must_use]
    pub fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    /// Returns the visual range.
    #[must_use]
    pub fn range(&self) -> Range<f64> {
        self.range.clone()
    }

    /// Maps a domain value onto the range.
    ///
    /// Inputs at or below zero are treated as the smallest positive `f64`.
    #[must_use]
    pub fn scale(&self, x: f64) -> f64 {
        let x = if x > 0.0 { x } else { f64::MIN_POSITIVE };
        let mut t = (math::ln(x) - self.log_start) / (self.log_end - self.log_start);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        self.range.start + t * (self.range.end - self.range.start)
    }

    /// Maps a range value back onto the domain.
    ///
    /// Returns `None` when the range is degenerate.
    #[must_use]
    pub fn invert(&self, y: f64) -> Option<f64> {
        if self.range.start == self.range.end {
            return None;
        }
        let mut t = (y - self.range.start) / (self.range.end - self.range.start);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        Some(math::exp(self.log_start + t * (self.log_end - self.log_start)))
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidDomainKind, LogScale};

    #[test]
    fn decades_spread_evenly() {
        let s = LogScale::new(1.0..100.0, 0.0..1.0).unwrap();
        assert!((s.scale(1.0) - 0.0).abs() < 1e-12);
        assert!((s.scale(10.0) - 0.5).abs() < 1e-12);
        assert!((s.scale(100.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_domain_bound_is_rejected_before_scaling() {
        let err = LogScale::new(0.0..10.0, 0.0..1.0).unwrap_err();
        assert_eq!(err.kind, InvalidDomainKind::NonPositive);

        let err = LogScale::new(1.0..-3.0, 0.0..1.0).unwrap_err();
        assert_eq!(err.kind, InvalidDomainKind::NonPositive);
    }

    #[test]
    fn non_positive_input_is_pinned_not_nan() {
        let s = LogScale::new(0.3..100.0, 0.0..620.0).unwrap();
        assert!(s.scale(0.0).is_finite());
        assert!(s.scale(-5.0).is_finite());
        assert_eq!(s.scale(0.0), s.scale(-5.0));
    }

    #[test]
    fn round_trips_within_tolerance() {
        let s = LogScale::new(0.3..100.0, 620.0..0.0).unwrap();
        for x in [0.3, 1.0, 2.0, 10.0, 59.0, 100.0] {
            let back = s.invert(s.scale(x)).unwrap();
            assert!((back - x).abs() < 1e-9 * x);
        }
    }

    #[test]
    fn clamp_pins_out_of_domain_inputs() {
        let s = LogScale::new(0.3..100.0, 0.0..620.0).unwrap().clamped();
        assert_eq!(s.scale(1000.0), 620.0);
        assert_eq!(s.scale(0.1), 0.0);
    }
}
