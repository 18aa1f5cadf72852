// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine domain-to-range mapping.

use core::ops::Range;

use crate::error::{InvalidDomainError, InvalidDomainKind};

/// Linear (affine) scale from a data domain onto a visual range.
///
/// By default the scale extrapolates: inputs outside the domain map outside
/// the range along the same line. Call [`LinearScale::clamped`] to pin
/// out-of-domain inputs to the range endpoints instead.
///
/// The domain must have non-zero length; the range may be degenerate (every
/// input then maps to the single range value, and [`LinearScale::invert`]
/// returns `None`).
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: Range<f64>,
    range: Range<f64>,
    clamp: bool,
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `range`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDomainError`] with [`InvalidDomainKind::Empty`] when
    /// the domain has zero length, since interpolation would be undefined.
    pub fn new(domain: Range<f64>, range: Range<f64>) -> Result<Self, InvalidDomainError> {
        if domain.start == domain.end {
            return Err(InvalidDomainError {
                start: domain.start,
                end: domain.end,
                kind: InvalidDomainKind::Empty,
            });
        }
        Ok(Self {
            domain,
            range,
            clamp: false,
        })
    }

    /// Returns the same scale with clamping enabled.
    ///
    /// A clamped scale pins inputs outside the domain to the nearest range
    /// endpoint instead of extrapolating.
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
    #[must_use]
    pub fn scale(&self, x: f64) -> f64 {
        let mut t = (x - self.domain.start) / (self.domain.end - self.domain.start);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        self.range.start + t * (self.range.end - self.range.start)
    }

    /// Maps a range value back onto the domain.
    ///
    /// Returns `None` when the range is degenerate, in which case the
    /// forward mapping is not injective and no inverse exists.
    #[must_use]
    pub fn invert(&self, y: f64) -> Option<f64> {
        if self.range.start == self.range.end {
            return None;
        }
        let mut t = (y - self.range.start) / (self.range.end - self.range.start);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        Some(self.domain.start + t * (self.domain.end - self.domain.start))
    }
}
