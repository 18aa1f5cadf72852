// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! True-linear proportional sizing with a visibility floor.

use crate::error::InvalidReferenceError;
use crate::math;

/// Linear "eye test" size mapping.
///
/// Maps a value to `max(min_size, round(value / reference * max_size))`. The
/// reference value (typically the best-covered script's font count) renders
/// at `max_size`; everything else renders in true linear proportion, floored
/// at `min_size` so near-zero values stay perceptible.
///
/// Unlike [`SqrtScale`](crate::SqrtScale) or [`LogScale`](crate::LogScale),
/// this mapping applies no perceptual compression. The floor is the only
/// non-linearity: above it, rendered size is an honest multiple of the data,
/// and most values in a heavily skewed dataset collapse onto the floor. That
/// collapse is the message, not an artifact to engineer away.
///
/// ```rust
/// use typegap_encode::ProportionalSizer;
///
/// let sizer = ProportionalSizer::new(1900.0, 1.0, 100.0).unwrap();
/// assert_eq!(sizer.size(1900.0), 100.0);
/// assert_eq!(sizer.size(315.0), 17.0);
/// assert_eq!(sizer.size(0.0), 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProportionalSizer {
    reference: f64,
    min_size: f64,
    max_size: f64,
}

impl ProportionalSizer {
    /// Creates a sizer against the given reference value.
    ///
    /// `min_size` and `max_size` are normalized so that `min_size <=
    /// max_size`; both must be strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidReferenceError`] when `reference` is not strictly
    /// positive; sizing against such a reference is undefined.
    pub fn new(
        reference: f64,
        min_size: f64,
        max_size: f64,
    ) -> Result<Self, InvalidReferenceError> {
        if reference <= 0.0 || reference.is_nan() {
            return Err(InvalidReferenceError { reference });
        }
        debug_assert!(min_size > 0.0, "sizes must be strictly positive");
        debug_assert!(max_size > 0.0, "sizes must be strictly positive");
        let (min_size, max_size) = if min_size <= max_size {
            (min_size, max_size)
        } else {
            (max_size, min_size)
        };
        Ok(Self {
            reference,
            min_size,
            max_size,
        })
    }

    /// Returns the reference value that renders at the maximum size.
    #[must_use]
    pub fn reference(&self) -> f64 {
        self.reference
    }

    /// Returns the visibility floor.
    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Returns the size the reference value renders at.
    #[must_use]
    pub fn max_size(&self) -> f64 {
        self.max_size
    }

    /// Returns the rendered size for `value`.
    ///
    /// Monotonic: a larger value never renders smaller. Negative values are
    /// treated like zero and land on the floor.
    #[must_use]
    pub fn size(&self, value: f64) -> f64 {
        let proportional = math::round(value / self.reference * self.max_size);
        proportional.max(self.min_size)
    }
}
