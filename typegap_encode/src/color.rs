// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential color ramps over anchor stops.

use alloc::vec::Vec;

use peniko::Color;

use crate::error::EmptyRampError;

/// One anchor of a sequential color ramp.
#[derive(Copy, Clone, Debug)]
pub struct ColorStop {
    /// Position of the anchor, conventionally a ratio in `[0, 1]`.
    pub stop: f64,
    /// Color at the anchor.
    pub color: Color,
}

impl ColorStop {
    /// Creates an anchor at `stop` with the given color.
    #[must_use]
    pub const fn new(stop: f64, color: Color) -> Self {
        Self { stop, color }
    }
}

/// Piecewise-linear color ramp over a list of anchor stops.
///
/// Anchors are kept sorted by *descending* stop. Evaluating at a ratio finds
/// the bracketing anchor pair and blends their colors channel-wise; ratios at
/// an anchor return that anchor's color exactly, and ratios beyond either end
/// are pinned to the end colors.
///
/// ```rust
/// use peniko::Color;
/// use typegap_encode::{ColorStop, SequentialColor};
///
/// let ramp = SequentialColor::new(vec![
///     ColorStop::new(1.0, Color::from_rgb8(42, 157, 143)),
///     ColorStop::new(0.0, Color::from_rgb8(199, 72, 72)),
/// ])
/// .unwrap();
/// assert_eq!(
///     ramp.eval(1.0).to_rgba8(),
///     Color::from_rgb8(42, 157, 143).to_rgba8(),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct SequentialColor {
    /// Sorted by descending stop.
    stops: Vec<ColorStop>,
}

impl SequentialColor {
    /// Builds a ramp from the given anchors.
    ///
    /// The anchors may arrive in any order; they are sorted by descending
    /// stop at construction. Stops are expected to be finite.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyRampError`] when no anchors are supplied.
    pub fn new(mut stops: Vec<ColorStop>) -> Result<Self, EmptyRampError> {
        if stops.is_empty() {
            return Err(EmptyRampError);
        }
        stops.sort_by(|a, b| b.stop.total_cmp(&a.stop));
        Ok(Self { stops })
    }

    /// Returns the anchors in descending-stop order.
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Evaluates the ramp at `ratio`.
    ///
    /// Ratios above the highest stop return the highest anchor's color;
    /// ratios below the lowest stop return the lowest anchor's color.
    #[must_use]
    pub fn eval(&self, ratio: f64) -> Color {
        let first = self.stops[0];
        if ratio >= first.stop {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (upper, lower) = (pair[0], pair[1]);
            if ratio >= lower.stop {
                // Anchor hits are returned verbatim so interpolation error
                // can never shift a defined palette color.
                if ratio == upper.stop {
                    return upper.color;
                }
                if ratio == lower.stop {
                    return lower.color;
                }
                let t = (ratio - lower.stop) / (upper.stop - lower.stop);
                return blend(lower.color, upper.color, t);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

/// Blends `lower` toward `upper` by `t`, each channel independently.
fn blend(lower: Color, upper: Color, t: f64) -> Color {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "interpolation parameter is in [0, 1]; f32 precision is ample for 8-bit channels"
    )]
    let t = t as f32;
    let l = lower.components;
    let u = upper.components;
    Color::new([
        l[0] + t * (u[0] - l[0]),
        l[1] + t * (u[1] - l[1]),
        l[2] + t * (u[2] - l[2]),
        l[3] + t * (u[3] - l[3]),
    ])
}
