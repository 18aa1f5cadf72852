// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typegap Style: the one visual configuration value.
//!
//! Every Typegap transform that needs a threshold, a palette, or a size
//! range receives it from a [`VisualConfig`] passed in explicitly. There is
//! no module-level singleton and nothing mutable: tests and alternate
//! renderings substitute their own configuration by constructing a
//! different value.
//!
//! The defaults reproduce the constants the source visualizations agree on:
//! Latin as the reference script, the 2x/10x inequality cuts, a 72-pixel
//! eye-chart size range, the five status colors, and the six-anchor
//! teal-to-red coverage ramp.
//!
//! ```rust
//! use typegap_status::StatusCategory;
//! use typegap_style::VisualConfig;
//!
//! let config = VisualConfig::default();
//! let classifier = config.classifier();
//! assert_eq!(classifier.reference_code(), "Latn");
//!
//! let palette = &config.status_palette;
//! assert_ne!(
//!     palette.color(StatusCategory::Dominant).to_rgba8(),
//!     palette.color(StatusCategory::Neglected).to_rgba8(),
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use typegap_encode::{
    ColorStop, EmptyRampError, InvalidReferenceError, ProportionalSizer, SequentialColor,
};
use typegap_status::{StatusCategory, StatusClassifier, Thresholds};

/// One color per status category.
#[derive(Copy, Clone, Debug)]
pub struct StatusPalette {
    /// Color of the reference script.
    pub dominant: Color,
    /// Color of near-parity scripts.
    pub privileged: Color,
    /// Color of moderately unequal scripts.
    pub struggling: Color,
    /// Color of severely unequal scripts.
    pub neglected: Color,
    /// Color of Noto-dependent scripts.
    pub noto_only: Color,
}

impl StatusPalette {
    /// Returns the color for a category.
    #[must_use]
    pub const fn color(&self, category: StatusCategory) -> Color {
        match category {
            StatusCategory::Dominant => self.dominant,
            StatusCategory::Privileged => self.privileged,
            StatusCategory::Struggling => self.struggling,
            StatusCategory::Neglected => self.neglected,
            StatusCategory::NotoOnly => self.noto_only,
        }
    }
}

impl Default for StatusPalette {
    /// The dark-background status colors of the bubble-chart notebooks:
    /// cyan for the reference, green/orange/red for the inequality bands,
    /// purple for Noto dependency.
    fn default() -> Self {
        Self {
            dominant: Color::from_rgb8(0x4f, 0xc3, 0xf7),
            privileged: Color::from_rgb8(0x66, 0xbb, 0x6a),
            struggling: Color::from_rgb8(0xff, 0xa7, 0x26),
            neglected: Color::from_rgb8(0xef, 0x53, 0x50),
            noto_only: Color::from_rgb8(0xab, 0x47, 0xbc),
        }
    }
}

/// Immutable visual configuration, passed explicitly into every transform.
#[derive(Clone, Debug)]
pub struct VisualConfig {
    /// Code of the reference script all ratios are measured against.
    pub reference_code: String,
    /// Inequality-ratio cut points between status bands.
    pub thresholds: Thresholds,
    /// Visibility floor for proportional sizing, in rendered units.
    pub min_size: f64,
    /// Size the reference value renders at, in rendered units.
    pub max_size: f64,
    /// Anchors of the coverage-ratio color ramp.
    pub ramp_stops: Vec<ColorStop>,
    /// Colors keyed by status category.
    pub status_palette: StatusPalette,
}

impl VisualConfig {
    /// Builds the status classifier this configuration describes.
    #[must_use]
    pub fn classifier(&self) -> StatusClassifier {
        StatusClassifier::new(self.reference_code.clone(), self.thresholds)
    }

    /// Builds the coverage-ratio color ramp.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyRampError`] when `ramp_stops` is empty.
    pub fn ramp(&self) -> Result<SequentialColor, EmptyRampError> {
        SequentialColor::new(self.ramp_stops.clone())
    }

    /// Builds a proportional sizer against the given reference value using
    /// this configuration's size range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidReferenceError`] when `reference` is not strictly
    /// positive.
    pub fn sizer(&self, reference: f64) -> Result<ProportionalSizer, InvalidReferenceError> {
        ProportionalSizer::new(reference, self.min_size, self.max_size)
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            reference_code: String::from("Latn"),
            thresholds: Thresholds::default(),
            min_size: 1.0,
            max_size: 72.0,
            ramp_stops: default_ramp_stops(),
            status_palette: StatusPalette::default(),
        }
    }
}

/// The six-anchor teal-to-red ramp of the eye-chart visualization, keyed by
/// coverage ratio (share of the reference script's font count).
fn default_ramp_stops() -> Vec<ColorStop> {
    [
        (1.0, (42, 157, 143)),
        (0.15, (65, 179, 163)),
        (0.05, (233, 196, 106)),
        (0.02, (244, 162, 97)),
        (0.01, (231, 111, 81)),
        (0.0, (199, 72, 72)),
    ]
    .into_iter()
    .map(|(stop, (r, g, b))| ColorStop::new(stop, Color::from_rgb8(r, g, b)))
    .collect()
}
