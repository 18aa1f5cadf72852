// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typegap Status: support-status classification for writing scripts.
//!
//! Given a script's coverage metrics, [`StatusClassifier`] assigns exactly
//! one [`StatusCategory`] by walking an ordered rule ladder; the first rule
//! that matches is authoritative. The ladder, with its default thresholds:
//!
//! 1. The configured reference script (conventionally Latin) is
//!    [`StatusCategory::Dominant`], whatever its own metrics say.
//! 2. A script whose fonts would all but vanish without the Noto rescue
//!    family (`font_count <= noto_family_count + 1`) is
//!    [`StatusCategory::NotoOnly`].
//! 3. Inequality ratio below the privileged threshold (default 2x) is
//!    [`StatusCategory::Privileged`].
//! 4. Inequality ratio below the struggling threshold (default 10x) is
//!    [`StatusCategory::Struggling`].
//! 5. Everything else is [`StatusCategory::Neglected`].
//!
//! The classifier is a total function for scripts with at least one font;
//! zero-font scripts are filtered out upstream when the dataset index is
//! built and never reach it.
//!
//! Thresholds and the reference code are injected configuration, never
//! constants baked into the rules, so alternate cuts of the same dataset can
//! disagree about where "struggling" ends without code changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Discrete support status of a script, derived from its metrics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// The reference script itself.
    Dominant,
    /// Near parity with the reference script.
    Privileged,
    /// Moderate inequality relative to the reference script.
    Struggling,
    /// Severe inequality relative to the reference script.
    Neglected,
    /// Would have effectively no fonts without the Noto family.
    NotoOnly,
}

impl StatusCategory {
    /// All categories, in legend display order.
    pub const ALL: [Self; 5] = [
        Self::Dominant,
        Self::Privileged,
        Self::Struggling,
        Self::Neglected,
        Self::NotoOnly,
    ];

    /// Short lower-case label, as used in legends and palette keys.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dominant => "dominant",
            Self::Privileged => "privileged",
            Self::Struggling => "struggling",
            Self::Neglected => "neglected",
            Self::NotoOnly => "noto-only",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inequality-ratio cut points between status bands.
///
/// A ratio strictly below `privileged` classifies as privileged; strictly
/// below `struggling` as struggling; anything else as neglected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Thresholds {
    /// Upper bound (exclusive) of the privileged band.
    pub privileged: f64,
    /// Upper bound (exclusive) of the struggling band.
    pub struggling: f64,
}

impl Default for Thresholds {
    /// The 2x / 10x cuts used across the source visualizations.
    fn default() -> Self {
        Self {
            privileged: 2.0,
            struggling: 10.0,
        }
    }
}

/// Coverage metrics of one script, as the classifier sees them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScriptMetrics<'a> {
    /// Script code, e.g. `"Latn"`.
    pub code: &'a str,
    /// Number of fonts supporting the script. Expected to be positive;
    /// zero-font scripts are excluded before classification.
    pub font_count: u32,
    /// Number of those fonts belonging to the Noto family.
    pub noto_family_count: u32,
    /// Font-availability ratio relative to the reference script; 1 means
    /// parity.
    pub inequality_ratio: f64,
}

/// Ordered-rule status classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusClassifier {
    reference_code: String,
    thresholds: Thresholds,
}

impl StatusClassifier {
    /// Creates a classifier for the given reference script and thresholds.
    #[must_use]
    pub fn new(reference_code: impl Into<String>, thresholds: Thresholds) -> Self {
        Self {
            reference_code: reference_code.into(),
            thresholds,
        }
    }

    /// Returns the reference script code.
    #[must_use]
    pub fn reference_code(&self) -> &str {
        &self.reference_code
    }

    /// Returns the configured thresholds.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Classifies one script. First matching rule wins.
    #[must_use]
    pub fn classify(&self, metrics: ScriptMetrics<'_>) -> StatusCategory {
        if metrics.code == self.reference_code {
            return StatusCategory::Dominant;
        }
        if metrics.font_count <= metrics.noto_family_count + 1 {
            return StatusCategory::NotoOnly;
        }
        if metrics.inequality_ratio < self.thresholds.privileged {
            return StatusCategory::Privileged;
        }
        if metrics.inequality_ratio < self.thresholds.struggling {
            return StatusCategory::Struggling;
        }
        StatusCategory::Neglected
    }
}

/// Per-category counts over a classified population.
///
/// The headline numbers of the source notebooks ("N scripts survive only on
/// Noto", "M scripts neglected") are folds of this shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusSummary {
    /// Count of [`StatusCategory::Dominant`] scripts.
    pub dominant: usize,
    /// Count of [`StatusCategory::Privileged`] scripts.
    pub privileged: usize,
    /// Count of [`StatusCategory::Struggling`] scripts.
    pub struggling: usize,
    /// Count of [`StatusCategory::Neglected`] scripts.
    pub neglected: usize,
    /// Count of [`StatusCategory::NotoOnly`] scripts.
    pub noto_only: usize,
}

impl StatusSummary {
    /// Tallies categories from an iterator of classifications.
    pub fn tally(categories: impl IntoIterator<Item = StatusCategory>) -> Self {
        let mut summary = Self::default();
        for category in categories {
            match category {
                StatusCategory::Dominant => summary.dominant += 1,
                StatusCategory::Privileged => summary.privileged += 1,
                StatusCategory::Struggling => summary.struggling += 1,
                StatusCategory::Neglected => summary.neglected += 1,
                StatusCategory::NotoOnly => summary.noto_only += 1,
            }
        }
        summary
    }

    /// Returns the count for one category.
    #[must_use]
    pub const fn count(&self, category: StatusCategory) -> usize {
        match category {
            StatusCategory::Dominant => self.dominant,
            StatusCategory::Privileged => self.privileged,
            StatusCategory::Struggling => self.struggling,
            StatusCategory::Neglected => self.neglected,
            StatusCategory::NotoOnly => self.noto_only,
        }
    }

    /// Total number of classified scripts.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.dominant + self.privileged + self.struggling + self.neglected + self.noto_only
    }
}
