// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serde-facing payload shapes.
//!
//! These mirror the master dataset JSON as it arrives over the wire, with
//! every per-record field optional or defaulted. They exist to be decoded
//! and immediately handed to [`DatasetIndex::build`](crate::DatasetIndex);
//! downstream code works with the resolved records in
//! [`records`](crate::ScriptRecord) instead.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level dataset payload.
///
/// `scripts` and `fonts` are required; the metric and timeline blocks are
/// optional and merged into [`ScriptRecord`](crate::ScriptRecord)s during
/// the index build.
#[derive(Clone, Debug, Deserialize)]
pub struct RawDataset {
    /// Script attributes keyed by script code.
    pub scripts: BTreeMap<String, RawScript>,
    /// Font family records, in upstream order.
    pub fonts: Vec<RawFont>,
    /// Precomputed inequality metrics, if the payload carries them.
    #[serde(default)]
    pub inequality_metrics: Vec<RawInequalityMetric>,
    /// Digital-age timeline entries, if the payload carries them.
    #[serde(default)]
    pub digital_timeline: RawTimeline,
}

/// One script as it appears in the payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawScript {
    /// Display name; defaults to the script code when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Population estimate.
    #[serde(default)]
    pub speakers: u64,
    /// Declared supporting-font count; recomputed from `fonts` when absent.
    #[serde(default)]
    pub font_count: Option<u32>,
    /// Declared Noto family count.
    #[serde(default)]
    pub noto_font_count: Option<u32>,
    /// Noto family names; used as a count fallback when
    /// `noto_font_count` is absent.
    #[serde(default)]
    pub noto_families: Vec<String>,
    /// Language identifiers using this script.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Country identifiers where this script is used.
    #[serde(default)]
    pub countries: Vec<String>,
    /// Right-to-left flag.
    #[serde(default)]
    pub rtl: bool,
}

/// One font family as it appears in the payload.
#[derive(Clone, Debug, Deserialize)]
pub struct RawFont {
    /// Family name, the unique (case-sensitive) key.
    pub family: String,
    /// Category string; must name one of the five known categories or the
    /// record is dropped.
    #[serde(default)]
    pub category: Option<String>,
    /// Script codes this family supports.
    #[serde(default)]
    pub scripts: Vec<String>,
    /// Declared weights. Upstream emits these as strings, older dumps as
    /// numbers; both are accepted.
    #[serde(default)]
    pub weights: Vec<RawWeight>,
    /// Noto membership; inferred from the family name when absent.
    #[serde(default)]
    pub is_noto: Option<bool>,
}

/// A weight value that may arrive as `"400"` or `400`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawWeight {
    /// Numeric form.
    Number(u16),
    /// String form.
    Text(String),
}

impl RawWeight {
    /// Normalizes to a numeric weight, if the value parses as one.
    #[must_use]
    pub fn value(&self) -> Option<u16> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One entry of the precomputed inequality metrics block.
#[derive(Clone, Debug, Deserialize)]
pub struct RawInequalityMetric {
    /// Script code the metrics belong to.
    pub code: String,
    /// Availability ratio relative to the reference script; `null` when the
    /// upstream computation had no data to work with.
    #[serde(default)]
    pub inequality_ratio: Option<f64>,
    /// Fonts per hundred million speakers.
    #[serde(default)]
    pub fonts_per_100m: Option<f64>,
}

/// Digital-age timeline block.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawTimeline {
    /// Timeline entries keyed by script code.
    #[serde(default)]
    pub scripts: BTreeMap<String, RawTimelineEntry>,
}

/// Timeline data for one script.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawTimelineEntry {
    /// Year the script entered digital typography.
    #[serde(default)]
    pub digital_age_start: Option<i32>,
    /// First appearance on the hosted font service; its year is the
    /// fallback for a missing `digital_age_start`.
    #[serde(default)]
    pub first_google_fonts: Option<RawYearRef>,
}

/// A record that only contributes a year.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawYearRef {
    /// The year, when known.
    #[serde(default)]
    pub year: Option<i32>,
}
