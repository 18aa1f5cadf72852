// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dataset index: decode once, look up everywhere.

use hashbrown::{HashMap, HashSet};

use crate::error::MalformedDatasetError;
use crate::raw::{RawDataset, RawWeight};
use crate::records::{FontCategory, FontRecord, ScriptRecord};

/// Defaults applied to missing per-record fields during the build.
///
/// The fallback values are configuration, not facts: the source notebooks
/// disagree about them (some use 2010 for the digital-age start, some none;
/// one uses a 999 sentinel for unknown inequality), so callers that need a
/// different cut override these instead of editing the decode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecodeOptions {
    /// Year assumed for scripts with no timeline data.
    pub fallback_digital_age_start: i32,
    /// Ratio assumed for scripts with no computable inequality metric.
    pub fallback_inequality_ratio: f64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            fallback_digital_age_start: 2010,
            fallback_inequality_ratio: 1.0,
        }
    }
}

/// Read-only lookup structures over one dataset snapshot.
///
/// Scripts iterate in code order; fonts keep their upstream order, and
/// [`DatasetIndex::fonts_for_script`] is a stable filter over that order (no
/// implicit sort). The index never mutates after [`DatasetIndex::build`].
#[derive(Clone, Debug)]
pub struct DatasetIndex {
    /// In code order.
    scripts: Vec<ScriptRecord>,
    script_slots: HashMap<String, usize>,
    /// In upstream order.
    fonts: Vec<FontRecord>,
    /// Indices into `fonts`, ascending, per script code.
    fonts_by_script: HashMap<String, Vec<usize>>,
}

impl DatasetIndex {
    /// Decodes a JSON payload and builds the index with default options.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedDatasetError`] when the payload does not parse or
    /// lacks the required top-level `scripts`/`fonts` keys.
    pub fn from_json(json: &str) -> Result<Self, MalformedDatasetError> {
        Self::from_json_with(json, DecodeOptions::default())
    }

    /// Decodes a JSON payload and builds the index with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedDatasetError`] when the payload does not parse or
    /// lacks the required top-level `scripts`/`fonts` keys.
    pub fn from_json_with(
        json: &str,
        options: DecodeOptions,
    ) -> Result<Self, MalformedDatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(MalformedDatasetError::new)?;
        Ok(Self::build(raw, options))
    }

    /// Builds the index from an already decoded payload.
    ///
    /// The required top-level structure is guaranteed by the [`RawDataset`]
    /// type, so this step itself cannot fail; every per-record problem is
    /// resolved by a documented default or by dropping the record:
    ///
    /// - Fonts with an unrecognized category, or with no resolvable script
    ///   reference, are dropped.
    /// - Dangling script references are removed from the surviving fonts.
    /// - Scripts whose effective font count is zero are excluded.
    /// - `noto_family_count` is capped at `font_count` so the record
    ///   invariant holds even for inconsistent payloads.
    #[must_use]
    pub fn build(raw: RawDataset, options: DecodeOptions) -> Self {
        let known: HashSet<&str> = raw.scripts.keys().map(String::as_str).collect();

        // Normalize fonts against the declared script set.
        let mut normalized: Vec<FontRecord> = Vec::with_capacity(raw.fonts.len());
        for font in &raw.fonts {
            let Some(category) = font.category.as_deref().and_then(FontCategory::parse) else {
                continue;
            };
            let mut seen: HashSet<&str> = HashSet::new();
            let scripts: Vec<String> = font
                .scripts
                .iter()
                .filter(|code| known.contains(code.as_str()) && seen.insert(code.as_str()))
                .cloned()
                .collect();
            if scripts.is_empty() {
                continue;
            }
            let mut weights: Vec<u16> = font.weights.iter().filter_map(RawWeight::value).collect();
            weights.sort_unstable();
            weights.dedup();
            let is_noto = font
                .is_noto
                .unwrap_or_else(|| font.family.to_ascii_lowercase().starts_with("noto"));
            normalized.push(FontRecord {
                family: font.family.clone(),
                category,
                scripts,
                weights,
                is_noto,
            });
        }

        // Count support per script for the declared-count fallbacks.
        let mut computed: HashMap<String, (u32, u32)> = HashMap::new();
        for font in &normalized {
            for code in &font.scripts {
                let entry = computed.entry(code.clone()).or_insert((0, 0));
                entry.0 += 1;
                if font.is_noto {
                    entry.1 += 1;
                }
            }
        }

        let metrics: HashMap<&str, &crate::raw::RawInequalityMetric> = raw
            .inequality_metrics
            .iter()
            .map(|m| (m.code.as_str(), m))
            .collect();

        // Resolve script records, excluding zero-font scripts.
        let mut scripts = Vec::new();
        let mut script_slots = HashMap::new();
        for (code, script) in &raw.scripts {
            let (computed_fonts, computed_noto) =
                computed.get(code.as_str()).copied().unwrap_or((0, 0));
            let font_count = script.font_count.unwrap_or(computed_fonts);
            if font_count == 0 {
                continue;
            }
            let declared_noto = script.noto_font_count.or_else(|| {
                if script.noto_families.is_empty() {
                    None
                } else {
                    Some(u32::try_from(script.noto_families.len()).unwrap_or(u32::MAX))
                }
            });
            let noto_family_count = declared_noto.unwrap_or(computed_noto).min(font_count);

            let metric = metrics.get(code.as_str());
            let inequality_ratio = metric
                .and_then(|m| m.inequality_ratio)
                .filter(|ratio| *ratio > 0.0)
                .unwrap_or(options.fallback_inequality_ratio);
            let fonts_per_100m = metric.and_then(|m| m.fonts_per_100m);

            let timeline = raw.digital_timeline.scripts.get(code);
            let digital_age_start = timeline
                .and_then(|t| t.digital_age_start)
                .or_else(|| {
                    timeline
                        .and_then(|t| t.first_google_fonts.as_ref())
                        .and_then(|g| g.year)
                })
                .unwrap_or(options.fallback_digital_age_start);

            let name = match &script.name {
                Some(name) if !name.is_empty() => name.clone(),
                _ => code.clone(),
            };

            script_slots.insert(code.clone(), scripts.len());
            scripts.push(ScriptRecord {
                code: code.clone(),
                name,
                speakers: script.speakers,
                font_count,
                noto_family_count,
                languages: dedup_preserving(&script.languages),
                countries: dedup_preserving(&script.countries),
                rtl: script.rtl,
                digital_age_start,
                inequality_ratio,
                fonts_per_100m,
            });
        }

        // Strip references to excluded scripts and build the per-script
        // filter lists, upstream order preserved.
        let mut fonts = Vec::with_capacity(normalized.len());
        let mut fonts_by_script: HashMap<String, Vec<usize>> = HashMap::new();
        for mut font in normalized {
            font.scripts.retain(|code| script_slots.contains_key(code));
            if font.scripts.is_empty() {
                continue;
            }
            let idx = fonts.len();
            for code in &font.scripts {
                fonts_by_script.entry(code.clone()).or_default().push(idx);
            }
            fonts.push(font);
        }

        Self {
            scripts,
            script_slots,
            fonts,
            fonts_by_script,
        }
    }

    /// Looks up a script by code.
    ///
    /// Unknown codes return `None`, never an error: callers treat absence
    /// as "exclude from the visualization".
    #[must_use]
    pub fn script(&self, code: &str) -> Option<&ScriptRecord> {
        self.script_slots.get(code).map(|&idx| &self.scripts[idx])
    }

    /// All indexed scripts, in code order.
    #[must_use]
    pub fn scripts(&self) -> &[ScriptRecord] {
        &self.scripts
    }

    /// All indexed fonts, in upstream order.
    #[must_use]
    pub fn fonts(&self) -> &[FontRecord] {
        &self.fonts
    }

    /// Fonts supporting the given script, in upstream order.
    ///
    /// Unknown codes yield an empty iterator.
    pub fn fonts_for_script<'a>(
        &'a self,
        code: &str,
    ) -> impl Iterator<Item = &'a FontRecord> + use<'a> {
        self.fonts_by_script
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.fonts[idx])
    }
}

/// Deduplicates identifiers, keeping the first occurrence of each.
fn dedup_preserving(values: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    values
        .iter()
        .filter(|value| seen.insert(value.as_str()))
        .cloned()
        .collect()
}
