// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-weight coverage aggregation for ridge-style encodings.

use std::collections::BTreeMap;

use crate::index::DatasetIndex;

/// The nine standard weight values of the upstream font service.
pub const STANDARD_WEIGHTS: [u16; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Number of fonts covering one (script, weight) combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightCell {
    /// Script code.
    pub script: String,
    /// Standard weight value.
    pub weight: u16,
    /// Number of fonts declaring that weight for that script.
    pub count: u32,
}

/// Fonts-per-weight grid over the scripts of an index.
///
/// Ridge and heatmap encodings consume this as plain data: one cell per
/// (script, weight) combination that at least one font covers, in
/// (script, weight) order. Non-standard weight values are ignored, matching
/// the upstream aggregation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightCoverage {
    cells: Vec<WeightCell>,
}

impl WeightCoverage {
    /// Aggregates coverage over all fonts of the index.
    #[must_use]
    pub fn of_all(index: &DatasetIndex) -> Self {
        Self::build(index, false)
    }

    /// Aggregates coverage over Noto fonts only.
    ///
    /// This is the cut the ridge visualization uses: how far the rescue
    /// family alone carries each script across the weight axis.
    #[must_use]
    pub fn of_noto(index: &DatasetIndex) -> Self {
        Self::build(index, true)
    }

    fn build(index: &DatasetIndex, noto_only: bool) -> Self {
        let mut counts: BTreeMap<(String, u16), u32> = BTreeMap::new();
        for font in index.fonts() {
            if noto_only && !font.is_noto {
                continue;
            }
            for script in &font.scripts {
                for &weight in &font.weights {
                    if STANDARD_WEIGHTS.contains(&weight) {
                        *counts.entry((script.clone(), weight)).or_insert(0) += 1;
                    }
                }
            }
        }
        let cells = counts
            .into_iter()
            .map(|((script, weight), count)| WeightCell {
                script,
                weight,
                count,
            })
            .collect();
        Self { cells }
    }

    /// The populated cells, in (script, weight) order.
    #[must_use]
    pub fn cells(&self) -> &[WeightCell] {
        &self.cells
    }

    /// Count for one (script, weight) combination; zero when uncovered.
    #[must_use]
    pub fn count(&self, script: &str, weight: u16) -> u32 {
        self.cells
            .binary_search_by(|cell| {
                (cell.script.as_str(), cell.weight).cmp(&(script, weight))
            })
            .map(|idx| self.cells[idx].count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::{STANDARD_WEIGHTS, WeightCoverage};
    use crate::index::DatasetIndex;

    fn index() -> DatasetIndex {
        DatasetIndex::from_json(
            r#"{
                "scripts": {
                    "Latn": { "font_count": 2 },
                    "Cher": { "font_count": 1 }
                },
                "fonts": [
                    { "family": "Inter", "category": "sans-serif",
                      "scripts": ["Latn"], "weights": ["400", "700", "123"] },
                    { "family": "Noto Sans Cherokee", "category": "sans-serif",
                      "scripts": ["Cher"], "weights": ["400"], "is_noto": true }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn aggregates_standard_weights_only() {
        let coverage = WeightCoverage::of_all(&index());
        assert_eq!(coverage.count("Latn", 400), 1);
        assert_eq!(coverage.count("Latn", 700), 1);
        // The non-standard 123 weight is ignored.
        assert_eq!(coverage.cells().len(), 3);
        assert!(STANDARD_WEIGHTS.contains(&coverage.cells()[0].weight));
    }

    #[test]
    fn noto_cut_excludes_other_fonts() {
        let coverage = WeightCoverage::of_noto(&index());
        assert_eq!(coverage.count("Cher", 400), 1);
        assert_eq!(coverage.count("Latn", 400), 0);
    }

    #[test]
    fn uncovered_cells_read_zero() {
        let coverage = WeightCoverage::of_all(&index());
        assert_eq!(coverage.count("Latn", 900), 0);
        assert_eq!(coverage.count("Xxxx", 400), 0);
    }
}
