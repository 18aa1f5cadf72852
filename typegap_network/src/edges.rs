// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared-font edge derivation.

use std::collections::BTreeMap;

use typegap_dataset::DatasetIndex;

/// Undirected script↔script edge weighted by shared fonts.
///
/// Endpoints are ordered so that `source < target` lexicographically; the
/// pair is the identity of the edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NetworkEdge {
    /// Lexicographically smaller endpoint code.
    pub source: String,
    /// Lexicographically larger endpoint code.
    pub target: String,
    /// Number of fonts supporting both endpoints.
    pub weight: u32,
}

/// Derives the co-occurrence edges of an index: one edge per script pair
/// that shares at least one font, weighted by the shared count.
///
/// Output is sorted by (source, target), so repeated runs over the same
/// index produce identical edge lists.
#[must_use]
pub fn shared_font_edges(index: &DatasetIndex) -> Vec<NetworkEdge> {
    let mut pairs: BTreeMap<(String, String), u32> = BTreeMap::new();
    for font in index.fonts() {
        let scripts = &font.scripts;
        for i in 0..scripts.len() {
            for j in (i + 1)..scripts.len() {
                let (a, b) = if scripts[i] <= scripts[j] {
                    (&scripts[i], &scripts[j])
                } else {
                    (&scripts[j], &scripts[i])
                };
                *pairs.entry((a.clone(), b.clone())).or_insert(0) += 1;
            }
        }
    }
    pairs
        .into_iter()
        .map(|((source, target), weight)| NetworkEdge {
            source,
            target,
            weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use typegap_dataset::DatasetIndex;

    use super::shared_font_edges;

    #[test]
    fn counts_cooccurring_fonts_per_pair() {
        let index = DatasetIndex::from_json(
            r#"{
                "scripts": {
                    "Latn": { "font_count": 3 },
                    "Cyrl": { "font_count": 2 },
                    "Grek": { "font_count": 1 }
                },
                "fonts": [
                    { "family": "A", "category": "sans-serif",
                      "scripts": ["Latn", "Cyrl", "Grek"] },
                    { "family": "B", "category": "serif",
                      "scripts": ["Cyrl", "Latn"] },
                    { "family": "C", "category": "serif", "scripts": ["Latn"] }
                ]
            }"#,
        )
        .unwrap();
        let edges = shared_font_edges(&index);
        let summary: Vec<(&str, &str, u32)> = edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str(), e.weight))
            .collect();
        assert_eq!(
            summary,
            [
                ("Cyrl", "Grek", 1),
                ("Cyrl", "Latn", 2),
                ("Grek", "Latn", 1),
            ]
        );
    }

    #[test]
    fn single_script_fonts_produce_no_edges() {
        let index = DatasetIndex::from_json(
            r#"{
                "scripts": { "Latn": { "font_count": 1 } },
                "fonts": [
                    { "family": "A", "category": "sans-serif", "scripts": ["Latn"] }
                ]
            }"#,
        )
        .unwrap();
        assert!(shared_font_edges(&index).is_empty());
    }
}
