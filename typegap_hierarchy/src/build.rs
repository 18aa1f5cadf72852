// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction from the dataset index.

use core::fmt;

use smallvec::SmallVec;
use typegap_dataset::{DatasetIndex, FontCategory, FontRecord, ScriptRecord};

use crate::node::HierarchyNode;

/// Error returned when a script's declared font count disagrees with its
/// actual font partition.
///
/// This signals corrupt upstream data. It is deliberately not recoverable by
/// rescaling: a tree that silently papers over the disagreement would hide
/// the bug from the people who need to fix the dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HierarchyInvariantError {
    /// Code of the script whose partition failed.
    pub script: String,
    /// The count the script record declares.
    pub declared: u32,
    /// The count summed over the category partition.
    pub computed: u32,
}

impl fmt::Display for HierarchyInvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "script {} declares {} fonts but its category partition sums to {}",
            self.script, self.declared, self.computed
        )
    }
}

impl core::error::Error for HierarchyInvariantError {}

/// Ranking metric for [`top_scripts`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RankBy {
    /// Rank by supporting-font count.
    FontCount,
    /// Rank by speaker population.
    Speakers,
}

/// Builds the category subtree for one script.
///
/// Fonts are partitioned by category in `category_order`; categories with no
/// fonts are omitted (never emitted as zero-value placeholders), and each
/// font becomes a value-1 leaf under its category.
///
/// # Errors
///
/// Returns [`HierarchyInvariantError`] when the partition does not sum to
/// the script's declared `font_count`. The comparison covers the listed
/// categories, so pass all five (e.g. [`FontCategory::ALL`]) unless the
/// script's fonts are known to be confined to the listed subset.
pub fn script_subtree<'a>(
    script: &ScriptRecord,
    fonts: impl IntoIterator<Item = &'a FontRecord>,
    category_order: &[FontCategory],
) -> Result<HierarchyNode, HierarchyInvariantError> {
    let mut partition: SmallVec<[(FontCategory, Vec<HierarchyNode>); 5]> =
        category_order.iter().map(|&c| (c, Vec::new())).collect();

    let mut computed: u32 = 0;
    for font in fonts {
        if let Some((_, leaves)) = partition.iter_mut().find(|(c, _)| *c == font.category) {
            leaves.push(HierarchyNode::leaf(font.family.clone(), 1.0));
            computed += 1;
        }
    }

    if computed != script.font_count {
        return Err(HierarchyInvariantError {
            script: script.code.clone(),
            declared: script.font_count,
            computed,
        });
    }

    let children: Vec<HierarchyNode> = partition
        .into_iter()
        .filter(|(_, leaves)| !leaves.is_empty())
        .map(|(category, leaves)| HierarchyNode::parent(category.as_str(), leaves))
        .collect();

    Ok(HierarchyNode::parent(script.name.clone(), children))
}

/// Builds the full script → category → font tree.
///
/// Scripts appear in index (code) order under a single root.
///
/// # Errors
///
/// Returns the first [`HierarchyInvariantError`] encountered. Callers that
/// want to keep the healthy scripts instead use [`build_tolerant`] or call
/// [`script_subtree`] per entity.
pub fn build(
    index: &DatasetIndex,
    category_order: &[FontCategory],
) -> Result<HierarchyNode, HierarchyInvariantError> {
    let mut children = Vec::with_capacity(index.scripts().len());
    for script in index.scripts() {
        children.push(script_subtree(
            script,
            index.fonts_for_script(&script.code),
            category_order,
        )?);
    }
    Ok(HierarchyNode::parent("All Scripts", children))
}

/// Builds the tree, skipping scripts whose partition is corrupt.
///
/// Returns the tree over the healthy scripts together with the errors for
/// the skipped ones, so one bad record does not take down the whole wheel.
#[must_use]
pub fn build_tolerant(
    index: &DatasetIndex,
    category_order: &[FontCategory],
) -> (HierarchyNode, Vec<HierarchyInvariantError>) {
    let mut children = Vec::with_capacity(index.scripts().len());
    let mut errors = Vec::new();
    for script in index.scripts() {
        match script_subtree(script, index.fonts_for_script(&script.code), category_order) {
            Ok(subtree) => children.push(subtree),
            Err(err) => errors.push(err),
        }
    }
    (HierarchyNode::parent("All Scripts", children), errors)
}

/// Returns the top `n` scripts of the index by the given metric.
///
/// Ties break by script code, ascending, so fixture-driven tests and
/// repeated runs agree on the selection.
#[must_use]
pub fn top_scripts<'a>(index: &'a DatasetIndex, rank: RankBy, n: usize) -> Vec<&'a ScriptRecord> {
    let mut scripts: Vec<&ScriptRecord> = index.scripts().iter().collect();
    scripts.sort_by(|a, b| {
        let primary = match rank {
            RankBy::FontCount => b.font_count.cmp(&a.font_count),
            RankBy::Speakers => b.speakers.cmp(&a.speakers),
        };
        primary.then_with(|| a.code.cmp(&b.code))
    });
    scripts.truncate(n);
    scripts
}

#[cfg(test)]
mod tests {
    use typegap_dataset::{DatasetIndex, FontCategory};

    use super::{RankBy, build, build_tolerant, top_scripts};

    fn index() -> DatasetIndex {
        DatasetIndex::from_json(
            r#"{
                "scripts": {
                    "Latn": { "name": "Latin", "speakers": 5428000000, "font_count": 3 },
                    "Arab": { "name": "Arabic", "speakers": 660000000, "font_count": 2 },
                    "Cher": { "name": "Cherokee", "speakers": 2000, "font_count": 1 }
                },
                "fonts": [
                    { "family": "Inter", "category": "sans-serif", "scripts": ["Latn"] },
                    { "family": "Lora", "category": "serif", "scripts": ["Latn"] },
                    { "family": "Fira Code", "category": "monospace", "scripts": ["Latn"] },
                    { "family": "Amiri", "category": "serif", "scripts": ["Arab"] },
                    { "family": "Cairo", "category": "sans-serif", "scripts": ["Arab"] },
                    { "family": "Noto Sans Cherokee", "category": "sans-serif", "scripts": ["Cher"] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn tree_closes_at_every_level() {
        let root = build(&index(), &FontCategory::ALL).unwrap();
        assert!(root.closure_holds());
        assert_eq!(root.value, 6.0);
    }

    #[test]
    fn categories_follow_the_given_order_and_absent_ones_are_omitted() {
        let root = build(&index(), &FontCategory::ALL).unwrap();
        let latin = root.children.iter().find(|c| c.name == "Latin").unwrap();
        let names: Vec<&str> = latin.children.iter().map(|c| c.name.as_str()).collect();
        // Display and handwriting have no Latin fonts here; they are absent,
        // not zero-value placeholders.
        assert_eq!(names, ["sans-serif", "serif", "monospace"]);
    }

    #[test]
    fn font_leaves_carry_value_one() {
        let root = build(&index(), &FontCategory::ALL).unwrap();
        let arabic = root.children.iter().find(|c| c.name == "Arabic").unwrap();
        let serif = arabic.children.iter().find(|c| c.name == "serif").unwrap();
        assert_eq!(serif.children.len(), 1);
        assert_eq!(serif.children[0].name, "Amiri");
        assert_eq!(serif.children[0].value, 1.0);
    }

    #[test]
    fn declared_count_mismatch_is_an_error_not_a_rescale() {
        let index = DatasetIndex::from_json(
            r#"{
                "scripts": { "Qaaa": { "name": "Private", "font_count": 5 } },
                "fonts": [
                    { "family": "Solo", "category": "display", "scripts": ["Qaaa"] }
                ]
            }"#,
        )
        .unwrap();
        let err = build(&index, &FontCategory::ALL).unwrap_err();
        assert_eq!(err.script, "Qaaa");
        assert_eq!(err.declared, 5);
        assert_eq!(err.computed, 1);
    }

    #[test]
    fn tolerant_build_keeps_the_healthy_scripts() {
        let index = DatasetIndex::from_json(
            r#"{
                "scripts": {
                    "Latn": { "name": "Latin", "font_count": 1 },
                    "Qaaa": { "name": "Private", "font_count": 5 }
                },
                "fonts": [
                    { "family": "Inter", "category": "sans-serif", "scripts": ["Latn"] },
                    { "family": "Solo", "category": "display", "scripts": ["Qaaa"] }
                ]
            }"#,
        )
        .unwrap();
        let (root, errors) = build_tolerant(&index, &FontCategory::ALL);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "Latin");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].script, "Qaaa");
    }

    #[test]
    fn top_scripts_rank_with_lexicographic_tie_break() {
        let idx = index();
        let by_fonts = top_scripts(&idx, RankBy::FontCount, 2);
        let codes: Vec<&str> = by_fonts.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["Latn", "Arab"]);

        let by_speakers = top_scripts(&idx, RankBy::Speakers, 10);
        let codes: Vec<&str> = by_speakers.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["Latn", "Arab", "Cher"]);
    }

    #[test]
    fn tie_break_is_by_code() {
        let index = DatasetIndex::from_json(
            r#"{
                "scripts": {
                    "Beta": { "font_count": 1 },
                    "Alfa": { "font_count": 1 }
                },
                "fonts": [
                    { "family": "Twin", "category": "display", "scripts": ["Alfa", "Beta"] }
                ]
            }"#,
        )
        .unwrap();
        let top = top_scripts(&index, RankBy::FontCount, 2);
        let codes: Vec<&str> = top.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["Alfa", "Beta"]);
    }
}
