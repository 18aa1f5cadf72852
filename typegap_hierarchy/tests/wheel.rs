// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel layout end to end: dataset JSON in, closed arcs out.

use core::f64::consts::TAU;

use typegap_dataset::{DatasetIndex, FontCategory};
use typegap_hierarchy::{build, partition};

const PAYLOAD: &str = r#"{
    "scripts": {
        "Latn": { "name": "Latin", "speakers": 5428000000 },
        "Arab": { "name": "Arabic", "speakers": 660000000 },
        "Deva": { "name": "Devanagari", "speakers": 608000000 }
    },
    "fonts": [
        { "family": "Inter", "category": "sans-serif", "scripts": ["Latn"] },
        { "family": "Lora", "category": "serif", "scripts": ["Latn"] },
        { "family": "Caveat", "category": "handwriting", "scripts": ["Latn"] },
        { "family": "Amiri", "category": "serif", "scripts": ["Arab"] },
        { "family": "Cairo", "category": "sans-serif", "scripts": ["Arab", "Latn"] },
        { "family": "Hind", "category": "sans-serif", "scripts": ["Deva", "Latn"] }
    ]
}"#;

#[test]
fn every_level_of_the_wheel_closes() {
    let index = DatasetIndex::from_json(PAYLOAD).unwrap();
    let root = build(&index, &FontCategory::ALL).unwrap();
    assert!(root.closure_holds());

    // Root value is the total number of (script, font) support pairs.
    assert_eq!(root.value, 8.0);
}

#[test]
fn arcs_tile_the_full_circle_per_sibling_group() {
    let index = DatasetIndex::from_json(PAYLOAD).unwrap();
    let root = build(&index, &FontCategory::ALL).unwrap();
    let arcs = partition(&root, 0.0..TAU);

    // Group arcs by parent and verify each group tiles its parent's span.
    for (i, parent) in arcs.iter().enumerate() {
        let children: Vec<_> = arcs.iter().filter(|a| a.parent == Some(i)).collect();
        if children.is_empty() {
            continue;
        }
        assert_eq!(children.first().unwrap().span.start, parent.span.start);
        assert_eq!(children.last().unwrap().span.end, parent.span.end);
        for pair in children.windows(2) {
            assert_eq!(pair[0].span.end, pair[1].span.start);
        }
    }
}

#[test]
fn arc_sizes_reflect_font_shares() {
    let index = DatasetIndex::from_json(PAYLOAD).unwrap();
    let root = build(&index, &FontCategory::ALL).unwrap();
    let arcs = partition(&root, 0.0..TAU);

    let latin = arcs.iter().find(|a| a.name == "Latin").unwrap();
    let arabic = arcs.iter().find(|a| a.name == "Arabic").unwrap();
    let latin_sweep = latin.span.end - latin.span.start;
    let arabic_sweep = arabic.span.end - arabic.span.start;

    // Latin supports 5 of the 8 pairs, Arabic 2.
    assert!((latin_sweep - TAU * 5.0 / 8.0).abs() < 1e-12);
    assert!((arabic_sweep - TAU * 2.0 / 8.0).abs() < 1e-12);
}
