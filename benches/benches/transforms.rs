// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the hierarchy and network transforms over a synthetic
//! dataset shaped like the real one: a couple hundred scripts, a long tail
//! of single-script fonts, and a cluster of pan-script families.

use std::collections::BTreeMap;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use typegap_dataset::{
    DatasetIndex, DecodeOptions, FontCategory, RawDataset, RawFont, RawScript, RawTimeline,
    RawWeight,
};
use typegap_encode::{LinearScale, LogScale, SqrtScale};
use typegap_hierarchy::{build, partition};
use typegap_network::{Axis, Metric, Projector, shared_font_edges};

const CATEGORIES: [&str; 5] = ["sans-serif", "serif", "display", "handwriting", "monospace"];

fn synthetic_index(script_count: usize, font_count: usize) -> DatasetIndex {
    let codes: Vec<String> = (0..script_count).map(|i| format!("S{i:03}")).collect();

    let mut scripts = BTreeMap::new();
    for (i, code) in codes.iter().enumerate() {
        scripts.insert(
            code.clone(),
            RawScript {
                name: Some(format!("Script {i}")),
                speakers: (i as u64 + 1) * 1_000_000,
                ..RawScript::default()
            },
        );
    }

    let mut fonts = Vec::with_capacity(font_count);
    for i in 0..font_count {
        // Every 16th family spans several scripts; the rest support one.
        let supported = if i % 16 == 0 {
            (0..5).map(|k| codes[(i + k * 7) % codes.len()].clone()).collect()
        } else {
            vec![codes[i % codes.len()].clone()]
        };
        fonts.push(RawFont {
            family: format!("Family {i}"),
            category: Some(CATEGORIES[i % CATEGORIES.len()].to_owned()),
            scripts: supported,
            weights: vec![RawWeight::Number(400), RawWeight::Number(700)],
            is_noto: Some(i % 5 == 0),
        });
    }

    let raw = RawDataset {
        scripts,
        fonts,
        inequality_metrics: Vec::new(),
        digital_timeline: RawTimeline::default(),
    };
    DatasetIndex::build(raw, DecodeOptions::default())
}

fn bench_hierarchy(c: &mut Criterion) {
    let index = synthetic_index(200, 2000);
    c.bench_function("hierarchy_build_200x2000", |b| {
        b.iter(|| build(black_box(&index), &FontCategory::ALL).unwrap());
    });

    let tree = build(&index, &FontCategory::ALL).unwrap();
    c.bench_function("hierarchy_partition_200x2000", |b| {
        b.iter(|| partition(black_box(&tree), 0.0..core::f64::consts::TAU));
    });
}

fn bench_network(c: &mut Criterion) {
    let index = synthetic_index(200, 2000);
    c.bench_function("shared_font_edges_200x2000", |b| {
        b.iter(|| shared_font_edges(black_box(&index)));
    });

    let edges = shared_font_edges(&index);
    let projector = Projector {
        x: Axis::new(
            Metric::DigitalAgeStart,
            LinearScale::new(1980.0..2020.0, 0.0..1060.0).unwrap(),
        ),
        y: Axis::new(
            Metric::InequalityRatio,
            LogScale::new(0.3..100.0, 620.0..0.0).unwrap().clamped(),
        ),
        size: Axis::new(
            Metric::FontCount,
            SqrtScale::new(0.0..2000.0, 3.0..45.0).unwrap(),
        ),
    };
    c.bench_function("project_200x2000", |b| {
        b.iter(|| projector.project(black_box(&index), black_box(&edges)));
    });
}

criterion_group!(benches, bench_hierarchy, bench_network);
criterion_main!(benches);
