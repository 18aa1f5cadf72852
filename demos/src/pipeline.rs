// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs the full transform pipeline over a dataset and prints the headline
//! numbers the notebooks render as stat tiles.
//!
//! Pass a path to a master dataset JSON file, or run without arguments to
//! use a small built-in sample.

use std::env;
use std::fs;
use std::process::ExitCode;

use typegap_dataset::{DatasetIndex, FontCategory};
use typegap_encode::{LinearScale, LogScale, SqrtScale};
use typegap_hierarchy::{RankBy, build_tolerant, partition, top_scripts};
use typegap_network::{Axis, Metric, Projector, shared_font_edges};
use typegap_status::{ScriptMetrics, StatusSummary};
use typegap_style::VisualConfig;

const SAMPLE: &str = include_str!("sample_dataset.json");

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pipeline: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn core::error::Error>> {
    let payload = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_owned(),
    };
    let index = DatasetIndex::from_json(&payload)?;
    let config = VisualConfig::default();

    println!(
        "dataset: {} scripts, {} fonts",
        index.scripts().len(),
        index.fonts().len()
    );

    // Status ladder.
    let classifier = config.classifier();
    let statuses: Vec<_> = index
        .scripts()
        .iter()
        .map(|script| {
            classifier.classify(ScriptMetrics {
                code: &script.code,
                font_count: script.font_count,
                noto_family_count: script.noto_family_count,
                inequality_ratio: script.inequality_ratio,
            })
        })
        .collect();
    let summary = StatusSummary::tally(statuses.iter().copied());
    println!(
        "status: {} privileged, {} struggling, {} neglected, {} noto-only",
        summary.privileged, summary.struggling, summary.neglected, summary.noto_only
    );

    // Eye-chart sizing against the reference script.
    if let Some(reference) = index.script(&config.reference_code) {
        let sizer = config.sizer(f64::from(reference.font_count))?;
        let ramp = config.ramp()?;
        println!("eye chart (reference {}):", reference.code);
        for script in top_scripts(&index, RankBy::Speakers, 8) {
            let ratio = f64::from(script.font_count) / f64::from(reference.font_count);
            let size = sizer.size(f64::from(script.font_count));
            let color = ramp.eval(ratio).to_rgba8();
            println!(
                "  {:<12} {:>4} fonts -> {:>3}px  rgb({}, {}, {})",
                script.name, script.font_count, size, color.r, color.g, color.b
            );
        }
    }

    // Sunburst wheel.
    let (wheel, skipped) = build_tolerant(&index, &FontCategory::ALL);
    let arcs = partition(&wheel, 0.0..core::f64::consts::TAU);
    println!(
        "wheel: {} arcs over {} scripts ({} skipped for bad partitions)",
        arcs.len(),
        wheel.children.len(),
        skipped.len()
    );

    // Network seed positions.
    let projector = Projector {
        x: Axis::new(
            Metric::DigitalAgeStart,
            LinearScale::new(1980.0..2020.0, 0.0..1060.0)?,
        ),
        y: Axis::new(
            Metric::InequalityRatio,
            LogScale::new(0.3..100.0, 620.0..0.0)?.clamped(),
        ),
        size: Axis::new(Metric::FontCount, SqrtScale::new(0.0..1900.0, 3.0..45.0)?),
    };
    let edges = shared_font_edges(&index);
    let graph = projector.project(&index, &edges);
    println!(
        "network: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );

    Ok(())
}
