// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typegap Network: deterministic coordinate seeds for script graphs.
//!
//! Scatter and force-directed views of the script network need two things
//! from the data layer: undirected script↔script edges weighted by shared
//! fonts, and an initial position and size for every node derived from data
//! semantics (year of digital entry on one axis, inequality on the other,
//! font count as size, in the classic layout).
//!
//! This crate supplies both as plain records. It runs **no** force
//! simulation: layout relaxation, if any, belongs to the consuming renderer.
//! What it guarantees instead is determinism - the same index and
//! configuration always produce the same [`ProjectedGraph`] - and the same
//! tolerance as the dataset layer: edges whose endpoints are not in the node
//! set are dropped silently.
//!
//! ```rust
//! use typegap_dataset::DatasetIndex;
//! use typegap_encode::{LinearScale, LogScale, SqrtScale};
//! use typegap_network::{Axis, Metric, Projector, shared_font_edges};
//!
//! # fn demo(index: &DatasetIndex) -> Result<(), Box<dyn core::error::Error>> {
//! let projector = Projector {
//!     x: Axis::new(
//!         Metric::DigitalAgeStart,
//!         LinearScale::new(1980.0..2020.0, 0.0..1060.0)?,
//!     ),
//!     y: Axis::new(
//!         Metric::InequalityRatio,
//!         LogScale::new(0.3..100.0, 620.0..0.0)?.clamped(),
//!     ),
//!     size: Axis::new(
//!         Metric::FontCount,
//!         SqrtScale::new(0.0..1900.0, 3.0..45.0)?,
//!     ),
//! };
//! let edges = shared_font_edges(index);
//! let graph = projector.project(index, &edges);
//! # Ok(()) }
//! ```

mod edges;
mod project;

pub use edges::{NetworkEdge, shared_font_edges};
pub use project::{Axis, AxisScale, Metric, ProjectedEdge, ProjectedGraph, ProjectedNode, Projector};
