// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typegap Hierarchy: strict trees for sunburst-style area encodings.
//!
//! The wheel visualizations all need the same aggregation: for each script,
//! its fonts partitioned by category, with every parent's value equal to the
//! sum of its children. This crate is the single home of that aggregation.
//!
//! # Construction
//!
//! [`build`] assembles the full script → category → font tree from a
//! [`DatasetIndex`](typegap_dataset::DatasetIndex); [`script_subtree`] does
//! one script, so callers can skip a corrupt script without losing the rest.
//! A script whose declared font count disagrees with its actual font
//! partition raises [`HierarchyInvariantError`] - that disagreement means
//! the upstream data is corrupt, and silently rescaling it would hide the
//! bug.
//!
//! # Spans
//!
//! [`partition`] assigns each node of a built tree a proportional slice of a
//! parent span (an angle interval for sunbursts). Each child receives
//! `parent_span * value / total`, except the last child, which receives the
//! remainder: accumulated floating-point error must not leave a gap at the
//! end of the circle, so closure is exact by construction.

mod build;
mod node;
mod span;

pub use build::{HierarchyInvariantError, RankBy, build, build_tolerant, script_subtree, top_scripts};
pub use node::HierarchyNode;
pub use span::{PartitionedNode, allocate, partition};
