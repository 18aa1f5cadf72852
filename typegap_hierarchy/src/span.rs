// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional span allocation with exact closure.

use core::ops::Range;

use crate::node::HierarchyNode;

/// Allocates a slice of `parent_span` to each of `values`, proportionally.
///
/// Every value receives `span_length * value / total`, except the last,
/// which receives whatever remains of the parent span. Summing the
/// proportional shares directly would accumulate floating-point error and
/// leave a sliver of the circle unaccounted for; handing the remainder to
/// the last child makes closure exact by construction.
///
/// With an empty `values` the result is empty; with a non-positive value
/// total every slice collapses onto the span start.
#[must_use]
pub fn allocate(parent_span: Range<f64>, values: &[f64]) -> Vec<Range<f64>> {
    let total: f64 = values.iter().sum();
    let length = parent_span.end - parent_span.start;
    let mut spans = Vec::with_capacity(values.len());
    if values.is_empty() {
        return spans;
    }
    if total <= 0.0 {
        spans.resize(values.len(), parent_span.start..parent_span.start);
        return spans;
    }
    let mut cursor = parent_span.start;
    for (i, value) in values.iter().enumerate() {
        let end = if i == values.len() - 1 {
            parent_span.end
        } else {
            cursor + length * (value / total)
        };
        spans.push(cursor..end);
        cursor = end;
    }
    spans
}

/// One node of a partitioned tree, with its allocated span.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionedNode {
    /// Display name, copied from the hierarchy node.
    pub name: String,
    /// Aggregated value, copied from the hierarchy node.
    pub value: f64,
    /// Depth below the root (the root itself is 0).
    pub depth: u32,
    /// Index of the parent in the partition output; `None` for the root.
    pub parent: Option<usize>,
    /// Allocated span, an angle interval for sunburst layouts.
    pub span: Range<f64>,
}

/// Assigns every node of a tree its proportional span slice.
///
/// The root receives `full_span`; each child subdivides its parent's span
/// via [`allocate`], in child order. Nodes are emitted in depth-first
/// preorder, so a renderer can draw arcs in one pass.
#[must_use]
pub fn partition(root: &HierarchyNode, full_span: Range<f64>) -> Vec<PartitionedNode> {
    let mut out = Vec::with_capacity(root.node_count());
    descend(root, full_span, 0, None, &mut out);
    out
}

fn descend(
    node: &HierarchyNode,
    span: Range<f64>,
    depth: u32,
    parent: Option<usize>,
    out: &mut Vec<PartitionedNode>,
) {
    let index = out.len();
    out.push(PartitionedNode {
        name: node.name.clone(),
        value: node.value,
        depth,
        parent,
        span: span.clone(),
    });
    if node.children.is_empty() {
        return;
    }
    let values: Vec<f64> = node.children.iter().map(|child| child.value).collect();
    let child_spans = allocate(span, &values);
    for (child, child_span) in node.children.iter().zip(child_spans) {
        descend(child, child_span, depth + 1, Some(index), out);
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::TAU;

    use super::{HierarchyNode, allocate, partition};

    #[test]
    fn shares_are_proportional() {
        let spans = allocate(0.0..100.0, &[1.0, 3.0]);
        assert_eq!(spans, vec![0.0..25.0, 25.0..100.0]);
    }

    #[test]
    fn closure_is_exact_even_when_thirds_do_not_divide() {
        // 1/3 of a full turn is not representable; the remainder rule must
        // still end the last slice exactly at the span end.
        let spans = allocate(0.0..TAU, &[1.0, 1.0, 1.0]);
        assert_eq!(spans.last().unwrap().end, TAU);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn empty_and_zero_total_edge_cases() {
        assert!(allocate(0.0..1.0, &[]).is_empty());
        let spans = allocate(2.0..3.0, &[0.0, 0.0]);
        assert_eq!(spans, vec![2.0..2.0, 2.0..2.0]);
    }

    #[test]
    fn partition_emits_preorder_with_parent_links() {
        let root = HierarchyNode::parent(
            "All Scripts",
            vec![
                HierarchyNode::parent(
                    "Latin",
                    vec![
                        HierarchyNode::leaf("sans-serif", 3.0),
                        HierarchyNode::leaf("serif", 1.0),
                    ],
                ),
                HierarchyNode::leaf("Arabic", 4.0),
            ],
        );
        let nodes = partition(&root, 0.0..TAU);
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[0].name, "All Scripts");
        assert_eq!(nodes[0].depth, 0);
        assert_eq!(nodes[1].name, "Latin");
        assert_eq!(nodes[1].parent, Some(0));
        assert_eq!(nodes[2].name, "sans-serif");
        assert_eq!(nodes[2].parent, Some(1));
        assert_eq!(nodes[4].name, "Arabic");
        assert_eq!(nodes[4].parent, Some(0));
    }

    #[test]
    fn sibling_spans_tile_the_parent_span() {
        let root = HierarchyNode::parent(
            "root",
            vec![
                HierarchyNode::leaf("a", 1.0),
                HierarchyNode::leaf("b", 1.0),
                HierarchyNode::leaf("c", 1.0),
                HierarchyNode::leaf("d", 5.0),
            ],
        );
        let nodes = partition(&root, 0.0..TAU);
        let children = &nodes[1..];
        assert_eq!(children[0].span.start, 0.0);
        assert_eq!(children.last().unwrap().span.end, TAU);
        for pair in children.windows(2) {
            assert_eq!(pair[0].span.end, pair[1].span.start);
        }
    }
}
