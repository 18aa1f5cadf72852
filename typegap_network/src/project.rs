// Copyright 2026 the Typegap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Metric axes and node/edge projection.

use hashbrown::HashMap;
use kurbo::Point;
use typegap_dataset::{DatasetIndex, ScriptRecord};
use typegap_encode::{LinearScale, LogScale, SqrtScale};

use crate::edges::NetworkEdge;

/// A per-script metric usable as a projection axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Year the script entered digital typography.
    DigitalAgeStart,
    /// Font-availability ratio relative to the reference script.
    InequalityRatio,
    /// Speaker population.
    Speakers,
    /// Supporting-font count.
    FontCount,
}

impl Metric {
    /// Reads this metric off a script record.
    #[must_use]
    pub fn value(self, script: &ScriptRecord) -> f64 {
        match self {
            Self::DigitalAgeStart => f64::from(script.digital_age_start),
            Self::InequalityRatio => script.inequality_ratio,
            #[expect(
                clippy::cast_precision_loss,
                reason = "speaker estimates are far below 2^53"
            )]
            Self::Speakers => script.speakers as f64,
            Self::FontCount => f64::from(script.font_count),
        }
    }
}

/// Any of the numeric encoding scales, behind one evaluation surface.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    /// Affine mapping.
    Linear(LinearScale),
    /// Log-space mapping.
    Log(LogScale),
    /// Area-proportional mapping.
    Sqrt(SqrtScale),
}

impl AxisScale {
    /// Maps a metric value onto the axis range.
    #[must_use]
    pub fn scale(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.scale(x),
            Self::Log(s) => s.scale(x),
            Self::Sqrt(s) => s.scale(x),
        }
    }
}

impl From<LinearScale> for AxisScale {
    fn from(scale: LinearScale) -> Self {
        Self::Linear(scale)
    }
}

impl From<LogScale> for AxisScale {
    fn from(scale: LogScale) -> Self {
        Self::Log(scale)
    }
}

impl From<SqrtScale> for AxisScale {
    fn from(scale: SqrtScale) -> Self {
        Self::Sqrt(scale)
    }
}

/// One projection axis: which metric to read and how to scale it.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Metric feeding the axis.
    pub metric: Metric,
    /// Scale from metric values to visual units.
    pub scale: AxisScale,
}

impl Axis {
    /// Creates an axis from a metric and any encoding scale.
    pub fn new(metric: Metric, scale: impl Into<AxisScale>) -> Self {
        Self {
            metric,
            scale: scale.into(),
        }
    }

    fn eval(&self, script: &ScriptRecord) -> f64 {
        self.scale.scale(self.metric.value(script))
    }
}

/// A positioned, sized script node.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedNode {
    /// Script code, resolvable against the source index.
    pub code: String,
    /// Seed position in visual units.
    pub pos: Point,
    /// Rendered size (radius, font size, or similar) in visual units.
    pub size: f64,
}

/// An edge between two projected nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectedEdge {
    /// Index of the source node in [`ProjectedGraph::nodes`].
    pub source: usize,
    /// Index of the target node in [`ProjectedGraph::nodes`].
    pub target: usize,
    /// Shared-font weight, carried through from the input edge.
    pub weight: u32,
}

/// The renderable output of a projection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedGraph {
    /// Nodes in index (code) order.
    pub nodes: Vec<ProjectedNode>,
    /// Edges whose endpoints both resolved; dangling input edges are gone.
    pub edges: Vec<ProjectedEdge>,
}

/// Maps scripts and edges into a 2D coordinate space.
///
/// The projector holds a horizontal, a vertical, and a size [`Axis`] and
/// evaluates them per script. It is a pure function of its configuration
/// and input; nothing about the output depends on iteration order or
/// randomness.
#[derive(Clone, Debug, PartialEq)]
pub struct Projector {
    /// Horizontal axis.
    pub x: Axis,
    /// Vertical axis.
    pub y: Axis,
    /// Size axis.
    pub size: Axis,
}

impl Projector {
    /// Projects every script of the index, then the edges over them.
    ///
    /// Edges referencing a code with no node (filtered upstream, or simply
    /// absent) are dropped silently, consistent with the dataset layer's
    /// tolerant-default policy.
    #[must_use]
    pub fn project(&self, index: &DatasetIndex, edges: &[NetworkEdge]) -> ProjectedGraph {
        let mut nodes = Vec::with_capacity(index.scripts().len());
        let mut slots: HashMap<&str, usize> = HashMap::with_capacity(index.scripts().len());
        for script in index.scripts() {
            slots.insert(script.code.as_str(), nodes.len());
            nodes.push(ProjectedNode {
                code: script.code.clone(),
                pos: Point::new(self.x.eval(script), self.y.eval(script)),
                size: self.size.eval(script),
            });
        }

        let edges = edges
            .iter()
            .filter_map(|edge| {
                let source = *slots.get(edge.source.as_str())?;
                let target = *slots.get(edge.target.as_str())?;
                Some(ProjectedEdge {
                    source,
                    target,
                    weight: edge.weight,
                })
            })
            .collect();

        ProjectedGraph { nodes, edges }
    }
}
