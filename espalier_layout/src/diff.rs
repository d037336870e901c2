// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed difference between two consecutive layout passes.
//!
//! Nodes are matched by id and edges by their target id (a node has exactly
//! one incoming edge). The three sets are disjoint by construction:
//! `entering ∪ updating` covers the current pass and `updating ∪ exiting`
//! covers the previous one. The diff is recomputed fresh on every pass and
//! discarded after the render applies it.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use espalier_tree::NodeId;
use kurbo::Point;

use crate::layout::LayoutResult;
use crate::types::Viewport;

/// The reference point an interaction animates around: the activated node,
/// or the initial root position on the first render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiffOrigin {
    /// Where the origin sat before this pass. Entering elements whose parent
    /// has no previous position start here.
    pub previous: Point,
    /// Where the origin sits now. Exiting elements collapse into this point.
    pub current: Point,
}

impl DiffOrigin {
    /// Origin for a first render: the root's conventional starting point,
    /// centered on the cross axis at the left edge.
    pub fn initial(viewport: Viewport) -> Self {
        let p = Point::new(0.0, viewport.height / 2.0);
        Self {
            previous: p,
            current: p,
        }
    }

    /// Origin for a pass triggered by activating `id`.
    ///
    /// Falls back to the initial position when the node has no recorded
    /// position on either side (e.g. the very first interaction).
    pub fn for_node(
        id: NodeId,
        previous: Option<&LayoutResult>,
        current: &LayoutResult,
        viewport: Viewport,
    ) -> Self {
        let initial = Self::initial(viewport);
        Self {
            previous: previous
                .and_then(|p| p.position_of(id))
                .unwrap_or(initial.previous),
            current: current.position_of(id).unwrap_or(initial.current),
        }
    }
}

/// Animation endpoints for one node across a pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeTransition {
    /// Stable node id.
    pub id: NodeId,
    /// Pre-transition position (insertion point for entering nodes).
    pub from: Point,
    /// Post-transition position (removal point for exiting nodes).
    pub to: Point,
}

/// Animation endpoints for one edge across a pass.
///
/// Entering edges start with both endpoints at a single point and unfold;
/// exiting edges fold back into one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeTransition {
    /// Parent node id.
    pub source: NodeId,
    /// Child node id (the edge key).
    pub target: NodeId,
    /// Pre-transition endpoints (source, target).
    pub from: (Point, Point),
    /// Post-transition endpoints (source, target).
    pub to: (Point, Point),
}

/// The partitioned change set driving one animated render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderDiff {
    /// Nodes newly visible this pass.
    pub entering_nodes: Vec<NodeTransition>,
    /// Nodes visible in both passes.
    pub updating_nodes: Vec<NodeTransition>,
    /// Nodes no longer visible.
    pub exiting_nodes: Vec<NodeTransition>,
    /// Edges newly visible this pass.
    pub entering_edges: Vec<EdgeTransition>,
    /// Edges visible in both passes.
    pub updating_edges: Vec<EdgeTransition>,
    /// Edges no longer visible.
    pub exiting_edges: Vec<EdgeTransition>,
}

impl RenderDiff {
    /// True if the pass changes nothing at all.
    pub fn is_empty(&self) -> bool {
        self.entering_nodes.is_empty()
            && self.updating_nodes.is_empty()
            && self.exiting_nodes.is_empty()
            && self.entering_edges.is_empty()
            && self.updating_edges.is_empty()
            && self.exiting_edges.is_empty()
    }

    /// True if visibility is unchanged (a pure position update, as produced
    /// by a resize).
    pub fn is_update_only(&self) -> bool {
        self.entering_nodes.is_empty()
            && self.exiting_nodes.is_empty()
            && self.entering_edges.is_empty()
            && self.exiting_edges.is_empty()
    }
}

/// Partition `current` against `previous` by id and attach animation
/// endpoints.
///
/// With no previous pass, everything in `current` enters and nothing exits.
/// Entering elements originate at their parent's previous position (the
/// node they unfold out of), falling back to `origin.previous`; exiting
/// elements converge on `origin.current` before removal.
pub fn diff(
    previous: Option<&LayoutResult>,
    current: &LayoutResult,
    origin: DiffOrigin,
) -> RenderDiff {
    let prev_nodes: BTreeMap<NodeId, Point> = previous
        .map(|p| p.nodes.iter().map(|n| (n.id, n.pos)).collect())
        .unwrap_or_default();
    let prev_edges: BTreeMap<NodeId, (NodeId, (Point, Point))> = previous
        .map(|p| {
            p.edges
                .iter()
                .map(|e| (e.target, (e.source, (e.source_pos, e.target_pos))))
                .collect()
        })
        .unwrap_or_default();

    let mut out = RenderDiff::default();

    for node in &current.nodes {
        match prev_nodes.get(&node.id) {
            Some(&from) => out.updating_nodes.push(NodeTransition {
                id: node.id,
                from,
                to: node.pos,
            }),
            None => {
                let from = node
                    .parent
                    .and_then(|p| prev_nodes.get(&p).copied())
                    .unwrap_or(origin.previous);
                out.entering_nodes.push(NodeTransition {
                    id: node.id,
                    from,
                    to: node.pos,
                });
            }
        }
    }
    if let Some(previous) = previous {
        for node in &previous.nodes {
            if current.position_of(node.id).is_none() {
                out.exiting_nodes.push(NodeTransition {
                    id: node.id,
                    from: node.pos,
                    to: origin.current,
                });
            }
        }
    }

    for edge in &current.edges {
        let to = (edge.source_pos, edge.target_pos);
        match prev_edges.get(&edge.target) {
            Some(&(_, from)) => out.updating_edges.push(EdgeTransition {
                source: edge.source,
                target: edge.target,
                from,
                to,
            }),
            None => {
                let start = prev_nodes
                    .get(&edge.source)
                    .copied()
                    .unwrap_or(origin.previous);
                out.entering_edges.push(EdgeTransition {
                    source: edge.source,
                    target: edge.target,
                    from: (start, start),
                    to,
                });
            }
        }
    }
    if let Some(previous) = previous {
        for edge in &previous.edges {
            let gone = !current.edges.iter().any(|e| e.target == edge.target);
            if gone {
                out.exiting_edges.push(EdgeTransition {
                    source: edge.source,
                    target: edge.target,
                    from: (edge.source_pos, edge.target_pos),
                    to: (origin.current, origin.current),
                });
            }
        }
    }

    out
}
