// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranked layout of the visible tree.
//!
//! The walk assigns each visible leaf the next cross-axis slot in traversal
//! order and centers every parent over its first and last child, then scales
//! slots to the viewport height. Collapsed nodes count as leaves: their
//! hidden subtrees occupy no space. The main axis ignores subtree size
//! entirely and ranks by depth alone.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use espalier_tree::{NodeId, TreeModel};
use kurbo::Point;

use crate::types::{LayoutConfig, LayoutError, Viewport};

/// A visible node with its computed position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedNode {
    /// Stable node id.
    pub id: NodeId,
    /// Parent id, or `None` for the root.
    pub parent: Option<NodeId>,
    /// Computed coordinates: `x` is depth-ranked, `y` is the sibling spread.
    pub pos: Point,
    /// Distance from the root.
    pub depth: usize,
    /// The node currently hides children (render surfaces typically style
    /// collapsed nodes differently).
    pub collapsed: bool,
    /// The node has no children at all, hidden or shown.
    pub leaf: bool,
}

/// A parent→visible-child connection.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// Parent node id.
    pub source: NodeId,
    /// Child node id. A node has exactly one incoming edge, so this also
    /// identifies the edge.
    pub target: NodeId,
    /// Parent position.
    pub source_pos: Point,
    /// Child position.
    pub target_pos: Point,
}

/// The positioned visible set of one layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    /// Visible nodes in pre-order.
    pub nodes: Vec<PlacedNode>,
    /// One edge per visible parent→child pair, in traversal order.
    pub edges: Vec<Edge>,
}

impl LayoutResult {
    /// Position of a visible node, or `None` if `id` is not in this pass.
    pub fn position_of(&self, id: NodeId) -> Option<Point> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.pos)
    }
}

/// Compute positions for every visible node of `model`.
///
/// Pure: reads the model, never mutates it. Deterministic: the same model
/// and viewport always produce the same result. Fails with
/// [`LayoutError::InvalidViewport`] if either viewport dimension is
/// non-positive; the caller must not attempt a partial layout.
pub fn layout(
    model: &TreeModel,
    viewport: Viewport,
    config: &LayoutConfig,
) -> Result<LayoutResult, LayoutError> {
    if !viewport.is_valid() {
        return Err(LayoutError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    // Pass 1: raw cross-axis slots (leaf index units), bottom-up centering.
    let mut slots = BTreeMap::new();
    let mut next_leaf = 0_usize;
    cross_slot(model, model.root(), &mut next_leaf, &mut slots);
    let leaf_count = next_leaf;

    // Pass 2: pre-order emission with scaled coordinates.
    let mut result = LayoutResult::default();
    emit(
        model,
        model.root(),
        None,
        &slots,
        leaf_count,
        viewport,
        config,
        &mut result,
    );
    Ok(result)
}

/// Assign raw cross slots: leaves take consecutive indices, parents sit at
/// the midpoint of their first and last child. Input order is preserved, so
/// sibling ties are stable.
fn cross_slot(
    model: &TreeModel,
    id: NodeId,
    next_leaf: &mut usize,
    slots: &mut BTreeMap<NodeId, f64>,
) -> f64 {
    let children = model.node(id).visible_children();
    let slot = if children.is_empty() {
        let s = *next_leaf as f64;
        *next_leaf += 1;
        s
    } else {
        let mut first = f64::MAX;
        let mut last = f64::MIN;
        for &child in children {
            let s = cross_slot(model, child, next_leaf, slots);
            first = first.min(s);
            last = last.max(s);
        }
        (first + last) / 2.0
    };
    slots.insert(id, slot);
    slot
}

fn emit(
    model: &TreeModel,
    id: NodeId,
    parent_pos: Option<(NodeId, Point)>,
    slots: &BTreeMap<NodeId, f64>,
    leaf_count: usize,
    viewport: Viewport,
    config: &LayoutConfig,
    out: &mut LayoutResult,
) {
    let node = model.node(id);
    let y = if leaf_count > 1 {
        slots[&id] * viewport.height / ((leaf_count - 1) as f64)
    } else {
        viewport.height / 2.0
    };
    let pos = Point::new(node.depth() as f64 * config.level_spacing, y);

    out.nodes.push(PlacedNode {
        id,
        parent: parent_pos.map(|(p, _)| p),
        pos,
        depth: node.depth(),
        collapsed: node.is_collapsed(),
        leaf: node.is_leaf(),
    });
    if let Some((source, source_pos)) = parent_pos {
        out.edges.push(Edge {
            source,
            target: id,
            source_pos,
            target_pos: pos,
        });
    }

    for &child in node.visible_children() {
        emit(
            model,
            child,
            Some((id, pos)),
            slots,
            leaf_count,
            viewport,
            config,
            out,
        );
    }
}
