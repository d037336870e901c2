// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena tree with stable ids and per-node collapse state.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::record::{BuildError, Record};

/// Identifier for a node in the model.
///
/// Assigned once when the node is materialized from its input record and
/// never reassigned, so identities survive any number of toggle/layout
/// cycles. Ids are only meaningful for the [`TreeModel`] that created them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn new(idx: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        Self(idx as u32)
    }

    fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What a node represents beyond its label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// Ordinary hierarchy node.
    Plain,
    /// External link. Activating a link leaf surfaces the URL to the host,
    /// which opens it in a new browsing context; the model itself never
    /// navigates.
    Link {
        /// The link target.
        url: String,
    },
}

/// One materialized node of the model.
///
/// Children live in exactly one of two ordered sets: `children` when the node
/// is expanded, `hidden_children` when it is collapsed. A leaf has neither.
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    name: String,
    kind: NodeKind,
    depth: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    hidden_children: Vec<NodeId>,
}

impl Node {
    /// Stable identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Full, untruncated display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node kind (plain or external link).
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Link target, for `Link` nodes.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Link { url } => Some(url),
            NodeKind::Plain => None,
        }
    }

    /// Distance from the root (root = 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Parent node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children currently shown (empty when collapsed or a leaf).
    pub fn visible_children(&self) -> &[NodeId] {
        &self.children
    }

    /// True if this node currently hides children.
    pub fn is_collapsed(&self) -> bool {
        !self.hidden_children.is_empty()
    }

    /// True if this node has no children at all, hidden or shown.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.hidden_children.is_empty()
    }

    /// Label truncated to at most `max_chars` characters, ellipsis-terminated
    /// when shortened. Tooltips should show [`Node::name`] instead.
    pub fn display_label(&self, max_chars: usize) -> Cow<'_, str> {
        if self.name.chars().count() <= max_chars {
            return Cow::Borrowed(&self.name);
        }
        let mut out: String = self
            .name
            .chars()
            .take(max_chars.saturating_sub(1))
            .collect();
        out.push('…');
        Cow::Owned(out)
    }
}

/// The tree model: owns every node for the lifetime of the visualization.
///
/// Built once from a nested [`Record`]; afterwards [`TreeModel::toggle`] and
/// [`TreeModel::collapse_all`] are the only mutators.
#[derive(Clone, Debug)]
pub struct TreeModel {
    nodes: Vec<Node>,
    root: NodeId,
}

impl TreeModel {
    /// Build a model from a nested record.
    ///
    /// Deterministic and pure: ids are assigned in pre-order of the input.
    /// Every node starts expanded. Fails on the first malformed record
    /// (empty `name`, or `type == "url"` without `url`) rather than dropping
    /// it, so a successful build always represents the complete input.
    pub fn build(record: &Record) -> Result<Self, BuildError> {
        let mut nodes = Vec::new();
        let mut trail: Vec<&str> = Vec::new();
        let root = Self::build_node(record, None, 0, &mut trail, &mut nodes)?;
        Ok(Self { nodes, root })
    }

    /// Build a model and immediately collapse it to the initial render state
    /// (only the root visible).
    pub fn build_collapsed(record: &Record) -> Result<Self, BuildError> {
        let mut model = Self::build(record)?;
        model.collapse_all();
        Ok(model)
    }

    fn build_node<'a>(
        record: &'a Record,
        parent: Option<NodeId>,
        depth: usize,
        trail: &mut Vec<&'a str>,
        nodes: &mut Vec<Node>,
    ) -> Result<NodeId, BuildError> {
        if record.name.is_empty() {
            return Err(BuildError::MissingName {
                parent_path: trail.join("/"),
            });
        }
        let kind = if record.is_url() {
            match &record.url {
                Some(url) => NodeKind::Link { url: url.clone() },
                None => {
                    return Err(BuildError::MissingUrl {
                        name: record.name.clone(),
                    });
                }
            }
        } else {
            NodeKind::Plain
        };

        let id = NodeId::new(nodes.len());
        nodes.push(Node {
            id,
            name: record.name.clone(),
            kind,
            depth,
            parent,
            children: Vec::new(),
            hidden_children: Vec::new(),
        });

        trail.push(&record.name);
        let mut children = Vec::with_capacity(record.children.len());
        for child in &record.children {
            children.push(Self::build_node(child, Some(id), depth + 1, trail, nodes)?);
        }
        trail.pop();

        nodes[id.idx()].children = children;
        Ok(id)
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the model (visible or not).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the model has no nodes. Never true for a built model.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node. Panics on an id from a different model.
    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id.idx()).expect("dangling NodeId")
    }

    /// Collapse every node, hiding all of the root's descendants.
    ///
    /// After this, only the root is visible; this is the documented initial
    /// render state. Nested nodes remember nothing extra: each node's
    /// children simply move to its hidden set.
    pub fn collapse_all(&mut self) {
        for node in &mut self.nodes {
            if !node.children.is_empty() {
                node.hidden_children = core::mem::take(&mut node.children);
            }
        }
    }

    /// Swap the visible and hidden child sets of exactly `id`.
    ///
    /// Non-recursive: descendants keep their own collapse state, so
    /// re-expanding a branch restores whatever sub-collapse state existed
    /// before. Toggling a leaf is a no-op. Toggle is its own inverse.
    pub fn toggle(&mut self, id: NodeId) {
        let node = self.nodes.get_mut(id.idx()).expect("dangling NodeId");
        core::mem::swap(&mut node.children, &mut node.hidden_children);
    }

    /// Ids of all currently visible nodes, in pre-order.
    ///
    /// The root is always visible; a node is visible iff every ancestor is
    /// expanded.
    pub fn visible(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.visit_visible(self.root, &mut out);
        out
    }

    fn visit_visible(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &child in self.node(id).visible_children() {
            self.visit_visible(child, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn goal(name: &str, children: Vec<Record>) -> Record {
        Record {
            name: name.to_string(),
            children,
            ..Default::default()
        }
    }

    fn sample() -> Record {
        goal(
            "Vision",
            vec![
                goal("Goal A", vec![goal("Obj 1", vec![]), goal("Obj 2", vec![])]),
                goal("Goal B", vec![goal("Obj 3", vec![])]),
            ],
        )
    }

    #[test]
    fn build_assigns_unique_preorder_ids_and_depths() {
        let model = TreeModel::build(&sample()).unwrap();
        assert_eq!(model.len(), 6);

        let visible = model.visible();
        assert_eq!(visible.len(), 6);
        // Unique ids.
        for (i, a) in visible.iter().enumerate() {
            for b in &visible[i + 1..] {
                assert_ne!(a, b, "ids must be unique");
            }
        }
        // Pre-order: Vision, Goal A, Obj 1, Obj 2, Goal B, Obj 3.
        let names: Vec<&str> = visible.iter().map(|&id| model.node(id).name()).collect();
        assert_eq!(
            names,
            ["Vision", "Goal A", "Obj 1", "Obj 2", "Goal B", "Obj 3"]
        );
        let depths: Vec<usize> = visible.iter().map(|&id| model.node(id).depth()).collect();
        assert_eq!(depths, [0, 1, 2, 2, 1, 2]);
    }

    #[test]
    fn parents_are_linked() {
        let model = TreeModel::build(&sample()).unwrap();
        let root = model.root();
        assert_eq!(model.node(root).parent(), None);
        for &child in model.node(root).visible_children() {
            assert_eq!(model.node(child).parent(), Some(root));
            assert_eq!(model.node(child).depth(), 1);
        }
    }

    #[test]
    fn collapse_all_leaves_only_root_visible() {
        let mut model = TreeModel::build(&sample()).unwrap();
        model.collapse_all();
        assert_eq!(model.visible(), vec![model.root()]);
        assert!(model.node(model.root()).is_collapsed());
    }

    #[test]
    fn toggle_is_its_own_inverse_and_preserves_nested_state() {
        let mut model = TreeModel::build(&sample()).unwrap();
        let root = model.root();
        let goal_a = model.node(root).visible_children()[0];

        // Collapse only Goal A, then the root.
        model.toggle(goal_a);
        model.toggle(root);
        assert_eq!(model.visible(), vec![root]);

        // Re-expanding the root restores Goal A still collapsed.
        model.toggle(root);
        let visible = model.visible();
        assert!(visible.contains(&goal_a));
        assert!(model.node(goal_a).is_collapsed());
        assert_eq!(visible.len(), 3, "Goal A's objectives stay hidden");

        // Round-trip: expand then collapse reproduces the exact visible set.
        let before = model.visible();
        model.toggle(goal_a);
        model.toggle(goal_a);
        assert_eq!(model.visible(), before);
    }

    #[test]
    fn toggle_leaf_is_noop() {
        let mut model = TreeModel::build(&sample()).unwrap();
        let root = model.root();
        let goal_a = model.node(root).visible_children()[0];
        let obj_1 = model.node(goal_a).visible_children()[0];
        assert!(model.node(obj_1).is_leaf());

        let before = model.visible();
        model.toggle(obj_1);
        assert_eq!(model.visible(), before);
        assert!(model.node(obj_1).is_leaf());
    }

    #[test]
    fn url_record_without_url_fails_build() {
        let bad = goal(
            "Vision",
            vec![Record {
                name: "Broken".to_string(),
                kind: Some("url".to_string()),
                ..Default::default()
            }],
        );
        assert_eq!(
            TreeModel::build(&bad).unwrap_err(),
            BuildError::MissingUrl {
                name: "Broken".to_string()
            }
        );
    }

    #[test]
    fn empty_name_fails_build_with_ancestor_path() {
        let bad = goal("Vision", vec![goal("Goal A", vec![goal("", vec![])])]);
        assert_eq!(
            TreeModel::build(&bad).unwrap_err(),
            BuildError::MissingName {
                parent_path: "Vision/Goal A".to_string()
            }
        );
    }

    #[test]
    fn link_node_exposes_url() {
        let data = goal(
            "Tools",
            vec![Record {
                name: "Shodan".to_string(),
                kind: Some("url".to_string()),
                url: Some("https://www.shodan.io".to_string()),
                ..Default::default()
            }],
        );
        let model = TreeModel::build(&data).unwrap();
        let leaf = model.node(model.root()).visible_children()[0];
        assert_eq!(model.node(leaf).url(), Some("https://www.shodan.io"));
        assert_eq!(model.node(model.root()).url(), None);
    }

    #[test]
    fn display_label_truncates_on_char_boundaries() {
        let data = goal("Open Source Intelligence", vec![]);
        let model = TreeModel::build(&data).unwrap();
        let node = model.node(model.root());
        assert_eq!(node.display_label(50), "Open Source Intelligence");
        assert_eq!(node.display_label(12), "Open Source…");
        assert_eq!(node.name(), "Open Source Intelligence");
    }

    #[test]
    fn ids_stable_across_toggle_cycles() {
        let mut model = TreeModel::build(&sample()).unwrap();
        let ids_before = model.visible();
        let root = model.root();
        for _ in 0..3 {
            model.toggle(root);
            model.toggle(root);
        }
        assert_eq!(model.visible(), ids_before);
    }
}
