// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller: activation, hover, and resize over one tree instance.

use alloc::string::{String, ToString};
use core::time::Duration;

use espalier_layout::{
    Breakpoint, DiffOrigin, LayoutConfig, LayoutError, LayoutResult, MIN_OUTER_WIDTH, RenderDiff,
    Viewport, diff, layout,
};
use espalier_tree::{NodeId, NodeKind, TreeModel};

use crate::tooltip::TooltipState;
use kurbo::{Point, Size};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Fixed wall-clock duration of one animated transition.
///
/// Transitions are fire-and-forget: a new interaction recomputes from the
/// current model state and restarts animation from whatever is on screen.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(750);

/// One render instruction set: the diff to apply and its transition timing.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Keyed enter/update/exit changes for nodes and edges.
    pub diff: RenderDiff,
    /// How long the surface should animate this frame.
    pub duration: Duration,
}

/// What an activation produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Collapse state changed (or a plain leaf produced an empty pass);
    /// apply the frame to the render surface.
    Update(Frame),
    /// The activated node is an external link leaf. Navigation is the
    /// host's job; open `url` in a new browsing context.
    Navigate {
        /// The link target.
        url: String,
    },
}

/// The single owner of one visualization's interaction state.
///
/// Holds the tree model, the viewport, the previous layout pass (animation
/// origins for the next diff), and the tooltip. All operations are
/// synchronous; nothing here blocks or queues.
#[derive(Clone, Debug)]
pub struct TreeController {
    model: TreeModel,
    viewport: Viewport,
    config: LayoutConfig,
    previous: Option<LayoutResult>,
    tooltip: TooltipState,
}

impl TreeController {
    /// Build a controller over `model`, collapse everything to the initial
    /// state (only the root visible), and produce the first frame.
    pub fn new(mut model: TreeModel, outer: Size) -> Result<(Self, Frame), LayoutError> {
        model.collapse_all();
        let mut controller = Self {
            model,
            viewport: Viewport::from_outer(outer),
            config: LayoutConfig::for_breakpoint(breakpoint_of_outer(outer)),
            previous: None,
            tooltip: TooltipState::Hidden,
        };
        let frame = controller.render_pass(None)?;
        Ok((controller, frame))
    }

    /// The tree model. Read-only; all mutation goes through the controller.
    pub fn model(&self) -> &TreeModel {
        &self.model
    }

    /// The current inner drawing area.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The most recently computed layout, if a pass has succeeded.
    pub fn current_layout(&self) -> Option<&LayoutResult> {
        self.previous.as_ref()
    }

    /// The current tooltip value.
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Activate (click) a node.
    ///
    /// Link leaves surface their URL instead of toggling. Everything else
    /// toggles its collapse state and re-renders with the activated node as
    /// the animation origin: children unfold out of it, collapsed subtrees
    /// fold back into it.
    pub fn activate(&mut self, id: NodeId) -> Result<Effect, LayoutError> {
        let node = self.model.node(id);
        if node.is_leaf()
            && let NodeKind::Link { url } = node.kind()
        {
            #[cfg(feature = "tracing")]
            debug!(node = ?id, url = %url, "activate: link pass-through");
            return Ok(Effect::Navigate { url: url.clone() });
        }

        #[cfg(feature = "tracing")]
        debug!(node = ?id, collapsed = node.is_collapsed(), "activate: toggle");
        self.model.toggle(id);
        self.render_pass(Some(id)).map(Effect::Update)
    }

    /// React to the hosting surface changing size.
    ///
    /// Recomputes the viewport and breakpoint constants, then re-lays out
    /// the unchanged tree. Visibility cannot change, so the frame is a pure
    /// position update (empty enter/exit sets).
    pub fn resize(&mut self, outer: Size) -> Result<Frame, LayoutError> {
        #[cfg(feature = "tracing")]
        debug!(width = outer.width, height = outer.height, "resize");
        self.viewport = Viewport::from_outer(outer);
        self.config = LayoutConfig::for_breakpoint(breakpoint_of_outer(outer));
        self.render_pass(Some(self.model.root()))
    }

    /// Pointer entered a node: show the single tooltip with the node's full
    /// (untruncated) name, anchored at `pointer`. Replaces any previous
    /// tooltip immediately.
    pub fn hover_enter(&mut self, id: NodeId, pointer: Point) -> &TooltipState {
        self.tooltip = TooltipState::Showing {
            text: self.model.node(id).name().to_string(),
            position: pointer,
        };
        &self.tooltip
    }

    /// Pointer left the node: hide the tooltip immediately. Idempotent.
    pub fn hover_leave(&mut self) -> &TooltipState {
        self.tooltip = TooltipState::Hidden;
        &self.tooltip
    }

    /// One layout+diff pass around `origin` (or the initial root position).
    ///
    /// The previous pass is only replaced after layout succeeds, so a failed
    /// pass leaves the rendered state untouched.
    fn render_pass(&mut self, origin: Option<NodeId>) -> Result<Frame, LayoutError> {
        let current = layout(&self.model, self.viewport, &self.config)?;
        let origin = match origin {
            Some(id) => DiffOrigin::for_node(id, self.previous.as_ref(), &current, self.viewport),
            None => DiffOrigin::initial(self.viewport),
        };
        let changes = diff(self.previous.as_ref(), &current, origin);
        #[cfg(feature = "tracing")]
        debug!(
            entering = changes.entering_nodes.len(),
            updating = changes.updating_nodes.len(),
            exiting = changes.exiting_nodes.len(),
            "render pass"
        );
        self.previous = Some(current);
        Ok(Frame {
            diff: changes,
            duration: TRANSITION_DURATION,
        })
    }
}

/// Breakpoint for an outer size, after the axis floor is applied.
fn breakpoint_of_outer(outer: Size) -> Breakpoint {
    Breakpoint::of(outer.width.max(MIN_OUTER_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TooltipState;
    use alloc::vec;
    use alloc::vec::Vec;
    use espalier_tree::Record;

    const OUTER: Size = Size::new(1280.0, 800.0);

    fn rec(name: &str, children: Vec<Record>) -> Record {
        Record {
            name: name.to_string(),
            children,
            ..Default::default()
        }
    }

    fn link(name: &str, url: &str) -> Record {
        Record {
            name: name.to_string(),
            kind: Some("url".to_string()),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    fn controller() -> (TreeController, Frame) {
        let model = TreeModel::build(&rec(
            "Vision",
            vec![
                rec("Goal A", vec![rec("Obj 1", vec![])]),
                rec(
                    "Goal B",
                    vec![link("Shodan", "https://www.shodan.io")],
                ),
            ],
        ))
        .unwrap();
        TreeController::new(model, OUTER).unwrap()
    }

    fn unwrap_update(effect: Effect) -> Frame {
        match effect {
            Effect::Update(frame) => frame,
            Effect::Navigate { url } => panic!("unexpected navigation to {url}"),
        }
    }

    #[test]
    fn initial_frame_shows_only_the_root() {
        let (controller, frame) = controller();
        assert_eq!(frame.diff.entering_nodes.len(), 1);
        assert!(frame.diff.updating_nodes.is_empty());
        assert!(frame.diff.entering_edges.is_empty());
        assert_eq!(frame.duration, TRANSITION_DURATION);
        assert_eq!(controller.current_layout().unwrap().nodes.len(), 1);
    }

    #[test]
    fn activation_scenario_expands_level_by_level() {
        let (mut controller, _) = controller();
        let root = controller.model().root();

        let frame = unwrap_update(controller.activate(root).unwrap());
        assert_eq!(frame.diff.entering_nodes.len(), 2);
        assert_eq!(controller.current_layout().unwrap().nodes.len(), 3);
        assert_eq!(controller.current_layout().unwrap().edges.len(), 2);

        let goal_a = controller.model().node(root).visible_children()[0];
        let frame = unwrap_update(controller.activate(goal_a).unwrap());
        assert_eq!(frame.diff.entering_nodes.len(), 1, "Obj 1 enters");
        assert_eq!(controller.current_layout().unwrap().nodes.len(), 4);
    }

    #[test]
    fn collapsing_again_restores_the_previous_visible_set() {
        let (mut controller, _) = controller();
        let root = controller.model().root();
        let _ = controller.activate(root).unwrap();
        let before: Vec<NodeId> = controller
            .current_layout()
            .unwrap()
            .nodes
            .iter()
            .map(|n| n.id)
            .collect();

        let goal_a = controller.model().node(root).visible_children()[0];
        let _ = controller.activate(goal_a).unwrap();
        let frame = unwrap_update(controller.activate(goal_a).unwrap());
        assert_eq!(frame.diff.exiting_nodes.len(), 1);

        let after: Vec<NodeId> = controller
            .current_layout()
            .unwrap()
            .nodes
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn link_leaf_activation_navigates_without_toggling() {
        let (mut controller, _) = controller();
        let root = controller.model().root();
        let _ = controller.activate(root).unwrap();
        let goal_b = controller.model().node(root).visible_children()[1];
        let _ = controller.activate(goal_b).unwrap();
        let shodan = controller.model().node(goal_b).visible_children()[0];

        let visible_before = controller.model().visible();
        let effect = controller.activate(shodan).unwrap();
        assert_eq!(
            effect,
            Effect::Navigate {
                url: "https://www.shodan.io".to_string()
            }
        );
        assert_eq!(controller.model().visible(), visible_before);
    }

    #[test]
    fn resize_is_a_pure_position_update() {
        let (mut controller, _) = controller();
        let root = controller.model().root();
        let _ = controller.activate(root).unwrap();

        let frame = controller.resize(Size::new(800.0, 600.0)).unwrap();
        assert!(frame.diff.is_update_only());
        assert!(!frame.diff.is_empty());
        // Tablet viewport now.
        assert!(controller.viewport().width < 800.0);
    }

    #[test]
    fn resize_preserves_collapse_state() {
        let (mut controller, _) = controller();
        let root = controller.model().root();
        let _ = controller.activate(root).unwrap();
        let visible = controller.model().visible();

        let _ = controller.resize(Size::new(500.0, 500.0)).unwrap();
        assert_eq!(controller.model().visible(), visible);
    }

    #[test]
    fn tooltip_tracks_pointer_state_exactly() {
        let (mut controller, _) = controller();
        let root = controller.model().root();
        assert_eq!(controller.tooltip(), &TooltipState::Hidden);

        let shown = controller.hover_enter(root, Point::new(12.0, 34.0));
        assert_eq!(
            shown,
            &TooltipState::Showing {
                text: "Vision".to_string(),
                position: Point::new(12.0, 34.0),
            }
        );

        // Hovering another node replaces the tooltip; there is never more
        // than one.
        let _ = controller.activate(root).unwrap();
        let goal_a = controller.model().node(root).visible_children()[0];
        let shown = controller.hover_enter(goal_a, Point::new(56.0, 78.0));
        assert_eq!(
            shown,
            &TooltipState::Showing {
                text: "Goal A".to_string(),
                position: Point::new(56.0, 78.0),
            }
        );

        assert_eq!(controller.hover_leave(), &TooltipState::Hidden);
        // Leaving twice is fine.
        assert_eq!(controller.hover_leave(), &TooltipState::Hidden);
    }

    #[test]
    fn tooltip_shows_the_full_name_even_when_labels_truncate() {
        let model = TreeModel::build(&rec("Open Source Intelligence Framework", vec![])).unwrap();
        let (mut controller, _) = TreeController::new(model, OUTER).unwrap();
        let root = controller.model().root();
        assert_eq!(controller.model().node(root).display_label(10), "Open Sour…");

        match controller.hover_enter(root, Point::ZERO) {
            TooltipState::Showing { text, .. } => {
                assert_eq!(text, "Open Source Intelligence Framework");
            }
            TooltipState::Hidden => panic!("tooltip should be showing"),
        }
    }

    #[test]
    fn plain_leaf_activation_is_an_empty_update() {
        let (mut controller, _) = controller();
        let root = controller.model().root();
        let _ = controller.activate(root).unwrap();
        let goal_a = controller.model().node(root).visible_children()[0];
        let _ = controller.activate(goal_a).unwrap();
        let obj_1 = controller.model().node(goal_a).visible_children()[0];

        let frame = unwrap_update(controller.activate(obj_1).unwrap());
        assert!(frame.diff.is_update_only());
    }
}
