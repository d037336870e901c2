// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Espalier Layout: ranked tree layout and render diffing.
//!
//! Given a tree snapshot from [`espalier_tree`] (with some nodes collapsed),
//! this crate computes a 2D layout for the visible set and the keyed
//! enter/update/exit difference against the previously rendered pass. Both
//! computations are pure: the model is only read, and calling them twice on
//! the same inputs yields identical results.
//!
//! - [`layout`]: positions every visible node. The main axis (x) is ranked by
//!   depth — level `d` sits at `d * level_spacing` regardless of how many
//!   nodes share it — while the cross axis (y) spreads visible leaves evenly
//!   over the viewport height, parents centered over their children, sibling
//!   ties broken by input order.
//! - [`diff`]: partitions nodes and edges into entering, updating, and
//!   exiting sets by id, and attaches animation endpoints: entering elements
//!   originate at their parent's previous position, exiting elements converge
//!   on the activated node's current position.
//!
//! The render surface is an external collaborator: it consumes a
//! [`RenderDiff`] and animates elements between the supplied endpoints. This
//! crate never touches a scene graph.
//!
//! ## Minimal usage
//!
//! ```
//! use espalier_layout::{DiffOrigin, LayoutConfig, Viewport, diff, layout};
//! use espalier_tree::{Record, TreeModel};
//!
//! let data = Record {
//!     name: "Vision".into(),
//!     children: vec![Record { name: "Goal A".into(), ..Default::default() }],
//!     ..Default::default()
//! };
//! let mut model = TreeModel::build_collapsed(&data).unwrap();
//!
//! let viewport = Viewport { width: 1020.0, height: 760.0 };
//! let config = LayoutConfig::default();
//!
//! // Initial pass: only the root is visible, everything enters.
//! let first = layout(&model, viewport, &config).unwrap();
//! let origin = DiffOrigin::initial(viewport);
//! let d = diff(None, &first, origin);
//! assert_eq!(d.entering_nodes.len(), 1);
//!
//! // Expand the root; its child enters from the root's previous position.
//! model.toggle(model.root());
//! let second = layout(&model, viewport, &config).unwrap();
//! let origin = DiffOrigin::for_node(model.root(), Some(&first), &second, viewport);
//! let d = diff(Some(&first), &second, origin);
//! assert_eq!(d.entering_nodes.len(), 1);
//! assert_eq!(d.updating_nodes.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod diff;
pub mod layout;
pub mod types;

pub use diff::{DiffOrigin, EdgeTransition, NodeTransition, RenderDiff, diff};
pub use layout::{Edge, LayoutResult, PlacedNode, layout};
pub use types::{
    Breakpoint, DESKTOP_MIN_WIDTH, LayoutConfig, LayoutError, MIN_OUTER_HEIGHT, MIN_OUTER_WIDTH,
    Viewport,
};
