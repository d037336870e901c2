// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Espalier Controller: the interaction layer of a collapsible tree diagram.
//!
//! ## Overview
//!
//! This crate owns the single mutable state of one visualization instance:
//! the tree model, the viewport, the previously rendered layout, and the
//! tooltip. Every interaction runs the same synchronous rhythm — mutate
//! collapse state, lay out, diff against the previous pass — and hands the
//! resulting [`Frame`] to the render surface, which animates it over a fixed
//! duration.
//!
//! - Activation toggles a node and uses it as the animation origin; a link
//!   leaf instead surfaces its URL for the host to open.
//! - Hover maintains a declarative [`TooltipState`]: at most one tooltip,
//!   shown and hidden instantly, always carrying the full node name.
//! - Resize recomputes the viewport (with axis floors and a desktop-only
//!   main-axis minimum) and re-lays out without touching collapse state.
//!
//! Interactions are last-writer-wins: a new activation never waits for an
//! in-flight transition — it recomputes from the current model state and the
//! render surface overrides whatever was still animating.
//!
//! ## Minimal usage
//!
//! ```
//! use espalier_controller::{Effect, TreeController};
//! use espalier_tree::{Record, TreeModel};
//! use kurbo::Size;
//!
//! let data = Record {
//!     name: "Vision".into(),
//!     children: vec![Record { name: "Goal A".into(), ..Default::default() }],
//!     ..Default::default()
//! };
//! let model = TreeModel::build(&data).unwrap();
//!
//! // Initial frame: only the root, entering.
//! let (mut controller, first) = TreeController::new(model, Size::new(1280.0, 800.0)).unwrap();
//! assert_eq!(first.diff.entering_nodes.len(), 1);
//!
//! // Expand the root.
//! let root = controller.model().root();
//! match controller.activate(root).unwrap() {
//!     Effect::Update(frame) => assert_eq!(frame.diff.entering_nodes.len(), 1),
//!     Effect::Navigate { .. } => unreachable!(),
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod tooltip;

pub use controller::{Effect, Frame, TRANSITION_DURATION, TreeController};
pub use tooltip::TooltipState;
