// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Espalier Tree: the model behind a collapsible hierarchy diagram.
//!
//! Espalier Tree converts a nested record (typically deserialized from a JSON
//! resource) into an arena of nodes with stable identities and per-node
//! expand/collapse state.
//!
//! - Each input record becomes exactly one [`Node`] with an id assigned once
//!   at construction and never regenerated, so downstream diffing can match
//!   nodes across render passes.
//! - A node keeps its children in one of two ordered sets: the visible set
//!   (expanded) or the hidden set (collapsed). Exactly one of the two is
//!   populated at any time; leaves have neither.
//! - [`TreeModel::toggle`] and [`TreeModel::collapse_all`] are the only
//!   mutators. Layout and rendering layers read snapshots and never write.
//!
//! ## Input schema
//!
//! ```json
//! { "name": "Vision",
//!   "children": [
//!     { "name": "Docs", "type": "url", "url": "https://example.org" }
//!   ] }
//! ```
//!
//! A record must carry a non-empty `name`; a record with `type == "url"` must
//! also carry `url`. Violations fail the whole build with [`BuildError`]
//! rather than silently dropping nodes, since a partially built tree would
//! misrepresent the data.
//!
//! ## Minimal usage
//!
//! ```
//! use espalier_tree::{Record, TreeModel};
//!
//! let data = Record {
//!     name: "Vision".into(),
//!     children: vec![Record { name: "Goal A".into(), ..Default::default() }],
//!     ..Default::default()
//! };
//!
//! let mut model = TreeModel::build(&data).unwrap();
//!
//! // Initially everything is expanded; hide all descendants of the root.
//! model.collapse_all();
//! assert_eq!(model.visible().len(), 1);
//!
//! // Expand the root again.
//! model.toggle(model.root());
//! assert_eq!(model.visible().len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod record;
pub mod tree;

pub use record::{BuildError, Record};
pub use tree::{Node, NodeId, NodeKind, TreeModel};
