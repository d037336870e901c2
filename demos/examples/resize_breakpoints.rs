// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive re-layout across the mobile/tablet/desktop breakpoints.
//!
//! Resizing never changes visibility, only positions: every frame here is a
//! pure update pass with empty enter/exit sets.
//!
//! Run:
//! - `cargo run -p espalier_demos --example resize_breakpoints`

use espalier_controller::TreeController;
use espalier_layout::{Breakpoint, MIN_OUTER_WIDTH};
use espalier_tree::{Record, TreeModel};
use kurbo::Size;
use tracing_subscriber::EnvFilter;

fn rec(name: &str, children: Vec<Record>) -> Record {
    Record {
        name: name.into(),
        children,
        ..Default::default()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model = TreeModel::build(&rec(
        "Vision",
        vec![
            rec("Goal A", vec![rec("Obj 1", vec![]), rec("Obj 2", vec![])]),
            rec("Goal B", vec![rec("Obj 3", vec![])]),
        ],
    ))
    .expect("demo data is well-formed");

    let (mut controller, _) =
        TreeController::new(model, Size::new(1280.0, 800.0)).expect("valid surface size");

    // Expand everything so positions are interesting.
    let root = controller.model().root();
    let _ = controller.activate(root).expect("layout succeeds");
    for goal in controller.model().node(root).visible_children().to_vec() {
        let _ = controller.activate(goal).expect("layout succeeds");
    }

    for outer in [
        Size::new(1440.0, 900.0),
        Size::new(900.0, 700.0),
        Size::new(390.0, 700.0),
        // Below the floors: clamped, never invalid.
        Size::new(100.0, 100.0),
    ] {
        let frame = controller.resize(outer).expect("floors keep layout valid");
        let viewport = controller.viewport();
        println!(
            "outer {:>4}x{:<4} -> {:?} viewport {:.0}x{:.0}, update-only: {}",
            outer.width,
            outer.height,
            Breakpoint::of(outer.width.max(MIN_OUTER_WIDTH)),
            viewport.width,
            viewport.height,
            frame.diff.is_update_only(),
        );
    }
}
