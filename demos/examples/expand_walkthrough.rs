// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expand a vision/goals tree one activation at a time.
//!
//! Loads a nested JSON record, renders the initial collapsed state, then
//! walks through a couple of activations, printing the enter/update/exit
//! sets a render surface would animate.
//!
//! Run:
//! - `cargo run -p espalier_demos --example expand_walkthrough`

use espalier_controller::{Effect, Frame, TreeController};
use espalier_tree::{Record, TreeModel};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

const DATA: &str = r#"{
  "name": "Vision",
  "children": [
    {
      "name": "Goal A: Coverage",
      "children": [
        { "name": "Obj 1: Public registries" },
        { "name": "Obj 2: Archives" }
      ]
    },
    {
      "name": "Goal B: Tooling",
      "children": [
        { "name": "Shodan", "type": "url", "url": "https://www.shodan.io" }
      ]
    }
  ]
}"#;

fn print_frame(label: &str, frame: &Frame) {
    println!("-- {label} --");
    println!(
        "   enter {} nodes / {} edges, update {} / {}, exit {} / {} ({}ms)",
        frame.diff.entering_nodes.len(),
        frame.diff.entering_edges.len(),
        frame.diff.updating_nodes.len(),
        frame.diff.updating_edges.len(),
        frame.diff.exiting_nodes.len(),
        frame.diff.exiting_edges.len(),
        frame.duration.as_millis(),
    );
    for enter in &frame.diff.entering_nodes {
        println!(
            "   + {:?} from ({:.0}, {:.0}) to ({:.0}, {:.0})",
            enter.id, enter.from.x, enter.from.y, enter.to.x, enter.to.y
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let record: Record = serde_json::from_str(DATA).expect("demo data parses");
    let model = TreeModel::build(&record).expect("demo data is well-formed");

    let (mut controller, first) =
        TreeController::new(model, Size::new(1280.0, 800.0)).expect("valid surface size");
    print_frame("initial render (root only)", &first);

    let root = controller.model().root();
    match controller.activate(root).expect("layout succeeds") {
        Effect::Update(frame) => print_frame("activate root: goals unfold", &frame),
        Effect::Navigate { .. } => unreachable!("root is not a link"),
    }

    let goal_a = controller.model().node(root).visible_children()[0];
    match controller.activate(goal_a).expect("layout succeeds") {
        Effect::Update(frame) => print_frame("activate Goal A: objectives unfold", &frame),
        Effect::Navigate { .. } => unreachable!("Goal A is not a link"),
    }

    // Hovering shows the full name even when the surface truncates labels.
    let label = controller.model().node(goal_a).display_label(10).into_owned();
    let tooltip = controller.hover_enter(goal_a, Point::new(240.0, 120.0));
    println!("-- hover --");
    println!("   label {label:?}, tooltip {tooltip:?}");
    controller.hover_leave();

    // Collapse Goal A again: its objectives fold back into it.
    match controller.activate(goal_a).expect("layout succeeds") {
        Effect::Update(frame) => print_frame("activate Goal A again: fold back", &frame),
        Effect::Navigate { .. } => unreachable!(),
    }
}
