// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal host shell: link navigation and the summary panel.
//!
//! The engine never navigates; activating a link leaf hands the URL back to
//! the host. Likewise the "vision statement" summary panel is plain host
//! state, toggled independently of the tree's collapse state.
//!
//! Run:
//! - `cargo run -p espalier_demos --example shell_navigation`

use espalier_controller::{Effect, TreeController};
use espalier_tree::{Record, TreeModel};
use kurbo::Size;
use tracing_subscriber::EnvFilter;

/// Host-side presentation state, outside the tree engine.
struct Shell {
    summary_panel_open: bool,
}

impl Shell {
    fn open_in_new_tab(&self, url: &str) {
        // A browser host would spawn a new browsing context here.
        println!("shell: open {url} in a new tab");
    }

    fn toggle_summary_panel(&mut self) {
        self.summary_panel_open = !self.summary_panel_open;
        println!("shell: summary panel open = {}", self.summary_panel_open);
    }
}

const DATA: &str = r#"{
  "name": "OSINT Resources",
  "children": [
    {
      "name": "Search Engines",
      "children": [
        { "name": "Shodan", "type": "url", "url": "https://www.shodan.io" },
        { "name": "Censys", "type": "url", "url": "https://censys.io" }
      ]
    }
  ]
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let record: Record = serde_json::from_str(DATA).expect("demo data parses");
    let model = TreeModel::build(&record).expect("demo data is well-formed");
    let (mut controller, _) =
        TreeController::new(model, Size::new(1280.0, 800.0)).expect("valid surface size");
    let mut shell = Shell {
        summary_panel_open: true,
    };

    // Drill down to the link leaves.
    let root = controller.model().root();
    let _ = controller.activate(root).expect("layout succeeds");
    let engines = controller.model().node(root).visible_children()[0];
    let _ = controller.activate(engines).expect("layout succeeds");

    // The panel is independent presentation state: closing it has nothing to
    // do with collapse state, and re-activating the root won't reopen it.
    shell.toggle_summary_panel();

    for leaf in controller.model().node(engines).visible_children().to_vec() {
        match controller.activate(leaf).expect("layout succeeds") {
            Effect::Navigate { url } => shell.open_in_new_tab(&url),
            Effect::Update(_) => unreachable!("link leaves never toggle"),
        }
    }

    let _ = controller.activate(root).expect("layout succeeds");
    println!(
        "shell: root collapsed; panel untouched (open = {})",
        shell.summary_panel_open
    );
}
