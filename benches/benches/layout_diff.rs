// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and diff throughput over generated trees.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use espalier_layout::{DiffOrigin, LayoutConfig, Viewport, diff, layout};
use espalier_tree::{Record, TreeModel};

const VIEWPORT: Viewport = Viewport {
    width: 1020.0,
    height: 760.0,
};

/// A uniform tree with `fanout` children per node, `depth` levels deep.
fn generated(fanout: usize, depth: usize) -> Record {
    fn build(label: &mut u32, fanout: usize, depth: usize) -> Record {
        *label += 1;
        let children = if depth == 0 {
            Vec::new()
        } else {
            (0..fanout).map(|_| build(label, fanout, depth - 1)).collect()
        };
        Record {
            name: format!("node-{label}"),
            children,
            ..Default::default()
        }
    }
    let mut label = 0;
    build(&mut label, fanout, depth)
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for (fanout, depth) in [(3, 4), (4, 5)] {
        let model = TreeModel::build(&generated(fanout, depth)).unwrap();
        let config = LayoutConfig::default();
        group.bench_function(format!("fanout{fanout}_depth{depth}"), |b| {
            b.iter(|| layout(black_box(&model), VIEWPORT, &config).unwrap());
        });
    }
    group.finish();
}

fn bench_toggle_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_pass");
    for (fanout, depth) in [(3, 4), (4, 5)] {
        let mut model = TreeModel::build(&generated(fanout, depth)).unwrap();
        let config = LayoutConfig::default();
        // Toggle a mid-tree branch back and forth, diffing each pass the way
        // the controller does on activation.
        let target = model.node(model.root()).visible_children()[0];
        group.bench_function(format!("fanout{fanout}_depth{depth}"), |b| {
            let mut previous = layout(&model, VIEWPORT, &config).unwrap();
            b.iter(|| {
                model.toggle(target);
                let current = layout(&model, VIEWPORT, &config).unwrap();
                let origin = DiffOrigin::for_node(target, Some(&previous), &current, VIEWPORT);
                let changes = diff(Some(&previous), &current, origin);
                previous = current;
                black_box(changes)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_toggle_pass);
criterion_main!(benches);
