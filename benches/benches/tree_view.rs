// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and frame recording over complete trees.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use understory_graph::{BinaryTree, FixedAdvanceMeasure, Font};
use understory_graph_view::Canvas;
use understory_tree_layout::TreeLayout;

fn complete_tree(n: usize) -> BinaryTree {
    BinaryTree::from_level_order(
        (1..=n).map(|i| i.to_string()),
        &FixedAdvanceMeasure::default(),
        &Font::default(),
    )
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for n in [1_000, 10_000, 100_000] {
        let mut tree = complete_tree(n);
        let mut canvas = Canvas::new(1280, 800);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let stats = TreeLayout::default().layout(black_box(&mut tree), &mut canvas);
                black_box(stats);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for n in [1_000, 100_000] {
        let mut tree = complete_tree(n);
        let mut canvas = Canvas::new(1280, 800);
        TreeLayout::default().layout(&mut tree, &mut canvas);

        group.bench_with_input(BenchmarkId::new("culled", n), &n, |b, _| {
            canvas.render_off_screen = false;
            b.iter(|| black_box(canvas.render(&tree).commands().len()));
        });
        group.bench_with_input(BenchmarkId::new("everything", n), &n, |b, _| {
            canvas.render_off_screen = true;
            b.iter(|| black_box(canvas.render(&tree).commands().len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
