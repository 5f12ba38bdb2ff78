//! Benchmarks for layout tree operations
//!
//! Run with: cargo bench layout

use dockshell::content::{Surface, SurfaceId};
use dockshell::dock::{DockManager, DropTarget, DropZone, OpenOptions};
use dockshell::model::{Point, Rect};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// A dock split `panels - 1` times, alternating right and bottom drops
fn make_dock(panels: usize) -> DockManager {
    let mut dock = DockManager::new();
    dock.set_viewport(Rect::new(0.0, 0.0, 1920.0, 1080.0));

    let first = dock.open_tab(
        "tab-0",
        Surface::new(SurfaceId(0), "bench"),
        OpenOptions::default(),
    );
    let mut target = dock.item(first).and_then(|item| item.panel());

    for i in 1..panels {
        let tab = dock.open_tab(
            format!("tab-{}", i),
            Surface::new(SurfaceId(i as u64), "bench"),
            OpenOptions::default(),
        );
        let zone = if i % 2 == 0 {
            DropZone::Bottom
        } else {
            DropZone::Right
        };
        if let Some(panel) = target {
            dock.move_tab(tab, DropTarget { panel, zone });
        }
        target = dock.item(tab).and_then(|item| item.panel());
    }
    dock.take_commands();
    dock
}

// ============================================================================
// Layout and hit testing
// ============================================================================

#[divan::bench(args = [1, 8, 32, 128])]
fn build_split_tree(bencher: divan::Bencher, panels: usize) {
    bencher.bench_local(|| divan::black_box(make_dock(panels)));
}

#[divan::bench(args = [8, 32, 128])]
fn relayout(bencher: divan::Bencher, panels: usize) {
    let mut dock = make_dock(panels);
    bencher.bench_local(|| {
        dock.set_viewport(Rect::new(0.0, 0.0, 1280.0, 720.0));
        dock.take_commands();
    });
}

#[divan::bench(args = [8, 32, 128])]
fn drag_hit_test(bencher: divan::Bencher, panels: usize) {
    let mut dock = make_dock(panels);
    let tab = dock.items()[0].id;
    dock.pointer_down(tab, Point::new(10.0, 10.0));

    let mut x = 0.0_f32;
    bencher.bench_local(|| {
        x = (x + 37.0) % 1920.0;
        dock.pointer_move(Point::new(x, 540.0));
        divan::black_box(dock.drop_indicator());
        dock.take_commands();
    });
}

// ============================================================================
// Mutation
// ============================================================================

#[divan::bench(args = [8, 32])]
fn close_all_tabs(bencher: divan::Bencher, panels: usize) {
    bencher
        .with_inputs(|| make_dock(panels))
        .bench_local_values(|mut dock| {
            let ids: Vec<_> = dock.items().iter().map(|item| item.id).collect();
            for id in ids {
                dock.close_tab(id);
            }
            divan::black_box(dock.layout());
        });
}

#[divan::bench]
fn validate_large_tree(bencher: divan::Bencher) {
    let dock = make_dock(128);
    bencher.bench_local(|| divan::black_box(dock.validate()));
}
