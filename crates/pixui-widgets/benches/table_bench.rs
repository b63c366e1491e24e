//! Benchmarks for table layout and rendering.
//!
//! Run with: cargo bench -p pixui-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pixui_core::geometry::Rect;
use pixui_render::RecordingSurface;
use pixui_text::MonoShaper;
use pixui_widgets::{DrawPhase, Table, Widget};
use std::hint::black_box;
use std::rc::Rc;

fn make_table(rows: usize, cols: usize) -> Table {
    let mut table = Table::new(Rc::new(MonoShaper));
    table.set_row_count(rows);
    table.set_column_count(cols);
    for col in 0..cols {
        table.set_column_width(col, 80);
    }
    for row in 0..rows {
        for col in 0..cols {
            table.set_cell_value(row, col, "The quick brown fox jumps over the lazy dog");
        }
    }
    // A few merges so the span walk is exercised.
    for row in (0..rows).step_by(3) {
        table.set_cell_merge_right(row, 0, true);
    }
    table
}

fn bench_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/relayout");

    for (rows, cols) in [(10, 4), (50, 8)] {
        let mut table = make_table(rows, cols);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &(),
            |b, _| {
                b.iter(|| {
                    // A width write forces a full size refresh.
                    table.set_column_width(0, 80);
                    black_box(table.size());
                })
            },
        );
    }

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/draw");

    for (rows, cols) in [(10, 4), (50, 8)] {
        let table = make_table(rows, cols);
        let mask = Rect::new(0, 0, 10_000, 10_000);
        let mut surface = RecordingSurface::new();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &(),
            |b, _| {
                b.iter(|| {
                    surface.clear();
                    table.draw(&mut surface, mask, DrawPhase::Main);
                    black_box(surface.commands().len());
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_relayout, bench_draw);
criterion_main!(benches);
