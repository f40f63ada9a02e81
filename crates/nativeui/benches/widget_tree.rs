//! Benchmarks for widget tree mutation

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nativeui::property::keys;
use nativeui::{Handle, NativeUi};

/// A screen holding one layout with `size` labels.
fn build_flat(ui: &mut NativeUi, size: usize) -> Handle {
    let screen = ui.create_widget("Screen").unwrap();
    let layout = ui.create_widget("Layout").unwrap();
    ui.add_child(screen, layout).unwrap();
    for _ in 0..size {
        let label = ui.create_widget("Label").unwrap();
        ui.add_child(layout, label).unwrap();
    }
    screen
}

/// A chain of nested layouts `depth` deep.
fn build_deep(ui: &mut NativeUi, depth: usize) -> Handle {
    let root = ui.create_widget("Layout").unwrap();
    let mut parent = root;
    for _ in 0..depth {
        let child = ui.create_widget("Layout").unwrap();
        ui.add_child(parent, child).unwrap();
        parent = child;
    }
    root
}

fn bench_create_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_insert");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut ui = NativeUi::default();
                black_box(build_flat(&mut ui, size));
                ui
            });
        });
    }

    group.finish();
}

fn bench_destroy(c: &mut Criterion) {
    let mut group = c.benchmark_group("destroy");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("flat", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut ui = NativeUi::default();
                    let screen = build_flat(&mut ui, size);
                    (ui, screen)
                },
                |(mut ui, screen)| {
                    ui.destroy_widget(black_box(screen)).unwrap();
                    ui
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("flat_with_survivors", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut ui = NativeUi::default();
                    let screen = build_flat(&mut ui, size);
                    for _ in 0..size {
                        ui.create_widget("Label").unwrap();
                    }
                    (ui, screen)
                },
                |(mut ui, screen)| {
                    ui.destroy_widget(black_box(screen)).unwrap();
                    ui
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("deep", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut ui = NativeUi::default();
                    let root = build_deep(&mut ui, size);
                    (ui, root)
                },
                |(mut ui, root)| {
                    ui.destroy_widget(black_box(root)).unwrap();
                    ui
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_properties(c: &mut Criterion) {
    let mut ui = NativeUi::default();
    let label = ui.create_widget("Label").unwrap();
    let mut buffer = [0u8; 64];

    c.bench_function("set_get_text", |b| {
        b.iter(|| {
            ui.set_property(label, keys::TEXT, black_box("Hello")).unwrap();
            ui.get_property(label, keys::TEXT, &mut buffer).unwrap()
        });
    });
}

criterion_group!(benches, bench_create_insert, bench_destroy, bench_properties);
criterion_main!(benches);
