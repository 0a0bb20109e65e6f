use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use organ_matrix::{
    MIDI_BASE, Matrix, MidiGrid, SvgRenderOptions, layout_schematic, render_schematic_svg,
};
use std::hint::black_box;

fn bench_schematic(c: &mut Criterion) {
    let matrix = Matrix::default();
    let options = SvgRenderOptions::default();

    c.bench_function("layout_schematic", |b| {
        b.iter(|| layout_schematic(black_box(&matrix)))
    });

    c.bench_function("render_schematic_svg", |b| {
        b.iter_batched(
            || layout_schematic(&matrix),
            |layout| render_schematic_svg(black_box(&layout), &options),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("midi_grid", |b| {
        b.iter(|| {
            MidiGrid::build(black_box(&matrix), MIDI_BASE)
                .map(|g| g.to_c_rows())
                .unwrap_or_default()
        })
    });
}

criterion_group!(benches, bench_schematic);
criterion_main!(benches);
