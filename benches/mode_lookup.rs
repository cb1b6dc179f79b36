use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_modes::{Mode, ModeKind, Version, character_count_bits, descriptor_for};

fn bench_descriptor_for(c: &mut Criterion) {
    c.bench_function("descriptor_for_all_modes", |b| {
        b.iter(|| {
            for kind in ModeKind::ALL {
                black_box(descriptor_for(black_box(kind)));
            }
        })
    });
}

fn bench_count_bits_raw(c: &mut Criterion) {
    let mode = descriptor_for(ModeKind::Byte);
    c.bench_function("character_count_bits_v1_to_v40", |b| {
        b.iter(|| {
            for version in 1..=40u32 {
                let _ = black_box(character_count_bits(black_box(&mode), black_box(version)));
            }
        })
    });
}

fn bench_count_bits_typed(c: &mut Criterion) {
    let mode = descriptor_for(ModeKind::Kanji);
    let version = Version::MAX;
    c.bench_function("character_count_bits_typed", |b| {
        b.iter(|| black_box(&mode).character_count_bits(black_box(version)))
    });
}

fn bench_from_bits(c: &mut Criterion) {
    c.bench_function("mode_from_bits_0_to_15", |b| {
        b.iter(|| {
            for bits in 0..16u8 {
                let _ = black_box(Mode::from_bits(black_box(bits)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_descriptor_for,
    bench_count_bits_raw,
    bench_count_bits_typed,
    bench_from_bits
);
criterion_main!(benches);
