//! Performance benchmarks for parsing and transposition

use chordsheet::{parse, transpose};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_sheet(verses: usize) -> String {
    let verse = "[Verse]\n\
                 G           D/F#        Em7\n\
                 Here comes the morning, bright above\n\
                 C          Am7      D7sus4  D\n\
                 Carry me home across the water\n\
                 \n";
    let mut sheet = String::from("Título: Morning\nArtista: The Band\nTom: G\n============\n\n");
    for _ in 0..verses {
        sheet.push_str(verse);
    }
    sheet
}

fn bench_parse(c: &mut Criterion) {
    let sheet = sample_sheet(50);

    c.bench_function("parse_50_verses", |b| {
        b.iter(|| {
            let _ = parse(black_box(&sheet));
        });
    });
}

fn bench_transpose_row(c: &mut Criterion) {
    let row = "Dm7/F   G7(b9)   Cmaj7   A7sus4   Bb   Ebm6   F#m7(b5)   B7";

    c.bench_function("transpose_chord_row", |b| {
        b.iter(|| {
            let _ = transpose(black_box(row), black_box(5));
        });
    });
}

fn bench_transpose_document(c: &mut Criterion) {
    let song = parse(&sample_sheet(50));

    c.bench_function("transpose_document_50_verses", |b| {
        b.iter(|| {
            let _ = black_box(&song).transposed(black_box(-3));
        });
    });
}

criterion_group!(benches, bench_parse, bench_transpose_row, bench_transpose_document);
criterion_main!(benches);
