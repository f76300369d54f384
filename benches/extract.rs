// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use conjugaison::{core::dom::parse_html, specs};

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/donner.html"))
        .expect("read tests/fixtures/donner.html")
}

fn bench_extract(c: &mut Criterion) {
    let html = load_sample();

    c.bench_function("parse_page", |b| {
        b.iter(|| {
            let doc = parse_html(black_box(&html));
            black_box(doc.root())
        })
    });

    let doc = parse_html(&html);
    c.bench_function("extract_subjonctif_passe", |b| {
        b.iter(|| {
            let forms = specs::extract(&doc.root(), black_box("SUBJONCTIF"), black_box("Passé")).unwrap();
            black_box(forms.len())
        })
    });

    c.bench_function("parse_and_extract", |b| {
        b.iter(|| {
            let doc = parse_html(black_box(&html));
            let forms = specs::extract(&doc.root(), "INDICATIF", "Imparfait").unwrap();
            black_box(forms.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
