use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nameconv::{segment, Convention};

const IDENTIFIERS: [&str; 6] = [
    "PDFLoader",
    "SimpleXMLParser",
    "vimRPCPlugin",
    "GL11Version",
    "   foo   bar   ",
    "BöseÜberraschung_und-mehr",
];

fn bench_segment(c: &mut Criterion) {
    c.bench_function("segment", |b| {
        b.iter(|| {
            for ident in IDENTIFIERS {
                black_box(segment(black_box(ident)));
            }
        })
    });
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    for convention in Convention::ALL {
        group.bench_function(convention.name(), |b| {
            b.iter(|| {
                for ident in IDENTIFIERS {
                    black_box(convention.convert(black_box(ident)));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segment, bench_convert);
criterion_main!(benches);
