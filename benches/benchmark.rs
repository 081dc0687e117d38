use std::fs;

use criterion::{criterion_group, criterion_main, Criterion};

use earclip::EarClipper;

fn load_fixture(name: &str) -> Vec<[f64; 2]> {
    // load JSON
    type Coords = Vec<[f64; 2]>;
    let s = fs::read_to_string("./tests/fixtures/".to_string() + name + ".json").unwrap();
    serde_json::from_str::<Coords>(&s).unwrap()
}

fn bench(c: &mut Criterion) {
    let mut earclipper = EarClipper::new();
    let mut triangles = Vec::new();

    for name in ["star", "comb", "circle", "blob", "spiral"] {
        let data = load_fixture(name);
        c.bench_function(name, |b| {
            b.iter(|| {
                earclipper
                    .triangulate(data.iter().copied(), &mut triangles)
                    .unwrap();
                assert_eq!(triangles.len(), data.len() - 2)
            })
        });
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
