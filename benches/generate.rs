use criterion::{criterion_group, criterion_main, Criterion};
use geo::polygon;

use wkt_writer::{GeoExtractor, Generator};

fn create_data() -> Vec<geo::Geometry> {
    // An L shape
    let poly = polygon![
        (x: 0.0, y: 0.0),
        (x: 4.0, y: 0.0),
        (x: 4.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 4.0),
        (x: 0.0, y: 4.0),
        (x: 0.0, y: 0.0),
    ];
    vec![geo::Geometry::Polygon(poly); 1000]
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let generator = Generator::new(GeoExtractor);

    c.bench_function("generate WKT for 1000 polygons", |b| {
        b.iter(|| {
            for geometry in &data {
                let _ = generator.generate(geometry).unwrap();
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
