use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geo::polygon;
use hurdat_landfall::app::services::hurdat_parser::HurdatParser;
use hurdat_landfall::app::services::landfall_detector::LandfallDetector;
use hurdat_landfall::app::services::region::{BoundingBox, PolygonRegion};

/// Synthetic dataset: `storms` blocks of 40 observations drifting north-west
fn synthetic_dataset(storms: usize) -> String {
    let mut text = String::new();
    for storm in 0..storms {
        let year = 1900 + storm % 120;
        text.push_str(&format!(
            "AL{:02}{},            STORM{},     40,\n",
            storm % 100,
            year,
            storm
        ));
        for step in 0..40 {
            let lat = 15.0 + step as f64 * 0.4;
            let lon = 60.0 + step as f64 * 0.6 + (storm % 7) as f64;
            let status = if step % 3 == 0 { "TS" } else { "HU" };
            text.push_str(&format!(
                "{}08{:02}, {:02}00,  , {}, {:.1}N, {:.1}W, {:3}, -999,\n",
                year,
                1 + step / 4,
                (step % 4) * 6,
                status,
                lat,
                lon,
                60 + step
            ));
        }
    }
    text
}

fn florida_outline() -> PolygonRegion {
    let outline = polygon![
        (x: -87.6, y: 31.0), (x: -85.0, y: 31.0), (x: -81.5, y: 30.7), (x: -80.0, y: 27.0),
        (x: -80.1, y: 25.2), (x: -81.2, y: 25.1), (x: -82.7, y: 27.5), (x: -84.3, y: 30.0),
        (x: -87.6, y: 30.2), (x: -87.6, y: 31.0),
    ];
    PolygonRegion::from_polygon("Florida", outline).unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let text = synthetic_dataset(2000);
    let parser = HurdatParser::new();

    c.bench_function("parse_2000_storms", |b| {
        b.iter(|| parser.parse(black_box(&text)).unwrap())
    });
}

fn bench_detect(c: &mut Criterion) {
    let tracks = HurdatParser::new()
        .parse(&synthetic_dataset(2000))
        .unwrap()
        .tracks;
    let detector = LandfallDetector::new();
    let polygon = florida_outline();
    let bbox = BoundingBox::new("Florida", 24.5, 31.0, -87.6, -80.0).unwrap();

    c.bench_function("detect_polygon_2000_storms", |b| {
        b.iter(|| detector.detect(black_box(&tracks), &polygon))
    });
    c.bench_function("detect_bbox_2000_storms", |b| {
        b.iter(|| detector.detect(black_box(&tracks), &bbox))
    });
}

criterion_group!(benches, bench_parse, bench_detect);
criterion_main!(benches);
