use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use gpi::container::Localized;
use gpi::coord::CoordPair;
use gpi::flags::Flags16;
use gpi::raw::{RecordHeader, RecordKind};
use gpi::record::{CategoryReference, Waypoint};
use gpi::{Reader, Record, Writer};

fn waypoint(name: &str, ncategories: usize) -> Record {
    let mut shortname = Localized::new();
    shortname.push(*b"en", name.as_bytes().to_vec());
    let children = (0..ncategories)
        .map(|id| {
            Record::CategoryReference(CategoryReference {
                header: RecordHeader::without_aux(RecordKind::CategoryReference, Flags16::default(), 2),
                category_id: id as u16,
                children: Vec::new(),
            })
        })
        .collect();
    Record::Waypoint(Waypoint {
        header: RecordHeader::without_aux(RecordKind::Waypoint, Flags16::default(), 0),
        coords: CoordPair {
            latitude: 450_658_979,
            longitude: -1_463_070_000,
        },
        reserved: 0,
        flags: Flags16::default(),
        shortname,
        children,
    })
}

fn encode(nwaypoints: usize) -> Vec<u8> {
    let mut writer = Writer::new(Vec::new());
    for i in 0..nwaypoints {
        let name = format!("waypoint-{i}");
        writer.write_record(&waypoint(&name, 2)).unwrap();
    }
    writer.write_end().unwrap();
    writer.into_inner()
}

fn decode(bytes: &[u8]) {
    let reader = Reader::new(Cursor::new(bytes));
    for record in reader {
        let _ = record.unwrap();
    }
}

fn roundtrip(nwaypoints: usize) {
    let bytes = encode(nwaypoints);
    decode(&bytes);
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for nwaypoints in [0usize, 1, 100, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(nwaypoints),
            &nwaypoints,
            |b, &n| b.iter(|| encode(n)),
        );
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for nwaypoints in [0usize, 1, 100, 10_000] {
        let bytes = encode(nwaypoints);
        group.bench_with_input(
            BenchmarkId::from_parameter(nwaypoints),
            &bytes,
            |b, bytes| b.iter(|| decode(bytes)),
        );
    }
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    for nwaypoints in [0usize, 1, 100, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(nwaypoints),
            &nwaypoints,
            |b, &n| b.iter(|| roundtrip(n)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
