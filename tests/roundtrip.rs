//! Whole-stream round trips, one per scenario in the container format's test plan. Each stream is
//! built in memory; there is no bundled fixture corpus for this format.

use std::io::Cursor;

use gpi::container::Localized;
use gpi::coord::CoordPair;
use gpi::enums::Codepage;
use gpi::flags::Flags16;
use gpi::raw::{RecordHeader, RecordKind};
use gpi::record::{Address, Area, Bitmap, CategoryReference, PoiGroup, PoiHeader, Waypoint};
use gpi::{Reader, Record, Writer};

fn encode_all(records: &[Record]) -> Vec<u8> {
    let mut writer = Writer::new(Vec::new());
    writer.write_all(records.iter()).unwrap();
    writer.write_end().unwrap();
    writer.into_inner()
}

fn decode_all(bytes: Vec<u8>) -> (Vec<Record>, bool) {
    let mut reader = Reader::new(Cursor::new(bytes));
    let records = reader.by_ref().map(Result::unwrap).collect();
    (records, reader.saw_end())
}

#[test]
fn minimum_file() {
    let poi_header = Record::PoiHeader(PoiHeader {
        header: RecordHeader::without_aux(RecordKind::PoiHeader, Flags16::default(), 0),
        version: *b"01",
        codepage: Codepage::UNICODE,
        auxiliary_type: 0,
        children: Vec::new(),
    });

    let bytes = encode_all(&[poi_header.clone()]);
    let (records, saw_end) = decode_all(bytes.clone());

    assert!(saw_end);
    assert_eq!(1, records.len());
    assert_eq!(poi_header, records[0]);

    // the re-encoded stream must be bit-identical
    assert_eq!(bytes, encode_all(&[records[0].clone()]));
}

#[test]
fn waypoint_roundtrip() {
    let mut shortname = Localized::new();
    shortname.push(*b"en", b"SF".to_vec());
    let waypoint = Record::Waypoint(Waypoint {
        header: RecordHeader::without_aux(RecordKind::Waypoint, Flags16::default(), 0),
        coords: CoordPair {
            latitude: 450_658_979,
            longitude: -1_463_070_000,
        },
        reserved: 0,
        flags: Flags16::with(8, true),
        shortname,
        children: Vec::new(),
    });

    let bytes = encode_all(&[waypoint.clone()]);
    let (records, _) = decode_all(bytes);
    assert_eq!(1, records.len());
    assert_eq!(waypoint, records[0]);
}

#[test]
fn address_presence_mask() {
    let mut city = Localized::new();
    city.push(*b"en", b"Boston".to_vec());
    let address = Address {
        header: RecordHeader::without_aux(RecordKind::Address, Flags16::default(), 0),
        flags: Flags16::default(),
        city: Some(city),
        country: None,
        state: None,
        postal_code: Some(b"02108".to_vec()),
        street_name: None,
        building_id: None,
    };

    assert_eq!(0x0009, address.have_mask().0);

    let record = Record::Address(address.clone());
    let bytes = record.encode().unwrap();
    let (records, _) = decode_all(bytes);
    assert_eq!(1, records.len());
    match &records[0] {
        Record::Address(decoded) => assert_eq!(&address, decoded),
        other => panic!("expected Address, got {other:?}"),
    }
}

#[test]
fn bitmap_with_mask() {
    let bitmap = Bitmap {
        header: RecordHeader::without_aux(RecordKind::Bitmap, Flags16::default(), 0),
        bitmap_id: 1,
        height: 2,
        width: 2,
        line_length: 2,
        bits_per_pixel: 8,
        reserved0: 0,
        reserved1: 0,
        transparent_color: 0,
        flags: Flags16::default(),
        palette_offset: 0,
        image_offset: 0,
        image_data: vec![0, 1, 2, 3],
        palette: vec![0xFF000000, 0xFF0000FF, 0xFF00FF00, 0xFFFF0000],
        mask_data: vec![9, 9, 9, 9],
        children: Vec::new(),
    };

    let record = Record::Bitmap(bitmap);
    let bytes = record.encode().unwrap();

    let (records, _) = decode_all(bytes);
    match &records[0] {
        Record::Bitmap(decoded) => {
            assert!(decoded.flags.get(0), "mask-present bit must be set");
            assert_eq!(4, decoded.mask_data.len());
            assert_eq!(vec![9, 9, 9, 9], decoded.mask_data);
        }
        other => panic!("expected Bitmap, got {other:?}"),
    }
}

#[test]
fn nested_poi_group() {
    let waypoint = |name: &str| {
        let mut shortname = Localized::new();
        shortname.push(*b"en", name.as_bytes().to_vec());
        Record::Waypoint(Waypoint {
            header: RecordHeader::without_aux(RecordKind::Waypoint, Flags16::default(), 0),
            coords: CoordPair {
                latitude: 0,
                longitude: 0,
            },
            reserved: 0,
            flags: Flags16::with(8, true),
            shortname,
            children: Vec::new(),
        })
    };

    let area = |name: &str| {
        Record::Area(Area {
            header: RecordHeader::without_aux(RecordKind::Area, Flags16::default(), 0),
            max: CoordPair {
                latitude: 1,
                longitude: 1,
            },
            min: CoordPair {
                latitude: 0,
                longitude: 0,
            },
            reserved: 0,
            flags: Flags16::default(),
            unknown: 0,
            children: vec![waypoint(name)],
        })
    };

    let mut source = Localized::new();
    source.push(*b"en", b"group".to_vec());
    let poi_group = Record::PoiGroup(PoiGroup {
        header: RecordHeader::without_aux(RecordKind::PoiGroup, Flags16::default(), 0),
        source,
        areas: vec![area("one"), area("two")],
        children: Vec::new(),
    });

    let bytes = poi_group.encode().unwrap();
    let (records, _) = decode_all(bytes);
    assert_eq!(1, records.len());
    match &records[0] {
        Record::PoiGroup(decoded) => {
            assert_eq!(2, decoded.areas.len());
            for area in &decoded.areas {
                assert_eq!(RecordKind::Area, area.kind());
                assert_eq!(1, area.children().len());
                let expected_waypoint_bytes = area.children()[0].encode().unwrap();
                assert_eq!(
                    expected_waypoint_bytes.len() as u32,
                    area.header().aux_data_size()
                );
            }
        }
        other => panic!("expected PoiGroup, got {other:?}"),
    }
}

#[test]
fn end_sentinel_termination() {
    use gpi::timestamp::Timestamp;
    let garmin_header = Record::GarminHeader(gpi::record::GarminHeader {
        header: RecordHeader::without_aux(RecordKind::GarminHeader, Flags16::default(), 0),
        version: *b"01",
        timestamp: Timestamp::garmin_epoch(),
        flags: Flags16::default(),
        name: b"test".to_vec(),
        children: Vec::new(),
    });

    let bytes = encode_all(&[garmin_header]);
    let mut reader = Reader::new(Cursor::new(bytes));
    assert!(reader.next().unwrap().is_ok());
    assert!(reader.next().is_none());
    assert!(reader.saw_end());
}

#[test]
fn category_reference_in_waypoint_children() {
    let category_ref = Record::CategoryReference(CategoryReference {
        header: RecordHeader::without_aux(RecordKind::CategoryReference, Flags16::default(), 2),
        category_id: 42,
        children: Vec::new(),
    });
    let mut shortname = Localized::new();
    shortname.push(*b"en", b"with-category".to_vec());
    let waypoint = Record::Waypoint(Waypoint {
        header: RecordHeader::without_aux(RecordKind::Waypoint, Flags16::default(), 0),
        coords: CoordPair {
            latitude: 10,
            longitude: 20,
        },
        reserved: 0,
        flags: Flags16::with(8, true),
        shortname,
        children: vec![category_ref],
    });

    let bytes = encode_all(&[waypoint.clone()]);
    let (records, saw_end) = decode_all(bytes);
    assert!(saw_end);
    assert_eq!(waypoint, records[0]);
    match &records[0] {
        Record::Waypoint(w) => match &w.children[0] {
            Record::CategoryReference(c) => assert_eq!(42, c.category_id),
            other => panic!("expected CategoryReference, got {other:?}"),
        },
        other => panic!("expected Waypoint, got {other:?}"),
    }
}
