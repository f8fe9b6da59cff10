use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use sstv_tools::error::LutError;
use sstv_tools::lut::{Encoding, SineLuts, TABLE_LEN};
use sstv_tools::lut_source::{self, parse_array, render_source, LicenseHeader};

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sstv-tools-{}-{}", std::process::id(), name))
}

#[test]
fn int8_table_reads_back_at_quarter_turns() {
    let luts = SineLuts::generate().unwrap();
    let text = render_source(&luts, &LicenseHeader::for_year(2026));

    let int8 = parse_array(&text, "SSTV_SIN_INT10_INT8").unwrap();
    assert_eq!(int8.len(), TABLE_LEN);
    assert_eq!(int8[0], 0);
    assert_eq!(int8[256], 127);
    assert_eq!(int8[768], -127);
}

#[test]
fn every_array_round_trips_through_the_source() {
    let luts = SineLuts::generate().unwrap();
    let text = render_source(&luts, &LicenseHeader::for_year(2026));
    for encoding in Encoding::ALL {
        let parsed = parse_array(&text, encoding.symbol()).unwrap();
        assert_eq!(parsed, luts.values(encoding), "{}", encoding.symbol());
    }
}

#[test]
fn declarations_are_in_fixed_order() {
    let luts = SineLuts::generate().unwrap();
    let text = render_source(&luts, &LicenseHeader::for_year(2026));

    let int8 = text.find("int8_t SSTV_SIN_INT10_INT8[1024] = { 0, 1, 2, 2,").unwrap();
    let uint8 = text.find("uint8_t SSTV_SIN_INT10_UINT8[1024] = { 128, 128, 129,").unwrap();
    let int16 = text.find("int16_t SSTV_SIN_INT10_INT16[1024] = { 0, 201, 402,").unwrap();
    assert!(text.starts_with("/*\n * Copyright (c) 2018-2026 "));
    assert!(text.contains("\n#include \"luts.h\"\n\n"));
    assert!(int8 < uint8 && uint8 < int16);
    assert!(text.ends_with(", };\n\n"));
    assert_eq!(text.matches("};\n\n").count(), 3);
}

#[test]
fn regeneration_is_deterministic() {
    let a = render_source(&SineLuts::generate().unwrap(), &LicenseHeader::for_year(2025));
    let b = render_source(&SineLuts::generate().unwrap(), &LicenseHeader::for_year(2025));
    assert_eq!(a, b);

    let c = render_source(&SineLuts::generate().unwrap(), &LicenseHeader::for_year(2030));
    assert_eq!(lut_source::strip_copyright(&a), lut_source::strip_copyright(&c));
}

#[test]
fn write_truncates_existing_file() {
    let path = scratch("luts.c");
    fs::write(&path, "x".repeat(200_000)).unwrap();

    let luts = SineLuts::generate().unwrap();
    let license = LicenseHeader::for_year(2026);
    lut_source::write_source(&path, &luts, &license).unwrap();
    let on_disk = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(on_disk, render_source(&luts, &license));
}

#[test]
fn header_is_written_alongside() {
    let path = scratch("luts.h");
    lut_source::write_header(&path, &LicenseHeader::for_year(2026)).unwrap();
    let on_disk = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    assert!(on_disk.contains("extern uint8_t SSTV_SIN_INT10_UINT8[1024];"));
}

#[test]
fn unwritable_location_reports_io_error() {
    let path = PathBuf::from("/nonexistent-dir/sstv-tools/luts.c");
    let luts = SineLuts::generate().unwrap();
    let err = lut_source::write_source(&path, &luts, &LicenseHeader::for_year(2026)).unwrap_err();
    match err {
        LutError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn up_to_date_file_from_another_year_is_not_stale() {
    let path = scratch("fresh-luts.c");
    let luts = SineLuts::generate().unwrap();
    lut_source::write_source(&path, &luts, &LicenseHeader::for_year(2021)).unwrap();

    let expected = render_source(&luts, &LicenseHeader::for_year(2026));
    let stale = lut_source::stale_targets(&[(path.clone(), expected)]).unwrap();
    fs::remove_file(&path).ok();

    assert!(stale.is_empty());
}

#[test]
fn single_edited_value_is_stale() {
    let path = scratch("edited-luts.c");
    let luts = SineLuts::generate().unwrap();
    let license = LicenseHeader::for_year(2026);
    let expected = render_source(&luts, &license);
    let edited = expected.replacen("{ 128, 128, 129,", "{ 127, 128, 129,", 1);
    assert_ne!(edited, expected);
    fs::write(&path, &edited).unwrap();

    let header = scratch("edited-luts.h");
    lut_source::write_header(&header, &license).unwrap();

    let stale = lut_source::stale_targets(&[
        (path.clone(), expected),
        (header.clone(), lut_source::render_header(&license)),
    ])
    .unwrap();
    fs::remove_file(&path).ok();
    fs::remove_file(&header).ok();

    assert_eq!(stale, vec![path]);
}

#[test]
fn missing_target_is_a_read_error() {
    let path = scratch("never-written-luts.c");
    let err = lut_source::stale_targets(&[(path.clone(), String::new())]).unwrap_err();
    match err {
        LutError::Read { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {}", other),
    }
}
