use selftime::analysis::{format_percentage, rank_items, DEFAULT_TOP_ITEMS};
use selftime::domain::ParseError;
use selftime::profile_data::ProfileReport;
use std::io::Write;

#[test]
fn test_parse_simple_profile() {
    let report = ProfileReport::from_file("tests/fixtures/simple_profile.json")
        .expect("Failed to parse profile");

    assert!((report.total_time_seconds - 10.0).abs() < f64::EPSILON);
    assert_eq!(report.records.len(), 2);
    assert!((report.records[0].self_time_seconds - 5.0).abs() < f64::EPSILON);
    assert!((report.records[1].self_time_seconds - 3.0).abs() < f64::EPSILON);

    let ranking = rank_items(&report, DEFAULT_TOP_ITEMS);
    assert_eq!(format_percentage(ranking.items[0].percentage), "50.00%");
    assert_eq!(format_percentage(ranking.items[1].percentage), "30.00%");
}

#[test]
fn test_parse_full_summary_dump() {
    let report = ProfileReport::from_file("tests/fixtures/rustc_summary.json")
        .expect("Failed to parse summary");

    assert!((report.total_time_seconds - 2.5).abs() < 1e-12);
    assert_eq!(report.records.len(), 4);

    let ranking = rank_items(&report, DEFAULT_TOP_ITEMS);
    let labels: Vec<&str> = ranking.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["typeck", "LLVM_module_codegen", "mir_borrowck", "hir_lowering"]);

    let typeck = &ranking.items[0];
    assert_eq!(typeck.invocation_count, Some(102));
    assert!((typeck.self_time_ms - 1000.0).abs() < 1e-9);
    assert_eq!(format_percentage(typeck.percentage), "40.00%");

    // Largest rescaled value equals the largest self time
    let peak = ranking.items.iter().map(|i| i.rescaled_ms).fold(0.0_f64, f64::max);
    assert!((peak - 1000.0).abs() < 1e-9);
    assert!(ranking.items[3].rescaled_ms.abs() < 1e-9);
}

#[test]
fn test_zero_self_times_rescale_to_zero() {
    let report = ProfileReport::from_file("tests/fixtures/zero_self_time.json").unwrap();
    let ranking = rank_items(&report, DEFAULT_TOP_ITEMS);

    assert_eq!(ranking.items.len(), 2);
    for item in &ranking.items {
        assert!(item.rescaled_ms.abs() < f64::EPSILON);
        assert!(item.percentage.abs() < f64::EPSILON);
        assert!(!item.rescaled_ms.is_nan());
    }
}

#[test]
fn test_missing_field_is_malformed() {
    let err = ProfileReport::from_file("tests/fixtures/missing_query_data.json").unwrap_err();
    assert!(matches!(err, ParseError::Malformed(_)));
}

#[test]
fn test_top_fifty_of_many() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let entries: Vec<String> = (0..75)
        .map(|i| format!(r#"{{"label": "q{i}", "self_time": {{"secs": 0, "nanos": {}}}}}"#, i * 1000))
        .collect();
    write!(
        file,
        r#"{{"total_time": {{"secs": 1, "nanos": 0}}, "query_data": [{}]}}"#,
        entries.join(",")
    )
    .unwrap();

    let report = ProfileReport::from_file(file.path()).unwrap();
    let ranking = rank_items(&report, DEFAULT_TOP_ITEMS);

    assert_eq!(ranking.total_items, 75);
    assert_eq!(ranking.items.len(), 50);
    assert_eq!(ranking.items[0].label, "q74");
    assert_eq!(ranking.items[49].label, "q25");
}
