mod common;

use report_html::error::ReportError;
use report_html::report::console::format_console_report;
use report_html::report::junit::generate_junit_xml;
use report_html::report::report_model::{
    DocumentFormat, ReportModel, TestResult, TestSuite, UNDEFINED_REPORT_NAME,
};
use report_html::report::summary::Summary;
use serde_json::{Value, json};

use common::{sample_report_json, sample_report_yaml, two_result_report_json};

fn sample() -> ReportModel {
    ReportModel::from_json(&sample_report_json()).unwrap()
}

fn missing_path(err: ReportError) -> String {
    match err {
        ReportError::MissingField { path } => path,
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

// ============================================================================
// 1. Parsing exposes every section in document order
// ============================================================================

#[test]
fn model_exposes_sections() {
    let model = sample();
    assert_eq!(model.name(), "nightly");
    assert_eq!(
        model.metadata().keys().collect::<Vec<_>>(),
        vec!["build", "ci_url", "date", "branch"]
    );
    assert_eq!(model.target()["platform"], json!("FVP_Base_RevC"));

    let assets: Vec<&str> = model.test_assets().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(assets, vec!["fip", "rootfs"]);

    let envs: Vec<&str> = model.test_environments().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(envs, vec!["lava"]);

    let suites: Vec<&str> = model.test_suites().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(suites, vec!["ltp", "optee-test"]);
}

#[test]
fn yaml_documents_parse_like_json() {
    let model = ReportModel::parse(&sample_report_yaml(), DocumentFormat::Yaml).unwrap();
    assert_eq!(model.name(), "nightly");
    assert_eq!(model.metadata()["build"], json!("42"));
    let ltp = model.suite("ltp").unwrap();
    assert_eq!(ltp.test_results.len(), 2);
    assert_eq!(ltp.test_results[1].1.status, "FAIL");
}

// ============================================================================
// 2. Validation errors name what is missing
// ============================================================================

#[test]
fn root_must_have_a_single_key() {
    let err = ReportModel::from_json(r#"{"a": {}, "b": {}}"#).unwrap_err();
    assert!(matches!(err, ReportError::NotSingleRoot { found: 2 }));

    let err = ReportModel::from_json("[]").unwrap_err();
    assert!(matches!(err, ReportError::NotSingleRoot { .. }));
}

#[test]
fn missing_section_is_reported_with_path() {
    let doc = json!({"r": {"metadata": {}, "target": {}, "test-environments": {}, "test-suites": {}}});
    let err = ReportModel::from_value(doc).unwrap_err();
    assert_eq!(missing_path(err), "r.test-config");

    let doc = json!({"r": {"metadata": {}, "target": {}, "test-config": {}, "test-environments": {}, "test-suites": {}}});
    let err = ReportModel::from_value(doc).unwrap_err();
    assert_eq!(missing_path(err), "r.test-config.test-assets");
}

#[test]
fn missing_result_status_is_reported_with_path() {
    let doc = json!({"r": {
        "metadata": {}, "target": {}, "test-config": {"test-assets": {}}, "test-environments": {},
        "test-suites": {"s": {"metadata": {}, "test-results": {"x": {"metadata": {}}}}}
    }});
    let err = ReportModel::from_value(doc).unwrap_err();
    assert_eq!(missing_path(err), "r.test-suites.s.test-results.x.status");
}

#[test]
fn wrong_shape_is_reported() {
    let doc = json!({"r": {
        "metadata": "not a map", "target": {}, "test-config": {"test-assets": {}},
        "test-environments": {}, "test-suites": {}
    }});
    let err = ReportModel::from_value(doc).unwrap_err();
    match err {
        ReportError::WrongType { path, .. } => assert_eq!(path, "r.metadata"),
        other => panic!("Expected WrongType, got {:?}", other),
    }
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = ReportModel::from_json("{not json").unwrap_err();
    assert!(matches!(err, ReportError::Json(_)));
    assert!(err.to_string().starts_with("Invalid JSON report"));
}

// ============================================================================
// 3. Suite summaries
// ============================================================================

#[test]
fn summaries_count_pass_fail_and_total() {
    let model = sample();
    let summaries = model.compute_suite_summaries();
    assert_eq!(summaries.len(), 2);

    let ltp = &summaries[0];
    assert_eq!(ltp.name, "ltp");
    assert_eq!(ltp.summary, Summary { pass: 1, fail: 1, total: 3 });
    assert_eq!(ltp.metadata["owner"], json!("qa"));

    let optee = &summaries[1];
    assert_eq!(optee.summary, Summary { pass: 1, fail: 0, total: 1 });
}

#[test]
fn rows_flatten_name_status_and_metadata() {
    let model = sample();
    let summaries = model.compute_suite_summaries();
    let rows = &summaries[0].rows;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["name", "status", "duration"]);
    assert_eq!(
        rows[1].texts().collect::<Vec<_>>(),
        vec!["r2".to_string(), "FAIL".to_string(), "3s".to_string()]
    );
}

#[test]
fn empty_suite_summarizes_to_zero() {
    let mut model = ReportModel::new("empty");
    model.upsert_suite("none", TestSuite::default());
    let summaries = model.compute_suite_summaries();
    assert_eq!(summaries[0].summary, Summary::default());
    assert!(summaries[0].rows.is_empty());
}

#[test]
fn overall_summary_adds_suites() {
    assert_eq!(sample().overall_summary(), Summary { pass: 2, fail: 1, total: 4 });
}

// ============================================================================
// 4. Merging
// ============================================================================

#[test]
fn merge_into_undefined_report_takes_name() {
    let mut merged = ReportModel::default();
    assert_eq!(merged.name(), UNDEFINED_REPORT_NAME);

    let warning = merged.merge_into(sample());
    assert!(warning.is_none());
    assert_eq!(merged.name(), "nightly");
    assert_eq!(merged.test_suites().len(), 2);
}

#[test]
fn merge_overrides_common_keys_in_place() {
    let mut merged = sample();
    let mut other = ReportModel::from_json(&two_result_report_json()).unwrap();
    other.set_name("nightly");
    other.upsert_suite(
        "ltp",
        TestSuite {
            metadata: Default::default(),
            test_results: vec![("only".into(), TestResult::new("PASS"))],
        },
    );

    let warning = merged.merge_into(other);
    assert!(warning.is_none());

    let suites: Vec<&str> = merged.test_suites().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(suites, vec!["ltp", "optee-test", "suite-a"]);
    assert_eq!(merged.suite("ltp").unwrap().test_results.len(), 1);
}

#[test]
fn merge_warns_on_name_mismatch() {
    let mut merged = sample();
    let other = ReportModel::from_json(&two_result_report_json()).unwrap();
    let warning = merged.merge_into(other).unwrap();
    assert!(warning.contains("smoke"));
    assert_eq!(merged.name(), "nightly");
}

// ============================================================================
// 5. Dumping back to the document shape
// ============================================================================

#[test]
fn dump_and_reload_preserves_model() {
    let model = sample();
    let json_text = model.to_json_string().unwrap();
    assert_eq!(ReportModel::from_json(&json_text).unwrap(), model);

    let yaml_text = model.to_yaml_string().unwrap();
    assert_eq!(ReportModel::from_yaml(&yaml_text).unwrap(), model);
}

#[test]
fn dump_keeps_extra_test_config_keys() {
    let doc = json!({"r": {
        "metadata": {}, "target": {}, "test-environments": {}, "test-suites": {},
        "test-config": {"test-assets": {}, "toolchain": "gcc-10"}
    }});
    let model = ReportModel::from_value(doc).unwrap();
    let value = model.to_value();
    assert_eq!(value["r"]["test-config"]["toolchain"], Value::String("gcc-10".into()));
}

// ============================================================================
// 6. Console and JUnit output
// ============================================================================

#[test]
fn console_report_lists_results_and_totals() {
    let out = format_console_report(&sample());
    assert!(out.starts_with("=== Report: nightly ==="));
    assert!(out.contains("--- Suite: ltp ---"));
    assert!(out.contains("\u{2713} PASS  r1"));
    assert!(out.contains("\u{2717} FAIL  r2"));
    assert!(out.contains("- SKIP  r3"));
    assert!(out.contains("Test results: 3 tests, 1 passed, 1 failed"));
    assert!(out.contains("=== Results: 2 passed, 1 failed (4 total) ==="));
}

#[test]
fn junit_marks_failures_and_skips() {
    let xml = generate_junit_xml(&sample());
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<testsuites name=\"nightly\" tests=\"4\" failures=\"1\">"));
    assert!(xml.contains("<testsuite name=\"ltp\" tests=\"3\" failures=\"1\" skipped=\"1\">"));
    assert!(xml.contains("<testcase name=\"r1\" classname=\"ltp\" />"));
    assert!(xml.contains("<failure message=\"FAIL\" type=\"TestFailure\">duration: 3s</failure>"));
    assert!(xml.contains("<skipped message=\"SKIP\" />"));
}

#[test]
fn junit_escapes_names() {
    let mut model = ReportModel::new("a&b");
    model.upsert_suite(
        "s<1>",
        TestSuite {
            metadata: Default::default(),
            test_results: vec![("\"quoted\"".into(), TestResult::new("PASS"))],
        },
    );
    let xml = generate_junit_xml(&model);
    assert!(xml.contains("name=\"a&amp;b\""));
    assert!(xml.contains("name=\"s&lt;1&gt;\""));
    assert!(xml.contains("name=\"&quot;quoted&quot;\""));
}
