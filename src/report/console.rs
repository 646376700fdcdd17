use crate::report::report_model::{ReportModel, STATUS_FAIL, STATUS_PASS};

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a report for terminal output.
///
/// Produces output like:
/// ```text
/// === Report: nightly ===
///
/// --- Suite: ltp ---
/// ✓ PASS  r1
/// ✗ FAIL  r2
/// - SKIP  r3
/// Test results: 3 tests, 1 passed, 1 failed
///
/// === Results: 1 passed, 1 failed (3 total) ===
/// ```
pub fn format_console_report(report: &ReportModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Report: {} ===\n", report.name()));

    for (suite_name, suite) in report.test_suites() {
        out.push_str(&format!("\n--- Suite: {} ---\n", suite_name));

        for (result_name, result) in &suite.test_results {
            let marker = match result.status.as_str() {
                STATUS_PASS => "\u{2713}",
                STATUS_FAIL => "\u{2717}",
                _ => "-",
            };
            out.push_str(&format!("{} {}  {}\n", marker, result.status, result_name));
        }

        let summary = suite.summary();
        out.push_str(&summary.headline());
        out.push('\n');
    }

    let overall = report.overall_summary();
    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total) ===\n",
        overall.pass, overall.fail, overall.total
    ));

    out
}
