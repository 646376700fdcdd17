use crate::report::report_model::{ReportModel, STATUS_FAIL, STATUS_PASS, value_text};

// ============================================================================
// JUnit XML reporter — standard CI integration format
// ============================================================================

/// Generate JUnit XML for CI systems (Jenkins, GitHub Actions, GitLab CI).
///
/// One `<testsuite>` per report suite. `FAIL` results carry a `<failure>`
/// whose body lists the result metadata; statuses other than `PASS`/`FAIL`
/// are reported as `<skipped>`.
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuites name="nightly" tests="2" failures="1">
///   <testsuite name="ltp" tests="2" failures="1" skipped="0">
///     <testcase name="r1" classname="ltp" />
///     <testcase name="r2" classname="ltp">
///       <failure message="FAIL" type="TestFailure">duration: 3s</failure>
///     </testcase>
///   </testsuite>
/// </testsuites>
/// ```
pub fn generate_junit_xml(report: &ReportModel) -> String {
    let mut suites = String::new();

    for (suite_name, suite) in report.test_suites() {
        let summary = suite.summary();
        let mut cases = String::new();

        for (result_name, result) in &suite.test_results {
            let name = escape_xml(result_name);
            let classname = escape_xml(suite_name);
            match result.status.as_str() {
                STATUS_PASS => cases.push_str(&format!(
                    "    <testcase name=\"{}\" classname=\"{}\" />\n",
                    name, classname
                )),
                STATUS_FAIL => {
                    let body = result
                        .metadata
                        .iter()
                        .map(|(k, v)| format!("{}: {}", k, value_text(v)))
                        .collect::<Vec<_>>()
                        .join("\n");
                    cases.push_str(&format!(
                        "    <testcase name=\"{name}\" classname=\"{classname}\">\n      <failure message=\"{status}\" type=\"TestFailure\">{body}</failure>\n    </testcase>\n",
                        name = name,
                        classname = classname,
                        status = STATUS_FAIL,
                        body = escape_xml(&body),
                    ));
                }
                other => cases.push_str(&format!(
                    "    <testcase name=\"{name}\" classname=\"{classname}\">\n      <skipped message=\"{status}\" />\n    </testcase>\n",
                    name = name,
                    classname = classname,
                    status = escape_xml(other),
                )),
            }
        }

        suites.push_str(&format!(
            "  <testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\" skipped=\"{skipped}\">\n{cases}  </testsuite>\n",
            name = escape_xml(suite_name),
            tests = summary.total,
            failures = summary.fail,
            skipped = summary.other(),
            cases = cases,
        ));
    }

    let overall = report.overall_summary();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuites name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\">\n{suites}</testsuites>\n",
        name = escape_xml(report.name()),
        tests = overall.total,
        failures = overall.fail,
        suites = suites,
    )
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
