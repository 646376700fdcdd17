use std::ops::AddAssign;

use serde::Serialize;
use serde_json::Value;

use crate::report::report_model::{FlatMap, STATUS_FAIL, STATUS_PASS, TestResult, value_text};

// ============================================================================
// Suite summaries — flattened rows and pass/fail tallies
// ============================================================================

/// Pass/fail/total counts for a group of results.
///
/// Statuses other than `PASS` and `FAIL` only count towards `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub pass: usize,
    pub fail: usize,
    pub total: usize,
}

impl Summary {
    pub fn from_statuses<'a>(statuses: impl IntoIterator<Item = &'a str>) -> Self {
        let mut summary = Summary::default();
        for status in statuses {
            summary.total += 1;
            match status {
                STATUS_PASS => summary.pass += 1,
                STATUS_FAIL => summary.fail += 1,
                _ => {}
            }
        }
        summary
    }

    /// Results that are neither `PASS` nor `FAIL`.
    pub fn other(&self) -> usize {
        self.total - self.pass - self.fail
    }

    pub fn has_failures(&self) -> bool {
        self.fail > 0
    }

    /// `Test results: {total} tests, {pass} passed, {fail} failed`
    pub fn headline(&self) -> String {
        format!(
            "Test results: {} tests, {} passed, {} failed",
            self.total, self.pass, self.fail
        )
    }
}

impl AddAssign for Summary {
    fn add_assign(&mut self, rhs: Self) {
        self.pass += rhs.pass;
        self.fail += rhs.fail;
        self.total += rhs.total;
    }
}

/// One table row: ordered `(column, value)` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRow {
    cells: Vec<(String, Value)>,
}

impl ResultRow {
    /// `name`, `status`, then the result metadata spread over them.
    ///
    /// A metadata field named `name` or `status` replaces that cell's value
    /// without moving the column.
    pub fn from_result(name: &str, result: &TestResult) -> Self {
        let mut row = ResultRow::default();
        row.set("name", Value::String(name.to_string()));
        row.set("status", Value::String(result.status.clone()));
        row.extend(&result.metadata);
        row
    }

    pub fn set(&mut self, key: &str, value: Value) {
        match self.cells.iter_mut().find(|(k, _)| k == key) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((key.to_string(), value)),
        }
    }

    pub fn extend(&mut self, fields: &FlatMap) {
        for (key, value) in fields {
            self.set(key, value.clone());
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    /// Display text of each cell, in column order.
    pub fn texts(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|(_, v)| value_text(v))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Everything needed to render one suite.
#[derive(Debug, Clone)]
pub struct SuiteSummary<'a> {
    pub name: &'a str,
    pub rows: Vec<ResultRow>,
    pub summary: Summary,
    pub metadata: &'a FlatMap,
}
