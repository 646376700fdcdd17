use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::report::summary::Summary;

/// One line of the render trace.
#[derive(Debug, Serialize)]
pub struct RenderEvent {
    pub timestamp_ms: u128,

    /// `block`, `table` or `report`
    pub kind: String,

    pub title: Option<String>,
    pub block_id: Option<String>,
    pub expanded: Option<bool>,
    pub rows: Option<usize>,

    pub summary: Option<Summary>,
}

impl RenderEvent {
    pub fn now(kind: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            kind: kind.to_string(),
            title: None,
            block_id: None,
            expanded: None,
            rows: None,
            summary: None,
        }
    }

    pub fn with_title(mut self, title: impl ToString) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_block(mut self, block_id: &str, expanded: bool) -> Self {
        self.block_id = Some(block_id.to_string());
        self.expanded = Some(expanded);
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }
}
