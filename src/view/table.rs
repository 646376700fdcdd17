use crate::report::summary::{ResultRow, Summary};
use crate::view::node::Element;

// ============================================================================
// Result tables
// ============================================================================

/// Build a suite's result table with its summary header.
///
/// The header row is taken from the first row's keys, so every row is
/// expected to carry the same columns. Cell values are emitted as text only.
pub fn render_table(rows: &[ResultRow], summary: &Summary) -> Element {
    let header = Element::new("div")
        .with_class("table-header")
        .with_child(summary_heading(summary));

    let mut head_row = Element::new("tr");
    if let Some(first) = rows.first() {
        for key in first.keys() {
            head_row.append(Element::new("th").with_text(capitalize(key)));
        }
    }

    let mut body = Element::new("tbody");
    for row in rows {
        let mut tr = Element::new("tr");
        for text in row.texts() {
            tr.append(Element::new("td").with_text(text));
        }
        body.append(tr);
    }

    let table = Element::new("table")
        .with_class("styled-table")
        .with_child(Element::new("thead").with_child(head_row))
        .with_child(body);

    Element::new("div")
        .with_class("table-wrap")
        .with_child(header)
        .with_child(table)
}

/// `Test results: N tests, P passed, F failed`, with the counts styled.
fn summary_heading(summary: &Summary) -> Element {
    Element::new("h2")
        .with_text(format!("Test results: {} tests, ", summary.total))
        .with_child(
            Element::new("label")
                .with_class("passed")
                .with_text(format!("{} passed,", summary.pass)),
        )
        .with_text(" ")
        .with_child(
            Element::new("label")
                .with_class("failed")
                .with_text(format!("{} failed", summary.fail)),
        )
}

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
