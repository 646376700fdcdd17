use crate::{
    error::ReportError,
    view::{
        block::ViewBuilder,
        page::{HtmlOptions, RenderedReport, DEFAULT_CONTAINER_ID},
    },
};

pub mod cli;
pub mod error;
pub mod report;
pub mod trace;
pub mod view;

/// Parse a JSON report document and build its page tree into `container_id`.
///
/// Uses a fresh builder, so block ids restart for every call.
pub fn render_report(container_id: &str, document_text: &str) -> Result<RenderedReport, ReportError> {
    ViewBuilder::new().render_report(container_id, document_text)
}

/// Parse a JSON report document and return the complete HTML page.
pub fn render_html_page(document_text: &str, options: &HtmlOptions) -> Result<String, ReportError> {
    let rendered = render_report(DEFAULT_CONTAINER_ID, document_text)?;
    Ok(rendered.to_html(options))
}
