use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::report::report_model::ReportModel;
use crate::trace::trace::RenderEvent;
use crate::view::block::ViewBuilder;
use crate::view::node::{Element, escape_html};
use crate::view::table::render_table;
use crate::view::toggle::{HIDE_DELAY_MS, REVEAL_DELAY_MS};

// ============================================================================
// Full report rendering
// ============================================================================

/// Element id of the report name heading.
pub const REPORT_NAME_ID: &str = "report-name";

/// Default element id of the container the blocks are appended to.
pub const DEFAULT_CONTAINER_ID: &str = "report-content";

const REPORT_STYLE: &str = include_str!("assets/report.css");
const REPORT_SCRIPT: &str = include_str!("assets/report.js");

/// The model plus the two host elements a render fills in.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub model: ReportModel,

    /// `#report-name` heading carrying the report name
    pub report_name: Element,

    /// The container holding every top-level block, in render order
    pub content: Element,
}

/// Page decorations accepted as `KEY=VALUE` html options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlOptions {
    pub title: Option<String>,
    pub logo_img: Option<String>,
    pub logo_href: Option<String>,
}

impl HtmlOptions {
    pub const KEYS: [&'static str; 3] = ["title", "logo_img", "logo_href"];

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ReportError> {
        let slot = match key {
            "title" => &mut self.title,
            "logo_img" => &mut self.logo_img,
            "logo_href" => &mut self.logo_href,
            other => {
                return Err(ReportError::InvalidOption(format!(
                    "unknown html option '{}' (valid: {})",
                    other,
                    Self::KEYS.join(", ")
                )));
            }
        };
        *slot = Some(value.to_string());
        Ok(())
    }

    /// Apply `KEY=VALUE` pairs on top of the current values.
    pub fn apply_pairs(&mut self, pairs: &[String]) -> Result<(), ReportError> {
        for pair in pairs {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                ReportError::InvalidOption(format!("could not parse '{}' as KEY=VALUE", pair))
            })?;
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl ViewBuilder<'_> {
    /// Parse a JSON report and build its page.
    pub fn render_report(&mut self, container_id: &str, document_text: &str) -> Result<RenderedReport, ReportError> {
        let model = ReportModel::from_json(document_text)?;
        Ok(self.render_model(container_id, model))
    }

    /// Build the page for an already-validated report.
    ///
    /// Blocks are appended in a fixed order: metadata, target, test
    /// configuration (wrapping the test assets), test environments, test
    /// suites. Everything starts collapsed except the suites wrapper and the
    /// first suite.
    pub fn render_model(&mut self, container_id: &str, model: ReportModel) -> RenderedReport {
        let report_name = Element::new("h1")
            .with_id(REPORT_NAME_ID)
            .with_text(model.name());
        let mut content = Element::new("div").with_id(container_id);

        content.append(self.render_key_value_block(model.metadata(), "Metadata", false, None));
        content.append(self.render_key_value_block(model.target(), "Target", false, None));

        let mut assets = self.begin_block("Test assets", false, 0);
        for (name, asset) in model.test_assets() {
            let block = self.render_key_value_block(asset, name, false, None);
            assets.data.append(block);
        }
        let assets = assets.finish();
        content.append(self.render_container_block(assets, "Test configuration", false));

        let mut environments = self.begin_block("Test environments", false, 0);
        for (name, env) in model.test_environments() {
            let block = self.render_key_value_block(env, name, false, None);
            environments.data.append(block);
        }
        content.append(environments.finish());

        let mut suites = self.begin_block("Test suites", true, 0);
        for (index, suite) in model.compute_suite_summaries().into_iter().enumerate() {
            if let Some(tracer) = self.tracer() {
                tracer.log(
                    &RenderEvent::now("table")
                        .with_title(suite.name)
                        .with_rows(suite.rows.len())
                        .with_summary(suite.summary),
                );
            }
            let table = render_table(&suite.rows, &suite.summary);
            let block = self.render_key_value_block(suite.metadata, suite.name, index == 0, Some(table));
            suites.data.append(block);
        }
        content.append(suites.finish());

        if let Some(tracer) = self.tracer() {
            tracer.log(
                &RenderEvent::now("report")
                    .with_title(model.name())
                    .with_summary(model.overall_summary()),
            );
        }

        RenderedReport {
            model,
            report_name,
            content,
        }
    }
}

impl RenderedReport {
    /// The suite blocks inside the "Test suites" wrapper, in order.
    pub fn suite_blocks(&self) -> Vec<&Element> {
        self.content
            .child_elements()
            .last()
            .map(|suites| {
                suites
                    .find_by_class("block-report")
                    .into_iter()
                    .skip(1)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A complete, self-contained HTML document.
    pub fn to_html(&self, options: &HtmlOptions) -> String {
        let page_title = options
            .title
            .clone()
            .unwrap_or_else(|| self.model.name().to_string());

        let mut header = Element::new("div").with_class("header");
        if let Some(src) = &options.logo_img {
            let img = Element::new("img")
                .with_class("logo")
                .with_attr("src", src.as_str())
                .with_attr("alt", "logo");
            match &options.logo_href {
                Some(href) => header.append(
                    Element::new("a")
                        .with_attr("href", href.as_str())
                        .with_attr("target", "_blank")
                        .with_attr("rel", "noopener noreferrer")
                        .with_child(img),
                ),
                None => header.append(img),
            }
        }
        let mut header_text = Element::new("div").with_class("header-text");
        if let Some(title) = &options.title {
            header_text.append(Element::new("p").with_class("page-title").with_text(title.as_str()));
        }
        header_text.append(self.report_name.clone());
        header.append(header_text);

        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{page_title} — Test Report</title>
<style>
{style}
</style>
</head>
<body>
{header}
<div class="content">
{content}
</div>
<script>
const REVEAL_DELAY_MS = {reveal};
const HIDE_DELAY_MS = {hide};
</script>
<script>
{script}
</script>
</body>
</html>
"##,
            page_title = escape_html(&page_title),
            style = REPORT_STYLE,
            header = header.to_html(),
            content = self.content.to_html(),
            reveal = REVEAL_DELAY_MS,
            hide = HIDE_DELAY_MS,
            script = REPORT_SCRIPT,
        )
    }
}
