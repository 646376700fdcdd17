use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::view::page::{DEFAULT_CONTAINER_ID, HtmlOptions};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "report-html",
    version,
    about = "Render test-report documents as interactive HTML pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: report-html.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSON-lines render trace to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a report document (JSON or YAML) as an HTML page
    Render {
        /// Report file; .yaml/.yml is read as YAML, anything else as JSON
        #[arg(short, long)]
        report: String,

        /// Output file path (default: report.html)
        #[arg(short, long)]
        output: Option<String>,

        /// Id of the element the report blocks are rendered into
        #[arg(long)]
        container_id: Option<String>,

        /// Page options as KEY=VALUE (title, logo_img, logo_href)
        #[arg(long = "html", value_name = "KEY=VALUE", num_args = 1..)]
        html: Vec<String>,
    },

    /// Summarize a report's results on the console or as JUnit XML
    Summary {
        /// Report file; .yaml/.yml is read as YAML, anything else as JSON
        #[arg(short, long)]
        report: String,

        /// Output format: console, junit
        #[arg(long, default_value = "console", value_parser = ["console", "junit"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Merge report files into a single report document
    Merge {
        /// Merged report path; .yaml/.yml is written as YAML, anything else as JSON
        #[arg(short, long)]
        output: String,

        /// Name of the merged report (default: first input's name)
        #[arg(long)]
        report_name: Option<String>,

        /// Report files or glob patterns, merged in order
        #[arg(required = true)]
        reports: Vec<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `report-html.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub html: HtmlOptions,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_container_id")]
    pub container_id: String,

    pub output: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_container_id() -> String { DEFAULT_CONTAINER_ID.to_string() }

pub const DEFAULT_CONFIG_PATH: &str = "report-html.yaml";
pub const DEFAULT_HTML_OUTPUT: &str = "report.html";

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
