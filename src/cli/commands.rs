use std::path::PathBuf;

use crate::error::ReportError;
use crate::report::console::format_console_report;
use crate::report::junit::generate_junit_xml;
use crate::report::report_model::{DocumentFormat, ReportModel};
use crate::trace::logger::TraceLogger;
use crate::view::block::ViewBuilder;
use crate::view::page::HtmlOptions;

// ============================================================================
// render subcommand
// ============================================================================

pub fn cmd_render(
    report_path: &str,
    output: &str,
    container_id: &str,
    html: &HtmlOptions,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = load_report(report_path)?;

    if verbose > 0 {
        eprintln!(
            "Rendering '{}' ({} suites) from {}...",
            model.name(),
            model.test_suites().len(),
            report_path
        );
    }

    let rendered = ViewBuilder::new()
        .with_tracer(tracer)
        .render_model(container_id, model);
    std::fs::write(output, rendered.to_html(html))?;

    let overall = rendered.model.overall_summary();
    println!(
        "Wrote {}: {} tests, {} passed, {} failed",
        output, overall.total, overall.pass, overall.fail
    );
    Ok(())
}

// ============================================================================
// summary subcommand
// ============================================================================

/// Print or write a report summary and return whether no result failed.
pub fn cmd_summary(
    report_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let model = load_report(report_path)?;

    if verbose > 0 {
        eprintln!("Summarizing '{}' as {}...", model.name(), format);
    }

    let output_content = match format {
        "junit" => generate_junit_xml(&model),
        _ => format_console_report(&model),
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(!model.overall_summary().has_failures())
}

// ============================================================================
// merge subcommand
// ============================================================================

pub fn cmd_merge(
    patterns: &[String],
    output: &str,
    report_name: Option<&str>,
    verbose: u8,
) -> Result<ReportModel, Box<dyn std::error::Error>> {
    let mut merged = ReportModel::default();
    if let Some(name) = report_name {
        merged.set_name(name);
    }

    let files = expand_patterns(patterns)?;
    if files.is_empty() {
        eprintln!("No report files matched: {}", patterns.join(" "));
    }

    for file in &files {
        let path = file.to_string_lossy();
        if verbose > 0 {
            eprintln!("  Merging: {}", path);
        }
        let other = load_report(&path)?;
        if let Some(warning) = merged.merge_into(other) {
            eprintln!("Warning: {}", warning);
        }
    }

    let text = merged.to_format_string(DocumentFormat::from_path(output))?;
    std::fs::write(output, text)?;

    println!(
        "Merged {} reports into {} ({} suites)",
        files.len(),
        output,
        merged.test_suites().len()
    );
    Ok(merged)
}

// ============================================================================
// Helpers
// ============================================================================

/// Read and validate a report file, choosing the parser by extension.
pub fn load_report(path: &str) -> Result<ReportModel, ReportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_string(),
        source,
    })?;
    ReportModel::parse(&text, DocumentFormat::from_path(path))
}

/// Expand glob patterns in order; within one pattern, matches are sorted.
///
/// A pattern that matches no file is an error, so a mistyped path never
/// produces a partial merge.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let mut matched = Vec::new();
        for entry in glob::glob(pattern)? {
            matched.push(entry?);
        }
        if matched.is_empty() {
            return Err(Box::new(ReportError::InvalidOption(format!(
                "no report file matches '{}'",
                pattern
            ))));
        }
        matched.sort();
        files.extend(matched);
    }
    Ok(files)
}
