use clap::Parser;
use report_html::cli::commands::{cmd_merge, cmd_render, cmd_summary};
use report_html::cli::config::{Cli, Commands, DEFAULT_HTML_OUTPUT, load_config};
use report_html::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace file: CLI > config > disabled
    let tracer = match cli.trace.as_deref().or(config.trace.path.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Render {
            report,
            output,
            container_id,
            html,
        } => {
            let output = output
                .or(config.render.output.clone())
                .unwrap_or_else(|| DEFAULT_HTML_OUTPUT.to_string());
            let container_id = container_id.unwrap_or(config.render.container_id.clone());
            let mut html_options = config.html.clone();
            html_options.apply_pairs(&html)?;

            cmd_render(
                &report,
                &output,
                &container_id,
                &html_options,
                cli.verbose,
                &tracer,
            )?;
        }
        Commands::Summary {
            report,
            format,
            output,
        } => {
            let all_passed = cmd_summary(&report, &format, output.as_deref(), cli.verbose)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Merge {
            output,
            report_name,
            reports,
        } => {
            cmd_merge(&reports, &output, report_name.as_deref(), cli.verbose)?;
        }
    }

    Ok(())
}
