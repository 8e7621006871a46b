use clap::Parser;
use tracing_subscriber::EnvFilter;

use checkup::application::config::AppConfig;
use checkup::infrastructure::collectors::sysinfo_collector::SysinfoCollector;
use checkup::infrastructure::reporting::{FileReportSink, ReportFormat};
use checkup::presentation::cli::app::{Cli, Commands};
use checkup::presentation::cli::commands::run::run_diagnose;
use checkup::presentation::cli::commands::snapshot::run_snapshot;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn diagnose(
    collector: &SysinfoCollector,
    config: &AppConfig,
    format: Option<&str>,
    output: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let format = format
        .unwrap_or(config.reporting.format.as_str())
        .parse::<ReportFormat>()?;
    let output_dir = output.unwrap_or(config.reporting.output_dir.as_path());
    let sink = FileReportSink::new(output_dir, format, config.reporting.charts);
    run_diagnose(collector, &sink, config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI — main.rs is the only place that knows concrete types
    let collector = SysinfoCollector::new(&config.collection);

    match cli.command {
        Some(Commands::Snapshot { json }) => {
            run_snapshot(&collector, json)?;
        }
        Some(Commands::Run { format, output }) => {
            diagnose(&collector, &config, format.as_deref(), output.as_deref())?;
        }
        None => {
            diagnose(&collector, &config, None, None)?;
        }
    }

    Ok(())
}
