use clap::Parser;
use tracing_subscriber::EnvFilter;

use hostcheck::application::config::AppConfig;
use hostcheck::application::services::report_pipeline::ReportPipeline;
use hostcheck::application::services::sampler::HealthSampler;
use hostcheck::domain::value_objects::thresholds::ThresholdSet;
use hostcheck::infrastructure::collectors::service_probe::SystemServiceProbe;
use hostcheck::infrastructure::collectors::sysinfo_collector::SysinfoCollector;
use hostcheck::infrastructure::os::browser::SystemBrowser;
use hostcheck::infrastructure::persistence::csv_store::CsvStore;
use hostcheck::presentation::cli::app::{Cli, Commands};
use hostcheck::presentation::cli::commands::collect::run_collect;
use hostcheck::presentation::cli::commands::config::run_config;
use hostcheck::presentation::cli::commands::report::run_report;
use hostcheck::presentation::cli::commands::scan::run_scan;
use hostcheck::presentation::html::HtmlRenderer;
use hostcheck::presentation::tui::app::run_shell;

/// The shell owns the screen, so its logs go nowhere.
fn setup_tracing(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    if quiet {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Ui { .. }));
    setup_tracing(cli.verbose, interactive);

    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => AppConfig::config_path()?,
    };
    let config = if cli.config.is_some() {
        AppConfig::load_from(&config_path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI: concrete adapters are only named here
    let renderer = HtmlRenderer;
    let pipeline = ReportPipeline::new(&renderer, &config.report.extensions);
    let viewer = SystemBrowser::new();
    let report_date = chrono::Local::now().date_naive();

    match cli.command {
        Some(Commands::Collect {
            csv,
            launcher,
            no_launcher,
            json,
        }) => {
            let csv = csv.unwrap_or_else(|| config.csv_path());
            let launcher = if no_launcher {
                None
            } else {
                Some(launcher.unwrap_or_else(|| config.launcher_path()))
            };

            let collector = SysinfoCollector::new(&config.collector.disk_mount);
            let probe = SystemServiceProbe::new();
            let store = CsvStore::new(&csv);
            let thresholds = ThresholdSet::from(&config.thresholds);
            let sampler = HealthSampler::new(
                &collector,
                &probe,
                &store,
                &thresholds,
                &config.collector.services,
            );
            run_collect(&sampler, &csv, launcher.as_deref(), json)?;
        }
        Some(Commands::Scan { dir }) => run_scan(&pipeline, &dir)?,
        Some(Commands::Report { dir, open, json }) => {
            run_report(&pipeline, &viewer, &dir, report_date, open, json)?;
        }
        Some(Commands::Ui { dir }) => {
            let start = dir.or_else(|| config.default_dir());
            run_shell(&pipeline, &viewer, start.as_deref(), report_date)?;
        }
        None => {
            run_shell(&pipeline, &viewer, config.default_dir().as_deref(), report_date)?;
        }
        Some(Commands::Config { path }) => run_config(&config, &config_path, path)?,
    }

    Ok(())
}
