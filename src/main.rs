use anyhow::Result;
use log::{debug, error, info, warn};
use std::path::Path;
use std::time::Instant;

use link_growth::cli_args::CommandLineArgs;
use link_growth::common::time_utils::current_hour_minute;
use link_growth::link_utils::write_export;
use link_growth::pipeline::{run, PreparedLink};
use link_growth::settings::Settings;
use link_growth::sheet_renderer::{records_to_csv, render_table};
use link_growth::{LinkConfig, LinkRecord, Outcome};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start_time = Instant::now();
    info!(
        "Link Growth v{} starting up...",
        env!("CARGO_PKG_VERSION")
    );

    debug!("Parsing command line arguments...");
    let cli_args = CommandLineArgs::parse_args();

    debug!("Loading application settings...");
    let settings = match Settings::resolve(cli_args.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {:#}", e);
            return Err(e);
        }
    };

    let normalizer = cli_args.normalizer(&settings);
    let config = cli_args.link_config(&settings);
    log_config(&config);

    let (prepared, outcome) = match run(&cli_args.url, &normalizer, &config) {
        Ok(result) => result,
        Err(e) => {
            error!("Failed to generate links for {}: {}", cli_args.url, e);
            return Err(e.into());
        }
    };
    report_cleaning(&prepared);

    match outcome {
        Outcome::NothingRequested => {
            warn!("No option selected. Nothing was generated.");
        }
        Outcome::Generated(records) => {
            println!("{}", render_table(&records));

            if cli_args.no_export {
                debug!("Export disabled (--no-export)");
            } else if let Err(e) = export_records(
                &records,
                cli_args.output_dir(&settings),
                settings.overwrite_existing_file,
            ) {
                error!("Failed to export links: {:#}", e);
                return Err(e);
            }
        }
    }

    info!(
        "Processing completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn log_config(config: &LinkConfig) {
    let kinds: Vec<&str> = config.numbered_kinds().iter().map(|k| k.marker()).collect();
    info!(
        "{} base(s), base link: {}, formats: [{}], quantity: {}, mode: {:?}",
        config.bases.len(),
        config.generate_base_link,
        kinds.join(", "),
        config.quantity,
        config.mode
    );
}

fn report_cleaning(prepared: &PreparedLink) {
    let report = &prepared.report;
    if report.is_clean() {
        info!("Link is clean, no previous base or format found");
        return;
    }

    if let Some(base) = &report.removed_base {
        warn!("Automatic cleanup: removed base '{}'", base);
    }
    if let Some(format) = &report.removed_format {
        warn!("Automatic cleanup: removed format '{}'", format);
    }
    info!(
        "Using campaign '{}' and content suffix '{}'",
        prepared.tags.campaign, prepared.tags.content
    );
}

fn export_records(records: &[LinkRecord], output_dir: &str, overwrite: bool) -> Result<()> {
    let bytes = records_to_csv(records)?;
    let path = write_export(
        Path::new(output_dir),
        &current_hour_minute(),
        &bytes,
        overwrite,
    )?;
    info!("{} link(s) exported to {}", records.len(), path.display());
    Ok(())
}
