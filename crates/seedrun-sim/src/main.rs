//! seedrun-sim - runs a seeded toy experiment configured from a property file.

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use seedrun_config::{initialize_config, DEFAULT_CONFIG_PATH};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod driver;

#[derive(Parser, Debug)]
#[command(name = "seedrun-sim", version)]
#[command(about = "Run seeded experiments configured from a property file")]
struct Cli {
    /// Path to the `key=value` property file
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seedrun_sim=info,seedrun_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let constants = initialize_config(&cli.config)?;
    let config_hash = constants.fingerprint()?;
    info!(
        config = %cli.config.display(),
        hash = %config_hash,
        runs = constants.runs(),
        "starting experiment"
    );

    let stdout = io::stdout();
    let reports = driver::run_all(
        &constants,
        &cli.config.display().to_string(),
        &config_hash,
        &mut stdout.lock(),
    )?;
    for report in &reports {
        debug!(
            seed = report.provenance.seed,
            derived_seed = report.provenance.derived_seed,
            draw = report.draw,
            mutated = report.mutated,
            "run complete"
        );
    }
    let mutated = reports.iter().filter(|report| report.mutated).count();
    info!(runs = reports.len(), mutated, "experiment finished");
    Ok(())
}
