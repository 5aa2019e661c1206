//! rainlap-run - simulate a scenario and render reports.
//!
//! Loads a scenario file, simulates every declared compound, prints the
//! summary table, and optionally writes JSON and CSV artifacts.
//!
//! ```text
//! rainlap-run scenarios/full-wet-gp.yaml
//! rainlap-run scenarios/full-wet-gp.yaml --laps 30 --save out/
//! rainlap-run scenarios/full-wet-gp.yaml --list-compounds
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rainlap_report::{CsvSink, JsonSink, JsonSinkConfig, MultiSink, ReportSink, SummarySink};
use rainlap_sim::{CompoundParams, RaceObserver, RunOptions, Scenario, run_race};

#[derive(Parser, Debug)]
#[command(name = "rainlap-run")]
#[command(about = "Simulate rain tyre compounds over a race distance")]
struct Cli {
    /// Path to a scenario YAML file
    scenario: PathBuf,

    /// Override the scenario's race distance
    #[arg(long, value_name = "LAPS")]
    laps: Option<u32>,

    /// Write JSON and CSV artifacts under this directory
    #[arg(long, value_name = "DIR")]
    save: Option<PathBuf>,

    /// List the scenario's compounds and exit
    #[arg(long)]
    list_compounds: bool,
}

/// Logs per-compound progress as the run advances.
struct LogObserver;

impl RaceObserver for LogObserver {
    fn compound_started(&mut self, compound: &CompoundParams, total_laps: u32) {
        info!("Simulating {} rain tyre ({} laps)...", compound.name, total_laps);
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    info!("Loading scenario from: {}", cli.scenario.display());
    let mut scenario = match Scenario::load(&cli.scenario) {
        Ok(scenario) => scenario,
        Err(e) => {
            error!("Failed to load scenario: {e}");
            process::exit(1);
        }
    };

    if cli.list_compounds {
        info!("Compounds in '{}':", scenario.metadata.name);
        for compound in &scenario.compounds {
            info!(
                "  {} (grip {}, wear {}, displacement {})",
                compound.name, compound.base_grip, compound.wear_rate, compound.water_displacement
            );
        }
        return;
    }

    if let Some(laps) = cli.laps {
        info!("Overriding race distance: {laps} laps");
        scenario.race.race_distance = laps;
    }

    if let Err(e) = scenario.validate() {
        error!("Invalid scenario: {e}");
        process::exit(1);
    }

    info!("Scenario: {}", scenario.metadata.name);
    info!("  Laps: {}", scenario.race.race_distance);
    info!("  Track wetness: {:.2}", scenario.race.track_wetness);
    info!("  Compounds: {}", scenario.compounds.len());

    let options = RunOptions::with_observer(Box::new(LogObserver));
    let results = match run_race(&scenario, options) {
        Ok(results) => results,
        Err(e) => {
            error!("Run failed: {e}");
            process::exit(1);
        }
    };

    let mut sinks = MultiSink::new();
    sinks.add_sink(Box::new(SummarySink));

    if let Some(save_dir) = &cli.save {
        let json_config = JsonSinkConfig {
            output_dir: save_dir.clone(),
            scenario: scenario.metadata.name.clone(),
        };
        match JsonSink::new(json_config) {
            Ok(sink) => {
                info!("Writing JSON artifacts to: {}", sink.run_dir().display());
                sinks.add_sink(Box::new(sink));
            }
            Err(e) => {
                error!("Failed to prepare JSON sink: {e}");
                process::exit(1);
            }
        }
        match CsvSink::new(save_dir.join("csv")) {
            Ok(sink) => {
                info!("Writing CSV tables to: {}", sink.output_dir().display());
                sinks.add_sink(Box::new(sink));
            }
            Err(e) => {
                error!("Failed to prepare CSV sink: {e}");
                process::exit(1);
            }
        }
    }

    if let Err(e) = sinks.render(&scenario.race, &results) {
        error!("Report rendering failed: {e}");
        process::exit(1);
    }

    info!("Simulation complete!");
}
