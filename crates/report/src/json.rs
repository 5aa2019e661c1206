//! JSON report sink.
//!
//! Writes one timestamped run directory per sink:
//!
//! ```text
//! {output_dir}/
//!   {run_id}/
//!     series.json     - race config plus every compound's aligned series
//!     manifest.json   - run metadata
//! ```
//!
//! `series.json` is the chart-ready artifact: each compound maps to its
//! `remainingGrip`, `temperature`, and `performance` arrays, index `i`
//! describing lap `i + 1`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use rainlap_sim::{RaceConfig, ResultSet};

use crate::{ReportError, ReportSink, Result};

/// Metadata describing one rendered run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunManifest {
    pub run_id: String,
    pub created_at: String,
    /// Scenario name the run came from.
    pub scenario: String,
    /// Race conditions the results were produced under.
    pub race: RaceConfig,
    pub laps: u32,
    /// Compound names in simulation order.
    pub compounds: Vec<String>,
}

/// The full series document written to `series.json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeriesDocument<'a> {
    race: &'a RaceConfig,
    results: &'a ResultSet,
}

/// Configuration for a [`JsonSink`].
#[derive(Debug, Clone)]
pub struct JsonSinkConfig {
    /// Base output directory. Each sink creates a timestamped run
    /// directory beneath it.
    pub output_dir: PathBuf,
    /// Scenario name recorded in the manifest.
    pub scenario: String,
}

/// Sink writing the series document and manifest as pretty JSON.
pub struct JsonSink {
    config: JsonSinkConfig,
    run_id: String,
    run_dir: PathBuf,
}

impl JsonSink {
    /// Create a sink and its run directory.
    pub fn new(config: JsonSinkConfig) -> Result<Self> {
        let run_id = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let run_dir = config.output_dir.join(&run_id);
        fs::create_dir_all(&run_dir).map_err(|e| {
            ReportError::Config(format!(
                "failed to create run directory {}: {e}",
                run_dir.display()
            ))
        })?;
        Ok(Self {
            config,
            run_id,
            run_dir,
        })
    }

    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }
}

impl ReportSink for JsonSink {
    fn render(&mut self, race: &RaceConfig, results: &ResultSet) -> Result<()> {
        if results.is_empty() {
            return Err(ReportError::EmptyResults);
        }

        let document = SeriesDocument { race, results };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| ReportError::Serialization(e.to_string()))?;
        fs::write(self.run_dir.join("series.json"), json)?;

        let manifest = RunManifest {
            run_id: self.run_id.clone(),
            created_at: chrono::Local::now().to_rfc3339(),
            scenario: self.config.scenario.clone(),
            race: race.clone(),
            laps: race.race_distance,
            compounds: results.names().map(str::to_owned).collect(),
        };
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| ReportError::Serialization(e.to_string()))?;
        fs::write(self.run_dir.join("manifest.json"), json)?;

        debug!(run_dir = %self.run_dir.display(), "wrote JSON artifacts");
        Ok(())
    }

    fn output_path(&self) -> Option<PathBuf> {
        Some(self.run_dir.clone())
    }
}
