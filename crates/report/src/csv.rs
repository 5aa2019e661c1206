//! CSV report sink.
//!
//! Writes one table per metric, each with a `lap` column followed by one
//! column per compound in simulation order:
//!
//! ```text
//! {output_dir}/
//!   grip.csv
//!   temperature.csv
//!   performance.csv
//! ```
//!
//! The wide layout plots directly in a spreadsheet: select all, chart by
//! first column.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use rainlap_sim::{RaceConfig, ResultSet, SimulationResult};

use crate::{ReportError, ReportSink, Result};

/// Metric tables written by the sink, as (file name, series accessor).
const METRICS: [(&str, fn(&SimulationResult) -> &[f64]); 3] = [
    ("grip.csv", SimulationResult::remaining_grip),
    ("temperature.csv", SimulationResult::temperature),
    ("performance.csv", SimulationResult::performance),
];

/// Sink writing per-metric CSV tables.
pub struct CsvSink {
    output_dir: PathBuf,
}

impl CsvSink {
    /// Create a sink writing into `output_dir`, creating it if missing.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|e| {
            ReportError::Config(format!(
                "failed to create output directory {}: {e}",
                output_dir.display()
            ))
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ReportSink for CsvSink {
    fn render(&mut self, _race: &RaceConfig, results: &ResultSet) -> Result<()> {
        if results.is_empty() {
            return Err(ReportError::EmptyResults);
        }

        let laps = results.laps();
        for (file_name, series) in METRICS {
            let mut writer = ::csv::Writer::from_path(self.output_dir.join(file_name))?;

            let mut header = vec!["lap".to_string()];
            header.extend(results.names().map(str::to_owned));
            writer.write_record(&header)?;

            for lap in 0..laps {
                let mut record = vec![(lap + 1).to_string()];
                for (_, result) in results.iter() {
                    record.push(series(result)[lap].to_string());
                }
                writer.write_record(&record)?;
            }
            writer.flush()?;
        }

        debug!(output_dir = %self.output_dir.display(), laps, "wrote CSV tables");
        Ok(())
    }

    fn output_path(&self) -> Option<PathBuf> {
        Some(self.output_dir.clone())
    }
}
