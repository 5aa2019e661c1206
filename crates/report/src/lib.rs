//! Report sinks for simulation output.
//!
//! A sink consumes a finished result set and renders it somewhere: a
//! JSON run directory, CSV tables, the console. Sinks sit strictly
//! outside the simulation boundary; they observe results and never feed
//! anything back in.
//!
//! # Philosophy
//!
//! Rendering here means chart-ready artifacts, not pixels. The JSON and
//! CSV sinks write files any plotting tool can consume directly, and the
//! summary sink gives the at-a-glance comparison on the console.
//!
//! # Implementations
//!
//! - [`JsonSink`] - Timestamped run directory with series and manifest
//! - [`CsvSink`] - One lap-by-compound table per metric
//! - [`SummarySink`] - Per-compound digest logged to the console
//! - [`NullSink`] - Discards everything (useful in tests)
//! - [`MultiSink`] - Fans out to multiple sinks

pub mod csv;
pub mod json;
pub mod summary;

pub use csv::CsvSink;
pub use json::{JsonSink, JsonSinkConfig, RunManifest};
pub use summary::{SummarySink, render_summary};

use std::path::PathBuf;

use thiserror::Error;

use rainlap_sim::{RaceConfig, ResultSet};

/// Errors that can occur while rendering reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("sink configuration error: {0}")]
    Config(String),

    #[error("result set is empty, nothing to render")]
    EmptyResults,
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Renders a finished result set to some destination.
pub trait ReportSink {
    /// Render artifacts for `results` produced under `race`.
    fn render(&mut self, race: &RaceConfig, results: &ResultSet) -> Result<()>;

    /// Where this sink writes, if anywhere.
    fn output_path(&self) -> Option<PathBuf> {
        None
    }
}

/// Sink that accepts and discards everything.
pub struct NullSink;

impl ReportSink for NullSink {
    fn render(&mut self, _race: &RaceConfig, _results: &ResultSet) -> Result<()> {
        Ok(())
    }
}

/// Fans a render call out to multiple sinks, in registration order.
/// The first failing sink aborts the fan-out.
#[derive(Default)]
pub struct MultiSink {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl MultiSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sink(&mut self, sink: Box<dyn ReportSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ReportSink for MultiSink {
    fn render(&mut self, race: &RaceConfig, results: &ResultSet) -> Result<()> {
        for sink in &mut self.sinks {
            sink.render(race, results)?;
        }
        Ok(())
    }
}
