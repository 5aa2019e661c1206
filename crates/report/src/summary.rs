//! Console summary rendering.
//!
//! A fixed-width per-compound digest of a finished run. Rendering is a
//! pure function over the results so tests can assert on the text; the
//! sink just logs the lines.

use tracing::info;

use rainlap_sim::{RaceConfig, ResultSet};

use crate::{ReportError, ReportSink, Result};

/// Render the run digest as text lines: one header describing the race,
/// one table header, one row per compound.
pub fn render_summary(race: &RaceConfig, results: &ResultSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(results.len() + 2);
    lines.push(format!(
        "Race: {} laps, wetness {:.2}, baseline {:.1} C, load {:.0} N",
        race.race_distance, race.track_wetness, race.base_temperature, race.load_per_lap
    ));
    lines.push(format!(
        "{:<16} {:>10} {:>10} {:>11} {:>10}",
        "Compound", "Final grip", "Peak temp", "Final perf", "Mean perf"
    ));
    for (name, result) in results.iter() {
        lines.push(format!(
            "{:<16} {:>10.3} {:>10.2} {:>11.3} {:>10.3}",
            name,
            result.final_grip().unwrap_or(0.0),
            result.peak_temperature().unwrap_or(0.0),
            result.final_performance().unwrap_or(0.0),
            result.mean_performance().unwrap_or(0.0),
        ));
    }
    lines
}

/// Sink logging the digest at info level.
pub struct SummarySink;

impl ReportSink for SummarySink {
    fn render(&mut self, race: &RaceConfig, results: &ResultSet) -> Result<()> {
        if results.is_empty() {
            return Err(ReportError::EmptyResults);
        }
        for line in render_summary(race, results) {
            info!("{line}");
        }
        Ok(())
    }
}
