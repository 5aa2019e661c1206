//! The per-compound lap loop.
//!
//! [`CompoundSimulator`] carries grip and temperature across laps,
//! applying the [`crate::model`] operators once per lap and recording the
//! post-update values. It holds only the race configuration; each
//! `simulate` call owns its lap state, so one simulator can evaluate any
//! number of compounds without cross-talk.

use tracing::{debug, instrument, trace};

use crate::error::Result;
use crate::model;
use crate::result::SimulationResult;
use crate::types::{CompoundParams, RaceConfig};

/// Deterministic per-compound simulator for one race configuration.
#[derive(Debug, Clone)]
pub struct CompoundSimulator {
    config: RaceConfig,
}

impl CompoundSimulator {
    /// Create a simulator for `config`, rejecting zero-lap races.
    pub fn new(config: RaceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Evolve one compound over the configured race distance.
    ///
    /// Fails fast if the compound's base grip is not positive. Past that
    /// check the loop is total: out-of-range wetness or a negative wear
    /// rate produces non-physical but well-defined series rather than an
    /// error.
    ///
    /// Grip and temperature carry lap to lap; performance is derived
    /// fresh each lap from post-wear grip and carries nothing.
    #[instrument(
        skip(self, compound),
        fields(compound = %compound.name, laps = self.config.race_distance)
    )]
    pub fn simulate(&self, compound: &CompoundParams) -> Result<SimulationResult> {
        compound.validate()?;

        // Both inputs are fixed for the run, so the felt wetness is too.
        let wetness = model::wetness_factor(self.config.track_wetness, compound.water_displacement);

        let mut grip = compound.base_grip;
        let mut temperature = self.config.base_temperature;
        let mut result = SimulationResult::with_capacity(self.config.race_distance as usize);

        for lap in 1..=self.config.race_distance {
            grip = model::wear_step(grip, compound.wear_rate, wetness);
            temperature = model::thermal_step(
                temperature,
                self.config.base_temperature,
                self.config.load_per_lap,
            );
            let performance = model::lap_performance(grip, wetness);

            trace!(lap, grip, temperature, performance, "lap resolved");
            result.push_lap(grip, temperature, performance);
        }

        debug!(
            final_grip = grip,
            final_temperature = temperature,
            "compound simulated"
        );
        Ok(result)
    }
}
