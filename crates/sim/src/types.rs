//! Race and compound parameter types.
//!
//! These are the immutable inputs to a run. Both types deserialize from
//! scenario files (see [`crate::scenario`]) and are never mutated once a
//! simulation starts.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed race conditions shared by every compound in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceConfig {
    /// Track wetness from 0.0 (dry) to 1.0 (standing water everywhere).
    pub track_wetness: f64,
    /// Race length in laps.
    pub race_distance: u32,
    /// Ambient baseline temperature in degrees Celsius.
    pub base_temperature: f64,
    /// Vertical load applied over one lap, in Newtons.
    pub load_per_lap: f64,
}

impl RaceConfig {
    /// Reject configurations that cannot produce a meaningful run.
    ///
    /// Only the race distance is a hard requirement. Out-of-range wetness
    /// is accepted and simply drives the model outside its calibrated
    /// domain; [`crate::scenario::Scenario::validate`] warns about it at
    /// intake.
    pub fn validate(&self) -> Result<()> {
        if self.race_distance == 0 {
            return Err(Error::EmptyRace);
        }
        Ok(())
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            track_wetness: 0.5,
            race_distance: 50,
            base_temperature: 20.0,
            load_per_lap: 1500.0,
        }
    }
}

/// Static parameters for one tyre compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundParams {
    /// Display name, unique within a run.
    pub name: String,
    /// Traction available before the first lap. Must be positive.
    pub base_grip: f64,
    /// Grip lost per lap to mechanical wear. Negative values are accepted
    /// and regrow grip, which no physical compound does.
    pub wear_rate: f64,
    /// Ability to clear standing water, 0.0 (none) to 1.0 (total).
    pub water_displacement: f64,
}

impl CompoundParams {
    pub fn new(
        name: impl Into<String>,
        base_grip: f64,
        wear_rate: f64,
        water_displacement: f64,
    ) -> Self {
        Self {
            name: name.into(),
            base_grip,
            wear_rate,
            water_displacement,
        }
    }

    /// Reject compounds the simulator refuses to run.
    ///
    /// Base grip is the only hard requirement: a non-positive value pins
    /// every series to zero and the run would be meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.base_grip <= 0.0 {
            return Err(Error::NonPositiveGrip {
                compound: self.name.clone(),
                base_grip: self.base_grip,
            });
        }
        Ok(())
    }
}

/// Validate a compound list as a unit: non-empty, every compound named,
/// names unique, every compound individually valid.
///
/// Shared by scenario intake and [`crate::run::run_race`] so hand-built
/// compound lists get the same checks as loaded ones.
pub fn validate_compounds(compounds: &[CompoundParams]) -> Result<()> {
    if compounds.is_empty() {
        return Err(Error::NoCompounds);
    }
    let mut seen = Vec::with_capacity(compounds.len());
    for (index, compound) in compounds.iter().enumerate() {
        if compound.name.is_empty() {
            return Err(Error::UnnamedCompound { index });
        }
        if seen.contains(&compound.name.as_str()) {
            return Err(Error::DuplicateCompound {
                name: compound.name.clone(),
            });
        }
        compound.validate()?;
        seen.push(compound.name.as_str());
    }
    Ok(())
}
