//! Scenario definitions and loading.
//!
//! A scenario is a YAML document declaring one race configuration and an
//! ordered list of compounds to simulate, plus naming metadata. Loading
//! validates the document schema (apiVersion, kind, name); semantic
//! validation of the declared race is a separate, explicit step so
//! callers control when it runs.
//!
//! ```yaml
//! apiVersion: rainlap/v1
//! kind: Scenario
//! metadata:
//!   name: full-wet-gp
//! race:
//!   trackWetness: 0.7
//!   raceDistance: 50
//!   baseTemperature: 15.0
//!   loadPerLap: 1500.0
//! compounds:
//!   - name: Intermediate
//!     baseGrip: 0.8
//!     wearRate: 0.01
//!     waterDisplacement: 0.6
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::types::{CompoundParams, RaceConfig, validate_compounds};

pub const API_VERSION: &str = "rainlap/v1";
pub const KIND: &str = "Scenario";

/// Errors that can occur when loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid apiVersion: expected 'rainlap/v1', got '{0}'")]
    InvalidApiVersion(String),

    #[error("invalid kind: expected 'Scenario', got '{0}'")]
    InvalidKind(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error(transparent)]
    Invalid(#[from] crate::error::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Scenario naming metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetadata {
    /// Machine-friendly identifier. Required.
    #[serde(default)]
    pub name: String,
    /// Human-friendly display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A complete simulation scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ScenarioMetadata,
    /// Race conditions shared by every compound. Omitted fields take the
    /// model defaults.
    #[serde(default)]
    pub race: RaceConfig,
    /// Compounds to simulate, in declaration order.
    #[serde(default)]
    pub compounds: Vec<CompoundParams>,
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    KIND.to_string()
}

impl Scenario {
    /// Create an empty scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ScenarioMetadata {
                name: name.into(),
                title: None,
                description: None,
            },
            race: RaceConfig::default(),
            compounds: Vec::new(),
        }
    }

    /// Load a scenario from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> ScenarioResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from YAML source and check its schema.
    pub fn from_yaml(source: &str) -> ScenarioResult<Self> {
        let scenario: Self = serde_yaml::from_str(source)?;
        scenario.validate_schema()?;
        Ok(scenario)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> ScenarioResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate_schema(&self) -> ScenarioResult<()> {
        if self.api_version != API_VERSION {
            return Err(ScenarioError::InvalidApiVersion(self.api_version.clone()));
        }
        if self.kind != KIND {
            return Err(ScenarioError::InvalidKind(self.kind.clone()));
        }
        if self.metadata.name.is_empty() {
            return Err(ScenarioError::MissingField("metadata.name".to_string()));
        }
        Ok(())
    }

    /// Validate the declared race semantically.
    ///
    /// Hard failures are the ones the simulator would reject anyway: a
    /// zero-lap race, no compounds, unnamed or duplicated compounds,
    /// non-positive base grip. Values that are merely outside the model's
    /// calibrated domain (wetness or displacement beyond `[0, 1]`,
    /// negative wear) are accepted with a warning.
    pub fn validate(&self) -> ScenarioResult<()> {
        self.race.validate()?;
        validate_compounds(&self.compounds)?;

        if !(0.0..=1.0).contains(&self.race.track_wetness) {
            warn!(
                scenario = %self.metadata.name,
                track_wetness = self.race.track_wetness,
                "track wetness outside [0, 1]; results will be non-physical"
            );
        }
        if self.race.load_per_lap < 0.0 {
            warn!(
                scenario = %self.metadata.name,
                load_per_lap = self.race.load_per_lap,
                "negative load per lap; tyres will cool below baseline"
            );
        }
        for compound in &self.compounds {
            if !(0.0..=1.0).contains(&compound.water_displacement) {
                warn!(
                    compound = %compound.name,
                    water_displacement = compound.water_displacement,
                    "water displacement outside [0, 1]"
                );
            }
            if compound.wear_rate < 0.0 {
                warn!(
                    compound = %compound.name,
                    wear_rate = compound.wear_rate,
                    "negative wear rate; grip will grow over the race"
                );
            }
        }
        Ok(())
    }

    /// Builder: set the race configuration.
    pub fn with_race(mut self, race: RaceConfig) -> Self {
        self.race = race;
        self
    }

    /// Builder: append a compound.
    pub fn with_compound(mut self, compound: CompoundParams) -> Self {
        self.compounds.push(compound);
        self
    }

    /// Builder: set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Builder: set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = Some(description.into());
        self
    }
}
