//! Rain tyre compound simulation core.
//!
//! Evolves rain tyre compounds lap by lap under fixed race conditions,
//! producing three aligned per-lap series for each compound: remaining
//! grip, tyre temperature, and a derived performance score. Runs are
//! deterministic, so two simulations of the same scenario agree
//! bit-for-bit.
//!
//! # Architecture
//!
//! - [`types`] - Race configuration and compound parameters
//! - [`model`] - The pure per-lap update operators and their constants
//! - [`simulator`] - The lap loop for a single compound
//! - [`result`] - Output series and the named result set
//! - [`run`] - Multi-compound orchestration and progress events
//! - [`scenario`] - YAML scenario loading and validation
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use rainlap_sim::{CompoundParams, CompoundSimulator, RaceConfig};
//!
//! let simulator = CompoundSimulator::new(RaceConfig {
//!     track_wetness: 0.7,
//!     race_distance: 50,
//!     base_temperature: 15.0,
//!     load_per_lap: 1500.0,
//! })
//! .unwrap();
//!
//! let intermediate = CompoundParams::new("Intermediate", 0.8, 0.01, 0.6);
//! let result = simulator.simulate(&intermediate).unwrap();
//!
//! assert_eq!(result.laps(), 50);
//! assert!(result.final_grip().unwrap() < 0.8);
//! ```

pub mod error;
pub mod model;
pub mod result;
pub mod run;
pub mod scenario;
pub mod simulator;
pub mod types;

pub use error::{Error, Result};
pub use result::{LapSample, ResultSet, SimulationResult};
pub use run::{NullObserver, RaceObserver, RunOptions, run_race};
pub use scenario::{Scenario, ScenarioError, ScenarioMetadata, ScenarioResult};
pub use simulator::CompoundSimulator;
pub use types::{CompoundParams, RaceConfig, validate_compounds};
