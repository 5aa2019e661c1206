//! Race run orchestration.
//!
//! Drives a [`CompoundSimulator`] across every compound a scenario
//! declares and collects the named results. Kept separate from the
//! simulator so the lap loop stays pure while iteration order, progress
//! events, and result bookkeeping live here.

use tracing::{debug, info};

use crate::error::Result;
use crate::result::{ResultSet, SimulationResult};
use crate::scenario::Scenario;
use crate::simulator::CompoundSimulator;
use crate::types::{CompoundParams, validate_compounds};

/// Progress events raised while a run advances.
///
/// Default bodies are empty; implement only the events you care about.
/// The simulator itself never notifies anyone.
pub trait RaceObserver {
    /// A compound is about to be simulated.
    fn compound_started(&mut self, _compound: &CompoundParams, _total_laps: u32) {}

    /// A compound's full series is available.
    fn compound_finished(&mut self, _compound: &str, _result: &SimulationResult) {}
}

/// Observer that ignores every event.
pub struct NullObserver;

impl RaceObserver for NullObserver {}

/// Options controlling a race run.
#[derive(Default)]
pub struct RunOptions {
    /// Optional subscriber for progress events.
    pub observer: Option<Box<dyn RaceObserver>>,
}

impl RunOptions {
    pub fn with_observer(observer: Box<dyn RaceObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }
}

/// Simulate every compound in `scenario`, in declaration order.
///
/// Validation runs before any compound does: a zero-lap race, an empty
/// compound list, unnamed or duplicated compounds, or a non-positive base
/// grip fails the whole run and nothing partial is returned.
pub fn run_race(scenario: &Scenario, mut options: RunOptions) -> Result<ResultSet> {
    validate_compounds(&scenario.compounds)?;
    let simulator = CompoundSimulator::new(scenario.race.clone())?;
    let laps = simulator.config().race_distance;

    let mut results = ResultSet::new();
    for compound in &scenario.compounds {
        info!(compound = %compound.name, laps, "simulating rain tyre");
        if let Some(observer) = options.observer.as_deref_mut() {
            observer.compound_started(compound, laps);
        }

        let result = simulator.simulate(compound)?;

        if let Some(observer) = options.observer.as_deref_mut() {
            observer.compound_finished(&compound.name, &result);
        }
        results.insert(compound.name.clone(), result)?;
    }

    debug!(compounds = results.len(), "race complete");
    Ok(results)
}
