//! Integration test harness for rainlap.
//!
//! Wraps the scenario-to-results pipeline behind panicking constructors
//! so end-to-end tests read as straight-line assertions.

use rainlap_sim::{LapSample, ResultSet, RunOptions, Scenario, run_race};

/// Test harness running scenarios from YAML source.
pub struct TestHarness {
    scenario: Scenario,
    results: Option<ResultSet>,
}

impl TestHarness {
    /// Create a harness from scenario YAML.
    ///
    /// # Panics
    ///
    /// Panics if the YAML fails to parse or the schema is invalid.
    pub fn from_yaml(source: &str) -> Self {
        let scenario = match Scenario::from_yaml(source) {
            Ok(scenario) => scenario,
            Err(e) => panic!("scenario failed to parse: {e}"),
        };
        Self {
            scenario,
            results: None,
        }
    }

    /// Simulate every compound in the scenario.
    ///
    /// # Panics
    ///
    /// Panics if the run fails.
    pub fn run(&mut self) {
        match run_race(&self.scenario, RunOptions::default()) {
            Ok(results) => self.results = Some(results),
            Err(e) => panic!("run failed: {e}"),
        }
    }

    /// Simulate, surfacing the error instead of panicking.
    pub fn try_run(&mut self) -> rainlap_sim::Result<()> {
        self.results = Some(run_race(&self.scenario, RunOptions::default())?);
        Ok(())
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn scenario_mut(&mut self) -> &mut Scenario {
        &mut self.scenario
    }

    /// Finished results.
    ///
    /// # Panics
    ///
    /// Panics if [`run`](Self::run) has not been called.
    pub fn results(&self) -> &ResultSet {
        match &self.results {
            Some(results) => results,
            None => panic!("no results: call run() first"),
        }
    }

    /// Recorded state of `compound` on a 1-based lap.
    ///
    /// # Panics
    ///
    /// Panics if the compound or lap does not exist.
    pub fn lap(&self, compound: &str, lap: u32) -> LapSample {
        let result = match self.results().get(compound) {
            Some(result) => result,
            None => panic!("unknown compound: {compound}"),
        };
        match result.lap(lap) {
            Some(sample) => sample,
            None => panic!("compound {compound} has no lap {lap}"),
        }
    }

    /// Grip remaining for `compound` after a 1-based lap.
    pub fn grip(&self, compound: &str, lap: u32) -> f64 {
        self.lap(compound, lap).remaining_grip
    }

    /// Temperature of `compound` after a 1-based lap.
    pub fn temperature(&self, compound: &str, lap: u32) -> f64 {
        self.lap(compound, lap).temperature
    }

    /// Performance score of `compound` on a 1-based lap.
    pub fn performance(&self, compound: &str, lap: u32) -> f64 {
        self.lap(compound, lap).performance
    }
}
