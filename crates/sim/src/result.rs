//! Simulation output series.
//!
//! A [`SimulationResult`] holds the three lap-aligned series recorded for
//! one compound. A [`ResultSet`] keys finished results by compound name,
//! preserving simulation order. Both are append-only while a run executes
//! and read-only once returned to the caller.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};

/// One lap's recorded state. Lap numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LapSample {
    pub lap: u32,
    pub remaining_grip: f64,
    pub temperature: f64,
    pub performance: f64,
}

/// Per-lap output series for one compound.
///
/// The three series are index-aligned: entry `i` describes lap `i + 1`.
/// Values are post-update, so entry 0 already includes one lap of wear
/// and heat.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    remaining_grip: Vec<f64>,
    temperature: Vec<f64>,
    performance: Vec<f64>,
}

impl SimulationResult {
    pub(crate) fn with_capacity(laps: usize) -> Self {
        Self {
            remaining_grip: Vec::with_capacity(laps),
            temperature: Vec::with_capacity(laps),
            performance: Vec::with_capacity(laps),
        }
    }

    pub(crate) fn push_lap(&mut self, grip: f64, temperature: f64, performance: f64) {
        self.remaining_grip.push(grip);
        self.temperature.push(temperature);
        self.performance.push(performance);
    }

    /// Number of laps recorded.
    pub fn laps(&self) -> usize {
        self.remaining_grip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_grip.is_empty()
    }

    /// Grip remaining after each lap.
    pub fn remaining_grip(&self) -> &[f64] {
        &self.remaining_grip
    }

    /// Tyre temperature after each lap, degrees Celsius.
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// Performance score after each lap.
    pub fn performance(&self) -> &[f64] {
        &self.performance
    }

    /// Recorded state for a 1-based lap number.
    pub fn lap(&self, lap: u32) -> Option<LapSample> {
        let index = (lap as usize).checked_sub(1)?;
        Some(LapSample {
            lap,
            remaining_grip: *self.remaining_grip.get(index)?,
            temperature: *self.temperature.get(index)?,
            performance: *self.performance.get(index)?,
        })
    }

    /// Iterate recorded laps in order.
    pub fn iter(&self) -> impl Iterator<Item = LapSample> + '_ {
        (0..self.laps()).map(|i| LapSample {
            lap: i as u32 + 1,
            remaining_grip: self.remaining_grip[i],
            temperature: self.temperature[i],
            performance: self.performance[i],
        })
    }

    /// Grip left after the final lap.
    pub fn final_grip(&self) -> Option<f64> {
        self.remaining_grip.last().copied()
    }

    /// Hottest recorded temperature.
    pub fn peak_temperature(&self) -> Option<f64> {
        self.temperature.iter().copied().reduce(f64::max)
    }

    /// Performance score on the final lap.
    pub fn final_performance(&self) -> Option<f64> {
        self.performance.last().copied()
    }

    /// Mean performance score across the race.
    pub fn mean_performance(&self) -> Option<f64> {
        if self.performance.is_empty() {
            return None;
        }
        Some(self.performance.iter().sum::<f64>() / self.performance.len() as f64)
    }
}

/// Finished results keyed by compound name, in simulation order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    results: IndexMap<String, SimulationResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named result. Duplicate names are rejected so one
    /// compound can never silently shadow another.
    pub fn insert(&mut self, name: impl Into<String>, result: SimulationResult) -> Result<()> {
        let name = name.into();
        if self.results.contains_key(&name) {
            return Err(Error::DuplicateCompound { name });
        }
        self.results.insert(name, result);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&SimulationResult> {
        self.results.get(name)
    }

    /// Compound names in simulation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    /// Iterate `(name, result)` pairs in simulation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SimulationResult)> {
        self.results.iter().map(|(name, result)| (name.as_str(), result))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Lap count shared by the results. Results produced by one run all
    /// have the race distance as their length; for a hand-assembled set
    /// this reports the shortest member so lap-indexed access stays in
    /// bounds.
    pub fn laps(&self) -> usize {
        self.results
            .values()
            .map(SimulationResult::laps)
            .min()
            .unwrap_or(0)
    }
}
