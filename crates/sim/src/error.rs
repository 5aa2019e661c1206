//! Simulation error types.

use thiserror::Error;

/// Simulation result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before any lap is simulated.
///
/// The lap loop itself is pure arithmetic over real values and cannot
/// fail, so every variant here describes an input rejected up front.
/// A caller never receives a partially filled result.
#[derive(Debug, Error)]
pub enum Error {
    /// A race distance of zero laps would produce empty series.
    #[error("race distance must be at least 1 lap")]
    EmptyRace,

    /// A compound declared with no grip to lose.
    #[error("compound '{compound}' has non-positive base grip ({base_grip})")]
    NonPositiveGrip { compound: String, base_grip: f64 },

    /// A compound without a name cannot be keyed in a result set.
    #[error("compound at index {index} has an empty name")]
    UnnamedCompound { index: usize },

    /// Two compounds in the same run share a name.
    #[error("duplicate compound name: {name}")]
    DuplicateCompound { name: String },

    /// A run with nothing to simulate.
    #[error("no compounds declared")]
    NoCompounds,
}
