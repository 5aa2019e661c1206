//! Per-lap tyre model operators.
//!
//! The pure update rules applied once per lap, in order: wear, then
//! heat, then the derived performance score. The simulator composes
//! them; they know nothing about laps, compounds, or results.
//!
//! # Design principles
//!
//! All operators:
//! - Are deterministic (same inputs produce the same outputs)
//! - Are total over finite real inputs (no panics, no NaN introduced)
//! - Clamp only where the model demands it (grip and wetness floors)

/// Grip lost per lap per unit of unmitigated wetness.
pub const WETNESS_GRIP_RATE: f64 = 0.1;

/// Temperature gained per Newton of per-lap load, in degrees Celsius.
pub const LOAD_HEAT_RATE: f64 = 0.0001;

/// Fraction of the above-baseline temperature gap shed each lap.
pub const COOLING_FRACTION: f64 = 0.05;

/// Effective wetness a compound cannot clear.
///
/// Constant for a whole run, since both inputs are fixed per compound.
///
/// # Arguments
///
/// * `track_wetness` - Track wetness, nominally in `[0, 1]`
/// * `water_displacement` - Compound's clearing ability, nominally in `[0, 1]`
///
/// # Formula
///
/// `max(0, track_wetness - water_displacement)`
///
/// A compound that displaces more water than the track holds sees a
/// perfectly dry track, never a negative penalty.
///
/// # Example
///
/// ```
/// use rainlap_sim::model::wetness_factor;
///
/// let felt = wetness_factor(0.7, 0.6);
/// assert!((felt - 0.1).abs() < 1e-12);
///
/// // Displacement beyond the wetness clamps to dry.
/// assert_eq!(wetness_factor(0.3, 0.8), 0.0);
/// ```
#[inline]
pub fn wetness_factor(track_wetness: f64, water_displacement: f64) -> f64 {
    (track_wetness - water_displacement).max(0.0)
}

/// One lap of grip loss from mechanical wear plus the wetness penalty.
///
/// # Arguments
///
/// * `grip` - Grip carried into the lap
/// * `wear_rate` - Grip lost per lap to wear
/// * `wetness_factor` - Unmitigated wetness, from [`wetness_factor`]
///
/// # Formula
///
/// `max(0, grip - (wear_rate + wetness_factor * WETNESS_GRIP_RATE))`
///
/// Grip floors at zero and stays there; the model has no recovery term.
///
/// # Example
///
/// ```
/// use rainlap_sim::model::wear_step;
///
/// let grip = wear_step(0.8, 0.01, 0.1);
/// assert!((grip - 0.78).abs() < 1e-12);
///
/// // A worn-out tyre cannot go negative.
/// assert_eq!(wear_step(0.005, 0.01, 0.0), 0.0);
/// ```
#[inline]
pub fn wear_step(grip: f64, wear_rate: f64, wetness_factor: f64) -> f64 {
    (grip - (wear_rate + wetness_factor * WETNESS_GRIP_RATE)).max(0.0)
}

/// One lap of first-order heating and cooling.
///
/// # Arguments
///
/// * `temperature` - Temperature carried into the lap, degrees Celsius
/// * `base_temperature` - Ambient baseline the tyre cools toward
/// * `load_per_lap` - Vertical load over the lap, Newtons
///
/// # Formula
///
/// `temperature + load_per_lap * LOAD_HEAT_RATE - (temperature - base_temperature) * COOLING_FRACTION`
///
/// Both terms read the pre-update temperature. Heating is unconditional;
/// cooling is proportional to the gap above (or below) baseline, so the
/// series converges toward `base_temperature + load_per_lap * 0.002`
/// rather than growing without bound.
///
/// # Example
///
/// ```
/// use rainlap_sim::model::thermal_step;
///
/// // First lap from baseline: pure heating, no gap to cool.
/// let t = thermal_step(15.0, 15.0, 1500.0);
/// assert!((t - 15.15).abs() < 1e-12);
///
/// // No load, no gap: temperature holds exactly.
/// assert_eq!(thermal_step(20.0, 20.0, 0.0), 20.0);
/// ```
#[inline]
pub fn thermal_step(temperature: f64, base_temperature: f64, load_per_lap: f64) -> f64 {
    temperature + load_per_lap * LOAD_HEAT_RATE - (temperature - base_temperature) * COOLING_FRACTION
}

/// Performance score for a lap: grip discounted by unmitigated wetness.
///
/// # Arguments
///
/// * `grip` - Grip remaining after the lap's wear step
/// * `wetness_factor` - Unmitigated wetness, from [`wetness_factor`]
///
/// # Formula
///
/// `grip * (1 - wetness_factor)`
///
/// Not clamped. A wetness factor above 1 yields a negative score, which
/// callers outside the calibrated domain asked for.
///
/// # Example
///
/// ```
/// use rainlap_sim::model::lap_performance;
///
/// let score = lap_performance(0.78, 0.1);
/// assert!((score - 0.702).abs() < 1e-12);
/// ```
#[inline]
pub fn lap_performance(grip: f64, wetness_factor: f64) -> f64 {
    grip * (1.0 - wetness_factor)
}
