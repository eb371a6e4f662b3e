//! Run configuration.
//!
//! Every constant the model uses lives here, so a run is fully described by
//! one [`SimConfig`].  `Default` reproduces the reference parameterisation:
//! a 120-unit run at `dt = 0.1`, physical base rate 0.2, mental 0.1.
//!
//! Typically built with `SimConfig::default()` and field overrides, or loaded
//! by the application crate from JSON (feature `serde`).  Call
//! [`SimConfig::validate`] (the sim builder does) before using it.

use crate::time::TimeGrid;
use crate::{FtError, FtResult};

// ── PhysiologyRates ───────────────────────────────────────────────────────────

/// Per-unit-time coefficients of the three state-update rules.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysiologyRates {
    /// Energy drained per unit of physical intensity.  Not scaled by `dt`.
    pub energy_consumption: f64,
    /// Lactate produced per unit of physical intensity per unit time.
    pub lactate_accumulation: f64,
    /// Coefficient of the `sqrt(lactate)` clearance term.
    pub lactate_clearance: f64,
    /// Cognitive fatigue produced per unit of mental intensity per unit time.
    pub cognitive_fatigue: f64,
    /// Coefficient of the `sqrt(cognitive_fatigue)` recovery term.
    pub cognitive_recovery: f64,
}

impl Default for PhysiologyRates {
    fn default() -> Self {
        Self {
            energy_consumption:   0.1,
            lactate_accumulation: 0.05,
            lactate_clearance:    0.03,
            cognitive_fatigue:    0.02,
            cognitive_recovery:   0.03,
        }
    }
}

impl PhysiologyRates {
    pub fn validate(&self) -> FtResult<()> {
        non_negative("rates.energy_consumption", self.energy_consumption)?;
        non_negative("rates.lactate_accumulation", self.lactate_accumulation)?;
        non_negative("rates.lactate_clearance", self.lactate_clearance)?;
        non_negative("rates.cognitive_fatigue", self.cognitive_fatigue)?;
        non_negative("rates.cognitive_recovery", self.cognitive_recovery)
    }
}

// ── CircadianConfig ───────────────────────────────────────────────────────────

/// Day/night recovery cycle.
///
/// The night window is `[night_start_hour, night_end_hour)` taken modulo
/// `day_length`; when `night_start_hour > night_end_hour` it wraps midnight
/// (the default: 18:00 to 06:00).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CircadianConfig {
    pub day_rate:         f64,
    pub night_rate:       f64,
    pub night_start_hour: f64,
    pub night_end_hour:   f64,
    pub day_length:       f64,
}

impl Default for CircadianConfig {
    fn default() -> Self {
        Self {
            day_rate:         0.03,
            night_rate:       0.05,
            night_start_hour: 18.0,
            night_end_hour:   6.0,
            day_length:       24.0,
        }
    }
}

impl CircadianConfig {
    pub fn validate(&self) -> FtResult<()> {
        non_negative("circadian.day_rate", self.day_rate)?;
        non_negative("circadian.night_rate", self.night_rate)?;
        positive("circadian.day_length", self.day_length)?;
        for (name, hour) in [
            ("circadian.night_start_hour", self.night_start_hour),
            ("circadian.night_end_hour", self.night_end_hour),
        ] {
            if !hour.is_finite() || hour < 0.0 || hour >= self.day_length {
                return Err(FtError::invalid(name, hour, "must lie in [0, day_length)"));
            }
        }
        Ok(())
    }
}

// ── ActivityGate ──────────────────────────────────────────────────────────────

/// Energy-gating rule: below `threshold` energy, intensity is scaled by
/// `gated_factor`.  At exactly `threshold` the ungated branch applies.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActivityGate {
    pub threshold:    f64,
    pub gated_factor: f64,
}

impl Default for ActivityGate {
    fn default() -> Self {
        Self { threshold: 0.3, gated_factor: 0.5 }
    }
}

impl ActivityGate {
    pub fn validate(&self) -> FtResult<()> {
        if !self.threshold.is_finite() {
            return Err(FtError::invalid("gate.threshold", self.threshold, "must be finite"));
        }
        non_negative("gate.gated_factor", self.gated_factor)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total simulated duration.  The grid covers `[0, time_end)`.
    pub time_end: f64,

    /// Step size, in the same units as `time_end` and the circadian hours.
    pub dt: f64,

    /// Base rate of the physical activity model.
    pub physical_base_rate: f64,

    /// Base rate of the mental activity model.
    pub mental_base_rate: f64,

    /// Spacing of the post-run recovery bonus, in time units.  The bonus
    /// lands on grid samples whose time is a whole multiple of it, so with a
    /// `dt` that does not divide it, only some multiples get a bonus.
    pub bonus_period: f64,

    pub rates:     PhysiologyRates,
    pub circadian: CircadianConfig,
    pub gate:      ActivityGate,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_end:           120.0,
            dt:                 0.1,
            physical_base_rate: 0.2,
            mental_base_rate:   0.1,
            bonus_period:       20.0,
            rates:              PhysiologyRates::default(),
            circadian:          CircadianConfig::default(),
            gate:               ActivityGate::default(),
        }
    }
}

impl SimConfig {
    /// Check every field; the first violation is returned.
    pub fn validate(&self) -> FtResult<()> {
        self.time_grid()?;
        non_negative("physical_base_rate", self.physical_base_rate)?;
        non_negative("mental_base_rate", self.mental_base_rate)?;
        positive("bonus_period", self.bonus_period)?;
        self.rates.validate()?;
        self.circadian.validate()?;
        self.gate.validate()
    }

    /// The sample grid for this run.
    pub fn time_grid(&self) -> FtResult<TimeGrid> {
        TimeGrid::new(self.time_end, self.dt)
    }
}

// ── Field checks ──────────────────────────────────────────────────────────────

fn non_negative(name: &'static str, value: f64) -> FtResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FtError::invalid(name, value, "must be finite and >= 0"))
    }
}

fn positive(name: &'static str, value: f64) -> FtResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FtError::invalid(name, value, "must be finite and > 0"))
    }
}
