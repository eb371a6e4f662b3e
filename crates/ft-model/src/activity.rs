//! Energy-gated activity intensity.

use ft_core::{ActivityGate, FtError, FtResult, SimConfig};

/// One kind of activity (physical or mental), parameterised by its base rate.
///
/// Immutable after construction.  Physical and mental activity differ only in
/// `base_rate`, so there is a single type rather than one per kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityModel {
    base_rate: f64,
    gate:      ActivityGate,
}

impl ActivityModel {
    /// A model with the default gate (threshold 0.3, factor 0.5).
    pub fn new(base_rate: f64) -> FtResult<Self> {
        Self::with_gate(base_rate, ActivityGate::default())
    }

    pub fn with_gate(base_rate: f64, gate: ActivityGate) -> FtResult<Self> {
        if !base_rate.is_finite() || base_rate < 0.0 {
            return Err(FtError::invalid("base_rate", base_rate, "must be finite and >= 0"));
        }
        gate.validate()?;
        Ok(Self { base_rate, gate })
    }

    /// Physical activity as configured by `SimConfig::default()`.
    pub fn physical() -> Self {
        let config = SimConfig::default();
        Self { base_rate: config.physical_base_rate, gate: config.gate }
    }

    /// Mental activity as configured by `SimConfig::default()`.
    pub fn mental() -> Self {
        let config = SimConfig::default();
        Self { base_rate: config.mental_base_rate, gate: config.gate }
    }

    #[inline]
    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    #[inline]
    pub fn gate(&self) -> ActivityGate {
        self.gate
    }

    /// Effective intensity at the given energy level.
    ///
    /// `energy_level < threshold` throttles to `base_rate * gated_factor`;
    /// anything else (including exactly `threshold`) yields `base_rate`.
    #[inline]
    pub fn intensity(&self, energy_level: f64) -> f64 {
        if energy_level < self.gate.threshold {
            self.base_rate * self.gate.gated_factor
        } else {
            self.base_rate
        }
    }
}
