//! Per-person physiological state and its update rules.

use ft_core::{FtResult, PhysiologyRates};

/// A copy of the three state variables at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonSnapshot {
    pub energy:            f64,
    pub lactate:           f64,
    pub cognitive_fatigue: f64,
}

impl PersonSnapshot {
    /// `lactate + cognitive_fatigue`.
    #[inline]
    pub fn total_fatigue(&self) -> f64 {
        self.lactate + self.cognitive_fatigue
    }
}

/// Mutable physiological state of one person.
///
/// Fields are private so the non-negativity invariant holds: every update
/// rule floors its result at 0.  Negative intermediate values are absorbed
/// silently, never reported.
///
/// Within a tick, callers update energy first, then lactate and cognitive
/// fatigue, feeding all three the intensities computed from the *previous*
/// tick's energy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonState {
    energy:            f64,
    lactate:           f64,
    cognitive_fatigue: f64,
    rates:             PhysiologyRates,
}

impl Default for PersonState {
    fn default() -> Self {
        Self::rested(PhysiologyRates::default())
    }
}

impl PersonState {
    pub const INITIAL_ENERGY: f64 = 1.0;

    /// Fully rested: energy 1, no lactate, no cognitive fatigue.
    pub fn rested(rates: PhysiologyRates) -> Self {
        Self {
            energy: Self::INITIAL_ENERGY,
            lactate: 0.0,
            cognitive_fatigue: 0.0,
            rates,
        }
    }

    /// Like [`rested`][Self::rested] but validates the coefficients first.
    pub fn with_rates(rates: PhysiologyRates) -> FtResult<Self> {
        rates.validate()?;
        Ok(Self::rested(rates))
    }

    #[inline]
    pub fn energy(&self) -> f64 {
        self.energy
    }

    #[inline]
    pub fn lactate(&self) -> f64 {
        self.lactate
    }

    #[inline]
    pub fn cognitive_fatigue(&self) -> f64 {
        self.cognitive_fatigue
    }

    #[inline]
    pub fn rates(&self) -> &PhysiologyRates {
        &self.rates
    }

    pub fn snapshot(&self) -> PersonSnapshot {
        PersonSnapshot {
            energy:            self.energy,
            lactate:           self.lactate,
            cognitive_fatigue: self.cognitive_fatigue,
        }
    }

    // ── Update rules ─────────────────────────────────────────────────────

    /// `energy' = max(0, energy - consumption * physical + recovery_amount)`.
    ///
    /// `recovery_amount` is already scaled by `dt`; no time scaling happens
    /// here.
    pub fn update_energy(&mut self, physical_intensity: f64, recovery_amount: f64) -> f64 {
        let drained = self.rates.energy_consumption * physical_intensity;
        self.energy = (self.energy - drained + recovery_amount).max(0.0);
        self.energy
    }

    /// Accumulates with physical intensity and clears as `sqrt(lactate)`, so
    /// clearance slows near zero.
    pub fn update_lactate(&mut self, physical_intensity: f64, dt: f64) -> f64 {
        let accumulation = self.rates.lactate_accumulation * physical_intensity * dt;
        let clearance    = self.rates.lactate_clearance * self.lactate.sqrt() * dt;
        self.lactate = (self.lactate + accumulation - clearance).max(0.0);
        self.lactate
    }

    /// Grows with mental intensity, compounded by `1 + ln(1 + fatigue)`, and
    /// recovers as `sqrt(fatigue)`.
    pub fn update_cognitive_fatigue(&mut self, mental_intensity: f64, dt: f64) -> f64 {
        let compounding = 1.0 + self.cognitive_fatigue.ln_1p();
        let increase    = self.rates.cognitive_fatigue * mental_intensity * compounding * dt;
        let recovery    = self.rates.cognitive_recovery * self.cognitive_fatigue.sqrt() * dt;
        self.cognitive_fatigue = (self.cognitive_fatigue + increase - recovery).max(0.0);
        self.cognitive_fatigue
    }
}
