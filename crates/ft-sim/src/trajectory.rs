//! Recorded time series of a run.

use ft_model::PersonSnapshot;

/// Every per-tick series recorded by a run, all of equal length.
///
/// Index 0 holds the initial condition; index `i` the state after `i`
/// updates.  Series are append-only while the sim owns them and read-only
/// once handed out by [`Sim::run`][crate::Sim::run].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    time:              Vec<f64>,
    energy:            Vec<f64>,
    lactate:           Vec<f64>,
    cognitive_fatigue: Vec<f64>,
    total_fatigue:     Vec<f64>,
    recovery:          Vec<f64>,
    physical_activity: Vec<f64>,
    mental_activity:   Vec<f64>,
}

impl Trajectory {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            time:              Vec::with_capacity(n),
            energy:            Vec::with_capacity(n),
            lactate:           Vec::with_capacity(n),
            cognitive_fatigue: Vec::with_capacity(n),
            total_fatigue:     Vec::with_capacity(n),
            recovery:          Vec::with_capacity(n),
            physical_activity: Vec::with_capacity(n),
            mental_activity:   Vec::with_capacity(n),
        }
    }

    /// Record tick 0.  Activity levels and recovery start at 0.
    pub(crate) fn seed(&mut self, time: f64, state: PersonSnapshot) {
        self.push(time, state, 0.0, 0.0);
    }

    pub(crate) fn push(
        &mut self,
        time:     f64,
        state:    PersonSnapshot,
        physical: f64,
        mental:   f64,
    ) {
        self.time.push(time);
        self.energy.push(state.energy);
        self.lactate.push(state.lactate);
        self.cognitive_fatigue.push(state.cognitive_fatigue);
        self.total_fatigue.push(state.total_fatigue());
        self.recovery.push(0.0);
        self.physical_activity.push(physical);
        self.mental_activity.push(mental);
    }

    /// Overwrite the recovery series and add it into energy, unclamped.
    pub(crate) fn apply_recovery_bonus(&mut self, bonus: Vec<f64>) {
        debug_assert_eq!(bonus.len(), self.energy.len());
        for (e, b) in self.energy.iter_mut().zip(&bonus) {
            *e += b;
        }
        self.recovery = bonus;
    }

    // ── Read-only access ──────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    pub fn lactate(&self) -> &[f64] {
        &self.lactate
    }

    pub fn cognitive_fatigue(&self) -> &[f64] {
        &self.cognitive_fatigue
    }

    pub fn total_fatigue(&self) -> &[f64] {
        &self.total_fatigue
    }

    pub fn recovery(&self) -> &[f64] {
        &self.recovery
    }

    pub fn physical_activity(&self) -> &[f64] {
        &self.physical_activity
    }

    pub fn mental_activity(&self) -> &[f64] {
        &self.mental_activity
    }

    /// `(energy, total_fatigue)` pairs in tick order, for a phase plot.
    pub fn phase_plot(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energy.iter().copied().zip(self.total_fatigue.iter().copied())
    }

    /// State at the last recorded tick, including any recovery bonus.
    pub fn final_snapshot(&self) -> Option<PersonSnapshot> {
        let i = self.len().checked_sub(1)?;
        Some(PersonSnapshot {
            energy:            self.energy[i],
            lactate:           self.lactate[i],
            cognitive_fatigue: self.cognitive_fatigue[i],
        })
    }

    /// Min / max / mean / final of each state series.
    pub fn summary(&self) -> TrajectorySummary {
        TrajectorySummary {
            ticks:             self.len(),
            energy:            SeriesStats::of(&self.energy),
            lactate:           SeriesStats::of(&self.lactate),
            cognitive_fatigue: SeriesStats::of(&self.cognitive_fatigue),
            total_fatigue:     SeriesStats::of(&self.total_fatigue),
        }
    }
}

// ── Summaries ─────────────────────────────────────────────────────────────────

/// Descriptive statistics of one series.  All zero for an empty series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesStats {
    pub min:  f64,
    pub max:  f64,
    pub mean: f64,
    pub last: f64,
}

impl SeriesStats {
    pub fn of(series: &[f64]) -> Self {
        let Some(&last) = series.last() else {
            return Self::default();
        };
        let (min, max, sum) = series.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(lo, hi, sum), &v| (lo.min(v), hi.max(v), sum + v),
        );
        Self { min, max, mean: sum / series.len() as f64, last }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectorySummary {
    pub ticks:             usize,
    pub energy:            SeriesStats,
    pub lactate:           SeriesStats,
    pub cognitive_fatigue: SeriesStats,
    pub total_fatigue:     SeriesStats,
}
