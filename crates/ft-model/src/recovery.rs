//! Circadian recovery schedule.

use ft_core::{CircadianConfig, FtResult};

/// Maps simulated time to a recovery rate: the night rate inside the night
/// window, the day rate outside it.
///
/// Time is reduced to hour-of-day with a Euclidean remainder, so the schedule
/// is periodic in `day_length` and negative times map into `[0, day_length)`.
/// With the default window, hour 18 and hour 0 (= 24) are night and hour 6 is
/// day.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecoverySchedule {
    config: CircadianConfig,
}

impl Default for RecoverySchedule {
    fn default() -> Self {
        Self { config: CircadianConfig::default() }
    }
}

impl RecoverySchedule {
    pub fn new(config: CircadianConfig) -> FtResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &CircadianConfig {
        &self.config
    }

    /// Hour-of-day of `t`, in `[0, day_length)`.
    #[inline]
    pub fn hour_of_day(&self, t: f64) -> f64 {
        t.rem_euclid(self.config.day_length)
    }

    pub fn is_night(&self, t: f64) -> bool {
        let hour  = self.hour_of_day(t);
        let start = self.config.night_start_hour;
        let end   = self.config.night_end_hour;
        if start > end {
            hour >= start || hour < end
        } else {
            hour >= start && hour < end
        }
    }

    /// Recovery rate per unit time at `t`.  Not scaled by `dt`.
    #[inline]
    pub fn recovery_rate(&self, t: f64) -> f64 {
        if self.is_night(t) {
            self.config.night_rate
        } else {
            self.config.day_rate
        }
    }

    /// Elementwise [`recovery_rate`][Self::recovery_rate] over a time series.
    pub fn rates_for(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.recovery_rate(t)).collect()
    }
}
