//! Fluent builder for constructing a [`Sim`].

use ft_core::{SimConfig, Tick};
use ft_model::{ActivityModel, PersonState, RecoverySchedule};

use crate::{Sim, SimResult, Trajectory};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                                    |
/// |------------------|------------------------------------------------------------|
/// | `.physical(m)`   | `ActivityModel` from `physical_base_rate` and `gate`       |
/// | `.mental(m)`     | `ActivityModel` from `mental_base_rate` and `gate`         |
/// | `.schedule(s)`   | `RecoverySchedule` from `config.circadian`                 |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig::default()).build()?;
/// let trajectory = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    physical: Option<ActivityModel>,
    mental:   Option<ActivityModel>,
    schedule: Option<RecoverySchedule>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            physical: None,
            mental:   None,
            schedule: None,
        }
    }

    /// Replace the physical activity model derived from the config.
    pub fn physical(mut self, model: ActivityModel) -> Self {
        self.physical = Some(model);
        self
    }

    /// Replace the mental activity model derived from the config.
    pub fn mental(mut self, model: ActivityModel) -> Self {
        self.mental = Some(model);
        self
    }

    /// Replace the circadian schedule derived from the config.
    pub fn schedule(mut self, schedule: RecoverySchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Validate the config, resolve defaults, record tick 0, and return a
    /// ready-to-run [`Sim`] whose first `step` processes tick 1.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let grid = config.time_grid()?;

        let physical = match self.physical {
            Some(m) => m,
            None => ActivityModel::with_gate(config.physical_base_rate, config.gate)?,
        };
        let mental = match self.mental {
            Some(m) => m,
            None => ActivityModel::with_gate(config.mental_base_rate, config.gate)?,
        };
        let schedule = match self.schedule {
            Some(s) => s,
            None => RecoverySchedule::new(config.circadian)?,
        };

        let person = PersonState::with_rates(config.rates)?;

        let mut trajectory = Trajectory::with_capacity(grid.len());
        trajectory.seed(grid.time_at(Tick::ZERO), person.snapshot());

        Ok(Sim {
            config,
            grid,
            person,
            physical,
            mental,
            schedule,
            trajectory,
            next_tick: Tick(1),
        })
    }
}
