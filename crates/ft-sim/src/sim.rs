//! The `Sim` struct and its tick loop.

use ft_core::{SimConfig, Tick, TimeGrid, whole_steps};
use ft_model::{ActivityModel, PersonState, RecoverySchedule};
use tracing::{debug, info, trace};

use crate::{SimObserver, Trajectory};

/// The simulation runner.
///
/// A `Sim` is *initialized* when built (tick 0 recorded) and becomes
/// *run-complete* when [`run`][Self::run] consumes it and returns the
/// [`Trajectory`].  Because `run` takes `self`, a finished sim cannot be run
/// again.
///
/// Each tick `i` (from 1 to `len - 1`):
///
/// 1. physical and mental intensity from the energy recorded at `i - 1`;
/// 2. recovery rate at `t = i * dt`;
/// 3. energy update with `recovery_rate * dt`;
/// 4. lactate and cognitive fatigue updates;
/// 5. record the snapshot and both intensities at index `i`.
///
/// After the last tick, `run` adds the periodic recovery bonus to the energy
/// series (see [`run`][Self::run]).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config:     SimConfig,
    pub(crate) grid:       TimeGrid,
    pub(crate) person:     PersonState,
    pub(crate) physical:   ActivityModel,
    pub(crate) mental:     ActivityModel,
    pub(crate) schedule:   RecoverySchedule,
    pub(crate) trajectory: Trajectory,
    pub(crate) next_tick:  Tick,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run every remaining tick, apply the recovery bonus, and hand back the
    /// trajectory.
    ///
    /// The bonus is `recovery_rate(t) * dt` at every tick `i >= 1` whose time
    /// `i * dt` is a whole multiple of `bonus_period`, and 0 elsewhere.  It is added
    /// to the recorded energy series after the loop and is not clamped, so
    /// energy may exceed 1.0 at those ticks.  The live `PersonState` never
    /// sees it.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> Trajectory {
        info!(
            ticks = self.grid.len(),
            dt = self.grid.dt(),
            from = %self.next_tick,
            "starting run"
        );

        while self.step(observer) {}

        self.apply_recovery_bonus();
        observer.on_run_end(&self.trajectory);

        if let Some(last) = self.trajectory.final_snapshot() {
            info!(
                energy = last.energy,
                lactate = last.lactate,
                cognitive_fatigue = last.cognitive_fatigue,
                "run complete"
            );
        }
        self.trajectory
    }

    /// Process the next tick (tick 1 on a fresh sim; tick 0 is recorded by
    /// the builder).  Returns `false` (and does nothing) once the grid is
    /// exhausted.
    ///
    /// Useful for tests and incremental stepping; the recovery bonus is only
    /// applied by [`run`][Self::run].
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        let now = self.next_tick;
        if now >= self.grid.end_tick() {
            return false;
        }
        self.process_tick(now);
        observer.on_tick_end(now, &self.person);
        self.next_tick = now + 1;
        true
    }

    /// `true` once every tick on the grid has been processed.
    pub fn is_complete(&self) -> bool {
        self.next_tick >= self.grid.end_tick()
    }

    /// The next tick `step` will process.  Starts at tick 1.
    pub fn current_tick(&self) -> Tick {
        self.next_tick
    }

    pub fn person(&self) -> &PersonState {
        &self.person
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Series recorded so far (no recovery bonus yet).
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) {
        debug_assert!(now > Tick::ZERO, "tick 0 is recorded by the builder");
        let prev = Tick(now.0 - 1);

        let dt = self.grid.dt();
        let t  = self.grid.time_at(now);

        let prev_energy = self.trajectory.energy()[prev.index()];
        let physical = self.physical.intensity(prev_energy);
        let mental   = self.mental.intensity(prev_energy);
        let rate     = self.schedule.recovery_rate(t);

        self.person.update_energy(physical, rate * dt);
        self.person.update_lactate(physical, dt);
        self.person.update_cognitive_fatigue(mental, dt);

        let snapshot = self.person.snapshot();
        trace!(tick = %now, t, physical, mental, energy = snapshot.energy, "tick");
        self.trajectory.push(t, snapshot, physical, mental);
    }

    fn apply_recovery_bonus(&mut self) {
        let dt     = self.grid.dt();
        let period = self.config.bonus_period;
        let rates  = self.schedule.rates_for(self.trajectory.time());

        let bonus: Vec<f64> = self
            .grid
            .ticks()
            .zip(rates)
            .map(|(tick, rate)| {
                let periods = whole_steps(self.grid.time_at(tick), period);
                if matches!(periods, Some(n) if n >= 1) { rate * dt } else { 0.0 }
            })
            .collect();

        let applied = bonus.iter().filter(|b| **b != 0.0).count();
        debug!(period, applied, "applying recovery bonus");
        self.trajectory.apply_recovery_bonus(bonus);
    }
}
