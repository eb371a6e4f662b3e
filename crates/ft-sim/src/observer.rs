//! Simulation observer trait for progress reporting.

use ft_core::Tick;
use ft_model::PersonState;

use crate::Trajectory;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run].
///
/// Observers get shared references only; they cannot influence the run.  All
/// methods default to no-ops.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct EveryDay;
///
/// impl SimObserver for EveryDay {
///     fn on_tick_end(&mut self, tick: Tick, person: &PersonState) {
///         if tick.0 % 240 == 0 {
///             println!("{tick}: energy {:.3}", person.energy());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after tick `tick` has updated the person and been recorded.
    fn on_tick_end(&mut self, _tick: Tick, _person: &PersonState) {}

    /// Called once, after the recovery bonus pass, with the final trajectory.
    fn on_run_end(&mut self, _trajectory: &Trajectory) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
