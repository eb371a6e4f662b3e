//! `ft-sim` — tick loop orchestrator for the rust_fatigue simulator.
//!
//! # Tick loop
//!
//! ```text
//! build:  validate config, record tick 0 (energy 1, lactate 0, fatigue 0)
//! for tick in 1..len:
//!   ① Intensity — physical and mental, gated on energy[tick - 1]
//!   ② Recovery  — circadian rate at t = tick * dt
//!   ③ Update    — energy (rate * dt), lactate, cognitive fatigue
//!   ④ Record    — append snapshot, total fatigue, intensities
//! after:  add periodic recovery bonus into the energy series
//! ```
//!
//! The loop is strictly sequential: every tick reads the previous tick's
//! energy.  `Sim::run` consumes the sim, so a run happens exactly once.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ft_core::SimConfig;
//! use ft_sim::{NoopObserver, SimBuilder};
//!
//! let sim = SimBuilder::new(SimConfig::default()).build()?;
//! let trajectory = sim.run(&mut NoopObserver);
//! assert_eq!(trajectory.len(), 1200);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use trajectory::{SeriesStats, Trajectory, TrajectorySummary};
