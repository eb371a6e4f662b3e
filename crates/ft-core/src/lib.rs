//! `ft-core` — foundational types for the `rust_fatigue` simulator.
//!
//! This crate is a dependency of every other `ft-*` crate.  It has no `ft-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`time`]   | `Tick`, `TimeGrid`, `whole_steps`                           |
//! | [`config`] | `SimConfig`, `PhysiologyRates`, `CircadianConfig`, `ActivityGate` |
//! | [`error`]  | `FtError`, `FtResult`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ActivityGate, CircadianConfig, PhysiologyRates, SimConfig};
pub use error::{FtError, FtResult};
pub use time::{MAX_GRID_LEN, Tick, TimeGrid, steps_to_cover, whole_steps};
