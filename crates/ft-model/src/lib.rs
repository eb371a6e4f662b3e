//! `ft-model` — the physiological model evaluated once per tick.
//!
//! Everything here is a pure function of its inputs except [`PersonState`],
//! whose update rules mutate exactly one field each.  The model has no notion
//! of a time loop; `ft-sim` drives it.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`activity`] | `ActivityModel` — energy-gated effective intensity    |
//! | [`recovery`] | `RecoverySchedule` — circadian recovery rate          |
//! | [`person`]   | `PersonState`, `PersonSnapshot` — update rules        |

pub mod activity;
pub mod person;
pub mod recovery;


pub use activity::ActivityModel;
pub use person::{PersonSnapshot, PersonState};
pub use recovery::RecoverySchedule;
