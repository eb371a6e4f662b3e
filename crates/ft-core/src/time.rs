//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter on a fixed
//! grid of step `dt`:
//!
//!   t(tick) = tick * dt
//!
//! Sample times are always recomputed from the integer tick rather than
//! accumulated, so tick 1 000 sits at exactly `1000.0 * dt` with no summation
//! drift.  Any periodic condition ("every 20 time units") is resolved to a
//! whole number of ticks once, up front, and then checked with integer
//! arithmetic.

use std::fmt;

use crate::{FtError, FtResult};

/// Relative tolerance used when deciding whether `span / dt` is a whole number.
const WHOLE_STEP_TOLERANCE: f64 = 1e-9;

/// Largest grid `TimeGrid::new` accepts.  Every recorded series is a `Vec<f64>`
/// of this length, so the bound keeps allocation sane.
pub const MAX_GRID_LEN: u64 = u32::MAX as u64;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.  Tick 0 holds the initial condition.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The tick immediately before `self`, or `None` at tick 0.
    #[inline]
    pub fn prev(self) -> Option<Tick> {
        self.0.checked_sub(1).map(Tick)
    }

    /// Index into a per-tick series.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Step arithmetic ──────────────────────────────────────────────────────────

/// Number of `dt` steps needed to cover `span`, rounding up.
///
/// A ratio within `1e-9` (relative) of an integer counts as that integer, so
/// `steps_to_cover(120.0, 0.1)` is 1200 even though `120.0 / 0.1` is not
/// exactly representable.
pub fn steps_to_cover(span: f64, dt: f64) -> u64 {
    let ratio = span / dt;
    match nearest_whole(ratio) {
        Some(n) => n,
        None => ratio.ceil() as u64,
    }
}

/// `Some(n)` if `span` is (within tolerance) exactly `n` steps of `dt`.
pub fn whole_steps(span: f64, dt: f64) -> Option<u64> {
    nearest_whole(span / dt)
}

fn nearest_whole(ratio: f64) -> Option<u64> {
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= WHOLE_STEP_TOLERANCE * nearest.abs().max(1.0) {
        Some(nearest.max(0.0) as u64)
    } else {
        None
    }
}

// ── TimeGrid ─────────────────────────────────────────────────────────────────

/// A fixed grid of `len` samples spaced `dt` apart, starting at `t = 0`.
///
/// `len = ceil(time_end / dt)`, so the grid covers `[0, time_end)`.  Cheap to
/// copy; holds no heap data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeGrid {
    dt:  f64,
    len: u64,
}

impl TimeGrid {
    /// Build the grid for a run of duration `time_end` with step `dt`.
    ///
    /// Both must be finite and strictly positive, and `time_end` must span at
    /// least one and at most [`MAX_GRID_LEN`] steps.
    pub fn new(time_end: f64, dt: f64) -> FtResult<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(FtError::invalid("dt", dt, "must be finite and > 0"));
        }
        if !time_end.is_finite() || time_end <= 0.0 {
            return Err(FtError::invalid("time_end", time_end, "must be finite and > 0"));
        }
        let ratio = time_end / dt;
        if !ratio.is_finite() || ratio > MAX_GRID_LEN as f64 {
            return Err(FtError::invalid("time_end", time_end, "needs too many dt steps"));
        }
        let len = steps_to_cover(time_end, dt);
        if len == 0 {
            return Err(FtError::invalid("time_end", time_end, "must span at least one dt"));
        }
        Ok(Self { dt, len })
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of samples (including tick 0).
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last tick on the grid.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.len)
    }

    /// Simulated time of `tick`.
    #[inline]
    pub fn time_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.dt
    }

    /// Every tick on the grid, in order.
    pub fn ticks(&self) -> impl Iterator<Item = Tick> + use<> {
        (0..self.len).map(Tick)
    }

    /// Every sample time on the grid, in order.
    pub fn times(&self) -> impl Iterator<Item = f64> + use<> {
        let dt = self.dt;
        (0..self.len).map(move |i| i as f64 * dt)
    }
}
