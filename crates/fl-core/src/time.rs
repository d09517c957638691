//! Simulation time model.
//!
//! # Design
//!
//! The flock has no internal clock of its own.  Every step is driven by an
//! externally supplied `dt` (seconds, or whatever unit the host uses), and
//! `SimClock` simply records how many steps have run and how much time they
//! covered:
//!
//!   elapsed = Σ dt over all completed ticks
//!
//! The tick counter is an exact integer; the elapsed total is accumulated in
//! `f64` so long runs at small `dt` do not drift visibly.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the total simulated time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The tick about to be processed.  Advanced by [`SimClock::advance`].
    pub current_tick: Tick,
    /// Sum of every `dt` passed to `advance`.
    pub elapsed: f64,
    /// The most recent `dt`.  `0.0` before the first tick.
    pub last_dt: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed tick of length `dt`.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed += f64::from(dt);
        self.last_dt = dt;
    }

    /// Mean `dt` over all completed ticks, or `None` before the first tick.
    pub fn mean_dt(&self) -> Option<f64> {
        (self.current_tick.0 > 0).then(|| self.elapsed / self.current_tick.0 as f64)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {:.3})", self.current_tick, self.elapsed)
    }
}
