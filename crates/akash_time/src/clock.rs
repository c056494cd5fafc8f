//! Simulated astronomical clock.
//!
//! The clock keeps a snapshot point: when `elapsed_seconds == 0` the
//! Julian Day was `julian_day_base`. Time advances by accumulating scaled
//! seconds, which stay small, instead of adding tiny day fractions to a
//! number around 2.4 million. Rebasing with [`SimulatedClock::set_julian_day`]
//! zeroes the accumulator, so rounding error is bounded by the time run
//! since the last rebase rather than since start-up.
//!
//! The clock is a plain value driven by a single owner once per tick.
//! Wrap it in a lock if several threads need to mutate it.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::julian::{J2000_JD, SECONDS_PER_DAY, gregorian_date_time_to_julian_day_precise};
use crate::precise::DoubleDouble;
use crate::sidereal::vernal_equinox_hour_angle_precise;

/// The four scalars that fully describe a [`SimulatedClock`].
///
/// Invariant: current JD = `julian_day_base + elapsed_seconds / 86400`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockState {
    /// Julian Day at `elapsed_seconds == 0`.
    pub julian_day_base: f64,
    /// Scaled seconds since the base.
    pub elapsed_seconds: f64,
    /// `elapsed_seconds` before the most recent update.
    pub last_elapsed_seconds: f64,
    /// Multiplier on update deltas. Negative runs backwards, zero pauses.
    pub time_scale: f64,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            julian_day_base: J2000_JD,
            elapsed_seconds: 0.0,
            last_elapsed_seconds: 0.0,
            time_scale: 1.0,
        }
    }
}

/// Clock advancing astronomical time at an adjustable, reversible rate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulatedClock {
    state: ClockState,
}

impl SimulatedClock {
    /// Clock at J2000.0 running at real-time speed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a clock from a persisted state.
    pub fn from_state(state: ClockState) -> Self {
        Self { state }
    }

    /// Snapshot of the clock for persistence.
    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.state.time_scale = scale;
    }

    pub fn time_scale(&self) -> f64 {
        self.state.time_scale
    }

    /// Advance by `delta_seconds` of wall time, multiplied by the time scale.
    pub fn update(&mut self, delta_seconds: f64) {
        self.state.last_elapsed_seconds = self.state.elapsed_seconds;
        self.state.elapsed_seconds += delta_seconds * self.state.time_scale;
    }

    /// Rebase the clock at Julian Day `jd`.
    pub fn set_julian_day(&mut self, jd: f64) {
        debug!(
            "clock rebased to JD {jd:.6} after {:.3} s since previous base",
            self.state.elapsed_seconds
        );
        self.state.julian_day_base = jd;
        self.state.elapsed_seconds = 0.0;
        self.state.last_elapsed_seconds = 0.0;
    }

    /// Rebase the clock at a calendar instant (UT).
    pub fn set_gregorian_date_time(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) {
        let jd = gregorian_date_time_to_julian_day_precise(year, month, day, hour, minute, second);
        self.set_julian_day(jd.to_f64());
    }

    /// Current Julian Day in extended precision.
    pub fn julian_day_precise(&self) -> DoubleDouble {
        DoubleDouble::from(self.state.julian_day_base)
            + DoubleDouble::from(self.state.elapsed_seconds) / SECONDS_PER_DAY
    }

    /// Current Julian Day.
    pub fn julian_day(&self) -> f64 {
        self.julian_day_precise().to_f64()
    }

    /// Julian Day advanced by the last update. Small; use for per-frame deltas.
    pub fn julian_day_difference(&self) -> f64 {
        self.julian_second_difference() / SECONDS_PER_DAY
    }

    /// Current Julian Day expressed in seconds. Very large.
    pub fn julian_second(&self) -> f64 {
        (DoubleDouble::from(self.state.julian_day_base) * SECONDS_PER_DAY
            + self.state.elapsed_seconds)
            .to_f64()
    }

    /// Seconds advanced by the last update.
    pub fn julian_second_difference(&self) -> f64 {
        self.state.elapsed_seconds - self.state.last_elapsed_seconds
    }

    /// Hour angle of the vernal equinox at the current instant, degrees.
    ///
    /// Uses the extended-precision day directly, so the sidereal
    /// multiplication never sees a rounded Julian Day.
    pub fn vernal_equinox_hour_angle_deg(&self, longitude_deg: f64) -> f64 {
        vernal_equinox_hour_angle_precise(self.julian_day_precise(), longitude_deg)
    }
}
