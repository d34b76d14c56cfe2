//! # Spin Controller
//!
//! The spin animation is a small state machine, `Idle → Spinning → Idle`,
//! advanced by an external tick driver (a frame scheduler in a browser, a
//! sleep loop in the terminal host). Each tick carries a monotonic timestamp
//! in milliseconds; the controller never reads a clock on its own.
//!
//! A spin picks its target slice up front, plans a final rotation that puts
//! that slice's center under the top marker, and eases towards it. The
//! landing slice is then derived back from the final rotation, which must
//! agree with the target by construction.

pub mod plan;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use plan::{SpinPlan, ease_out_quint, landing_index};

use crate::constants::spin::{
    BASE_DURATION_MS, BASE_SPIN_SPEED, DURATION_JITTER_MS, EXTRA_TURNS,
};
use crate::core::WheelState;

/// Presentation tuning for spins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTuning {
    /// Full turns every spin makes at minimum
    pub base_spin_speed: u32,
    /// Extra full turns added at random, inclusive
    pub extra_turns: u32,
    pub base_duration_ms: u32,
    /// Random duration added on top of the base, exclusive
    pub duration_jitter_ms: u32,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            base_spin_speed: BASE_SPIN_SPEED,
            extra_turns: EXTRA_TURNS,
            base_duration_ms: BASE_DURATION_MS,
            duration_jitter_ms: DURATION_JITTER_MS,
        }
    }
}

/// Result of a finished spin
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub index: usize,
    pub option: String,
    pub rotation: f64,
}

/// What a single tick did
#[derive(Debug, Clone, PartialEq)]
pub enum SpinTick {
    /// No spin in progress
    Idle,
    /// The wheel moved; `progress` is the linear time progress in `[0, 1)`
    Frame { rotation: f64, progress: f64 },
    /// The spin finished on this tick
    Landed(SpinOutcome),
}

#[derive(Debug, Clone)]
struct ActiveSpin {
    plan: SpinPlan,
    started_at_ms: f64,
    // Labels at spin time; edits during the animation do not move the result
    options: Vec<String>,
}

#[derive(Debug, Clone, Default)]
enum SpinPhase {
    #[default]
    Idle,
    Spinning(ActiveSpin),
}

/// Drives spins of a [`WheelState`]
#[derive(Debug)]
pub struct SpinController<R = StdRng> {
    tuning: SpinTuning,
    rng: R,
    phase: SpinPhase,
}

impl SpinController<StdRng> {
    /// Controller seeded from the operating system
    pub fn new(tuning: SpinTuning) -> Self {
        Self::with_rng(tuning, StdRng::from_os_rng())
    }

    /// Controller with a reproducible sequence of spins
    pub fn seeded(tuning: SpinTuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SpinController<R> {
    pub fn with_rng(tuning: SpinTuning, rng: R) -> Self {
        Self {
            tuning,
            rng,
            phase: SpinPhase::Idle,
        }
    }

    pub fn tuning(&self) -> &SpinTuning {
        &self.tuning
    }

    /// Change the minimum number of turns; applies from the next spin
    pub fn set_base_spin_speed(&mut self, base_spin_speed: u32) {
        self.tuning.base_spin_speed = base_spin_speed;
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    /// Plan of the spin in progress
    pub fn active_plan(&self) -> Option<&SpinPlan> {
        match &self.phase {
            SpinPhase::Spinning(active) => Some(&active.plan),
            SpinPhase::Idle => None,
        }
    }

    /// Start a spin at `now_ms`
    ///
    /// Returns `false` without touching anything when a spin is already
    /// running or the wheel has no options.
    pub fn spin(&mut self, state: &mut WheelState, now_ms: f64) -> bool {
        if state.spinning || self.is_spinning() || state.is_empty() {
            return false;
        }

        let count = state.option_count();
        let target_index = self.rng.random_range(0..count);
        let spins = self
            .tuning
            .base_spin_speed
            .saturating_add(self.rng.random_range(0..=self.tuning.extra_turns));
        let jitter = if self.tuning.duration_jitter_ms == 0 {
            0
        } else {
            self.rng.random_range(0..self.tuning.duration_jitter_ms)
        };
        let duration_ms = f64::from(self.tuning.base_duration_ms) + f64::from(jitter);

        let Some(plan) = SpinPlan::new(state.rotation, count, target_index, spins, duration_ms)
        else {
            return false;
        };

        state.spinning = true;
        self.phase = SpinPhase::Spinning(ActiveSpin {
            plan,
            started_at_ms: now_ms,
            options: state.options.clone(),
        });
        true
    }

    /// Advance the animation to `now_ms`
    pub fn tick(&mut self, state: &mut WheelState, now_ms: f64) -> SpinTick {
        let SpinPhase::Spinning(active) = &self.phase else {
            return SpinTick::Idle;
        };

        let elapsed = now_ms - active.started_at_ms;
        let progress = active.plan.progress(elapsed);
        // Out-of-order timestamps never turn the wheel back
        state.rotation = active.plan.rotation_at(elapsed).max(state.rotation);

        if progress < 1.0 {
            return SpinTick::Frame {
                rotation: state.rotation,
                progress,
            };
        }

        let SpinPhase::Spinning(active) = std::mem::take(&mut self.phase) else {
            return SpinTick::Idle;
        };
        state.spinning = false;

        let index = active.plan.landing_index();
        debug_assert_eq!(
            index, active.plan.target_index,
            "landing slice must match the planned target"
        );

        SpinTick::Landed(SpinOutcome {
            index,
            option: active.options[index].clone(),
            rotation: state.rotation,
        })
    }
}
