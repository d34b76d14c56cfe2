//! Spin target computation, easing and landing

use std::f64::consts::TAU;

use crate::core::slice_angle;

/// Quintic ease-out: fast start, long suspenseful deceleration
pub fn ease_out_quint(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(5)
}

/// Index of the slice under the top marker at `rotation`
///
/// Returns `None` for an empty wheel.
pub fn landing_index(rotation: f64, count: usize) -> Option<usize> {
    let slice = slice_angle(count)?;
    let angle_at_top = (-rotation).rem_euclid(TAU);
    Some((angle_at_top / slice).floor() as usize % count)
}

/// One fully determined spin: where it starts, where it stops and how long
/// it takes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub target_index: usize,
    pub option_count: usize,
    /// Full turns the wheel makes at minimum
    pub spins: u32,
    pub start_rotation: f64,
    pub final_rotation: f64,
    pub duration_ms: f64,
}

impl SpinPlan {
    /// Plan a spin from `rotation` that ends with the center of slice
    /// `target_index` under the top marker after at least `spins` turns
    ///
    /// The final rotation is the first one past `rotation + spins·2π` that
    /// puts the target's mid-angle at the top, so rotation only moves
    /// forward. Returns `None` when `target_index` is not a slice.
    pub fn new(
        rotation: f64,
        option_count: usize,
        target_index: usize,
        spins: u32,
        duration_ms: f64,
    ) -> Option<Self> {
        let slice = slice_angle(option_count)?;
        if target_index >= option_count {
            return None;
        }

        let desired_at_top = (target_index as f64 + 0.5) * slice;
        let min_delta = f64::from(spins) * TAU;
        let k = ((rotation + min_delta + desired_at_top) / TAU).ceil();
        let final_rotation = k * TAU - desired_at_top;

        Some(Self {
            target_index,
            option_count,
            spins,
            start_rotation: rotation,
            final_rotation,
            duration_ms: duration_ms.max(0.0),
        })
    }

    pub fn delta(&self) -> f64 {
        self.final_rotation - self.start_rotation
    }

    /// Linear time progress in `[0, 1]` after `elapsed_ms`
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Rotation shown `elapsed_ms` into the animation
    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        let t = self.progress(elapsed_ms);
        if t >= 1.0 {
            return self.final_rotation;
        }
        self.start_rotation + self.delta() * ease_out_quint(t)
    }

    /// Slice under the marker once the spin has landed
    pub fn landing_index(&self) -> usize {
        landing_index(self.final_rotation, self.option_count).unwrap_or(self.target_index)
    }
}
