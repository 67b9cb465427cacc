use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};

const BASE_FRICTION: f64 = -4.2;

/// Exponential velocity decay: `v(t) = v0 * e^(friction * t)`.
///
/// The trajectory ends once speed drops to `abs_velocity_threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialDecay {
    pub friction_multiplier: f64,
    pub abs_velocity_threshold: f64,
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self {
            friction_multiplier: 2.0,
            abs_velocity_threshold: 0.1,
        }
    }
}

impl ExponentialDecay {
    #[must_use]
    pub fn new(friction_multiplier: f64) -> Self {
        Self {
            friction_multiplier,
            ..Self::default()
        }
    }

    pub fn validate(self) -> ViewportResult<Self> {
        if !self.friction_multiplier.is_finite() || self.friction_multiplier <= 0.0 {
            return Err(ViewportError::InvalidData(
                "decay friction multiplier must be finite and > 0".to_owned(),
            ));
        }
        if !self.abs_velocity_threshold.is_finite() || self.abs_velocity_threshold <= 0.0 {
            return Err(ViewportError::InvalidData(
                "decay velocity threshold must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    fn friction(self) -> f64 {
        BASE_FRICTION * self.friction_multiplier
    }

    /// Seconds until speed decays to the stop threshold.
    #[must_use]
    pub fn duration_seconds(self, initial_velocity: f64) -> f64 {
        if initial_velocity.abs() <= self.abs_velocity_threshold {
            return 0.0;
        }
        (self.abs_velocity_threshold / initial_velocity.abs()).ln() / self.friction()
    }

    /// Position after `elapsed_seconds`, held at the target once the decay ends.
    #[must_use]
    pub fn value_at(self, initial_value: f64, initial_velocity: f64, elapsed_seconds: f64) -> f64 {
        let t = elapsed_seconds.clamp(0.0, self.duration_seconds(initial_velocity));
        let friction = self.friction();
        initial_value - initial_velocity / friction
            + initial_velocity / friction * (friction * t).exp()
    }

    /// Resting position of the full trajectory.
    #[must_use]
    pub fn target_value(self, initial_value: f64, initial_velocity: f64) -> f64 {
        if initial_velocity.abs() <= self.abs_velocity_threshold {
            return initial_value;
        }
        let friction = self.friction();
        initial_value - initial_velocity / friction
            + initial_velocity.signum() * self.abs_velocity_threshold / friction
    }
}
