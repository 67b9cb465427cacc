use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};

mod decay;

pub use decay::ExponentialDecay;

/// Interpolation curve applied to normalized animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic ease-out, used when settling a fling.
    Decelerate,
}

impl Easing {
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Decelerate => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Duration and curve of a target-value animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub duration_seconds: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration_seconds: 0.3,
            easing: Easing::Linear,
        }
    }
}

impl AnimationSpec {
    #[must_use]
    pub fn new(duration_seconds: f64, easing: Easing) -> Self {
        Self {
            duration_seconds,
            easing,
        }
    }

    pub fn validate(self) -> ViewportResult<Self> {
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(ViewportError::InvalidData(
                "animation duration must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimationPhase {
    Idle,
    Animating {
        from: f64,
        to: f64,
        started_at: f64,
        spec: AnimationSpec,
    },
}

/// A scalar that either rests at a value or interpolates toward a target.
///
/// Starting a new animation replaces the one in flight, continuing from the
/// last sampled value. There is no queue: the latest target wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimatedScalar {
    value: f64,
    phase: AnimationPhase,
}

impl AnimatedScalar {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            phase: AnimationPhase::Idle,
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    /// Value the scalar rests at once the current animation completes.
    #[must_use]
    pub fn target(self) -> f64 {
        match self.phase {
            AnimationPhase::Idle => self.value,
            AnimationPhase::Animating { to, .. } => to,
        }
    }

    #[must_use]
    pub fn phase(self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self.phase, AnimationPhase::Animating { .. })
    }

    /// Jumps to `value`, cancelling any animation in flight.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.phase = AnimationPhase::Idle;
    }

    /// Starts animating from the current value toward `target` at clock `now`.
    pub fn animate_to(&mut self, target: f64, now: f64, spec: AnimationSpec) {
        if target == self.value {
            self.snap_to(target);
            return;
        }
        self.phase = AnimationPhase::Animating {
            from: self.value,
            to: target,
            started_at: now,
            spec,
        };
    }

    /// Advances to clock `now` and returns the sampled value.
    pub fn sample(&mut self, now: f64) -> f64 {
        if let AnimationPhase::Animating {
            from,
            to,
            started_at,
            spec,
        } = self.phase
        {
            let elapsed = (now - started_at).max(0.0);
            if elapsed >= spec.duration_seconds {
                self.snap_to(to);
            } else {
                let eased = spec.easing.apply(elapsed / spec.duration_seconds);
                self.value = from + (to - from) * eased;
            }
        }
        self.value
    }
}
