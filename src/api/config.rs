use serde::{Deserialize, Serialize};

use crate::animation::{AnimationSpec, Easing, ExponentialDecay};
use crate::core::primitives::SECONDS_PER_DAY;
use crate::core::time_axis::{validate_view_span, validate_width};
use crate::error::{ViewportError, ViewportResult};

/// Controller bootstrap configuration.
///
/// Serializable so widgets can persist their zoom defaults next to other
/// settings. Missing fields fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_initial_view_span_seconds")]
    pub initial_view_span_seconds: f64,
    #[serde(default = "default_initial_width_px")]
    pub initial_width_px: u32,
    #[serde(default = "default_span_animation")]
    pub span_animation: AnimationSpec,
    #[serde(default = "default_settle_animation")]
    pub settle_animation: AnimationSpec,
    #[serde(default = "default_fling_animation")]
    pub fling_animation: AnimationSpec,
    #[serde(default)]
    pub fling_decay: ExponentialDecay,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            initial_view_span_seconds: default_initial_view_span_seconds(),
            initial_width_px: default_initial_width_px(),
            span_animation: default_span_animation(),
            settle_animation: default_settle_animation(),
            fling_animation: default_fling_animation(),
            fling_decay: ExponentialDecay::default(),
        }
    }
}

impl ViewportConfig {
    /// Sets the span and width used before the first resize.
    #[must_use]
    pub fn with_initial_view(mut self, view_span_seconds: f64, width_px: u32) -> Self {
        self.initial_view_span_seconds = view_span_seconds;
        self.initial_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_span_animation(mut self, spec: AnimationSpec) -> Self {
        self.span_animation = spec;
        self
    }

    #[must_use]
    pub fn with_settle_animation(mut self, spec: AnimationSpec) -> Self {
        self.settle_animation = spec;
        self
    }

    #[must_use]
    pub fn with_fling_animation(mut self, spec: AnimationSpec) -> Self {
        self.fling_animation = spec;
        self
    }

    #[must_use]
    pub fn with_fling_decay(mut self, decay: ExponentialDecay) -> Self {
        self.fling_decay = decay;
        self
    }

    pub fn validate(self) -> ViewportResult<Self> {
        validate_view_span(self.initial_view_span_seconds)?;
        validate_width(self.initial_width_px)?;
        self.span_animation.validate()?;
        self.settle_animation.validate()?;
        self.fling_animation.validate()?;
        self.fling_decay.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(self) -> ViewportResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ViewportError::InvalidData(format!("failed to serialize viewport config: {e}"))
        })
    }

    /// Parses and validates a config, filling absent fields with defaults.
    pub fn from_json_str(input: &str) -> ViewportResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ViewportError::InvalidData(format!("failed to parse viewport config: {e}"))
        })?;
        config.validate()
    }
}

fn default_initial_view_span_seconds() -> f64 {
    SECONDS_PER_DAY as f64
}

fn default_initial_width_px() -> u32 {
    1
}

fn default_span_animation() -> AnimationSpec {
    AnimationSpec::new(0.3, Easing::Linear)
}

fn default_settle_animation() -> AnimationSpec {
    AnimationSpec::new(0.3, Easing::Linear)
}

fn default_fling_animation() -> AnimationSpec {
    AnimationSpec::new(0.6, Easing::Decelerate)
}
