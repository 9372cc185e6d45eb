//! Player configuration.
//!
//! The player advances once per fixed simulation step. How many of those steps
//! make up one second is a property of the host loop, so it is configured once
//! here instead of being passed to every call.

use serde::{Deserialize, Serialize};

use crate::error::AnimError;

/// Simulation steps per second assumed when nothing else is configured.
pub const DEFAULT_STEPS_PER_SECOND: f64 = 60.0;

/// Configuration for an [`AnimationPlayer`](super::AnimationPlayer).
///
/// # Presets
///
/// - `default()`: 60 steps per second, the common fixed update rate
/// - `new(n)`: any other positive rate, validated
///
/// # Examples
///
/// ```
/// use sheetanim_core::player::PlayerConfig;
///
/// let config = PlayerConfig::default();
/// assert_eq!(config.steps_per_second, 60.0);
///
/// let config = PlayerConfig::new(120.0)?;
/// assert_eq!(config.step_duration(), 1.0 / 120.0);
///
/// assert!(PlayerConfig::new(0.0).is_err());
/// # Ok::<(), sheetanim_core::AnimError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
	/// Number of `advance` calls that make up one second of playback
	pub steps_per_second: f64,
}

impl Default for PlayerConfig {
	fn default() -> Self {
		Self {
			steps_per_second: DEFAULT_STEPS_PER_SECOND,
		}
	}
}

impl PlayerConfig {
	/// Create a configuration with a custom step rate.
	///
	/// # Errors
	///
	/// Returns [`AnimError::InvalidStepsPerSecond`] if the rate is not a finite
	/// number greater than zero.
	pub fn new(steps_per_second: f64) -> Result<Self, AnimError> {
		let config = Self {
			steps_per_second,
		};
		config.validate()?;
		Ok(config)
	}

	/// Checks the configuration, useful after deserializing it from a file.
	///
	/// # Errors
	///
	/// Returns [`AnimError::InvalidStepsPerSecond`] for a non-positive or
	/// non-finite step rate.
	pub fn validate(&self) -> Result<(), AnimError> {
		if self.steps_per_second.is_finite() && self.steps_per_second > 0.0 {
			Ok(())
		} else {
			Err(AnimError::InvalidStepsPerSecond(self.steps_per_second))
		}
	}

	/// Duration of one simulation step in seconds.
	pub fn step_duration(&self) -> f64 {
		1.0 / self.steps_per_second
	}
}
