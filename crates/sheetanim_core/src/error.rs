//! Error types for atlas setup, state registration and playback control.

use thiserror::Error;

use crate::sheet::FrameRect;

/// Errors that can occur when configuring or driving an animation player.
///
/// Every failing operation leaves the player exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimError {
	/// A player needs at least one atlas
	#[error("No atlases given: a player needs at least one sprite sheet")]
	NoAtlases,

	/// Two atlases share a name
	#[error("Duplicate atlas name: {0:?}")]
	DuplicateAtlas(String),

	/// Atlas name is not owned by the player
	#[error("Unknown atlas: {0:?}")]
	UnknownAtlas(String),

	/// State name is not registered for an atlas
	#[error("State {state:?} not found in atlas {atlas:?}")]
	StateNotFound {
		/// Atlas that was searched
		atlas: String,
		/// Requested state name
		state: String,
	},

	/// A frame sequence must contain at least one frame
	#[error("Frame count must be at least 1")]
	ZeroFrameCount,

	/// Frame rectangle has no area
	#[error("Invalid frame size {width}x{height}: both dimensions must be non-zero")]
	InvalidFrameSize {
		/// Requested width
		width: u32,
		/// Requested height
		height: u32,
	},

	/// A sliced frame falls outside the sprite sheet
	#[error("Frame {index} sliced from {origin} exceeds sheet bounds {sheet_width}x{sheet_height}")]
	FrameOutOfBounds {
		/// Index of the first frame that does not fit
		index: usize,
		/// Rectangle of the first frame in the sequence
		origin: FrameRect,
		/// Sheet width in pixels
		sheet_width: u32,
		/// Sheet height in pixels
		sheet_height: u32,
	},

	/// Frame rate is negative, zero or not finite
	#[error("Invalid frame rate {0}: must be finite and greater than zero")]
	InvalidFps(f64),

	/// Steps per second is negative, zero or not finite
	#[error("Invalid steps per second {0}: must be finite and greater than zero")]
	InvalidStepsPerSecond(f64),

	/// Restored tick is negative or not finite
	#[error("Invalid tick {0}: must be finite and not negative")]
	InvalidTick(f64),

	/// A playing record's frame index does not follow from its tick
	#[error("Frame index {frame_index} does not match tick {tick} while playing")]
	PhaseMismatch {
		/// Restored tick
		tick: f64,
		/// Restored frame index, expected to be `floor(tick)`
		frame_index: usize,
	},

	/// Atlases disagree on the length of a state
	#[error(
		"Frame count mismatch for state {state:?}: expected {expected} frames, got {actual}"
	)]
	FrameCountMismatch {
		/// State name
		state: String,
		/// Frame count already registered
		expected: usize,
		/// Frame count of the conflicting animation
		actual: usize,
	},

	/// Frame index is not valid for the state
	#[error("Frame index {index} out of range for state {state:?} ({len} frames)")]
	FrameIndexOutOfRange {
		/// State name
		state: String,
		/// Requested index
		index: usize,
		/// Number of frames in the state
		len: usize,
	},
}

impl AnimError {
	/// Creates an [`AnimError::StateNotFound`] error.
	pub(crate) fn state_not_found(atlas: &str, state: &str) -> Self {
		Self::StateNotFound {
			atlas: atlas.to_string(),
			state: state.to_string(),
		}
	}
}
