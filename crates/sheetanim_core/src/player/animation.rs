//! Animation states and their registration parameters.

use std::fmt;

use image::GenericImageView;
use serde::{Deserialize, Serialize};

use crate::{
	error::AnimError,
	sheet::{FrameRect, Layout, ping_pong, slice_frames},
};

/// Checks that a frame rate is usable for playback.
pub(crate) fn validate_fps(fps: f64) -> Result<(), AnimError> {
	if fps.is_finite() && fps > 0.0 {
		Ok(())
	} else {
		Err(AnimError::InvalidFps(fps))
	}
}

/// One named animation state: a frame sequence and its playback rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
	name: String,
	frames: Vec<FrameRect>,
	fps: f64,
}

impl Animation {
	/// Creates a new animation.
	///
	/// # Arguments
	///
	/// * `name` - State name, e.g. `"idle"`
	/// * `frames` - Frame sequence, played in order
	/// * `fps` - Frames advanced per second of playback
	///
	/// # Errors
	///
	/// Returns an error if `frames` is empty or `fps` is not a finite positive number.
	pub fn new(name: impl Into<String>, frames: Vec<FrameRect>, fps: f64) -> Result<Self, AnimError> {
		if frames.is_empty() {
			return Err(AnimError::ZeroFrameCount);
		}
		validate_fps(fps)?;

		Ok(Self {
			name: name.into(),
			frames,
			fps,
		})
	}

	/// Returns the state name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the frame sequence.
	pub fn frames(&self) -> &[FrameRect] {
		&self.frames
	}

	/// Returns the frame at `index`, if any.
	pub fn frame(&self, index: usize) -> Option<FrameRect> {
		self.frames.get(index).copied()
	}

	/// Returns the number of frames, including ping-pong frames.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Always false: an animation holds at least one frame.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Returns the playback rate in frames per second.
	pub fn fps(&self) -> f64 {
		self.fps
	}

	/// Sets the playback rate.
	///
	/// # Errors
	///
	/// Returns [`AnimError::InvalidFps`] for a non-positive or non-finite rate.
	pub fn set_fps(&mut self, fps: f64) -> Result<(), AnimError> {
		validate_fps(fps)?;
		self.fps = fps;
		Ok(())
	}
}

impl fmt::Display for Animation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Animation({:?}, {} frames, {} fps)", self.name, self.frames.len(), self.fps)
	}
}

/// Parameters for registering a state on every atlas of a player.
///
/// State tables are plain data, so they can be declared in configuration files.
///
/// # Examples
///
/// ```
/// use sheetanim_core::player::StateSpec;
/// use sheetanim_core::sheet::{FrameRect, Layout};
///
/// let run = StateSpec::new("run", FrameRect::new(0, 32, 32, 32), 8, 12.0);
/// let blink = StateSpec::new("blink", FrameRect::new(0, 0, 16, 16), 4, 8.0)
///     .with_ping_pong(true)
///     .with_layout(Layout::Vertical);
///
/// assert!(!run.ping_pong);
/// assert_eq!(blink.layout, Layout::Vertical);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpec {
	/// State name
	pub name: String,
	/// Rectangle of the first frame
	pub origin: FrameRect,
	/// Number of frames on the sheet, before ping-pong expansion
	pub frame_count: usize,
	/// Play the frames back and forth
	#[serde(default)]
	pub ping_pong: bool,
	/// Direction of travel between frames
	#[serde(default)]
	pub layout: Layout,
	/// Playback rate in frames per second
	pub fps: f64,
}

impl StateSpec {
	/// Creates a horizontal, non-mirrored state description.
	pub fn new(name: impl Into<String>, origin: FrameRect, frame_count: usize, fps: f64) -> Self {
		Self {
			name: name.into(),
			origin,
			frame_count,
			ping_pong: false,
			layout: Layout::Horizontal,
			fps,
		}
	}

	/// Sets the ping-pong flag.
	pub fn with_ping_pong(mut self, ping_pong: bool) -> Self {
		self.ping_pong = ping_pong;
		self
	}

	/// Sets the frame layout.
	pub fn with_layout(mut self, layout: Layout) -> Self {
		self.layout = layout;
		self
	}

	/// Slices the described frames from `sheet` and builds the animation.
	///
	/// # Errors
	///
	/// Returns an error if the frame count is zero, the rectangle is empty or
	/// exceeds the sheet, or the frame rate is invalid.
	pub fn build<I: GenericImageView>(&self, sheet: &I) -> Result<Animation, AnimError> {
		validate_fps(self.fps)?;

		let mut frames = slice_frames(sheet, self.origin, self.frame_count, self.layout)?;
		if self.ping_pong {
			frames = ping_pong(frames);
		}

		Animation::new(self.name.clone(), frames, self.fps)
	}
}
