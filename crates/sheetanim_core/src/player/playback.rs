//! Playback state snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an animation player currently is.
///
/// This is plain data: take it with
/// [`AnimationPlayer::snapshot`](super::AnimationPlayer::snapshot), persist it with
/// any serde format, and hand it back to
/// [`AnimationPlayer::restore`](super::AnimationPlayer::restore) to resume playback
/// mid-animation.
///
/// # Examples
///
/// ```
/// use sheetanim_core::player::PlaybackData;
///
/// let data = PlaybackData {
///     current_atlas: "Default".to_string(),
///     current_state: Some("run".to_string()),
///     paused: false,
///     tick: 2.5,
///     frame_index: 2,
/// };
///
/// let text = data.to_string();
/// assert!(text.contains("Current State: run"));
/// assert!(text.contains("Frame Index: 2"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackData {
	/// Active atlas name
	pub current_atlas: String,
	/// Active state name, `None` until a state is registered
	pub current_state: Option<String>,
	/// Playback is frozen while set
	pub paused: bool,
	/// Fractional frame position, `frame_index == floor(tick)` while playing
	pub tick: f64,
	/// Index into the active state's frame sequence
	pub frame_index: usize,
}

impl PlaybackData {
	/// Creates the initial record for `atlas`: playing, no state, at frame 0.
	pub fn new(atlas: impl Into<String>) -> Self {
		Self {
			current_atlas: atlas.into(),
			current_state: None,
			paused: false,
			tick: 0.0,
			frame_index: 0,
		}
	}
}

impl fmt::Display for PlaybackData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Playback state")?;
		writeln!(f, "Current Atlas: {}", self.current_atlas)?;
		writeln!(f, "Current State: {}", self.current_state.as_deref().unwrap_or("-"))?;
		writeln!(f, "Paused: {}", self.paused)?;
		writeln!(f, "Tick: {}", self.tick)?;
		write!(f, "Frame Index: {}", self.frame_index)
	}
}
