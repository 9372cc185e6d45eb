//! The animation player state machine.

use std::{collections::HashMap, fmt};

use image::{RgbaImage, SubImage};
use log::{debug, trace};

use super::{
	animation::{Animation, StateSpec, validate_fps},
	config::PlayerConfig,
	playback::PlaybackData,
};
use crate::{error::AnimError, sheet::Atlas, sheet::FrameRect};

/// Plays and manages sprite-sheet animations.
///
/// A player owns one or more [`Atlas`]es and, for each of them, a table of named
/// [`Animation`] states. The host calls [`advance`](Self::advance) once per fixed
/// simulation step and then reads [`current_frame`](Self::current_frame) for drawing.
///
/// # Playback
///
/// Every step adds `fps / steps_per_second` to the tick, and the frame index is
/// `floor(tick)`. Once the index runs past the last frame, tick and index both go
/// back to 0. Pausing freezes tick and index; [`pause_at_frame`](Self::pause_at_frame)
/// also picks the displayed frame.
///
/// The tick is accumulated as a sum of frame rates and divided by the step rate
/// when read, on top of the tick playback last started from. This keeps
/// whole-frame boundaries exact, and a restored tick reads back unchanged.
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use sheetanim_core::prelude::*;
///
/// # fn main() -> Result<(), AnimError> {
/// let mut player = AnimationPlayer::new([Atlas::new("Default", RgbaImage::new(160, 32))])?;
/// player.register_state(&StateSpec::new("idle", FrameRect::new(0, 0, 32, 32), 5, 5.0))?;
///
/// for _ in 0..12 {
///     player.advance();
/// }
/// assert_eq!(player.frame_index(), 1);
/// assert_eq!(player.current_frame_rect(), Some(FrameRect::new(32, 0, 32, 32)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
	config: PlayerConfig,
	atlases: Vec<Atlas>,
	/// atlas name -> state name -> animation
	animations: HashMap<String, HashMap<String, Animation>>,
	current_atlas: String,
	current_state: Option<String>,
	paused: bool,
	/// Tick at the last phase reset, resume or restore
	base_tick: f64,
	/// Sum of frame rates over the steps since `base_tick`
	step_ticks: f64,
	frame_index: usize,
	current_frame: Option<FrameRect>,
}

impl AnimationPlayer {
	/// Creates a player running at the default 60 steps per second.
	///
	/// The first atlas becomes the active one.
	///
	/// # Errors
	///
	/// Returns an error if no atlas is given or two atlases share a name.
	pub fn new(atlases: impl IntoIterator<Item = Atlas>) -> Result<Self, AnimError> {
		Self::with_config(PlayerConfig::default(), atlases)
	}

	/// Creates a player with a custom configuration.
	///
	/// # Errors
	///
	/// Returns an error if the configuration is invalid, no atlas is given, or two
	/// atlases share a name.
	pub fn with_config(
		config: PlayerConfig,
		atlases: impl IntoIterator<Item = Atlas>,
	) -> Result<Self, AnimError> {
		config.validate()?;

		let atlases: Vec<Atlas> = atlases.into_iter().collect();
		let Some(first) = atlases.first() else {
			return Err(AnimError::NoAtlases);
		};
		let current_atlas = first.name().to_string();

		let mut animations = HashMap::with_capacity(atlases.len());
		for atlas in &atlases {
			if animations.insert(atlas.name().to_string(), HashMap::new()).is_some() {
				return Err(AnimError::DuplicateAtlas(atlas.name().to_string()));
			}
		}

		debug!(
			"Created animation player with {} atlas(es) at {} steps/s",
			atlases.len(),
			config.steps_per_second
		);

		Ok(Self {
			config,
			atlases,
			animations,
			current_atlas,
			current_state: None,
			paused: false,
			base_tick: 0.0,
			step_ticks: 0.0,
			frame_index: 0,
			current_frame: None,
		})
	}

	/// Registers a state on every atlas and makes it the current state.
	///
	/// Each atlas gets its own [`Animation`] sliced with the same geometry, replacing
	/// any existing state of that name. Tick and frame index restart at 0; the paused
	/// flag is left alone.
	///
	/// # Errors
	///
	/// Returns an error if the frame count is zero, the frame rectangle is empty or
	/// exceeds any atlas, or the frame rate is invalid. Nothing is registered then.
	pub fn register_state(&mut self, spec: &StateSpec) -> Result<(), AnimError> {
		let built = self
			.atlases
			.iter()
			.map(|atlas| spec.build(atlas.image()).map(|animation| (atlas.name().to_string(), animation)))
			.collect::<Result<Vec<_>, _>>()?;

		for (atlas, animation) in built {
			self.animations.entry(atlas).or_default().insert(spec.name.clone(), animation);
		}

		debug!(
			"Registered state {:?}: {} frames from {} ({}), {} fps",
			spec.name, spec.frame_count, spec.origin, spec.layout, spec.fps
		);

		self.current_state = Some(spec.name.clone());
		self.reset_phase();
		self.refresh_current_frame();
		Ok(())
	}

	/// Adds a prebuilt animation to a single atlas, keyed by its name.
	///
	/// The current state is not changed.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - the atlas is unknown
	/// - a frame lies outside the atlas image
	/// - another atlas defines the same state with a different frame count
	pub fn add_animation(&mut self, atlas: &str, animation: Animation) -> Result<(), AnimError> {
		let target = self.atlas(atlas).ok_or_else(|| AnimError::UnknownAtlas(atlas.to_string()))?;
		let (sheet_width, sheet_height) = target.dimensions();
		if let Some(index) =
			animation.frames().iter().position(|rect| !rect.fits_within(sheet_width, sheet_height))
		{
			return Err(AnimError::FrameOutOfBounds {
				index,
				origin: animation.frames()[0],
				sheet_width,
				sheet_height,
			});
		}

		let conflict = self
			.animations
			.iter()
			.filter(|(name, _)| name.as_str() != atlas)
			.filter_map(|(_, states)| states.get(animation.name()))
			.find(|other| other.len() != animation.len());
		if let Some(other) = conflict {
			return Err(AnimError::FrameCountMismatch {
				state: animation.name().to_string(),
				expected: other.len(),
				actual: animation.len(),
			});
		}

		debug!("Added {animation} to atlas {atlas:?}");
		self.animations.entry(atlas.to_string()).or_default().insert(animation.name().to_string(), animation);

		if self.current_animation().is_some_and(|current| self.frame_index >= current.len()) {
			self.reset_phase();
		}
		self.refresh_current_frame();
		Ok(())
	}

	/// Switches to `state`, restarting playback if the state actually changes.
	///
	/// Selecting the state that is already playing keeps tick and frame index, so
	/// calling this every step for a held input does not restart the animation.
	///
	/// # Errors
	///
	/// Returns [`AnimError::StateNotFound`] if the current atlas has no such state.
	pub fn set_state(&mut self, state: &str) -> Result<(), AnimError> {
		self.lookup(&self.current_atlas, state)?;

		if self.current_state.as_deref() != Some(state) {
			self.current_state = Some(state.to_string());
			self.reset_phase();
		}
		self.refresh_current_frame();
		Ok(())
	}

	/// Switches to `state` without touching tick or frame index.
	///
	/// Useful when states share their phase, such as symmetric idle and walk
	/// cycles. If the kept index lies past the new state's last frame, playback
	/// wraps to frame 0 the same way [`advance`](Self::advance) does.
	///
	/// # Errors
	///
	/// Returns [`AnimError::StateNotFound`] if the current atlas has no such state.
	pub fn set_state_keep_phase(&mut self, state: &str) -> Result<(), AnimError> {
		let len = self.lookup(&self.current_atlas, state)?.len();

		self.current_state = Some(state.to_string());
		if self.frame_index >= len {
			self.reset_phase();
		}
		self.refresh_current_frame();
		Ok(())
	}

	/// Switches the active atlas, keeping state, tick and frame index.
	///
	/// # Errors
	///
	/// Returns an error if the atlas is unknown, lacks the current state, or its
	/// current state has a different frame count. The active atlas is unchanged then.
	pub fn set_atlas(&mut self, atlas: &str) -> Result<(), AnimError> {
		if !self.animations.contains_key(atlas) {
			return Err(AnimError::UnknownAtlas(atlas.to_string()));
		}

		if let Some(state) = self.current_state.as_deref() {
			let target = self.lookup(atlas, state)?;
			let current = self.lookup(&self.current_atlas, state)?;
			if target.len() != current.len() {
				return Err(AnimError::FrameCountMismatch {
					state: state.to_string(),
					expected: current.len(),
					actual: target.len(),
				});
			}
		}

		debug!("Switching atlas {:?} -> {:?}", self.current_atlas, atlas);
		self.current_atlas = atlas.to_string();
		self.refresh_current_frame();
		Ok(())
	}

	/// Overwrites the frame rate of every state on every atlas.
	///
	/// # Errors
	///
	/// Returns [`AnimError::InvalidFps`] for a non-positive or non-finite rate.
	pub fn set_all_fps(&mut self, fps: f64) -> Result<(), AnimError> {
		validate_fps(fps)?;
		for animation in self.animations.values_mut().flat_map(HashMap::values_mut) {
			animation.set_fps(fps)?;
		}
		Ok(())
	}

	/// Sets the frame rate of one state.
	///
	/// # Arguments
	///
	/// * `atlas` - Atlas to modify, `None` for the current one
	/// * `state` - State name
	/// * `fps` - New frame rate, effective from the next step
	///
	/// # Errors
	///
	/// Returns an error if the atlas or state is unknown or the rate is invalid.
	pub fn set_state_fps(&mut self, atlas: Option<&str>, state: &str, fps: f64) -> Result<(), AnimError> {
		validate_fps(fps)?;
		let atlas = atlas.unwrap_or(self.current_atlas.as_str()).to_string();
		let states = self.animations.get_mut(&atlas).ok_or_else(|| AnimError::UnknownAtlas(atlas.clone()))?;
		let animation = states.get_mut(state).ok_or_else(|| AnimError::state_not_found(&atlas, state))?;
		animation.set_fps(fps)
	}

	/// Pauses on frame `index` of the current state.
	///
	/// Returns `false` and changes nothing if no state is active or `index` is not a
	/// valid frame index.
	pub fn pause_at_frame(&mut self, index: usize) -> bool {
		let Some(len) = self.current_animation().map(Animation::len) else {
			return false;
		};
		if index >= len {
			debug!("Ignoring pause at frame {index}: state has {len} frames");
			return false;
		}

		self.paused = true;
		self.frame_index = index;
		self.refresh_current_frame();
		true
	}

	/// Pauses or resumes playback.
	///
	/// Resuming continues from the displayed frame: if the frame was picked with
	/// [`pause_at_frame`](Self::pause_at_frame), the tick moves to the start of it.
	pub fn set_paused(&mut self, paused: bool) {
		if self.paused && !paused && self.tick().floor() as usize != self.frame_index {
			self.base_tick = self.frame_index as f64;
			self.step_ticks = 0.0;
		}
		self.paused = paused;
	}

	/// Advances playback by one simulation step.
	///
	/// Does nothing but refresh the current frame while paused or before any state
	/// is registered.
	pub fn advance(&mut self) {
		let current = self.current_animation().map(|animation| (animation.fps(), animation.len()));

		if let Some((fps, len)) = current
			&& !self.paused
		{
			self.step_ticks += fps;
			self.frame_index = self.tick().floor() as usize;
			if self.frame_index >= len {
				trace!("State {:?} wrapped after {} frames", self.current_state, len);
				self.reset_phase();
			}
		}

		self.refresh_current_frame();
	}

	/// Returns the active atlas name.
	pub fn current_atlas(&self) -> &str {
		&self.current_atlas
	}

	/// Returns the active state name, `None` until a state is registered.
	pub fn current_state(&self) -> Option<&str> {
		self.current_state.as_deref()
	}

	/// Returns the frame rate of the active state.
	pub fn current_fps(&self) -> Option<f64> {
		self.current_animation().map(Animation::fps)
	}

	/// Returns the index of the displayed frame.
	pub fn frame_index(&self) -> usize {
		self.frame_index
	}

	/// Returns the fractional frame position.
	pub fn tick(&self) -> f64 {
		self.base_tick + self.step_ticks / self.config.steps_per_second
	}

	/// Returns true while playback is paused.
	pub fn is_paused(&self) -> bool {
		self.paused
	}

	/// Returns the configuration.
	pub fn config(&self) -> &PlayerConfig {
		&self.config
	}

	/// Returns the rectangle of the displayed frame.
	pub fn current_frame_rect(&self) -> Option<FrameRect> {
		self.current_frame
	}

	/// Returns a view of the displayed frame on the active atlas.
	pub fn current_frame(&self) -> Option<SubImage<&RgbaImage>> {
		let rect = self.current_frame?;
		let atlas = self.atlas(&self.current_atlas)?;
		Some(rect.view(atlas.image()))
	}

	/// Returns all atlases in construction order.
	pub fn atlases(&self) -> &[Atlas] {
		&self.atlases
	}

	/// Returns an atlas by name.
	pub fn atlas(&self, name: &str) -> Option<&Atlas> {
		self.atlases.iter().find(|atlas| atlas.name() == name)
	}

	/// Returns the animation registered for `state` on `atlas`.
	pub fn animation(&self, atlas: &str, state: &str) -> Option<&Animation> {
		self.animations.get(atlas)?.get(state)
	}

	/// Returns the state names of the active atlas, sorted.
	pub fn state_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self
			.animations
			.get(&self.current_atlas)
			.map(|states| states.keys().map(String::as_str).collect())
			.unwrap_or_default();
		names.sort_unstable();
		names
	}

	/// Captures the playback state as plain data.
	pub fn snapshot(&self) -> PlaybackData {
		PlaybackData {
			current_atlas: self.current_atlas.clone(),
			current_state: self.current_state.clone(),
			paused: self.paused,
			tick: self.tick(),
			frame_index: self.frame_index,
		}
	}

	/// Restores playback state captured by [`snapshot`](Self::snapshot).
	///
	/// The current frame is recomputed before returning.
	///
	/// # Errors
	///
	/// Returns an error if the atlas or state is not registered, the frame index is
	/// out of range, the tick is negative or not finite, or a playing record's frame
	/// index is not `floor(tick)`. The player is unchanged then.
	pub fn restore(&mut self, data: &PlaybackData) -> Result<(), AnimError> {
		if !self.animations.contains_key(&data.current_atlas) {
			return Err(AnimError::UnknownAtlas(data.current_atlas.clone()));
		}
		if !(data.tick.is_finite() && data.tick >= 0.0) {
			return Err(AnimError::InvalidTick(data.tick));
		}
		if let Some(state) = data.current_state.as_deref() {
			let len = self.lookup(&data.current_atlas, state)?.len();
			if data.frame_index >= len {
				return Err(AnimError::FrameIndexOutOfRange {
					state: state.to_string(),
					index: data.frame_index,
					len,
				});
			}
		}
		if !data.paused && data.tick.floor() as usize != data.frame_index {
			return Err(AnimError::PhaseMismatch {
				tick: data.tick,
				frame_index: data.frame_index,
			});
		}

		debug!(
			"Restoring playback: atlas {:?}, state {:?}, frame {}",
			data.current_atlas, data.current_state, data.frame_index
		);

		self.current_atlas = data.current_atlas.clone();
		self.current_state = data.current_state.clone();
		self.paused = data.paused;
		self.base_tick = data.tick;
		self.step_ticks = 0.0;
		self.frame_index = data.frame_index;
		self.refresh_current_frame();
		Ok(())
	}

	fn current_animation(&self) -> Option<&Animation> {
		let state = self.current_state.as_deref()?;
		self.animation(&self.current_atlas, state)
	}

	fn lookup(&self, atlas: &str, state: &str) -> Result<&Animation, AnimError> {
		self.animation(atlas, state).ok_or_else(|| AnimError::state_not_found(atlas, state))
	}

	fn reset_phase(&mut self) {
		self.base_tick = 0.0;
		self.step_ticks = 0.0;
		self.frame_index = 0;
	}

	fn refresh_current_frame(&mut self) {
		self.current_frame = self.current_animation().and_then(|animation| animation.frame(self.frame_index));
	}
}

impl fmt::Display for AnimationPlayer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.snapshot())?;
		match self.current_fps() {
			Some(fps) => write!(f, "FPS: {fps}"),
			None => write!(f, "FPS: -"),
		}
	}
}
