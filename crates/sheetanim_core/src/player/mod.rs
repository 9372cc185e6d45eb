//! Animation playback.
//!
//! This module provides the [`AnimationPlayer`], which owns a set of atlases and
//! a table of named animation states per atlas, and advances a playback cursor
//! once per fixed simulation step.
//!
//! # Data Flow
//!
//! ```text
//! atlases ──> AnimationPlayer::new
//! StateSpec ─> register_state ─> slice_frames (every atlas) ─> Animation
//! host loop ─> advance() ─> tick += fps / steps_per_second
//!                           frame_index = floor(tick), wraps to 0
//! renderer <─ current_frame() (view on the active atlas)
//! ```
//!
//! # State Switching
//!
//! | Operation                | Tick / frame index         | Paused flag |
//! | ------------------------ | -------------------------- | ----------- |
//! | `register_state`         | reset to 0                 | unchanged   |
//! | `set_state` (new state)  | reset to 0                 | unchanged   |
//! | `set_state` (same state) | unchanged                  | unchanged   |
//! | `set_state_keep_phase`   | unchanged (wraps if long)  | unchanged   |
//! | `set_atlas`              | unchanged                  | unchanged   |
//! | `pause_at_frame(i)`      | index = i, if valid        | set         |
//! | `set_paused(false)`      | tick aligned to index      | cleared     |
//!
//! # Persisting Playback
//!
//! ```
//! use image::RgbaImage;
//! use sheetanim_core::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let atlases = || [Atlas::new("Default", RgbaImage::new(128, 32))];
//! let run = StateSpec::new("run", FrameRect::new(0, 0, 32, 32), 4, 15.0);
//!
//! let mut player = AnimationPlayer::new(atlases())?;
//! player.register_state(&run)?;
//! for _ in 0..6 {
//!     player.advance();
//! }
//! let json = serde_json::to_string(&player.snapshot())?;
//!
//! let mut restored = AnimationPlayer::new(atlases())?;
//! restored.register_state(&run)?;
//! restored.restore(&serde_json::from_str(&json)?)?;
//! assert_eq!(restored.frame_index(), 1);
//! assert_eq!(restored.tick(), 1.5);
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod animation_player;
pub mod config;
pub mod playback;

pub use self::animation::{Animation, StateSpec};
pub use self::animation_player::AnimationPlayer;
pub use self::config::{DEFAULT_STEPS_PER_SECOND, PlayerConfig};
pub use self::playback::PlaybackData;
