//! Prelude module for `sheetanim_core`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```
//! use sheetanim_core::prelude::*;
//!
//! let config = PlayerConfig::default();
//! let spec = StateSpec::new("idle", FrameRect::new(0, 0, 32, 32), 5, 5.0);
//! assert_eq!(ping_pong(vec![0, 1, 2]), vec![0, 1, 2, 1]);
//! ```

#[doc(inline)]
pub use crate::AnimError;

#[doc(inline)]
pub use crate::sheet::{Atlas, FrameRect, Layout, ping_pong, slice_frames, views};

#[doc(inline)]
pub use crate::player::{
	Animation, AnimationPlayer, DEFAULT_STEPS_PER_SECOND, PlaybackData, PlayerConfig, StateSpec,
};
