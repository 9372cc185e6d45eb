//! This module is separated into its own crate to enable simple dynamic linking for `sheetanim`, and should not be used directly.

/// `use sheetanim::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export sheetanim_core for convenience
pub use sheetanim_core;
pub use sheetanim_core::image;

// Re-export commonly used types at crate root
pub use sheetanim_core::{
	AnimError,
	player::{Animation, AnimationPlayer, PlaybackData, PlayerConfig, StateSpec},
	sheet::{Atlas, FrameRect, Layout},
};
