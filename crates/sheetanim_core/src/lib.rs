//! This crate provides the sprite-sheet animation engine for the `sheetanim` project.
//!
//! # Modules
//!
//! - **`sheet`**: Atlases, frame rectangles, frame slicing and ping-pong expansion
//! - **`player`**: The animation player, its configuration and playback snapshots
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use image::RgbaImage;
//! use sheetanim_core::prelude::*;
//!
//! # fn main() -> Result<(), AnimError> {
//! let sheet = RgbaImage::new(256, 96);
//! let recolored = RgbaImage::new(256, 96);
//!
//! let mut player = AnimationPlayer::new([
//!     Atlas::new("Default", sheet),
//!     Atlas::new("ShiftHue", recolored),
//! ])?;
//! player.register_state(&StateSpec::new("idle", FrameRect::new(0, 0, 32, 32), 5, 5.0))?;
//! player.register_state(&StateSpec::new("run", FrameRect::new(0, 32, 32, 32), 8, 12.0))?;
//! player.set_state("idle")?;
//!
//! // once per simulation step
//! player.advance();
//! let frame = player.current_frame();
//! assert!(frame.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use sheetanim_core::sheet::{FrameRect, Layout, slice_frames};
//!
//! let sheet = image::RgbaImage::new(32, 128);
//! let frames = slice_frames(&sheet, FrameRect::new(0, 0, 32, 32), 4, Layout::Vertical);
//! assert!(frames.is_ok());
//! ```

mod error;

pub mod player;
pub mod sheet;

/// `use sheetanim_core::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::AnimError;

// Re-export the image crate so hosts build sheets with a matching version
pub use image;
