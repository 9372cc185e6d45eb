//! Prelude module for `sheetanim_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use sheetanim_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let atlas = Atlas::new("Default", sheetanim_internal::image::RgbaImage::new(64, 32));
//! let player = AnimationPlayer::new([atlas]).unwrap();
//! assert_eq!(player.current_atlas(), "Default");
//! ```

// Re-export everything from sheetanim_core::prelude
#[doc(inline)]
pub use sheetanim_core::prelude::*;

// Re-export the entire sheetanim_core module for advanced usage
#[doc(inline)]
pub use sheetanim_core;
