#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `sheetanim` plays sprite-sheet animations for 2D real-time rendering.
//!
//! Give it one or more sprite sheets ("atlases") and a set of named states, call
//! [`AnimationPlayer::advance`] once per simulation step, and draw
//! [`AnimationPlayer::current_frame`].
//!
//! ```
//! use sheetanim::prelude::*;
//! use sheetanim::image::RgbaImage;
//!
//! # fn main() -> Result<(), AnimError> {
//! let mut player = AnimationPlayer::new([Atlas::new("Default", RgbaImage::new(160, 32))])?;
//! player.register_state(&StateSpec::new("idle", FrameRect::new(0, 0, 32, 32), 5, 5.0))?;
//!
//! for _ in 0..60 {
//!     player.advance();
//! }
//! assert_eq!(player.frame_index(), 0);
//! # Ok(())
//! # }
//! ```
pub use sheetanim_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use sheetanim_dylib;
