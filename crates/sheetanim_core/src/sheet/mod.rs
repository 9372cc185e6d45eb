//! Sprite-sheet slicing.
//!
//! This module turns a sprite sheet into frame sequences:
//! - [`Atlas`]: a named, shareable sprite sheet
//! - [`FrameRect`]: one frame's rectangle on the sheet
//! - [`slice_frames`]: cuts a run of equally sized frames along a [`Layout`]
//! - [`ping_pong`]: mirrors a sequence so it plays back and forth
//!
//! # Sheet Layout
//!
//! Frames of one state form a contiguous run. Starting from the first frame's
//! rectangle, each following frame is found by stepping one frame width to the
//! right ([`Layout::Horizontal`]) or one frame height down ([`Layout::Vertical`]):
//!
//! ```text
//! Horizontal, origin (0, 32), 32x32, 4 frames
//!
//!   x:  0     32    64    96    128
//!       +-----+-----+-----+-----+
//!  32   |  0  |  1  |  2  |  3  |
//!       +-----+-----+-----+-----+
//! ```
//!
//! # Ping-Pong Expansion
//!
//! ```text
//! [0 1 2 3]  ->  [0 1 2 3 2 1]     (length 2N - 2)
//! ```
//!
//! # Example
//!
//! ```
//! use image::RgbaImage;
//! use sheetanim_core::sheet::{FrameRect, Layout, ping_pong, slice_frames, views};
//!
//! # fn main() -> Result<(), sheetanim_core::AnimError> {
//! let sheet = RgbaImage::new(128, 96);
//! let frames = slice_frames(&sheet, FrameRect::new(0, 32, 32, 32), 4, Layout::Horizontal)?;
//! let frames = ping_pong(frames);
//!
//! assert_eq!(frames.len(), 6);
//! assert_eq!(frames[1], frames[5]);
//!
//! for view in views(&sheet, &frames) {
//!     assert_eq!(image::GenericImageView::dimensions(&*view), (32, 32));
//! }
//! # Ok(())
//! # }
//! ```

pub mod atlas;
pub mod frame;

pub use self::atlas::Atlas;
pub use self::frame::{FrameRect, Layout, ping_pong, slice_frames, views};
