//! Frame geometry and frame-sequence construction.
//!
//! A frame sequence is an ordered list of [`FrameRect`] values cut from a sprite
//! sheet. Rectangles are plain geometry: they are turned into pixel views with
//! [`FrameRect::view`] or [`views`] against whichever sheet is active, so the
//! same sequence can address every atlas that shares the layout.

use std::fmt;

use image::{GenericImageView, SubImage};
use serde::{Deserialize, Serialize};

use crate::error::AnimError;

/// Direction in which successive frames are laid out on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
	/// Frames advance left to right by the frame width
	#[default]
	Horizontal,
	/// Frames advance top to bottom by the frame height
	Vertical,
}

impl Layout {
	/// Returns the layout for the `vertical` flag used by state tables.
	pub fn from_vertical(vertical: bool) -> Self {
		if vertical {
			Self::Vertical
		} else {
			Self::Horizontal
		}
	}
}

impl fmt::Display for Layout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Horizontal => write!(f, "Horizontal"),
			Self::Vertical => write!(f, "Vertical"),
		}
	}
}

/// Sub-rectangle of a sprite sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameRect {
	/// Left edge
	pub x: u32,
	/// Top edge
	pub y: u32,
	/// Width
	pub width: u32,
	/// Height
	pub height: u32,
}

impl FrameRect {
	/// Creates a new frame rectangle.
	pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Returns the rectangle `n` frames further along `layout`.
	///
	/// Returns `None` if the resulting position does not fit in a `u32`.
	pub fn offset(&self, layout: Layout, n: usize) -> Option<Self> {
		let n = u32::try_from(n).ok()?;
		let rect = match layout {
			Layout::Horizontal => Self {
				x: n.checked_mul(self.width)?.checked_add(self.x)?,
				..*self
			},
			Layout::Vertical => Self {
				y: n.checked_mul(self.height)?.checked_add(self.y)?,
				..*self
			},
		};
		Some(rect)
	}

	/// Returns true if the rectangle lies entirely inside a `width`x`height` sheet.
	pub fn fits_within(&self, width: u32, height: u32) -> bool {
		u64::from(self.x) + u64::from(self.width) <= u64::from(width)
			&& u64::from(self.y) + u64::from(self.height) <= u64::from(height)
	}

	/// Returns true if the rectangle has no area.
	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns a view of this rectangle on `sheet`.
	///
	/// # Panics
	///
	/// Panics if the rectangle does not fit within the sheet. Rectangles produced
	/// by [`slice_frames`] for the same sheet always fit.
	pub fn view<'a, I: GenericImageView>(&self, sheet: &'a I) -> SubImage<&'a I> {
		sheet.view(self.x, self.y, self.width, self.height)
	}
}

impl fmt::Display for FrameRect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
	}
}

/// Slices `count` frames from `sheet`, starting at `origin` and stepping along `layout`.
///
/// # Arguments
///
/// * `sheet` - Sprite sheet the frames must fit in
/// * `origin` - Rectangle of the first frame
/// * `count` - Number of frames to emit
/// * `layout` - Direction of travel between successive frames
///
/// # Errors
///
/// Returns an error if:
/// - `count` is zero
/// - `origin` has zero width or height
/// - any frame falls outside the sheet (the error names the first one)
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use sheetanim_core::sheet::{FrameRect, Layout, slice_frames};
///
/// let sheet = RgbaImage::new(128, 32);
/// let frames = slice_frames(&sheet, FrameRect::new(0, 0, 32, 32), 4, Layout::Horizontal)?;
///
/// assert_eq!(frames.len(), 4);
/// assert_eq!(frames[3], FrameRect::new(96, 0, 32, 32));
/// # Ok::<(), sheetanim_core::AnimError>(())
/// ```
pub fn slice_frames<I: GenericImageView>(
	sheet: &I,
	origin: FrameRect,
	count: usize,
	layout: Layout,
) -> Result<Vec<FrameRect>, AnimError> {
	if count == 0 {
		return Err(AnimError::ZeroFrameCount);
	}
	if origin.is_empty() {
		return Err(AnimError::InvalidFrameSize {
			width: origin.width,
			height: origin.height,
		});
	}

	let (sheet_width, sheet_height) = sheet.dimensions();
	let out_of_bounds = |index| AnimError::FrameOutOfBounds {
		index,
		origin,
		sheet_width,
		sheet_height,
	};

	let mut frames = Vec::with_capacity(count);
	for index in 0..count {
		let rect = origin.offset(layout, index).ok_or_else(|| out_of_bounds(index))?;
		if !rect.fits_within(sheet_width, sheet_height) {
			return Err(out_of_bounds(index));
		}
		frames.push(rect);
	}

	Ok(frames)
}

/// Creates a view on `sheet` for every rectangle in `frames`.
///
/// # Panics
///
/// Panics if a rectangle does not fit within the sheet.
pub fn views<'a, I: GenericImageView>(sheet: &'a I, frames: &[FrameRect]) -> Vec<SubImage<&'a I>> {
	frames.iter().map(|rect| rect.view(sheet)).collect()
}

/// Appends the interior of `frames` in reverse so the sequence plays back and forth.
///
/// `[0 1 2 3]` becomes `[0 1 2 3 2 1]`. Sequences shorter than three elements gain
/// nothing, so lengths 0, 1 and 2 come back unchanged.
///
/// Not idempotent: expanding an already expanded sequence mirrors it again.
///
/// # Examples
///
/// ```
/// use sheetanim_core::sheet::ping_pong;
///
/// assert_eq!(ping_pong(vec![0, 1, 2, 3]), vec![0, 1, 2, 3, 2, 1]);
/// assert_eq!(ping_pong(vec![7]), vec![7]);
/// ```
pub fn ping_pong<T: Clone>(mut frames: Vec<T>) -> Vec<T> {
	let len = frames.len();
	if len > 2 {
		frames.reserve(len - 2);
		for i in (1..len - 1).rev() {
			let frame = frames[i].clone();
			frames.push(frame);
		}
	}
	frames
}
