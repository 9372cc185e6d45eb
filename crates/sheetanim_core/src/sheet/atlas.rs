//! Named sprite sheets.

use std::{fmt, sync::Arc};

use image::RgbaImage;

/// A named sprite sheet usable as a pixel source for an animation player.
///
/// Several atlases may share the same frame geometry while differing in pixel
/// content, such as a recolored variant of a character. The image sits behind an
/// [`Arc`] so read-only sheets can be shared between players without copying.
#[derive(Debug, Clone)]
pub struct Atlas {
	name: String,
	image: Arc<RgbaImage>,
}

impl Atlas {
	/// Creates a new atlas.
	///
	/// # Arguments
	///
	/// * `name` - Unique key used to select the atlas
	/// * `image` - Sprite sheet, owned or already shared
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use image::RgbaImage;
	/// use sheetanim_core::sheet::Atlas;
	///
	/// let sheet = Arc::new(RgbaImage::new(64, 32));
	/// let default = Atlas::new("Default", Arc::clone(&sheet));
	/// let shared = Atlas::new("Shared", sheet);
	///
	/// assert_eq!(default.dimensions(), shared.dimensions());
	/// ```
	pub fn new(name: impl Into<String>, image: impl Into<Arc<RgbaImage>>) -> Self {
		Self {
			name: name.into(),
			image: image.into(),
		}
	}

	/// Returns the atlas name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the sprite sheet.
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Returns a shared handle to the sprite sheet.
	pub fn shared_image(&self) -> Arc<RgbaImage> {
		Arc::clone(&self.image)
	}

	/// Returns the sheet size as `(width, height)`.
	pub fn dimensions(&self) -> (u32, u32) {
		self.image.dimensions()
	}
}

impl fmt::Display for Atlas {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (width, height) = self.dimensions();
		write!(f, "Atlas({:?}, {}x{})", self.name, width, height)
	}
}
