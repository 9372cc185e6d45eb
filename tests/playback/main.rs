//! Integration tests for `sheetanim` playback

mod atlases;
mod persistence;
mod scenario;

use sheetanim::image::{Rgba, RgbaImage};
use sheetanim::prelude::*;

/// Frame edge length of the runner sheet
pub(crate) const FRAME: u32 = 32;

/// Builds the runner sheet: idle (5 frames), run (8 frames) and jump (4 frames) rows.
///
/// Frame pixels encode their column in red and their row in green.
pub(crate) fn runner_sheet() -> RgbaImage {
	RgbaImage::from_fn(FRAME * 8, FRAME * 3, |x, y| {
		Rgba([(x / FRAME) as u8 * 10, (y / FRAME) as u8 * 40, 60, 255])
	})
}

/// Swaps the color channels, standing in for a palette-shifted variant.
pub(crate) fn recolor(sheet: &RgbaImage) -> RgbaImage {
	let mut out = sheet.clone();
	for pixel in out.pixels_mut() {
		let Rgba([r, g, b, a]) = *pixel;
		*pixel = Rgba([b, r, g, a]);
	}
	out
}

pub(crate) fn runner_states() -> Vec<StateSpec> {
	vec![
		StateSpec::new("idle", FrameRect::new(0, 0, FRAME, FRAME), 5, 5.0),
		StateSpec::new("run", FrameRect::new(0, FRAME, FRAME, FRAME), 8, 12.0),
		StateSpec::new("jump", FrameRect::new(0, FRAME * 2, FRAME, FRAME), 4, 15.0),
	]
}

pub(crate) fn runner_player() -> AnimationPlayer {
	let sheet = runner_sheet();
	let shifted = recolor(&sheet);
	let mut player =
		AnimationPlayer::new([Atlas::new("Default", sheet), Atlas::new("ShiftHue", shifted)]).unwrap();
	for spec in runner_states() {
		player.register_state(&spec).unwrap();
	}
	player.set_state("idle").unwrap();
	player
}

pub(crate) fn step(player: &mut AnimationPlayer, steps: usize) {
	for _ in 0..steps {
		player.advance();
	}
}
