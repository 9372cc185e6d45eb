//! Switching between atlases that share frame geometry

use std::sync::Arc;

use sheetanim::image::{GenericImageView, Rgba};
use sheetanim::prelude::*;

use crate::{recolor, runner_player, runner_sheet, runner_states, step};

#[test_log::test]
fn test_atlas_switch_mid_animation() {
	let mut player = runner_player();
	player.set_state("run").unwrap();
	step(&mut player, 15);

	let tick = player.tick();
	let rect = player.current_frame_rect();
	assert_eq!(player.current_frame().unwrap().get_pixel(0, 0), Rgba([30, 40, 60, 255]));

	player.set_atlas("ShiftHue").unwrap();
	assert_eq!(player.tick(), tick);
	assert_eq!(player.frame_index(), 3);
	assert_eq!(player.current_frame_rect(), rect);
	assert_eq!(player.current_frame().unwrap().get_pixel(0, 0), Rgba([60, 30, 40, 255]));

	// playback carries on in the new atlas
	step(&mut player, 5);
	assert_eq!(player.frame_index(), 4);
	assert_eq!(player.current_atlas(), "ShiftHue");
}

#[test_log::test]
fn test_shared_sheet_between_players() {
	let sheet = Arc::new(runner_sheet());
	let shifted = Arc::new(recolor(&sheet));

	let mut first = AnimationPlayer::new([
		Atlas::new("Default", Arc::clone(&sheet)),
		Atlas::new("ShiftHue", Arc::clone(&shifted)),
	])
	.unwrap();
	let mut second = AnimationPlayer::new([
		Atlas::new("ShiftHue", Arc::clone(&shifted)),
		Atlas::new("Default", Arc::clone(&sheet)),
	])
	.unwrap();
	for spec in runner_states() {
		first.register_state(&spec).unwrap();
		second.register_state(&spec).unwrap();
	}

	assert_eq!(Arc::strong_count(&sheet), 3);
	assert_eq!(first.current_atlas(), "Default");
	assert_eq!(second.current_atlas(), "ShiftHue");

	// Players are independent
	step(&mut first, 4);
	assert_eq!(first.frame_index(), 1);
	assert_eq!(second.frame_index(), 0);
}

#[test_log::test]
fn test_atlas_missing_state_is_rejected() {
	let mut player = runner_player();
	let crouch = Animation::new("crouch", vec![FrameRect::new(0, 0, 32, 32)], 1.0).unwrap();
	player.add_animation("Default", crouch).unwrap();
	player.set_state("crouch").unwrap();

	assert!(matches!(player.set_atlas("ShiftHue"), Err(AnimError::StateNotFound { .. })));
	assert_eq!(player.current_atlas(), "Default");
}
