//! Persisting playback across player instances

use sheetanim::prelude::*;

use crate::{runner_player, step};

#[test_log::test]
fn test_snapshot_survives_json() {
	let mut player = runner_player();
	player.set_state("jump").unwrap();
	player.set_atlas("ShiftHue").unwrap();
	step(&mut player, 9);

	let json = serde_json::to_string_pretty(&player.snapshot()).unwrap();
	let data: PlaybackData = serde_json::from_str(&json).unwrap();
	assert_eq!(data.tick, 2.25);
	assert_eq!(data.frame_index, 2);

	// A fresh process would rebuild the player, then restore
	let mut restored = runner_player();
	restored.restore(&data).unwrap();

	assert_eq!(restored.current_atlas(), "ShiftHue");
	assert_eq!(restored.current_state(), Some("jump"));
	assert_eq!(restored.current_frame_rect(), player.current_frame_rect());

	step(&mut player, 3);
	step(&mut restored, 3);
	assert_eq!(restored.snapshot(), player.snapshot());
	assert_eq!(restored.frame_index(), 3);
}

#[test_log::test]
fn test_paused_snapshot() {
	let mut player = runner_player();
	assert!(player.pause_at_frame(4));

	let data = player.snapshot();
	assert!(data.paused);
	assert_eq!(data.frame_index, 4);
	assert_eq!(data.tick, 0.0);

	let mut restored = runner_player();
	restored.restore(&data).unwrap();
	step(&mut restored, 30);
	assert_eq!(restored.frame_index(), 4);
	assert!(restored.is_paused());
}

#[test_log::test]
fn test_restore_before_states_registered() {
	let mut player = runner_player();
	step(&mut player, 12);
	let data = player.snapshot();

	let mut empty = AnimationPlayer::new([Atlas::new(
		"Default",
		sheetanim::image::RgbaImage::new(8, 8),
	)])
	.unwrap();
	assert!(matches!(empty.restore(&data), Err(AnimError::StateNotFound { .. })));
	assert_eq!(empty.current_state(), None);
}
