//! Host-loop scenarios: a character reacting to input every step

use sheetanim::image::{GenericImageView, Rgba};
use sheetanim::prelude::*;

use crate::{FRAME, runner_player, step};

#[derive(Clone, Copy)]
enum Input {
	None,
	Right,
	Jump,
}

/// Mirrors a typical update function: pick the state from input, then advance.
fn update(player: &mut AnimationPlayer, input: Input) {
	let state = match input {
		Input::Jump => "jump",
		Input::Right => "run",
		Input::None => "idle",
	};
	player.set_state(state).unwrap();
	player.advance();
}

#[test_log::test]
fn test_holding_input_does_not_restart_animation() {
	let mut player = runner_player();

	for _ in 0..10 {
		update(&mut player, Input::Right);
	}
	assert_eq!(player.current_state(), Some("run"));
	assert_eq!(player.tick(), 2.0);
	assert_eq!(player.frame_index(), 2);

	// Releasing the key starts idle from its first frame
	update(&mut player, Input::None);
	assert_eq!(player.current_state(), Some("idle"));
	assert_eq!(player.frame_index(), 0);

	for _ in 0..4 {
		update(&mut player, Input::Jump);
	}
	assert_eq!(player.frame_index(), 1);
}

#[test_log::test]
fn test_idle_cycle_end_to_end() {
	let mut player = runner_player();

	step(&mut player, 12);
	assert_eq!(player.tick(), 1.0);
	assert_eq!(player.frame_index(), 1);

	let frame = player.current_frame().unwrap();
	assert_eq!(frame.dimensions(), (FRAME, FRAME));
	assert_eq!(frame.get_pixel(5, 5), Rgba([10, 0, 60, 255]));

	step(&mut player, 48);
	assert_eq!(player.tick(), 0.0);
	assert_eq!(player.frame_index(), 0);
	assert_eq!(player.current_frame().unwrap().get_pixel(0, 0), Rgba([0, 0, 60, 255]));
}

#[test_log::test]
fn test_pause_resume_cycle() {
	let mut player = runner_player();
	player.set_state("run").unwrap();

	assert!(!player.pause_at_frame(8));
	assert!(player.pause_at_frame(7));
	step(&mut player, 20);
	assert_eq!(player.frame_index(), 7);

	player.set_paused(false);
	step(&mut player, 5);
	// 12 fps at 60 steps: one frame every 5 steps, wrapping after the last frame
	assert_eq!(player.frame_index(), 0);
	assert_eq!(player.tick(), 0.0);
}

#[test_log::test]
fn test_display_reports_playback() {
	let mut player = runner_player();
	player.set_state("jump").unwrap();
	step(&mut player, 6);

	let text = player.to_string();
	assert!(text.contains("Current State: jump"));
	assert!(text.contains("Tick: 1.5"));
	assert!(text.ends_with("FPS: 15"));
}
