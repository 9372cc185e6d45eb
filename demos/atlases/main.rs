//! Atlas switching demo.
//!
//! Builds a procedural runner sheet plus a recolored copy of it, registers the
//! idle, run and jump states on both, then drives the player through a scripted
//! sequence of state and atlas switches while logging what would be drawn.
//!
//! The player configuration and state table can be loaded from a TOML file and
//! overridden through `SHEETANIM_*` environment variables, e.g.
//! `SHEETANIM_PLAYER__STEPS_PER_SECOND=30`.

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Deserialize;

use sheetanim::image::{GenericImageView, Rgba, RgbaImage};
use sheetanim::prelude::*;

const FRAME: u32 = 32;

#[derive(Parser)]
#[command(name = "atlases")]
#[command(version)]
#[command(about = "Play a sprite-sheet animation across two atlases", long_about = None)]
struct Cli {
	/// Number of simulation steps to run
	#[arg(short = 'n', long, value_name = "COUNT", default_value_t = 240)]
	steps: usize,

	/// TOML file with `[player]` settings and a `[[states]]` table
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Override the simulation steps per second
	#[arg(long, value_name = "RATE")]
	steps_per_second: Option<f64>,

	/// Write the final playback state as JSON
	#[arg(short, long, value_name = "FILE")]
	snapshot: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(default)]
struct DemoConfig {
	player: PlayerConfig,
	states: Vec<StateSpec>,
}

impl Default for DemoConfig {
	fn default() -> Self {
		Self {
			player: PlayerConfig::default(),
			states: vec![
				StateSpec::new("idle", FrameRect::new(0, 0, FRAME, FRAME), 5, 5.0),
				StateSpec::new("run", FrameRect::new(0, FRAME, FRAME, FRAME), 8, 12.0),
				StateSpec::new("jump", FrameRect::new(0, FRAME * 2, FRAME, FRAME), 4, 15.0),
			],
		}
	}
}

/// Scripted host input, applied at the given step
enum Action {
	State(&'static str),
	Atlas(&'static str),
	PauseAt(usize),
	Resume,
}

const SCRIPT: &[(usize, Action)] = &[
	(60, Action::State("run")),
	(100, Action::Atlas("ShiftHue")),
	(140, Action::State("jump")),
	(170, Action::PauseAt(2)),
	(200, Action::Resume),
	(220, Action::Atlas("Default")),
];

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let mut config = load_config(cli.config.as_deref())?;
	if let Some(rate) = cli.steps_per_second {
		config.player.steps_per_second = rate;
	}
	config.player.validate().context("invalid player configuration")?;

	info!("=== Sprite-sheet atlas demo ===");

	let sheet = runner_sheet();
	let shifted = rotate_channels(&sheet);
	let mut player = AnimationPlayer::with_config(
		config.player,
		[Atlas::new("Default", sheet), Atlas::new("ShiftHue", shifted)],
	)?;

	for spec in &config.states {
		player
			.register_state(spec)
			.with_context(|| format!("failed to register state {:?}", spec.name))?;
	}
	if player.state_names().contains(&"idle") {
		player.set_state("idle")?;
	}
	info!("States: {}", player.state_names().join(", "));
	info!("Step duration: {:.4}s", player.config().step_duration());

	let report_every = (player.config().steps_per_second / 4.0).max(1.0) as usize;
	for step in 0..cli.steps {
		for (_, action) in SCRIPT.iter().filter(|(at, _)| *at == step) {
			apply(&mut player, action)?;
		}

		player.advance();

		if step % report_every == 0 {
			report(step, &player);
		}
	}

	info!("\n{player}");

	if let Some(path) = &cli.snapshot {
		let json = serde_json::to_string_pretty(&player.snapshot())?;
		fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
		info!("✓ Snapshot written to {}", path.display());
	}

	Ok(())
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
	let mut builder = config::Config::builder();
	if let Some(path) = path {
		builder = builder.add_source(config::File::from(path));
	}
	builder = builder.add_source(
		config::Environment::with_prefix("SHEETANIM").prefix_separator("_").separator("__"),
	);

	let settings = builder.build().context("failed to load configuration")?;
	settings.try_deserialize().context("failed to parse configuration")
}

fn apply(player: &mut AnimationPlayer, action: &Action) -> Result<()> {
	match action {
		Action::State(state) => {
			info!("-> state {state}");
			player.set_state(state)?;
		}
		Action::Atlas(atlas) => {
			info!("-> atlas {atlas}");
			player.set_atlas(atlas)?;
		}
		Action::PauseAt(index) => {
			if player.pause_at_frame(*index) {
				info!("-> paused at frame {index}");
			} else {
				info!("-> frame {index} out of range, not pausing");
			}
		}
		Action::Resume => {
			info!("-> resume");
			player.set_paused(false);
		}
	}
	Ok(())
}

fn report(step: usize, player: &AnimationPlayer) {
	let Some(frame) = player.current_frame() else {
		info!("step {step:4}: no state");
		return;
	};
	let Rgba([r, g, b, _]) = frame.get_pixel(FRAME / 2, FRAME / 2);
	info!(
		"step {step:4}: {:8} {:5} frame {} tick {:5.2} paused {} centre #{r:02x}{g:02x}{b:02x}",
		player.current_atlas(),
		player.current_state().unwrap_or("-"),
		player.frame_index(),
		player.tick(),
		player.is_paused(),
	);
}

/// Draws an 8x3 grid of frames, each a filled disc whose position follows the column.
fn runner_sheet() -> RgbaImage {
	RgbaImage::from_fn(FRAME * 8, FRAME * 3, |x, y| {
		let (col, row) = (x / FRAME, y / FRAME);
		let (fx, fy) = ((x % FRAME) as i32, (y % FRAME) as i32);
		let cx = 8 + col as i32 * 2;
		let cy = 16 - row as i32 * 3;
		if (fx - cx).pow(2) + (fy - cy).pow(2) <= 36 {
			Rgba([220, 40 + row as u8 * 60, 40 + col as u8 * 25, 255])
		} else {
			Rgba([0, 0, 0, 0])
		}
	})
}

/// Rotates the RGB channels, producing a hue-shifted copy.
fn rotate_channels(sheet: &RgbaImage) -> RgbaImage {
	let mut out = sheet.clone();
	for pixel in out.pixels_mut() {
		let Rgba([r, g, b, a]) = *pixel;
		*pixel = Rgba([b, r, g, a]);
	}
	out
}
