//! Benchmark suite for animation playback
//!
//! Measures the per-step cost of advancing a player and the one-off cost of
//! slicing and registering states.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sheetanim_benches::{generate_player, generate_sheet, row_states, sizes};
use sheetanim_core::prelude::*;
use std::hint::black_box;

/// Benchmark a single simulation step
fn bench_advance(c: &mut Criterion) {
	let mut group = c.benchmark_group("advance");

	for (name, (frame, columns, rows)) in [("character", sizes::CHARACTER), ("large", sizes::LARGE)] {
		let mut player = generate_player(frame, columns, rows, 2);
		group.bench_function(name, |b| {
			b.iter(|| {
				player.advance();
				black_box(player.current_frame_rect())
			});
		});
	}

	// One second of playback at the default step rate
	let (frame, columns, rows) = sizes::CHARACTER;
	let mut player = generate_player(frame, columns, rows, 1);
	group.throughput(Throughput::Elements(60));
	group.bench_function("one_second", |b| {
		b.iter(|| {
			for _ in 0..60 {
				player.advance();
			}
			black_box(player.frame_index())
		});
	});

	group.finish();
}

/// Benchmark switching states and atlases every step, as a host reacting to input would
fn bench_switching(c: &mut Criterion) {
	let mut group = c.benchmark_group("switching");

	let (frame, columns, rows) = sizes::MEDIUM;
	let mut player = generate_player(frame, columns, rows, 2);
	let states: Vec<String> = player.state_names().iter().map(ToString::to_string).collect();

	group.bench_function("set_state_held", |b| {
		b.iter(|| {
			player.set_state(black_box("row3")).ok();
			player.advance();
		});
	});

	let mut next = 0;
	group.bench_function("set_state_cycle", |b| {
		b.iter(|| {
			next = (next + 1) % states.len();
			player.set_state(black_box(&states[next])).ok();
			player.advance();
		});
	});

	let atlases = ["atlas0", "atlas1"];
	group.bench_function("set_atlas", |b| {
		b.iter(|| {
			next = (next + 1) % atlases.len();
			player.set_atlas(black_box(atlases[next])).ok();
		});
	});

	group.finish();
}

/// Benchmark frame slicing and state registration
fn bench_registration(c: &mut Criterion) {
	let mut group = c.benchmark_group("registration");

	for (name, (frame, columns, rows)) in [("medium", sizes::MEDIUM), ("large", sizes::LARGE)] {
		let sheet = generate_sheet(frame, columns, rows);
		let origin = FrameRect::new(0, 0, frame, frame);

		group.throughput(Throughput::Elements(u64::from(columns)));
		group.bench_with_input(BenchmarkId::new("slice_frames", name), &sheet, |b, sheet| {
			b.iter(|| {
				let frames = slice_frames(sheet, black_box(origin), columns as usize, Layout::Horizontal);
				black_box(frames)
			});
		});

		let specs = row_states(frame, columns, rows);
		group.throughput(Throughput::Elements(u64::from(rows)));
		group.bench_with_input(BenchmarkId::new("register_all", name), &specs, |b, specs| {
			b.iter(|| {
				let mut player =
					AnimationPlayer::new([Atlas::new("Default", sheet.clone())]).ok()?;
				for spec in specs {
					player.register_state(spec).ok()?;
				}
				Some(black_box(player))
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_advance, bench_switching, bench_registration);

criterion_main!(benches);
