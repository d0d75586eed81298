//! Benchmark suite for glyph compositing
//!
//! This benchmark measures the resolve → measure → composite pipeline on a
//! synthetic worst-case atlas (fully inked cells) and helps identify hot
//! paths in the compositor.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glyphput_benches::{generate_test_atlas, test_charmap};
use glyphput_render::{BitmapFont, FrameBuffer};
use std::hint::black_box;

/// Benchmark single-glyph draws across representative codes
fn bench_draw_char(c: &mut Criterion) {
	let atlas = generate_test_atlas();
	let mut group = c.benchmark_group("draw_char");

	for code in [0x0021u32, 0x0041, 0x007A] {
		let mut font =
			BitmapFont::with_charmap(&atlas, test_charmap(), FrameBuffer::new(640, 480))
				.expect("synthetic atlas is usable");

		group.bench_with_input(BenchmarkId::from_parameter(format!("{code:#06X}")), &code, |b, &code| {
			b.iter(|| black_box(font.draw_sjis_char(black_box(16), black_box(16), code)));
		});
	}

	group.finish();
}

/// Benchmark full-line string draws, blanks included
fn bench_draw_string(c: &mut Criterion) {
	let atlas = generate_test_atlas();
	let mut group = c.benchmark_group("draw_string");

	let lines = [
		("short", "Hello"),
		("spaced", "Hello World Hello World"),
		("full", "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"),
	];

	for (name, line) in lines {
		let mut font =
			BitmapFont::with_charmap(&atlas, test_charmap(), FrameBuffer::new(1280, 64))
				.expect("synthetic atlas is usable");

		group.bench_with_input(BenchmarkId::from_parameter(name), &line, |b, line| {
			b.iter(|| font.draw_string(black_box(0), black_box(8), black_box(line)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_draw_char, bench_draw_string);
criterion_main!(benches);
