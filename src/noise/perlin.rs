use cgmath::{Point2, Vector2};
use noise::Permutations;

include!(concat!(env!("OUT_DIR"), "/grad_table.rs"));

fn fade(t: f64) -> f64 {
	t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Preforms linear interpolation between A and B using T as a factor. 0.0 = A, 1.0 = B, 0.5 = (A + B)/2.
fn lerp(t: f64, a: f64, b: f64) -> f64 {
	a + t * (b - a)
}

/// Returns the dot product of the vector with a pseudorandomly selected gradient direction.
/// The low 4 bits of the hash pick one of 16 equally spaced angles, theta = (hash & 15) * pi/8.
fn grad(hash: u8, offset: Vector2<f64>) -> f64 {
	let (cos, sin) = GRAD_TABLE[(hash & 0xF) as usize];

	cos * offset.x + sin * offset.y
}

/// Single octave lattice noise over a seeded permutation table. Output is
/// remapped from its natural ~[-1, 1] range into [0, 1].
#[derive(Debug)]
pub struct Perlin {
	permutations: Permutations
}

impl Perlin {
	pub fn new(permutations: Permutations) -> Self {
		Perlin { permutations }
	}

	pub fn sample(&self, point: Point2<f64>, grid_size: u32) -> f64 {
		let scaled = Vector2::new(point.x / (grid_size as f64), point.y / (grid_size as f64));
		let floored = Vector2::new(scaled.x.floor(), scaled.y.floor());

		let grid_x = floored.x as i64;
		let grid_y = floored.y as i64;

		// Position of the point within its cell, in [0, 1).
		let local = scaled - floored;

		let u = fade(local.x);
		let v = fade(local.y);

		let row = (grid_y & 0xFF) as usize;

		let a = self.permutations.hash(grid_x) + row;
		let b = self.permutations.hash(grid_x.wrapping_add(1)) + row;

		let top = lerp(u,
			grad(self.permutations.entry(a), local),
			grad(self.permutations.entry(b), local - Vector2::new(1.0, 0.0))
		);

		let bottom = lerp(u,
			grad(self.permutations.entry(a + 1), local - Vector2::new(0.0, 1.0)),
			grad(self.permutations.entry(b + 1), local - Vector2::new(1.0, 1.0))
		);

		lerp(v, top, bottom) * 0.5 + 0.5
	}
}
