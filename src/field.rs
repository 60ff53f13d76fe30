use cgmath::Point2;
use noise::Permutations;
use noise::perlin::Perlin;
use noise::fractal::{self, Shaping};
use rng::JavaRng;
use sample::Sample;
use error::Error;

pub const DEFAULT_GRID_SIZE: u32 = 16;

/// A seeded 2D coherent noise field. The permutation table is built once at
/// construction and never mutated, so a field can be shared for concurrent
/// read-only evaluation without locking. Reseeding means constructing a new
/// field.
#[derive(Debug)]
pub struct NoiseField {
	perlin: Perlin,
	grid_size: u32
}

impl NoiseField {
	pub fn new(seed: i64, grid_size: u32) -> Result<Self, Error> {
		if grid_size == 0 {
			return Err(Error::InvalidGridSize(grid_size));
		}

		let mut rng = JavaRng::new(seed);

		Ok(NoiseField {
			perlin: Perlin::new(Permutations::new(&mut rng)),
			grid_size
		})
	}

	pub fn with_default_grid(seed: i64) -> Result<Self, Error> {
		NoiseField::new(seed, DEFAULT_GRID_SIZE)
	}

	pub fn grid_size(&self) -> u32 {
		self.grid_size
	}

	/// Normalized fractal noise at a point, in [0, 1].
	pub fn evaluate(&self, point: Point2<f64>, shaping: &Shaping) -> Result<f64, Error> {
		shaping.validate()?;

		Ok(fractal::evaluate(&self.perlin, point, self.grid_size, shaping))
	}

	/// Raw single octave noise at the base grid size, in [0, 1].
	pub fn octave(&self, point: Point2<f64>) -> f64 {
		self.perlin.sample(point, self.grid_size)
	}
}

/// A field bound to a shaping policy validated up front, so that per-point
/// sampling cannot fail. Bulk generation goes through this.
#[derive(Debug)]
pub struct FieldSource {
	field: NoiseField,
	shaping: Shaping
}

impl FieldSource {
	pub fn new(field: NoiseField, shaping: Shaping) -> Result<Self, Error> {
		shaping.validate()?;

		Ok(FieldSource { field, shaping })
	}

	pub fn field(&self) -> &NoiseField {
		&self.field
	}

	pub fn shaping(&self) -> &Shaping {
		&self.shaping
	}
}

impl Sample for FieldSource {
	type Output = f64;

	fn sample(&self, point: Point2<f64>) -> f64 {
		fractal::evaluate(&self.field.perlin, point, self.field.grid_size, &self.shaping)
	}
}
