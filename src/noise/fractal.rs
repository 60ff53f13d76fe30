use cgmath::Point2;
use noise::perlin::Perlin;
use error::Error;

/// Per-call shaping policy for fractal composition. The first octave is
/// treated specially: its contrast exponent is separate, and it alone is
/// remapped back to ~[-1, 1], rescaled and darkened by the bias before
/// accumulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shaping {
	pub octaves: u32,
	pub persistence: f64,
	pub contrast: f64,
	#[serde(rename="firstOctaveContrast")] pub first_octave_contrast: f64,
	pub bias: f64,
	#[serde(rename="postBiasFactor")] pub post_bias_factor: f64
}

impl Default for Shaping {
	fn default() -> Self {
		Shaping {
			octaves:               4,
			persistence:           0.5,
			contrast:              1.0,
			first_octave_contrast: 0.5,
			bias:                  0.1,
			post_bias_factor:      1.5
		}
	}
}

impl Shaping {
	/// Rejects the parameters that would otherwise divide by zero or decay to
	/// a degenerate amplitude.
	pub fn validate(&self) -> Result<(), Error> {
		if self.octaves == 0 {
			return Err(Error::InvalidOctaveCount(self.octaves));
		}

		if self.persistence <= 0.0 {
			return Err(Error::InvalidPersistence(self.persistence));
		}

		Ok(())
	}
}

/// Multi-octave composition over a single permutation table. Each octave
/// halves the grid size, doubling the frequency, down to a floor of 1.
/// Callers must have validated the shaping parameters; octave outputs are
/// clamped to [0, 1] before exponentiation to absorb floating point slack.
pub fn evaluate(perlin: &Perlin, point: Point2<f64>, grid_size: u32, shaping: &Shaping) -> f64 {
	let mut total = 0.0;
	let mut amplitude = 1.0;
	let mut max_amplitude = 0.0;
	let mut grid_size = grid_size.max(1);

	for octave in 0..shaping.octaves {
		let raw = perlin.sample(point, grid_size).max(0.0).min(1.0);

		let result = if octave == 0 {
			(raw.powf(shaping.first_octave_contrast) * 2.0 - 1.0) * shaping.post_bias_factor - shaping.bias
		} else {
			raw.powf(shaping.contrast)
		};

		total += result * amplitude;
		max_amplitude += amplitude;
		amplitude *= shaping.persistence;
		grid_size = (grid_size / 2).max(1);
	}

	(total / max_amplitude).max(0.0).min(1.0)
}

#[cfg(test)]
mod test {
	use error::Error;
	use super::Shaping;

	#[test]
	fn test_defaults() {
		let shaping = Shaping::default();

		assert_eq!(shaping.octaves, 4);
		assert_eq!(shaping.persistence, 0.5);
		assert_eq!(shaping.contrast, 1.0);
		assert_eq!(shaping.first_octave_contrast, 0.5);
		assert_eq!(shaping.bias, 0.1);
		assert_eq!(shaping.post_bias_factor, 1.5);
	}

	#[test]
	fn test_validate() {
		assert!(Shaping::default().validate().is_ok());

		let no_octaves = Shaping { octaves: 0, ..Shaping::default() };

		match no_octaves.validate() {
			Err(Error::InvalidOctaveCount(0)) => (),
			other => panic!("expected InvalidOctaveCount, got {:?}", other)
		}

		let flat_decay = Shaping { persistence: 0.0, ..Shaping::default() };

		match flat_decay.validate() {
			Err(Error::InvalidPersistence(_)) => (),
			other => panic!("expected InvalidPersistence, got {:?}", other)
		}
	}
}
