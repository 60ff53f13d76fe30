use std::fs::File;
use std::path::Path;

use field::{FieldSource, NoiseField, DEFAULT_GRID_SIZE};
use noise::fractal::Shaping;
use error::Error;

/// A generation profile as stored on disk. Serialized names are camelCase;
/// missing entries fall back to the defaults, so a profile only needs to name
/// what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
	pub seed:        i64,
	#[serde(rename="gridSize")]            pub grid_size:             u32,
	pub octaves:     u32,
	pub persistence: f64,
	pub contrast:    f64,
	#[serde(rename="firstOctaveContrast")] pub first_octave_contrast: f64,
	pub bias:        f64,
	#[serde(rename="postBiasFactor")]      pub post_bias_factor:      f64
}

impl Default for Profile {
	fn default() -> Self {
		let shaping = Shaping::default();

		Profile {
			seed:                  0,
			grid_size:             DEFAULT_GRID_SIZE,
			octaves:               shaping.octaves,
			persistence:           shaping.persistence,
			contrast:              shaping.contrast,
			first_octave_contrast: shaping.first_octave_contrast,
			bias:                  shaping.bias,
			post_bias_factor:      shaping.post_bias_factor
		}
	}
}

impl Profile {
	pub fn load(path: &Path) -> Result<Self, Error> {
		Ok(::serde_json::from_reader(File::open(path)?)?)
	}

	pub fn shaping(&self) -> Shaping {
		Shaping {
			octaves:               self.octaves,
			persistence:           self.persistence,
			contrast:              self.contrast,
			first_octave_contrast: self.first_octave_contrast,
			bias:                  self.bias,
			post_bias_factor:      self.post_bias_factor
		}
	}

	pub fn into_source(self) -> Result<FieldSource, Error> {
		let shaping = self.shaping();

		FieldSource::new(NoiseField::new(self.seed, self.grid_size)?, shaping)
	}
}
