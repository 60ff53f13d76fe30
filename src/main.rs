extern crate cgmath;
extern crate noisefield;

use std::path::PathBuf;

use cgmath::Point2;
use noisefield::config::Profile;
use noisefield::field::FieldSource;
use noisefield::sample::Sample;

const SHADES: &'static [u8] = b" .:-=+*#%@";

fn main() {
	let profile_name = match ::std::env::args().skip(1).next() {
		Some(name) => name,
		None => {
			println!("Usage: noisefield <profile>");
			return;
		}
	};

	let mut profile_path = PathBuf::new();
	profile_path.push("profiles");
	profile_path.push(&profile_name);
	profile_path.set_extension("json");

	println!("Using profile {}: {}", profile_name, profile_path.to_string_lossy());

	let profile = match Profile::load(&profile_path) {
		Ok(profile) => profile,
		Err(error) => {
			println!("Failed to load profile: {}", error);
			return;
		}
	};

	println!("  Seed: {}", profile.seed);
	println!("  Grid Size: {}", profile.grid_size);
	println!("  Shaping: {:?}", profile.shaping());

	let source = match profile.into_source() {
		Ok(source) => source,
		Err(error) => {
			println!("Invalid profile: {}", error);
			return;
		}
	};

	display_field(&source, 72, 36);
}

fn display_field(source: &FieldSource, x_size: usize, z_size: usize) {
	for z in 0..z_size {
		for x in 0..x_size {
			let value = source.sample(Point2::new(x as f64, z as f64));
			let shade = ((value * ((SHADES.len() - 1) as f64)).round() as usize).min(SHADES.len() - 1);

			print!("{}", SHADES[shade] as char);
		}

		println!();
	}
}
