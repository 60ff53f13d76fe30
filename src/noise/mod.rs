pub mod perlin;
pub mod fractal;

use rng::JavaRng;

/// Seeded hash table for lattice gradients. The first 256 entries are a
/// permutation of 0..=255, mirrored into the upper half so that corner sums
/// of the form `table[x] + y + 1` can index past 255 without wrapping.
pub struct Permutations {
	table: [u8; 512]
}

impl Permutations {
	pub fn new(rng: &mut JavaRng) -> Self {
		let mut base = [0u8; 256];

		// Fill array with 0..256
		for (i, x) in base.iter_mut().enumerate() {
			*x = i as u8;
		}

		// The swap index is drawn from the full range on every step. Slightly
		// biased compared to a shrinking-range shuffle, but kept so that
		// existing seeds keep their fields.
		for i in 0..256 {
			let swap = rng.next_i32(256) as usize;
			base.swap(i, swap);
		}

		let mut table = [0u8; 512];

		for (i, x) in table.iter_mut().enumerate() {
			*x = base[i & 0xFF];
		}

		Permutations { table }
	}

	/// Hash of a lattice coordinate. The coordinate is masked to the table
	/// period, so arbitrary coordinates, negative ones included, stay in
	/// bounds.
	pub fn hash(&self, coordinate: i64) -> usize {
		self.table[(coordinate & 0xFF) as usize] as usize
	}

	/// Entry behind an inner lookup index. Valid for indices in [0, 512).
	pub fn entry(&self, index: usize) -> u8 {
		self.table[index]
	}
}

impl ::std::fmt::Debug for Permutations {
	fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
		write!(f, "Permutations {{ table: {:?} }}", &self.table[..])
	}
}
