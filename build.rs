
use std::env;
use std::f64::consts::PI;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
	let out_dir = env::var("OUT_DIR").unwrap();
	let dest_path = Path::new(&out_dir).join("grad_table.rs");
	let mut f = File::create(&dest_path).unwrap();

	println!("cargo:rerun-if-changed=build.rs");

	writeln!(f, "pub const GRAD_TABLE: [(f64, f64); 16] = [").unwrap();

	for i in 0..16 {
		let theta = (i as f64) * PI / 8.0;

		writeln!(f, "\t({:?}, {:?}),", theta.cos(), theta.sin()).unwrap();
	}

	writeln!(f, "];").unwrap();
}
