use std::io;
use thiserror::Error;

/// Faults reported synchronously to the caller, at construction or at
/// evaluation. Parameter faults are never coerced into a clamped result.
#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid grid size {0}: must be positive")]
	InvalidGridSize(u32),
	#[error("invalid octave count {0}: must be positive")]
	InvalidOctaveCount(u32),
	#[error("invalid persistence {0}: amplitude decay must be positive")]
	InvalidPersistence(f64),
	#[error("failed to read profile: {0}")]
	Io(#[from] io::Error),
	#[error("failed to parse profile: {0}")]
	Parse(#[from] ::serde_json::Error)
}
