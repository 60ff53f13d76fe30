extern crate cgmath;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate thiserror;

pub mod rng;
pub mod noise;
pub mod sample;
pub mod field;
pub mod config;
pub mod error;
