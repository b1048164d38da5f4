#[macro_use]
extern crate lazy_static;
extern crate num_enum;
extern crate paste;

mod prelude;

pub use prelude::*;

pub mod bits;

pub mod error;

pub mod fixed;

pub mod float;

pub mod vector;

pub mod report;

pub mod executor;

pub mod suites;

pub mod config;

pub mod vectors;
