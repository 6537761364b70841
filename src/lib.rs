// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod days;
pub mod error;
pub mod file;
pub mod generator;
pub mod grid;
pub mod io;
pub mod progress;
pub mod runner;

pub use days::{Answer, Solution};
pub use error::{Error, Result};
