// src/bin/day_generator.rs
use aoc2023::cli::{self, GeneratorArgs};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = GeneratorArgs::parse();
    cli::run_generator(&args).wrap_err("day generation failed")?;
    Ok(())
}
