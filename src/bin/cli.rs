// src/bin/cli.rs
use aoc2023::cli::{self, RunnerArgs};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = RunnerArgs::parse();
    let summary = cli::run_solutions(&args).wrap_err("running solutions failed")?;
    if !summary.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
