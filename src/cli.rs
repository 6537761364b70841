// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{FIRST_DAY, LAST_DAY, WORKERS};
use crate::config::options::{
    default_inputs_dir, session_from_env, DaySelector, GenerateOptions, PartSelector, RunOptions,
};
use crate::error::{Error, Result};
use crate::generator::{self, Generated};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

pub const DAY_PROMPT: &str = "Which day do you want to generate? ";

#[derive(Parser, Debug)]
#[command(name = "aoc2023", version, about = "Run Advent of Code 2023 solutions")]
pub struct RunnerArgs {
    /// Days to run: `5`, `1,3`, `10-15`. Defaults to every registered day.
    pub days: Vec<String>,
    /// Run every registered day
    #[arg(long, short = 'a', conflicts_with = "days")]
    pub all: bool,
    /// Only run one part
    #[arg(long, short = 'p', value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,
    /// Directory holding dayNN.txt inputs (default: $AOC_INPUTS or ./inputs)
    #[arg(long)]
    pub inputs: Option<PathBuf>,
    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,
}

#[derive(Parser, Debug)]
#[command(name = "day_generator", version, about = "Scaffold a new Advent of Code 2023 day")]
pub struct GeneratorArgs {
    /// Day to generate; prompted for on stdin when missing
    pub day: Option<u32>,
    /// Project root the generated paths are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Don't fetch the puzzle page
    #[arg(long)]
    pub offline: bool,
    /// Also download the puzzle input (needs AOC_SESSION)
    #[arg(long)]
    pub fetch_input: bool,
}

/// Parse day lists like `1,3,5-7`. Sorted and deduplicated.
pub fn parse_days_list(s: &str) -> Result<Vec<u32>> {
    let bad = |why: &str| Error::parse(0, s, why);
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some((a, b)) = part.split_once('-') {
            let a: u32 = a.trim().parse().map_err(|_| bad("not a day number"))?;
            let b: u32 = b.trim().parse().map_err(|_| bad("not a day number"))?;
            if a > b { return Err(bad("range start is after its end")); }
            out.extend(a..=b);
        } else {
            out.push(part.parse().map_err(|_| bad("not a day number"))?);
        }
    }
    if let Some(&day) = out.iter().find(|d| !(FIRST_DAY..=LAST_DAY).contains(*d)) {
        return Err(Error::InvalidDay(day));
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

impl RunnerArgs {
    pub fn to_options(&self) -> Result<RunOptions> {
        let days = if self.all || self.days.is_empty() {
            DaySelector::All
        } else {
            let mut days = Vec::new();
            for list in &self.days {
                days.extend(parse_days_list(list)?);
            }
            match days.as_slice() {
                [one] => DaySelector::One(*one),
                _ => DaySelector::Days(days),
            }
        };
        let parts = self
            .part
            .and_then(PartSelector::from_number)
            .unwrap_or(PartSelector::Both);
        Ok(RunOptions {
            days,
            parts,
            inputs_dir: self.inputs.clone().unwrap_or_else(default_inputs_dir),
            workers: self.workers.max(1),
        })
    }
}

impl GeneratorArgs {
    pub fn to_options(&self, day: u32) -> GenerateOptions {
        GenerateOptions {
            day,
            root: self.root.clone(),
            offline: self.offline,
            fetch_input: self.fetch_input,
            session: session_from_env(),
        }
    }
}

/// Status lines on stderr so stdout only carries answers.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, _day: u32) {
        self.done += 1;
    }

    fn item_failed(&mut self, day: u32, msg: &str) {
        self.done += 1;
        eprintln!("[{}/{}] day {day} failed: {msg}", self.done, self.total);
    }
}

fn fmt_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros >= 1_000_000 {
        format!("{:.2}s", d.as_secs_f64())
    } else if micros >= 1_000 {
        format!("{:.2}ms", micros as f64 / 1_000.0)
    } else {
        format!("{micros}µs")
    }
}

/// One answer line per day.
pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    for r in &summary.reports {
        let part = |a: Option<crate::Answer>| a.map_or_else(|| s!("skipped"), |a| a.to_string());
        out.push_str(&format!(
            "Day {:>2}: part1 = {:<16} part2 = {:<16} ({})\n",
            r.day,
            part(r.part1),
            part(r.part2),
            fmt_duration(r.elapsed),
        ));
    }
    out
}

/// Entry point of the `aoc2023` binary.
pub fn run_solutions(args: &RunnerArgs) -> Result<RunSummary> {
    let options = args.to_options()?;
    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&options, Some(&mut progress))?;
    print!("{}", render_summary(&summary));
    Ok(summary)
}

/// Prompt on `output` and read a day number from `input`.
pub fn read_day(input: &mut impl BufRead, output: &mut impl Write) -> Result<u32> {
    output.write_all(DAY_PROMPT.as_bytes())?;
    output.flush()?;
    let mut line = s!();
    input.read_line(&mut line)?;
    line.trim()
        .parse()
        .map_err(|_| Error::parse(0, line.trim(), "not a day number"))
}

/// Entry point of the `day_generator` binary. An existing day is
/// reported, not treated as a failure.
pub fn run_generator(args: &GeneratorArgs) -> Result<Option<Generated>> {
    let day = match args.day {
        Some(day) => day,
        None => read_day(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    match generator::generate(&args.to_options(day)) {
        Ok(generated) => {
            println!("{}", generated.message());
            Ok(Some(generated))
        }
        Err(e @ Error::DayExists(_)) => {
            println!("{e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
