// src/generator/mod.rs

pub mod instructions;
pub mod templates;

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::config::consts::{FIRST_DAY, LAST_DAY, REGISTRY_OPEN, REQUEST_PAUSE_MS};
use crate::config::options::{input_url, module_name, GenerateOptions};
use crate::core::net;
use crate::error::{Error, Result};
use crate::file::{overwrite, read_to_string, touch, write_new};

pub use instructions::{extract_instructions, fetch_instructions, format_instructions};
pub use templates::{solution_template, test_template};

/// What `generate` wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generated {
    pub day: u32,
    pub solution: PathBuf,
    pub test: PathBuf,
    /// The input file, when it did not exist before.
    pub input: Option<PathBuf>,
    pub input_downloaded: bool,
    pub registered: bool,
}

impl Generated {
    pub fn message(&self) -> String {
        format!("Enjoy your newly created day {}", self.day)
    }
}

pub fn check_day(day: u32) -> Result<()> {
    if (FIRST_DAY..=LAST_DAY).contains(&day) {
        Ok(())
    } else {
        Err(Error::InvalidDay(day))
    }
}

/// Add `N => dayNN,` to the `days!` block of the registry source.
/// Returns `None` when the day is already listed or no block is found.
pub fn register_module(source: &str, day: u32) -> Option<String> {
    let module = module_name(day);
    let open = source.find(REGISTRY_OPEN)?;
    let close = open + source[open..].find('}')?;
    let block = &source[open + REGISTRY_OPEN.len()..close];

    let listed = block
        .lines()
        .filter_map(|l| l.split("=>").nth(1))
        .any(|m| m.trim().trim_end_matches(',') == module);
    if listed {
        return None;
    }

    let mut out = s!(&source[..close]);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&format!("    {day} => {module},\n"));
    out.push_str(&source[close..]);
    Some(out)
}

/// Download the personal puzzle input of `day`. Needs a session cookie.
pub fn fetch_input(day: u32, session: &str) -> Result<String> {
    let body = net::http_get(&input_url(day), Some(session))?;
    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
    Ok(body)
}

/// Scaffold a new day: solution module, test file, input file and
/// registry entry.
pub fn generate(options: &GenerateOptions) -> Result<Generated> {
    let day = options.day;
    check_day(day)?;

    let solution = options.solution_path();
    let test = options.test_path();
    if solution.exists() || test.exists() {
        logf!("Day {day} already exists ({})", solution.display());
        return Err(Error::DayExists(day));
    }

    // nothing is written until the registry read and input download succeed
    let registry = options.registry_path();
    let updated_registry = register_module(&read_to_string(&registry)?, day);

    let download = match (options.fetch_input && !options.offline, options.session.as_deref()) {
        (true, Some(session)) => Some(fetch_input(day, session)?),
        (true, None) => {
            loge!("No session cookie set; input for day {day} not downloaded");
            None
        }
        (false, _) => None,
    };

    let instructions = if options.offline {
        instructions::missing_instructions(day)
    } else {
        fetch_instructions(day)
    };

    write_new(&solution, &solution_template(day, &instructions))?;
    if let Err(e) = write_new(&test, &test_template(day)) {
        let _ = fs::remove_file(&solution);
        return Err(e);
    }
    logf!("Wrote {} and {}", solution.display(), test.display());

    let registered = match updated_registry {
        Some(updated) => {
            overwrite(&registry, &updated)?;
            logf!("Registered {} in {}", module_name(day), registry.display());
            true
        }
        None => false,
    };

    let input_path = options.input_path();
    let input = touch(&input_path)?.then(|| input_path.clone());

    let input_downloaded = match download {
        Some(body) => {
            overwrite(&input_path, &body)?;
            logf!("Downloaded input for day {day} ({} bytes)", body.len());
            true
        }
        None => false,
    };

    Ok(Generated { day, solution, test, input, input_downloaded, registered })
}
