// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DaySelector {
    All,
    One(u32),
    Days(Vec<u32>),
}

impl DaySelector {
    /// Sorted, deduplicated list; `All` expands to `registered`.
    pub fn resolve(&self, registered: &[u32]) -> Vec<u32> {
        let mut days = match self {
            DaySelector::All      => registered.to_vec(),
            DaySelector::One(day) => vec![*day],
            DaySelector::Days(v)  => v.clone(),
        };
        days.sort_unstable();
        days.dedup();
        days
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartSelector {
    Both,
    One,
    Two,
}

impl PartSelector {
    pub fn from_number(part: u8) -> Option<Self> {
        match part {
            1 => Some(PartSelector::One),
            2 => Some(PartSelector::Two),
            _ => None,
        }
    }
    pub fn runs_part1(&self) -> bool {
        matches!(self, PartSelector::Both | PartSelector::One)
    }
    pub fn runs_part2(&self) -> bool {
        matches!(self, PartSelector::Both | PartSelector::Two)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub days: DaySelector,
    pub parts: PartSelector,
    pub inputs_dir: PathBuf,
    pub workers: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            days: DaySelector::All,
            parts: PartSelector::Both,
            inputs_dir: default_inputs_dir(),
            workers: WORKERS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub day: u32,
    /// Project root; every generated path is relative to it.
    pub root: PathBuf,
    /// Skip the puzzle page fetch and embed a placeholder instead.
    pub offline: bool,
    /// Download the personal input too (needs a session cookie).
    pub fetch_input: bool,
    pub session: Option<String>,
}

impl GenerateOptions {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            root: PathBuf::from("."),
            offline: false,
            fetch_input: false,
            session: session_from_env(),
        }
    }

    pub fn solution_path(&self) -> PathBuf {
        self.root.join(DAYS_DIR).join(join!(module_name(self.day), ".rs"))
    }

    pub fn test_path(&self) -> PathBuf {
        self.root.join(TESTS_DIR).join(join!(module_name(self.day), ".rs"))
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root.join(DAYS_MOD_FILE)
    }

    pub fn input_path(&self) -> PathBuf {
        crate::io::input_path(&self.root.join(INPUTS_DIR), self.day)
    }
}

/// `dayNN`, the module and file stem for a day.
pub fn module_name(day: u32) -> String {
    format!("day{day:02}")
}

pub fn puzzle_url(day: u32) -> String {
    format!("{BASE_URL}/{YEAR}/day/{day}")
}

pub fn input_url(day: u32) -> String {
    join!(puzzle_url(day), "/input")
}

pub fn default_inputs_dir() -> PathBuf {
    std::env::var_os(INPUTS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(INPUTS_DIR))
}

pub fn session_from_env() -> Option<String> {
    std::env::var(SESSION_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
