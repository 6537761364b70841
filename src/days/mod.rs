// src/days/mod.rs
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One day of puzzles. `data` is the input, one entry per line.
pub trait Solution: Sync {
    fn part1(&self, data: &[String]) -> Result<Answer>;
    fn part2(&self, data: &[String]) -> Result<Answer>;
}

/// A puzzle answer. `Empty` is used where a day has no second puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Number(i128),
    Empty,
}

macro_rules! answer_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Answer {
            fn from(v: $t) -> Self {
                Answer::Number(v as i128)
            }
        })*
    };
}
answer_from!(i32, u32, i64, u64, usize, i128);

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Empty     => f.write_str("-"),
        }
    }
}

/// Parse one trimmed token, reporting failures against `day`.
pub(crate) fn parse_num<T: FromStr>(day: u32, s: &str) -> Result<T> {
    s.trim().parse().map_err(|_| Error::parse(day, s, "not a number"))
}

/// Parse whitespace-separated numbers.
pub(crate) fn parse_nums<T: FromStr>(day: u32, s: &str) -> Result<Vec<T>> {
    s.split_whitespace().map(|t| parse_num(day, t)).collect()
}

/// Parse numbers separated by `sep` (empty fields are skipped).
pub(crate) fn parse_list<T: FromStr>(day: u32, s: &str, sep: char) -> Result<Vec<T>> {
    s.split(sep)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| parse_num(day, t))
        .collect()
}

macro_rules! days {
    ($($num:literal => $module:ident),* $(,)?) => {
        $(pub mod $module;)*

        /// The registered solution for `day`.
        pub fn solution(day: u32) -> Option<&'static dyn Solution> {
            match day {
                $($num => Some(&$module::Puzzle),)*
                _ => None,
            }
        }

        pub fn registered_days() -> Vec<u32> {
            vec![$($num),*]
        }
    };
}

days! {
    1 => day01,
    2 => day02,
    3 => day03,
    4 => day04,
    5 => day05,
    6 => day06,
    7 => day07,
    8 => day08,
    9 => day09,
    10 => day10,
    11 => day11,
    12 => day12,
    13 => day13,
    14 => day14,
    15 => day15,
    16 => day16,
    17 => day17,
    18 => day18,
    19 => day19,
    20 => day20,
    21 => day21,
    22 => day22,
    23 => day23,
    24 => day24,
    25 => day25,
}
