// src/days/day01.rs
// --- Day 1: Trebuchet?! ---
use crate::days::{Answer, Solution};
use crate::error::Result;

const DIGITS: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];
const NAMES: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

/// Where a digit shows up in a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub digit: u32,
    pub position: usize,
}

/// Finds the first and last occurrence of any of a set of words.
/// Occurrences may overlap: in `eighthree` both `eight` and `three` count.
pub struct Finder {
    words: &'static [&'static str],
}

impl Finder {
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    fn word_at(&self, line: &str, position: usize) -> Option<u32> {
        let rest = &line[position..];
        self.words
            .iter()
            .position(|w| rest.starts_with(w))
            .map(|i| i as u32 + 1)
    }

    pub fn find_first(&self, line: &str) -> Option<Appearance> {
        (0..line.len())
            .filter(|&i| line.is_char_boundary(i))
            .find_map(|i| self.word_at(line, i).map(|digit| Appearance { digit, position: i }))
    }

    pub fn find_last(&self, line: &str) -> Option<Appearance> {
        (0..line.len())
            .rev()
            .filter(|&i| line.is_char_boundary(i))
            .find_map(|i| self.word_at(line, i).map(|digit| Appearance { digit, position: i }))
    }
}

const DIGITS_FINDER: Finder = Finder::new(&DIGITS);
const NAMES_FINDER: Finder = Finder::new(&NAMES);

fn to_value(first: Option<Appearance>, last: Option<Appearance>) -> u32 {
    10 * first.map_or(0, |a| a.digit) + last.map_or(0, |a| a.digit)
}

pub fn calibration_value1(line: &str) -> u32 {
    to_value(DIGITS_FINDER.find_first(line), DIGITS_FINDER.find_last(line))
}

pub fn calibration_value2(line: &str) -> u32 {
    let first = [DIGITS_FINDER.find_first(line), NAMES_FINDER.find_first(line)]
        .into_iter()
        .flatten()
        .min_by_key(|a| a.position);
    let last = [DIGITS_FINDER.find_last(line), NAMES_FINDER.find_last(line)]
        .into_iter()
        .flatten()
        .max_by_key(|a| a.position);
    to_value(first, last)
}

pub fn part1(data: &[String]) -> Result<u32> {
    Ok(data.iter().map(|l| calibration_value1(l)).sum())
}

pub fn part2(data: &[String]) -> Result<u32> {
    Ok(data.iter().map(|l| calibration_value2(l)).sum())
}

pub struct Puzzle;

impl Solution for Puzzle {
    fn part1(&self, data: &[String]) -> Result<Answer> {
        part1(data).map(Answer::from)
    }
    fn part2(&self, data: &[String]) -> Result<Answer> {
        part2(data).map(Answer::from)
    }
}
