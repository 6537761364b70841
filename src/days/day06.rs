// src/days/day06.rs
// --- Day 6: Wait For It ---
use crate::days::{parse_num, parse_nums, Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub distance: u64,
}

impl Race {
    pub const fn new(time: u64, distance: u64) -> Self {
        Self { time, distance }
    }

    /// Hold times `h` in `0..=time` with `h * (time - h) > distance`.
    /// The winning holds form one interval around `time / 2`; find its
    /// lower edge from the quadratic and fix up float rounding.
    pub fn ways_to_win(&self) -> u64 {
        let (t, d) = (self.time, self.distance);
        let beats = |h: u64| h <= t && h * (t - h) > d;

        let disc = (t as f64) * (t as f64) - 4.0 * d as f64;
        if disc < 0.0 {
            return 0;
        }
        let mut lo = ((t as f64 - disc.sqrt()) / 2.0).floor().max(0.0) as u64;
        while lo > 0 && beats(lo - 1) {
            lo -= 1;
        }
        while lo <= t / 2 && !beats(lo) {
            lo += 1;
        }
        if lo > t / 2 {
            return 0;
        }
        // symmetric around t / 2
        let hi = t - lo;
        hi - lo + 1
    }
}

fn values<'a>(data: &'a [String], label: &str) -> Result<&'a str> {
    data.iter()
        .find_map(|l| l.trim().strip_prefix(label))
        .ok_or_else(|| Error::parse(DAY, label, "line not found"))
}

pub fn parse_races(data: &[String]) -> Result<Vec<Race>> {
    let times: Vec<u64> = parse_nums(DAY, values(data, "Time:")?)?;
    let distances: Vec<u64> = parse_nums(DAY, values(data, "Distance:")?)?;
    if times.len() != distances.len() {
        return Err(Error::parse(DAY, "", "times and distances differ in count"));
    }
    Ok(times.into_iter().zip(distances).map(|(t, d)| Race::new(t, d)).collect())
}

/// The same sheet read with the spaces between digits ignored.
pub fn parse_single_race(data: &[String]) -> Result<Race> {
    let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    Ok(Race::new(
        parse_num(DAY, &squash(values(data, "Time:")?))?,
        parse_num(DAY, &squash(values(data, "Distance:")?))?,
    ))
}

pub fn product_of_ways(races: &[Race]) -> u64 {
    races.iter().map(Race::ways_to_win).product()
}

pub fn part1(data: &[String]) -> Result<u64> {
    Ok(product_of_ways(&parse_races(data)?))
}

pub fn part2(data: &[String]) -> Result<u64> {
    Ok(parse_single_race(data)?.ways_to_win())
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
