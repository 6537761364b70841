// src/days/day09.rs
// --- Day 9: Mirage Maintenance ---
use crate::days::{parse_nums, Answer, Solution};
use crate::error::Result;

const DAY: u32 = 9;

/// Next value of the sequence: sum of the last element of every difference row.
pub fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|&v| v == 0) {
        return 0;
    }
    let diffs: Vec<i64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    values.last().copied().unwrap_or(0) + extrapolate(&diffs)
}

pub fn extrapolate_back(values: &[i64]) -> i64 {
    let reversed: Vec<i64> = values.iter().rev().copied().collect();
    extrapolate(&reversed)
}

fn histories(data: &[String]) -> Result<Vec<Vec<i64>>> {
    data.iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| parse_nums(DAY, l))
        .collect()
}

pub fn part1(data: &[String]) -> Result<i64> {
    Ok(histories(data)?.iter().map(|h| extrapolate(h)).sum())
}

pub fn part2(data: &[String]) -> Result<i64> {
    Ok(histories(data)?.iter().map(|h| extrapolate_back(h)).sum())
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
