// src/days/day13.rs
// --- Day 13: Point of Incidence ---
use crate::days::{Answer, Solution};
use crate::error::{Error, Result};
use crate::grid::CharGrid;
use crate::io::blocks;

const DAY: u32 = 13;

/// Horizontal line of reflection: rows above it, given exactly `smudges`
/// mismatching cells across the mirror.
fn reflection_row(grid: &CharGrid, smudges: usize) -> Option<usize> {
    (1..grid.height()).find(|&above| {
        let span = above.min(grid.height() - above);
        let diff: usize = (0..span)
            .map(|k| {
                grid.row(above - 1 - k)
                    .iter()
                    .zip(grid.row(above + k))
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum();
        diff == smudges
    })
}

/// Columns left of a vertical mirror, or 100 times the rows above a horizontal one.
pub fn summarize(pattern: &[String], smudges: usize) -> Option<usize> {
    let grid = CharGrid::new(pattern);
    reflection_row(&grid.transpose(), smudges)
        .or_else(|| reflection_row(&grid, smudges).map(|r| 100 * r))
}

fn total(data: &[String], smudges: usize) -> Result<usize> {
    blocks(data)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            summarize(p, smudges)
                .ok_or_else(|| Error::no_answer(DAY, format!("pattern {} has no mirror", i + 1)))
        })
        .sum()
}

pub fn part1(data: &[String]) -> Result<usize> {
    total(data, 0)
}

pub fn part2(data: &[String]) -> Result<usize> {
    total(data, 1)
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
