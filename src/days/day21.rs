// src/days/day21.rs
// --- Day 21: Step Counter ---
use std::collections::HashSet;

use crate::days::{Answer, Solution};
use crate::error::{Error, Result};
use crate::grid::{CharGrid, Pos};

const DAY: u32 = 21;
pub const PART1_STEPS: u64 = 64;
pub const PART2_STEPS: u64 = 26_501_365;

const START: u8 = b'S';
const ROCK: u8 = b'#';

fn garden(data: &[String]) -> Result<(CharGrid, Pos)> {
    let grid = CharGrid::new(data);
    let start = grid
        .find(START)
        .ok_or_else(|| Error::parse(DAY, "", "no starting position 'S'"))?;
    Ok((grid, start))
}

fn is_rock(grid: &CharGrid, p: Pos, tiled: bool) -> bool {
    if tiled {
        let x = p.x.rem_euclid(grid.width() as i64);
        let y = p.y.rem_euclid(grid.height() as i64);
        grid.get(Pos::new(x, y)) == Some(ROCK)
    } else {
        grid.get(p).is_none_or(|c| c == ROCK)
    }
}

/// Plots reachable in exactly `steps` steps. Plots reached earlier count
/// when the remaining steps have matching parity, since the elf can
/// always step back and forth.
pub fn reachable(grid: &CharGrid, start: Pos, steps: u64, tiled: bool) -> u64 {
    let mut seen = HashSet::from([start]);
    let mut frontier = vec![start];
    let mut count = u64::from(steps % 2 == 0);
    for step in 1..=steps {
        let mut next = Vec::new();
        for p in frontier {
            for n in p.neighbours4() {
                if !is_rock(grid, n, tiled) && seen.insert(n) {
                    next.push(n);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        if step % 2 == steps % 2 {
            count += next.len() as u64;
        }
        frontier = next;
    }
    count
}

/// Whether the row and column through the start are rock free, which
/// makes the reachable count grow quadratically per garden repetition.
fn has_clear_cross(grid: &CharGrid, start: Pos) -> bool {
    grid.width() == grid.height()
        && grid.row(start.y as usize).iter().all(|&c| c != ROCK)
        && grid.column(start.x as usize).iter().all(|&c| c != ROCK)
}

/// Plots reachable on the infinitely repeated garden.
pub fn reachable_tiled(data: &[String], steps: u64) -> Result<u64> {
    let (grid, start) = garden(data)?;
    let size = grid.width() as u64;
    let rem = steps % size;
    if !has_clear_cross(&grid, start) || steps < rem + 2 * size {
        return Ok(reachable(&grid, start, steps, true));
    }

    let [a0, a1, a2] = [rem, rem + size, rem + 2 * size]
        .map(|s| reachable(&grid, start, s, true) as i128);
    let k = (steps / size) as i128;
    let first = a1 - a0;
    let second = a2 - 2 * a1 + a0;
    let total = a0 + k * first + k * (k - 1) / 2 * second;
    u64::try_from(total).map_err(|_| Error::no_answer(DAY, "plot count overflow"))
}

pub fn part1(data: &[String], steps: u64) -> Result<u64> {
    let (grid, start) = garden(data)?;
    Ok(reachable(&grid, start, steps, false))
}

pub fn part2(data: &[String], steps: u64) -> Result<u64> {
    reachable_tiled(data, steps)
}

pub struct Puzzle;

impl Solution for Puzzle {
    fn part1(&self, data: &[String]) -> Result<Answer> {
        part1(data, PART1_STEPS).map(Answer::from)
    }
    fn part2(&self, data: &[String]) -> Result<Answer> {
        part2(data, PART2_STEPS).map(Answer::from)
    }
}
