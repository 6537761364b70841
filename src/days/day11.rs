// src/days/day11.rs
// --- Day 11: Cosmic Expansion ---
use crate::days::{Answer, Solution};
use crate::error::Result;
use crate::grid::{CharGrid, Pos};

pub const PART1_FACTOR: i64 = 2;
pub const PART2_FACTOR: i64 = 1_000_000;

pub fn galaxies(data: &[String]) -> Vec<Pos> {
    CharGrid::new(data)
        .positions()
        .filter(|&(_, c)| c == b'#')
        .map(|(p, _)| p)
        .collect()
}

/// Map each coordinate to its expanded value: every empty line before it
/// counts `factor` times.
fn expand_axis(coords: &[i64], factor: i64) -> impl Fn(i64) -> i64 {
    let mut occupied: Vec<i64> = coords.to_vec();
    occupied.sort_unstable();
    occupied.dedup();
    move |c| {
        let filled = occupied.partition_point(|&o| o < c) as i64;
        let empty_before = c - filled;
        c + empty_before * (factor - 1)
    }
}

pub fn expand(galaxies: &[Pos], factor: i64) -> Vec<Pos> {
    let xs: Vec<i64> = galaxies.iter().map(|p| p.x).collect();
    let ys: Vec<i64> = galaxies.iter().map(|p| p.y).collect();
    let ex = expand_axis(&xs, factor);
    let ey = expand_axis(&ys, factor);
    galaxies.iter().map(|p| Pos::new(ex(p.x), ey(p.y))).collect()
}

/// Sum of shortest paths between every pair of galaxies after expansion.
pub fn sum_distances(data: &[String], factor: i64) -> i64 {
    let expanded = expand(&galaxies(data), factor);
    let mut total = 0;
    for (i, a) in expanded.iter().enumerate() {
        for b in &expanded[i + 1..] {
            total += a.manhattan(*b);
        }
    }
    total
}

pub fn part1(data: &[String]) -> Result<i64> {
    Ok(sum_distances(data, PART1_FACTOR))
}

pub fn part2(data: &[String]) -> Result<i64> {
    Ok(sum_distances(data, PART2_FACTOR))
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
