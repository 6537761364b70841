// src/days/day14.rs
// --- Day 14: Parabolic Reflector Dish ---
use std::collections::HashMap;

use crate::days::{Answer, Solution};
use crate::error::Result;
use crate::grid::{CharGrid, Pos};

pub const SPIN_CYCLES: usize = 1_000_000_000;

/// Roll every `O` north until it hits `#`, another `O` or the edge.
pub fn tilt_north(grid: &CharGrid) -> CharGrid {
    let mut out = grid.clone();
    for x in 0..grid.width() {
        let mut free = 0i64;
        for y in 0..grid.height() {
            let p = Pos::new(x as i64, y as i64);
            match grid.get(p) {
                Some(b'#') => free = y as i64 + 1,
                Some(b'O') => {
                    out.set(p, b'.');
                    out.set(Pos::new(x as i64, free), b'O');
                    free += 1;
                }
                _ => {}
            }
        }
    }
    out
}

/// North, west, south, east. Each tilt is "north" on the grid turned a quarter.
pub fn spin_cycle(grid: &CharGrid) -> CharGrid {
    (0..4).fold(grid.clone(), |g, _| tilt_north(&g).rotate_clockwise())
}

pub fn north_load(grid: &CharGrid) -> usize {
    let h = grid.height();
    (0..h)
        .map(|y| grid.row(y).iter().filter(|&&c| c == b'O').count() * (h - y))
        .sum()
}

/// Load after `cycles` spin cycles, skipping ahead once a state repeats.
pub fn load_after(data: &[String], cycles: usize) -> usize {
    let mut grid = CharGrid::new(data);
    let mut seen: HashMap<CharGrid, usize> = HashMap::new();
    let mut step = 0;
    while step < cycles {
        if let Some(&first) = seen.get(&grid) {
            let period = step - first;
            let remaining = (cycles - step) % period;
            for _ in 0..remaining {
                grid = spin_cycle(&grid);
            }
            return north_load(&grid);
        }
        seen.insert(grid.clone(), step);
        grid = spin_cycle(&grid);
        step += 1;
    }
    north_load(&grid)
}

pub fn part1(data: &[String]) -> Result<usize> {
    Ok(north_load(&tilt_north(&CharGrid::new(data))))
}

pub fn part2(data: &[String]) -> Result<usize> {
    Ok(load_after(data, SPIN_CYCLES))
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
