// src/days/day03.rs
// --- Day 3: Gear Ratios ---
use std::collections::HashMap;
use std::fmt;

use crate::days::{Answer, Solution};
use crate::error::{Error, Result};
use crate::grid::{CharGrid, Pos};

const DAY: u32 = 3;
// longest digit run that always fits a u32
const MAX_DIGITS: usize = 9;

/// A number on the schematic, spanning `start..=end` on one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartNumber {
    pub value: u32,
    pub start: Pos,
    pub end: Pos,
}

impl PartNumber {
    /// Every cell touching the number, diagonals included.
    fn surroundings(&self) -> impl Iterator<Item = Pos> + '_ {
        let y = self.start.y;
        (self.start.x - 1..=self.end.x + 1).flat_map(move |x| {
            [Pos::new(x, y - 1), Pos::new(x, y), Pos::new(x, y + 1)]
        })
        .filter(move |p| p.y != y || p.x < self.start.x || p.x > self.end.x)
    }
}

/// The engine schematic, framed with `.` so every data cell has eight neighbours.
pub struct Schematic {
    grid: CharGrid,
}

fn is_symbol(c: u8) -> bool {
    c != b'.' && !c.is_ascii_digit()
}

impl Schematic {
    /// Frame the schematic. Numbers longer than `MAX_DIGITS` are rejected.
    pub fn parse(data: &[String]) -> Result<Self> {
        for line in data {
            let longest = line
                .split(|c: char| !c.is_ascii_digit())
                .map(str::len)
                .max()
                .unwrap_or(0);
            if longest > MAX_DIGITS {
                return Err(Error::parse(DAY, line.as_str(), "number too large"));
            }
        }
        Ok(Self { grid: CharGrid::bordered(data, b'.') })
    }

    pub fn part_numbers_in_line(&self, y: usize) -> Vec<PartNumber> {
        let row = self.grid.row(y);
        let mut out = Vec::new();
        let mut x = 0;
        while x < row.len() {
            if !row[x].is_ascii_digit() {
                x += 1;
                continue;
            }
            let start = x;
            let mut value = 0u32;
            while x < row.len() && row[x].is_ascii_digit() {
                value = value * 10 + (row[x] - b'0') as u32;
                x += 1;
            }
            out.push(PartNumber {
                value,
                start: Pos::new(start as i64, y as i64),
                end: Pos::new(x as i64 - 1, y as i64),
            });
        }
        out
    }

    pub fn part_numbers(&self) -> Vec<PartNumber> {
        (0..self.grid.height()).flat_map(|y| self.part_numbers_in_line(y)).collect()
    }

    pub fn surrounded_by_symbol(&self, number: &PartNumber) -> bool {
        number.surroundings().any(|p| is_symbol(self.grid.get_or(p, b'.')))
    }

    pub fn all_surrounded_by_symbols(&self) -> Vec<u32> {
        self.part_numbers()
            .into_iter()
            .filter(|n| self.surrounded_by_symbol(n))
            .map(|n| n.value)
            .collect()
    }

    /// Product of the two numbers next to each `*` that touches exactly two.
    pub fn gear_ratios(&self) -> Vec<u64> {
        let mut stars: HashMap<Pos, Vec<u32>> = HashMap::new();
        for number in self.part_numbers() {
            for p in number.surroundings() {
                if self.grid.get(p) == Some(b'*') {
                    stars.entry(p).or_default().push(number.value);
                }
            }
        }
        let mut ratios: Vec<(Pos, u64)> = stars
            .into_iter()
            .filter(|(_, nums)| nums.len() == 2)
            .map(|(p, nums)| (p, nums[0] as u64 * nums[1] as u64))
            .collect();
        ratios.sort_unstable();
        ratios.into_iter().map(|(_, r)| r).collect()
    }
}

impl fmt::Display for Schematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

pub fn part1(data: &[String]) -> Result<u64> {
    Ok(Schematic::parse(data)?.all_surrounded_by_symbols().iter().map(|&v| u64::from(v)).sum())
}

pub fn part2(data: &[String]) -> Result<u64> {
    Ok(Schematic::parse(data)?.gear_ratios().iter().sum())
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
