// src/days/day10.rs
// --- Day 10: Pipe Maze ---
use crate::days::{Answer, Solution};
use crate::error::{Error, Result};
use crate::grid::{CharGrid, Dir, Pos};

const DAY: u32 = 10;

/// The two openings of a pipe tile.
pub fn connections(tile: u8) -> Option<[Dir; 2]> {
    use Dir::*;
    match tile {
        b'|' => Some([North, South]),
        b'-' => Some([East, West]),
        b'L' => Some([North, East]),
        b'J' => Some([North, West]),
        b'7' => Some([South, West]),
        b'F' => Some([South, East]),
        _ => None,
    }
}

fn opens(tile: u8, dir: Dir) -> bool {
    connections(tile).is_some_and(|c| c.contains(&dir))
}

/// The main loop through `S`, in walking order starting at `S`.
pub struct PipeLoop {
    pub tiles: Vec<Pos>,
}

impl PipeLoop {
    pub fn find(data: &[String]) -> Result<Self> {
        let grid = CharGrid::new(data);
        let start = grid
            .find(b'S')
            .ok_or_else(|| Error::parse(DAY, "", "no S tile"))?;

        let mut heading = Dir::ALL
            .into_iter()
            .find(|&d| grid.get(start.step(d)).is_some_and(|t| opens(t, d.opposite())))
            .ok_or_else(|| Error::no_answer(DAY, "S is not connected"))?;

        let mut tiles = vec![start];
        let mut pos = start.step(heading);
        while pos != start {
            tiles.push(pos);
            let tile = grid.get(pos).unwrap_or(b'.');
            let [a, b] = connections(tile)
                .ok_or_else(|| Error::no_answer(DAY, format!("loop broken at {pos:?}")))?;
            let back = heading.opposite();
            heading = if a == back { b } else if b == back { a } else {
                return Err(Error::no_answer(DAY, format!("pipe at {pos:?} does not connect")));
            };
            pos = pos.step(heading);
        }
        Ok(PipeLoop { tiles })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Shoelace area of the polygon through the tile centres.
    pub fn area(&self) -> i64 {
        let n = self.tiles.len();
        let twice: i64 = (0..n)
            .map(|i| {
                let (a, b) = (self.tiles[i], self.tiles[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2
    }

    /// Pick's theorem: A = I + B/2 - 1.
    pub fn enclosed(&self) -> i64 {
        self.area() - self.len() as i64 / 2 + 1
    }
}

pub fn part1(data: &[String]) -> Result<usize> {
    Ok(PipeLoop::find(data)?.len() / 2)
}

pub fn part2(data: &[String]) -> Result<i64> {
    Ok(PipeLoop::find(data)?.enclosed())
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
