// src/days/day23.rs
// --- Day 23: A Long Walk ---
use std::collections::HashMap;

use crate::days::{Answer, Solution};
use crate::error::{Error, Result};
use crate::grid::{CharGrid, Dir, Pos};

const DAY: u32 = 23;
const PATH: u8 = b'.';
const FOREST: u8 = b'#';

fn slope(tile: u8) -> Option<Dir> {
    match tile {
        b'^' => Some(Dir::North),
        b'>' => Some(Dir::East),
        b'v' => Some(Dir::South),
        b'<' => Some(Dir::West),
        _ => None,
    }
}

/// The trail map reduced to its junctions, with the length of every
/// corridor between them.
pub struct Trails {
    edges: Vec<Vec<(usize, u32)>>,
    start: usize,
    end: usize,
}

impl Trails {
    pub fn new(data: &[String], slippery: bool) -> Result<Self> {
        let grid = CharGrid::new(data);
        let h = grid.height();
        if h == 0 {
            return Err(Error::parse(DAY, "", "empty map"));
        }
        let open_in = |y: usize| {
            grid.row(y)
                .iter()
                .position(|&c| c == PATH)
                .map(|x| Pos::new(x as i64, y as i64))
        };
        let start = open_in(0).ok_or_else(|| Error::parse(DAY, "", "no entrance in the top row"))?;
        let end = open_in(h - 1).ok_or_else(|| Error::parse(DAY, "", "no exit in the bottom row"))?;

        let open = |p: Pos| grid.get(p).is_some_and(|c| c != FOREST);
        let moves = |p: Pos| -> Vec<Pos> {
            let dirs = match (slippery, grid.get(p).and_then(slope)) {
                (true, Some(d)) => vec![d],
                _ => Dir::ALL.to_vec(),
            };
            dirs.into_iter().map(|d| p.step(d)).filter(|&n| open(n)).collect()
        };

        let mut nodes = vec![start, end];
        nodes.extend(
            grid.positions()
                .filter(|&(p, c)| c != FOREST && p.neighbours4().iter().filter(|&&n| open(n)).count() > 2)
                .map(|(p, _)| p),
        );
        let index: HashMap<Pos, usize> = nodes.iter().enumerate().map(|(i, &p)| (p, i)).collect();

        let mut edges = vec![Vec::new(); nodes.len()];
        for (from, &node) in nodes.iter().enumerate() {
            for first in moves(node) {
                let (mut prev, mut cur, mut len) = (node, first, 1);
                let reached = loop {
                    if let Some(&to) = index.get(&cur) {
                        break Some(to);
                    }
                    let Some(next) = moves(cur).into_iter().find(|&n| n != prev) else {
                        break None;
                    };
                    (prev, cur, len) = (cur, next, len + 1);
                };
                if let Some(to) = reached.filter(|&to| to != from) {
                    edges[from].push((to, len));
                }
            }
        }
        Ok(Trails { edges, start: 0, end: 1 })
    }

    /// Longest path from entrance to exit that never revisits a junction.
    pub fn longest(&self) -> Result<u32> {
        if self.edges.len() > 64 {
            return Err(Error::no_answer(DAY, "too many junctions"));
        }
        let mut best = None;
        self.search(self.start, 1 << self.start, 0, &mut best);
        best.ok_or_else(|| Error::no_answer(DAY, "exit is unreachable"))
    }

    fn search(&self, node: usize, visited: u64, len: u32, best: &mut Option<u32>) {
        if node == self.end {
            *best = Some(best.map_or(len, |b| b.max(len)));
            return;
        }
        for &(next, step) in &self.edges[node] {
            if visited & (1 << next) == 0 {
                self.search(next, visited | (1 << next), len + step, best);
            }
        }
    }
}

pub fn part1(data: &[String]) -> Result<u32> {
    Trails::new(data, true)?.longest()
}

pub fn part2(data: &[String]) -> Result<u32> {
    Trails::new(data, false)?.longest()
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
