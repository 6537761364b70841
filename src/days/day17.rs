// src/days/day17.rs
// --- Day 17: Clumsy Crucible ---
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::days::{Answer, Solution};
use crate::error::{Error, Result};
use crate::grid::{CharGrid, Dir, Pos};

const DAY: u32 = 17;

/// How far a crucible may go straight before it must (or may) turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crucible {
    pub min_run: usize,
    pub max_run: usize,
}

pub const NORMAL: Crucible = Crucible { min_run: 1, max_run: 3 };
pub const ULTRA: Crucible = Crucible { min_run: 4, max_run: 10 };

fn heat_map(data: &[String]) -> Result<CharGrid> {
    let grid = CharGrid::new(data);
    if grid.width() == 0 || grid.height() == 0 {
        return Err(Error::parse(DAY, "", "empty map"));
    }
    if let Some((p, c)) = grid.positions().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(Error::parse(DAY, format!("{p:?}: {}", c as char), "heat loss must be a digit"));
    }
    Ok(grid)
}

/// Dijkstra over (position, heading). Each move goes `min_run..=max_run`
/// tiles straight then turns, so the run length never needs to be tracked.
pub fn min_heat_loss(data: &[String], crucible: Crucible) -> Result<u64> {
    let grid = heat_map(data)?;
    let (w, h) = (grid.width(), grid.height());
    let target = Pos::new(w as i64 - 1, h as i64 - 1);
    let state = |p: Pos, d: Dir| (p.y as usize * w + p.x as usize) * 4 + d.index();

    let mut best = vec![u64::MAX; w * h * 4];
    let mut queue = BinaryHeap::new();
    for d in [Dir::East, Dir::South] {
        best[state(Pos::new(0, 0), d)] = 0;
        queue.push(Reverse((0u64, 0i64, 0i64, d)));
    }

    while let Some(Reverse((cost, x, y, dir))) = queue.pop() {
        let pos = Pos::new(x, y);
        if pos == target {
            return Ok(cost);
        }
        if cost > best[state(pos, dir)] {
            continue;
        }
        for turn in [dir.turn_left(), dir.turn_right()] {
            let mut next = pos;
            let mut next_cost = cost;
            for run in 1..=crucible.max_run {
                next = next.step(turn);
                let Some(tile) = grid.get(next) else { break };
                next_cost += (tile - b'0') as u64;
                if run < crucible.min_run {
                    continue;
                }
                let s = state(next, turn);
                if next_cost < best[s] {
                    best[s] = next_cost;
                    queue.push(Reverse((next_cost, next.x, next.y, turn)));
                }
            }
        }
    }
    Err(Error::no_answer(DAY, "factory is unreachable"))
}

pub fn part1(data: &[String]) -> Result<u64> {
    min_heat_loss(data, NORMAL)
}

pub fn part2(data: &[String]) -> Result<u64> {
    min_heat_loss(data, ULTRA)
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
