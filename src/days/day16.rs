// src/days/day16.rs
// --- Day 16: The Floor Will Be Lava ---
use crate::days::{Answer, Solution};
use crate::error::Result;
use crate::grid::{CharGrid, Dir, Pos};

/// Directions a beam leaves a tile in, entering it heading `dir`.
fn outgoing(tile: u8, dir: Dir) -> Vec<Dir> {
    use Dir::*;
    match (tile, dir) {
        (b'/', North) => vec![East],
        (b'/', East) => vec![North],
        (b'/', South) => vec![West],
        (b'/', West) => vec![South],
        (b'\\', North) => vec![West],
        (b'\\', West) => vec![North],
        (b'\\', South) => vec![East],
        (b'\\', East) => vec![South],
        (b'|', East | West) => vec![North, South],
        (b'-', North | South) => vec![East, West],
        _ => vec![dir],
    }
}

/// Tiles crossed by a beam entering at `start` heading `dir`.
pub fn energized(grid: &CharGrid, start: Pos, dir: Dir) -> usize {
    let (w, h) = (grid.width(), grid.height());
    let index = |p: Pos| p.y as usize * w + p.x as usize;
    let mut seen = vec![[false; 4]; w * h];
    let mut stack = vec![(start, dir)];

    while let Some((pos, dir)) = stack.pop() {
        let Some(tile) = grid.get(pos) else { continue };
        let visited = &mut seen[index(pos)][dir.index()];
        if *visited {
            continue;
        }
        *visited = true;
        for next in outgoing(tile, dir) {
            stack.push((pos.step(next), next));
        }
    }
    seen.iter().filter(|d| d.iter().any(|&v| v)).count()
}

pub fn part1(data: &[String]) -> Result<usize> {
    Ok(energized(&CharGrid::new(data), Pos::new(0, 0), Dir::East))
}

/// Best entry over every edge tile, beam pointing inwards.
pub fn part2(data: &[String]) -> Result<usize> {
    let grid = CharGrid::new(data);
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let mut entries = Vec::new();
    for x in 0..w {
        entries.push((Pos::new(x, 0), Dir::South));
        entries.push((Pos::new(x, h - 1), Dir::North));
    }
    for y in 0..h {
        entries.push((Pos::new(0, y), Dir::East));
        entries.push((Pos::new(w - 1, y), Dir::West));
    }
    Ok(entries
        .into_iter()
        .map(|(p, d)| energized(&grid, p, d))
        .max()
        .unwrap_or(0))
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
