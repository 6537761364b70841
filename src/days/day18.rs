// src/days/day18.rs
// --- Day 18: Lavaduct Lagoon ---
use crate::days::{parse_num, Answer, Solution};
use crate::error::{Error, Result};
use crate::grid::{Dir, Pos};

const DAY: u32 = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dig {
    pub dir: Dir,
    pub meters: i64,
}

/// `R 6 (#70c710)`: the plain instruction, and the one hidden in the colour.
pub fn parse_line(line: &str) -> Result<(Dig, Dig)> {
    let mut parts = line.split_whitespace();
    let (Some(d), Some(n), Some(color)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::parse(DAY, line, "expected '<dir> <meters> (#rrggbb)'"));
    };
    let dir = match d {
        "U" => Dir::North,
        "R" => Dir::East,
        "D" => Dir::South,
        "L" => Dir::West,
        _ => return Err(Error::parse(DAY, line, "unknown direction")),
    };
    let plain = Dig { dir, meters: parse_num(DAY, n)? };

    let hex = color.trim_start_matches("(#").trim_end_matches(')');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::parse(DAY, line, "colour must have six hex digits"));
    }
    let meters = i64::from_str_radix(&hex[..5], 16)
        .map_err(|_| Error::parse(DAY, line, "bad hex distance"))?;
    let dir = match &hex[5..] {
        "0" => Dir::East,
        "1" => Dir::South,
        "2" => Dir::West,
        "3" => Dir::North,
        _ => return Err(Error::parse(DAY, line, "bad hex direction")),
    };
    Ok((plain, Dig { dir, meters }))
}

/// Cubic meters held: interior (shoelace + Pick) plus the trench itself.
pub fn lagoon_size(plan: &[Dig]) -> i64 {
    let mut pos = Pos::default();
    let mut twice_area = 0;
    let mut boundary = 0;
    for dig in plan {
        let d = dig.dir.delta();
        let next = Pos::new(pos.x + d.x * dig.meters, pos.y + d.y * dig.meters);
        twice_area += pos.x * next.y - next.x * pos.y;
        boundary += dig.meters;
        pos = next;
    }
    twice_area.abs() / 2 + boundary / 2 + 1
}

fn plans(data: &[String]) -> Result<(Vec<Dig>, Vec<Dig>)> {
    let mut plain = Vec::new();
    let mut hex = Vec::new();
    for line in data.iter().filter(|l| !l.trim().is_empty()) {
        let (a, b) = parse_line(line)?;
        plain.push(a);
        hex.push(b);
    }
    Ok((plain, hex))
}

pub fn part1(data: &[String]) -> Result<i64> {
    Ok(lagoon_size(&plans(data)?.0))
}

pub fn part2(data: &[String]) -> Result<i64> {
    Ok(lagoon_size(&plans(data)?.1))
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
