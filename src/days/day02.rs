// src/days/day02.rs
// --- Day 2: Cube Conundrum ---
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::days::{parse_num, Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 2;

pub const MAX_RED: u32 = 12;
pub const MAX_GREEN: u32 = 13;
pub const MAX_BLUE: u32 = 14;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Game (\d+):|(\d+)\s+(blue|red|green)").expect("static regex")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "red"   => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue"  => Some(Color::Blue),
            _ => None,
        }
    }
}

/// A game with the largest count seen per colour across its draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub cubes: HashMap<Color, u32>,
}

impl Game {
    pub fn parse(line: &str) -> Result<Self> {
        let mut id = None;
        let mut cubes: HashMap<Color, u32> = HashMap::new();
        for caps in TOKEN.captures_iter(line) {
            if let Some(game) = caps.get(1) {
                id = Some(parse_num(DAY, game.as_str())?);
            } else if let (Some(n), Some(c)) = (caps.get(2), caps.get(3)) {
                let count: u32 = parse_num(DAY, n.as_str())?;
                let color = Color::parse(c.as_str())
                    .ok_or_else(|| Error::parse(DAY, line, "unknown colour"))?;
                let max = cubes.entry(color).or_insert(0);
                *max = (*max).max(count);
            }
        }
        let id = id.ok_or_else(|| Error::parse(DAY, line, "missing game id"))?;
        Ok(Game { id, cubes })
    }

    pub fn count(&self, color: Color) -> u32 {
        self.cubes.get(&color).copied().unwrap_or(0)
    }

    pub fn is_possible(&self) -> bool {
        self.count(Color::Red) <= MAX_RED
            && self.count(Color::Green) <= MAX_GREEN
            && self.count(Color::Blue) <= MAX_BLUE
    }

    pub fn power(&self) -> u32 {
        self.count(Color::Red) * self.count(Color::Green) * self.count(Color::Blue)
    }
}

fn games(data: &[String]) -> Result<Vec<Game>> {
    data.iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Game::parse(l))
        .collect()
}

pub fn part1(data: &[String]) -> Result<u32> {
    Ok(games(data)?.iter().filter(|g| g.is_possible()).map(|g| g.id).sum())
}

pub fn part2(data: &[String]) -> Result<u32> {
    Ok(games(data)?.iter().map(Game::power).sum())
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
