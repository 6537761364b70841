// src/days/day15.rs
// --- Day 15: Lens Library ---
use crate::days::{parse_num, Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 15;

/// The HASH algorithm: `(acc + byte) * 17 mod 256` over the string.
pub fn hash(s: &str) -> usize {
    s.bytes().fold(0, |acc, b| (acc + b as usize) * 17 % 256)
}

/// The initialization sequence may wrap across lines; newlines are ignored.
pub fn steps(data: &[String]) -> Vec<String> {
    data.concat()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Remove(String),
    Insert(String, usize),
}

impl Operation {
    pub fn parse(step: &str) -> Result<Self> {
        if let Some(label) = step.strip_suffix('-') {
            return Ok(Operation::Remove(s!(label)));
        }
        let (label, focal) = step
            .split_once('=')
            .ok_or_else(|| Error::parse(DAY, step, "expected '-' or '='"))?;
        Ok(Operation::Insert(s!(label), parse_num(DAY, focal)?))
    }
}

/// 256 boxes of `(label, focal length)` slots, kept in insertion order.
pub struct Boxes {
    slots: Vec<Vec<(String, usize)>>,
}

impl Default for Boxes {
    fn default() -> Self {
        Self { slots: vec![Vec::new(); 256] }
    }
}

impl Boxes {
    pub fn apply(&mut self, op: Operation) {
        match op {
            Operation::Remove(label) => {
                self.slots[hash(&label)].retain(|(l, _)| *l != label);
            }
            Operation::Insert(label, focal) => {
                let slot = &mut self.slots[hash(&label)];
                match slot.iter_mut().find(|(l, _)| *l == label) {
                    Some(lens) => lens.1 = focal,
                    None => slot.push((label, focal)),
                }
            }
        }
    }

    pub fn focusing_power(&self) -> usize {
        self.slots
            .iter()
            .enumerate()
            .flat_map(|(b, slot)| {
                slot.iter().enumerate().map(move |(i, (_, f))| (b + 1) * (i + 1) * f)
            })
            .sum()
    }
}

pub fn part1(data: &[String]) -> Result<usize> {
    Ok(steps(data).iter().map(|s| hash(s)).sum())
}

pub fn part2(data: &[String]) -> Result<usize> {
    let mut boxes = Boxes::default();
    for step in steps(data) {
        boxes.apply(Operation::parse(&step)?);
    }
    Ok(boxes.focusing_power())
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
