// src/days/day08.rs
// --- Day 8: Haunted Wasteland ---
use std::collections::HashMap;

use crate::core::num::lcm_all;
use crate::days::{Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 8;

pub struct Network {
    pub instructions: Vec<u8>,
    pub nodes: HashMap<String, (String, String)>,
}

impl Network {
    pub fn parse(data: &[String]) -> Result<Self> {
        let mut lines = data.iter().filter(|l| !l.trim().is_empty());
        let instructions = lines
            .next()
            .ok_or_else(|| Error::parse(DAY, "", "missing instructions"))?
            .trim()
            .bytes()
            .collect::<Vec<_>>();
        if instructions.iter().any(|&b| b != b'L' && b != b'R') {
            return Err(Error::parse(DAY, String::from_utf8_lossy(&instructions), "only L and R allowed"));
        }

        let mut nodes = HashMap::new();
        for line in lines {
            let (name, targets) = line
                .split_once('=')
                .ok_or_else(|| Error::parse(DAY, line, "missing '='"))?;
            let targets = targets.trim().trim_start_matches('(').trim_end_matches(')');
            let (left, right) = targets
                .split_once(',')
                .ok_or_else(|| Error::parse(DAY, line, "missing ','"))?;
            nodes.insert(s!(name.trim()), (s!(left.trim()), s!(right.trim())));
        }
        Ok(Network { instructions, nodes })
    }

    /// Steps from `start` until `done` holds, following the instructions in a loop.
    pub fn steps_until(&self, start: &str, done: impl Fn(&str) -> bool) -> Result<u64> {
        let mut current = start;
        let mut steps = 0u64;
        // a walk longer than this can't reach `done`
        let limit = (self.nodes.len() as u64 + 1) * self.instructions.len() as u64;
        for &turn in self.instructions.iter().cycle() {
            if done(current) {
                return Ok(steps);
            }
            if steps > limit {
                return Err(Error::no_answer(DAY, format!("{start} never reaches its target")));
            }
            let (left, right) = self
                .nodes
                .get(current)
                .ok_or_else(|| Error::parse(DAY, current, "unknown node"))?;
            current = if turn == b'L' { left } else { right };
            steps += 1;
        }
        Err(Error::no_answer(DAY, "no instructions"))
    }
}

pub fn part1(data: &[String]) -> Result<u64> {
    Network::parse(data)?.steps_until("AAA", |n| n == "ZZZ")
}

/// Every ghost walks its own cycle, entered after exactly one loop length in
/// the puzzle inputs, so all meet on the lcm of the first arrivals.
pub fn part2(data: &[String]) -> Result<u64> {
    let network = Network::parse(data)?;
    let mut starts: Vec<&String> = network.nodes.keys().filter(|n| n.ends_with('A')).collect();
    starts.sort();
    let cycles = starts
        .iter()
        .map(|s| network.steps_until(s, |n| n.ends_with('Z')))
        .collect::<Result<Vec<_>>>()?;
    Ok(lcm_all(cycles))
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
