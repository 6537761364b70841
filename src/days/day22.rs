// src/days/day22.rs
// --- Day 22: Sand Slabs ---
use std::collections::HashMap;

use crate::days::{parse_list, Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 22;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brick {
    pub min: [i64; 3],
    pub max: [i64; 3],
}

impl Brick {
    /// `1,0,1~1,2,1`
    pub fn parse(line: &str) -> Result<Self> {
        let (a, b) = line
            .split_once('~')
            .ok_or_else(|| Error::parse(DAY, line, "expected 'x,y,z~x,y,z'"))?;
        let corner = |s: &str| -> Result<[i64; 3]> {
            parse_list::<i64>(DAY, s, ',')?
                .try_into()
                .map_err(|_| Error::parse(DAY, line, "expected three coordinates"))
        };
        let (a, b) = (corner(a)?, corner(b)?);
        Ok(Brick {
            min: [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])],
            max: [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])],
        })
    }

    fn footprint(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        (self.min[0]..=self.max[0]).flat_map(move |x| (self.min[1]..=self.max[1]).map(move |y| (x, y)))
    }
}

/// The bricks after falling, and for each the bricks directly below it.
pub struct Stack {
    pub bricks: Vec<Brick>,
    pub supported_by: Vec<Vec<usize>>,
    pub supports: Vec<Vec<usize>>,
}

impl Stack {
    pub fn settle(mut bricks: Vec<Brick>) -> Self {
        bricks.sort_by_key(|b| b.min[2]);
        // (top z, brick) per column
        let mut tops: HashMap<(i64, i64), (i64, usize)> = HashMap::new();
        let mut supported_by = vec![Vec::new(); bricks.len()];
        let mut supports = vec![Vec::new(); bricks.len()];

        for (i, brick) in bricks.iter_mut().enumerate() {
            let floor = brick
                .footprint()
                .filter_map(|c| tops.get(&c).map(|t| t.0))
                .max()
                .unwrap_or(0);
            let mut below: Vec<usize> = brick
                .footprint()
                .filter_map(|c| tops.get(&c).filter(|t| t.0 == floor).map(|t| t.1))
                .collect();
            below.sort_unstable();
            below.dedup();

            let drop = brick.min[2] - (floor + 1);
            brick.min[2] -= drop;
            brick.max[2] -= drop;
            for c in brick.footprint() {
                tops.insert(c, (brick.max[2], i));
            }
            for &b in &below {
                supports[b].push(i);
            }
            supported_by[i] = below;
        }
        Stack { bricks, supported_by, supports }
    }

    /// Bricks that can go without anything else moving.
    pub fn safe_to_remove(&self) -> usize {
        (0..self.bricks.len())
            .filter(|&i| self.supports[i].iter().all(|&j| self.supported_by[j].len() > 1))
            .count()
    }

    /// Other bricks that fall when brick `i` is removed.
    pub fn chain_reaction(&self, i: usize) -> usize {
        let mut fallen = vec![false; self.bricks.len()];
        fallen[i] = true;
        let mut count = 0;
        // bricks are ordered by height, so supporters are decided first
        for j in i + 1..self.bricks.len() {
            let below = &self.supported_by[j];
            if !below.is_empty() && below.iter().all(|&b| fallen[b]) {
                fallen[j] = true;
                count += 1;
            }
        }
        count
    }
}

fn stack(data: &[String]) -> Result<Stack> {
    let bricks = data
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Brick::parse(l))
        .collect::<Result<_>>()?;
    Ok(Stack::settle(bricks))
}

pub fn part1(data: &[String]) -> Result<usize> {
    Ok(stack(data)?.safe_to_remove())
}

pub fn part2(data: &[String]) -> Result<usize> {
    let stack = stack(data)?;
    Ok((0..stack.bricks.len()).map(|i| stack.chain_reaction(i)).sum())
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
