// src/days/day04.rs
// --- Day 4: Scratchcards ---
use std::collections::HashSet;

use crate::days::{parse_nums, Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub winning: HashSet<u32>,
    pub have: Vec<u32>,
}

impl Card {
    pub fn parse(line: &str) -> Result<Self> {
        let (head, numbers) = line
            .split_once(':')
            .ok_or_else(|| Error::parse(DAY, line, "missing ':'"))?;
        let id = parse_nums::<u32>(DAY, head.trim_start_matches("Card"))?
            .first()
            .copied()
            .ok_or_else(|| Error::parse(DAY, line, "missing card id"))?;
        let (winning, have) = numbers
            .split_once('|')
            .ok_or_else(|| Error::parse(DAY, line, "missing '|'"))?;
        Ok(Card {
            id,
            winning: parse_nums(DAY, winning)?.into_iter().collect(),
            have: parse_nums(DAY, have)?,
        })
    }

    pub fn matches(&self) -> usize {
        self.have.iter().filter(|n| self.winning.contains(n)).count()
    }

    /// One point for the first match, doubled for every further one.
    pub fn points(&self) -> Result<u64> {
        match self.matches() {
            0 => Ok(0),
            n => u32::try_from(n - 1)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .ok_or_else(|| Error::no_answer(DAY, format!("card {} scores too many points", self.id))),
        }
    }
}

fn cards(data: &[String]) -> Result<Vec<Card>> {
    data.iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Card::parse(l))
        .collect()
}

fn overflow() -> Error {
    Error::no_answer(DAY, "total does not fit in 64 bits")
}

pub fn part1(data: &[String]) -> Result<u64> {
    cards(data)?
        .iter()
        .try_fold(0u64, |sum, card| sum.checked_add(card.points()?).ok_or_else(overflow))
}

/// Each card wins copies of the next `matches` cards; count every card held.
pub fn part2(data: &[String]) -> Result<u64> {
    let cards = cards(data)?;
    let mut copies = vec![1u64; cards.len()];
    for (i, card) in cards.iter().enumerate() {
        let won = card.matches();
        for j in i + 1..(i + 1 + won).min(cards.len()) {
            copies[j] = copies[j].checked_add(copies[i]).ok_or_else(overflow)?;
        }
    }
    copies.iter().try_fold(0u64, |sum, &c| sum.checked_add(c).ok_or_else(overflow))
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
