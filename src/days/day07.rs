// src/days/day07.rs
// --- Day 7: Camel Cards ---
use std::cmp::Ordering;

use crate::days::{parse_num, Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 7;

const ORDER_PART1: &str = "23456789TJQKA";
const ORDER_PART2: &str = "J23456789TQKA";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classify from the card counts, sorted descending.
    fn from_counts(counts: &[u32]) -> Self {
        match counts {
            [5, ..]    => HandType::FiveOfAKind,
            [4, ..]    => HandType::FourOfAKind,
            [3, 2, ..] => HandType::FullHouse,
            [3, ..]    => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..]    => HandType::OnePair,
            _          => HandType::HighCard,
        }
    }

    pub fn of(cards: &str) -> Self {
        Self::from_counts(&counts(cards, false))
    }
}

/// Card counts in descending order; jokers are optionally left out.
fn counts(cards: &str, skip_jokers: bool) -> Vec<u32> {
    let mut tally: Vec<(char, u32)> = Vec::new();
    for c in cards.chars().filter(|&c| !(skip_jokers && c == 'J')) {
        match tally.iter_mut().find(|(k, _)| *k == c) {
            Some((_, n)) => *n += 1,
            None => tally.push((c, 1)),
        }
    }
    let mut counts: Vec<u32> = tally.into_iter().map(|(_, n)| n).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    pub cards: String,
    pub bid: u64,
    pub kind: HandType,
}

impl Hand {
    pub fn new(cards: &str, bid: u64, kind: HandType) -> Self {
        Self { cards: s!(cards), bid, kind }
    }

    pub fn parse(line: &str) -> Result<Self> {
        let (cards, bid) = line
            .split_once(' ')
            .ok_or_else(|| Error::parse(DAY, line, "expected '<cards> <bid>'"))?;
        if cards.len() != 5 || !cards.chars().all(|c| ORDER_PART1.contains(c)) {
            return Err(Error::parse(DAY, line, "bad cards"));
        }
        Ok(Hand::new(cards, parse_num(DAY, bid)?, HandType::of(cards)))
    }

    /// Jokers join the largest group, which always gives the strongest hand.
    pub fn jokerize(&self) -> Hand {
        let jokers = self.cards.chars().filter(|&c| c == 'J').count() as u32;
        let mut counts = counts(&self.cards, true);
        match counts.first_mut() {
            Some(top) => *top += jokers,
            None => counts.push(jokers),
        }
        Hand { kind: HandType::from_counts(&counts), ..self.clone() }
    }

    fn compare_with(&self, other: &Hand, order: &str) -> Ordering {
        let strength = |c: char| order.find(c).unwrap_or(0);
        self.kind.cmp(&other.kind).then_with(|| {
            self.cards
                .chars()
                .map(strength)
                .cmp(other.cards.chars().map(strength))
        })
    }

    pub fn cmp_part1(&self, other: &Hand) -> Ordering {
        self.compare_with(other, ORDER_PART1)
    }

    pub fn cmp_part2(&self, other: &Hand) -> Ordering {
        self.compare_with(other, ORDER_PART2)
    }
}

fn hands(data: &[String]) -> Result<Vec<Hand>> {
    data.iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Hand::parse(l.trim()))
        .collect()
}

fn winnings(hands: &[Hand]) -> u64 {
    hands.iter().enumerate().map(|(rank, h)| (rank as u64 + 1) * h.bid).sum()
}

pub fn part1(data: &[String]) -> Result<u64> {
    let mut hands = hands(data)?;
    hands.sort_by(Hand::cmp_part1);
    Ok(winnings(&hands))
}

pub fn part2(data: &[String]) -> Result<u64> {
    let mut hands: Vec<Hand> = hands(data)?.iter().map(Hand::jokerize).collect();
    hands.sort_by(Hand::cmp_part2);
    Ok(winnings(&hands))
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
