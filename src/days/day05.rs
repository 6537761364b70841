// src/days/day05.rs
// --- Day 5: If You Give A Seed A Fertilizer ---
use crate::days::{parse_nums, Answer, Solution};
use crate::error::{Error, Result};
use crate::io::blocks;

const DAY: u32 = 5;

/// `length` consecutive values starting at `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Range {
    pub start: i64,
    pub length: i64,
}

impl Range {
    pub const fn new(start: i64, length: i64) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> i64 {
        self.start + self.length
    }
}

/// The result of pushing a range through one segment: the mapped parts and
/// the parts the segment does not cover.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Coverage {
    pub covered: Vec<Range>,
    pub uncovered: Vec<Range>,
}

/// One `destination source length` line of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub destination: i64,
    pub source: i64,
    pub length: i64,
}

impl Segment {
    pub const fn new(destination: i64, source: i64, length: i64) -> Self {
        Self { destination, source, length }
    }

    fn delta(&self) -> i64 {
        self.destination - self.source
    }

    pub fn contains(&self, value: i64) -> bool {
        self.source <= value && value < self.source + self.length
    }

    /// Shift a range assumed to lie inside the segment.
    pub fn transform_covered(&self, input: Range) -> Range {
        Range::new(input.start + self.delta(), input.length)
    }

    pub fn transform(&self, input: Range) -> Coverage {
        let source_end = self.source + self.length;
        let input_end = input.end();

        if input_end <= self.source || source_end <= input.start {
            return Coverage { covered: vec![], uncovered: vec![input] };
        }
        let lo = input.start.max(self.source);
        let hi = input_end.min(source_end);

        let mut uncovered = Vec::new();
        if input.start < lo {
            uncovered.push(Range::new(input.start, lo - input.start));
        }
        if hi < input_end {
            uncovered.push(Range::new(hi, input_end - hi));
        }
        Coverage {
            covered: vec![self.transform_covered(Range::new(lo, hi - lo))],
            uncovered,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    pub name: String,
    pub segments: Vec<Segment>,
}

impl Map {
    pub fn transform(&self, value: i64) -> i64 {
        self.segments
            .iter()
            .find(|s| s.contains(value))
            .map_or(value, |s| value + s.delta())
    }

    /// Each segment maps the pieces left over by the previous ones; whatever
    /// no segment covers passes through unchanged.
    pub fn transform_ranges(&self, input: Vec<Range>) -> Vec<Range> {
        let mut pending = input;
        let mut result = Vec::new();
        for segment in &self.segments {
            let mut next = Vec::new();
            for range in pending {
                let coverage = segment.transform(range);
                result.extend(coverage.covered);
                next.extend(coverage.uncovered);
            }
            pending = next;
        }
        result.extend(pending);
        result
    }

    fn parse(lines: &[String]) -> Result<Self> {
        let (head, body) = lines
            .split_first()
            .ok_or_else(|| Error::parse(DAY, "", "empty map"))?;
        let name = head.trim().trim_end_matches("map:").trim().to_string();
        let segments = body
            .iter()
            .map(|line| {
                match parse_nums::<i64>(DAY, line)?.as_slice() {
                    &[d, s, l] => Ok(Segment::new(d, s, l)),
                    _ => Err(Error::parse(DAY, line, "expected three numbers")),
                }
            })
            .collect::<Result<_>>()?;
        Ok(Map { name, segments })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<i64>,
    pub maps: Vec<Map>,
}

impl Almanac {
    pub fn parse(data: &[String]) -> Result<Self> {
        let sections = blocks(data);
        let (first, rest) = sections
            .split_first()
            .ok_or_else(|| Error::parse(DAY, "", "empty almanac"))?;
        let seeds = parse_seeds(&first[0])?;
        let maps = rest.iter().map(|b| Map::parse(b)).collect::<Result<_>>()?;
        Ok(Almanac { seeds, maps })
    }

    pub fn location(&self, seed: i64) -> i64 {
        self.maps.iter().fold(seed, |v, m| m.transform(v))
    }

    pub fn min_location(&self, range: Range) -> Option<i64> {
        self.maps
            .iter()
            .fold(vec![range], |ranges, m| m.transform_ranges(ranges))
            .iter()
            .filter(|r| r.length > 0)
            .map(|r| r.start)
            .min()
    }

    /// Seeds read as `start length` pairs.
    pub fn seed_ranges(&self) -> Vec<Range> {
        self.seeds.chunks_exact(2).map(|c| Range::new(c[0], c[1])).collect()
    }
}

pub fn parse_seeds(line: &str) -> Result<Vec<i64>> {
    let numbers = line
        .strip_prefix("seeds:")
        .ok_or_else(|| Error::parse(DAY, line, "expected 'seeds:'"))?;
    parse_nums(DAY, numbers)
}

pub fn part1(data: &[String]) -> Result<i64> {
    let almanac = Almanac::parse(data)?;
    almanac
        .seeds
        .iter()
        .map(|&s| almanac.location(s))
        .min()
        .ok_or_else(|| Error::no_answer(DAY, "no seeds"))
}

pub fn part2(data: &[String]) -> Result<i64> {
    let almanac = Almanac::parse(data)?;
    almanac
        .seed_ranges()
        .into_iter()
        .filter_map(|r| almanac.min_location(r))
        .min()
        .ok_or_else(|| Error::no_answer(DAY, "no seed ranges"))
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
