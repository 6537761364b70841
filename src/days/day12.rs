// src/days/day12.rs
// --- Day 12: Hot Springs ---
use crate::days::{parse_list, Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 12;
const UNFOLD: usize = 5;

/// One line of the condition record: `#` damaged, `.` operational, `?` unknown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub springs: String,
    pub groups: Vec<usize>,
}

impl Row {
    pub fn new(springs: &str, groups: Vec<usize>) -> Self {
        Self { springs: s!(springs), groups }
    }

    pub fn parse(line: &str) -> Result<Self> {
        let (springs, groups) = line
            .trim()
            .split_once(' ')
            .ok_or_else(|| Error::parse(DAY, line, "expected '<springs> <groups>'"))?;
        if !springs.bytes().all(|b| matches!(b, b'#' | b'.' | b'?')) {
            return Err(Error::parse(DAY, line, "unexpected spring symbol"));
        }
        Ok(Row::new(springs, parse_list(DAY, groups, ',')?))
    }

    pub fn unfold(&self) -> Row {
        Row {
            springs: vec![self.springs.as_str(); UNFOLD].join("?"),
            groups: self.groups.repeat(UNFOLD),
        }
    }

    /// Number of ways to fill the `?`s so the damaged runs match `groups`.
    ///
    /// `ways[i][g]`: arrangements of `springs[i..]` using `groups[g..]`.
    /// Filled from the back, one row at a time.
    pub fn count_arrangements(&self) -> u64 {
        let springs = self.springs.as_bytes();
        let groups = &self.groups;
        let (n, m) = (springs.len(), groups.len());

        // damaged_run[i]: length of the run of possibly-damaged cells from i
        let mut damaged_run = vec![0usize; n + 1];
        for i in (0..n).rev() {
            damaged_run[i] = if springs[i] == b'.' { 0 } else { damaged_run[i + 1] + 1 };
        }

        let mut ways = vec![vec![0u64; m + 1]; n + 2];
        ways[n][m] = 1;
        ways[n + 1][m] = 1;
        for i in (0..n).rev() {
            for g in (0..=m).rev() {
                let mut total = 0;
                if springs[i] != b'#' {
                    total += ways[i + 1][g];
                }
                if g < m && springs[i] != b'.' {
                    let len = groups[g];
                    let fits = damaged_run[i] >= len;
                    let separated = i + len == n || springs.get(i + len) != Some(&b'#');
                    if fits && separated {
                        // skip the group and the operational cell after it
                        total += ways[(i + len + 1).min(n + 1)][g + 1];
                    }
                }
                ways[i][g] = total;
            }
        }
        ways[0][0]
    }
}

fn rows(data: &[String]) -> Result<Vec<Row>> {
    data.iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Row::parse(l))
        .collect()
}

pub fn part1(data: &[String]) -> Result<u64> {
    Ok(rows(data)?.iter().map(Row::count_arrangements).sum())
}

pub fn part2(data: &[String]) -> Result<u64> {
    Ok(rows(data)?.iter().map(|r| r.unfold().count_arrangements()).sum())
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
