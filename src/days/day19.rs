// src/days/day19.rs
// --- Day 19: Aplenty ---
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::days::{parse_num, Answer, Solution};
use crate::error::{Error, Result};
use crate::io::blocks;

const DAY: u32 = 19;
const START: &str = "in";
const MIN_RATING: u64 = 1;
const MAX_RATING: u64 = 4000;

static RATING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([xmas])=(\d+)").expect("static regex"));

fn category(c: &str) -> Option<usize> {
    "xmas".find(c)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Accept,
    Reject,
    Workflow(String),
}

impl Target {
    fn parse(s: &str) -> Self {
        match s {
            "A" => Target::Accept,
            "R" => Target::Reject,
            name => Target::Workflow(s!(name)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub category: usize,
    pub less_than: bool,
    pub value: u64,
    pub target: Target,
}

impl Rule {
    fn matches(&self, part: &Part) -> bool {
        let rating = part.0[self.category];
        if self.less_than { rating < self.value } else { rating > self.value }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workflow {
    pub rules: Vec<Rule>,
    pub fallback: Target,
}

impl Workflow {
    /// `px{a<2006:qkq,m>2090:A,rfg}` into its name and workflow.
    pub fn parse(line: &str) -> Result<(String, Self)> {
        let bad = |why: &str| Error::parse(DAY, line, why);
        let (name, body) = line
            .trim()
            .trim_end_matches('}')
            .split_once('{')
            .ok_or_else(|| bad("expected 'name{...}'"))?;
        let mut steps: Vec<&str> = body.split(',').collect();
        let fallback = Target::parse(steps.pop().ok_or_else(|| bad("empty workflow"))?);

        let rules = steps
            .into_iter()
            .map(|step| {
                let (cond, target) = step.split_once(':').ok_or_else(|| bad("rule without ':'"))?;
                let category = cond.get(..1).and_then(category).ok_or_else(|| bad("bad category"))?;
                let less_than = match cond.get(1..2) {
                    Some("<") => true,
                    Some(">") => false,
                    _ => return Err(bad("expected '<' or '>'")),
                };
                Ok(Rule {
                    category,
                    less_than,
                    value: parse_num(DAY, &cond[2..])?,
                    target: Target::parse(target),
                })
            })
            .collect::<Result<_>>()?;
        Ok((s!(name), Workflow { rules, fallback }))
    }

    fn route(&self, part: &Part) -> &Target {
        self.rules
            .iter()
            .find(|r| r.matches(part))
            .map_or(&self.fallback, |r| &r.target)
    }
}

/// Ratings in `x m a s` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Part(pub [u64; 4]);

impl Part {
    pub fn parse(line: &str) -> Result<Self> {
        let mut ratings = [None; 4];
        for caps in RATING.captures_iter(line) {
            let i = category(&caps[1]).ok_or_else(|| Error::parse(DAY, line, "bad category"))?;
            ratings[i] = Some(parse_num(DAY, &caps[2])?);
        }
        match ratings {
            [Some(x), Some(m), Some(a), Some(s)] => Ok(Part([x, m, a, s])),
            _ => Err(Error::parse(DAY, line, "expected x, m, a and s ratings")),
        }
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

pub struct System {
    pub workflows: HashMap<String, Workflow>,
    pub parts: Vec<Part>,
}

impl System {
    pub fn parse(data: &[String]) -> Result<Self> {
        let sections = blocks(data);
        let workflows: HashMap<String, Workflow> = sections
            .first()
            .map(|b| b.iter().map(|l| Workflow::parse(l)).collect::<Result<_>>())
            .transpose()?
            .unwrap_or_default();
        let parts: Vec<Part> = sections
            .get(1)
            .map(|b| b.iter().map(|l| Part::parse(l)).collect::<Result<_>>())
            .transpose()?
            .unwrap_or_default();
        Ok(System { workflows, parts })
    }

    fn workflow(&self, name: &str) -> Result<&Workflow> {
        self.workflows
            .get(name)
            .ok_or_else(|| Error::parse(DAY, name, "unknown workflow"))
    }

    pub fn accepts(&self, part: &Part) -> Result<bool> {
        let mut current = self.workflow(START)?;
        // every workflow visited at most once on an acyclic system
        for _ in 0..=self.workflows.len() {
            match current.route(part) {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(next) => current = self.workflow(next)?,
            }
        }
        Err(Error::no_answer(DAY, "workflows loop"))
    }

    /// Count rating combinations accepted from `target`, each category
    /// limited to the half-open ranges in `ranges`.
    fn count_accepted(&self, target: &Target, ranges: [(u64, u64); 4], depth: usize) -> Result<u64> {
        if ranges.iter().any(|(lo, hi)| lo >= hi) {
            return Ok(0);
        }
        let workflow = match target {
            Target::Accept => return Ok(ranges.iter().map(|(lo, hi)| hi - lo).product()),
            Target::Reject => return Ok(0),
            Target::Workflow(name) => self.workflow(name)?,
        };
        if depth > self.workflows.len() {
            return Err(Error::no_answer(DAY, "workflows loop"));
        }

        let mut total = 0;
        let mut rest = ranges;
        for rule in &workflow.rules {
            let (lo, hi) = rest[rule.category];
            let (taken, left) = if rule.less_than {
                ((lo, hi.min(rule.value)), (lo.max(rule.value), hi))
            } else {
                ((lo.max(rule.value + 1), hi), (lo, hi.min(rule.value + 1)))
            };
            let mut sent = rest;
            sent[rule.category] = taken;
            total += self.count_accepted(&rule.target, sent, depth + 1)?;
            rest[rule.category] = left;
        }
        total += self.count_accepted(&workflow.fallback, rest, depth + 1)?;
        Ok(total)
    }
}

pub fn part1(data: &[String]) -> Result<u64> {
    let system = System::parse(data)?;
    let mut sum = 0;
    for part in &system.parts {
        if system.accepts(part)? {
            sum += part.total();
        }
    }
    Ok(sum)
}

pub fn part2(data: &[String]) -> Result<u64> {
    let system = System::parse(data)?;
    let full = [(MIN_RATING, MAX_RATING + 1); 4];
    system.count_accepted(&Target::Workflow(s!(START)), full, 0)
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
