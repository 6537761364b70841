// src/generator/templates.rs

use super::instructions::format_instructions;

const SOLUTION: &str = r#"// src/days/day{nn}.rs
use crate::days::{Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = {day};

/*
{instructions}
*/

pub fn part1(_data: &[String]) -> Result<i64> {
    Err(Error::NotImplemented { day: DAY, part: 1 })
}

/*

*/

pub fn part2(_data: &[String]) -> Result<i64> {
    Err(Error::NotImplemented { day: DAY, part: 2 })
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
"#;

const TEST: &str = r#"// tests/day{nn}.rs
use aoc2023::config::options::default_inputs_dir;
use aoc2023::days::day{nn}::{part1, part2};
use aoc2023::io::{input_path, read_lines, split_lines};

const EXAMPLE: &str = "\
";

#[test]
#[ignore = "part1 not implemented"]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), -1);
}

#[test]
#[ignore = "part1 not implemented"]
fn part1_input() {
    let data = read_lines(input_path(&default_inputs_dir(), {day})).unwrap();
    assert_eq!(part1(&data).unwrap(), -1);
}

#[test]
#[ignore = "part2 not implemented"]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data).unwrap(), -1);
}

#[test]
#[ignore = "part2 not implemented"]
fn part2_input() {
    let data = read_lines(input_path(&default_inputs_dir(), {day})).unwrap();
    assert_eq!(part2(&data).unwrap(), -1);
}
"#;

fn fill(template: &str, day: u32) -> String {
    template
        .replace("{nn}", &format!("{day:02}"))
        .replace("{day}", &day.to_string())
}

/// Skeleton of `src/days/dayNN.rs` with the instructions embedded.
/// `instructions` is raw text; it is wrapped and indented here.
pub fn solution_template(day: u32, instructions: &str) -> String {
    // instructions go in last so their text is never treated as a placeholder
    fill(SOLUTION, day).replace("{instructions}", &format_instructions(instructions))
}

/// Skeleton of `tests/dayNN.rs`, every test ignored until the day is solved.
pub fn test_template(day: u32) -> String {
    fill(TEST, day)
}
