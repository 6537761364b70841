// tests/day13.rs
use aoc2023::days::day13::{part1, part2, summarize};
use aoc2023::io::{blocks, split_lines};
use aoc2023::Error;

const EXAMPLE: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..###
#.##..##.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), 405);
}

#[test]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data).unwrap(), 400);
}

#[test]
fn each_pattern_on_its_own() {
    let data = split_lines(EXAMPLE);
    let patterns = blocks(&data);
    assert_eq!(summarize(patterns[0], 0), Some(5));
    assert_eq!(summarize(patterns[1], 0), Some(400));
    assert_eq!(summarize(patterns[0], 1), Some(300));
    assert_eq!(summarize(patterns[1], 1), Some(100));
}

#[test]
fn pattern_without_mirror_has_no_answer() {
    let data = split_lines("#.\n..\n");
    assert!(matches!(part1(&data), Err(Error::NoAnswer { day: 13, .. })));
}
