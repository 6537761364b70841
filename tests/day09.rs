// tests/day09.rs
use aoc2023::days::day09::{extrapolate, extrapolate_back, part1, part2};
use aoc2023::io::split_lines;

const EXAMPLE: &str = "\
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), 114);
}

#[test]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data).unwrap(), 2);
}

#[test]
fn single_histories() {
    assert_eq!(extrapolate(&[0, 3, 6, 9, 12, 15]), 18);
    assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), 68);
    assert_eq!(extrapolate_back(&[10, 13, 16, 21, 30, 45]), 5);
}
