// tests/day01.rs
use aoc2023::days::day01::{calibration_value1, calibration_value2, part1, part2};
use aoc2023::io::split_lines;

const PART1: &str = "\
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet";

const PART2: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen";

#[test]
fn part1_example() {
    let data = split_lines(PART1);
    assert_eq!(part1(&data).unwrap(), 142);
}

#[test]
fn part2_example() {
    let data = split_lines(PART2);
    assert_eq!(part2(&data).unwrap(), 281);
}

#[test]
fn overlapping_names_both_count() {
    assert_eq!(calibration_value2("eighthree"), 83);
    assert_eq!(calibration_value2("sevenine"), 79);
}

#[test]
fn single_digit_is_first_and_last() {
    assert_eq!(calibration_value1("treb7uchet"), 77);
}

#[test]
fn line_without_digits_is_zero() {
    assert_eq!(calibration_value1("nodigits"), 0);
}
