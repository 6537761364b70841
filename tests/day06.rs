// tests/day06.rs
use aoc2023::days::day06::{parse_races, parse_single_race, part1, part2, Race};
use aoc2023::io::split_lines;

const EXAMPLE: &str = "\
Time:      7  15   30
Distance:  9  40  200
";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), 288);
}

#[test]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data).unwrap(), 71503);
}

#[test]
fn races_are_read_by_column() {
    let data = split_lines(EXAMPLE);
    let races = parse_races(&data).unwrap();
    assert_eq!(races, vec![Race::new(7, 9), Race::new(15, 40), Race::new(30, 200)]);
    assert_eq!(parse_single_race(&data).unwrap(), Race::new(71530, 940200));
}

#[test]
fn ways_per_race() {
    assert_eq!(Race::new(7, 9).ways_to_win(), 4);
    assert_eq!(Race::new(15, 40).ways_to_win(), 8);
    // 10 * 20 ties the record, which is not a win
    assert_eq!(Race::new(30, 200).ways_to_win(), 9);
    assert_eq!(Race::new(3, 100).ways_to_win(), 0);
}
