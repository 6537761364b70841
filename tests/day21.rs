// tests/day21.rs
use aoc2023::days::day21::{part1, part2, reachable_tiled};
use aoc2023::io::split_lines;

const EXAMPLE: &str = "\
...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........
";

const OPEN: &str = "\
.....
.....
..S..
.....
.....
";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data, 1).unwrap(), 2);
    assert_eq!(part1(&data, 2).unwrap(), 4);
    assert_eq!(part1(&data, 6).unwrap(), 16);
}

#[test]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data, 6).unwrap(), 16);
    assert_eq!(part2(&data, 10).unwrap(), 50);
    assert_eq!(part2(&data, 50).unwrap(), 1594);
    assert_eq!(part2(&data, 100).unwrap(), 6536);
}

#[test]
#[ignore = "slow in debug builds"]
fn part2_example_500_steps() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data, 500).unwrap(), 167004);
}

#[test]
fn open_garden_extrapolates_exactly() {
    // every plot with matching parity inside the diamond: (n + 1)^2
    let data = split_lines(OPEN);
    assert_eq!(reachable_tiled(&data, 22).unwrap(), 23 * 23);
    assert_eq!(reachable_tiled(&data, 1_002).unwrap(), 1_003 * 1_003);
}

#[test]
fn missing_start_is_an_error() {
    assert!(part1(&split_lines("...\n...\n"), 3).is_err());
}
