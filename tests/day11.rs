// tests/day11.rs
use aoc2023::days::day11::{galaxies, part1, sum_distances};
use aoc2023::io::split_lines;

const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), 374);
}

#[test]
fn larger_expansion_factors() {
    let data = split_lines(EXAMPLE);
    assert_eq!(sum_distances(&data, 10), 1030);
    assert_eq!(sum_distances(&data, 100), 8410);
}

#[test]
fn galaxies_are_found() {
    let data = split_lines(EXAMPLE);
    assert_eq!(galaxies(&data).len(), 9);
}
