// tests/day17.rs
use aoc2023::days::day17::{min_heat_loss, part1, part2, Crucible, ULTRA};
use aoc2023::io::split_lines;

const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

const UNFORTUNATE: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991
";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), 102);
}

#[test]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data).unwrap(), 94);
}

#[test]
fn ultra_crucible_must_run_four() {
    let data = split_lines(UNFORTUNATE);
    assert_eq!(min_heat_loss(&data, ULTRA).unwrap(), 71);
}

#[test]
fn single_step_crucible_walks_straight_lines() {
    let data = split_lines("19\n11\n");
    let free = Crucible { min_run: 1, max_run: 10 };
    assert_eq!(min_heat_loss(&data, free).unwrap(), 2);
}

#[test]
fn non_digit_is_a_parse_error() {
    assert!(part1(&split_lines("12\n3x\n")).is_err());
}
