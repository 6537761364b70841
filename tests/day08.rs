// tests/day08.rs
use aoc2023::days::day08::{part1, part2};
use aoc2023::io::split_lines;

const EXAMPLE1: &str = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

const EXAMPLE2: &str = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

const GHOSTS: &str = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

#[test]
fn part1_examples() {
    assert_eq!(part1(&split_lines(EXAMPLE1)).unwrap(), 2);
    assert_eq!(part1(&split_lines(EXAMPLE2)).unwrap(), 6);
}

#[test]
fn part2_example() {
    assert_eq!(part2(&split_lines(GHOSTS)).unwrap(), 6);
}

#[test]
fn unreachable_target_is_an_error() {
    let data = split_lines("L\n\nAAA = (BBB, BBB)\nBBB = (BBB, BBB)\n");
    assert!(part1(&data).is_err());
}
