// tests/day15.rs
use aoc2023::days::day15::{hash, part1, part2, steps, Boxes, Operation};
use aoc2023::io::split_lines;

const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), 1320);
}

#[test]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data).unwrap(), 145);
}

#[test]
fn hash_of_known_strings() {
    assert_eq!(hash("HASH"), 52);
    assert_eq!(hash("rn=1"), 30);
    assert_eq!(hash("rn"), 0);
    assert_eq!(hash("qp"), 1);
}

#[test]
fn sequence_may_wrap_lines() {
    let data = split_lines("rn=1,cm\n-,qp=3\n");
    assert_eq!(steps(&data), vec!["rn=1", "cm-", "qp=3"]);
}

#[test]
fn insert_replaces_same_label() {
    let mut boxes = Boxes::default();
    boxes.apply(Operation::parse("rn=1").unwrap());
    boxes.apply(Operation::parse("rn=4").unwrap());
    assert_eq!(boxes.focusing_power(), 4);
    boxes.apply(Operation::parse("rn-").unwrap());
    assert_eq!(boxes.focusing_power(), 0);
}

#[test]
fn operations_parse() {
    assert_eq!(Operation::parse("cm-").unwrap(), Operation::Remove("cm".into()));
    assert_eq!(Operation::parse("qp=3").unwrap(), Operation::Insert("qp".into(), 3));
    assert!(Operation::parse("qp").is_err());
}
