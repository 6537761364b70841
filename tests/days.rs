// tests/days.rs
use aoc2023::days::{registered_days, solution};
use aoc2023::io::split_lines;
use aoc2023::{Answer, Error};

#[test]
fn every_day_is_registered() {
    assert_eq!(registered_days(), (1..=25).collect::<Vec<u32>>());
    for day in registered_days() {
        assert!(solution(day).is_some(), "day {day} has no solution");
    }
    assert!(solution(0).is_none());
    assert!(solution(26).is_none());
}

#[test]
fn answers_display() {
    assert_eq!(Answer::from(142u32).to_string(), "142");
    assert_eq!(Answer::from(-3i64).to_string(), "-3");
    assert_eq!(Answer::from(usize::MAX).to_string(), usize::MAX.to_string());
    assert_eq!(Answer::Empty.to_string(), "-");
}

#[test]
fn registered_solution_answers_through_the_trait() {
    let data = split_lines("Time:      7  15   30\nDistance:  9  40  200\n");
    let day6 = solution(6).unwrap();
    assert_eq!(day6.part1(&data).unwrap(), Answer::Number(288));
    assert_eq!(day6.part2(&data).unwrap(), Answer::Number(71503));
}

#[test]
fn day25_has_no_second_puzzle() {
    let day25 = solution(25).unwrap();
    assert_eq!(day25.part2(&[]).unwrap(), Answer::Empty);
}

#[test]
fn garbage_input_is_a_parse_error() {
    let data = split_lines("Time: seven\nDistance: 9\n");
    match solution(6).unwrap().part1(&data) {
        Err(Error::Parse { day, .. }) => assert_eq!(day, 6),
        other => panic!("expected a parse error, got {other:?}"),
    }
}
