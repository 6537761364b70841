// tests/day12.rs
use aoc2023::days::day12::{part1, part2, Row};
use aoc2023::io::split_lines;

const EXAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), 21);
}

#[test]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data).unwrap(), 525152);
}

#[test]
fn arrangements_per_row() {
    let rows: Vec<Row> = split_lines(EXAMPLE).iter().map(|l| Row::parse(l).unwrap()).collect();
    let counts: Vec<u64> = rows.iter().map(Row::count_arrangements).collect();
    assert_eq!(counts, vec![1, 4, 1, 1, 4, 10]);

    let unfolded: Vec<u64> = rows.iter().map(|r| r.unfold().count_arrangements()).collect();
    assert_eq!(unfolded, vec![1, 16384, 1, 16, 2500, 506250]);
}

#[test]
fn unfold_joins_with_unknowns() {
    let row = Row::new(".#", vec![1]);
    let unfolded = row.unfold();
    assert_eq!(unfolded.springs, ".#?.#?.#?.#?.#");
    assert_eq!(unfolded.groups, vec![1, 1, 1, 1, 1]);
}

#[test]
fn impossible_row_has_no_arrangement() {
    assert_eq!(Row::new("#.#", vec![3]).count_arrangements(), 0);
}
