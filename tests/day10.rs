// tests/day10.rs
use aoc2023::days::day10::{part1, part2, PipeLoop};
use aoc2023::io::split_lines;

const SIMPLE: &str = "\
-L|F7
7S-7|
L|7||
-L-J|
L|-JF
";

const COMPLEX: &str = "\
7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
";

const ENCLOSED: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

const SQUEEZED: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

#[test]
fn part1_examples() {
    assert_eq!(part1(&split_lines(SIMPLE)).unwrap(), 4);
    assert_eq!(part1(&split_lines(COMPLEX)).unwrap(), 8);
}

#[test]
fn part2_examples() {
    assert_eq!(part2(&split_lines(ENCLOSED)).unwrap(), 4);
    assert_eq!(part2(&split_lines(SQUEEZED)).unwrap(), 8);
}

#[test]
fn loop_length_ignores_stray_pipes() {
    let pipe_loop = PipeLoop::find(&split_lines(SIMPLE)).unwrap();
    assert_eq!(pipe_loop.len(), 8);
}

#[test]
fn missing_start_is_an_error() {
    assert!(part1(&split_lines("F7\nLJ\n")).is_err());
}
