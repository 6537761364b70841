// tests/runner.rs
use std::fs;
use std::path::Path;
use std::time::Duration;

use aoc2023::config::options::{DaySelector, PartSelector, RunOptions};
use aoc2023::progress::{NullProgress, Progress};
use aoc2023::runner::{self, resolve_days, run_day, run_pool, DayReport};
use aoc2023::{Answer, Error};

const DAY6: &str = "Time:      7  15   30\nDistance:  9  40  200\n";
const DAY9: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n";

fn inputs(dir: &Path) {
    fs::write(dir.join("day06.txt"), DAY6).unwrap();
    fs::write(dir.join("day09.txt"), DAY9).unwrap();
}

fn options(dir: &Path, days: DaySelector) -> RunOptions {
    RunOptions {
        days,
        parts: PartSelector::Both,
        inputs_dir: dir.to_path_buf(),
        workers: 2,
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<u32>,
    failed: Vec<u32>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, _msg: &str) {}
    fn item_done(&mut self, day: u32) {
        self.done.push(day);
    }
    fn item_failed(&mut self, day: u32, _msg: &str) {
        self.failed.push(day);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn single_day_answers() {
    let tmp = tempfile::tempdir().unwrap();
    inputs(tmp.path());

    let report = run_day(6, tmp.path(), PartSelector::Both).unwrap();
    assert_eq!(report.part1, Some(Answer::Number(288)));
    assert_eq!(report.part2, Some(Answer::Number(71503)));
}

#[test]
fn unrequested_part_is_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    inputs(tmp.path());

    let report = run_day(9, tmp.path(), PartSelector::Two).unwrap();
    assert_eq!(report.part1, None);
    assert_eq!(report.part2, Some(Answer::Number(2)));
}

#[test]
fn days_run_in_parallel_and_come_back_sorted() {
    let tmp = tempfile::tempdir().unwrap();
    inputs(tmp.path());

    let mut rec = Recorder::default();
    let summary = runner::run(
        &options(tmp.path(), DaySelector::Days(vec![9, 6])),
        Some(&mut rec),
    )
    .unwrap();

    assert!(summary.is_success());
    let days: Vec<u32> = summary.reports.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![6, 9]);
    assert_eq!(summary.reports[1].part1, Some(Answer::Number(114)));

    assert_eq!(rec.total, 2);
    rec.done.sort_unstable();
    assert_eq!(rec.done, vec![6, 9]);
    assert!(rec.finished);
}

#[test]
fn missing_input_fails_only_that_day() {
    let tmp = tempfile::tempdir().unwrap();
    inputs(tmp.path());

    let mut rec = Recorder::default();
    let summary = runner::run(
        &options(tmp.path(), DaySelector::Days(vec![1, 6])),
        Some(&mut rec),
    )
    .unwrap();

    assert!(!summary.is_success());
    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.reports[0].day, 6);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].day, 1);
    assert!(summary.failures[0].message.contains("day01.txt"));
    assert_eq!(rec.failed, vec![1]);
}

#[test]
fn unknown_day_is_rejected_up_front() {
    let tmp = tempfile::tempdir().unwrap();
    let err = runner::run(&options(tmp.path(), DaySelector::One(26)), None).unwrap_err();
    assert!(matches!(err, Error::UnknownDay(26)));
}

#[test]
fn selection_resolves_against_the_registry() {
    let tmp = tempfile::tempdir().unwrap();
    let all = resolve_days(&options(tmp.path(), DaySelector::All)).unwrap();
    assert_eq!(all, (1..=25).collect::<Vec<u32>>());

    let some = resolve_days(&options(tmp.path(), DaySelector::Days(vec![3, 1, 3]))).unwrap();
    assert_eq!(some, vec![1, 3]);
}

#[test]
fn empty_selection_runs_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut rec = Recorder::default();
    let summary = runner::run(
        &options(tmp.path(), DaySelector::Days(Vec::new())),
        Some(&mut rec),
    )
    .unwrap();
    assert!(summary.is_success());
    assert!(summary.reports.is_empty());
    assert!(rec.finished);
}

#[test]
fn null_progress_is_accepted() {
    let tmp = tempfile::tempdir().unwrap();
    inputs(tmp.path());
    let summary = runner::run(&options(tmp.path(), DaySelector::One(6)), Some(&mut NullProgress)).unwrap();
    assert_eq!(summary.reports.len(), 1);
}

#[test]
fn panicking_day_is_reported_as_failed() {
    let mut rec = Recorder::default();
    let summary = run_pool(vec![1, 2, 3], 2, Some(&mut rec), |day| {
        if day == 2 {
            panic!("bad input for day {day}");
        }
        Ok(DayReport { day, part1: None, part2: None, elapsed: Duration::ZERO })
    });

    assert!(!summary.is_success());
    let days: Vec<u32> = summary.reports.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![1, 3]);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].day, 2);
    assert!(summary.failures[0].message.contains("bad input for day 2"));
    assert_eq!(rec.failed, vec![2]);
    assert!(rec.finished);
}

#[test]
fn malformed_input_fails_the_day_instead_of_vanishing() {
    let tmp = tempfile::tempdir().unwrap();
    inputs(tmp.path());
    fs::write(tmp.path().join("day18.txt"), "R 6 (#\u{e9}\u{e9}\u{e9})\n").unwrap();

    let summary = runner::run(&options(tmp.path(), DaySelector::Days(vec![6, 18])), None).unwrap();
    assert!(!summary.is_success());
    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.failures[0].day, 18);
}
