// tests/generator.rs
use std::fs;
use std::path::Path;

use aoc2023::config::consts::MAX_LINE_LENGTH;
use aoc2023::config::options::GenerateOptions;
use aoc2023::generator::{
    self, extract_instructions, format_instructions, register_module, solution_template,
    test_template,
};
use aoc2023::Error;

const REGISTRY: &str = "\
mod helpers;

days! {
    1 => day01,
}
";

fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("src/days")).unwrap();
    fs::write(root.join("src/days/mod.rs"), REGISTRY).unwrap();
}

fn offline(root: &Path, day: u32) -> GenerateOptions {
    GenerateOptions {
        day,
        root: root.to_path_buf(),
        offline: true,
        fetch_input: false,
        session: None,
    }
}

#[test]
fn solution_template_names_the_day() {
    let src = solution_template(7, "Camel Cards");
    assert!(src.starts_with("// src/days/day07.rs\n"));
    assert!(src.contains("const DAY: u32 = 7;"));
    assert!(src.contains("    Camel Cards\n"));
    assert!(src.contains("Err(Error::NotImplemented { day: DAY, part: 1 })"));
    assert!(src.contains("Err(Error::NotImplemented { day: DAY, part: 2 })"));
    assert!(src.contains("impl Solution for Puzzle"));
    assert!(!src.contains("{nn}") && !src.contains("{instructions}"));
}

#[test]
fn instructions_with_braces_are_not_placeholders() {
    let src = solution_template(3, "literal {day} and {nn}");
    assert!(src.contains("    literal {day} and {nn}"));
}

#[test]
fn test_template_is_ignored_until_solved() {
    let src = test_template(12);
    assert!(src.starts_with("// tests/day12.rs\n"));
    assert!(src.contains("use aoc2023::days::day12::{part1, part2};"));
    assert!(src.contains("input_path(&default_inputs_dir(), 12)"));
    assert_eq!(src.matches("#[ignore").count(), 4);
}

#[test]
fn instructions_are_wrapped_and_indented() {
    let long = "word ".repeat(60);
    let text = format!("{long}\n\nshort line");
    let out = format_instructions(&text);
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines.len() > 3);
    for line in &lines {
        assert!(line.len() <= MAX_LINE_LENGTH, "too long: {line:?}");
        assert!(line.is_empty() || line.starts_with("    "));
    }
    assert!(lines.contains(&""));
    assert_eq!(lines.last(), Some(&"    short line"));
}

#[test]
fn instructions_cannot_close_the_comment() {
    let out = format_instructions("evil */ text");
    assert!(!out.contains("*/"));
}

#[test]
fn instructions_come_from_the_first_article() {
    let page = "<html><body><article><h2>--- Day 1: Trebuchet?! ---</h2>\
        <p>Something is   wrong.</p></article><article><p>part two</p></article></body></html>";
    let text = extract_instructions(page).unwrap();
    assert!(text.starts_with("--- Day 1: Trebuchet?! ---\nSomething is wrong."));
    assert!(!text.contains("part two"));
    assert_eq!(extract_instructions("<p>no article</p>"), None);
}

#[test]
fn register_inserts_once() {
    let updated = register_module(REGISTRY, 2).unwrap();
    assert!(updated.contains("    1 => day01,\n    2 => day02,\n}"));
    assert_eq!(register_module(&updated, 2), None);
    assert_eq!(register_module(REGISTRY, 1), None);
    assert_eq!(register_module("fn main() {}", 2), None);
}

#[test]
fn generate_offline_writes_everything() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    scaffold(root);

    let generated = generator::generate(&offline(root, 9)).unwrap();
    assert_eq!(generated.day, 9);
    assert!(generated.registered);
    assert!(!generated.input_downloaded);
    assert_eq!(generated.message(), "Enjoy your newly created day 9");

    let solution = fs::read_to_string(root.join("src/days/day09.rs")).unwrap();
    assert!(solution.contains("Sorry, no instructions found for day 9"));
    assert!(root.join("tests/day09.rs").is_file());

    let input = root.join("inputs/day09.txt");
    assert_eq!(generated.input.as_deref(), Some(input.as_path()));
    assert_eq!(fs::read_to_string(&input).unwrap(), "");

    let registry = fs::read_to_string(root.join("src/days/mod.rs")).unwrap();
    assert!(registry.contains("    9 => day09,"));
}

#[test]
fn generate_keeps_an_existing_input() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    scaffold(root);
    fs::create_dir_all(root.join("inputs")).unwrap();
    fs::write(root.join("inputs/day04.txt"), "Card 1: 1 | 1\n").unwrap();

    let generated = generator::generate(&offline(root, 4)).unwrap();
    assert_eq!(generated.input, None);
    assert_eq!(
        fs::read_to_string(root.join("inputs/day04.txt")).unwrap(),
        "Card 1: 1 | 1\n"
    );
}

#[test]
fn existing_day_is_refused() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    scaffold(root);

    generator::generate(&offline(root, 5)).unwrap();
    let before = fs::read_to_string(root.join("src/days/day05.rs")).unwrap();

    let err = generator::generate(&offline(root, 5)).unwrap_err();
    assert!(matches!(err, Error::DayExists(5)));
    assert_eq!(err.to_string(), "Sorry, day 5 already exists");
    assert_eq!(fs::read_to_string(root.join("src/days/day05.rs")).unwrap(), before);
}

#[test]
fn days_outside_december_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold(tmp.path());
    for day in [0, 26] {
        let err = generator::generate(&offline(tmp.path(), day)).unwrap_err();
        assert!(matches!(err, Error::InvalidDay(d) if d == day));
    }
    assert!(!tmp.path().join("tests").exists());
}

#[test]
fn missing_registry_is_a_file_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = generator::generate(&offline(tmp.path(), 2)).unwrap_err();
    assert!(matches!(err, Error::File { .. }));
    assert!(!tmp.path().join("src/days/day02.rs").exists());
    assert!(!tmp.path().join("tests/day02.rs").exists());
    assert!(!tmp.path().join("inputs/day02.txt").exists());
}

#[test]
fn retry_after_fixing_the_registry_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    generator::generate(&offline(tmp.path(), 2)).unwrap_err();

    scaffold(tmp.path());
    let generated = generator::generate(&offline(tmp.path(), 2)).unwrap();
    assert!(generated.registered);
    let registry = fs::read_to_string(tmp.path().join("src/days/mod.rs")).unwrap();
    assert!(registry.contains("    2 => day02,"));
}
