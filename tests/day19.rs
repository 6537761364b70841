// tests/day19.rs
use aoc2023::days::day19::{part1, part2, Part, System, Target, Workflow};
use aoc2023::io::split_lines;

const EXAMPLE: &str = "\
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), 19114);
}

#[test]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data).unwrap(), 167409079868000);
}

#[test]
fn parts_are_routed_through_workflows() {
    let system = System::parse(&split_lines(EXAMPLE)).unwrap();
    let accepted: Vec<bool> = system.parts.iter().map(|p| system.accepts(p).unwrap()).collect();
    assert_eq!(accepted, vec![true, false, true, false, true]);
}

#[test]
fn workflow_line() {
    let (name, workflow) = Workflow::parse("px{a<2006:qkq,m>2090:A,rfg}").unwrap();
    assert_eq!(name, "px");
    assert_eq!(workflow.rules.len(), 2);
    assert_eq!(workflow.rules[0].category, 2);
    assert!(workflow.rules[0].less_than);
    assert_eq!(workflow.rules[1].target, Target::Accept);
    assert_eq!(workflow.fallback, Target::Workflow("rfg".into()));
}

#[test]
fn part_ratings() {
    let part = Part::parse("{x=787,m=2655,a=1222,s=2876}").unwrap();
    assert_eq!(part, Part([787, 2655, 1222, 2876]));
    assert_eq!(part.total(), 7540);
    assert!(Part::parse("{x=1,m=2}").is_err());
}

#[test]
fn everything_accepted_counts_all_combinations() {
    let data = split_lines("in{A}\n");
    assert_eq!(part2(&data).unwrap(), 4000u64.pow(4));
}
