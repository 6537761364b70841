// tests/day07.rs
use aoc2023::days::day07::{part1, part2, Hand, HandType};
use aoc2023::io::split_lines;

const EXAMPLE: &str = "\
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

#[test]
fn part1_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part1(&data).unwrap(), 6440);
}

#[test]
fn part2_example() {
    let data = split_lines(EXAMPLE);
    assert_eq!(part2(&data).unwrap(), 5905);
}

#[test]
fn hand_types() {
    assert_eq!(HandType::of("32T3K"), HandType::OnePair);
    assert_eq!(HandType::of("KK677"), HandType::TwoPair);
    assert_eq!(HandType::of("T55J5"), HandType::ThreeOfAKind);
    assert_eq!(HandType::of("23332"), HandType::FullHouse);
    assert_eq!(HandType::of("AA8AA"), HandType::FourOfAKind);
    assert_eq!(HandType::of("AAAAA"), HandType::FiveOfAKind);
    assert_eq!(HandType::of("23456"), HandType::HighCard);
}

#[test]
fn jokers_upgrade_the_hand() {
    let hand = Hand::parse("KTJJT 220").unwrap();
    assert_eq!(hand.kind, HandType::TwoPair);
    assert_eq!(hand.jokerize().kind, HandType::FourOfAKind);
    assert_eq!(Hand::parse("JJJJJ 1").unwrap().jokerize().kind, HandType::FiveOfAKind);
}

#[test]
fn joker_is_weakest_when_breaking_ties() {
    let a = Hand::parse("JKKK2 1").unwrap().jokerize();
    let b = Hand::parse("QQQQ2 1").unwrap().jokerize();
    assert!(a.cmp_part2(&b).is_lt());
    assert!(a.cmp_part1(&b).is_lt());
}

#[test]
fn bad_cards_are_rejected() {
    assert!(Hand::parse("32X3K 765").is_err());
}
