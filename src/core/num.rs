// src/core/num.rs
use std::str::FromStr;

pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 { return 0; }
    a / gcd(a, b) * b
}

pub fn lcm_all(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(1, lcm)
}

/// Every integer in `s`, separated by whitespace. `None` if any token is not a number.
pub fn parse_numbers<T: FromStr>(s: &str) -> Option<Vec<T>> {
    s.split_whitespace().map(|t| t.parse().ok()).collect()
}

/// All (possibly signed) integers found in `s`, ignoring any other text.
pub fn extract_integers(s: &str) -> Vec<i64> {
    let mut out = Vec::new();
    let mut cur = String::new();
    for ch in s.chars() {
        if ch.is_ascii_digit() || (ch == '-' && cur.is_empty()) {
            cur.push(ch);
        } else {
            if let Ok(v) = cur.parse() { out.push(v); }
            cur.clear();
            if ch == '-' { cur.push(ch); }
        }
    }
    if let Ok(v) = cur.parse() { out.push(v); }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcm_of_cycle_lengths() {
        assert_eq!(lcm_all([2, 3, 4]), 12);
        assert_eq!(gcd(48, 18), 6);
    }

    #[test]
    fn integers_with_signs_and_noise() {
        assert_eq!(extract_integers("19, 13, 30 @ -2,  1, -2"), vec![19, 13, 30, -2, 1, -2]);
        assert_eq!(extract_integers("x=787,m=2655"), vec![787, 2655]);
        assert_eq!(extract_integers("a-b 3 -4"), vec![3, -4]);
    }
}
