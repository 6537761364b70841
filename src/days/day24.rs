// src/days/day24.rs
// --- Day 24: Never Tell Me The Odds ---
use crate::core::num::extract_integers;
use crate::days::{Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 24;
pub const AREA_MIN: i64 = 200_000_000_000_000;
pub const AREA_MAX: i64 = 400_000_000_000_000;
/// Rock velocities tried on each horizontal axis.
const VELOCITY_RANGE: i64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hailstone {
    pub pos: [i128; 3],
    pub vel: [i128; 3],
}

impl Hailstone {
    /// `19, 13, 30 @ -2,  1, -2`
    pub fn parse(line: &str) -> Result<Self> {
        match extract_integers(line)[..] {
            [px, py, pz, vx, vy, vz] => Ok(Hailstone {
                pos: [px, py, pz].map(i128::from),
                vel: [vx, vy, vz].map(i128::from),
            }),
            _ => Err(Error::parse(DAY, line, "expected 'px, py, pz @ vx, vy, vz'")),
        }
    }

    /// This stone seen from something moving at `v` in the XY plane.
    fn relative(&self, v: [i128; 2]) -> Hailstone {
        let mut h = *self;
        h.vel[0] -= v[0];
        h.vel[1] -= v[1];
        h
    }
}

pub fn hailstones(data: &[String]) -> Result<Vec<Hailstone>> {
    data.iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Hailstone::parse(l))
        .collect()
}

/// Where the XY paths of `a` and `b` cross, as `(t_a, t_b, det)` with
/// both times scaled by a positive `det`. `None` for parallel paths.
fn crossing(a: &Hailstone, b: &Hailstone) -> Option<(i128, i128, i128)> {
    let det = a.vel[0] * b.vel[1] - a.vel[1] * b.vel[0];
    if det == 0 {
        return None;
    }
    let dx = b.pos[0] - a.pos[0];
    let dy = b.pos[1] - a.pos[1];
    let ta = dx * b.vel[1] - dy * b.vel[0];
    let tb = dx * a.vel[1] - dy * a.vel[0];
    Some(if det < 0 { (-ta, -tb, -det) } else { (ta, tb, det) })
}

/// Future XY crossings inside the `lo..=hi` square.
pub fn crossings_inside(stones: &[Hailstone], lo: i64, hi: i64) -> usize {
    let (lo, hi) = (i128::from(lo), i128::from(hi));
    let mut count = 0;
    for (i, a) in stones.iter().enumerate() {
        for b in &stones[i + 1..] {
            let Some((ta, tb, det)) = crossing(a, b) else { continue };
            if ta < 0 || tb < 0 {
                continue;
            }
            let inside = (0..2).all(|axis| {
                let at = a.pos[axis] * det + a.vel[axis] * ta;
                lo * det <= at && at <= hi * det
            });
            if inside {
                count += 1;
            }
        }
    }
    count
}

/// Time `stone` takes to reach `p` in the XY plane, if it does so at an
/// integer time.
fn arrival(stone: &Hailstone, p: [i128; 2]) -> Option<i128> {
    for axis in 0..2 {
        let v = stone.vel[axis];
        if v != 0 {
            let d = p[axis] - stone.pos[axis];
            if d % v != 0 {
                return None;
            }
            let t = d / v;
            let other = 1 - axis;
            return (stone.pos[other] + stone.vel[other] * t == p[other]).then_some(t);
        }
    }
    None
}

/// Seen from a rock moving at `v`, every stone must pass through the
/// rock's start. Try `v` and return the start position if it works.
fn throw_with(stones: &[Hailstone], v: [i128; 2]) -> Option<[i128; 3]> {
    let first = stones[0].relative(v);
    let (ta, det) = stones[1..]
        .iter()
        .find_map(|s| crossing(&first, &s.relative(v)).map(|(ta, _, det)| (ta, det)))?;
    if ta % det != 0 {
        return None;
    }
    let t0 = ta / det;
    let p = [first.pos[0] + first.vel[0] * t0, first.pos[1] + first.vel[1] * t0];

    let times: Vec<i128> = stones
        .iter()
        .map(|s| arrival(&s.relative(v), p))
        .collect::<Option<_>>()?;

    // Solve the z velocity from two hits at different times, then check it.
    let (i, j) = (0..times.len())
        .flat_map(|i| (i + 1..times.len()).map(move |j| (i, j)))
        .find(|&(i, j)| times[i] != times[j])?;
    let z_at = |k: usize| stones[k].pos[2] + stones[k].vel[2] * times[k];
    let dz = z_at(i) - z_at(j);
    let dt = times[i] - times[j];
    if dz % dt != 0 {
        return None;
    }
    let vz = dz / dt;
    let pz = z_at(i) - vz * times[i];
    (0..times.len())
        .all(|k| z_at(k) == pz + vz * times[k])
        .then_some([p[0], p[1], pz])
}

/// Start of the rock that hits every hailstone.
pub fn rock_start(stones: &[Hailstone]) -> Result<[i128; 3]> {
    if stones.len() < 2 {
        return Err(Error::no_answer(DAY, "need at least two hailstones"));
    }
    for vx in -VELOCITY_RANGE..=VELOCITY_RANGE {
        for vy in -VELOCITY_RANGE..=VELOCITY_RANGE {
            if let Some(p) = throw_with(stones, [i128::from(vx), i128::from(vy)]) {
                return Ok(p);
            }
        }
    }
    Err(Error::no_answer(DAY, "no rock velocity found"))
}

pub fn part1(data: &[String], lo: i64, hi: i64) -> Result<usize> {
    Ok(crossings_inside(&hailstones(data)?, lo, hi))
}

pub fn part2(data: &[String]) -> Result<i128> {
    let start = rock_start(&hailstones(data)?)?;
    Ok(start.iter().sum())
}

pub struct Puzzle;

impl Solution for Puzzle {
    fn part1(&self, data: &[String]) -> Result<Answer> {
        part1(data, AREA_MIN, AREA_MAX).map(Answer::from)
    }
    fn part2(&self, data: &[String]) -> Result<Answer> {
        part2(data).map(Answer::from)
    }
}
