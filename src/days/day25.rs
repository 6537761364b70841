// src/days/day25.rs
// --- Day 25: Snowverload ---
use std::collections::{HashMap, VecDeque};

use crate::days::{Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 25;
const WIRES_TO_CUT: i32 = 3;

/// Components as an undirected graph of unit capacity wires.
pub struct Wiring {
    /// `(neighbour, wire, sign)`; `sign` is +1 when the wire is stored
    /// in this direction.
    adj: Vec<Vec<(usize, usize, i32)>>,
    wires: usize,
}

impl Wiring {
    /// `jqt: rhn xhk nvd`
    pub fn parse(data: &[String]) -> Result<Self> {
        let mut ids: HashMap<String, usize> = HashMap::new();
        let mut adj: Vec<Vec<(usize, usize, i32)>> = Vec::new();
        let mut wires = 0;
        let mut id = |name: &str, adj: &mut Vec<Vec<_>>| {
            *ids.entry(s!(name)).or_insert_with(|| {
                adj.push(Vec::new());
                adj.len() - 1
            })
        };
        for line in data.iter().filter(|l| !l.trim().is_empty()) {
            let (from, to) = line
                .split_once(':')
                .ok_or_else(|| Error::parse(DAY, line.as_str(), "expected 'name: names'"))?;
            let u = id(from.trim(), &mut adj);
            for other in to.split_whitespace() {
                let v = id(other, &mut adj);
                adj[u].push((v, wires, 1));
                adj[v].push((u, wires, -1));
                wires += 1;
            }
        }
        Ok(Wiring { adj, wires })
    }

    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// BFS over wires with spare capacity. Returns the parent links
    /// `(previous node, wire, sign)` for every node reached.
    fn residual_bfs(&self, flow: &[i32], source: usize) -> Vec<Option<(usize, usize, i32)>> {
        let mut parent = vec![None; self.len()];
        let mut seen = vec![false; self.len()];
        seen[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for &(v, wire, sign) in &self.adj[u] {
                if !seen[v] && 1 - sign * flow[wire] > 0 {
                    seen[v] = true;
                    parent[v] = Some((u, wire, sign));
                    queue.push_back(v);
                }
            }
        }
        parent[source] = Some((source, usize::MAX, 0));
        parent
    }

    /// If `source` and `sink` are separated by exactly three wires,
    /// the size of the side holding `source`.
    fn cut_side(&self, source: usize, sink: usize) -> Option<usize> {
        let mut flow = vec![0; self.wires];
        let mut paths = 0;
        let mut parent = self.residual_bfs(&flow, source);
        while parent[sink].is_some() {
            if paths == WIRES_TO_CUT {
                return None;
            }
            let mut v = sink;
            while v != source {
                let (u, wire, sign) = parent[v]?;
                flow[wire] += sign;
                v = u;
            }
            paths += 1;
            parent = self.residual_bfs(&flow, source);
        }
        (paths == WIRES_TO_CUT).then(|| parent.iter().flatten().count())
    }

    /// Product of the two group sizes after cutting three wires.
    pub fn split_product(&self) -> Result<usize> {
        let n = self.len();
        (1..n)
            .find_map(|sink| self.cut_side(0, sink))
            .map(|side| side * (n - side))
            .ok_or_else(|| Error::no_answer(DAY, "no three wire cut"))
    }
}

pub fn part1(data: &[String]) -> Result<usize> {
    Wiring::parse(data)?.split_product()
}

/// Day 25 has a single puzzle.
pub fn part2(_data: &[String]) -> Result<Answer> {
    Ok(Answer::Empty)
}

pub struct Puzzle;

impl Solution for Puzzle {
    fn part1(&self, data: &[String]) -> Result<Answer> {
        part1(data).map(Answer::from)
    }
    fn part2(&self, data: &[String]) -> Result<Answer> {
        part2(data)
    }
}
