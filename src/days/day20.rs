// src/days/day20.rs
// --- Day 20: Pulse Propagation ---
use std::collections::{HashMap, VecDeque};

use crate::core::num::lcm_all;
use crate::days::{Answer, Solution};
use crate::error::{Error, Result};

const DAY: u32 = 20;
const BROADCASTER: &str = "broadcaster";
const FINAL_MODULE: &str = "rx";
const PRESSES: usize = 1000;
// presses tried before giving up on finding every feeder's cycle
const MAX_PRESSES: usize = 100_000;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Kind {
    Broadcast,
    FlipFlop { on: bool },
    Conjunction { memory: Vec<bool> },
    Sink,
}

#[derive(Clone, Debug)]
struct Module {
    kind: Kind,
    outputs: Vec<usize>,
    inputs: Vec<usize>,
}

/// A pulse from `from` to `to`; `high` or low.
#[derive(Clone, Copy, Debug)]
struct Pulse {
    from: usize,
    to: usize,
    high: bool,
}

pub struct Machine {
    names: Vec<String>,
    index: HashMap<String, usize>,
    modules: Vec<Module>,
    broadcaster: usize,
}

impl Machine {
    pub fn parse(data: &[String]) -> Result<Self> {
        let mut machine = Machine {
            names: Vec::new(),
            index: HashMap::new(),
            modules: Vec::new(),
            broadcaster: 0,
        };
        let mut wiring = Vec::new();
        for line in data.iter().filter(|l| !l.trim().is_empty()) {
            let (lhs, rhs) = line
                .split_once("->")
                .ok_or_else(|| Error::parse(DAY, line.as_str(), "expected '->'"))?;
            let lhs = lhs.trim();
            let (kind, name) = match lhs.as_bytes().first() {
                Some(b'%') => (Kind::FlipFlop { on: false }, &lhs[1..]),
                Some(b'&') => (Kind::Conjunction { memory: Vec::new() }, &lhs[1..]),
                _ if lhs == BROADCASTER => (Kind::Broadcast, lhs),
                _ => return Err(Error::parse(DAY, line.as_str(), "unknown module type")),
            };
            let id = machine.id(name);
            machine.modules[id].kind = kind;
            let outputs: Vec<usize> = rhs
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| machine.id(s))
                .collect();
            wiring.push((id, outputs));
        }
        for (id, outputs) in wiring {
            for &out in &outputs {
                machine.modules[out].inputs.push(id);
            }
            machine.modules[id].outputs = outputs;
        }
        for module in &mut machine.modules {
            if let Kind::Conjunction { memory } = &mut module.kind {
                *memory = vec![false; module.inputs.len()];
            }
        }
        machine.broadcaster = *machine
            .index
            .get(BROADCASTER)
            .ok_or_else(|| Error::parse(DAY, "", "no broadcaster"))?;
        Ok(machine)
    }

    fn id(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(s!(name));
        self.index.insert(s!(name), id);
        self.modules.push(Module { kind: Kind::Sink, outputs: Vec::new(), inputs: Vec::new() });
        id
    }

    /// Press the button once. `watch` sees every pulse as it is delivered.
    fn press(&mut self, mut watch: impl FnMut(&Pulse)) {
        let mut queue = VecDeque::from([Pulse { from: self.broadcaster, to: self.broadcaster, high: false }]);
        while let Some(pulse) = queue.pop_front() {
            watch(&pulse);
            let module = &mut self.modules[pulse.to];
            let send = match &mut module.kind {
                Kind::Broadcast => Some(pulse.high),
                Kind::FlipFlop { on } => {
                    if pulse.high {
                        None
                    } else {
                        *on = !*on;
                        Some(*on)
                    }
                }
                Kind::Conjunction { memory } => {
                    if let Some(slot) = module.inputs.iter().position(|&i| i == pulse.from) {
                        memory[slot] = pulse.high;
                    }
                    Some(!memory.iter().all(|&m| m))
                }
                Kind::Sink => None,
            };
            if let Some(high) = send {
                for &to in &module.outputs {
                    queue.push_back(Pulse { from: pulse.to, to, high });
                }
            }
        }
    }

    /// Low pulses times high pulses sent over `presses` button presses.
    pub fn pulse_product(&mut self, presses: usize) -> u64 {
        let (mut low, mut high) = (0u64, 0u64);
        for _ in 0..presses {
            self.press(|p| if p.high { high += 1 } else { low += 1 });
        }
        low * high
    }

    /// Presses needed before `rx` gets a low pulse. `rx` is fed by a
    /// single conjunction whose inputs each go high on a fixed cycle.
    pub fn presses_until_final(&mut self) -> Result<u64> {
        let rx = *self
            .index
            .get(FINAL_MODULE)
            .ok_or_else(|| Error::no_answer(DAY, "no rx module"))?;
        let &[feeder] = self.modules[rx].inputs.as_slice() else {
            return Err(Error::no_answer(DAY, "rx must have exactly one input"));
        };
        if !matches!(self.modules[feeder].kind, Kind::Conjunction { .. }) {
            return Err(Error::no_answer(DAY, "rx must be fed by a conjunction"));
        }
        let watched = self.modules[feeder].inputs.clone();
        if watched.is_empty() {
            return Err(Error::no_answer(DAY, "rx's feeder has no inputs"));
        }
        let mut first_high: Vec<Option<u64>> = vec![None; watched.len()];

        for press in 1..=MAX_PRESSES as u64 {
            self.press(|p| {
                if p.high && p.to == feeder {
                    if let Some(i) = watched.iter().position(|&w| w == p.from) {
                        first_high[i].get_or_insert(press);
                    }
                }
            });
            if first_high.iter().all(Option::is_some) {
                return Ok(lcm_all(first_high.into_iter().flatten()));
            }
        }
        Err(Error::no_answer(DAY, format!("no cycle found for {}", self.names[feeder])))
    }
}

pub fn part1(data: &[String]) -> Result<u64> {
    Ok(Machine::parse(data)?.pulse_product(PRESSES))
}

pub fn part2(data: &[String]) -> Result<u64> {
    Machine::parse(data)?.presses_until_final()
}

pub struct Puzzle;

impl Solution for Puzzle {
    fn part1(&self, data: &[String]) -> Result<Answer> {
        part1(data).map(Answer::from)
    }
    fn part2(&self, data: &[String]) -> Result<Answer> {
        part2(data).map(Answer::from)
    }
}
