// src/grid.rs
use std::fmt;
use std::ops::{Add, Sub};

/// A point on a character grid. `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

impl Pos {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Dir) -> Self {
        self + dir.delta()
    }

    pub fn neighbours4(self) -> [Pos; 4] {
        Dir::ALL.map(|d| self.step(d))
    }

    pub fn neighbours8(self) -> [Pos; 8] {
        let Pos { x, y } = self;
        [
            Pos::new(x - 1, y - 1), Pos::new(x, y - 1), Pos::new(x + 1, y - 1),
            Pos::new(x - 1, y),                         Pos::new(x + 1, y),
            Pos::new(x - 1, y + 1), Pos::new(x, y + 1), Pos::new(x + 1, y + 1),
        ]
    }

    pub fn manhattan(self, other: Pos) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add for Pos {
    type Output = Pos;
    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Pos;
    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

    pub fn delta(self) -> Pos {
        match self {
            Dir::North => Pos::new(0, -1),
            Dir::East  => Pos::new(1, 0),
            Dir::South => Pos::new(0, 1),
            Dir::West  => Pos::new(-1, 0),
        }
    }

    pub fn turn_left(self) -> Dir {
        match self {
            Dir::North => Dir::West,
            Dir::East  => Dir::North,
            Dir::South => Dir::East,
            Dir::West  => Dir::South,
        }
    }

    pub fn turn_right(self) -> Dir {
        match self {
            Dir::North => Dir::East,
            Dir::East  => Dir::South,
            Dir::South => Dir::West,
            Dir::West  => Dir::North,
        }
    }

    pub fn opposite(self) -> Dir {
        self.turn_left().turn_left()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Rectangular ASCII grid. Short lines are padded with `fill`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl CharGrid {
    pub fn new(lines: &[String]) -> Self {
        Self::build(lines, 0, b'.')
    }

    /// Surround the data with a one-cell frame of `fill`, so that
    /// neighbour lookups of data cells never leave the grid.
    pub fn bordered(lines: &[String], fill: u8) -> Self {
        Self::build(lines, 1, fill)
    }

    fn build(lines: &[String], border: usize, fill: u8) -> Self {
        let inner_w = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let width = inner_w + 2 * border;
        let height = lines.len() + 2 * border;
        let mut cells = vec![fill; width * height];
        for (y, line) in lines.iter().enumerate() {
            let start = (y + border) * width + border;
            cells[start..start + line.len()].copy_from_slice(line.as_bytes());
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Pos) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    pub fn get(&self, p: Pos) -> Option<u8> {
        self.contains(p).then(|| self.cells[p.y as usize * self.width + p.x as usize])
    }

    /// Cell value, `fill` when outside.
    pub fn get_or(&self, p: Pos, fill: u8) -> u8 {
        self.get(p).unwrap_or(fill)
    }

    pub fn set(&mut self, p: Pos, value: u8) {
        if self.contains(p) {
            self.cells[p.y as usize * self.width + p.x as usize] = value;
        }
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn column(&self, x: usize) -> Vec<u8> {
        (0..self.height).map(|y| self.cells[y * self.width + x]).collect()
    }

    pub fn find(&self, value: u8) -> Option<Pos> {
        self.positions().find(|&(_, v)| v == value).map(|(p, _)| p)
    }

    pub fn positions(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &v)| {
            (Pos::new((i % self.width) as i64, (i / self.width) as i64), v)
        })
    }

    pub fn transpose(&self) -> CharGrid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for x in 0..self.width {
            cells.extend(self.column(x));
        }
        CharGrid { width: self.height, height: self.width, cells }
    }

    pub fn rotate_clockwise(&self) -> CharGrid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for x in 0..self.width {
            for y in (0..self.height).rev() {
                cells.push(self.cells[y * self.width + x]);
            }
        }
        CharGrid { width: self.height, height: self.width, cells }
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            f.write_str(&String::from_utf8_lossy(self.row(y)))?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}
