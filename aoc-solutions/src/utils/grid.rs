//! Rectangular character grids and integer points

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};

use anyhow::{anyhow, bail};

/// A cell position. `row` grows downwards, `col` to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub row: isize,
    pub col: isize,
}

impl Point {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn step(self, dir: Direction) -> Point {
        self + dir.delta()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<isize> for Point {
    type Output = Point;

    fn mul(self, rhs: isize) -> Point {
        Point::new(self.row * rhs, self.col * rhs)
    }
}

/// Orthogonal heading on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise, starting at `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(-1, 0),
            Direction::Right => Point::new(0, 1),
            Direction::Down => Point::new(1, 0),
            Direction::Left => Point::new(0, -1),
        }
    }

    pub fn turn_right(self) -> Direction {
        Direction::ALL[(self.index() + 1) % 4]
    }

    pub fn turn_left(self) -> Direction {
        Direction::ALL[(self.index() + 3) % 4]
    }

    pub fn opposite(self) -> Direction {
        Direction::ALL[(self.index() + 2) % 4]
    }

    /// Position in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// `^`, `>`, `v`, `<`
    pub fn from_arrow(byte: u8) -> Option<Direction> {
        match byte {
            b'^' => Some(Direction::Up),
            b'>' => Some(Direction::Right),
            b'v' => Some(Direction::Down),
            b'<' => Some(Direction::Left),
            _ => None,
        }
    }
}

/// Row-major rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.height && (p.col as usize) < self.width
    }

    fn offset(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.row as usize * self.width + p.col as usize)
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.offset(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.offset(p).map(|i| &mut self.cells[i])
    }

    /// Every position, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = (self.width as isize, self.height as isize);
        (0..height).flat_map(move |row| (0..width).map(move |col| Point::new(row, col)))
    }

    /// Every position with its cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.points().zip(self.cells.iter())
    }

    /// In-bounds orthogonal neighbours of `p`.
    pub fn neighbours(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |d| p.step(d))
            .filter(|n| self.contains(*n))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: PartialEq> Grid<T> {
    /// First position holding `value`, row by row.
    pub fn find(&self, value: &T) -> Option<Point> {
        self.iter().find(|(_, cell)| *cell == value).map(|(p, _)| p)
    }
}

impl Grid<u8> {
    /// Parses lines of bytes into a grid. Rows must all have the same length.
    pub fn parse_bytes(input: &str) -> anyhow::Result<Grid<u8>> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (i, line) in input.lines().map(str::trim_end).enumerate() {
            if line.is_empty() {
                continue;
            }
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    bail!("line {}: expected {} columns, found {}", i + 1, w, line.len())
                }
                Some(_) => {}
            }
            cells.extend_from_slice(line.as_bytes());
            height += 1;
        }

        let width = width.ok_or_else(|| anyhow!("empty grid"))?;
        Ok(Grid {
            width,
            height,
            cells,
        })
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        match self.offset(p) {
            Some(i) => &self.cells[i],
            None => panic!("{p:?} outside {}x{} grid", self.width, self.height),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        match self.offset(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("{p:?} outside {}x{} grid", self.width, self.height),
        }
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
