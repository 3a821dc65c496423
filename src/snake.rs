use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::config::{GameConfig, GridSize};
use crate::food::Food;
use crate::input::{Direction, direction_change_is_valid};

/// Grid cell in logical column/row coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[must_use]
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns true when the cell lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, grid: GridSize) -> bool {
        self.col >= 0
            && self.row >= 0
            && self.col < i32::from(grid.width)
            && self.row < i32::from(grid.height)
    }

    /// Returns this cell wrapped onto the grid on both axes.
    #[must_use]
    pub fn wrapped(self, grid: GridSize) -> Self {
        Self {
            col: self.col.rem_euclid(i32::from(grid.width)),
            row: self.row.rem_euclid(i32::from(grid.height)),
        }
    }

    /// Neighbouring cell one step in `direction`, wrapped onto the grid.
    #[must_use]
    pub fn step(self, direction: Direction, grid: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            col: self.col + dx,
            row: self.row + dy,
        }
        .wrapped(grid)
    }
}

/// The player's snake: body cells head-first and the current heading.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    /// Creates a snake for a new game: head at the grid center heading right,
    /// the rest of the body trailing to the left.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let (col, row) = config.initial_head();
        let grid = config.grid();
        let length = config.initial_snake_length();

        let body = (0..length)
            .map(|offset| Cell::new(col - offset as i32, row).wrapped(grid))
            .collect();

        Self {
            body,
            direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Turns the snake unless `requested` would reverse it onto itself.
    ///
    /// Each request is checked against the direction stored right now, so two
    /// quick perpendicular turns inside one tick can still point the head
    /// back at its neck.
    pub fn change_direction(&mut self, requested: Direction) {
        if direction_change_is_valid(self.direction, requested) {
            self.direction = requested;
        }
    }

    /// Advances one cell in the current direction, wrapping at grid edges.
    pub fn move_forward(&mut self, grid: GridSize) {
        let next_head = self.next_head_position(grid);

        self.body.push_front(next_head);
        let _ = self.body.pop_back();
    }

    /// Returns the head cell for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self, grid: GridSize) -> Cell {
        self.head().step(self.direction, grid)
    }

    /// Appends a copy of the tail; it separates from the tail on the next move.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push_back(tail);
    }

    /// Returns true when the head sits on the food.
    #[must_use]
    pub fn collides_with_food(&self, food: &Food) -> bool {
        self.head() == food.position()
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Returns the current tail cell.
    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> vec_deque::Iter<'_, Cell> {
        self.body.iter()
    }
}
