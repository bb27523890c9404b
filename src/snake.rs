use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one cell away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Outcome of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepResult {
    /// Moved one cell, length unchanged.
    Moved,
    /// Moved one cell and consumed the pending-growth flag, length +1.
    Grew,
    /// Next head would leave the grid. The body is left untouched.
    CollidedWall,
    /// Next head would land on the body. The body is left untouched.
    CollidedSelf,
}

impl StepResult {
    /// Returns true for the two fatal outcomes.
    #[must_use]
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::CollidedWall | Self::CollidedSelf)
    }
}

/// Mutable snake body and growth state.
///
/// The snake holds no direction of its own; the controller commits a
/// direction into every [`Snake::step`] call.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    grow_pending: bool,
}

impl Snake {
    /// Creates a snake of `length` segments with `head` in front, trailing
    /// away opposite to `direction`.
    #[must_use]
    pub fn with_length(head: Position, direction: Direction, length: usize) -> Self {
        debug_assert!(length >= 1);

        let (dx, dy) = direction.opposite().delta();
        let body = (0..length)
            .map(|i| {
                let offset = i32::try_from(i).unwrap_or(i32::MAX);
                Position {
                    x: head.x + dx * offset,
                    y: head.y + dy * offset,
                }
            })
            .collect();

        Self {
            body,
            grow_pending: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
            grow_pending: false,
        }
    }

    /// Queues growth to be consumed by the next step.
    pub fn request_growth(&mut self) {
        self.grow_pending = true;
    }

    /// Returns the head position after one step in `direction`, without
    /// mutating anything.
    #[must_use]
    pub fn next_head(&self, direction: Direction) -> Position {
        self.head().stepped(direction)
    }

    /// Applies one movement step in `direction`.
    ///
    /// The self-collision check runs against the full pre-move body,
    /// including the tail cell that this step would vacate: moving into the
    /// current tail cell is fatal even though that cell empties on the same
    /// tick. The tail is only removed after the check passes.
    pub fn step(&mut self, direction: Direction, bounds: GridSize) -> StepResult {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next = self.next_head(direction);

        if !next.is_within_bounds(bounds) {
            return StepResult::CollidedWall;
        }
        if self.occupies(next) {
            return StepResult::CollidedSelf;
        }

        self.body.push_front(next);
        if self.grow_pending {
            self.grow_pending = false;
            StepResult::Grew
        } else {
            let _ = self.body.pop_back();
            StepResult::Moved
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
