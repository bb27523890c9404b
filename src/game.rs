use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, FOOD_POINTS, INITIAL_SNAKE_LENGTH};
use crate::food::{spawn_position, SpawnError};
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake, StepResult};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended the game, shown on the game-over overlay.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Immutable projection of game state handed to the display sink.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
}

/// Complete mutable game state for one session.
///
/// Owns the snake, the food, the score, and the single-slot direction
/// buffer. Input lands in the buffer between ticks and is committed
/// atomically at the start of [`GameState::tick`], never mid-tick.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    direction: Direction,
    next_direction: Option<Direction>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game with OS-seeded randomness.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::from_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::with_length(center_of(bounds), Direction::Right, 1),
            food: center_of(bounds),
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            direction: Direction::Right,
            next_direction: None,
            bounds,
            rng,
        };
        state.reset();
        state
    }

    /// Discards the session and starts a new one on the same grid.
    pub fn reset(&mut self) {
        self.snake = Snake::with_length(
            center_of(self.bounds),
            Direction::Right,
            INITIAL_SNAKE_LENGTH,
        );
        self.direction = Direction::Right;
        self.next_direction = None;
        self.score = 0;
        self.death_reason = None;

        match spawn_position(&mut self.rng, self.bounds, &self.snake) {
            Ok(position) => {
                self.food = position;
                self.status = GameStatus::Running;
            }
            // Degenerate grid with no room for food: nothing to play.
            Err(SpawnError::GridFull { .. }) => {
                self.status = GameStatus::GameOver;
            }
        }
    }

    /// Advances simulation by one gameplay tick. No-op unless running.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        if let Some(next) = self.next_direction.take() {
            self.direction = next;
        }

        // Growth must land on the same tick the head reaches the food, so
        // the flag is set before the step that eats it.
        if self.snake.next_head(self.direction) == self.food {
            self.snake.request_growth();
        }

        match self.snake.step(self.direction, self.bounds) {
            StepResult::CollidedWall => {
                self.status = GameStatus::GameOver;
                self.death_reason = Some(DeathReason::WallCollision);
            }
            StepResult::CollidedSelf => {
                self.status = GameStatus::GameOver;
                self.death_reason = Some(DeathReason::SelfCollision);
            }
            StepResult::Grew => {
                self.score += FOOD_POINTS;
                match spawn_position(&mut self.rng, self.bounds, &self.snake) {
                    Ok(position) => self.food = position,
                    // The snake covers the whole grid; the board is complete.
                    Err(SpawnError::GridFull { .. }) => {
                        self.status = GameStatus::GameOver;
                    }
                }
            }
            StepResult::Moved => {}
        }
    }

    /// Applies one external input event.
    ///
    /// Direction requests opposite to the committed direction are ignored,
    /// as is a restart while running. Nothing here is an error.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) if self.status == GameStatus::Running => {
                if direction != self.direction.opposite() {
                    self.next_direction = Some(direction);
                }
            }
            GameInput::Restart if self.status == GameStatus::GameOver => {
                self.reset();
            }
            GameInput::Direction(_) | GameInput::Restart | GameInput::Quit => {}
        }
    }

    /// Returns the immutable projection consumed by the renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            direction: self.direction,
            food: self.food,
            score: self.score,
            status: self.status,
            death_reason: self.death_reason,
        }
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the grid bounds of this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

fn center_of(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus};

    const BOUNDS: GridSize = GridSize {
        width: 32,
        height: 24,
    };

    #[test]
    fn new_game_starts_centered_with_three_segments() {
        let state = GameState::new_with_seed(BOUNDS, 1);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position { x: 16, y: 12 });
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn eating_food_scores_ten_and_grows_on_the_same_tick() {
        let mut state = GameState::new_with_seed(BOUNDS, 2);
        state.food = state.snake.next_head(state.direction());

        state.tick();

        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 4);
        assert!(!state.snake.occupies(state.food), "food respawned off-snake");
    }

    #[test]
    fn wall_collision_ends_the_game_and_freezes_the_body() {
        let mut state = GameState::new_with_seed(BOUNDS, 3);
        state.snake = Snake::from_segments(vec![
            Position { x: 31, y: 5 },
            Position { x: 30, y: 5 },
            Position { x: 29, y: 5 },
        ]);
        state.food = Position { x: 20, y: 20 };

        // Head sits on the eastern edge; one more right step leaves the grid.
        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position { x: 31, y: 5 });
    }

    #[test]
    fn opposite_direction_request_is_ignored() {
        let mut state = GameState::new_with_seed(BOUNDS, 4);
        let head_before = state.snake.head();

        // Committed direction is Right; Left must be dropped.
        state.apply_input(GameInput::Direction(Direction::Left));
        state.tick();

        assert_eq!(
            state.snake.head(),
            Position {
                x: head_before.x + 1,
                y: head_before.y
            }
        );
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn repeating_the_current_direction_changes_nothing() {
        let mut state = GameState::new_with_seed(BOUNDS, 5);
        let mut reference = state.clone();

        state.apply_input(GameInput::Direction(Direction::Right));
        state.apply_input(GameInput::Direction(Direction::Right));
        state.tick();
        reference.tick();

        assert_eq!(state.snake.head(), reference.snake.head());
        assert_eq!(state.score, reference.score);
    }

    #[test]
    fn only_the_last_buffered_direction_wins() {
        let mut state = GameState::new_with_seed(BOUNDS, 6);
        let head = state.snake.head();

        state.apply_input(GameInput::Direction(Direction::Up));
        state.apply_input(GameInput::Direction(Direction::Down));
        state.tick();

        assert_eq!(
            state.snake.head(),
            Position {
                x: head.x,
                y: head.y + 1
            }
        );
    }

    #[test]
    fn restart_is_only_honored_after_game_over() {
        let mut state = GameState::new_with_seed(BOUNDS, 7);

        state.tick();
        let score_mid_game = state.score;
        state.apply_input(GameInput::Restart);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, score_mid_game);

        state.snake = Snake::from_segments(vec![Position { x: 31, y: 5 }]);
        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        state.apply_input(GameInput::Restart);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.death_reason, None);
    }

    #[test]
    fn ticks_after_game_over_are_no_ops() {
        let mut state = GameState::new_with_seed(BOUNDS, 8);
        state.snake = Snake::from_segments(vec![Position { x: 31, y: 5 }]);
        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        let frozen = state.snapshot();
        state.tick();
        state.tick();

        let still = state.snapshot();
        assert_eq!(frozen.snake, still.snake);
        assert_eq!(frozen.score, still.score);
    }

    #[test]
    fn snapshot_reflects_state_fields() {
        let state = GameState::new_with_seed(BOUNDS, 9);
        let snapshot = state.snapshot();

        assert_eq!(snapshot.snake.len(), state.snake.len());
        assert_eq!(snapshot.food, state.food);
        assert_eq!(snapshot.score, state.score);
        assert_eq!(snapshot.status, state.status);
        assert_eq!(snapshot.direction, state.direction());
    }
}
