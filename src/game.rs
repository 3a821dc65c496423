use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GameConfig, GridSize};
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

/// Transitions that happened during one [`GameState::update`] call.
///
/// Each flag is set on exactly the update where the transition occurred, so
/// the host can react once (sound, log line) without diffing state.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct UpdateEvents {
    pub ate_food: bool,
    pub game_over: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    score: u32,
    tick_rate: u32,
    status: GameStatus,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a new game with an entropy-seeded food generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(&config);
        let food = Food::spawn(&mut rng, config.grid());

        Self {
            snake,
            food,
            score: 0,
            tick_rate: config.base_rate(),
            status: GameStatus::Playing,
            config,
            rng,
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Food is resolved before the self-collision check, so a segment grown
    /// this tick already counts as body.
    pub fn update(&mut self) -> UpdateEvents {
        let mut events = UpdateEvents::default();
        if self.status != GameStatus::Playing {
            return events;
        }

        let grid = self.config.grid();
        self.snake.move_forward(grid);

        if self.snake.collides_with_food(&self.food) {
            self.score += 1;
            self.snake.grow();
            self.food.respawn(&mut self.rng, grid);
            self.tick_rate = self.config.tick_rate_for_score(self.score);
            events.ate_food = true;

            debug!(
                "food eaten: score={} length={} tick_rate={} next_food={:?}",
                self.score,
                self.snake.len(),
                self.tick_rate,
                self.food.position()
            );
        }

        if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver;
            events.game_over = true;

            info!(
                "game over: score={} length={} head={:?}",
                self.score,
                self.snake.len(),
                self.snake.head()
            );
        }

        events
    }

    /// Forwards a turn request to the snake while the game is running.
    pub fn handle_direction_input(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing {
            self.snake.change_direction(direction);
        }
    }

    /// Switches between playing and paused. Has no effect after game over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::GameOver => GameStatus::GameOver,
        };
        debug!("pause toggled: status={:?}", self.status);
    }

    /// Starts a new game in place: fresh snake, new food, zero score.
    pub fn reset(&mut self) {
        self.status = GameStatus::Playing;
        self.score = 0;
        self.tick_rate = self.config.base_rate();
        self.snake = Snake::new(&self.config);
        self.food.respawn(&mut self.rng, self.config.grid());

        info!("game reset");
    }

    /// Applies one external input event.
    ///
    /// `Restart` is honored only after game over. `Confirm` and `Quit` are
    /// resolved by the host loop and ignored here.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.handle_direction_input(direction),
            GameInput::Pause => self.toggle_pause(),
            GameInput::Restart => {
                if self.status == GameStatus::GameOver {
                    self.reset();
                }
            }
            GameInput::Confirm | GameInput::Quit => {}
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    /// Current speed in ticks per second.
    #[must_use]
    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Time the host should wait between two updates at the current speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        GameConfig::tick_interval(self.tick_rate)
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.config.grid()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
