use std::fmt;
use std::time::Duration;

use log::{debug, info, trace};

use crate::config::{
    parse_speed, sanitize_speed, step_interval_for_speed, EngineConfig, GridSize,
};
use crate::food::spawn_position;
use crate::input::{direction_change_is_valid, Direction, DirectionVector};
use crate::rng::{RandomSource, RngSource};
use crate::snake::{Position, Snake};
use crate::snapshot::Snapshot;

/// What ended the run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    /// The head would have left a bounded board.
    Wall,
    /// The head would have entered a cell the body occupied before the move.
    Body,
}

/// Authoritative snake simulation.
///
/// The engine is the only writer of its state. Hosts steer it with
/// [`Engine::set_direction`], advance it with [`Engine::tick`] and observe it
/// through [`Snapshot`]s.
pub struct Engine {
    config: EngineConfig,
    bounds: GridSize,
    snake: Snake,
    food: Option<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    score: u32,
    over: bool,
    just_grew: bool,
    collision: Option<Collision>,
    steps: u64,
    rng: Box<dyn RandomSource>,
}

impl Engine {
    /// Creates an engine drawing food positions from OS-seeded randomness.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, RngSource::from_entropy())
    }

    /// Creates an engine with an explicit random source.
    ///
    /// A deterministic source makes the whole run reproducible.
    #[must_use]
    pub fn with_rng<S: RandomSource + 'static>(config: EngineConfig, rng: S) -> Self {
        let bounds = config.grid();
        let config = EngineConfig {
            cols: bounds.width,
            rows: bounds.height,
            speed: sanitize_speed(config.speed),
            ..config
        };

        let mut engine = Self {
            config,
            bounds,
            snake: Snake::centered(bounds),
            food: None,
            direction: Direction::Right,
            pending_direction: None,
            score: 0,
            over: false,
            just_grew: false,
            collision: None,
            steps: 0,
            rng: Box::new(rng),
        };
        engine.reset();
        engine
    }

    /// Restores the opening position: a centred three-cell snake heading
    /// right, zero score and freshly placed food.
    pub fn reset(&mut self) {
        self.snake = Snake::centered(self.bounds);
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.food = spawn_position(self.rng.as_mut(), self.bounds, &self.snake);
        self.score = 0;
        self.over = false;
        self.just_grew = false;
        self.collision = None;
        self.steps = 0;

        debug!(
            "engine reset on {}x{} board (wrap: {}), food at {:?}",
            self.bounds.width, self.bounds.height, self.config.wrap, self.food
        );
    }

    /// Changes the board size and starts a new run on it.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.bounds = GridSize::new(cols, rows);
        self.config.cols = self.bounds.width;
        self.config.rows = self.bounds.height;
        self.reset();
    }

    /// Toggles edge wrapping; applies from the next step.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.config.wrap = wrap;
    }

    /// Sets the steps-per-second hint, clamped to at least 1.
    ///
    /// NaN and zero fall back to the default of 8.
    pub fn set_speed(&mut self, speed: f64) {
        self.config.speed = sanitize_speed(speed);
    }

    /// Textual variant of [`Engine::set_speed`]; unparseable text means 8.
    pub fn set_speed_str(&mut self, raw: &str) {
        self.config.speed = parse_speed(raw);
    }

    /// Replaces the random source used for future food placement.
    pub fn set_rng<S: RandomSource + 'static>(&mut self, rng: S) {
        self.rng = Box::new(rng);
    }

    /// Replaces the random source when one is given; `None` is ignored.
    pub fn try_set_rng<S: RandomSource + 'static>(&mut self, rng: Option<S>) {
        if let Some(rng) = rng {
            self.set_rng(rng);
        }
    }

    /// Queues a turn for the next step.
    ///
    /// The vector is reduced to a cardinal direction by sign. Zero vectors,
    /// calls after game over and exact reversals of the queued (or, with
    /// nothing queued, the committed) direction are ignored. A later call
    /// replaces an earlier queued turn.
    pub fn set_direction(&mut self, vector: DirectionVector) {
        if self.over {
            return;
        }

        let Some(candidate) = vector.to_direction() else {
            return;
        };

        let current = self.pending_direction.unwrap_or(self.direction);
        if !direction_change_is_valid(current, candidate) {
            trace!("ignored reversal {candidate:?} against {current:?}");
            return;
        }

        self.pending_direction = Some(candidate);
    }

    /// Queues a turn given as a cardinal direction.
    pub fn set_direction_to(&mut self, direction: Direction) {
        self.set_direction(direction.into());
    }

    /// Advances the simulation by one cell and returns the resulting state.
    ///
    /// After game over this is a no-op that keeps returning the final state.
    pub fn tick(&mut self) -> Snapshot {
        if self.over {
            return self.snapshot();
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let mut next_head = self.snake.head().step(self.direction);
        if self.config.wrap {
            next_head = next_head.wrapped(self.bounds);
        }

        if !next_head.is_within_bounds(self.bounds) {
            self.end_run(Collision::Wall, next_head);
            return self.snapshot();
        }

        // Checked against the pre-move body, so the tail cell still counts.
        if self.snake.occupies(next_head) {
            self.end_run(Collision::Body, next_head);
            return self.snapshot();
        }

        let ate = self.food == Some(next_head);
        self.snake.advance(next_head, ate);
        self.just_grew = ate;
        self.steps += 1;

        if ate {
            self.score += 1;
            self.food = spawn_position(self.rng.as_mut(), self.bounds, &self.snake);
            if self.food.is_none() {
                info!(
                    "board full after {} steps with score {}",
                    self.steps, self.score
                );
            }
        }

        trace!(
            "step {}: head {:?} facing {:?}, length {}",
            self.steps,
            next_head,
            self.direction,
            self.snake.len()
        );

        self.snapshot()
    }

    fn end_run(&mut self, collision: Collision, at: Position) {
        self.over = true;
        self.collision = Some(collision);
        debug!(
            "game over ({collision:?}) moving into {at:?} after {} steps, score {}",
            self.steps, self.score
        );
    }

    /// Returns an independent copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cols: self.bounds.width,
            rows: self.bounds.height,
            wrap: self.config.wrap,
            score: self.score,
            over: self.over,
            snake: self.snake.to_vec(),
            food: self.food,
            direction: self.direction,
        }
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn wrap(&self) -> bool {
        self.config.wrap
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.config.speed
    }

    /// Delay a host should leave between steps at the current speed hint.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        step_interval_for_speed(self.config.speed)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Reason the run ended, if it has.
    #[must_use]
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Whether the last step ate food (and so kept its tail).
    #[must_use]
    pub fn just_grew(&self) -> bool {
        self.just_grew
    }

    /// Successful moves since the last reset.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("snake", &self.snake)
            .field("food", &self.food)
            .field("direction", &self.direction)
            .field("pending_direction", &self.pending_direction)
            .field("score", &self.score)
            .field("over", &self.over)
            .field("collision", &self.collision)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}
