//! Game session - the state machine tying grid, pieces and scoring together
//!
//! A session moves through three states:
//!
//! - **Spawning** (instantaneous): `next` is promoted to `current` and a new
//!   `next` is drawn. If the promoted piece collides, the session is over.
//! - **Falling**: `step` moves the piece down one row, or locks it when it
//!   cannot fall. `move_horizontal` and `rotate` commit only collision-free
//!   candidates.
//! - **GameOver** (terminal): every operation is a no-op. Only a new session
//!   leaves it.
//!
//! Rejected moves are not errors; the caller just sees `false`.

use crate::collision::collides;
use crate::config::GameConfig;
use crate::generator::{PieceGenerator, UniformGenerator};
use crate::grid::Grid;
use crate::piece::Piece;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameCommand};

/// What happened when a piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// The piece as it was written into the grid.
    pub piece: Piece,
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// True if the following spawn was blocked.
    pub game_over: bool,
}

/// Result of one [`GameSession::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece fell one row.
    Moved,
    /// The piece landed and was locked.
    Locked(LockEvent),
    /// The session is already over; nothing changed.
    Ignored,
}

impl StepOutcome {
    /// Whether the step changed session state.
    pub fn changed(&self) -> bool {
        !matches!(self, StepOutcome::Ignored)
    }
}

/// One play of the game.
#[derive(Debug, Clone)]
pub struct GameSession<G = UniformGenerator> {
    grid: Grid,
    current: Piece,
    next: Piece,
    generator: G,
    line_clear_reward: u32,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    over: bool,
}

impl GameSession<Box<dyn PieceGenerator>> {
    /// Session on an empty grid using the configured randomizer and seed.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config, config.randomizer.generator(config.effective_seed()))
    }
}

impl<G: PieceGenerator> GameSession<G> {
    /// Session on an empty grid sized by `config`.
    pub fn new(config: &GameConfig, generator: G) -> Self {
        Self::with_grid(
            Grid::new(config.rows, config.cols),
            config.line_clear_reward,
            generator,
        )
    }

    /// Session starting from a prepared grid.
    ///
    /// Draws `current` and `next`; if `current` already collides the session
    /// starts over.
    pub fn with_grid(grid: Grid, line_clear_reward: u32, mut generator: G) -> Self {
        let cols = grid.cols();
        let current = generator.create(cols);
        let next = generator.create(cols);
        let over = collides(&current, &grid);

        Self {
            grid,
            current,
            next,
            generator,
            line_clear_reward,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            over,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this session.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Advance one row; lock, clear and respawn when the piece has landed.
    pub fn step(&mut self) -> StepOutcome {
        if self.over {
            return StepOutcome::Ignored;
        }

        let candidate = self.current.translate(0, 1);
        if !collides(&candidate, &self.grid) {
            self.current = candidate;
            return StepOutcome::Moved;
        }

        StepOutcome::Locked(self.lock_current())
    }

    /// Slide one column; returns false if blocked or over.
    pub fn move_horizontal(&mut self, direction: Direction) -> bool {
        self.try_commit(self.current.translate(direction.dx(), 0))
    }

    /// Rotate clockwise in place; returns false if blocked or over.
    pub fn rotate(&mut self) -> bool {
        self.try_commit(self.current.rotate())
    }

    /// Apply an input command. Returns whether state changed.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_horizontal(Direction::Left),
            GameCommand::MoveRight => self.move_horizontal(Direction::Right),
            GameCommand::SoftDrop => self.step().changed(),
            GameCommand::Rotate => self.rotate(),
        }
    }

    fn try_commit(&mut self, candidate: Piece) -> bool {
        if self.over || collides(&candidate, &self.grid) {
            return false;
        }
        self.current = candidate;
        true
    }

    fn lock_current(&mut self) -> LockEvent {
        let piece = self.current;
        for (x, y) in piece.cells() {
            self.grid.set(x, y, piece.color);
        }
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let lines_cleared = self.grid.clear_full_rows() as u32;
        let score_gained = lines_cleared.saturating_mul(self.line_clear_reward);
        self.lines += lines_cleared;
        self.score = self.score.saturating_add(score_gained);

        self.current = self.next;
        self.next = self.generator.create(self.grid.cols());
        if collides(&self.current, &self.grid) {
            self.over = true;
        }

        LockEvent {
            piece,
            lines_cleared,
            score_gained,
            game_over: self.over,
        }
    }

    /// Write a snapshot into `out`, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.current = self.current;
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.over = self.over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            cells: self.grid.cells().to_vec(),
            current: self.current,
            next: self.next,
            score: self.score,
            lines: self.lines,
            over: self.over,
        }
    }
}
