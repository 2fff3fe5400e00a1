//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and no I/O. Rendering and input live in
//! other crates and talk to the core only through [`GameSnapshot`] and
//! [`GameCommand`](types::GameCommand).
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size occupancy matrix with row clearing
//! - [`shape`]: the seven-shape catalog and clockwise rotation
//! - [`piece`]: the falling piece and its pure transforms
//! - [`collision`]: the single placement predicate
//! - [`generator`]: piece generation policies (uniform, 7-bag, fixed sequence)
//! - [`rng`]: seeded LCG behind the generators
//! - [`session`]: the spawn / fall / lock / clear / game-over state machine
//! - [`snapshot`]: read-only view for render sinks
//! - [`config`]: grid size, reward, randomizer, seed
//!
//! # Game Rules
//!
//! - Pieces spawn centered on row 0 and fall one row per step.
//! - A piece that cannot fall is locked into the grid on that step.
//! - Full rows are cleared bottom to top; each is worth a fixed 100 points.
//! - No wall kicks: a rotation that collides is simply rejected.
//! - If the promoted next piece collides at spawn, the game is over for good.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameSession, SequenceGenerator};
//! use blockfall_core::types::{GameCommand, ShapeKind};
//!
//! let mut game = GameSession::new(&GameConfig::default(), SequenceGenerator::new([ShapeKind::I]));
//! game.apply(GameCommand::MoveLeft);
//! game.apply(GameCommand::Rotate);
//!
//! // Drop the piece until it locks.
//! while game.grid().occupied_count() == 0 {
//!     game.step();
//! }
//! assert_eq!(game.score(), 0);
//! assert!(!game.is_over());
//! ```

pub mod collision;
pub mod config;
pub mod generator;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use config::{GameConfig, Randomizer, DEFAULT_SEED};
pub use generator::{BagGenerator, PieceGenerator, SequenceGenerator, UniformGenerator};
pub use grid::Grid;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use session::{GameSession, LockEvent, StepOutcome};
pub use shape::{catalog_entry, CatalogEntry, Shape, CATALOG};
pub use snapshot::GameSnapshot;
