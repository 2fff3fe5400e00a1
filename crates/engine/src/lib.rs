//! Engine - drives a game session over time
//!
//! The core crate knows nothing about clocks, queues or screens. This crate
//! supplies them:
//!
//! - [`scheduler`]: fixed-period tick scheduler fed with elapsed time
//! - [`event`]: the single FIFO queue shared by ticks and input
//! - [`controller`]: applies queued events to one session and pushes snapshots
//! - [`sink`]: the render-sink trait and two simple sinks
//! - [`event_log`]: optional JSONL log of everything the controller applies
//! - [`config`]: tick period and log path on top of the game config
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Controller, RecordingSink};
//! use blockfall_engine::core::{GameConfig, GameSession, SequenceGenerator};
//! use blockfall_engine::types::{GameCommand, ShapeKind};
//!
//! let session = GameSession::new(&GameConfig::default(), SequenceGenerator::new([ShapeKind::T]));
//! let mut controller = Controller::new(session, 500, RecordingSink::default());
//!
//! controller.push_command(GameCommand::MoveRight);
//! controller.run_for(1_000).unwrap();
//!
//! assert_eq!(controller.session().current().y, 2);
//! assert_eq!(controller.sink().frames.len(), 4);
//! ```

pub mod config;
pub mod controller;
pub mod event;
pub mod event_log;
pub mod scheduler;
pub mod sink;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::RunConfig;
pub use controller::Controller;
pub use event::{EventQueue, GameEvent};
pub use event_log::{EventLog, LogRecord};
pub use scheduler::TickScheduler;
pub use sink::{NullSink, RecordingSink, RenderSink};
