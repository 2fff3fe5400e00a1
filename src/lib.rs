//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, tests and
//! benches can use `blockfall::{core,engine,input,term,types}`.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
