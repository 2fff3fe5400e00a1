use anyhow::Result;

use crate::core::GameSnapshot;

/// Receiver of game state for display.
///
/// Sinks only observe: they get a snapshot after every state change and can
/// never drive the game from inside a draw.
pub trait RenderSink {
    /// Called after the session starts and after every accepted event.
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    /// Called exactly once, when the session enters its terminal state.
    fn game_over(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.present(snapshot)
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).present(snapshot)
    }

    fn game_over(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).game_over(snapshot)
    }
}

/// Sink that discards everything (headless runs, benches).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _snapshot: &GameSnapshot) -> Result<()> {
        Ok(())
    }
}

/// Sink that keeps every snapshot it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub frames: Vec<GameSnapshot>,
    pub game_over_frames: Vec<GameSnapshot>,
}

impl RenderSink for RecordingSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.frames.push(snapshot.clone());
        Ok(())
    }

    fn game_over(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.game_over_frames.push(snapshot.clone());
        self.present(snapshot)
    }
}
