//! Controller - owns one session and serializes everything that touches it
//!
//! Ticks from the scheduler and commands from input go into a single FIFO
//! queue. `pump` applies them one at a time; each event runs to completion
//! before the next starts. After every accepted event the render sink gets a
//! fresh snapshot.
//!
//! Entering game over cancels the scheduler, drops whatever is still queued
//! and signals the sink once. Nothing restarts a finished session; `restart`
//! swaps in a brand new one.

use std::time::Duration;

use anyhow::Result;

use crate::core::{GameSession, GameSnapshot, PieceGenerator, StepOutcome};
use crate::event::{EventQueue, GameEvent};
use crate::event_log::{EventLog, LogRecord};
use crate::scheduler::TickScheduler;
use crate::sink::RenderSink;
use crate::types::GameCommand;

pub struct Controller<G: PieceGenerator, S: RenderSink> {
    session: GameSession<G>,
    scheduler: TickScheduler,
    queue: EventQueue,
    sink: S,
    log: Option<EventLog>,
    snapshot: GameSnapshot,
    /// Sequence number of the last applied event.
    seq: u64,
    started: bool,
    over_signalled: bool,
}

impl<G: PieceGenerator, S: RenderSink> Controller<G, S> {
    pub fn new(session: GameSession<G>, tick_period_ms: u32, sink: S) -> Self {
        let snapshot = session.snapshot();
        Self {
            session,
            scheduler: TickScheduler::new(tick_period_ms),
            queue: EventQueue::new(),
            sink,
            log: None,
            snapshot,
            seq: 0,
            started: false,
            over_signalled: false,
        }
    }

    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn session(&self) -> &GameSession<G> {
        &self.session
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Latest snapshot handed to the sink.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Time until the scheduler fires next, or None after game over.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.scheduler.time_until_next_tick()
    }

    /// Present the initial state. A session that starts blocked goes straight
    /// to game over.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;

        let grid = self.session.grid();
        let record = LogRecord::SessionStart {
            rows: grid.rows(),
            cols: grid.cols(),
            tick_ms: self.scheduler.period_ms(),
        };
        self.log_record(&record)?;

        self.session.snapshot_into(&mut self.snapshot);
        self.sink.present(&self.snapshot)?;
        if self.session.is_over() {
            self.enter_game_over()?;
        }
        Ok(())
    }

    /// Present the latest snapshot again, e.g. after the terminal resized.
    pub fn redraw(&mut self) -> Result<()> {
        self.sink.present(&self.snapshot)
    }

    /// Queue a player command. Ignored once the game is over.
    pub fn push_command(&mut self, command: GameCommand) {
        if self.over_signalled {
            return;
        }
        self.queue.push(GameEvent::Command(command));
    }

    /// Feed elapsed wall-clock time; queues one tick per elapsed period.
    pub fn advance_time(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.scheduler.advance(elapsed_ms);
        for _ in 0..due {
            self.queue.push(GameEvent::Tick);
        }
        due
    }

    /// Apply queued events in arrival order. Returns how many were applied.
    pub fn pump(&mut self) -> Result<usize> {
        self.start()?;

        let mut applied = 0;
        while let Some(event) = self.queue.pop() {
            self.apply(event)?;
            applied += 1;
            if self.session.is_over() {
                self.enter_game_over()?;
                break;
            }
        }
        Ok(applied)
    }

    /// `advance_time` followed by `pump`.
    pub fn run_for(&mut self, elapsed_ms: u32) -> Result<usize> {
        self.advance_time(elapsed_ms);
        self.pump()
    }

    /// Replace the session with a new one and start it.
    pub fn restart(&mut self, session: GameSession<G>) -> Result<()> {
        self.session = session;
        self.scheduler = TickScheduler::new(self.scheduler.period_ms());
        self.queue.clear();
        self.started = false;
        self.over_signalled = false;
        self.start()
    }

    fn apply(&mut self, event: GameEvent) -> Result<()> {
        self.seq += 1;
        let seq = self.seq;

        let changed = match event {
            GameEvent::Tick | GameEvent::Command(GameCommand::SoftDrop) => {
                let outcome = self.session.step();
                if let StepOutcome::Locked(lock) = outcome {
                    let record = LogRecord::Lock {
                        seq,
                        kind: lock.piece.kind,
                        x: lock.piece.x,
                        y: lock.piece.y,
                        lines_cleared: lock.lines_cleared,
                        score: self.session.score(),
                    };
                    self.log_record(&record)?;
                }
                outcome.changed()
            }
            GameEvent::Command(command) => self.session.apply(command),
        };

        self.log_record(&LogRecord::Event {
            seq,
            event,
            changed,
        })?;

        if changed {
            self.session.snapshot_into(&mut self.snapshot);
            self.sink.present(&self.snapshot)?;
        }
        Ok(())
    }

    fn enter_game_over(&mut self) -> Result<()> {
        if self.over_signalled {
            return Ok(());
        }
        self.over_signalled = true;
        self.scheduler.cancel();
        self.queue.clear();

        let record = LogRecord::GameOver {
            seq: self.seq,
            score: self.session.score(),
            lines: self.session.lines(),
            pieces: self.session.pieces_locked(),
        };
        self.log_record(&record)?;
        if let Some(log) = self.log.as_mut() {
            log.flush()?;
        }

        self.session.snapshot_into(&mut self.snapshot);
        self.sink.game_over(&self.snapshot)
    }

    fn log_record(&mut self, record: &LogRecord) -> Result<()> {
        match self.log.as_mut() {
            Some(log) => log.record(record),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Grid, SequenceGenerator};
    use crate::sink::RecordingSink;
    use crate::types::{Rgb, ShapeKind};

    fn controller(kinds: &[ShapeKind]) -> Controller<SequenceGenerator, RecordingSink> {
        let session = GameSession::new(&GameConfig::default(), SequenceGenerator::new(kinds.to_vec()));
        Controller::new(session, 500, RecordingSink::default())
    }

    #[test]
    fn start_presents_initial_state() {
        let mut c = controller(&[ShapeKind::T]);
        c.start().unwrap();
        assert_eq!(c.sink().frames.len(), 1);
        assert_eq!(c.sink().frames[0].current.y, 0);
        // Starting twice does not present again.
        c.start().unwrap();
        assert_eq!(c.sink().frames.len(), 1);
    }

    #[test]
    fn ticks_step_the_session() {
        let mut c = controller(&[ShapeKind::O]);
        assert_eq!(c.run_for(1_499).unwrap(), 2);
        assert_eq!(c.session().current().y, 2);
        assert_eq!(c.run_for(1).unwrap(), 1);
        assert_eq!(c.session().current().y, 3);
    }

    #[test]
    fn events_apply_in_arrival_order() {
        let mut c = controller(&[ShapeKind::O]);
        c.push_command(GameCommand::MoveLeft);
        c.advance_time(500);
        c.push_command(GameCommand::MoveLeft);
        assert_eq!(c.pending(), 3);
        assert_eq!(c.pump().unwrap(), 3);

        let frames = &c.sink().frames;
        // initial + three accepted events
        assert_eq!(frames.len(), 4);
        assert_eq!((frames[1].current.x, frames[1].current.y), (3, 0));
        assert_eq!((frames[2].current.x, frames[2].current.y), (3, 1));
        assert_eq!((frames[3].current.x, frames[3].current.y), (2, 1));
    }

    #[test]
    fn rejected_commands_do_not_present() {
        let mut c = controller(&[ShapeKind::O]);
        c.start().unwrap();
        for _ in 0..10 {
            c.push_command(GameCommand::MoveLeft);
        }
        c.pump().unwrap();
        // O moves from x=4 to x=0: four accepted moves.
        assert_eq!(c.sink().frames.len(), 5);
        assert_eq!(c.session().current().x, 0);
    }

    #[test]
    fn game_over_cancels_ticks_and_signals_once() {
        // Column 4..5 is filled up to row 2; an O dropped there tops out fast.
        let gray = Rgb::new(90, 90, 90);
        let mut grid = Grid::new(20, 10);
        for y in 2..20 {
            grid.set(4, y, gray);
        }
        let session = GameSession::with_grid(grid, 100, SequenceGenerator::new([ShapeKind::O]));
        let mut c = Controller::new(session, 500, RecordingSink::default());

        c.run_for(60_000).unwrap();
        assert!(c.is_over());
        assert!(c.scheduler().is_cancelled());
        assert_eq!(c.pending(), 0);
        assert_eq!(c.time_until_next_tick(), None);
        assert_eq!(c.sink().game_over_frames.len(), 1);
        assert!(c.sink().game_over_frames[0].over);

        let frames_before = c.sink().frames.len();
        c.push_command(GameCommand::Rotate);
        assert_eq!(c.run_for(60_000).unwrap(), 0);
        assert_eq!(c.sink().frames.len(), frames_before);
        assert_eq!(c.sink().game_over_frames.len(), 1);
    }

    #[test]
    fn blocked_start_goes_straight_to_game_over() {
        let mut grid = Grid::new(20, 10);
        grid.set(5, 0, Rgb::new(1, 1, 1));
        let session = GameSession::with_grid(grid, 100, SequenceGenerator::new([ShapeKind::O]));
        let mut c = Controller::new(session, 500, RecordingSink::default());
        c.start().unwrap();
        assert_eq!(c.sink().game_over_frames.len(), 1);
        assert!(c.scheduler().is_cancelled());
    }

    #[test]
    fn redraw_presents_without_stepping() {
        let mut c = controller(&[ShapeKind::T]);
        c.start().unwrap();
        c.redraw().unwrap();
        assert_eq!(c.sink().frames.len(), 2);
        assert_eq!(c.sink().frames[0], c.sink().frames[1]);
    }

    #[test]
    fn restart_replaces_the_session() {
        let mut grid = Grid::new(20, 10);
        grid.set(5, 0, Rgb::new(1, 1, 1));
        let session = GameSession::with_grid(grid, 100, SequenceGenerator::new([ShapeKind::O]));
        let mut c = Controller::new(session, 500, RecordingSink::default());
        c.start().unwrap();
        assert!(c.is_over());

        c.restart(GameSession::new(
            &GameConfig::default(),
            SequenceGenerator::new([ShapeKind::O]),
        ))
        .unwrap();
        assert!(!c.is_over());
        assert!(!c.scheduler().is_cancelled());
        assert_eq!(c.run_for(500).unwrap(), 1);
        assert_eq!(c.session().current().y, 1);
    }
}
