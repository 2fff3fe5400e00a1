//! Terminal blockfall runner (default binary).
//!
//! Keys and mouse swipes become commands, wall-clock time becomes ticks, and
//! both go through the engine controller. Frames are drawn with the
//! framebuffer renderer from `blockfall::term`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameConfig, GameSession, GameSnapshot, PieceGenerator};
use blockfall::engine::{Controller, EventLog, RenderSink, RunConfig};
use blockfall::input::{handle_key_event, should_quit, should_restart, SwipeTracker};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll interval once the scheduler has stopped (game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Render sink that draws every snapshot to the terminal.
struct TerminalSink<'a> {
    term: &'a mut TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    viewport: Viewport,
}

impl<'a> TerminalSink<'a> {
    fn new(term: &'a mut TerminalRenderer, viewport: Viewport) -> Self {
        Self {
            term,
            view: GameView::default(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.term.invalidate();
    }
}

impl RenderSink for TerminalSink<'_> {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.view.render_into(snapshot, self.viewport, &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}

struct Summary {
    score: u32,
    lines: u32,
    pieces: u32,
}

fn main() -> Result<()> {
    let mut config = RunConfig::from_env();
    let fixed_seed = config.game.seed.is_some();
    if !fixed_seed {
        config.game = config.game.with_seed(time_seed());
    }

    let log = match config.log_path.as_deref() {
        Some(path) => {
            eprintln!("[blockfall] event log: {path}");
            Some(EventLog::open(path)?)
        }
        None => None,
    };

    let mut term = TerminalRenderer::new().with_mouse_capture(true);
    term.enter()?;

    let result = run(&mut term, &config, fixed_seed, log);

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    eprintln!(
        "[blockfall] final score {} ({} lines, {} pieces)",
        summary.score, summary.lines, summary.pieces
    );
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    config: &RunConfig,
    fixed_seed: bool,
    log: Option<EventLog>,
) -> Result<Summary> {
    let viewport = TerminalRenderer::viewport().unwrap_or(Viewport::new(80, 24));
    let sink = TerminalSink::new(term, viewport);
    let view_cell_w = sink.view.cell_w();

    let session = GameSession::from_config(&config.game);
    let mut controller = Controller::new(session, config.tick_period_ms, sink);
    if let Some(log) = log {
        controller = controller.with_log(log);
    }
    controller.start()?;

    let mut swipes = SwipeTracker::new(view_cell_w);
    let mut last = Instant::now();

    loop {
        let timeout = controller.time_until_next_tick().unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if controller.is_over() {
                        if should_restart(key) {
                            let game = next_game(&config.game, fixed_seed);
                            controller.restart(GameSession::from_config(&game))?;
                            last = Instant::now();
                        }
                        continue;
                    }
                    if let Some(command) = handle_key_event(key) {
                        controller.push_command(command);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(command) = swipes.handle_mouse(mouse) {
                        controller.push_command(command);
                    }
                }
                Event::Resize(w, h) => {
                    controller.sink_mut().resize(Viewport::new(w, h));
                    controller.redraw()?;
                }
                _ => {}
            }
        }

        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);
        controller.advance_time(elapsed_ms);
        controller.pump()?;
    }

    Ok(summarize(controller.session()))
}

fn summarize<G: PieceGenerator>(session: &GameSession<G>) -> Summary {
    Summary {
        score: session.score(),
        lines: session.lines(),
        pieces: session.pieces_locked(),
    }
}

/// Config for a restarted game: same seed when it was pinned, fresh otherwise.
fn next_game(game: &GameConfig, fixed_seed: bool) -> GameConfig {
    if fixed_seed {
        game.clone()
    } else {
        game.clone().with_seed(time_seed())
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
