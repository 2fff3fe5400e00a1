//! Controller, scheduler and event log tests through the facade crate.

use blockfall::core::{GameConfig, GameSession, Grid, SequenceGenerator};
use blockfall::engine::{Controller, EventLog, NullSink, RecordingSink, RunConfig, TickScheduler};
use blockfall::types::{GameCommand, Rgb, ShapeKind};

fn o_session() -> GameSession<SequenceGenerator> {
    GameSession::new(&GameConfig::default(), SequenceGenerator::new([ShapeKind::O]))
}

#[test]
fn first_tick_arrives_after_one_period() {
    let mut c = Controller::new(o_session(), 500, RecordingSink::default());
    assert_eq!(c.run_for(0).unwrap(), 0);
    assert_eq!(c.session().current().y, 0);
    assert_eq!(c.run_for(499).unwrap(), 0);
    assert_eq!(c.run_for(1).unwrap(), 1);
    assert_eq!(c.session().current().y, 1);
}

#[test]
fn ticks_and_commands_share_one_queue() {
    let mut c = Controller::new(o_session(), 100, RecordingSink::default());
    c.push_command(GameCommand::SoftDrop);
    c.advance_time(200);
    c.push_command(GameCommand::MoveRight);
    c.pump().unwrap();

    let ys: Vec<i32> = c.sink().frames.iter().map(|f| f.current.y).collect();
    let xs: Vec<i32> = c.sink().frames.iter().map(|f| f.current.x).collect();
    assert_eq!(ys, [0, 1, 2, 3, 3]);
    assert_eq!(xs, [4, 4, 4, 4, 5]);
}

#[test]
fn a_whole_game_runs_headless() {
    // With only O pieces dropped straight down, the middle columns fill up
    // and the game ends without clearing anything.
    let mut c = Controller::new(o_session(), 10, NullSink);
    c.run_for(1_000_000).unwrap();
    assert!(c.is_over());
    assert_eq!(c.session().score(), 0);
    assert_eq!(c.session().pieces_locked(), 10);
    assert!(c.snapshot().over);
}

#[test]
fn scheduler_is_cancelled_exactly_once() {
    let mut s = TickScheduler::new(500);
    assert_eq!(s.advance(1_000), 2);
    assert!(s.cancel());
    assert!(!s.cancel());
    assert_eq!(s.advance(1_000), 0);
    assert_eq!(s.fired(), 2);
}

#[test]
fn event_log_captures_a_session() {
    let path = std::env::temp_dir().join(format!(
        "blockfall-engine-test-{}.jsonl",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut grid = Grid::new(20, 10);
        for y in 2..20 {
            grid.set(4, y, Rgb::new(90, 90, 90));
        }
        let session = GameSession::with_grid(grid, 100, SequenceGenerator::new([ShapeKind::O]));
        let mut c = Controller::new(session, 500, NullSink).with_log(EventLog::open(&path).unwrap());
        c.push_command(GameCommand::Rotate);
        c.run_for(500).unwrap();
        assert!(c.is_over());
    }

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let types: Vec<&str> = records
        .iter()
        .map(|r| r["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, ["session_start", "event", "lock", "event", "game_over"]);

    assert_eq!(records[0]["rows"], 20);
    assert_eq!(records[0]["tick_ms"], 500);
    assert_eq!(records[1]["event"]["command"], "rotate");
    assert_eq!(records[2]["kind"], "O");
    assert_eq!(records[2]["y"], 0);
    assert_eq!(records[3]["event"], "tick");
    assert_eq!(records[4]["pieces"], 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn run_config_reads_overrides() {
    let config = RunConfig::from_lookup(|key| match key {
        "BLOCKFALL_TICK_MS" => Some("250".into()),
        "BLOCKFALL_COLS" => Some("12".into()),
        "BLOCKFALL_RANDOMIZER" => Some("bag".into()),
        _ => None,
    });
    assert_eq!(config.tick_period_ms, 250);
    assert_eq!(config.game.cols, 12);
    assert_eq!(config.game.rows, 20);
    assert_eq!(config.game.randomizer.as_str(), "bag");
    assert_eq!(config.log_path, None);
    assert_eq!(config.game.seed, None);
}

#[test]
fn only_a_parsed_seed_is_pinned() {
    let garbage = RunConfig::from_lookup(|key| (key == "BLOCKFALL_SEED").then(|| "tuesday".to_string()));
    assert_eq!(garbage.game.seed, None);

    let pinned = RunConfig::from_lookup(|key| (key == "BLOCKFALL_SEED").then(|| "42".to_string()));
    assert_eq!(pinned.game.seed, Some(42));
    assert_eq!(pinned.game.effective_seed(), 42);
}
