use std::time::Duration;

use blockfall::core::{Game, GameConfig, SequenceSpawner};
use blockfall::journal::EventJournal;
use blockfall::types::{InputEvent, ShapeKind};

#[test]
fn test_journal_lines_parse_as_json() {
    let config = GameConfig {
        restart_on_game_over: false,
        ..GameConfig::default()
    };
    let mut game = Game::with_spawner(config, SequenceSpawner::new([ShapeKind::O]));
    let mut journal = EventJournal::new(Vec::new());

    journal.record_all(Duration::ZERO, game.start()).unwrap();
    for i in 0..400u64 {
        let events = game.frame_update(Duration::from_millis(16), &[InputEvent::DownDown, InputEvent::DownUp]);
        journal.record_all(Duration::from_millis(16 * i), events).unwrap();
    }
    assert!(game.is_game_over());

    let count = journal.len();
    let text = String::from_utf8(journal.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len() as u64, count);

    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line["seq"], (i + 1) as u64);
    }
    assert_eq!(lines[0]["event"], "spawned");
    assert_eq!(lines[0]["kind"], "o");

    let locked = lines.iter().find(|l| l["event"] == "locked").unwrap();
    assert_eq!(locked["report"]["rows_cleared"], 0);
    assert_eq!(locked["score"], 0);

    let last = lines.last().unwrap();
    assert_eq!(last["event"], "game_over");
    assert_eq!(last["score"], 0);
}

#[test]
fn test_open_appends() {
    let path = std::env::temp_dir().join(format!("blockfall-journal-{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);

    for _ in 0..2 {
        let mut journal = EventJournal::open(&path).unwrap();
        journal
            .record(Duration::ZERO, &blockfall::types::GameEvent::Restarted)
            .unwrap();
        journal.flush().unwrap();
    }
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    let _ = std::fs::remove_file(&path);
}
