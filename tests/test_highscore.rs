use std::path::PathBuf;

use dodge_hurdles::highscore::{HighScores, MAX_HIGH_SCORES};
use dodge_hurdles::StoreError;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "dodge_hurdles_test_{}_{}.json",
        name,
        std::process::id()
    ))
}

#[test]
fn zero_never_qualifies() {
    let board = HighScores::new();
    assert!(!board.qualifies(0));
    assert!(board.qualifies(1));
}

#[test]
fn add_score_keeps_descending_order() {
    let mut board = HighScores::new();
    assert_eq!(board.add_score(10, 2, 15), Some(1));
    assert_eq!(board.add_score(30, 4, 35), Some(1));
    assert_eq!(board.add_score(20, 3, 25), Some(2));
    let scores: Vec<u32> = board.entries.iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![30, 20, 10]);
    assert_eq!(board.top_score(), Some(30));
}

#[test]
fn ties_rank_behind_earlier_entries() {
    let mut board = HighScores::new();
    board.add_score(10, 1, 5);
    assert_eq!(board.add_score(10, 2, 12), Some(2));
    assert_eq!(board.entries[0].elapsed_secs, 5);
}

#[test]
fn full_board_only_takes_better_scores() {
    let mut board = HighScores::new();
    for score in 1..=MAX_HIGH_SCORES as u32 {
        board.add_score(score * 10, 1, 1);
    }
    assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
    assert!(!board.qualifies(10));
    assert_eq!(board.add_score(5, 1, 1), None);

    assert_eq!(board.add_score(15, 1, 1), Some(MAX_HIGH_SCORES));
    assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
    assert_eq!(board.entries.last().map(|e| e.score), Some(15));
}

#[test]
fn missing_file_loads_empty_board() {
    let path = temp_path("missing");
    let _ = std::fs::remove_file(&path);
    let board = HighScores::load(&path).unwrap();
    assert!(board.entries.is_empty());
}

#[test]
fn save_then_load_restores_board() {
    let path = temp_path("saved");
    let mut board = HighScores::new();
    board.add_score(42, 5, 48);
    board.add_score(7, 1, 9);
    board.save(&path).unwrap();

    let loaded = HighScores::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, board);
}

#[test]
fn load_sorts_and_trims_hand_edited_file() {
    let path = temp_path("unsorted");
    let entries: Vec<String> = (1..=12)
        .map(|s| format!(r#"{{"score":{},"level":1,"elapsed_secs":1}}"#, s))
        .collect();
    std::fs::write(&path, format!(r#"{{"entries":[{}]}}"#, entries.join(","))).unwrap();

    let loaded = HighScores::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded.entries.len(), MAX_HIGH_SCORES);
    assert_eq!(loaded.top_score(), Some(12));
    assert_eq!(loaded.entries.last().map(|e| e.score), Some(3));
}

#[test]
fn corrupt_file_is_a_json_error() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "not json").unwrap();
    let result = HighScores::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(StoreError::Json(_))));
}
