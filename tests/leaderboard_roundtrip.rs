use noughts::domain::services::{Score, ScoreStore, Scores};
use noughts::infrastructure::persistence::JsonLeaderboard;
use std::fs;
use tempfile::tempdir;

fn scores(entries: &[(&str, Score)]) -> Scores {
    entries.iter().map(|(n, s)| (n.to_string(), *s)).collect()
}

#[test]
fn test_round_trip_preserves_mapping() {
    let dir = tempdir().unwrap();
    let store = JsonLeaderboard::new(dir.path().join("leaderboard.txt"));

    let cases = [
        scores(&[]),
        scores(&[("ann", 1)]),
        scores(&[("ann", 1), ("bob", -1), ("cy", 0)]),
        scores(&[("name with spaces", 3), ("ünïcødé", -7), ("\"quoted\"", i64::MAX)]),
    ];
    for saved in cases {
        store.save_scores(&saved).unwrap();
        assert_eq!(store.load_scores(), saved);
    }
}

#[test]
fn test_save_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let store = JsonLeaderboard::new(dir.path().join("leaderboard.txt"));

    store.save_scores(&scores(&[("ann", 1), ("bob", 1)])).unwrap();
    store.save_scores(&scores(&[("cy", 0)])).unwrap();

    assert_eq!(store.load_scores(), scores(&[("cy", 0)]));
}

#[test]
fn test_unreadable_store_loads_empty() {
    let dir = tempdir().unwrap();
    // A directory where the file should be cannot be read as text.
    let store = JsonLeaderboard::new(dir.path());
    assert!(store.load_scores().is_empty());
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let store = JsonLeaderboard::new(dir.path().join("no_such_dir").join("leaderboard.txt"));
    assert!(store.save_scores(&scores(&[("ann", 1)])).is_err());
}

#[test]
fn test_written_format_is_plain_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("leaderboard.txt");
    JsonLeaderboard::new(&path)
        .save_scores(&scores(&[("ann", 1)]))
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["ann"], 1);
}
