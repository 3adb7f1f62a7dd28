use alien_invasion::scoreboard::{format_score, Scoreboard};
use alien_invasion::settings::Settings;
use alien_invasion::stats::{GameStats, HighScoreFile, StatsError};

fn file_with(contents: &str) -> (tempfile::TempDir, HighScoreFile) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high_score.txt");
    std::fs::write(&path, contents).unwrap();
    (dir, HighScoreFile::new(path))
}

// ── HighScoreFile ─────────────────────────────────────────────────────────────

#[test]
fn load_reads_stored_score() {
    let (_dir, file) = file_with("1500");
    assert_eq!(file.load(), 1500);
}

#[test]
fn load_ignores_surrounding_whitespace() {
    let (_dir, file) = file_with("  1500\n");
    assert_eq!(file.load(), 1500);
}

#[test]
fn load_missing_file_is_zero() {
    let dir = tempfile::tempdir().unwrap();
    let file = HighScoreFile::new(dir.path().join("nope.txt"));
    assert_eq!(file.load(), 0);
}

#[test]
fn load_garbage_is_zero() {
    let (_dir, file) = file_with("abc");
    assert_eq!(file.load(), 0);
    let (_dir, negative) = file_with("-5");
    assert_eq!(negative.load(), 0);
    let (_dir, empty) = file_with("");
    assert_eq!(empty.load(), 0);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let file = HighScoreFile::new(dir.path().join("high_score.txt"));
    for score in [0, 1, 999_999] {
        file.save(score).unwrap();
        assert_eq!(file.load(), score);
    }
}

#[test]
fn save_overwrites_previous_value() {
    let (_dir, file) = file_with("123456789");
    file.save(7).unwrap();
    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "7");
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = HighScoreFile::new(dir.path().join("missing").join("high_score.txt"));
    let err = file.save(10).unwrap_err();
    assert!(matches!(err, StatsError::Save { .. }));
}

#[test]
fn default_file_name() {
    let file = HighScoreFile::default();
    assert_eq!(file.path().to_str(), Some("high_score.txt"));
}

// ── GameStats ─────────────────────────────────────────────────────────────────

#[test]
fn reset_stats_keeps_high_score() {
    let settings = Settings::new(80, 24);
    let mut stats = GameStats::new(&settings, 300);
    stats.score = 120;
    stats.level = 3;
    stats.ships_left = 1;

    stats.reset_stats(&settings);

    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.ships_left, settings.ship_limit);
    assert_eq!(stats.high_score, 300);
    assert!(!stats.game_active);
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[test]
fn scores_round_to_tens_with_separators() {
    assert_eq!(format_score(0), "0");
    assert_eq!(format_score(50), "50");
    assert_eq!(format_score(1234), "1,230");
    assert_eq!(format_score(1235), "1,240");
    assert_eq!(format_score(123_450), "123,450");
    assert_eq!(format_score(999_999), "1,000,000");
}

#[test]
fn scoreboard_texts_follow_stats() {
    let settings = Settings::new(80, 24);
    let mut stats = GameStats::new(&settings, 2000);
    let mut board = Scoreboard::new(&stats);
    assert_eq!(board.score_text, "0");
    assert_eq!(board.high_score_text, "2,000");
    assert_eq!(board.level_text, "L1");
    assert_eq!(board.ships, 3);

    stats.level = 4;
    stats.ships_left = 2;
    board.prep_level(&stats);
    board.prep_ships(&stats);
    assert_eq!(board.level_text, "L4");
    assert_eq!(board.ships, 2);
}

#[test]
fn check_high_score_only_raises() {
    let settings = Settings::new(80, 24);
    let mut stats = GameStats::new(&settings, 500);
    let mut board = Scoreboard::new(&stats);

    stats.score = 400;
    board.check_high_score(&mut stats);
    assert_eq!(stats.high_score, 500);

    stats.score = 650;
    board.check_high_score(&mut stats);
    assert_eq!(stats.high_score, 650);
    assert_eq!(board.high_score_text, "650");
}
