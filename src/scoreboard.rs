//! Text prepared for the HUD. Drawing happens in the binary; this only
//! keeps the strings in sync with `GameStats`.

use crate::stats::GameStats;

#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    /// Number of reserve-ship icons to draw.
    pub ships: u32,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut board = Scoreboard::default();
        board.prep_score(stats);
        board.prep_high_score(stats);
        board.prep_level(stats);
        board.prep_ships(stats);
        board
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = format!("L{}", stats.level);
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships = stats.ships_left;
    }

    /// Raise the high score if the current score beats it.
    pub fn check_high_score(&mut self, stats: &mut GameStats) {
        if stats.score > stats.high_score {
            stats.high_score = stats.score;
            self.prep_high_score(stats);
        }
    }
}

/// Round to the nearest ten and group thousands with commas.
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
