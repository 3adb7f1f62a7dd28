//! Game-logic functions.
//!
//! `GameState` owns every piece of mutable game data; the functions here
//! advance it in place. Nothing in this module sleeps or touches the
//! terminal, so the whole frame update can be driven from tests.

use tracing::{debug, info};

use crate::button::Button;
use crate::entities::{Alien, Bullet, Ship, ALIEN_HEIGHT, ALIEN_WIDTH};
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use crate::stats::GameStats;

/// Minimum time between auto-fired shots while fire is held.
pub const FIRE_COOLDOWN_MS: u64 = 200;

/// What a ship hit led to. The loop owner pauses briefly on `ShipLost`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    ShipLost,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub play_button: Button,
    /// Fire key held down.
    pub fire_held: bool,
    /// Time of the last auto-fire attempt, in ms since the clock started.
    pub last_fire_ms: Option<u64>,
    /// Set by a ship hit; the next tick builds the replacement fleet.
    pub fleet_pending: bool,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial (inactive) game with a fleet already on screen.
pub fn init_state(settings: Settings, high_score: u32) -> GameState {
    let screen = settings.screen_rect();
    let stats = GameStats::new(&settings, high_score);
    let mut state = GameState {
        scoreboard: Scoreboard::new(&stats),
        ship: Ship::new(&screen),
        bullets: Vec::new(),
        aliens: Vec::new(),
        play_button: Button::new(&screen, "Play"),
        fire_held: false,
        last_fire_ms: None,
        fleet_pending: false,
        stats,
        settings,
    };
    create_fleet(&mut state);
    state
}

/// Reset settings, stats and entities and begin playing.
pub fn start_game(state: &mut GameState) {
    state.settings.initialize_dynamic_settings();

    state.stats.reset_stats(&state.settings);
    state.stats.game_active = true;
    state.scoreboard.prep_score(&state.stats);
    state.scoreboard.prep_level(&state.stats);
    state.scoreboard.prep_ships(&state.stats);

    state.aliens.clear();
    state.bullets.clear();
    create_fleet(state);
    state.fleet_pending = false;
    state.ship.center_ship(&state.settings.screen_rect());

    info!(high_score = state.stats.high_score, "game started");
}

// ── Fleet ────────────────────────────────────────────────────────────────────

/// Fill the screen with a grid of aliens, one sprite apart in both axes.
pub fn create_fleet(state: &mut GameState) {
    let settings = &state.settings;

    let available_space_x = settings.screen_width - 2 * ALIEN_WIDTH;
    let number_aliens_x = (available_space_x / (2 * ALIEN_WIDTH)).max(0);

    let available_space_y = settings.screen_height - 3 * ALIEN_HEIGHT - state.ship.rect.h;
    let number_rows = (available_space_y / (2 * ALIEN_HEIGHT)).max(0);

    for row_number in 0..number_rows {
        for alien_number in 0..number_aliens_x {
            let x = ALIEN_WIDTH + 2 * ALIEN_WIDTH * alien_number;
            let y = ALIEN_HEIGHT + 2 * ALIEN_HEIGHT * row_number;
            state.aliens.push(Alien::new(x as f32, y as f32));
        }
    }

    debug!(
        columns = number_aliens_x,
        rows = number_rows,
        "fleet created"
    );
}

fn check_fleet_edges(state: &mut GameState) {
    let screen = state.settings.screen_rect();
    if state.aliens.iter().any(|a| a.check_edges(&screen)) {
        change_fleet_direction(state);
    }
}

/// Drop the whole fleet one step and reverse its direction.
fn change_fleet_direction(state: &mut GameState) {
    let drop = state.settings.fleet_drop_speed;
    for alien in &mut state.aliens {
        alien.drop_by(drop);
    }
    state.settings.fleet_direction = state.settings.fleet_direction.reversed();
}

// ── Bullets ──────────────────────────────────────────────────────────────────

/// Fire one bullet unless the on-screen cap is reached.
/// Returns whether a bullet was created.
pub fn fire_bullet(state: &mut GameState) -> bool {
    if state.bullets.len() >= state.settings.bullets_allowed {
        return false;
    }
    state.bullets.push(Bullet::new(&state.settings, &state.ship));
    true
}

/// Move bullets, drop the ones past the top, then resolve hits.
pub fn update_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.update(&state.settings);
    }
    state.bullets.retain(|b| b.rect.bottom() > 0);

    check_bullet_alien_collisions(state);
}

/// Remove every overlapping bullet/alien pair and score the kills.
/// Clearing the fleet advances to the next level. Returns the number of
/// aliens destroyed.
pub fn check_bullet_alien_collisions(state: &mut GameState) -> usize {
    let mut hit = vec![false; state.aliens.len()];
    state.bullets.retain(|bullet| {
        let mut spent = false;
        for (i, alien) in state.aliens.iter().enumerate() {
            if bullet.rect.colliderect(&alien.rect) {
                hit[i] = true;
                spent = true;
            }
        }
        !spent
    });

    let killed = hit.iter().filter(|&&h| h).count();
    if killed > 0 {
        let mut flags = hit.iter();
        state.aliens.retain(|_| !flags.next().copied().unwrap_or(false));

        // Points grow ×1.5 per level; long runs pin at u32::MAX.
        let gained = state.settings.alien_points.saturating_mul(killed as u32);
        state.stats.score = state.stats.score.saturating_add(gained);
        state.scoreboard.prep_score(&state.stats);
        state.scoreboard.check_high_score(&mut state.stats);
    }

    if state.aliens.is_empty() && !state.fleet_pending {
        start_new_level(state);
    }

    killed
}

fn start_new_level(state: &mut GameState) {
    state.bullets.clear();
    create_fleet(state);
    state.settings.increase_speed();

    state.stats.level += 1;
    state.scoreboard.prep_level(&state.stats);
    info!(level = state.stats.level, score = state.stats.score, "level cleared");
}

// ── Aliens & ship hits ───────────────────────────────────────────────────────

/// Move the fleet and check whether it reached the ship or the bottom.
pub fn update_aliens(state: &mut GameState) -> Option<HitOutcome> {
    check_fleet_edges(state);
    for alien in &mut state.aliens {
        alien.update(&state.settings);
    }

    let ship_rect = state.ship.rect;
    if state.aliens.iter().any(|a| a.rect.colliderect(&ship_rect)) {
        return Some(ship_hit(state));
    }

    let bottom = state.settings.screen_rect().bottom();
    if state.aliens.iter().any(|a| a.rect.bottom() >= bottom) {
        return Some(ship_hit(state));
    }

    None
}

/// Lose a ship. With ships to spare the board is cleared and the ship
/// recentred; the replacement fleet appears on the next tick.
pub fn ship_hit(state: &mut GameState) -> HitOutcome {
    state.stats.ships_left = state.stats.ships_left.saturating_sub(1);
    state.scoreboard.prep_ships(&state.stats);

    if state.stats.ships_left > 0 {
        state.aliens.clear();
        state.bullets.clear();
        state.fleet_pending = true;
        state.ship.center_ship(&state.settings.screen_rect());
        debug!(ships_left = state.stats.ships_left, "ship hit");
        HitOutcome::ShipLost
    } else {
        state.stats.game_active = false;
        info!(score = state.stats.score, level = state.stats.level, "game over");
        HitOutcome::GameOver
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance an active game by one frame. `now_ms` is a monotonic clock
/// reading used for the auto-fire cooldown.
pub fn tick(state: &mut GameState, now_ms: u64) -> Option<HitOutcome> {
    if !state.stats.game_active {
        return None;
    }

    if state.fleet_pending {
        create_fleet(state);
        state.fleet_pending = false;
    }

    let screen = state.settings.screen_rect();
    state.ship.update(&state.settings, &screen);

    if state.fire_held {
        let ready = state
            .last_fire_ms
            .map(|last| now_ms.saturating_sub(last) > FIRE_COOLDOWN_MS)
            .unwrap_or(true);
        if ready {
            fire_bullet(state);
            state.last_fire_ms = Some(now_ms);
        }
    }

    update_bullets(state);
    update_aliens(state)
}
