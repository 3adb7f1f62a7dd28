//! Game tuning — static values plus the "dynamic" ones that difficulty
//! scaling and the debug keys change at runtime.
//!
//! Units are terminal cells and frames (the loop runs at ≈30 FPS).

use crossterm::style::Color;

use crate::geometry::Rect;

// ── Dynamic defaults ──────────────────────────────────────────────────────────

const SHIP_SPEED: f32 = 1.0;
const BULLET_SPEED: f32 = 1.0;
const ALIEN_SPEED: f32 = 0.25;
const ALIEN_POINTS: u32 = 50;

// ── Debug-key steps ───────────────────────────────────────────────────────────

const BULLET_NARROW_STEP: i32 = 1;
const BULLET_WIDEN_STEP: i32 = 2;
const BULLET_SPEED_STEP: f32 = 0.5;

/// Horizontal sign shared by the whole fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    Right,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Left => -1.0,
            FleetDirection::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Left => FleetDirection::Right,
            FleetDirection::Right => FleetDirection::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Color,

    pub ship_limit: u32,

    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Color,
    pub bullets_allowed: usize,

    pub fleet_drop_speed: f32,

    /// How quickly the game speeds up per level.
    pub speedup_scale: f32,
    /// How quickly alien point values grow per level.
    pub score_scale: f32,

    // Reset by `initialize_dynamic_settings`.
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub fleet_direction: FleetDirection,
    pub alien_points: u32,
}

impl Settings {
    pub fn new(screen_width: u16, screen_height: u16) -> Self {
        let mut settings = Settings {
            screen_width: screen_width as i32,
            screen_height: screen_height as i32,
            bg_color: Color::Black,
            ship_limit: 3,
            bullet_width: 1,
            bullet_height: 1,
            bullet_color: Color::Cyan,
            bullets_allowed: 3,
            fleet_drop_speed: 1.0,
            speedup_scale: 1.1,
            score_scale: 1.5,
            ship_speed: SHIP_SPEED,
            bullet_speed: BULLET_SPEED,
            alien_speed: ALIEN_SPEED,
            fleet_direction: FleetDirection::Right,
            alien_points: ALIEN_POINTS,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    pub fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }

    /// Restore everything that changes as the game progresses.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = SHIP_SPEED;
        self.bullet_speed = BULLET_SPEED;
        self.alien_speed = ALIEN_SPEED;
        self.fleet_direction = FleetDirection::Right;
        self.alien_points = ALIEN_POINTS;
    }

    /// Level-up scaling: faster everything, more points per alien.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }

    // ── Debug keys ────────────────────────────────────────────────────────────

    pub fn narrow_bullets(&mut self) {
        if self.bullet_width > BULLET_NARROW_STEP {
            self.bullet_width -= BULLET_NARROW_STEP;
        }
    }

    pub fn widen_bullets(&mut self) {
        self.bullet_width += BULLET_WIDEN_STEP;
    }

    pub fn speed_up_bullets(&mut self) {
        self.bullet_speed += BULLET_SPEED_STEP;
    }

    pub fn slow_down_bullets(&mut self) {
        if self.bullet_speed > BULLET_SPEED_STEP {
            self.bullet_speed -= BULLET_SPEED_STEP;
        }
    }
}
