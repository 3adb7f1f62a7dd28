//! Game entities — a float position for sub-cell movement plus the
//! integer rect derived from it, which is what collisions and drawing use.

use crate::geometry::Rect;
use crate::settings::Settings;

// ── Sprite sizes (cells) ──────────────────────────────────────────────────────

pub const SHIP_WIDTH: i32 = 3;
pub const SHIP_HEIGHT: i32 = 2;
pub const ALIEN_WIDTH: i32 = 3;
pub const ALIEN_HEIGHT: i32 = 2;

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    /// Horizontal position (fractional columns).
    pub x: f32,
    pub rect: Rect,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    /// A new ship sits at the bottom centre of the screen.
    pub fn new(screen: &Rect) -> Self {
        let mut ship = Ship {
            x: 0.0,
            rect: Rect::new(0, 0, SHIP_WIDTH, SHIP_HEIGHT),
            moving_right: false,
            moving_left: false,
        };
        ship.center_ship(screen);
        ship
    }

    /// Apply the movement flags, never leaving the screen.
    pub fn update(&mut self, settings: &Settings, screen: &Rect) {
        if self.moving_right && self.rect.right() < screen.right() {
            self.x += settings.ship_speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.x -= settings.ship_speed;
        }
        self.rect.x = self.x.round() as i32;
    }

    pub fn center_ship(&mut self, screen: &Rect) {
        self.rect.set_midbottom(screen.midbottom());
        self.x = self.rect.x as f32;
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    /// Vertical position (fractional rows).
    pub y: f32,
    pub rect: Rect,
}

impl Bullet {
    /// Spawn at the ship's nose using the current bullet size.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_midtop(ship.rect.midtop());
        Bullet { y: rect.y as f32, rect }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y.round() as i32;
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    /// Horizontal position (fractional columns).
    pub x: f32,
    /// Vertical position (fractional rows).
    pub y: f32,
    pub rect: Rect,
}

impl Alien {
    pub fn new(x: f32, y: f32) -> Self {
        Alien {
            x,
            y,
            rect: Rect::new(x.round() as i32, y.round() as i32, ALIEN_WIDTH, ALIEN_HEIGHT),
        }
    }

    /// True if the alien touches the left or right edge of the screen.
    pub fn check_edges(&self, screen: &Rect) -> bool {
        self.rect.right() >= screen.right() || self.rect.left() <= 0
    }

    /// March sideways in the fleet direction.
    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction.sign();
        self.rect.x = self.x.round() as i32;
    }

    pub fn drop_by(&mut self, rows: f32) {
        self.y += rows;
        self.rect.y = self.y.round() as i32;
    }
}
