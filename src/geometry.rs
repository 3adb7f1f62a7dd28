//! Integer rectangles in terminal cells.
//!
//! `x`/`y` is the top-left cell; `right()` and `bottom()` are exclusive,
//! so a 3-wide rect at x = 0 covers columns 0, 1 and 2.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn centery(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Centre-bottom anchor point.
    pub fn midbottom(&self) -> (i32, i32) {
        (self.centerx(), self.bottom())
    }

    /// Centre-top anchor point.
    pub fn midtop(&self) -> (i32, i32) {
        (self.centerx(), self.top())
    }

    /// Move the rect so its centre-bottom sits on `(x, y)`.
    pub fn set_midbottom(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.w / 2;
        self.y = y - self.h;
    }

    /// Move the rect so its centre-top sits on `(x, y)`.
    pub fn set_midtop(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.w / 2;
        self.y = y;
    }

    /// Move the rect so its centre sits on `(x, y)`.
    pub fn set_center(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.w / 2;
        self.y = y - self.h / 2;
    }

    /// Strict overlap test: rects that only share an edge do not collide,
    /// and empty rects never collide.
    pub fn colliderect(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn collidepoint(&self, px: i32, py: i32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}
