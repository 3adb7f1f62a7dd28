use crossterm::style::Color;

use crate::geometry::Rect;

const BUTTON_WIDTH: i32 = 12;
const BUTTON_HEIGHT: i32 = 3;

/// The Play button shown while no game is running.
#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub button_color: Color,
    pub text_color: Color,
}

impl Button {
    /// A button centred on `screen`.
    pub fn new(screen: &Rect, label: &str) -> Self {
        let mut rect = Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT);
        rect.set_center((screen.centerx(), screen.centery()));
        Button {
            rect,
            label: label.to_string(),
            button_color: Color::Green,
            text_color: Color::White,
        }
    }

    pub fn is_clicked(&self, column: u16, row: u16) -> bool {
        self.rect.collidepoint(column as i32, row as i32)
    }
}
