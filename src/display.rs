//! Rendering layer — all terminal drawing lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates
//! state into terminal commands.

use std::io::Write;

use alien_invasion::button::Button;
use alien_invasion::compute::GameState;
use alien_invasion::entities::{Alien, Bullet};
use alien_invasion::geometry::Rect;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SHIP: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HIGH: Color = Color::Magenta;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HUD_SHIPS: Color = Color::White;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let screen = state.settings.screen_rect();

    out.queue(style::SetBackgroundColor(state.settings.bg_color))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_ship(out, &state.ship.rect, &screen)?;
    for bullet in &state.bullets {
        draw_bullet(out, bullet, state.settings.bullet_color, &screen)?;
    }
    for alien in &state.aliens {
        draw_alien(out, alien, &screen)?;
    }

    draw_scoreboard(out, state)?;

    if !state.stats.game_active {
        draw_button(out, &state.play_button, &screen)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.bottom().saturating_sub(1) as u16))?;
    out.flush()?;
    Ok(())
}

/// Print `text` at `(x, y)` if the row is on screen. Columns are clipped
/// to the screen edges.
fn put<W: Write>(out: &mut W, x: i32, y: i32, text: &str, screen: &Rect) -> std::io::Result<()> {
    if y < screen.top() || y >= screen.bottom() {
        return Ok(());
    }
    let visible: String = text
        .chars()
        .enumerate()
        .filter(|(i, _)| {
            let col = x + *i as i32;
            col >= screen.left() && col < screen.right()
        })
        .map(|(_, c)| c)
        .collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(x.max(screen.left()) as u16, y as u16))?;
    out.queue(Print(visible))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, rect: &Rect, screen: &Rect) -> std::io::Result<()> {
    //  ▲     ← row y      (tip)
    // /█\    ← row y+1    (fuselage + wings)
    out.queue(style::SetForegroundColor(C_SHIP))?;
    put(out, rect.centerx(), rect.y, "▲", screen)?;
    put(out, rect.x, rect.y + 1, "/█\\", screen)?;
    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, alien: &Alien, screen: &Rect) -> std::io::Result<()> {
    // «▼»    ← swept-back wings
    // ╚═╝    ← engine block
    out.queue(style::SetForegroundColor(C_ALIEN))?;
    put(out, alien.rect.x, alien.rect.y, "«▼»", screen)?;
    put(out, alien.rect.x, alien.rect.y + 1, "╚═╝", screen)?;
    Ok(())
}

fn draw_bullet<W: Write>(
    out: &mut W,
    bullet: &Bullet,
    color: Color,
    screen: &Rect,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    let row = "█".repeat(bullet.rect.w.max(0) as usize);
    for y in bullet.rect.top()..bullet.rect.bottom() {
        put(out, bullet.rect.x, y, &row, screen)?;
    }
    Ok(())
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

fn draw_scoreboard<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let screen = state.settings.screen_rect();
    let board = &state.scoreboard;

    // Reserve ships — top left
    out.queue(style::SetForegroundColor(C_HUD_SHIPS))?;
    let ships = "▲ ".repeat(board.ships as usize);
    put(out, 1, 0, ships.trim_end(), &screen)?;

    // High score — top centre
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    let hx = screen.centerx() - board.high_score_text.chars().count() as i32 / 2;
    put(out, hx, 0, &board.high_score_text, &screen)?;

    // Score and level — top right, right-aligned
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    let sx = screen.right() - 1 - board.score_text.chars().count() as i32;
    put(out, sx, 0, &board.score_text, &screen)?;

    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    let lx = screen.right() - 1 - board.level_text.chars().count() as i32;
    put(out, lx, 1, &board.level_text, &screen)?;

    Ok(())
}

// ── Play button ───────────────────────────────────────────────────────────────

fn draw_button<W: Write>(out: &mut W, button: &Button, screen: &Rect) -> std::io::Result<()> {
    let rect = &button.rect;
    let blank = " ".repeat(rect.w.max(0) as usize);

    out.queue(style::SetBackgroundColor(button.button_color))?;
    for y in rect.top()..rect.bottom() {
        put(out, rect.x, y, &blank, screen)?;
    }

    out.queue(style::SetForegroundColor(button.text_color))?;
    let label_x = rect.centerx() - button.label.chars().count() as i32 / 2;
    put(out, label_x, rect.centery(), &button.label, screen)?;

    Ok(())
}
