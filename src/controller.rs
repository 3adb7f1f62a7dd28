//! Input → state transitions.
//!
//! Input model: instead of acting on each key event individually, we keep
//! a `HeldKeys` table recording the frame of the last press/repeat event
//! for every key. Each frame the ship's movement flags and the fire flag
//! are derived from which keys are still "fresh", so Space and an arrow
//! can be held together.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol etc.): proper
//!   `Press` / `Repeat` / `Release` events, keys are dropped on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`). Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, TryRecvError};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracing::{info, warn};

use crate::compute::{start_game, tick, GameState, HitOutcome};

/// A key counts as held if seen within this many frames. The OS
/// key-repeat rate is ≥ 15 Hz, so 4 frames (≈133 ms at 30 FPS) is always
/// refreshed before expiry.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

// ── Held keys ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct HeldKeys {
    key_frame: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    pub fn press(&mut self, code: KeyCode, frame: u64) {
        self.key_frame.insert(code, frame);
    }

    pub fn release(&mut self, code: &KeyCode) {
        self.key_frame.remove(code);
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

pub struct GameController {
    pub state: GameState,
    keys: HeldKeys,
    frame: u64,
}

impl GameController {
    pub fn new(state: GameState) -> Self {
        GameController {
            state,
            keys: HeldKeys::default(),
            frame: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Apply every event waiting on `rx` without blocking. A closed channel
    /// means no quit key can ever arrive, so it is treated as a quit.
    pub fn drain_events(&mut self, rx: &Receiver<Event>) -> Control {
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    if self.handle_event(&event) == Control::Quit {
                        return Control::Quit;
                    }
                }
                Err(TryRecvError::Empty) => return Control::Continue,
                Err(TryRecvError::Disconnected) => {
                    warn!("input channel closed, quitting");
                    return Control::Quit;
                }
            }
        }
    }

    /// Apply one terminal event.
    pub fn handle_event(&mut self, event: &Event) -> Control {
        match event {
            Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) => match kind {
                KeyEventKind::Press => {
                    // Classic terminals report OS auto-repeat as fresh presses.
                    let repeat = self.keys.is_held(code, self.frame);
                    self.keys.press(*code, self.frame);
                    return self.check_keydown_events(*code, *modifiers, repeat);
                }
                KeyEventKind::Repeat => self.keys.press(*code, self.frame),
                KeyEventKind::Release => self.keys.release(code),
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.check_play_button(*column, *row),
            _ => {}
        }
        Control::Continue
    }

    /// One-shot actions bound to a key press. Quit always fires; the rest
    /// only on the first press of a hold.
    fn check_keydown_events(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        repeat: bool,
    ) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit;
            }
            _ if repeat => {}
            KeyCode::Char('p') | KeyCode::Char('P') if !self.state.stats.game_active => {
                start_game(&mut self.state);
            }
            KeyCode::Char('a') => self.state.settings.narrow_bullets(),
            KeyCode::Char('d') => self.state.settings.widen_bullets(),
            KeyCode::Char('w') => self.state.settings.speed_up_bullets(),
            KeyCode::Char('s') => self.state.settings.slow_down_bullets(),
            _ => {}
        }
        Control::Continue
    }

    /// Start a new game when Play is clicked while no game is running.
    fn check_play_button(&mut self, column: u16, row: u16) {
        if self.state.play_button.is_clicked(column, row) && !self.state.stats.game_active {
            info!("play button clicked");
            start_game(&mut self.state);
        }
    }

    /// Sync intent flags with the held keys and advance one frame.
    pub fn update(&mut self, now_ms: u64) -> Option<HitOutcome> {
        let frame = self.frame;
        self.state.ship.moving_left = self.keys.is_held(&KeyCode::Left, frame);
        self.state.ship.moving_right = self.keys.is_held(&KeyCode::Right, frame);
        self.state.fire_held = self.keys.is_held(&KeyCode::Char(' '), frame);

        let outcome = tick(&mut self.state, now_ms);
        self.frame += 1;
        outcome
    }
}
