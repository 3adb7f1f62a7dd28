use std::sync::mpsc;

use alien_invasion::compute::init_state;
use alien_invasion::controller::*;
use alien_invasion::settings::Settings;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

fn make_controller() -> GameController {
    GameController::new(init_state(Settings::new(80, 24), 0))
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ── Start / quit ──────────────────────────────────────────────────────────────

#[test]
fn p_starts_game_when_inactive() {
    let mut c = make_controller();
    assert_eq!(c.handle_event(&press(KeyCode::Char('p'))), Control::Continue);
    assert!(c.state.stats.game_active);
}

#[test]
fn p_is_ignored_while_playing() {
    let mut c = make_controller();
    c.handle_event(&press(KeyCode::Char('p')));
    c.state.stats.score = 300;
    c.handle_event(&press(KeyCode::Char('p')));
    assert_eq!(c.state.stats.score, 300);
}

#[test]
fn quit_keys() {
    let mut c = make_controller();
    assert_eq!(c.handle_event(&press(KeyCode::Char('q'))), Control::Quit);
    assert_eq!(c.handle_event(&press(KeyCode::Esc)), Control::Quit);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(c.handle_event(&ctrl_c), Control::Quit);
}

#[test]
fn clicking_play_starts_game() {
    let mut c = make_controller();
    // button is 12×3 centred on (40, 12)
    c.handle_event(&click(40, 12));
    assert!(c.state.stats.game_active);
}

#[test]
fn clicking_elsewhere_does_nothing() {
    let mut c = make_controller();
    c.handle_event(&click(0, 0));
    c.handle_event(&click(46, 12));
    assert!(!c.state.stats.game_active);
}

// ── Held keys ─────────────────────────────────────────────────────────────────

#[test]
fn held_key_expires_without_repeats() {
    let mut keys = HeldKeys::default();
    keys.press(KeyCode::Left, 10);
    assert!(keys.is_held(&KeyCode::Left, 10));
    assert!(keys.is_held(&KeyCode::Left, 10 + HOLD_WINDOW));
    assert!(!keys.is_held(&KeyCode::Left, 11 + HOLD_WINDOW));
    assert!(!keys.is_held(&KeyCode::Right, 10));
}

#[test]
fn arrow_sets_movement_until_it_expires() {
    let mut c = make_controller();
    c.handle_event(&press(KeyCode::Right));
    for _ in 0..=HOLD_WINDOW {
        c.update(0);
        assert!(c.state.ship.moving_right);
    }
    c.update(0);
    assert!(!c.state.ship.moving_right);
}

#[test]
fn release_clears_intent_immediately() {
    let mut c = make_controller();
    c.handle_event(&press(KeyCode::Left));
    c.update(0);
    assert!(c.state.ship.moving_left);
    c.handle_event(&release(KeyCode::Left));
    c.update(0);
    assert!(!c.state.ship.moving_left);
}

#[test]
fn space_and_arrow_held_together() {
    let mut c = make_controller();
    c.handle_event(&press(KeyCode::Char('p')));
    c.handle_event(&press(KeyCode::Char(' ')));
    c.handle_event(&press(KeyCode::Right));
    c.update(1000);
    assert!(c.state.fire_held);
    assert!(c.state.ship.moving_right);
    assert_eq!(c.state.bullets.len(), 1);
    assert_eq!(c.frame(), 1);
}

// ── Debug keys ────────────────────────────────────────────────────────────────

#[test]
fn debug_keys_adjust_bullets() {
    let mut c = make_controller();
    c.handle_event(&press(KeyCode::Char('d')));
    assert_eq!(c.state.settings.bullet_width, 3);
    c.handle_event(&press(KeyCode::Char('a')));
    assert_eq!(c.state.settings.bullet_width, 2);
    c.handle_event(&press(KeyCode::Char('w')));
    assert_eq!(c.state.settings.bullet_speed, 1.5);
    c.handle_event(&press(KeyCode::Char('s')));
    c.handle_event(&release(KeyCode::Char('s')));
    c.handle_event(&press(KeyCode::Char('s')));
    assert_eq!(c.state.settings.bullet_speed, 0.5);
}

#[test]
fn auto_repeated_press_applies_debug_key_once() {
    let mut c = make_controller();
    // classic terminal: holding `d` arrives as a stream of presses
    for _ in 0..3 {
        c.handle_event(&press(KeyCode::Char('d')));
        c.update(0);
    }
    assert_eq!(c.state.settings.bullet_width, 3);
}

#[test]
fn debug_key_fires_again_after_hold_expires() {
    let mut c = make_controller();
    c.handle_event(&press(KeyCode::Char('d')));
    for _ in 0..=HOLD_WINDOW + 1 {
        c.update(0);
    }
    c.handle_event(&press(KeyCode::Char('d')));
    assert_eq!(c.state.settings.bullet_width, 5);
}

#[test]
fn held_quit_key_still_quits() {
    let mut c = make_controller();
    c.handle_event(&press(KeyCode::Esc));
    assert_eq!(c.handle_event(&press(KeyCode::Esc)), Control::Quit);
}

// ── Event channel ─────────────────────────────────────────────────────────────

#[test]
fn drain_applies_queued_events() {
    let mut c = make_controller();
    let (tx, rx) = mpsc::channel();
    tx.send(press(KeyCode::Char('p'))).unwrap();
    tx.send(press(KeyCode::Char('d'))).unwrap();
    assert_eq!(c.drain_events(&rx), Control::Continue);
    assert!(c.state.stats.game_active);
    assert_eq!(c.state.settings.bullet_width, 3);
    // nothing queued, sender alive
    assert_eq!(c.drain_events(&rx), Control::Continue);
}

#[test]
fn drain_stops_at_quit() {
    let mut c = make_controller();
    let (tx, rx) = mpsc::channel();
    tx.send(press(KeyCode::Char('q'))).unwrap();
    tx.send(press(KeyCode::Char('p'))).unwrap();
    assert_eq!(c.drain_events(&rx), Control::Quit);
    assert!(!c.state.stats.game_active);
}

#[test]
fn closed_input_channel_quits() {
    let mut c = make_controller();
    let (tx, rx) = mpsc::channel::<Event>();
    tx.send(press(KeyCode::Char('d'))).unwrap();
    drop(tx);
    assert_eq!(c.drain_events(&rx), Control::Quit);
    // events sent before the close were still applied
    assert_eq!(c.state.settings.bullet_width, 3);
}

#[test]
fn repeat_events_do_not_retrigger_actions() {
    let mut c = make_controller();
    let repeat = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('d'),
        KeyModifiers::NONE,
        KeyEventKind::Repeat,
    ));
    c.handle_event(&repeat);
    assert_eq!(c.state.settings.bullet_width, 1);
}
