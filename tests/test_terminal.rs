use crossterm::event::{KeyCode, KeyModifiers};

use arena_shooter::input::Key;
use arena_shooter::terminal::{is_quit, key_for};

#[test]
fn wasd_and_arrows_map_to_the_same_keys() {
    assert_eq!(key_for(&KeyCode::Char('w')), Some(Key::Up));
    assert_eq!(key_for(&KeyCode::Up), Some(Key::Up));
    assert_eq!(key_for(&KeyCode::Char('A')), Some(Key::Left));
    assert_eq!(key_for(&KeyCode::Left), Some(Key::Left));
    assert_eq!(key_for(&KeyCode::Char('s')), Some(Key::Down));
    assert_eq!(key_for(&KeyCode::Right), Some(Key::Right));
    assert_eq!(key_for(&KeyCode::Char(' ')), None);
}

#[test]
fn quit_keys() {
    assert!(is_quit(&KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(is_quit(&KeyCode::Esc, KeyModifiers::NONE));
    assert!(is_quit(&KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!is_quit(&KeyCode::Char('c'), KeyModifiers::NONE));
    assert!(!is_quit(&KeyCode::Char('d'), KeyModifiers::NONE));
}

#[test]
fn leave_screen_restores_cursor_and_main_screen() {
    let mut out: Vec<u8> = Vec::new();
    arena_shooter::terminal::leave_screen(&mut out);
    let written = String::from_utf8_lossy(&out);
    assert!(written.contains("\x1b[?25h"), "cursor not shown: {written:?}");
    assert!(written.contains("\x1b[?1049l"), "alt screen not left: {written:?}");
}
