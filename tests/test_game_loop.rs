mod common;

use arena_shooter::backend::{InputEvent, MouseButton};
use arena_shooter::config::GameConfig;
use arena_shooter::entities::GameState;
use arena_shooter::error::GameError;
use arena_shooter::game_loop::*;
use arena_shooter::input::{Key, KeyState};

use rand::rngs::StdRng;
use rand::SeedableRng;

use common::{DrawCall, RecordingBackend};

fn quiet_state() -> GameState {
    let mut s = GameState::empty(GameConfig::default());
    s.spawn_timer = 100.0;
    s
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(3)
}

fn left_click() -> InputEvent {
    InputEvent::MouseDown {
        button: MouseButton::Left,
        pos: (0.0, 0.0),
    }
}

#[test]
fn quit_event_stops_without_rendering() {
    let mut b = RecordingBackend::with_script(vec![vec![InputEvent::Quit]]);
    let out = run_frame(&mut b, &quiet_state(), 0.016, &mut seeded_rng()).unwrap();
    assert!(out.is_none());
    assert!(b.calls.is_empty());
}

#[test]
fn frame_renders_and_presents() {
    let mut b = RecordingBackend::new();
    let out = run_frame(&mut b, &quiet_state(), 0.016, &mut seeded_rng()).unwrap();
    assert_eq!(out.unwrap().frame, 1);
    assert_eq!(b.presents(), 1);
}

#[test]
fn left_click_aims_at_current_mouse_position() {
    let mut b = RecordingBackend::with_script(vec![vec![left_click()]]);
    b.mouse = (512.0, 0.0); // straight above the player
    let s = run_frame(&mut b, &quiet_state(), 0.0, &mut seeded_rng())
        .unwrap()
        .unwrap();
    assert_eq!(s.bullets.len(), 1);
    assert!(s.bullets[0].vy < -619.0);
}

#[test]
fn other_buttons_do_not_fire() {
    let mut b = RecordingBackend::with_script(vec![vec![
        InputEvent::MouseDown {
            button: MouseButton::Right,
            pos: (0.0, 0.0),
        },
        InputEvent::MouseDown {
            button: MouseButton::Middle,
            pos: (0.0, 0.0),
        },
    ]]);
    let s = run_frame(&mut b, &quiet_state(), 0.016, &mut seeded_rng())
        .unwrap()
        .unwrap();
    assert!(s.bullets.is_empty());
}

#[test]
fn every_click_in_a_batch_fires() {
    let mut b = RecordingBackend::with_script(vec![vec![left_click(), left_click()]]);
    b.mouse = (900.0, 100.0);
    let input = collect_input(&mut b).unwrap().unwrap();
    assert_eq!(input.clicks, vec![(900.0, 100.0), (900.0, 100.0)]);
}

#[test]
fn held_keys_move_the_player() {
    let mut b = RecordingBackend::new();
    b.keys = KeyState::with(&[Key::Down]);
    let s = run_frame(&mut b, &quiet_state(), 0.1, &mut seeded_rng())
        .unwrap()
        .unwrap();
    assert!((s.player.y - 334.0).abs() < 1e-3);
}

#[test]
fn hud_reflects_the_stepped_state() {
    let mut b = RecordingBackend::new();
    let mut s = quiet_state();
    s.player.score = 42;
    run_frame(&mut b, &s, 0.016, &mut seeded_rng()).unwrap();
    assert!(b
        .last_frame()
        .iter()
        .any(|c| matches!(c, DrawCall::Text(_, t, _) if t == "Score: 42  Lives: 3")));
}

#[test]
fn run_plays_until_quit() {
    let mut b = RecordingBackend::with_script(vec![vec![], vec![], vec![InputEvent::Quit]]);
    let state = run(&mut b, GameConfig::default(), &mut seeded_rng()).unwrap();
    assert_eq!(state.frame, 2);
    assert_eq!(b.polls, 3);
    assert_eq!(b.presents(), 2);
}

#[test]
fn run_rejects_invalid_config() {
    let mut b = RecordingBackend::new();
    let cfg = GameConfig {
        target_fps: 0,
        ..GameConfig::default()
    };
    let err = run(&mut b, cfg, &mut seeded_rng()).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
    assert_eq!(b.polls, 0);
}
