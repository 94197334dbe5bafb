/// The drawing/input surface the game runs against.
///
/// Drawing calls only touch an off-screen buffer and cannot fail; `poll_events`
/// and `present` talk to the outside world and return `GameError` on failure.

use crate::entities::{Point, Rect};
use crate::error::GameError;
use crate::input::KeyState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Window closed / quit key pressed.
    Quit,
    MouseDown { button: MouseButton, pos: Point },
}

pub trait Backend {
    fn clear(&mut self, color: Rgb);
    fn draw_rect(&mut self, rect: Rect, color: Rgb);
    fn draw_ellipse(&mut self, rect: Rect, color: Rgb);
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb);
    fn draw_text(&mut self, pos: Point, text: &str, color: Rgb);

    /// Drain every event received since the previous call.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, GameError>;
    fn key_state(&self) -> KeyState;
    fn mouse_pos(&self) -> Point;

    /// Show the finished frame.
    fn present(&mut self) -> Result<(), GameError>;
}
