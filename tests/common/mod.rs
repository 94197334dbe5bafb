#![allow(dead_code)]

use std::collections::VecDeque;

use arena_shooter::backend::{Backend, InputEvent, Rgb};
use arena_shooter::entities::{Point, Rect};
use arena_shooter::error::GameError;
use arena_shooter::input::KeyState;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Rgb),
    Rect(Rect, Rgb),
    Ellipse(Rect, Rgb),
    Line(Point, Point, Rgb),
    Text(Point, String, Rgb),
    Present,
}

/// Records every draw call and replays scripted input, one batch per poll.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Vec<DrawCall>,
    pub script: VecDeque<Vec<InputEvent>>,
    pub keys: KeyState,
    pub mouse: Point,
    pub polls: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            script: batches.into(),
            ..Self::default()
        }
    }

    /// Calls between the last `Clear` and the following `Present`.
    pub fn last_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear(_)))
            .unwrap_or(0);
        &self.calls[start..]
    }

    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Present).count()
    }
}

impl Backend for RecordingBackend {
    fn clear(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        self.calls.push(DrawCall::Rect(rect, color));
    }

    fn draw_ellipse(&mut self, rect: Rect, color: Rgb) {
        self.calls.push(DrawCall::Ellipse(rect, color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) {
        self.calls.push(DrawCall::Line(from, to, color));
    }

    fn draw_text(&mut self, pos: Point, text: &str, color: Rgb) {
        self.calls.push(DrawCall::Text(pos, text.to_string(), color));
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>, GameError> {
        self.polls += 1;
        Ok(self.script.pop_front().unwrap_or_default())
    }

    fn key_state(&self) -> KeyState {
        self.keys
    }

    fn mouse_pos(&self) -> Point {
        self.mouse
    }

    fn present(&mut self) -> Result<(), GameError> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}
