/// Terminal backend — all terminal I/O lives here.
///
/// Draw calls rasterise into a `Canvas`; `present` flushes it with crossterm.
/// A dedicated thread blocks on `event::read` and feeds a channel so the frame
/// loop never has to block on I/O.

use std::io::Write;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use tracing::{debug, warn};

use crate::backend::{Backend, InputEvent, MouseButton, Rgb};
use crate::canvas::Canvas;
use crate::entities::{Point, Rect};
use crate::error::GameError;
use crate::input::{Key, KeyState, KeyTracker};

pub const MIN_COLS: u16 = 20;
pub const MIN_ROWS: u16 = 8;

/// Logical key for a terminal key code.  Arrows alias W/A/S/D.
pub fn key_for(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Key::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Key::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Key::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

/// Whether a key press should end the session.
pub fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn mouse_button(button: event::MouseButton) -> MouseButton {
    match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Middle => MouseButton::Middle,
        event::MouseButton::Right => MouseButton::Right,
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

fn check_size(cols: u16, rows: u16) -> Result<(), GameError> {
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }
    Ok(())
}

fn enter_screen<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;
    Ok(())
}

/// Best-effort undo of `enter_screen` after a partial failure.  Each command
/// is harmless if its counterpart never ran.
pub fn leave_screen<W: Write>(out: &mut W) {
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
}

pub struct TerminalBackend<W: Write> {
    out: W,
    canvas: Canvas,
    rx: Receiver<Event>,
    keys: KeyTracker,
    frame: u64,
    mouse: Point,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalBackend<W> {
    /// Put the terminal into raw alternate-screen mode with mouse capture and
    /// start the input reader thread.
    pub fn open(mut out: W, world_w: f32, world_h: f32) -> Result<Self, GameError> {
        let (cols, rows) = terminal::size()?;
        check_size(cols, rows)?;

        terminal::enable_raw_mode()?;
        if let Err(e) = enter_screen(&mut out) {
            leave_screen(&mut out);
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }

        // Request key-release (and key-repeat) events from the terminal.
        // kitty-protocol terminals support this; others fall back to the
        // hold window in `KeyTracker`.
        let keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → backend shut down
                    }
                }
                Err(_) => break,
            }
        });

        debug!(cols, rows, keyboard_enhanced, "terminal backend opened");
        Ok(Self {
            out,
            canvas: Canvas::new(cols, rows, world_w, world_h),
            rx,
            keys: KeyTracker::default(),
            frame: 0,
            mouse: (world_w / 2.0, world_h / 2.0),
            keyboard_enhanced,
        })
    }

    /// Restore the terminal.  Every step is attempted even if an earlier one
    /// fails; the first error is reported.
    pub fn shutdown(mut self) -> Result<(), GameError> {
        let mut first_err: Option<std::io::Error> = None;
        let mut note = |r: std::io::Result<()>| {
            if let Err(e) = r {
                warn!(error = %e, "terminal restore step failed");
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        };
        if self.keyboard_enhanced {
            note(self.out.execute(PopKeyboardEnhancementFlags).map(|_| ()));
        }
        note(self.out.execute(DisableMouseCapture).map(|_| ()));
        note(self.out.execute(style::ResetColor).map(|_| ()));
        note(self.out.execute(cursor::Show).map(|_| ()));
        note(self.out.execute(terminal::LeaveAlternateScreen).map(|_| ()));
        note(terminal::disable_raw_mode());
        debug!("terminal backend closed");
        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, events: &mut Vec<InputEvent>) {
        let KeyEvent {
            code,
            kind,
            modifiers,
            ..
        } = key;
        match kind {
            KeyEventKind::Press => {
                if is_quit(&code, modifiers) {
                    events.push(InputEvent::Quit);
                } else if let Some(k) = key_for(&code) {
                    self.keys.press(k, self.frame);
                }
            }
            // Repeat: refresh timestamp so the key stays "held"
            KeyEventKind::Repeat => {
                if let Some(k) = key_for(&code) {
                    self.keys.press(k, self.frame);
                }
            }
            // Release: only sent by keyboard-enhanced terminals
            KeyEventKind::Release => {
                if let Some(k) = key_for(&code) {
                    self.keys.release(k);
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, events: &mut Vec<InputEvent>) {
        let pos = self.canvas.cell_to_world(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.mouse = pos,
            MouseEventKind::Down(button) => {
                self.mouse = pos;
                events.push(InputEvent::MouseDown {
                    button: mouse_button(button),
                    pos,
                });
            }
            _ => {}
        }
    }
}

impl<W: Write> Backend for TerminalBackend<W> {
    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        self.canvas.fill_rect(rect, color);
    }

    fn draw_ellipse(&mut self, rect: Rect, color: Rgb) {
        self.canvas.fill_ellipse(rect, color);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) {
        self.canvas.line(from, to, color);
    }

    fn draw_text(&mut self, pos: Point, text: &str, color: Rgb) {
        self.canvas.text(pos, text, color);
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>, GameError> {
        self.frame += 1;
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(Event::Key(key)) => self.handle_key(key, &mut events),
                Ok(Event::Mouse(mouse)) => self.handle_mouse(mouse, &mut events),
                Ok(Event::Resize(cols, rows)) => {
                    debug!(cols, rows, "terminal resized");
                    self.canvas.resize(cols, rows);
                }
                Ok(_) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Err(GameError::InputClosed),
            }
        }
        Ok(events)
    }

    fn key_state(&self) -> KeyState {
        self.keys.snapshot(self.frame)
    }

    fn mouse_pos(&self) -> Point {
        self.mouse
    }

    fn present(&mut self) -> Result<(), GameError> {
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        for row in 0..self.canvas.rows() {
            self.out.queue(cursor::MoveTo(0, row))?;
            let mut run = String::new();
            for cell in self.canvas.row(row) {
                if fg != Some(cell.fg) || bg != Some(cell.bg) {
                    if !run.is_empty() {
                        self.out.queue(Print(&run))?;
                        run.clear();
                    }
                    if fg != Some(cell.fg) {
                        self.out.queue(style::SetForegroundColor(to_color(cell.fg)))?;
                        fg = Some(cell.fg);
                    }
                    if bg != Some(cell.bg) {
                        self.out.queue(style::SetBackgroundColor(to_color(cell.bg)))?;
                        bg = Some(cell.bg);
                    }
                }
                run.push(cell.glyph);
            }
            if !run.is_empty() {
                self.out.queue(Print(&run))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}
