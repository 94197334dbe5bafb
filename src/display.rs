/// Render stage — translates game state into backend draw calls.
///
/// No game logic is performed here.  Draw order is fixed: background, grid,
/// bullets, enemies, pickups, player, HUD.

use crate::backend::{Backend, Rgb};
use crate::entities::{GameState, Rect};
use crate::error::GameError;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Rgb = Rgb(7, 17, 26);
/// White at ~5% over the background.
pub const C_GRID: Rgb = Rgb(19, 28, 37);
pub const C_BULLET: Rgb = Rgb(255, 217, 90);
pub const C_ENEMY: Rgb = Rgb(255, 100, 100);
pub const C_PICKUP: Rgb = Rgb(102, 217, 255);
pub const C_PLAYER: Rgb = Rgb(126, 242, 184);
pub const C_PLAYER_INVULNERABLE: Rgb = Rgb(200, 200, 200);
pub const C_HUD: Rgb = Rgb(200, 200, 200);

pub const HUD_POS: (f32, f32) = (8.0, 8.0);

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame and present it.
pub fn render<B: Backend + ?Sized>(out: &mut B, state: &GameState) -> Result<(), GameError> {
    out.clear(C_BACKGROUND);
    draw_grid(out, state);

    for b in &state.bullets {
        out.draw_ellipse(b.rect(), C_BULLET);
    }
    for e in &state.enemies {
        out.draw_rect(e.rect(), C_ENEMY);
    }
    for p in &state.pickups {
        out.draw_ellipse(p.rect(), C_PICKUP);
    }

    draw_player(out, state);
    draw_hud(out, state);

    out.present()
}

// ── Background ───────────────────────────────────────────────────────────────

fn draw_grid<B: Backend + ?Sized>(out: &mut B, state: &GameState) {
    let cfg = &state.config;
    let (w, h) = (cfg.width, cfg.height);
    for x in (0..w.ceil() as usize).step_by(cfg.grid_step) {
        out.draw_line((x as f32, 0.0), (x as f32, h), C_GRID);
    }
    for y in (0..h.ceil() as usize).step_by(cfg.grid_step) {
        out.draw_line((0.0, y as f32), (w, y as f32), C_GRID);
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Player colour is purely cosmetic: grey while the invulnerability timer runs.
pub fn player_color(invulnerable: f32) -> Rgb {
    if invulnerable <= 0.0 {
        C_PLAYER
    } else {
        C_PLAYER_INVULNERABLE
    }
}

fn draw_player<B: Backend + ?Sized>(out: &mut B, state: &GameState) {
    let p = &state.player;
    out.draw_rect(Rect::new(p.x, p.y, p.w, p.h), player_color(p.invulnerable));
}

// ── HUD ───────────────────────────────────────────────────────────────────────

pub fn hud_text(state: &GameState) -> String {
    format!(
        "Score: {}  Lives: {}",
        state.player.score, state.player.lives
    )
}

fn draw_hud<B: Backend + ?Sized>(out: &mut B, state: &GameState) {
    out.draw_text(HUD_POS, &hud_text(state), C_HUD);
}
