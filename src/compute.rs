/// Pure game-logic functions.
///
/// Every stage function takes an immutable reference to the current
/// `GameState` (plus Δt and, where needed, an RNG handle) and returns a
/// brand-new `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;
use tracing::{debug, trace};

use crate::config::GameConfig;
use crate::entities::{Bullet, BulletOwner, Enemy, GameState, Pickup, Player, Point};
use crate::input::{FrameInput, Key, KeyState};

/// Countdowns at or below this many seconds count as expired.  Subtracting
/// a frame's Δt every tick leaves float residue, so a 2.2 s lifetime stepped
/// at 1/60 s would otherwise survive one frame too long.
pub const TIMER_EPSILON: f32 = 1e-4;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: centred player, a few enemies already closing in
/// from the edges and a handful of pickups scattered around.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> GameState {
    let mut state = GameState::empty(config);
    for _ in 0..config.initial_enemies {
        state.enemies.push(spawn_enemy(&config, rng));
    }
    for _ in 0..config.initial_pickups {
        state.pickups.push(spawn_pickup(&config, rng));
    }
    state
}

/// A new enemy just outside one of the four edges, picked uniformly.
pub fn spawn_enemy(config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let (w, h) = (config.width, config.height);
    let inset = config.edge_inset;
    let off = config.edge_offset;
    let (x, y) = match rng.gen_range(0..4) {
        0 => (rng.gen_range(inset..w - inset), -off),
        1 => (rng.gen_range(inset..w - inset), h + off),
        2 => (-off, rng.gen_range(inset..h - inset)),
        _ => (w + off, rng.gen_range(inset..h - inset)),
    };
    Enemy::new(x, y)
}

/// A new pickup somewhere inside the margin-inset play area.
pub fn spawn_pickup(config: &GameConfig, rng: &mut impl Rng) -> Pickup {
    let m = config.pickup_margin;
    let x = rng.gen_range(m..config.width - m);
    let y = rng.gen_range(m..config.height - m);
    Pickup::new(x, y)
}

// ── Input-driven transitions ────────────────────────────────────────────────

/// Unit direction from the held movement keys; zero when idle or cancelled.
fn move_direction(keys: &KeyState) -> (f32, f32) {
    let mut ax = 0.0f32;
    let mut ay = 0.0f32;
    if keys.pressed(Key::Up) {
        ay -= 1.0;
    }
    if keys.pressed(Key::Down) {
        ay += 1.0;
    }
    if keys.pressed(Key::Left) {
        ax -= 1.0;
    }
    if keys.pressed(Key::Right) {
        ax += 1.0;
    }
    let len = ax.hypot(ay);
    if len == 0.0 {
        (0.0, 0.0)
    } else {
        (ax / len, ay / len)
    }
}

/// Move the player by the held keys and clamp it 2 px inside the world.
pub fn update_player(state: &GameState, dt: f32, keys: &KeyState) -> GameState {
    let cfg = &state.config;
    let p = &state.player;
    let (dx, dy) = move_direction(keys);
    let vx = dx * p.speed;
    let vy = dy * p.speed;

    let max_x = (cfg.width - p.w - 2.0).max(2.0);
    let max_y = (cfg.height - p.h - 2.0).max(2.0);
    let x = (p.x + vx * dt).clamp(2.0, max_x);
    let y = (p.y + vy * dt).clamp(2.0, max_y);

    let invulnerable = if p.invulnerable > 0.0 {
        (p.invulnerable - dt).max(0.0)
    } else {
        p.invulnerable
    };

    GameState {
        player: Player {
            x,
            y,
            vx,
            vy,
            invulnerable,
            ..p.clone()
        },
        ..state.clone()
    }
}

/// Fire one bullet from the player's edge toward `target`.  No cooldown.
///
/// When `target` is exactly the player's centre the heading is 0 rad
/// (straight right), since `atan2(0, 0) == 0`.
pub fn fire_bullet(state: &GameState, target: Point) -> GameState {
    let cfg = &state.config;
    let p = &state.player;
    let (cx, cy) = p.center();
    let angle = (target.1 - cy).atan2(target.0 - cx);
    let (sin, cos) = angle.sin_cos();

    let bullet = Bullet::new(
        cx + cos * (p.w / 2.0 + cfg.muzzle_offset),
        cy + sin * (p.h / 2.0 + cfg.muzzle_offset),
        cos * cfg.bullet_speed,
        sin * cfg.bullet_speed,
        BulletOwner::Player,
        cfg.bullet_lifetime,
    );
    let mut bullets = state.bullets.clone();
    bullets.push(bullet);
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Per-frame stages ────────────────────────────────────────────────────────

/// Integrate every bullet, then rebuild the list keeping only live ones that
/// are still inside the expanded bounds.
pub fn update_bullets(state: &GameState, dt: f32) -> GameState {
    let cfg = &state.config;
    let m = cfg.bullet_margin;
    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .map(|b| Bullet {
            x: b.x + b.vx * dt,
            y: b.y + b.vy * dt,
            life: b.life - dt,
            ..b.clone()
        })
        .filter(|b| {
            b.life > TIMER_EPSILON
                && -m < b.x
                && b.x < cfg.width + m
                && -m < b.y
                && b.y < cfg.height + m
        })
        .collect();
    GameState {
        bullets,
        ..state.clone()
    }
}

/// Seek the player when within `seek_radius`, otherwise take one step along a
/// freshly drawn random heading.  Headings are not remembered between frames.
pub fn update_enemies(state: &GameState, dt: f32, rng: &mut impl Rng) -> GameState {
    let cfg = &state.config;
    let (px, py) = state.player.center();
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| {
            let (ex, ey) = e.rect().center();
            let dx = px - ex;
            let dy = py - ey;
            let d = match dx.hypot(dy) {
                d if d == 0.0 => 1.0,
                d => d,
            };
            let (mx, my) = if d < cfg.seek_radius {
                (dx / d * cfg.seek_speed * dt, dy / d * cfg.seek_speed * dt)
            } else {
                let heading = rng.gen::<f32>() * cfg.wander_span;
                let (sin, cos) = heading.sin_cos();
                (cos * cfg.wander_speed * dt, sin * cfg.wander_speed * dt)
            };
            Enemy {
                x: e.x + mx,
                y: e.y + my,
                ..e.clone()
            }
        })
        .collect();
    GameState {
        enemies,
        ..state.clone()
    }
}

/// Player bullets ↔ enemies.
///
/// Mark first, compact afterwards: each bullet kills at most the first
/// still-alive enemy it overlaps, and each enemy dies to at most one bullet.
pub fn resolve_bullet_hits(state: &GameState) -> GameState {
    let mut killed_enemies: Vec<usize> = Vec::new();
    let mut used_bullets: Vec<usize> = Vec::new();

    for (bi, bullet) in state.bullets.iter().enumerate() {
        if bullet.owner != BulletOwner::Player {
            continue;
        }
        let br = bullet.rect();
        for (ei, enemy) in state.enemies.iter().enumerate() {
            if !killed_enemies.contains(&ei) && br.overlaps(&enemy.rect()) {
                killed_enemies.push(ei);
                used_bullets.push(bi);
                break;
            }
        }
    }

    if killed_enemies.is_empty() {
        return state.clone();
    }
    debug!(kills = killed_enemies.len(), "bullets hit enemies");

    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| !killed_enemies.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| !used_bullets.contains(i))
        .map(|(_, b)| b.clone())
        .collect();

    let gain = killed_enemies.len() as u32 * state.config.enemy_points;
    GameState {
        player: Player {
            score: state.player.score + gain,
            ..state.player.clone()
        },
        enemies,
        bullets,
        ..state.clone()
    }
}

/// Player ↔ pickups.  Collected pickups leave the list, so running this again
/// without moving awards nothing.
pub fn collect_pickups(state: &GameState) -> GameState {
    let pr = state.player.rect();
    let (taken, pickups): (Vec<Pickup>, Vec<Pickup>) = state
        .pickups
        .iter()
        .cloned()
        .partition(|p| pr.overlaps(&p.rect()));

    if taken.is_empty() {
        return state.clone();
    }
    debug!(count = taken.len(), "pickups collected");

    let gain = taken.len() as u32 * state.config.pickup_points;
    GameState {
        player: Player {
            score: state.player.score + gain,
            ..state.player.clone()
        },
        pickups,
        ..state.clone()
    }
}

/// Count the spawn timer down; on expiry maybe add an enemy (below the cap)
/// and maybe a pickup (uncapped), then rearm with a random interval.
pub fn run_spawner(state: &GameState, dt: f32, rng: &mut impl Rng) -> GameState {
    let cfg = &state.config;
    let spawn_timer = state.spawn_timer - dt;
    if spawn_timer > TIMER_EPSILON {
        return GameState {
            spawn_timer,
            ..state.clone()
        };
    }

    let mut enemies = state.enemies.clone();
    if enemies.len() < cfg.max_enemies {
        let enemy = spawn_enemy(cfg, rng);
        debug!(x = enemy.x, y = enemy.y, "enemy spawned");
        enemies.push(enemy);
    }

    let mut pickups = state.pickups.clone();
    if rng.gen_bool(cfg.pickup_chance) {
        let pickup = spawn_pickup(cfg, rng);
        debug!(x = pickup.x, y = pickup.y, "pickup spawned");
        pickups.push(pickup);
    }

    let (lo, hi) = cfg.spawn_interval;
    GameState {
        enemies,
        pickups,
        spawn_timer: rng.gen_range(lo..hi),
        ..state.clone()
    }
}

// ── Whole frame ──────────────────────────────────────────────────────────────

/// Advance the simulation by one frame: fire, update, collide, spawn.  All
/// randomness comes through `rng` so callers control determinism.
pub fn step(state: &GameState, dt: f32, input: &FrameInput, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    for &target in &input.clicks {
        next = fire_bullet(&next, target);
    }

    let next = update_player(&next, dt, &input.keys);
    let next = update_bullets(&next, dt);
    let next = update_enemies(&next, dt, rng);

    let next = resolve_bullet_hits(&next);
    let next = collect_pickups(&next);

    let next = run_spawner(&next, dt, rng);

    trace!(
        frame = next.frame + 1,
        bullets = next.bullets.len(),
        enemies = next.enemies.len(),
        pickups = next.pickups.len(),
        score = next.player.score,
        "frame stepped"
    );
    GameState {
        frame: next.frame + 1,
        ..next
    }
}
