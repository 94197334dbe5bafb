/// All game entity types — pure data plus a little geometry.

use crate::config::GameConfig;

pub const PLAYER_SIZE: f32 = 28.0;
pub const BULLET_SIZE: f32 = 12.0;
pub const ENEMY_SIZE: f32 = 26.0;
pub const PICKUP_SIZE: f32 = 18.0;

/// Placeholder hit points carried by every enemy.  Nothing reads it yet.
pub const ENEMY_HEALTH: u32 = 1;
/// Placeholder value carried by every pickup.  The score award comes from
/// `GameConfig::pickup_points`, not from here.
pub const PICKUP_VALUE: u32 = 30;

// ── Geometry ──────────────────────────────────────────────────────────────────

pub type Point = (f32, f32);

/// Axis-aligned rectangle in world units, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Point {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

// ── Tags ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyBehavior {
    /// Seeks the player when close, wanders otherwise.
    Basic,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub w: f32,
    pub h: f32,
    pub speed: f32,
    pub lives: u32,
    pub score: u32,
    /// Seconds of invulnerability left.  Only affects the draw colour.
    pub invulnerable: f32,
}

impl Player {
    /// A fresh player centred in the world.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.width / 2.0 - PLAYER_SIZE / 2.0,
            y: config.height / 2.0 - PLAYER_SIZE / 2.0,
            vx: 0.0,
            vy: 0.0,
            w: PLAYER_SIZE,
            h: PLAYER_SIZE,
            speed: config.player_speed,
            lives: config.player_lives,
            score: 0,
            invulnerable: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub w: f32,
    pub h: f32,
    pub owner: BulletOwner,
    /// Seconds until the bullet expires regardless of position.
    pub life: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, owner: BulletOwner, life: f32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            w: BULLET_SIZE,
            h: BULLET_SIZE,
            owner,
            life,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

// ── Enemies & pickups ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub behavior: EnemyBehavior,
    pub health: u32,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            w: ENEMY_SIZE,
            h: ENEMY_SIZE,
            behavior: EnemyBehavior::Basic,
            health: ENEMY_HEALTH,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pickup {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub value: u32,
}

impl Pickup {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            w: PICKUP_SIZE,
            h: PICKUP_SIZE,
            value: PICKUP_VALUE,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the frame loop owns.  Cloneable so the stage functions in
/// `compute` can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub pickups: Vec<Pickup>,
    /// Seconds until the spawner next fires.
    pub spawn_timer: f32,
    pub frame: u64,
    pub config: GameConfig,
}

impl GameState {
    /// An empty arena: player centred, no entities, spawner due immediately.
    pub fn empty(config: GameConfig) -> Self {
        Self {
            player: Player::new(&config),
            bullets: Vec::new(),
            enemies: Vec::new(),
            pickups: Vec::new(),
            spawn_timer: 0.0,
            frame: 0,
            config,
        }
    }
}
