/// Game tunables.  Entity sizes are fixed in `entities`; everything else that
/// shapes the feel of a round lives here.

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    /// World width in world units (pixels of the reference layout).
    pub width: f32,
    pub height: f32,
    /// Upper bound on frames per second; Δt stays variable.
    pub target_fps: u32,

    pub player_speed: f32,
    pub player_lives: u32,

    pub bullet_speed: f32,
    /// Seconds a bullet lives before it is discarded.
    pub bullet_lifetime: f32,
    /// Bullets are discarded once they leave the world grown by this margin.
    pub bullet_margin: f32,
    /// Extra distance past the player's half-size where a bullet appears.
    pub muzzle_offset: f32,

    /// Enemies closer than this chase the player; farther ones wander.
    pub seek_radius: f32,
    pub seek_speed: f32,
    pub wander_speed: f32,
    /// Wander headings are drawn uniformly from `[0, wander_span)` radians.
    pub wander_span: f32,

    pub max_enemies: usize,
    /// Spawn timer reset range, seconds, `[min, max)`.
    pub spawn_interval: (f32, f32),
    pub pickup_chance: f64,
    /// How far outside the visible edge new enemies appear.
    pub edge_offset: f32,
    /// Keeps enemy spawns away from the corners along the edge.
    pub edge_inset: f32,
    pub pickup_margin: f32,

    pub enemy_points: u32,
    pub pickup_points: u32,

    pub initial_enemies: usize,
    pub initial_pickups: usize,

    /// Background grid spacing.
    pub grid_step: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 640.0,
            target_fps: 60,

            player_speed: 280.0,
            player_lives: 3,

            bullet_speed: 620.0,
            bullet_lifetime: 2.2,
            bullet_margin: 50.0,
            muzzle_offset: 6.0,

            seek_radius: 300.0,
            seek_speed: 110.0,
            wander_speed: 40.0,
            wander_span: 6.28,

            max_enemies: 6,
            spawn_interval: (1.0, 2.0),
            pickup_chance: 0.35,
            edge_offset: 40.0,
            edge_inset: 20.0,
            pickup_margin: 64.0,

            enemy_points: 6,
            pickup_points: 8,

            initial_enemies: 3,
            initial_pickups: 4,

            grid_step: 32,
        }
    }
}

impl GameConfig {
    /// Reject values that would make the spawn ranges or the frame clock
    /// meaningless.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "world size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.target_fps == 0 {
            return Err(GameError::InvalidConfig("target_fps must be non-zero".into()));
        }
        let (lo, hi) = self.spawn_interval;
        if !(lo > 0.0 && lo < hi) {
            return Err(GameError::InvalidConfig(format!(
                "spawn interval must satisfy 0 < min < max, got [{lo}, {hi})"
            )));
        }
        if !(0.0..=1.0).contains(&self.pickup_chance) {
            return Err(GameError::InvalidConfig(format!(
                "pickup chance must be within [0, 1], got {}",
                self.pickup_chance
            )));
        }
        if self.grid_step == 0 {
            return Err(GameError::InvalidConfig("grid_step must be non-zero".into()));
        }
        let pm = self.pickup_margin;
        let ei = self.edge_inset;
        if !(2.0 * pm < self.width && 2.0 * pm < self.height) {
            return Err(GameError::InvalidConfig(format!(
                "pickup margin {pm} leaves no room inside the world"
            )));
        }
        if !(2.0 * ei < self.width && 2.0 * ei < self.height) {
            return Err(GameError::InvalidConfig(format!(
                "edge inset {ei} leaves no room along the edges"
            )));
        }
        Ok(())
    }
}
