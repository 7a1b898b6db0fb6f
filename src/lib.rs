//! Void Striker - a vertical arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, progression)
//! - `input`: Normalized control snapshot fed to each tick
//! - `clock`: Frame clock turning wall time into fixed ticks
//! - `driver`: Session glue between the simulation and its render/UI hosts
//! - `settings`: Data-driven configuration
//! - `highscores`: In-memory high score table

pub mod clock;
pub mod driver;
pub mod highscores;
pub mod input;
pub mod settings;
pub mod sim;

pub use driver::{RenderSink, Session, UiNotifier};
pub use highscores::HighScores;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Nominal frame duration the tick rate is aligned to (ms)
    pub const FRAME_MS: f64 = 16.67;
    /// Largest delta-time scale applied after a stall
    pub const MAX_DT_SCALE: f64 = 3.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 28.0;
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Player spawns this far above the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 70.0;
    pub const START_LIVES: u32 = 3;
    pub const INVINCIBLE_TICKS: u32 = 120;

    /// Shot cooldowns (ticks)
    pub const SHOT_COOLDOWN: u32 = 14;
    pub const RAPID_SHOT_COOLDOWN: u32 = 6;

    /// Player bullets
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_WIDTH: f32 = 3.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const SIDE_BULLET_WIDTH: f32 = 2.0;
    pub const SIDE_BULLET_HEIGHT: f32 = 8.0;
    /// Horizontal offset of the rapid-fire side bullets
    pub const SIDE_BULLET_OFFSET: f32 = 8.0;

    /// Enemy bullets
    pub const AIMED_SHOT_SPEED: f32 = 2.0;
    pub const BOSS_SHOT_SPEED: f32 = 2.5;
    /// Angular offsets of the boss spread around straight down (radians)
    pub const BOSS_SPREAD: [f32; 5] = [-0.6, -0.3, 0.0, 0.3, 0.6];
    pub const BOSS_FIRE_RATE: u32 = 40;
    pub const BOSS_FIRST_SHOT: u32 = 60;

    /// Enemy bodies
    pub const NORMAL_SIZE: (f32, f32) = (22.0, 22.0);
    pub const HEAVY_SIZE: (f32, f32) = (30.0, 28.0);
    pub const BOSS_SIZE: (f32, f32) = (60.0, 50.0);
    pub const NORMAL_HP: u32 = 1;
    pub const HEAVY_HP: u32 = 3;
    pub const BOSS_SPEED: f32 = 0.8;
    /// Altitude the boss eases toward
    pub const BOSS_CRUISE_Y: f32 = 80.0;
    pub const BOSS_EASE: f32 = 0.01;
    pub const BOSS_SPAWN_Y: f32 = -50.0;
    /// Heavy enemies unlock at this level
    pub const HEAVY_MIN_LEVEL: u32 = 3;
    pub const HEAVY_CHANCE: f64 = 0.35;
    /// Spawn x stays this far from either side wall
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Every Nth level is a boss level
    pub const BOSS_LEVEL_EVERY: u32 = 5;
    /// Delay before the boss appears on a boss level (ticks)
    pub const BOSS_SPAWN_DELAY: u32 = 300;

    /// Wave wobble of regular enemies
    pub const WOBBLE_FREQ: f32 = 0.05;
    pub const WOBBLE_AMPLITUDE: f32 = 0.8;

    /// Collision forgiveness margins
    pub const BULLET_FORGIVENESS: f32 = 4.0;
    pub const RAM_FORGIVENESS: f32 = 6.0;

    /// Score values
    pub const NORMAL_POINTS: u64 = 100;
    pub const HEAVY_POINTS: u64 = 300;
    pub const BOSS_BASE_POINTS: u64 = 1000;
    pub const BOSS_POINTS_PER_LEVEL: u64 = 200;
    /// Score needed per level to advance
    pub const POINTS_PER_LEVEL: u64 = 2000;

    /// Effects
    pub const PARTICLE_DRAG: f32 = 0.97;
    pub const RING_GROWTH: f32 = 3.0;
    pub const RING_FADE: f32 = 0.07;
    pub const HIT_SPARKS: usize = 6;
    pub const KILL_BURST: usize = 20;
    pub const BOSS_KILL_BURST: usize = 60;
    pub const PLAYER_BURST: usize = 40;
}

