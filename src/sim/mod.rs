//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only
//! - Seeded RNG only
//! - Marked entities are swept before a tick returns
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{boxes_overlap, resolve_collisions};
pub use events::{GameEvent, GameOverSummary, Hud};
pub use progression::{check_level_up, player_hit, start_run};
pub use spawner::{SpawnSchedule, is_boss_level, spawn_boss, spawn_enemy, spawn_rate};
pub use state::{
    Bullet, Enemy, EnemyBullet, EnemyKind, Explosion, FrameView, GamePhase, GameState, Motion,
    Particle, Player, Star, Tint,
};
pub use tick::{TickInput, in_arena, tick};
