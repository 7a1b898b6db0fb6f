//! Notifications produced during a tick
//!
//! The simulation queues these on the [`GameState`](super::GameState); the host
//! drains them after each tick and forwards them to its UI.

use serde::Serialize;

use super::state::EnemyKind;

/// Values shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    pub lives: u32,
}

/// Summary presented when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverSummary {
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    pub new_high_score: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    RunStarted,
    /// Score, level, lives or high score changed
    HudChanged(Hud),
    EnemyDestroyed { kind: EnemyKind, points: u64 },
    PlayerHit { lives_left: u32 },
    BossSpawned { level: u32 },
    LevelUp { level: u32 },
    GameOver(GameOverSummary),
}
