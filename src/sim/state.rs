//! Game state and core simulation types
//!
//! Every entity collection lives inside [`GameState`], which is owned by the
//! caller and advanced one tick at a time.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::events::{GameEvent, Hud};
use super::spawner::SpawnSchedule;
use crate::consts::*;
use crate::highscores::HighScores;
use crate::settings::Settings;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    Title,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for retry
    GameOver,
}

/// Enemy classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnemyKind {
    Normal,
    Heavy,
    Boss,
}

impl EnemyKind {
    /// Points awarded for shooting this enemy down
    pub fn points(self, level: u32) -> u64 {
        match self {
            EnemyKind::Normal => NORMAL_POINTS,
            EnemyKind::Heavy => HEAVY_POINTS,
            EnemyKind::Boss => BOSS_BASE_POINTS + level as u64 * BOSS_POINTS_PER_LEVEL,
        }
    }

    /// Ticks between shots once the first shot has been fired
    pub fn fire_rate(self, level: u32) -> u32 {
        match self {
            EnemyKind::Boss => BOSS_FIRE_RATE,
            EnemyKind::Normal | EnemyKind::Heavy => 80u32.saturating_sub(level * 4).max(20),
        }
    }

    /// Particle count of the burst when destroyed
    pub fn kill_burst(self) -> usize {
        match self {
            EnemyKind::Boss => BOSS_KILL_BURST,
            EnemyKind::Normal | EnemyKind::Heavy => KILL_BURST,
        }
    }

    /// Tint of the sparks when a bullet lands
    pub fn spark_tint(self) -> Tint {
        match self {
            EnemyKind::Boss => Tint::Amber,
            EnemyKind::Normal | EnemyKind::Heavy => Tint::Orange,
        }
    }

    /// Tint of the burst when destroyed
    pub fn kill_tint(self) -> Tint {
        match self {
            EnemyKind::Normal => Tint::Red,
            EnemyKind::Heavy => Tint::Violet,
            EnemyKind::Boss => Tint::Amber,
        }
    }
}

/// Per-variant movement model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Motion {
    /// Falls straight down with a sinusoidal sideways drift
    Wave { offset: f32 },
    /// Sweeps left/right while easing toward a cruising altitude
    Patrol { dir: f32, cruise_y: f32 },
}

/// Color tag handed to the renderer for particles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tint {
    Red,
    Orange,
    Amber,
    Violet,
    Blue,
}

/// The player's ship
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    /// Full width/height of the hull
    pub size: Vec2,
    pub speed: f32,
    /// Ticks until the next shot is allowed
    pub shot_cooldown: u32,
    /// Ticks of remaining damage immunity
    pub invincible: u32,
    /// Mirrors the rapid-fire control of the last tick
    pub rapid_fire: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - PLAYER_START_OFFSET),
            size: Vec2::splat(PLAYER_SIZE),
            speed: PLAYER_SPEED,
            shot_cooldown: 0,
            invincible: 0,
            rapid_fire: false,
        }
    }
}

/// Player projectile
#[derive(Debug, Clone, Serialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Upward speed per tick
    pub speed: f32,
    pub size: Vec2,
    #[serde(skip)]
    pub hit: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            speed: BULLET_SPEED,
            size,
            hit: false,
        }
    }
}

/// Enemy projectile
#[derive(Debug, Clone, Serialize)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub vel: Vec2,
    #[serde(skip)]
    pub hit: bool,
}

impl EnemyBullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            hit: false,
        }
    }
}

/// An enemy ship
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub motion: Motion,
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: u32,
    pub max_hp: u32,
    pub speed: f32,
    /// Ticks until the next shot
    pub shoot_timer: u32,
    #[serde(skip)]
    pub dead: bool,
}

impl Enemy {
    pub fn is_boss(&self) -> bool {
        self.kind == EnemyKind::Boss
    }
}

/// A spark from an explosion
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at birth, removed at 0.0
    pub life: f32,
    pub decay: f32,
    pub size: f32,
    pub tint: Tint,
}

/// Expanding shock ring
#[derive(Debug, Clone, Serialize)]
pub struct Explosion {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub life: f32,
}

/// Background star (parallax only)
#[derive(Debug, Clone, Serialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

/// Complete game state
///
/// Ticks append [`GameEvent`]s to an internal queue that only
/// [`GameState::drain_events`] empties. `Session` drains it after every tick;
/// callers driving `tick` directly must drain it themselves.
#[derive(Debug, Clone)]
pub struct GameState {
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    /// Simulation tick counter (reset on run start)
    pub time_ticks: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub explosions: Vec<Explosion>,
    pub stars: Vec<Star>,
    pub spawner: SpawnSchedule,
    /// Process-lifetime score table
    pub high_scores: HighScores,
    /// Cap on live particles
    pub max_particles: usize,
    /// Notifications produced since the last drain
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a state on the title screen with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings {
            seed,
            ..Settings::default()
        })
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let stars = (0..settings.star_count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random::<f32>() * ARENA_WIDTH,
                    rng.random::<f32>() * ARENA_HEIGHT,
                ),
                size: rng.random::<f32>() * 1.5 + 0.3,
                speed: rng.random::<f32>() * 1.5 + 0.3,
            })
            .collect();

        Self {
            rng,
            phase: GamePhase::Title,
            score: 0,
            lives: START_LIVES,
            level: 1,
            time_ticks: 0,
            player: Player::default(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            explosions: Vec::new(),
            stars,
            spawner: SpawnSchedule::for_level(1),
            high_scores: HighScores::new(),
            max_particles: settings.max_particles,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Best score seen by this state so far
    pub fn high_score(&self) -> u64 {
        self.high_scores.best()
    }

    /// Current HUD values
    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            high_score: self.high_score(),
            level: self.level,
            lives: self.lives,
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Queue a HUD refresh with the current values
    pub(crate) fn notify_hud(&mut self) {
        let hud = self.hud();
        self.emit(GameEvent::HudChanged(hud));
    }

    /// Take every queued event, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Burst of particles plus a shock ring at `pos`
    pub fn spawn_explosion(&mut self, pos: Vec2, count: usize, tint: Tint) {
        let room = self.max_particles.saturating_sub(self.particles.len());
        for _ in 0..count.min(room) {
            let angle = self.rng.random::<f32>() * std::f32::consts::TAU;
            let speed = self.rng.random::<f32>() * 3.0 + 0.5;
            self.particles.push(Particle {
                pos,
                vel: Vec2::from_angle(angle) * speed,
                life: 1.0,
                decay: self.rng.random::<f32>() * 0.04 + 0.02,
                size: self.rng.random::<f32>() * 3.0 + 1.0,
                tint,
            });
        }
        self.explosions.push(Explosion {
            pos,
            radius: 0.0,
            max_radius: count as f32 * 2.0,
            life: 1.0,
        });
    }

    /// Drop every entity marked for removal this tick
    pub fn sweep(&mut self) {
        self.bullets.retain(|b| !b.hit);
        self.enemy_bullets.retain(|b| !b.hit);
        self.enemies.retain(|e| !e.dead);
        self.particles.retain(|p| p.life > 0.0);
        self.explosions.retain(|e| e.life > 0.0);
    }

    /// Read-only view for a renderer
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            phase: self.phase,
            hud: self.hud(),
            time_ticks: self.time_ticks,
            player: &self.player,
            bullets: &self.bullets,
            enemy_bullets: &self.enemy_bullets,
            enemies: &self.enemies,
            particles: &self.particles,
            explosions: &self.explosions,
            stars: &self.stars,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView<'a> {
    pub phase: GamePhase,
    pub hud: Hud,
    pub time_ticks: u64,
    pub player: &'a Player,
    pub bullets: &'a [Bullet],
    pub enemy_bullets: &'a [EnemyBullet],
    pub enemies: &'a [Enemy],
    pub particles: &'a [Particle],
    pub explosions: &'a [Explosion],
    pub stars: &'a [Star],
}
