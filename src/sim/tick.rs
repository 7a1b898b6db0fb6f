//! Fixed step simulation tick
//!
//! Core game loop that advances the simulation deterministically. Every
//! increment is per tick; the host decides how many ticks a frame is owed.

use glam::Vec2;
use rand::Rng;

use super::collision::resolve_collisions;
use super::events::GameEvent;
use super::progression::{check_level_up, start_run};
use super::spawner::{SpawnOrder, spawn_boss, spawn_enemy};
use super::state::{Bullet, EnemyBullet, EnemyKind, GamePhase, GameState, Motion};
use crate::consts::*;

/// Controls held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    /// Rapid-fire modifier (only matters together with `fire`)
    pub rapid: bool,
    /// Start / retry confirmation
    pub start: bool,
}

/// Advance the game state by one tick
///
/// Events raised during the tick are queued on the state until
/// [`GameState::drain_events`] is called.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Background keeps scrolling on every screen
    update_stars(state);

    match state.phase {
        GamePhase::Title | GamePhase::GameOver => {
            if input.start {
                start_run(state);
            }
            return;
        }
        GamePhase::Playing => {}
    }

    move_player(state, input);
    fire_control(state, input);
    state.player.invincible = state.player.invincible.saturating_sub(1);

    advance_bullets(state);

    if let Some(order) = state.spawner.advance(state.level, &state.enemies) {
        let id = state.next_entity_id();
        let enemy = match order {
            SpawnOrder::Enemy => spawn_enemy(&mut state.rng, state.level, id),
            SpawnOrder::Boss => {
                log::info!("Boss incoming on level {}", state.level);
                state.emit(GameEvent::BossSpawned { level: state.level });
                spawn_boss(state.level, id)
            }
        };
        state.enemies.push(enemy);
    }

    advance_enemies(state);
    enemy_fire(state);
    advance_enemy_bullets(state);

    resolve_collisions(state);

    advance_effects(state);

    // Marked entities never survive the tick
    state.sweep();

    if state.phase == GamePhase::Playing {
        check_level_up(state);
    }
}

/// Scroll the starfield, respawning stars that fall off the bottom
pub fn update_stars(state: &mut GameState) {
    for star in &mut state.stars {
        star.pos.y += star.speed;
        if star.pos.y > ARENA_HEIGHT {
            star.pos.y = 0.0;
            star.pos.x = state.rng.random::<f32>() * ARENA_WIDTH;
        }
    }
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    let mut step = Vec2::ZERO;
    if input.left {
        step.x -= 1.0;
    }
    if input.right {
        step.x += 1.0;
    }
    if input.up {
        step.y -= 1.0;
    }
    if input.down {
        step.y += 1.0;
    }
    let half = player.size / 2.0;
    player.pos = (player.pos + step * player.speed)
        .clamp(half, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT) - half);
}

fn fire_control(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    player.rapid_fire = input.rapid;
    player.shot_cooldown = player.shot_cooldown.saturating_sub(1);

    if !input.fire || player.shot_cooldown > 0 {
        return;
    }

    let nose = Vec2::new(player.pos.x, player.pos.y - player.size.y / 2.0);
    state
        .bullets
        .push(Bullet::new(nose, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT)));

    if input.rapid {
        let side_y = player.pos.y - player.size.y / 4.0;
        let side_size = Vec2::new(SIDE_BULLET_WIDTH, SIDE_BULLET_HEIGHT);
        for dx in [-SIDE_BULLET_OFFSET, SIDE_BULLET_OFFSET] {
            state
                .bullets
                .push(Bullet::new(Vec2::new(player.pos.x + dx, side_y), side_size));
        }
        player.shot_cooldown = RAPID_SHOT_COOLDOWN;
    } else {
        player.shot_cooldown = SHOT_COOLDOWN;
    }
}

fn advance_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.pos.y -= bullet.speed;
    }
    state.bullets.retain(|b| b.pos.y > 0.0);
}

fn advance_enemies(state: &mut GameState) {
    let t = state.time_ticks as f32;
    for enemy in &mut state.enemies {
        match &mut enemy.motion {
            Motion::Patrol { dir, cruise_y } => {
                enemy.pos.x += *dir * enemy.speed;
                enemy.pos.y += (*cruise_y - enemy.pos.y) * BOSS_EASE;
                let half_w = enemy.size.x / 2.0;
                if enemy.pos.x > ARENA_WIDTH - half_w || enemy.pos.x < half_w {
                    *dir = -*dir;
                }
            }
            Motion::Wave { offset } => {
                enemy.pos.y += enemy.speed;
                enemy.pos.x += (t * WOBBLE_FREQ + *offset).sin() * WOBBLE_AMPLITUDE;
            }
        }
    }
    // Fell past the bottom edge
    state
        .enemies
        .retain(|e| e.pos.y < ARENA_HEIGHT + e.size.y);
}

fn enemy_fire(state: &mut GameState) {
    let target = state.player.pos;
    let level = state.level;
    for enemy in &mut state.enemies {
        enemy.shoot_timer = enemy.shoot_timer.saturating_sub(1);
        if enemy.shoot_timer > 0 {
            continue;
        }
        enemy.shoot_timer = enemy.kind.fire_rate(level);

        match enemy.kind {
            EnemyKind::Boss => {
                let muzzle = enemy.pos + Vec2::new(0.0, enemy.size.y / 2.0);
                for spread in BOSS_SPREAD {
                    let angle = std::f32::consts::FRAC_PI_2 + spread;
                    let vel = Vec2::from_angle(angle) * BOSS_SHOT_SPEED;
                    state.enemy_bullets.push(EnemyBullet::new(muzzle, vel));
                }
            }
            EnemyKind::Normal | EnemyKind::Heavy => {
                // Co-located with the player: no direction to aim, hold fire
                if let Some(dir) = (target - enemy.pos).try_normalize() {
                    state
                        .enemy_bullets
                        .push(EnemyBullet::new(enemy.pos, dir * AIMED_SHOT_SPEED));
                }
            }
        }
    }
}

/// Whether a point lies strictly inside the play area
pub fn in_arena(pos: Vec2) -> bool {
    pos.x > 0.0 && pos.x < ARENA_WIDTH && pos.y > 0.0 && pos.y < ARENA_HEIGHT
}

fn advance_enemy_bullets(state: &mut GameState) {
    for bullet in &mut state.enemy_bullets {
        bullet.pos += bullet.vel;
    }
    state.enemy_bullets.retain(|b| in_arena(b.pos));
}

fn advance_effects(state: &mut GameState) {
    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.life -= particle.decay;
        particle.vel *= PARTICLE_DRAG;
    }
    for ring in &mut state.explosions {
        ring.radius += RING_GROWTH;
        ring.life -= RING_FADE;
    }
}
