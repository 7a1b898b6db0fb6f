//! Collision detection and response
//!
//! All tests are axis-aligned boxes compared center to center against half
//! extents. Nothing is removed here: hits only mark entities, and the tick
//! sweeps them out once resolution is done.

use glam::Vec2;

use super::progression::{award_kill, player_hit};
use super::state::{Bullet, Enemy, EnemyBullet, EnemyKind, GameState, Player, Tint};
use crate::consts::*;

/// Center-distance overlap against half extents
#[inline]
pub fn boxes_overlap(a: Vec2, b: Vec2, half_extents: Vec2) -> bool {
    let d = (a - b).abs();
    d.x < half_extents.x && d.y < half_extents.y
}

/// Player bullet inside an enemy hull
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    boxes_overlap(bullet.pos, enemy.pos, enemy.size / 2.0)
}

/// Enemy bullet inside the player's forgiving hitbox
pub fn enemy_bullet_hits_player(bullet: &EnemyBullet, player: &Player) -> bool {
    boxes_overlap(
        bullet.pos,
        player.pos,
        player.size / 2.0 - Vec2::splat(BULLET_FORGIVENESS),
    )
}

/// Enemy hull touching the player hull, minus the ram margin
pub fn enemy_rams_player(enemy: &Enemy, player: &Player) -> bool {
    boxes_overlap(
        enemy.pos,
        player.pos,
        (enemy.size + player.size) / 2.0 - Vec2::splat(RAM_FORGIVENESS),
    )
}

/// What the bullet pass produced
#[derive(Debug, Clone, Default)]
pub struct HitReport {
    /// Bullet impact points with their spark tint
    pub sparks: Vec<(Vec2, Tint)>,
    /// Enemies brought to zero hp
    pub kills: Vec<(Vec2, EnemyKind)>,
}

/// Test every bullet against every live enemy, marking hits
///
/// A bullet already marked this tick still counts against other enemies it
/// overlaps.
pub fn resolve_bullet_hits(bullets: &mut [Bullet], enemies: &mut [Enemy]) -> HitReport {
    let mut report = HitReport::default();
    for bullet in bullets.iter_mut() {
        for enemy in enemies.iter_mut().filter(|e| !e.dead) {
            if !bullet_hits_enemy(bullet, enemy) {
                continue;
            }
            bullet.hit = true;
            enemy.hp = enemy.hp.saturating_sub(1);
            report.sparks.push((bullet.pos, enemy.kind.spark_tint()));
            if enemy.hp == 0 {
                enemy.dead = true;
                report.kills.push((enemy.pos, enemy.kind));
            }
        }
    }
    report
}

/// Resolve every overlap of the tick, applying score, damage and effects
pub fn resolve_collisions(state: &mut GameState) {
    // Bullets vs enemies (effects deferred to avoid borrow issues)
    let report = resolve_bullet_hits(&mut state.bullets, &mut state.enemies);
    for (pos, tint) in report.sparks {
        state.spawn_explosion(pos, HIT_SPARKS, tint);
    }
    for (pos, kind) in report.kills {
        award_kill(state, kind);
        state.spawn_explosion(pos, kind.kill_burst(), kind.kill_tint());
    }

    // Enemy bullets vs player
    for i in 0..state.enemy_bullets.len() {
        if state.player.invincible > 0 {
            break;
        }
        if enemy_bullet_hits_player(&state.enemy_bullets[i], &state.player) {
            state.enemy_bullets[i].hit = true;
            player_hit(state);
        }
    }

    // Enemies vs player
    for i in 0..state.enemies.len() {
        if state.player.invincible > 0 {
            break;
        }
        let enemy = &state.enemies[i];
        if enemy.dead || !enemy_rams_player(enemy, &state.player) {
            continue;
        }
        let pos = enemy.pos;
        state.enemies[i].dead = true;
        player_hit(state);
        state.spawn_explosion(pos, KILL_BURST, Tint::Red);
    }
}
