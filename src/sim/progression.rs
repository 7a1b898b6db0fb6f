//! Score, lives, levels and the title → playing → game-over machine

use super::events::{GameEvent, GameOverSummary};
use super::state::{EnemyKind, GamePhase, GameState, Player, Tint};
use crate::consts::*;

/// Begin a fresh run from the title screen or after a game over
///
/// Stars and the high score table carry over; everything else resets.
pub fn start_run(state: &mut GameState) {
    state.score = 0;
    state.lives = START_LIVES;
    state.level = 1;
    state.time_ticks = 0;
    state.player = Player::default();
    state.bullets.clear();
    state.enemy_bullets.clear();
    state.enemies.clear();
    state.particles.clear();
    state.explosions.clear();
    state.spawner.enter_level(1);
    state.phase = GamePhase::Playing;

    log::info!("Run started (high score {})", state.high_score());
    state.emit(GameEvent::RunStarted);
    state.notify_hud();
}

/// Credit a shot-down enemy
pub fn award_kill(state: &mut GameState, kind: EnemyKind) {
    let points = kind.points(state.level);
    state.score += points;
    log::debug!("{:?} destroyed for {} points", kind, points);
    state.emit(GameEvent::EnemyDestroyed { kind, points });
    state.notify_hud();
}

/// The player took damage: lose a life, go invincible, maybe end the run
pub fn player_hit(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    let pos = state.player.pos;
    state.spawn_explosion(pos, PLAYER_BURST, Tint::Blue);
    state.player.invincible = INVINCIBLE_TICKS;

    log::debug!("Player hit, {} lives left", state.lives);
    state.emit(GameEvent::PlayerHit {
        lives_left: state.lives,
    });
    state.notify_hud();

    if state.lives == 0 {
        game_over(state);
    }
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;

    let previous_best = state.high_score();
    if let Some(rank) = state.high_scores.add_score(state.score, state.level) {
        log::debug!("Run entered the high score table at rank {}", rank);
    }
    let new_high_score = state.score > previous_best;
    if new_high_score {
        state.notify_hud();
    }

    log::info!(
        "Game over: score {} at level {}{}",
        state.score,
        state.level,
        if new_high_score { " (new high score)" } else { "" }
    );
    state.emit(GameEvent::GameOver(GameOverSummary {
        score: state.score,
        high_score: state.high_score(),
        level: state.level,
        new_high_score,
    }));
}

/// Advance at most one level if the score has crossed the threshold
///
/// Returns whether the level changed.
pub fn check_level_up(state: &mut GameState) -> bool {
    if state.score < state.level as u64 * POINTS_PER_LEVEL {
        return false;
    }
    state.level += 1;
    state.spawner.enter_level(state.level);

    log::info!("Level up: {}", state.level);
    state.emit(GameEvent::LevelUp { level: state.level });
    state.notify_hud();
    true
}
