//! Enemy and boss spawning
//!
//! Spawn cadence is driven by explicit countdowns re-armed on every level
//! change, so timing can be tested by feeding ticks directly.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, Motion};
use crate::consts::*;

/// Every fifth level replaces the regular stream with a single boss
pub fn is_boss_level(level: u32) -> bool {
    level > 0 && level.is_multiple_of(BOSS_LEVEL_EVERY)
}

/// Ticks between regular spawns on a level
pub fn spawn_rate(level: u32) -> u32 {
    90u32.saturating_sub(level * 6).max(20)
}

/// Roll one regular enemy for `level`
pub fn spawn_enemy(rng: &mut impl Rng, level: u32, id: u32) -> Enemy {
    let heavy = level >= HEAVY_MIN_LEVEL && rng.random_bool(HEAVY_CHANCE);
    let (kind, (w, h), hp) = if heavy {
        (EnemyKind::Heavy, HEAVY_SIZE, HEAVY_HP)
    } else {
        (EnemyKind::Normal, NORMAL_SIZE, NORMAL_HP)
    };

    let x = rng.random_range(SPAWN_MARGIN..ARENA_WIDTH - SPAWN_MARGIN);
    let speed = rng.random_range(0.6..1.4) + level as f32 * 0.1;
    let shoot_timer = rng.random_range(30..120);
    let offset = rng.random::<f32>() * std::f32::consts::TAU;

    Enemy {
        id,
        kind,
        motion: Motion::Wave { offset },
        pos: Vec2::new(x, -h),
        size: Vec2::new(w, h),
        hp,
        max_hp: hp,
        speed,
        shoot_timer,
        dead: false,
    }
}

/// The boss for `level`, centered above the top edge
pub fn spawn_boss(level: u32, id: u32) -> Enemy {
    let hp = 30 + level * 10;
    let (w, h) = BOSS_SIZE;
    Enemy {
        id,
        kind: EnemyKind::Boss,
        motion: Motion::Patrol {
            dir: 1.0,
            cruise_y: BOSS_CRUISE_Y,
        },
        pos: Vec2::new(ARENA_WIDTH / 2.0, BOSS_SPAWN_Y),
        size: Vec2::new(w, h),
        hp,
        max_hp: hp,
        speed: BOSS_SPEED,
        shoot_timer: BOSS_FIRST_SHOT,
        dead: false,
    }
}

/// What the schedule wants spawned this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOrder {
    Enemy,
    Boss,
}

/// Countdown timers for the spawn cadence of the current level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnSchedule {
    /// Ticks until the next regular enemy
    pub regular_countdown: u32,
    /// Ticks until the boss may appear
    pub boss_countdown: u32,
    /// Boss already sent this level
    pub boss_spawned: bool,
}

impl SpawnSchedule {
    pub fn for_level(level: u32) -> Self {
        Self {
            regular_countdown: spawn_rate(level),
            boss_countdown: BOSS_SPAWN_DELAY,
            boss_spawned: false,
        }
    }

    /// Re-arm every countdown for a freshly entered level
    pub fn enter_level(&mut self, level: u32) {
        *self = Self::for_level(level);
    }

    /// Advance one tick given the enemies currently on the field
    pub fn advance(&mut self, level: u32, enemies: &[Enemy]) -> Option<SpawnOrder> {
        if !is_boss_level(level) {
            self.regular_countdown = self.regular_countdown.saturating_sub(1);
            if self.regular_countdown == 0 {
                self.regular_countdown = spawn_rate(level);
                return Some(SpawnOrder::Enemy);
            }
            return None;
        }

        if self.boss_spawned {
            if !enemies.iter().any(Enemy::is_boss) {
                // Boss rammed the player without the level advancing: send another
                self.boss_spawned = false;
                self.boss_countdown = BOSS_SPAWN_DELAY;
            }
            return None;
        }

        self.boss_countdown = self.boss_countdown.saturating_sub(1);
        if self.boss_countdown == 0 && enemies.is_empty() {
            self.boss_spawned = true;
            return Some(SpawnOrder::Boss);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_rate_curve() {
        assert_eq!(spawn_rate(1), 84);
        assert_eq!(spawn_rate(5), 60);
        assert_eq!(spawn_rate(11), 24);
        assert_eq!(spawn_rate(12), 20);
        assert_eq!(spawn_rate(40), 20);
    }

    #[test]
    fn test_boss_levels() {
        assert!(!is_boss_level(1));
        assert!(!is_boss_level(4));
        assert!(is_boss_level(5));
        assert!(is_boss_level(10));
        assert!(!is_boss_level(0));
    }

    #[test]
    fn test_low_levels_never_heavy() {
        let mut rng = Pcg32::seed_from_u64(3);
        for i in 0..500 {
            let enemy = spawn_enemy(&mut rng, 2, i);
            assert_eq!(enemy.kind, EnemyKind::Normal);
            assert_eq!(enemy.hp, 1);
            assert_eq!(enemy.size, Vec2::new(22.0, 22.0));
        }
    }

    #[test]
    fn test_enemy_ranges() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut heavies = 0;
        for i in 0..2000 {
            let enemy = spawn_enemy(&mut rng, 3, i);
            assert!(enemy.pos.x >= 20.0 && enemy.pos.x < 380.0);
            assert!(enemy.pos.y < 0.0);
            assert!(enemy.speed >= 0.9 && enemy.speed < 1.7);
            assert!((30..120).contains(&enemy.shoot_timer));
            if enemy.kind == EnemyKind::Heavy {
                heavies += 1;
                assert_eq!(enemy.hp, 3);
                assert_eq!(enemy.size, Vec2::new(30.0, 28.0));
            }
        }
        // 35% expected
        assert!((500..900).contains(&heavies), "heavies = {heavies}");
    }

    #[test]
    fn test_boss_stats() {
        let boss = spawn_boss(5, 1);
        assert_eq!(boss.hp, 80);
        assert_eq!(boss.max_hp, 80);
        assert_eq!(boss.pos.x, 200.0);
        assert!(boss.pos.y < 0.0);
        assert_eq!(boss.speed, 0.8);
        assert!(matches!(boss.motion, Motion::Patrol { dir, .. } if dir == 1.0));
    }

    #[test]
    fn test_regular_cadence() {
        let mut schedule = SpawnSchedule::for_level(1);
        let spawned: Vec<u32> = (1..=200)
            .filter(|_| schedule.advance(1, &[]).is_some())
            .collect();
        assert_eq!(spawned.len(), 2);
    }

    #[test]
    fn test_boss_waits_for_delay_and_empty_field() {
        let mut schedule = SpawnSchedule::for_level(5);
        for _ in 0..299 {
            assert_eq!(schedule.advance(5, &[]), None);
        }
        let mut blocker = spawn_boss(4, 9);
        blocker.kind = EnemyKind::Normal;
        assert_eq!(schedule.advance(5, &[blocker.clone()]), None);
        assert_eq!(schedule.advance(5, &[blocker]), None);
        assert_eq!(schedule.advance(5, &[]), Some(SpawnOrder::Boss));
        // Boss on the field: nothing else arrives
        let boss = spawn_boss(5, 10);
        for _ in 0..1000 {
            assert_eq!(schedule.advance(5, std::slice::from_ref(&boss)), None);
        }
    }

    #[test]
    fn test_boss_rearms_after_leaving_field() {
        let mut schedule = SpawnSchedule::for_level(5);
        schedule.boss_spawned = true;
        assert_eq!(schedule.advance(5, &[]), None);
        assert!(!schedule.boss_spawned);
        assert_eq!(schedule.boss_countdown, BOSS_SPAWN_DELAY);
    }
}
