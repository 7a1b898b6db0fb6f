use proptest::prelude::*;
use void_striker::sim::*;

fn input_strategy() -> impl Strategy<Value = TickInput> {
    any::<(bool, bool, bool, bool, bool, bool)>().prop_map(
        |(left, right, up, down, fire, rapid)| TickInput {
            left,
            right,
            up,
            down,
            fire,
            rapid,
            start: false,
        },
    )
}

/// A run already in progress at `level`
fn run_at(seed: u64, level: u32) -> GameState {
    let mut state = GameState::new(seed);
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );
    state.level = level;
    state.spawner.enter_level(level);
    state
}

fn assert_clean(state: &GameState) {
    for enemy in &state.enemies {
        assert!(!enemy.dead, "dead enemy survived the sweep");
        assert!(enemy.hp > 0, "enemy with no hp left on the field");
    }
    for bullet in &state.bullets {
        assert!(!bullet.hit, "spent bullet survived the sweep");
        assert!(bullet.pos.y > 0.0, "bullet past the top edge");
    }
    for bullet in &state.enemy_bullets {
        assert!(in_arena(bullet.pos), "enemy bullet outside the arena");
    }
    let bosses = state.enemies.iter().filter(|e| e.is_boss()).count();
    assert!(bosses <= 1);
    if bosses > 0 {
        assert!(is_boss_level(state.level), "boss on a regular level");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn tick_end_invariants_hold(
        seed in any::<u64>(),
        level in 1u32..15,
        inputs in prop::collection::vec(input_strategy(), 1..900),
    ) {
        let mut state = run_at(seed, level);
        for input in &inputs {
            tick(&mut state, input);
            assert_clean(&state);
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    #[test]
    fn run_counters_are_monotonic(
        seed in any::<u64>(),
        level in 1u32..15,
        inputs in prop::collection::vec(input_strategy(), 1..900),
    ) {
        let mut state = run_at(seed, level);
        for input in &inputs {
            let (score, level, lives) = (state.score, state.level, state.lives);
            tick(&mut state, input);
            prop_assert!(state.score >= score);
            prop_assert!(state.level >= level);
            prop_assert!(state.level <= level + 1);
            prop_assert!(state.lives <= lives);
            prop_assert!(lives - state.lives <= 1, "more than one life lost in a tick");
            if state.phase != GamePhase::Playing {
                prop_assert_eq!(state.lives, 0);
                break;
            }
        }
    }

    #[test]
    fn invincibility_counts_down_and_shields(
        seed in any::<u64>(),
        level in 1u32..15,
        inputs in prop::collection::vec(input_strategy(), 1..900),
    ) {
        let mut state = run_at(seed, level);
        for input in &inputs {
            let (invincible, lives) = (state.player.invincible, state.lives);
            tick(&mut state, input);
            if invincible > 1 {
                prop_assert_eq!(state.player.invincible, invincible - 1);
                prop_assert_eq!(state.lives, lives);
            } else if state.lives < lives {
                prop_assert_eq!(state.player.invincible, 120);
            } else {
                prop_assert_eq!(state.player.invincible, 0);
            }
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    #[test]
    fn same_seed_same_run(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut a = run_at(seed, 3);
        let mut b = run_at(seed, 3);
        for input in &inputs {
            tick(&mut a, input);
            tick(&mut b, input);
        }
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.lives, b.lives);
        prop_assert_eq!(a.enemies.len(), b.enemies.len());
        prop_assert_eq!(a.player.pos, b.player.pos);
        prop_assert_eq!(a.drain_events(), b.drain_events());
    }

    #[test]
    fn player_stays_inside_arena(
        inputs in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let mut state = run_at(1, 1);
        state.player.invincible = u32::MAX;
        for input in &inputs {
            tick(&mut state, input);
            let half = state.player.size / 2.0;
            prop_assert!(state.player.pos.x >= half.x && state.player.pos.x <= 400.0 - half.x);
            prop_assert!(state.player.pos.y >= half.y && state.player.pos.y <= 600.0 - half.y);
        }
    }
}
