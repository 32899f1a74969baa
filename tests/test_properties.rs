use catch_em_all::compute::*;
use catch_em_all::config::GameConfig;
use catch_em_all::entities::*;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn paddle_always_on_screen(cursor_x in any::<i32>()) {
        let s = init_state(GameConfig::default());
        let s2 = update(&s, &TickInput { cursor_x, confirm: false }, &mut StdRng::seed_from_u64(1));
        prop_assert!(s2.player.x >= 0.0);
        prop_assert!(s2.player.x <= 800.0 - s2.player.width);
    }

    #[test]
    fn lives_never_increase_while_playing(
        seed in any::<u64>(),
        cursors in prop::collection::vec(-100i32..900, 1..600),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(GameConfig::default());
        for cursor_x in cursors {
            if s.status != GameStatus::Playing {
                break;
            }
            let next = update(&s, &TickInput { cursor_x, confirm: false }, &mut rng);
            prop_assert!(next.lives <= s.lives);
            prop_assert!(next.spawn_counter < s.config.spawn_interval);
            prop_assert_eq!(next.status == GameStatus::GameOver, next.lives <= 0);
            s = next;
        }
    }

    #[test]
    fn spawn_cadence_while_playing(seed in any::<u64>(), intervals in 1u32..10) {
        // Objects hang at the top, so nothing resolves and every spawn stays live.
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(GameConfig { obj_speed: 0.0, ..GameConfig::default() });
        for _ in 0..intervals * s.config.spawn_interval {
            s = update(&s, &TickInput::default(), &mut rng);
        }
        prop_assert_eq!(s.object_count() as u32, intervals);
    }
}

#[test]
fn no_spawns_in_game_over() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = init_state(GameConfig::default());
    s.status = GameStatus::GameOver;
    s.lives = 0;
    for _ in 0..300 {
        s = update(&s, &TickInput::default(), &mut rng);
    }
    assert_eq!(s.object_count(), 0);
    assert_eq!(s.spawn_counter, 0);
}
