use catch_em_all::compute::init_state;
use catch_em_all::config::GameConfig;
use catch_em_all::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(ObjectKind::Reward, ObjectKind::Reward);
    assert_ne!(ObjectKind::Reward, ObjectKind::Hazard);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
}

#[test]
fn rect_from_entities_copies_bounds() {
    let player = Player { x: 100.0, y: 560.0, width: 120.0, height: 20.0 };
    assert_eq!(
        Rect::from(&player),
        Rect { x: 100.0, y: 560.0, width: 120.0, height: 20.0 }
    );

    let obj = FallingObject {
        x: 150.0,
        y: 570.0,
        width: 40.0,
        height: 40.0,
        speed: 5.0,
        kind: ObjectKind::Hazard,
    };
    assert_eq!(
        Rect::from(&obj),
        Rect { x: 150.0, y: 570.0, width: 40.0, height: 40.0 }
    );
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(GameConfig::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.objects.push(FallingObject {
        x: 5.0,
        y: 5.0,
        width: 40.0,
        height: 40.0,
        speed: 5.0,
        kind: ObjectKind::Reward,
    });

    assert_eq!(original.player.x, 340.0);
    assert_eq!(original.score, 0);
    assert!(original.objects.is_empty());
    assert_eq!(cloned.object_count(), 1);
}

#[test]
fn config_ranges() {
    assert!(GameConfig::default().is_valid());
    assert!(!GameConfig { spawn_interval: 0, ..GameConfig::default() }.is_valid());
    assert!(!GameConfig { hazard_chance: f64::NAN, ..GameConfig::default() }.is_valid());
    assert!(!GameConfig { hazard_chance: 1.5, ..GameConfig::default() }.is_valid());
    assert!(GameConfig { hazard_chance: 1.0, ..GameConfig::default() }.is_valid());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "invalid game config")]
fn init_state_rejects_nan_hazard_chance() {
    init_state(GameConfig { hazard_chance: f64::NAN, ..GameConfig::default() });
}
