use arena_shooter::config::GameConfig;
use arena_shooter::error::GameError;

#[test]
fn default_config_is_valid() {
    assert!(GameConfig::default().validate().is_ok());
}

#[test]
fn default_config_matches_reference_tuning() {
    let c = GameConfig::default();
    assert_eq!((c.width, c.height), (1024.0, 640.0));
    assert_eq!(c.target_fps, 60);
    assert_eq!(c.bullet_speed, 620.0);
    assert_eq!(c.bullet_lifetime, 2.2);
    assert_eq!(c.seek_radius, 300.0);
    assert_eq!(c.max_enemies, 6);
    assert_eq!(c.spawn_interval, (1.0, 2.0));
    assert_eq!(c.pickup_chance, 0.35);
    assert_eq!((c.enemy_points, c.pickup_points), (6, 8));
}

#[test]
fn rejects_zero_fps() {
    let c = GameConfig {
        target_fps: 0,
        ..GameConfig::default()
    };
    assert!(matches!(c.validate(), Err(GameError::InvalidConfig(_))));
}

#[test]
fn rejects_empty_spawn_interval() {
    let c = GameConfig {
        spawn_interval: (2.0, 2.0),
        ..GameConfig::default()
    };
    assert!(matches!(c.validate(), Err(GameError::InvalidConfig(_))));
}

#[test]
fn rejects_pickup_chance_above_one() {
    let c = GameConfig {
        pickup_chance: 1.5,
        ..GameConfig::default()
    };
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("pickup chance"));
}

#[test]
fn rejects_world_too_small_for_pickup_margin() {
    let c = GameConfig {
        width: 100.0,
        height: 100.0,
        ..GameConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn rejects_non_positive_world() {
    let c = GameConfig {
        width: 0.0,
        ..GameConfig::default()
    };
    assert!(c.validate().is_err());
}
