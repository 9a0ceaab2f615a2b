use std::time::Duration;

use sideways::config::*;
use sideways::error::SidewaysError;

#[test]
fn default_config_is_valid() {
    let config = GameConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.area_width, 800);
    assert_eq!(config.area_height, 560);
    assert_eq!(config.lives, 2);
    assert_eq!(config.respawn_delay, Duration::from_secs(1));
    assert_eq!(config.gameover_delay, Duration::from_secs(2));
}

#[test]
fn frame_interval_matches_rate() {
    let config = GameConfig::default();
    assert_eq!(config.frame_interval(), Duration::from_secs(1) / 60);
}

#[test]
fn zero_fps_is_rejected() {
    let config = GameConfig {
        frames_per_second: 0,
        ..GameConfig::default()
    };
    assert!(matches!(config.validate(), Err(SidewaysError::InvalidConfig(_))));
}

#[test]
fn empty_area_is_rejected() {
    let config = GameConfig {
        area_height: 0,
        ..GameConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("800x0"));
}

#[test]
fn empty_sprite_is_rejected() {
    let mut config = GameConfig::default();
    config.sprites.alien_shot = (8, 0);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("alien shot"));
}
