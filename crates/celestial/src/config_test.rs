use crate::config::{CometCount, GenerationConfig};

#[test]
fn test_defaults() {
    let config = GenerationConfig::default();
    assert_eq!(config.min_planets, 3);
    assert_eq!(config.max_planets, 12);
    assert_eq!(config.max_moons, 8);
    assert_eq!(config.asteroid_belt_chance, 0.6);
    assert_eq!(config.ring_chance, 0.4);
    assert_eq!(config.binary_star_chance, 0.2);
    assert_eq!(config.time_scale, 1.0);
    assert_eq!(config.trail_length, 50);
    assert_eq!(config.comet_count, CometCount { min: 1, max: 3 });
}

#[test]
fn test_partial_toml_overlays_defaults() {
    let config: GenerationConfig = toml::from_str(
        r#"
        maxMoons = 4
        ringChance = 0.9

        [cometCount]
        min = 2
        max = 5
        "#,
    )
    .unwrap();
    assert_eq!(config.max_moons, 4);
    assert_eq!(config.ring_chance, 0.9);
    assert_eq!(config.comet_count, CometCount { min: 2, max: 5 });
    // Everything unspecified keeps its default
    assert_eq!(config.min_planets, 3);
    assert_eq!(config.trail_length, 50);
}

#[test]
fn test_json_round_trip() {
    let config = GenerationConfig {
        binary_star_chance: 0.5,
        ..GenerationConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("binaryStarChance"));
    let back: GenerationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
