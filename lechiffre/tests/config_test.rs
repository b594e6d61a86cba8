pub mod common;

use lechiffre::config::{DisplayConfig, IndicatorConfig, KeyboardConfig, RgbConfig};
use lechiffre::types::lighting::{Hsv, RgbMatrixMode};

#[test]
fn test_empty_config_uses_defaults() {
    let config: KeyboardConfig = toml::from_str("").unwrap();
    assert_eq!(config, KeyboardConfig::default());
    assert_eq!(config.rgb.hue_step, 8);
    assert_eq!(config.rgb.sat_step, 16);
    assert_eq!(config.rgb.val_step, 16);
    assert_eq!(config.rgb.speed_step, 16);
    assert_eq!(config.indicator.led_from_end, 2);
    assert_eq!(config.indicator.minimum_brightness, 10);
}

#[test]
fn test_partial_config() {
    let config: KeyboardConfig = toml::from_str(
        r#"
[rgb]
default_mode = "Breathing"
hue_step = 4

[rgb.default_hsv]
h = 85
s = 255
v = 128

[indicator]
minimum_brightness = 20

[display]
columns = 10
"#,
    )
    .unwrap();

    assert_eq!(
        config.rgb,
        RgbConfig {
            default_mode: RgbMatrixMode::Breathing,
            default_hsv: Hsv::new(85, 255, 128),
            hue_step: 4,
            ..Default::default()
        }
    );
    assert_eq!(
        config.indicator,
        IndicatorConfig {
            minimum_brightness: 20,
            ..Default::default()
        }
    );
    assert_eq!(
        config.display,
        DisplayConfig {
            columns: 10,
            ..Default::default()
        }
    );
}

#[test]
fn test_invalid_mode_is_rejected() {
    let result: Result<KeyboardConfig, _> = toml::from_str(
        r#"
[rgb]
default_mode = "Sparkles"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_brightness_out_of_range_is_rejected() {
    let result: Result<KeyboardConfig, _> = toml::from_str(
        r#"
[indicator]
minimum_brightness = 300
"#,
    );
    assert!(result.is_err());
}
