use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate_config(&Config::default()).is_ok());
}

#[test]
fn css_lengths() {
    for ok in ["60px", "100%", "1.5em", "2rem", "50vw", "10vh", "12pt", "auto", " 40px "] {
        assert!(is_css_length(ok), "{ok} should be accepted");
    }
    for bad in ["", "60", "px", "-5px", "10 px", "wide", "1.px"] {
        assert!(!is_css_length(bad), "{bad} should be rejected");
    }
}

#[test]
fn css_colors() {
    for ok in [
        "#abc",
        "#AABBCC",
        "#aabbccdd",
        "rgb(1, 2, 3)",
        "rgba(0,0,0,0.5)",
        "hsl(120, 50%, 50%)",
        "hsla(0 0% 0% / 0.2)",
        "rebeccapurple",
    ] {
        assert!(is_css_color(ok), "{ok} should be accepted");
    }
    for bad in ["", "#ab", "#abcde", "#ggg", "rgb(", "light-blue", "12"] {
        assert!(!is_css_color(bad), "{bad} should be rejected");
    }
}

#[test]
fn rejects_unsupported_version() {
    let config = Config {
        version: Some("2".to_string()),
        ..Config::default()
    };

    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '2'"));
}

#[test]
fn accepts_current_version() {
    let config = Config {
        version: Some(CONFIG_VERSION.to_string()),
        ..Config::default()
    };
    assert!(validate_config(&config).is_ok());
}

#[test]
fn rejects_bad_width() {
    let mut config = Config::default();
    config.render.width = "wide".to_string();

    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("render.width"));
}

#[test]
fn rejects_bad_height() {
    let mut config = Config::default();
    config.render.height = "60".to_string();

    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("render.height"));
}

#[test]
fn small_threshold_bounds() {
    let mut config = Config::default();

    config.render.small_threshold = 0.0;
    assert!(validate_config(&config).is_ok());

    config.render.small_threshold = 100.0;
    assert!(validate_config(&config).is_ok());

    config.render.small_threshold = -1.0;
    assert!(validate_config(&config).is_err());

    config.render.small_threshold = 100.5;
    assert!(validate_config(&config).is_err());

    config.render.small_threshold = f64::NAN;
    assert!(validate_config(&config).is_err());
}

#[test]
fn rejects_empty_palette() {
    let mut config = Config::default();
    config.render.palette = Some(Vec::new());

    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("at least one color"));
}

#[test]
fn rejects_invalid_palette_entry() {
    let mut config = Config::default();
    config.render.palette = Some(vec!["#fff".to_string(), "not a color".to_string()]);

    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("render.palette[1]"));
}
