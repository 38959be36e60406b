//! Integration tests for configuration management

use gradepath::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.roster.is_empty(),
        "Default roster path should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
roster = "./roster.csv"
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.roster, "./roster.csv");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.paths.roster, ""); // Default empty
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADEPATH/test.log"

[paths]
roster = "$GRADEPATH/roster.csv"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("gradepath"));
    assert!(!config.logging.file.contains("$GRADEPATH"));
    assert!(config.paths.roster.contains("gradepath"));
    assert!(!config.paths.roster.contains("$GRADEPATH"));
}

#[test]
fn test_merge_defaults_fills_empty_fields() {
    let mut config = Config::from_toml("[logging]\nlevel = \"error\"\n").expect("parse");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed, "Merging into a sparse config should report changes");
    assert_eq!(config.logging.level, "error", "Existing values survive");
    assert_eq!(config.paths.roster, defaults.paths.roster);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
}

#[test]
fn test_merge_defaults_is_idempotent() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        verbose: Some(true),
        roster: Some("/data/transcript.csv".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.roster, "/data/transcript.csv");
    // Untouched fields keep their defaults
    assert!(!config.paths.reports_dir.is_empty());
}

#[test]
fn test_get_and_set_round_trip() {
    let mut config = Config::from_defaults();

    config.set("level", "info").expect("set level");
    config.set("roster", "/tmp/r.csv").expect("set roster");
    config.set("verbose", "true").expect("set verbose");

    assert_eq!(config.get("level"), Some("info".to_string()));
    assert_eq!(config.get("roster"), Some("/tmp/r.csv".to_string()));
    assert_eq!(config.get("verbose"), Some("true".to_string()));
    assert_eq!(config.get("reports-dir"), config.get("reports_dir"));
}

#[test]
fn test_set_rejects_unknown_keys_and_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("nonsense", "x").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.get("nonsense").is_none());
}

#[test]
fn test_unset_restores_default() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("set level");
    config.unset("level", &defaults).expect("unset level");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert!(config.unset("nonsense", &defaults).is_err());
}

#[test]
fn test_display_lists_all_sections() {
    let config = Config::from_defaults();
    let rendered = config.to_string();

    assert!(rendered.contains("[logging]"));
    assert!(rendered.contains("[paths]"));
    assert!(rendered.contains("roster"));
    assert!(rendered.contains("reports_dir"));
}
