//! Tests for CLI configuration loading.
//!
//! Each test runs inside a figment `Jail`: a scratch working directory with
//! environment changes rolled back afterwards.

use figment::Jail;

use crate::config::{CliConfig, OutputFormat, DEFAULT_CONFIG_FILE};

fn load(path: Option<&str>) -> figment::error::Result<CliConfig> {
    CliConfig::load(path.map(std::path::Path::new)).map_err(|e| format!("{e:#}").into())
}

#[test]
fn test_defaults() {
    let config = CliConfig::default();
    assert_eq!(config.prompt, "graphwalk> ");
    assert_eq!(config.format, OutputFormat::Table);
    assert!(!config.timing);
    assert!(config.color);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_load_without_file_uses_defaults() {
    Jail::expect_with(|_jail| {
        let config = load(None)?;
        assert_eq!(config, CliConfig::default());
        Ok(())
    });
}

#[test]
fn test_default_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            DEFAULT_CONFIG_FILE,
            r#"
prompt = "g> "
format = "json"
timing = true
"#,
        )?;

        let config = load(None)?;
        assert_eq!(config.prompt, "g> ");
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.timing);
        // Untouched keys keep their defaults.
        assert!(config.color);
        assert_eq!(config.log_level, "warn");
        Ok(())
    });
}

#[test]
fn test_explicit_file_and_env_layering() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
format = "json"
log_level = "info"
history_file = "/tmp/graphwalk-test-history"
"#,
        )?;
        jail.set_env("GRAPHWALK_LOG_LEVEL", "debug");
        jail.set_env("GRAPHWALK_TIMING", "true");

        let config = load(Some("custom.toml"))?;
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert!(config.timing);
        assert_eq!(
            config.history_file.as_deref(),
            Some(std::path::Path::new("/tmp/graphwalk-test-history"))
        );
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_is_error() {
    Jail::expect_with(|_jail| {
        let err = CliConfig::load(Some(std::path::Path::new("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        Ok(())
    });
}

#[test]
fn test_invalid_format_is_error() {
    Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILE, r#"format = "xml""#)?;
        assert!(load(None).is_err());
        Ok(())
    });
}

#[test]
fn test_to_toml_loads_back() {
    Jail::expect_with(|jail| {
        let config = CliConfig {
            prompt: "walk> ".to_string(),
            format: OutputFormat::Json,
            timing: true,
            history_file: None,
            log_level: "debug".to_string(),
            color: false,
        };

        let text = config.to_toml().map_err(|e| e.to_string())?;
        assert!(text.contains(r#"format = "json""#));
        assert!(!text.contains("history_file"));

        // history_file is absent from the file, so the default applies again.
        jail.create_file("dump.toml", &text)?;
        let loaded = load(Some("dump.toml"))?;
        assert_eq!(loaded.prompt, "walk> ");
        assert_eq!(loaded.format, OutputFormat::Json);
        assert!(loaded.timing);
        assert!(!loaded.color);
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.history_file, CliConfig::default().history_file);
        Ok(())
    });
}
