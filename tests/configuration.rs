//! Tests for configuration system

use clarkston::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.contact.simulated_delay_ms, 1000);
    assert_eq!(config.contact.timeout_ms, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("site.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[contact]
simulated_delay_ms = 250
timeout_ms = 5000
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.contact.simulated_delay_ms, 250);
    assert_eq!(
        config.contact.timeout(),
        Some(std::time::Duration::from_secs(5))
    );
    assert_eq!(config.observability.log_level, "info");

    Ok(())
}
