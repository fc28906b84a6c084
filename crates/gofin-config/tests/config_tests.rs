use std::fs;

use gofin_config::{Config, ConfigError, ConfigManager};
use gofin_domain::{CurrencyCode, Locale, NegativeStyle};
use tempfile::tempdir;

#[test]
fn default_config_matches_existing_installs() {
    let cfg = Config::default();

    assert_eq!(cfg.namespace, "@gofinances");
    assert_eq!(cfg.locale, Locale::PtBr);
    assert_eq!(cfg.currency.as_str(), "BRL");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    assert_eq!(manager.load().expect("load config"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        locale: Locale::EnUs,
        currency: CurrencyCode::new("usd"),
        negative_style: NegativeStyle::Parentheses,
        data_dir: Some(dir.path().join("data")),
        ..Config::default()
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ locale: ").unwrap();

    let err = ConfigManager::new(path.clone()).load().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { path: ref reported, .. } if *reported == path));
}

#[test]
fn hand_edited_lowercase_currency_is_normalised() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "locale": "en-US", "currency": "usd" }"#).unwrap();

    let cfg = ConfigManager::new(path).load().expect("load config");
    assert_eq!(cfg.currency, CurrencyCode::new("USD"));
    assert_eq!(cfg.currency.symbol(), "$");
    assert_eq!(cfg.currency.minor_units(), 2);
}
