use std::path::PathBuf;

use gofin_domain::{CurrencyCode, Locale, NegativeStyle};
use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "gofin";

/// Stores user-configurable display preferences and the storage location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Prefix of every storage key, e.g. `@gofinances:transactions`.
    #[serde(default = "Config::default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub negative_style: NegativeStyle,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for stored documents. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: Self::default_namespace(),
            locale: Locale::default(),
            currency: CurrencyCode::default(),
            negative_style: NegativeStyle::default(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_namespace() -> String {
        "@gofinances".into()
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(APP_DIR_NAME)
    }
}
