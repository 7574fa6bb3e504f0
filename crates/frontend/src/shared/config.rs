//! Application configuration.
//!
//! Defaults are compiled in from TOML. The API base URL can be replaced at
//! build time (`API_URL`) and at run time from the settings page, which
//! stores an override in local storage.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::system::auth::storage::get_local_storage;

const DEFAULT_CONFIG: &str = r#"
[app]
name = "لوحة إدارة نظام المياه"

[api]
base_url = "https://gwsudan.xyz"
"#;

/// Local-storage key of the run-time API URL override.
pub const API_URL_OVERRIDE_KEY: &str = "admin_api_url";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub app: AppSection,
    pub api: ApiSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppSection {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiSection {
    pub base_url: String,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    parse_config(DEFAULT_CONFIG, option_env!("API_URL")).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        AppConfig {
            app: AppSection {
                name: String::new(),
            },
            api: ApiSection {
                base_url: String::new(),
            },
        }
    })
});

/// Parses a TOML config and applies the build-time URL override.
pub fn parse_config(source: &str, api_url: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(source)?;
    if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }
    config.api.base_url = normalize_base_url(&config.api.base_url);
    Ok(config)
}

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Accepts only absolute http(s) URLs.
pub fn validate_base_url(url: &str) -> Result<(), String> {
    let url = url.trim();
    if url.is_empty() {
        return Err("رابط الخادم مطلوب".into());
    }
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| "يجب أن يبدأ الرابط بـ http:// أو https://".to_string())?;
    if rest.trim_matches('/').is_empty() {
        return Err("رابط الخادم غير صالح".into());
    }
    Ok(())
}

pub fn stored_api_url() -> Option<String> {
    get_local_storage()?
        .get_item(API_URL_OVERRIDE_KEY)
        .ok()?
        .map(|u| normalize_base_url(&u))
        .filter(|u| !u.is_empty())
}

pub fn save_api_url(url: &str) -> Result<(), String> {
    validate_base_url(url)?;
    let storage = get_local_storage().ok_or("التخزين المحلي غير متاح")?;
    storage
        .set_item(API_URL_OVERRIDE_KEY, &normalize_base_url(url))
        .map_err(|e| format!("{:?}", e))
}

pub fn clear_api_url() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(API_URL_OVERRIDE_KEY);
    }
}

/// Base URL in effect: run-time override, else the compiled config.
pub fn effective_api_url() -> String {
    stored_api_url().unwrap_or_else(|| app_config().api.base_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.api.base_url, "https://gwsudan.xyz");
        assert!(!config.app.name.is_empty());
    }

    #[test]
    fn test_build_time_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("http://localhost:5000/")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");

        let blank = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(blank.api.base_url, "https://gwsudan.xyz");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[api]\nbase_url = ", None).is_err());
        assert!(parse_config("[app]\nname = \"x\"", None).is_err());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("https://gwsudan.xyz").is_ok());
        assert!(validate_base_url("http://10.0.0.5:5000/").is_ok());
        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("gwsudan.xyz").is_err());
        assert!(validate_base_url("https://").is_err());
    }
}
