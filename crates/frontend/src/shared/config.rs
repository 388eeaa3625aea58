//! Application configuration.
//!
//! The defaults are embedded in the bundle as TOML. A `?log_level=` query
//! parameter overrides the log level for the current session.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSection,
    pub profile: ProfileSection,
    pub pages: PagesSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub title: String,
    pub tagline: String,
    pub log_level: String,
}

/// The musician the client is rendered for.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileSection {
    pub display_name: String,
    pub instrument: String,
    pub city: String,
}

/// Initial tab id of each tabbed page.
#[derive(Debug, Deserialize, Clone)]
pub struct PagesSection {
    pub discover: String,
    pub events: String,
    pub music: String,
    pub network: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
title = "MusicNet"
tagline = "Where musicians find their people"
log_level = "info"

[profile]
display_name = "Nina Vale"
instrument = "Bass"
city = "Bristol"

[pages]
discover = "for_you"
events = "upcoming"
music = "library"
network = "connections"
"#;

impl AppSection {
    /// Unknown names fall back to `Info`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str(contents)?)
}

/// Extracts `log_level` from a `location.search` string such as
/// `"?log_level=debug"`.
pub fn log_level_override(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("log_level")
        .filter(|level| !level.is_empty())
        .cloned()
}

/// Load the embedded configuration and apply query-string overrides.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config = parse_config(DEFAULT_CONFIG)?;

    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if let Some(level) = log_level_override(&search) {
        config.app.log_level = level;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.app.title, "MusicNet");
        assert_eq!(config.app.level(), log::Level::Info);
        assert_eq!(config.pages.events, "upcoming");
        assert_eq!(config.profile.instrument, "Bass");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[app]\ntitle = \"x\"").is_err());
    }

    #[test]
    fn test_log_level_override() {
        assert_eq!(log_level_override("?log_level=debug").as_deref(), Some("debug"));
        assert_eq!(
            log_level_override("?theme=dark&log_level=warn").as_deref(),
            Some("warn")
        );
        assert_eq!(log_level_override("?log_level="), None);
        assert_eq!(log_level_override(""), None);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let section = AppSection {
            title: String::new(),
            tagline: String::new(),
            log_level: "LOUD".to_string(),
        };
        assert_eq!(section.level(), log::Level::Info);
    }

    #[test]
    fn test_level_names_are_case_insensitive() {
        let section = AppSection {
            title: String::new(),
            tagline: String::new(),
            log_level: "DEBUG".to_string(),
        };
        assert_eq!(section.level(), log::Level::Debug);
    }

    /// The configured initial tab of every page must exist in that page's
    /// tab definition.
    #[test]
    fn test_default_initial_tabs_are_valid() {
        let pages = parse_config(DEFAULT_CONFIG).unwrap().pages;
        let owner = leptos::prelude::Owner::new();
        owner.with(|| {
            assert!(crate::domain::a002_discover::ui::discover_tab_view(&pages.discover).is_ok());
            assert!(crate::domain::a003_events::ui::events_tab_view(&pages.events).is_ok());
            assert!(crate::domain::a004_music::ui::music_tab_view(&pages.music).is_ok());
            assert!(crate::domain::a005_network::ui::network_tab_view(&pages.network).is_ok());
        });
    }
}
