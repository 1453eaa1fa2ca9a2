use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::Level;
use typed_builder::TypedBuilder;

/// Settings for a single mount of the application.
///
/// There is no environment to read from in the browser, so everything is
/// decided when the config is built. Unset fields fall back to the same
/// values as [`AppConfig::default`].
#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    /// The `id` of the element the app is mounted into.
    #[builder(setter(into), default = default_root_id())]
    #[serde(default = "default_root_id")]
    pub root_id: String,
    /// Text for the page heading and the document title.
    #[builder(setter(into), default = default_title())]
    #[serde(default = "default_title")]
    pub title: String,
    /// Render the router and query devtools panels.
    #[builder(default = default_devtools())]
    #[serde(default = "default_devtools")]
    pub devtools: bool,
    /// Maximum `tracing` level, e.g. `"debug"` or `"warn"`.
    #[builder(setter(into), default = default_log_level())]
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// The configured log level, or `INFO` when it cannot be parsed.
    pub fn max_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn default_root_id() -> String {
    "root".to_string()
}

fn default_title() -> String {
    "frontend: Leptos + Router + Query".to_string()
}

fn default_devtools() -> bool {
    cfg!(debug_assertions)
}

fn default_log_level() -> String {
    let level = if cfg!(debug_assertions) { "debug" } else { "info" };
    level.to_string()
}
