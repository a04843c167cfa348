//! Startup Configuration
//!
//! Resolves the data source and API base URL once at startup and hands
//! them to the component tree through context. Nothing reads a mutable
//! global: data access receives the configuration explicitly.

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Local-storage key selecting the data source ("mock" or "api")
const MODE_STORAGE_KEY: &str = "sportsee_data_mode";

/// Local-storage key overriding the API base URL
const API_URL_STORAGE_KEY: &str = "sportsee_api_url";

/// Where the dashboard reads its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Compiled-in fixtures, usable without a backend
    Mock,
    /// Live SportSee HTTP API
    Api,
}

/// Application configuration, resolved once and provided via context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: DataSource,
    pub api_base: String,
}

impl AppConfig {
    /// Resolve the configuration from local-storage overrides, falling
    /// back to mock mode against the default base URL.
    pub fn resolve() -> Self {
        let source = source_from(read_storage(MODE_STORAGE_KEY).as_deref());
        let api_base = read_storage(API_URL_STORAGE_KEY)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            source,
            // Normalize: remove trailing slash
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

fn source_from(mode: Option<&str>) -> DataSource {
    match mode {
        Some("api") => DataSource::Api,
        _ => DataSource::Mock,
    }
}

fn read_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_mode_requires_an_explicit_opt_in() {
        assert_eq!(source_from(Some("api")), DataSource::Api);
    }

    #[test]
    fn anything_else_falls_back_to_mock_mode() {
        assert_eq!(source_from(None), DataSource::Mock);
        assert_eq!(source_from(Some("mock")), DataSource::Mock);
        assert_eq!(source_from(Some("bogus")), DataSource::Mock);
    }
}
