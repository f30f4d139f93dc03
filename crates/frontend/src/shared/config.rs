//! Runtime configuration of the catalog view.
//!
//! Defaults are embedded as TOML; the page query string may override the API
//! base URL and the initial page size (`?api_base=http://localhost:3000&page_size=20`).

use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.escuelajs.co/api/v1";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_EXPORT_FILENAME: &str = "products_page.csv";

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://api.escuelajs.co/api/v1"

[table]
page_size = 10
page_size_options = [10, 20, 50, 100]

[export]
filename = "products_page.csv"
"#;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 50, 100],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

/// Overrides accepted from the page URL
#[derive(Debug, Deserialize, Default)]
struct QueryOverrides {
    api_base: Option<String>,
    /// Строкой: нечисловое значение не должно отменять остальные параметры
    page_size: Option<String>,
}

impl CatalogConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load the embedded defaults and apply overrides from `window.location.search`
    pub fn load() -> Self {
        let mut config = match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Embedded config is invalid, using built-in defaults: {}", e);
                Self::default()
            }
        };

        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        config.apply_query(&search);

        log::info!("Catalog API: {}", config.api.base_url);
        config
    }

    pub fn apply_query(&mut self, query: &str) {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return;
        }

        let overrides: QueryOverrides = match serde_qs::from_str(query) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("Ignoring malformed query overrides: {}", e);
                return;
            }
        };

        if let Some(base) = overrides.api_base.filter(|b| !b.trim().is_empty()) {
            self.api.base_url = base.trim().trim_end_matches('/').to_string();
        }
        let page_size = overrides.page_size.and_then(|raw| match raw.trim().parse::<usize>() {
            Ok(size) => Some(size),
            Err(e) => {
                log::warn!("Ignoring page_size override {:?}: {}", raw, e);
                None
            }
        });
        if let Some(size) = page_size.filter(|s| *s > 0) {
            self.table.page_size = size;
            if !self.table.page_size_options.contains(&size) {
                self.table.page_size_options.push(size);
                self.table.page_size_options.sort_unstable();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = CatalogConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), CatalogConfig::default());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config = CatalogConfig::from_toml("[api]\nbase_url = \"http://localhost:3000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.table.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.export.filename, DEFAULT_EXPORT_FILENAME);
    }

    #[test]
    fn test_query_overrides() {
        let mut config = CatalogConfig::default();
        config.apply_query("?api_base=http://localhost:3000/&page_size=25");
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.table.page_size, 25);
        assert_eq!(config.table.page_size_options, vec![10, 20, 25, 50, 100]);
    }

    #[test]
    fn test_query_ignores_zero_page_size() {
        let mut config = CatalogConfig::default();
        config.apply_query("page_size=0");
        assert_eq!(config.table.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_bad_page_size_keeps_api_base() {
        let mut config = CatalogConfig::default();
        config.apply_query("?api_base=http://localhost:3000&page_size=abc");
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.table.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.table.page_size_options, vec![10, 20, 50, 100]);
    }
}
