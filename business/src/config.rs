//! Browser and application configuration.
//!
//! [`BrowserConfig`] is what a single data browser needs. [`AppConfig`] is read
//! from `ROOST_*` environment variables by the front-end at startup.

use std::env::vars;
use std::path::PathBuf;

use log::info;
use serde::Deserialize;
use ustr::Ustr;

use crate::{Column, ColumnSource, DEFAULT_PAGE_SIZE};

/// Prefix of every environment variable read by [`AppConfig::init`].
pub const ENV_PREFIX: &str = "ROOST_";

/// Key field used when `ROOST_KEY_FIELD` is not set.
pub const DEFAULT_KEY_FIELD: &str = "id";

/// Settings of one data browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub page_size: usize,
    /// Column whose value identifies a row. `None` keys rows by position.
    pub key_field: Option<Ustr>,
    pub columns: ColumnSource,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            key_field: None,
            columns: ColumnSource::FirstRow,
        }
    }
}

impl BrowserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size. Zero is bumped to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_key_field(mut self, key_field: &str) -> Self {
        self.key_field = Some(Ustr::from(key_field));
        self
    }

    pub fn with_columns(mut self, columns: ColumnSource) -> Self {
        self.columns = columns;
        self
    }

    pub fn key_field(&self) -> Option<&str> {
        self.key_field.as_ref().map(Ustr::as_str)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    data_file: Option<String>,
    page_size: Option<usize>,
    key_field: Option<String>,
    columns: Option<String>,
}

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON array of rows shown as an extra dataset.
    pub data_file: Option<PathBuf>,
    /// Defaults applied to every dataset browser.
    pub browser: BrowserConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            browser: BrowserConfig::default().with_key_field(DEFAULT_KEY_FIELD),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from {ENV_PREFIX}* environment variables");
        Self::from_vars(vars())
    }

    /// Reads the configuration from `(name, value)` pairs.
    ///
    /// Only names starting with [`ENV_PREFIX`] are considered.
    pub fn from_vars<I, K, V>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let prefixed: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_owned(), value.as_ref().to_owned()))
            })
            .collect();

        let raw: RawConfig = if prefixed.is_empty() {
            RawConfig::default()
        } else {
            serde_env::from_iter(prefixed)?
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            data_file,
            page_size,
            key_field,
            columns,
        } = raw;

        let page_size = match page_size {
            Some(0) => anyhow::bail!("{ENV_PREFIX}PAGE_SIZE must be at least 1"),
            Some(size) => size,
            None => DEFAULT_PAGE_SIZE,
        };

        let key_field = match key_field.as_deref().map(str::trim) {
            None => Some(Ustr::from(DEFAULT_KEY_FIELD)),
            Some("") => {
                info!("{ENV_PREFIX}KEY_FIELD is empty, rows are keyed by position");
                None
            }
            Some(field) => Some(Ustr::from(field)),
        };

        let columns = match columns {
            Some(value) => parse_column_source(&value)?,
            None => ColumnSource::FirstRow,
        };

        let data_file = data_file
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        if let Some(path) = &data_file {
            info!("Rows file: {}", path.display());
        }

        Ok(Self {
            data_file,
            browser: BrowserConfig {
                page_size,
                key_field,
                columns,
            },
        })
    }
}

/// Parses `first-row`, `union`, or a comma separated list of column keys.
pub fn parse_column_source(value: &str) -> anyhow::Result<ColumnSource> {
    match value.trim() {
        "" | "first-row" => Ok(ColumnSource::FirstRow),
        "union" => Ok(ColumnSource::Union),
        list => {
            let columns: Vec<Column> = list
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(Column::new)
                .collect();
            if columns.is_empty() {
                anyhow::bail!("{ENV_PREFIX}COLUMNS lists no columns: {value:?}");
            }
            Ok(ColumnSource::Explicit(columns))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_variables() {
        let config = AppConfig::from_vars(Vec::<(String, String)>::new())
            .expect("empty environment should give defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.browser.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.browser.key_field(), Some("id"));
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_reads_prefixed_variables() {
        let config = AppConfig::from_vars(vec![
            ("ROOST_DATA_FILE", "/tmp/batches.json"),
            ("ROOST_PAGE_SIZE", "25"),
            ("ROOST_KEY_FIELD", "batch_code"),
            ("ROOST_COLUMNS", "union"),
            ("PAGE_SIZE", "3"),
        ])
        .expect("config should parse");

        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/batches.json")));
        assert_eq!(config.browser.page_size, 25);
        assert_eq!(config.browser.key_field(), Some("batch_code"));
        assert_eq!(config.browser.columns, ColumnSource::Union);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let result = AppConfig::from_vars(vec![("ROOST_PAGE_SIZE", "0")]);
        let err = result.expect_err("zero page size must fail");
        assert!(err.to_string().contains("ROOST_PAGE_SIZE"));
    }

    #[test]
    fn test_parse_column_source() {
        assert_eq!(
            parse_column_source("first-row").expect("valid"),
            ColumnSource::FirstRow
        );
        assert_eq!(
            parse_column_source(" union ").expect("valid"),
            ColumnSource::Union
        );
        assert_eq!(
            parse_column_source("name, age").expect("valid"),
            ColumnSource::Explicit(vec![Column::new("name"), Column::new("age")])
        );
        assert!(parse_column_source(" , ,").is_err());
    }

    #[test]
    fn test_builder_bumps_zero_page_size() {
        let config = BrowserConfig::new().with_page_size(0);
        assert_eq!(config.page_size, 1);
    }
}
