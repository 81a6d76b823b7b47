use log::info;
use serde::Deserialize;
use std::env::vars;
use thiserror::Error;
use ustr::Ustr;

/// Page size used when the environment does not provide one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Lookup code of the tenant picker.
pub const DEFAULT_TENANT_LOV_CODE: &str = "HPFM.ASSIGN_TENANT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("CARDTENANT_PAGE_SIZE must be greater than zero")]
    InvalidPageSize,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    cardtenant_api_base_url: Option<String>,
    cardtenant_page_size: Option<u32>,
    cardtenant_tenant_lov_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Page size requested from the server for the assigned tenants table.
    pub page_size: u32,
    pub tenant_lov_code: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads `CARDTENANT_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            cardtenant_api_base_url,
            cardtenant_page_size,
            cardtenant_tenant_lov_code,
        } = raw;

        let defaults = Self::default();

        let api_base_url = match cardtenant_api_base_url {
            Some(url) => {
                info!("Using provided CARDTENANT_API_BASE_URL: {url}");
                url
            }
            None => defaults.api_base_url,
        };

        let page_size = match cardtenant_page_size {
            Some(0) => return Err(ConfigError::InvalidPageSize),
            Some(size) => size,
            None => defaults.page_size,
        };

        Ok(Self {
            api_base_url,
            page_size,
            tenant_lov_code: cardtenant_tenant_lov_code.unwrap_or(defaults.tenant_lov_code),
        })
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn api_url(&self) -> Ustr {
        Ustr::from(self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080/hpfm".to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            tenant_lov_code: DEFAULT_TENANT_LOV_CODE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn defaults_when_environment_is_empty() {
        let raw: RawConfig = from_iter(Vec::<(&str, &str)>::new()).expect("empty env should parse");
        let config = BusinessConfig::from_raw(raw).expect("defaults should build");

        assert_eq!(config, BusinessConfig::default());
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.tenant_lov_code, "HPFM.ASSIGN_TENANT");
    }

    #[test]
    fn reads_overrides() {
        let raw: RawConfig = from_iter(vec![
            ("CARDTENANT_API_BASE_URL", "https://admin.example.com/hpfm/"),
            ("CARDTENANT_PAGE_SIZE", "25"),
            ("CARDTENANT_TENANT_LOV_CODE", "HPFM.TENANT"),
        ])
        .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.tenant_lov_code, "HPFM.TENANT");
        assert_eq!(
            config.api_url(),
            Ustr::from("https://admin.example.com/hpfm")
        );
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let raw: RawConfig =
            from_iter(vec![("CARDTENANT_PAGE_SIZE", "0")]).expect("RawConfig should deserialize");

        let err = BusinessConfig::from_raw(raw).unwrap_err();
        assert!(err.to_string().contains("CARDTENANT_PAGE_SIZE"));
    }

    #[test]
    fn new_keeps_other_defaults() {
        let config = BusinessConfig::new("http://localhost:9000");
        assert_eq!(config.api_url(), Ustr::from("http://localhost:9000"));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
