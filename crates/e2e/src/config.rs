//! Harness configuration

use std::path::PathBuf;

use petcheck_common::SchemaRevision;

use crate::error::{E2eError, E2eResult};
use crate::playwright::PlaywrightConfig;

pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";
pub const DEFAULT_PAGE_URL: &str = "https://playground.learnqa.ru/puzzle/triangle";

/// Remote API settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reject base URLs that are not absolute http(s) URLs
    pub fn validate(&self) -> E2eResult<()> {
        let url = self.base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(E2eError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )))
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Everything a run needs
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub api: ApiConfig,
    pub browser: PlaywrightConfig,
    /// Category schema the remote server is expected to speak
    pub schema: SchemaRevision,
    /// Skip scenarios that need a browser
    pub skip_ui: bool,
    /// Output directory for results
    pub output_dir: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            browser: PlaywrightConfig::default(),
            schema: SchemaRevision::default(),
            skip_ui: false,
            output_dir: PathBuf::from("test-results"),
        }
    }
}
