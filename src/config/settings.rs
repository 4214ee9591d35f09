use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;
use url::Url;

use crate::error::{AppError, AppResult};

const DEFAULT_BASE_URL: &str = "http://sourceforge.net/users/";
const DEFAULT_ADDRESS_DOMAIN: &str = "users.sourceforge.net";

/// Handling of a fetched profile page that lacks the display-name node.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingNamePolicy {
    /// Stop the run with an error naming the identifier.
    #[default]
    Abort,
    /// Emit the same record a failed fetch would produce.
    Fallback,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub address_domain: Option<String>,
    #[serde(default)]
    pub on_missing_name: Option<MissingNamePolicy>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    pub fn base_url(&self) -> AppResult<Url> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let url = Url::parse(raw.trim())?;
        if url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "base url `{raw}` cannot carry a path"
            )));
        }

        Ok(url)
    }

    pub fn address_domain(&self) -> AppResult<&str> {
        let domain = self
            .address_domain
            .as_deref()
            .unwrap_or(DEFAULT_ADDRESS_DOMAIN)
            .trim();
        if domain.is_empty() {
            return Err(AppError::Config("address domain must not be empty".to_string()));
        }

        Ok(domain)
    }

    pub fn on_missing_name(&self) -> MissingNamePolicy {
        self.on_missing_name.unwrap_or_default()
    }

    pub fn timeout(&self) -> AppResult<Option<Duration>> {
        match self.timeout_secs {
            None => Ok(None),
            Some(0) => Err(AppError::InvalidInput(
                "timeout must be greater than 0".to_string(),
            )),
            Some(secs) => Ok(Some(Duration::from_secs(secs))),
        }
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}
