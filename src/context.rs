use crate::api::ProfileClient;
use crate::cli::Cli;
use crate::config::{self, MissingNamePolicy, Settings};
use crate::error::AppResult;

#[derive(Debug)]
pub struct AppContext {
    pub client: ProfileClient,
    pub address_domain: String,
    pub on_missing_name: MissingNamePolicy,
}

impl AppContext {
    /// Settings file first, then command line flags on top.
    pub fn bootstrap(cli: &Cli) -> AppResult<Self> {
        let mut settings = config::load_settings(cli.config.as_deref())?;

        if let Some(base_url) = &cli.base_url {
            settings.base_url = Some(base_url.clone());
        }
        if let Some(domain) = &cli.domain {
            settings.address_domain = Some(domain.clone());
        }
        if let Some(policy) = cli.on_missing_name {
            settings.on_missing_name = Some(policy);
        }
        if let Some(timeout) = cli.timeout {
            settings.timeout_secs = Some(timeout);
        }

        Self::from_settings(&settings)
    }

    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let client = ProfileClient::new(settings.base_url()?, settings.timeout()?)?;

        Ok(Self {
            client,
            address_domain: settings.address_domain()?.to_string(),
            on_missing_name: settings.on_missing_name(),
        })
    }
}
