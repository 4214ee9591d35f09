use std::time::Duration;

use reqwest::Client;
use scraper::Selector;
use url::Url;

use crate::error::{AppError, AppResult};

use super::models::{FallbackReason, LookupOutcome};
use super::profile;

#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: Client,
    base_url: Url,
    name_selector: Selector,
}

impl ProfileClient {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            name_selector: profile::display_name_selector()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the profile page for `identifier` and pulls the display name
    /// out of it. Transport failures and non-success statuses become
    /// [`LookupOutcome::FallbackUsed`]; a page without the display-name node
    /// is reported as [`AppError::MissingDisplayName`].
    pub async fn lookup(&self, identifier: &str) -> AppResult<LookupOutcome> {
        let body = match self.fetch_page(identifier).await {
            Ok(body) => body,
            Err(AppError::Http(err)) => {
                return Ok(LookupOutcome::FallbackUsed(FallbackReason::Transport(
                    err.to_string(),
                )));
            }
            Err(other) => return Err(other),
        };

        match profile::extract_display_name(&body, &self.name_selector) {
            Some(name) => Ok(LookupOutcome::Fetched(name)),
            None => Err(AppError::MissingDisplayName {
                identifier: identifier.to_string(),
            }),
        }
    }

    async fn fetch_page(&self, identifier: &str) -> AppResult<String> {
        let url = profile::profile_url(&self.base_url, identifier)?;
        tracing::debug!(%url, "fetching profile page");

        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
