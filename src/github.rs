use crate::error::{ProfileCardError, Result};
use crate::types::Profile;
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";

/// Anything a card can ask for a user's profile.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<Profile>;
}

/// Unauthenticated GitHub REST client. One request per call, no retries and
/// no timeout.
pub struct GitHubClient {
    client: Client,
    api_base: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Points the client at another API root, e.g. a GitHub Enterprise host.
    pub fn with_base_url(api_base: &str) -> Result<Self> {
        let api_base = Url::parse(api_base)?;
        if api_base.cannot_be_a_base() {
            return Err(ProfileCardError::CannotBeBase(api_base.to_string()));
        }

        let client = Client::builder()
            .user_agent(concat!("github-profile-card/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubClient { client, api_base })
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// `{api_base}/users/{username}`, with the username percent-encoded.
    pub fn user_url(&self, username: &str) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| ProfileCardError::CannotBeBase(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(["users", username]);
        Ok(url)
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!("GitHub responded {} for {}", status, url);
            Err(ProfileCardError::HttpStatus(status))
        }
    }

    pub async fn get_user(&self, username: &str) -> Result<Profile> {
        let url = self.user_url(username)?;
        let response = self.make_request(url).await?;
        let body = response.bytes().await?;
        let profile: Profile = serde_json::from_slice(&body)?;
        Ok(profile)
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        self.get_user(username).await
    }
}
