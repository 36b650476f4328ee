use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{ReleaseInfo, ReleaseJson};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn api_url(api_base: &str, repository: &str) -> String {
    format!("{api_base}/repos/{repository}/releases/latest")
}

pub fn build_client(config: &Config) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(Error::Client)
}

/// One GET against the latest-release endpoint. No retry.
pub fn fetch_release(client: &Client, config: &Config) -> Result<ReleaseInfo> {
    let url = api_url(&config.api_base, &config.repository);
    debug!("fetching release information from {url}");
    let transport = |source: reqwest::Error| Error::Transport {
        url: url.clone(),
        source: source.into(),
    };

    let resp = client
        .get(&url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .map_err(transport)?;
    match resp.status() {
        StatusCode::OK => {}
        StatusCode::NOT_FOUND => {
            return Err(Error::NotFound {
                repository: config.repository.clone(),
            });
        }
        status => {
            return Err(Error::Retrieval {
                repository: config.repository.clone(),
                status,
            });
        }
    }

    let body = resp.bytes().map_err(transport)?;
    let json: ReleaseJson =
        serde_json::from_slice(&body).map_err(|source| Error::MalformedRelease {
            repository: config.repository.clone(),
            source,
        })?;
    debug!(
        "release {} has {} asset(s)",
        json.tag_name.as_deref().unwrap_or("<untagged>"),
        json.assets.as_ref().map_or(0, Vec::len)
    );
    Ok(ReleaseInfo::new(&config.repository, &url, json))
}
