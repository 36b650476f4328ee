use crate::cli::Format;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// The subset of a GitHub release we read. Does not contain all fields.
#[derive(Debug, Deserialize)]
pub struct ReleaseJson {
    pub zipball_url: String,
    pub tarball_url: String,
    #[serde(default)]
    pub assets: Option<Vec<Value>>,
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Latest release of one repository, built once from the info response.
#[derive(Clone, Debug)]
pub struct ReleaseInfo {
    repository: String,
    api_url: String,
    zip_url: String,
    tar_url: String,
    assets: Option<Vec<Value>>,
    tag_name: Option<String>,
    name: Option<String>,
    published_at: Option<DateTime<Utc>>,
}

impl ReleaseInfo {
    pub fn new(repository: &str, api_url: &str, json: ReleaseJson) -> Self {
        ReleaseInfo {
            repository: repository.to_string(),
            api_url: api_url.to_string(),
            zip_url: json.zipball_url,
            tar_url: json.tarball_url,
            assets: json.assets,
            tag_name: json.tag_name,
            name: json.name,
            published_at: json.published_at,
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn download_url(&self, format: Format) -> &str {
        match format {
            Format::Zip => &self.zip_url,
            Format::Tar => &self.tar_url,
        }
    }

    pub fn has_assets(&self) -> bool {
        self.assets.as_ref().is_some_and(|a| !a.is_empty())
    }

    pub fn asset_count(&self) -> usize {
        self.assets.as_ref().map_or(0, Vec::len)
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> serde_json::Result<ReleaseJson> {
        serde_json::from_str(body)
    }

    #[test]
    fn test_resolves_urls_by_format() {
        let json = parse(r#"{"zipball_url": "U1", "tarball_url": "U2"}"#).unwrap();
        let info = ReleaseInfo::new("owner/repo", "api", json);
        assert_eq!(info.download_url(Format::Zip), "U1");
        assert_eq!(info.download_url(Format::Tar), "U2");
        assert_eq!(info.repository(), "owner/repo");
        assert_eq!(info.api_url(), "api");
        assert!(!info.has_assets());
        assert_eq!(info.tag_name(), None);
    }

    #[test]
    fn test_reads_metadata_and_assets() {
        let json = parse(
            r#"{
                "zipball_url": "https://api.github.com/repos/o/r/zipball/v1.2.0",
                "tarball_url": "https://api.github.com/repos/o/r/tarball/v1.2.0",
                "tag_name": "v1.2.0",
                "name": "Release 1.2.0",
                "published_at": "2024-03-01T12:30:00Z",
                "assets": [{"name": "tool-linux.tar.gz", "browser_download_url": "https://x/y"}],
                "draft": false
            }"#,
        )
        .unwrap();
        let info = ReleaseInfo::new("o/r", "api", json);
        assert!(info.has_assets());
        assert_eq!(info.asset_count(), 1);
        assert_eq!(info.tag_name(), Some("v1.2.0"));
        assert_eq!(info.name(), Some("Release 1.2.0"));
        assert_eq!(
            info.published_at().map(|d| d.to_rfc3339()),
            Some("2024-03-01T12:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_null_optional_fields() {
        let json = parse(
            r#"{"zipball_url": "a", "tarball_url": "b", "assets": [], "name": null, "published_at": null}"#,
        )
        .unwrap();
        let info = ReleaseInfo::new("o/r", "api", json);
        assert!(!info.has_assets());
        assert_eq!(info.name(), None);
        assert_eq!(info.published_at(), None);
    }

    #[test]
    fn test_missing_archive_url_is_an_error() {
        let err = parse(r#"{"tarball_url": "b"}"#).unwrap_err();
        assert!(err.to_string().contains("zipball_url"));
    }
}
