use crate::config::{Config, Mode};
use crate::downloader::download_file;
use crate::error::Result;
use crate::fetcher::fetch_release;
use crate::model::ReleaseInfo;
use reqwest::blocking::Client;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Info,
    Listed(String),
    Debug,
    Downloaded { path: PathBuf, bytes: u64 },
}

/// Fetches the release and then reports, lists or downloads per `config.mode`.
pub fn run(client: &Client, config: &Config, out: &mut impl Write) -> Result<Outcome> {
    let release = fetch_release(client, config)?;
    writeln!(out, "Repository: {}", release.repository())?;
    writeln!(out, "Repository URL: {}", release.api_url())?;

    match config.mode {
        Mode::Info => {
            write_metadata(&release, out)?;
            Ok(Outcome::Info)
        }
        Mode::ListOnly => {
            let url = release.download_url(config.format);
            writeln!(out, "{url}")?;
            Ok(Outcome::Listed(url.to_string()))
        }
        Mode::Debug => {
            writeln!(out, "### DEBUG MODE ###")?;
            debug!(
                "skipping download of {}",
                release.download_url(config.format)
            );
            Ok(Outcome::Debug)
        }
        Mode::Download => {
            let path = config.output_path();
            let bytes = download_file(client, release.download_url(config.format), &path, out)?;
            info!("saved {} bytes to {}", bytes, path.display());
            Ok(Outcome::Downloaded { path, bytes })
        }
    }
}

fn write_metadata(release: &ReleaseInfo, out: &mut impl Write) -> Result<()> {
    if let Some(tag) = release.tag_name() {
        writeln!(out, "Tag: {tag}")?;
    }
    if let Some(name) = release.name() {
        writeln!(out, "Name: {name}")?;
    }
    if let Some(published) = release.published_at() {
        writeln!(out, "Published: {}", published.format("%Y-%m-%d %H:%M:%S UTC"))?;
    }
    if release.has_assets() {
        writeln!(out, "Assets: {}", release.asset_count())?;
    }
    Ok(())
}
