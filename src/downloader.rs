use crate::error::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tracing::debug;

const CHUNK_SIZE: usize = 64 * 1024;

/// Fetches `url` and writes the body to `dest`, replacing any existing file.
/// Nothing is created on disk unless the server answers 200.
pub fn download_file(
    client: &Client,
    url: &str,
    dest: &Path,
    out: &mut impl Write,
) -> Result<u64> {
    writeln!(out, "Downloading latest release!")?;
    writeln!(out, "{url}")?;
    let transport = |source: Box<dyn std::error::Error + Send + Sync>| Error::Transport {
        url: url.to_string(),
        source,
    };
    let resp = client
        .get(url)
        .send()
        .map_err(|e| transport(e.into()))?;
    if resp.status() != StatusCode::OK {
        return Err(Error::DownloadHttp {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    debug!("{url} resolved to {}", resp.url());

    writeln!(out, "Saving file")?;
    let io_err = |source| Error::Io {
        path: dest.to_path_buf(),
        source,
    };
    let pb = ProgressBar::new(resp.content_length().unwrap_or(0));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let mut file = File::create(dest).map_err(io_err)?;
    let mut reader = pb.wrap_read(resp);
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut written = 0u64;
    // Read errors come from the connection, write errors from the disk.
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                pb.abandon();
                return Err(transport(e.into()));
            }
        };
        file.write_all(&buf[..n]).map_err(io_err)?;
        written += n as u64;
    }
    file.flush().map_err(io_err)?;
    pb.finish_and_clear();
    writeln!(out, "Downloaded!")?;
    Ok(written)
}
