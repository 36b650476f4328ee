use crate::cli::{Args, Format};
use std::path::PathBuf;
use std::time::Duration;

/// What the run does once the release has been fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Info,
    ListOnly,
    Debug,
    Download,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub repository: String,
    pub format: Format,
    pub mode: Mode,
    /// Parsed but has no effect on the run.
    pub source_only: bool,
    pub api_base: String,
    pub output_dir: PathBuf,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(repository: impl Into<String>, api_base: impl Into<String>) -> Self {
        Config {
            repository: repository.into(),
            format: Format::Zip,
            mode: Mode::Download,
            source_only: false,
            api_base: api_base.into(),
            output_dir: PathBuf::from("."),
            timeout: None,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("output{}", self.format.extension()))
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let mode = if args.info {
            Mode::Info
        } else if args.list_only {
            Mode::ListOnly
        } else if args.debug {
            Mode::Debug
        } else {
            Mode::Download
        };
        Config {
            format: args.format,
            mode,
            source_only: args.source_only,
            output_dir: args.output_dir.clone(),
            timeout: args.timeout.map(Duration::from_secs),
            ..Config::new(
                args.repository.clone(),
                args.api_base.trim_end_matches('/'),
            )
        }
    }
}
