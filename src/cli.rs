use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Parser, Debug)]
#[command(
    name = "release-fetch",
    version,
    about = "Download the source archive of a repository's latest GitHub release."
)]
pub struct Args {
    #[arg(help = "Target repository, in owner/name form")]
    pub repository: String,
    #[arg(
        short = 'v',
        value_name = "VERBOSITY",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(0..=4),
        help = "Log verbosity: 0 critical, 1 error, 2 warning, 3 info, 4 debug"
    )]
    pub verbosity: u8,
    #[arg(short = 'f', value_enum, default_value_t = Format::Zip, help = "Archive format to download")]
    pub format: Format,
    #[arg(long, help = "Source archive only (accepted, currently has no effect)")]
    pub source_only: bool,
    #[arg(long, help = "Print the download URL and skip the download")]
    pub list_only: bool,
    #[arg(short = 'd', long, help = "Debug mode, skip the download")]
    pub debug: bool,
    #[arg(short = 'i', long, help = "Print release information and exit")]
    pub info: bool,
    #[arg(
        short = 'o',
        long,
        default_value = ".",
        help = "Directory the archive is written to"
    )]
    pub output_dir: PathBuf,
    #[arg(short = 'T', long, value_name = "SECS", help = "HTTP timeout in seconds")]
    pub timeout: Option<u64>,
    #[arg(long, hide = true, default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Format {
    #[value(alias = "z")]
    Zip,
    #[value(alias = "t")]
    Tar,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Zip => ".zip",
            Format::Tar => ".tar.gz",
        }
    }
}

impl Args {
    pub fn level_filter(&self) -> LevelFilter {
        match self.verbosity {
            0 | 1 => LevelFilter::ERROR,
            2 => LevelFilter::WARN,
            3 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }
}

/// `-so` and `-lo` are two-letter single-dash flags, which clap would read as
/// bundled short flags.
fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-so" {
                OsString::from("--source-only")
            } else if arg == "-lo" {
                OsString::from("--list-only")
            } else {
                arg
            }
        })
        .collect()
}

pub fn parse_args() -> Args {
    Args::parse_from(normalize(std::env::args_os()))
}
