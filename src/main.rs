mod cli;
mod config;
mod downloader;
mod error;
mod fetcher;
mod model;
mod report;

use config::Config;
use report::Outcome;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    let filter = EnvFilter::builder()
        .with_default_directive(args.level_filter().into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let config = Config::from(&args);
    if config.source_only {
        debug!("--source-only has no effect");
    }

    let result = fetcher::build_client(&config)
        .and_then(|client| report::run(&client, &config, &mut std::io::stdout().lock()));
    match result {
        Ok(Outcome::Downloaded { path, bytes }) => {
            debug!("wrote {bytes} bytes to {}", path.display())
        }
        Ok(Outcome::Listed(url)) => debug!("listed {url}"),
        Ok(Outcome::Info | Outcome::Debug) => {}
        Err(err) => {
            error!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
