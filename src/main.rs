use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use geoframe::config::{CliArgs, RunConfig};
use geoframe::runner::{Runner, render};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing (stderr, so stdout carries only results)
    let filter = if args.verbose {
        EnvFilter::new("geoframe=debug")
    } else {
        EnvFilter::new("geoframe=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config: RunConfig = args.into();

    // Configure rayon thread pool
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure rayon thread pool")?;
    }

    match Runner::run(&config) {
        Ok(result) => {
            let text = render(&result.output, config.format).context("Failed to render output")?;
            println!("{text}");
            Ok(())
        }
        Err(e) => {
            error!(%e, "Conversion failed");
            Err(anyhow::anyhow!(e)).context("geoframe conversion failed")
        }
    }
}
