/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Challenge texts and signatures on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use memo_auth_cli::{Cli, normalize_single_dash_flags, run};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse_from(normalize_single_dash_flags(std::env::args_os()));
    init_tracing(&args.log_level)?;

    info!(mode = ?args.mode, "starting memo-auth");

    let report = run(&args).await?;
    print!("{report}");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
