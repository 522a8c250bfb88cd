/*
[INPUT]:  Parsed CLI arguments
[OUTPUT]: Report text for the selected mode
[POS]:    CLI layer - argument definitions and mode dispatch
[UPDATE]: When changing CLI flags or adding modes
*/

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::{info, warn};

use memo_auth_adapter::auth::login_hash::DEFAULT_LOGIN_DOMAIN;
use memo_auth_adapter::{EvmWalletSigner, WalletSigner, login_hash};

use crate::config::EndpointsConfig;
use crate::report;

/// Sample values for the experimental login-hash mode
pub const SAMPLE_ADDRESS: &str = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4";
pub const SAMPLE_NONCE: &str = "0x01";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Fetch and sign the middleware and Lens challenges
    Challenge,
    /// Experimental: sign keccak256(address || nonce || domain) without a fetch
    LoginHash,
}

#[derive(Parser, Debug)]
#[command(
    name = "memo-auth",
    version,
    about = "Fetch and sign MEMO middleware and Lens login challenges"
)]
pub struct Cli {
    /// Private key (hex) used for signing
    #[arg(long = "sk", value_name = "HEX")]
    pub secret_key: String,
    #[arg(long, value_enum, default_value_t = Mode::Challenge)]
    pub mode: Mode,
    /// Account address hashed in login-hash mode
    #[arg(long, value_name = "HEX", default_value = SAMPLE_ADDRESS)]
    pub address: String,
    /// Nonce hashed in login-hash mode
    #[arg(long, value_name = "HEX", default_value = SAMPLE_NONCE)]
    pub nonce: String,
    /// Domain hashed in login-hash mode
    #[arg(long, default_value = DEFAULT_LOGIN_DOMAIN)]
    pub domain: String,
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    #[arg(long = "middleware-url", value_name = "URL")]
    pub middleware_url: Option<String>,
    #[arg(long = "lens-url", value_name = "URL")]
    pub lens_url: Option<String>,
    /// Fetch both challenges at once; output order is unchanged
    #[arg(long)]
    pub concurrent: bool,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Rewrite single-dash long flags (`-sk`, `-address=0x..`) to `--sk`, `--address=0x..`
///
/// Only names that are long flags of [`Cli`] are rewritten, so short flags
/// like `-h` and values such as negative numbers pass through. Arguments
/// after `--` are left alone.
pub fn normalize_single_dash_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let long_flags: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .collect();

    let mut after_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_terminator = true;
                return arg;
            }
            if let Some(rest) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) {
                let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                if name.len() > 1 && long_flags.contains(&name) {
                    return OsString::from(format!("-{text}"));
                }
            }
            arg
        })
        .collect()
}

/// Run the selected mode and return the text to print
pub async fn run(cli: &Cli) -> Result<String> {
    match cli.mode {
        Mode::Challenge => run_challenge(cli).await,
        Mode::LoginHash => run_login_hash(cli).await,
    }
}

fn resolve_config(cli: &Cli) -> Result<EndpointsConfig> {
    let mut config = match &cli.config_path {
        Some(path) => EndpointsConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => EndpointsConfig::default(),
    };
    config.apply_overrides(cli.middleware_url.clone(), cli.lens_url.clone(), cli.concurrent);
    Ok(config)
}

async fn run_challenge(cli: &Cli) -> Result<String> {
    let config = resolve_config(cli)?;
    info!(
        middleware = %config.middleware.url,
        lens = %config.lens.url,
        fetch_mode = ?config.fetch_mode,
        "configuration loaded"
    );

    let manager = config
        .build_login_manager()
        .context("build challenge clients")?;
    let signed = manager
        .login_with_private_key(&cli.secret_key)
        .await
        .context("sign login challenges")?;

    Ok(report::challenge_report(&signed))
}

async fn run_login_hash(cli: &Cli) -> Result<String> {
    warn!("login-hash mode is experimental; its preimage layout is not a confirmed service contract");

    let wallet = EvmWalletSigner::new(&cli.secret_key).context("parse private key")?;
    info!(address = wallet.address(), "derived wallet address");

    let hash = login_hash(&cli.address, &cli.nonce, &cli.domain).context("compute login hash")?;
    let signature = wallet.sign_hash(&hash).await.context("sign login hash")?;

    Ok(report::login_hash_report(&hash, &signature))
}
