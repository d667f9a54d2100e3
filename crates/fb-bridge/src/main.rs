//! fig-bridge: runs the plugin dispatcher over stdio.
//!
//! Reads UI messages as newline-delimited JSON on stdin and writes replies
//! on stdout. Logs go to stderr (`RUST_LOG` controls the level).
//!
//! Usage: `fb-bridge [--settings <path>]`

mod bridge;

use anyhow::{Context as _, Result, bail};
use fb_core::Document;
use fb_dispatch::{Dispatcher, Settings};
use std::path::PathBuf;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let settings_path = match settings_arg(std::env::args().skip(1))? {
        Some(path) => path,
        None => Settings::default_path().context("no config directory on this platform")?,
    };
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("loading settings from {settings_path:?}"))?;
    log::info!("fig-bridge starting (server port {})", settings.server_port);

    let mut dispatcher =
        Dispatcher::new(Document::new(), settings).with_settings_path(settings_path);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    bridge::run(&mut dispatcher, stdin, stdout).await
}

/// Parse `--settings <path>`; any other argument is an error.
fn settings_arg(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => {
                let value = args.next().context("--settings requires a path")?;
                path = Some(PathBuf::from(value));
            }
            other => bail!("unknown argument '{other}' (usage: fb-bridge [--settings <path>])"),
        }
    }
    Ok(path)
}
