//! Shift-cipher CLI library: argument collection, payload resolution,
//! character transform, and result emission, run in strict sequence.

pub mod args;
pub mod error;
pub mod input;
pub mod output;

use anyhow::Result;
use caesar::{Caesar, Mode};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::ParsedArgs;
use crate::error::CipherResult;

/// Wire diagnostics to stderr; `RUST_LOG` overrides the default filter.
///
/// Stdout is reserved for the transformed text and the fixed failure
/// message, so every diagnostic line goes to stderr.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ccli=info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Run the whole pipeline over the raw argument tokens (program name
/// excluded). Every stage fault propagates unchanged to the caller.
pub fn run(tokens: &[String]) -> Result<()> {
    let parsed = ParsedArgs::parse(tokens);
    let key = parsed.key()?;
    let mode = parsed.mode();
    let payload = input::resolve(parsed.data(), parsed.input_path())?;
    let transformed = transform(&payload, key, mode)?;
    output::write(&parsed.destination(), &transformed)?;
    Ok(())
}

/// Trim the payload, then shift every remaining character by `key`.
///
/// Only leading/trailing whitespace is removed; internal characters,
/// whitespace included, are all shifted.
fn transform(payload: &str, key: i32, mode: Mode) -> CipherResult<String> {
    let data = payload.trim();
    info!(length = data.chars().count(), "transforming trimmed payload");
    Ok(Caesar::new(key).apply(mode, data)?)
}
