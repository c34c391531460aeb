//! Payload encode command.

use crate::EncodeArgs;
use anyhow::{Context, Result};
use hatm_metadata::Syntax;
use tracing::info;

/// Encodes a JSON syntax tree and writes the payload.
pub fn run(args: EncodeArgs, verbose: u8) -> Result<()> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read: {}", args.input.display()))?;
    let syntax: Syntax = serde_json::from_str(&text)
        .with_context(|| format!("Invalid syntax tree: {}", args.input.display()))?;

    let bytes = hatm_metadata::encode(&syntax).context("Failed to encode")?;
    std::fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write: {}", args.output.display()))?;

    info!(bytes = bytes.len(), "encoded payload");
    if verbose > 0 {
        println!("Wrote {} bytes to {}", bytes.len(), args.output.display());
    }
    Ok(())
}
