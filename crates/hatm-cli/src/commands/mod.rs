//! CLI command implementations

pub mod adapt;
pub mod apply;
pub mod encode;
pub mod info;
pub mod sample;

use anyhow::{Context, Result};
use hatm_metadata::{ColorVolumeTransform, HeadroomAdaptiveToneMap, Syntax};
use std::path::Path;
use tracing::debug;

/// Reads and decodes a payload.
pub fn load_syntax(path: &Path) -> Result<Syntax> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read payload");
    hatm_metadata::decode(&bytes).with_context(|| format!("Failed to decode: {}", path.display()))
}

/// Reads a payload and derives its color volume transform.
pub fn load_transform(path: &Path) -> Result<(Syntax, ColorVolumeTransform)> {
    let syntax = load_syntax(path)?;
    let cvt = hatm_metadata::derive_transform(&syntax);
    Ok((syntax, cvt))
}

/// Reads a payload that must carry a tone map.
pub fn load_tone_map(path: &Path) -> Result<HeadroomAdaptiveToneMap> {
    let (_, cvt) = load_transform(path)?;
    cvt.headroom_adaptive_tone_map
        .with_context(|| format!("No headroom-adaptive tone map in {}", path.display()))
}
