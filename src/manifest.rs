//! Loading and interpreting the deck manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Manifest, SectionRecord};

/// Load a deck manifest from disk.
///
/// A missing or malformed manifest is the one input failure that aborts the
/// whole build, so both cases surface as errors with the offending path.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
  let content = fs::read_to_string(path)
    .with_context(|| format!("manifest not found at {}", path.display()))?;
  let manifest: Manifest = serde_json::from_str(&content)
    .with_context(|| format!("failed to parse manifest JSON at {}", path.display()))?;
  Ok(manifest)
}

/// Enabled sections in build order.
///
/// Sections with `enabled: false` are dropped; the rest are sorted ascending
/// by `order`. The sort is stable, so ties keep their manifest order.
pub fn active_sections(manifest: &Manifest) -> Vec<&SectionRecord> {
  let mut active: Vec<&SectionRecord> = manifest
    .sections
    .iter()
    .filter(|section| section.enabled)
    .collect();
  active.sort_by_key(|section| section.order);
  active
}
