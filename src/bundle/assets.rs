//! MIME resolution and base64 data URI encoding for binary assets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};

/// MIME type for a file path, derived from its extension.
///
/// Extensions are matched case-insensitively against a fixed table of the
/// image, video and font formats decks reference. Unknown extensions (or no
/// extension at all) fall back to `application/octet-stream`.
pub fn mime_type(path: &Path) -> &'static str {
  let extension = path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(|ext| ext.to_ascii_lowercase());

  match extension.as_deref() {
    Some("png") => "image/png",
    Some("jpg") | Some("jpeg") => "image/jpeg",
    Some("webp") => "image/webp",
    Some("gif") => "image/gif",
    Some("svg") => "image/svg+xml",
    Some("mp4") => "video/mp4",
    Some("woff") => "font/woff",
    Some("woff2") => "font/woff2",
    Some("ttf") => "font/ttf",
    Some("otf") => "font/otf",
    _ => "application/octet-stream",
  }
}

/// Read a file and encode it as a `data:<mime>;base64,<payload>` URI.
pub fn encode_data_uri(path: &Path) -> Result<String> {
  let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
  let encoded = general_purpose::STANDARD.encode(bytes);
  Ok(format!("data:{};base64,{}", mime_type(path), encoded))
}
