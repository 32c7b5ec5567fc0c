//! Rewriting `src` attributes in an assembled document to embedded data URIs.

use std::path::Path;

use regex::Regex;

use crate::bundle::assets::encode_data_uri;
use crate::models::Diagnostics;

/// Replace relative `src="..."` references with base64 data URIs.
///
/// Values already starting with `data:` or `http` are left untouched (the
/// check is prefix-based on purpose, covering `http://` and `https://`).
/// Everything else is resolved against `build_dir`; references whose files do
/// not exist stay as they are, and a file that exists but cannot be read is
/// kept with a diagnostic. Returns the rewritten document and the number of
/// references successfully encoded.
pub fn inline_src_references(
  html: &str,
  build_dir: &Path,
  diagnostics: &mut Diagnostics,
) -> (String, usize) {
  let src_pattern = Regex::new(r#"src=["']([^"']+)["']"#).expect("invalid src regex");
  let mut encoded_count = 0;

  let rewritten = src_pattern
    .replace_all(html, |caps: &regex::Captures<'_>| {
      let src = &caps[1];
      if src.starts_with("data:") || src.starts_with("http") {
        return caps[0].to_string();
      }

      let asset_path = build_dir.join(src);
      if !asset_path.exists() {
        return caps[0].to_string();
      }

      match encode_data_uri(&asset_path) {
        Ok(uri) => {
          encoded_count += 1;
          format!("src=\"{uri}\"")
        }
        Err(err) => {
          diagnostics.warn(format!("Could not encode {src}: {err:#}"));
          caps[0].to_string()
        }
      }
    })
    .into_owned();

  (rewritten, encoded_count)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn encodes_relative_references() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("images")).unwrap();
    fs::write(dir.path().join("images/logo.png"), [1u8, 2, 3]).unwrap();

    let html = r#"<img src="images/logo.png"> <img src='images/logo.png'>"#;
    let mut diagnostics = Diagnostics::default();
    let (rewritten, encoded) = inline_src_references(html, dir.path(), &mut diagnostics);

    assert_eq!(encoded, 2);
    assert!(!rewritten.contains("images/logo.png"));
    assert_eq!(rewritten.matches("src=\"data:image/png;base64,").count(), 2);
    assert!(diagnostics.is_empty());
  }

  #[test]
  fn leaves_data_and_http_references_untouched() {
    let dir = tempdir().unwrap();
    let html = concat!(
      r#"<img src="data:image/png;base64,AAAA">"#,
      r#"<img src="http://example.com/a.png">"#,
      r#"<img src="https://example.com/b.png">"#,
    );

    let mut diagnostics = Diagnostics::default();
    let (rewritten, encoded) = inline_src_references(html, dir.path(), &mut diagnostics);

    assert_eq!(rewritten, html);
    assert_eq!(encoded, 0);
  }

  #[test]
  fn repeated_data_references_stay_stable() {
    let dir = tempdir().unwrap();
    let html = r#"<img src="data:image/png;base64,AAAA"><img src="data:image/png;base64,AAAA">"#;

    let mut diagnostics = Diagnostics::default();
    let (first, _) = inline_src_references(html, dir.path(), &mut diagnostics);
    let (second, encoded) = inline_src_references(&first, dir.path(), &mut diagnostics);

    assert_eq!(second, html);
    assert_eq!(encoded, 0);
  }

  #[test]
  fn missing_asset_is_left_unchanged() {
    let dir = tempdir().unwrap();
    let html = r#"<img src="images/gone.png">"#;

    let mut diagnostics = Diagnostics::default();
    let (rewritten, encoded) = inline_src_references(html, dir.path(), &mut diagnostics);

    assert_eq!(rewritten, html);
    assert_eq!(encoded, 0);
    assert!(diagnostics.is_empty());
  }

  #[test]
  fn encodes_video_sources_with_video_mime() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("demo.mp4"), [0u8; 4]).unwrap();

    let html = r#"<video class="demo-video" src="demo.mp4"></video>"#;
    let mut diagnostics = Diagnostics::default();
    let (rewritten, encoded) = inline_src_references(html, dir.path(), &mut diagnostics);

    assert_eq!(encoded, 1);
    assert!(rewritten.contains("src=\"data:video/mp4;base64,"));
  }
}
