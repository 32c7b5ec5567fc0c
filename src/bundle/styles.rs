//! Stylesheet inlining for standalone bundles.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};

use crate::models::Diagnostics;
use crate::project::BuildContext;

/// Replace local `@import '<path>.css';` statements with the referenced file's text.
///
/// Only the single-quoted, semicolon-terminated form is recognised; the
/// existing stylesheets use no other syntax, so double-quoted, `url(...)` and
/// media-qualified imports pass through untouched. Each matched path is
/// resolved against `base_dir`. Substitution is single-pass: an `@import`
/// inside an inlined file is not resolved again. A missing import target is
/// preserved verbatim and reported as a diagnostic.
pub fn resolve_imports(css: &str, base_dir: &Path, diagnostics: &mut Diagnostics) -> String {
  let import_pattern =
    Regex::new(r"@import\s+'([^']+\.css)'\s*;").expect("invalid css import regex");

  import_pattern
    .replace_all(css, |caps: &regex::Captures<'_>| {
      let import_path = base_dir.join(&caps[1]);
      match fs::read_to_string(&import_path) {
        Ok(content) => content,
        Err(_) => {
          diagnostics.warn(format!("CSS import not found: {}", &caps[1]));
          caps[0].to_string()
        }
      }
    })
    .into_owned()
}

/// Inline the project's root stylesheet into the document as a `<style>` block.
///
/// The stylesheet is loaded from the layout's configured path, its local
/// imports are resolved, and the document's single
/// `<link rel="stylesheet" href="....css">` tag is replaced with the resolved
/// CSS. When the root stylesheet does not exist the document is returned
/// unchanged and the link tag stays in place.
pub fn inline_stylesheet(
  html: &str,
  context: &BuildContext<'_>,
  diagnostics: &mut Diagnostics,
) -> Result<String> {
  let css_path = context.stylesheet_path();
  if !css_path.exists() {
    diagnostics.warn(format!(
      "Stylesheet not found, leaving link in place: {}",
      css_path.display()
    ));
    return Ok(html.to_string());
  }

  let css = fs::read_to_string(&css_path)
    .with_context(|| format!("failed to read stylesheet at {}", css_path.display()))?;
  let base_dir = css_path.parent().unwrap_or(context.project_dir);
  let resolved = resolve_imports(&css, base_dir, diagnostics);

  let link_pattern = Regex::new(r#"<link\s+rel=["']stylesheet["']\s+href=["'][^"']+\.css["']\s*/?>"#)
    .expect("invalid stylesheet link regex");
  let style_block = format!("<style>\n{resolved}\n</style>");

  // NoExpand keeps `$` sequences in the CSS from being treated as group refs.
  Ok(
    link_pattern
      .replace_all(html, NoExpand(&style_block))
      .into_owned(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::project::ProjectLayout;
  use tempfile::tempdir;

  #[test]
  fn inlines_existing_import() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("base.css"), "body { margin: 0; }").unwrap();

    let mut diagnostics = Diagnostics::default();
    let resolved = resolve_imports(
      "@import 'base.css';\nh1 { color: red; }",
      dir.path(),
      &mut diagnostics,
    );

    assert!(resolved.contains("body { margin: 0; }"));
    assert!(!resolved.contains("@import 'base.css';"));
    assert!(diagnostics.is_empty());
  }

  #[test]
  fn resolves_relative_component_imports() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("components")).unwrap();
    fs::create_dir_all(dir.path().join("css")).unwrap();
    fs::write(
      dir.path().join("components/cards.css"),
      ".card { padding: 1rem; }",
    )
    .unwrap();

    let mut diagnostics = Diagnostics::default();
    let resolved = resolve_imports(
      "@import '../components/cards.css';",
      &dir.path().join("css"),
      &mut diagnostics,
    );

    assert_eq!(resolved, ".card { padding: 1rem; }");
  }

  #[test]
  fn preserves_missing_import_with_warning() {
    let dir = tempdir().unwrap();
    let mut diagnostics = Diagnostics::default();
    let input = "@import 'gone.css';";

    let resolved = resolve_imports(input, dir.path(), &mut diagnostics);
    assert_eq!(resolved, input);
    assert_eq!(diagnostics.warnings(), ["CSS import not found: gone.css"]);
  }

  #[test]
  fn ignores_other_import_syntaxes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("base.css"), "ignored").unwrap();

    let mut diagnostics = Diagnostics::default();
    let input = "@import \"base.css\";\n@import url(base.css);";
    let resolved = resolve_imports(input, dir.path(), &mut diagnostics);

    assert_eq!(resolved, input);
    assert!(diagnostics.is_empty());
  }

  #[test]
  fn substitution_is_single_pass() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("outer.css"), "@import 'inner.css';").unwrap();
    fs::write(dir.path().join("inner.css"), ".inner {}").unwrap();

    let mut diagnostics = Diagnostics::default();
    let resolved = resolve_imports("@import 'outer.css';", dir.path(), &mut diagnostics);

    assert_eq!(resolved, "@import 'inner.css';");
  }

  fn context_layout() -> ProjectLayout {
    ProjectLayout::default()
  }

  #[test]
  fn replaces_link_tag_with_style_block() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("css")).unwrap();
    fs::write(dir.path().join("css/style.css"), "body { margin: 0; }").unwrap();

    let layout = context_layout();
    let context = BuildContext::new(dir.path(), &layout);
    let html = r#"<head><link rel="stylesheet" href="../css/style.css"></head>"#;
    let mut diagnostics = Diagnostics::default();

    let inlined = inline_stylesheet(html, &context, &mut diagnostics).unwrap();
    assert!(!inlined.contains("<link"));
    assert!(inlined.contains("<style>\nbody { margin: 0; }\n</style>"));
  }

  #[test]
  fn dollar_signs_in_css_are_copied_literally() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("css")).unwrap();
    fs::write(
      dir.path().join("css/style.css"),
      r#"a[href$=".pdf"] { color: blue; }"#,
    )
    .unwrap();

    let layout = context_layout();
    let context = BuildContext::new(dir.path(), &layout);
    let html = r#"<link rel="stylesheet" href="../css/style.css">"#;
    let mut diagnostics = Diagnostics::default();

    let inlined = inline_stylesheet(html, &context, &mut diagnostics).unwrap();
    assert!(inlined.contains(r#"a[href$=".pdf"]"#));
  }

  #[test]
  fn missing_stylesheet_leaves_document_unchanged() {
    let dir = tempdir().unwrap();
    let layout = context_layout();
    let context = BuildContext::new(dir.path(), &layout);
    let html = r#"<link rel="stylesheet" href="../css/style.css">"#;
    let mut diagnostics = Diagnostics::default();

    let inlined = inline_stylesheet(html, &context, &mut diagnostics).unwrap();
    assert_eq!(inlined, html);
    assert_eq!(diagnostics.warnings().len(), 1);
  }
}
