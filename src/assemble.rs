//! Concatenate enabled section fragments into a single HTML document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::manifest::active_sections;
use crate::models::{Diagnostics, Manifest};
use crate::project::BuildContext;

/// Closing markup plus the scroll-reveal and lazy-video bootstrap script.
///
/// The script is carried as an opaque static string; the builder never
/// inspects or rewrites it.
const HTML_FOOTER: &str = r#"    </div>
    <script>
    document.addEventListener('DOMContentLoaded', () => {
        // Auto-apply reveal classes
        document.querySelectorAll('.section-header').forEach(el => el.classList.add('reveal'));
        document.querySelectorAll('.content-area').forEach(el => el.classList.add('reveal'));
        document.querySelectorAll('.curriculum-grid, .curriculum-intro-grid, .roadmap-row, .compare-grid, .image-row-3, .image-row-2').forEach(el => {
            el.classList.add('reveal-children');
        });

        // IntersectionObserver for scroll reveal
        const observer = new IntersectionObserver((entries) => {
            entries.forEach(entry => {
                if (entry.isIntersecting) {
                    entry.target.classList.add('visible');
                }
            });
        }, { threshold: 0.15, rootMargin: '0px 0px -50px 0px' });

        document.querySelectorAll('.reveal, .reveal-children').forEach(el => observer.observe(el));

        // Video: lazy load + play on scroll, pause when out
        const videoObserver = new IntersectionObserver((entries) => {
            entries.forEach(entry => {
                const video = entry.target;
                if (entry.isIntersecting) {
                    if (video.readyState < 2) {
                        video.load();
                        video.addEventListener('canplay', () => video.play().catch(() => {}), { once: true });
                    } else {
                        video.play().catch(() => {});
                    }
                } else {
                    video.pause();
                    video.currentTime = 0;
                }
            });
        }, { threshold: 0.3 });

        document.querySelectorAll('video.demo-video').forEach(v => videoObserver.observe(v));
    });
    </script>
</body>
</html>"#;

/// An assembled document together with the number of sections it contains.
#[derive(Debug)]
pub struct AssembledDocument {
  /// Full HTML text of the assembled deck.
  pub html: String,
  /// Number of section fragments concatenated into the document.
  pub sections_included: usize,
}

fn html_head(title: &str, lang: &str, stylesheet_href: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet_href}">
</head>
<body>
    <div class="presentation-container">
"#
  )
}

/// Assemble the deck document from the manifest's enabled sections.
///
/// Fragments are concatenated in ascending `order` between the fixed head and
/// footer templates, each part separated by a single newline. A section file
/// that does not exist is skipped with a diagnostic; a file that exists but
/// cannot be read aborts the build.
pub fn assemble_document(
  manifest: &Manifest,
  context: &BuildContext<'_>,
  diagnostics: &mut Diagnostics,
) -> Result<AssembledDocument> {
  let mut parts = vec![html_head(
    &manifest.project.title,
    &manifest.project.lang,
    &context.layout.stylesheet_href(),
  )];
  let mut sections_included = 0;

  for section in active_sections(manifest) {
    let section_path = context.project_dir.join(&section.file);
    if !section_path.exists() {
      diagnostics.warn(format!("Section file not found: {}", section.file));
      continue;
    }

    let fragment = fs::read_to_string(&section_path)
      .with_context(|| format!("failed to read section {}", section_path.display()))?;
    parts.push(fragment);
    sections_included += 1;
  }

  parts.push(HTML_FOOTER.to_string());

  Ok(AssembledDocument {
    html: parts.join("\n"),
    sections_included,
  })
}
