//! Build orchestrator tying manifest loading, assembly and standalone export together.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::assemble::assemble_document;
use crate::bundle::site::inline_src_references;
use crate::bundle::styles::inline_stylesheet;
use crate::manifest::load_manifest;
use crate::models::Diagnostics;
use crate::project::BuildContext;

/// Summary of a completed build run.
#[derive(Debug)]
pub struct BuildReport {
  /// Deck title taken from the manifest.
  pub title: String,
  /// Path of the assembled document within the build directory.
  pub assembled_path: PathBuf,
  /// Path of the primary output document. When a standalone document was
  /// produced it becomes the primary output.
  pub output_path: PathBuf,
  /// Number of section fragments included in the assembled document.
  pub sections_included: usize,
  /// Present when the standalone variant was requested and written.
  pub standalone: Option<StandaloneReport>,
  /// Non-fatal warnings collected while building.
  pub warnings: Vec<String>,
}

/// Details of the standalone export step.
#[derive(Debug)]
pub struct StandaloneReport {
  /// Path of the standalone document within the build directory.
  pub output_path: PathBuf,
  /// Number of `src` references successfully embedded as data URIs.
  pub images_encoded: usize,
  /// Size of the standalone document in bytes.
  pub size_bytes: u64,
}

/// High-level helper that runs a full deck build for one project directory.
pub struct DeckBuilder<'a> {
  context: BuildContext<'a>,
}

impl<'a> DeckBuilder<'a> {
  /// Create a builder for the provided build context.
  pub fn new(context: BuildContext<'a>) -> Self {
    Self { context }
  }

  /// Assemble the deck and write it into the build directory, optionally
  /// producing the standalone variant as well.
  ///
  /// Only a missing or malformed manifest, an unreadable existing fragment or
  /// a failed output write abort the run; per-item problems end up as
  /// warnings on the returned [`BuildReport`].
  pub fn build(&self, standalone: bool) -> Result<BuildReport> {
    let manifest = load_manifest(&self.context.manifest_path())?;
    let mut diagnostics = Diagnostics::default();

    let document = assemble_document(&manifest, &self.context, &mut diagnostics)?;

    let build_dir = self.context.build_dir();
    fs::create_dir_all(&build_dir)
      .with_context(|| format!("failed to create {}", build_dir.display()))?;

    let output_path = build_dir.join(&manifest.build_config.output_filename);
    fs::write(&output_path, &document.html)
      .with_context(|| format!("failed to write {}", output_path.display()))?;

    let standalone_report = if standalone {
      let inlined = inline_stylesheet(&document.html, &self.context, &mut diagnostics)?;
      let (embedded, images_encoded) =
        inline_src_references(&inlined, &build_dir, &mut diagnostics);

      let standalone_path = build_dir.join(&manifest.build_config.standalone_filename);
      fs::write(&standalone_path, &embedded)
        .with_context(|| format!("failed to write {}", standalone_path.display()))?;
      let size_bytes = fs::metadata(&standalone_path)
        .with_context(|| format!("failed to stat {}", standalone_path.display()))?
        .len();

      Some(StandaloneReport {
        output_path: standalone_path,
        images_encoded,
        size_bytes,
      })
    } else {
      None
    };

    let primary_path = standalone_report
      .as_ref()
      .map(|report| report.output_path.clone())
      .unwrap_or_else(|| output_path.clone());

    Ok(BuildReport {
      title: manifest.project.title,
      assembled_path: output_path,
      output_path: primary_path,
      sections_included: document.sections_included,
      standalone: standalone_report,
      warnings: diagnostics.into_warnings(),
    })
  }
}
