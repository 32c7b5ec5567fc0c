//! Data structures describing a deck project and its build outputs.

use serde::Deserialize;

/// Deserialised representation of a deck manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
  /// Project metadata rendered into the document head.
  pub project: ProjectMeta,
  /// Output file names for the build.
  pub build_config: BuildConfig,
  /// Ordered, enable-flagged list of section fragments.
  #[serde(default)]
  pub sections: Vec<SectionRecord>,
}

/// Project metadata taken from the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectMeta {
  /// Deck title rendered into the `<title>` element.
  pub title: String,
  /// Language attribute for the `<html>` element.
  #[serde(default = "default_lang")]
  pub lang: String,
}

/// Output file names for the two build variants.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
  /// File name of the assembled document within the build directory.
  pub output_filename: String,
  /// File name of the standalone document within the build directory.
  pub standalone_filename: String,
}

/// One section fragment entry from the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionRecord {
  /// Fragment path relative to the project directory.
  pub file: String,
  /// Sort key for the section; values need not be contiguous.
  pub order: i64,
  /// Whether the section participates in the build. Absent means enabled.
  #[serde(default = "default_enabled")]
  pub enabled: bool,
}

fn default_lang() -> String {
  "en".into()
}

fn default_enabled() -> bool {
  true
}

/// Collected non-fatal warnings produced over a build run.
///
/// Per-item failures (a missing fragment, an unreadable asset) are recorded
/// here and never abort the run; the CLI reports them after the build.
#[derive(Debug, Default)]
pub struct Diagnostics {
  warnings: Vec<String>,
}

impl Diagnostics {
  /// Record a warning for a single skipped item.
  pub fn warn(&mut self, message: impl Into<String>) {
    self.warnings.push(message.into());
  }

  /// All warnings recorded so far, in emission order.
  pub fn warnings(&self) -> &[String] {
    &self.warnings
  }

  /// Returns `true` when no warnings were recorded.
  pub fn is_empty(&self) -> bool {
    self.warnings.is_empty()
  }

  /// Consume the collection, yielding the recorded warnings.
  pub fn into_warnings(self) -> Vec<String> {
    self.warnings
  }
}
