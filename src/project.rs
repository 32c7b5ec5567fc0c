//! Project layout description and the build context threaded through the crate.

use std::path::{Path, PathBuf};

/// Filesystem layout of a deck project, relative to its root directory.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
  /// Directory name the build outputs are written into.
  pub build_dir: String,
  /// File name of the deck manifest within the project directory.
  pub manifest_file: String,
  /// Relative path to the root stylesheet that the assembled document links.
  pub stylesheet_path: String,
}

impl Default for ProjectLayout {
  fn default() -> Self {
    Self {
      build_dir: "_build".into(),
      manifest_file: "manifest.json".into(),
      stylesheet_path: "css/style.css".into(),
    }
  }
}

impl ProjectLayout {
  /// Stylesheet `href` as seen from a document inside the build directory.
  pub fn stylesheet_href(&self) -> String {
    format!("../{}", self.stylesheet_path.trim_start_matches('/'))
  }
}

/// Borrowed context tying a [`ProjectLayout`] to a concrete project directory.
///
/// The project root is always passed explicitly rather than read from a
/// process-wide constant, so multiple projects can be built from one process.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
  /// Root directory of the deck project.
  pub project_dir: &'a Path,
  /// Layout describing where inputs and outputs live under the root.
  pub layout: &'a ProjectLayout,
}

impl<'a> BuildContext<'a> {
  /// Create a context for the provided project directory and layout.
  pub fn new(project_dir: &'a Path, layout: &'a ProjectLayout) -> Self {
    Self {
      project_dir,
      layout,
    }
  }

  /// Absolute path of the deck manifest.
  pub fn manifest_path(&self) -> PathBuf {
    self.project_dir.join(&self.layout.manifest_file)
  }

  /// Absolute path of the build output directory.
  pub fn build_dir(&self) -> PathBuf {
    self.project_dir.join(&self.layout.build_dir)
  }

  /// Absolute path of the root stylesheet.
  pub fn stylesheet_path(&self) -> PathBuf {
    self.project_dir.join(&self.layout.stylesheet_path)
  }
}
