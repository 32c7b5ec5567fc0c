//! Project configuration loader for overriding the default deck layout.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::project::ProjectLayout;

const DEFAULT_CONFIG_FILE: &str = "deck.config.json";

/// Discoverable project configuration describing filesystem layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Directory name the build outputs are written into.
  pub build_dir: String,
  /// File name of the deck manifest within the project directory.
  pub manifest_file: String,
  /// Relative path to the root stylesheet linked by assembled documents.
  pub stylesheet_path: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      build_dir: "_build".into(),
      manifest_file: "manifest.json".into(),
      stylesheet_path: "css/style.css".into(),
    }
  }
}

impl ProjectConfig {
  /// Attempt to load configuration from the provided project directory.
  ///
  /// A missing or unparsable config file yields the default layout, so most
  /// projects never need a `deck.config.json` at all.
  pub fn discover(project_dir: &Path) -> Self {
    let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Convert the configuration into an owned layout description.
  pub fn into_layout(self) -> ProjectLayout {
    ProjectLayout {
      build_dir: self.build_dir,
      manifest_file: self.manifest_file,
      stylesheet_path: self.stylesheet_path,
    }
  }
}
