//! Command line entry point for building a deck project.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use deck_bundler::builder::DeckBuilder;
use deck_bundler::config::ProjectConfig;
use deck_bundler::project::BuildContext;

/// Assemble a slide-deck HTML document from a manifest of section fragments.
#[derive(Debug, Parser)]
#[command(name = "deck_bundler", version, about)]
struct Cli {
  /// Project directory containing the manifest.
  #[arg(default_value = ".")]
  project_dir: PathBuf,

  /// Also build the standalone variant with embedded CSS and images.
  #[arg(long)]
  standalone: bool,
}

fn file_name(path: &Path) -> String {
  path
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_else(|| path.display().to_string())
}

fn run(cli: &Cli) -> Result<()> {
  let layout = ProjectConfig::discover(&cli.project_dir).into_layout();
  let context = BuildContext::new(&cli.project_dir, &layout);
  let report = DeckBuilder::new(context).build(cli.standalone)?;

  println!("Building: {}", report.title);
  println!("{}", "-".repeat(50));
  println!(
    "  Assembled: {} ({} sections)",
    file_name(&report.assembled_path),
    report.sections_included
  );

  for warning in &report.warnings {
    println!("  Warning: {warning}");
  }

  if let Some(standalone) = &report.standalone {
    println!("  Standalone: {}", file_name(&standalone.output_path));
    println!("  Images encoded: {}", standalone.images_encoded);
    println!("  Size: {:.1} KB", standalone.size_bytes as f64 / 1024.0);
  }

  println!("{}", "-".repeat(50));
  println!("[SUCCESS] Build complete!");
  println!("  Output: {}", report.output_path.display());
  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("Error: {err:#}");
      ExitCode::FAILURE
    }
  }
}
