#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod assemble;
pub mod builder;
pub mod bundle;
pub mod config;
pub mod manifest;
pub mod models;
pub mod project;

pub use builder::{BuildReport, DeckBuilder, StandaloneReport};
pub use models::{Diagnostics, Manifest, SectionRecord};
pub use project::{BuildContext, ProjectLayout};
