//! Helpers for turning an assembled document into a self-contained standalone bundle.

pub mod assets;
pub mod site;
pub mod styles;
