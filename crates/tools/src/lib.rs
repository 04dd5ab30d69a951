//! Command-line collaborators around the generator: config loading, rendering and seeds.

pub mod config_file;
pub mod render;
pub mod seed;
