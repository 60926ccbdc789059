//! glyphmap library crate.
//!
//! Condenses text into a minimap of block glyphs. The encoding pipeline
//! lives in [`minimap`]; [`config`] and [`cli`] back the `glyphmap` binary.

pub mod cli;
pub mod config;
pub mod minimap;
