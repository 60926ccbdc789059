//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Family, OutputFormat};

/// Render a text file as a compact block-glyph minimap
#[derive(Parser, Debug)]
#[command(name = "glyphmap")]
#[command(version, about = "Text overview renderer for narrow side panels", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to encode (stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Maximum number of output rows
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Maximum number of glyphs per output row
    #[arg(short = 'w', long)]
    pub cols: Option<usize>,

    /// Glyph family
    #[arg(long)]
    pub family: Option<Family>,

    /// Block shape as ROWSxCOLS (e.g. 3x2)
    #[arg(long)]
    pub shape: Option<String>,

    /// Blank cells per tab character
    #[arg(long)]
    pub tab_width: Option<usize>,

    /// Keep trailing blank glyphs
    #[arg(long)]
    pub no_trim: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in symbol tables, or print one table
    Symbols {
        /// Family of the table to print
        #[arg(long, requires = "shape")]
        family: Option<Family>,
        /// Shape of the table to print
        #[arg(long, requires = "family")]
        shape: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
