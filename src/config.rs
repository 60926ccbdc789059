//! Configuration file handling for glyphmap.
//!
//! Loads configuration from `<config dir>/glyphmap/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::minimap::{self, BlockShape, EncodeError, EncodingOptions, SymbolFamily, SymbolTable};

/// Configuration file structure for glyphmap.
/// Loaded from the user config dir (or custom path via --config).
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub encode: EncodeConfig,
    #[serde(default)]
    pub symbols: SymbolsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EncodeConfig {
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub cols: Option<usize>,
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    #[serde(default = "default_true")]
    pub trim: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            rows: None,
            cols: None,
            tab_width: default_tab_width(),
            trim: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SymbolsConfig {
    #[serde(default = "default_family")]
    pub family: String,
    #[serde(default = "default_shape")]
    pub shape: String,
    /// Custom glyph table, overrides `family` when present
    #[serde(default)]
    pub glyphs: Option<Vec<String>>,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            family: default_family(),
            shape: default_shape(),
            glyphs: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tab_width() -> usize {
    minimap::DEFAULT_TAB_WIDTH
}

fn default_family() -> String {
    SymbolFamily::default().name().to_string()
}

fn default_shape() -> String {
    SymbolTable::default().shape().to_string()
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            log::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            Self::parse(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve the configured symbol table.
    pub fn symbol_table(&self) -> Result<SymbolTable, EncodeError> {
        let shape: BlockShape = self.symbols.shape.parse()?;
        match &self.symbols.glyphs {
            Some(glyphs) => SymbolTable::new(shape, glyphs.clone()),
            None => {
                let family: SymbolFamily = self.symbols.family.parse()?;
                minimap::symbols::get(family, shape)
            }
        }
    }

    /// Convert to validated encoding options.
    pub fn encoding_options(&self) -> Result<EncodingOptions, EncodeError> {
        let options = EncodingOptions {
            n_rows: self.encode.rows,
            n_cols: self.encode.cols,
            symbols: self.symbol_table()?,
            trim_trailing_blank: self.encode.trim,
            tab_width: self.encode.tab_width,
        };
        options.validate()?;
        Ok(options)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("glyphmap").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/glyphmap/config.toml")
        })
}

/// Commented default configuration written by `glyphmap config init`.
pub const DEFAULT_CONFIG: &str = r#"# glyphmap configuration

[encode]
# Maximum number of output rows (omit for unbounded)
# rows = 40
# Maximum number of glyphs per row (omit for unbounded)
# cols = 10
# Blank cells per tab character
tab_width = 8
# Strip blank glyphs from the end of each row
trim = true

[symbols]
# Family: block, dot, shade
family = "block"
# Block shape as ROWSxCOLS. block: 1x2 2x1 2x2 3x2, dot: 3x2 4x2, shade: 1x2 2x1
shape = "3x2"
# Custom table (overrides family), 2^(rows*cols) glyphs, blank first
# glyphs = [" ", ".", "'", ":"]
"#;
