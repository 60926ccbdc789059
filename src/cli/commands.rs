//! Subcommand handlers and helpers for the encode, symbols and config actions.

use std::io::Read;
use std::path::Path;

use super::args::{Args, ConfigAction};
use super::enums::{Family, OutputFormat};
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};
use crate::minimap::{self, BlockShape, EncodeError, EncodingOptions, SymbolFamily};

/// Merge command-line overrides into the loaded config and validate.
pub fn resolve_options(args: &Args, config: &Config) -> Result<EncodingOptions, EncodeError> {
    let mut config = config.clone();

    if let Some(family) = args.family {
        config.symbols.family = SymbolFamily::from(family).name().to_string();
        config.symbols.glyphs = None;
    }
    if let Some(shape) = &args.shape {
        config.symbols.shape = shape.clone();
        config.symbols.glyphs = None;
    }
    if args.rows.is_some() {
        config.encode.rows = args.rows;
    }
    if args.cols.is_some() {
        config.encode.cols = args.cols;
    }
    if let Some(tab_width) = args.tab_width {
        config.encode.tab_width = tab_width;
    }
    if args.no_trim {
        config.encode.trim = false;
    }

    config.encoding_options()
}

/// Read the input lines from `path`, or stdin when no path (or "-") is given.
///
/// Invalid UTF-8 is replaced with U+FFFD, which counts as ink.
pub fn read_lines(path: Option<&Path>) -> std::io::Result<Vec<String>> {
    let bytes = match path {
        Some(p) if p != Path::new("-") => std::fs::read(p)?,
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(split_lines(&bytes))
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Format encoded rows for stdout.
pub fn render_output(rows: &[String], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(rows.join("\n")),
        OutputFormat::Json => serde_json::to_string(rows),
    }
}

/// Print the registry catalog, or every glyph of one table.
pub fn list_symbols(family: Option<Family>, shape: Option<&str>) {
    let (family, shape) = match (family, shape) {
        (Some(f), Some(s)) => (SymbolFamily::from(f), s),
        _ => {
            println!("Built-in symbol tables:");
            for &(family, shape) in minimap::symbols::catalog() {
                let table = match minimap::symbols::get(family, shape) {
                    Ok(t) => t,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                };
                println!(
                    "  {:<6} {}  {} .. {}",
                    family.name(),
                    shape,
                    table.blank(),
                    table.filled()
                );
            }
            println!();
            println!("Use --family <family> --shape <shape> to print a table.");
            return;
        }
    };

    let table = match shape
        .parse::<BlockShape>()
        .and_then(|shape| minimap::symbols::get(family, shape))
    {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{} {} ({} glyphs):", family, table.shape(), table.len());
    for (index, glyph) in table.glyphs().iter().enumerate() {
        println!(
            "  {:>5}  {:0width$b}  {}",
            index,
            index,
            glyph,
            width = table.shape().bits()
        );
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = match Config::load(Some(config_path.as_path())) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            println!("Current configuration:");
            match toml::to_string_pretty(&config) {
                Ok(text) => println!("{}", text.trim_end()),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'glyphmap config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}
