use clap::Parser;
use glyphmap::cli::{self, Args, Command};
use glyphmap::config::Config;
use glyphmap::minimap;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match &args.command {
        Some(Command::Symbols { family, shape }) => {
            cli::list_symbols(*family, shape.as_deref());
            return;
        }
        Some(Command::Config { action }) => {
            cli::handle_config_action(action.clone(), args.config.as_deref());
            return;
        }
        None => {}
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let options = match cli::resolve_options(&args, &config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let lines = match cli::read_lines(args.file.as_deref()) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    let rows = match minimap::encode(&lines, &options) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("encoded {} lines into {} rows", lines.len(), rows.len());

    match cli::render_output(&rows, args.format) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
