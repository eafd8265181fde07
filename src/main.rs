use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::cli::handlers;
use tasklist::io::config_io;

fn main() {
    if let Some(path) = tasklist::logging::init() {
        tracing::info!(log = %path.display(), "logging enabled");
    }

    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let config = match config_io::load_config(cli.config.as_deref()) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = tasklist::tui::run(config, &cli.tasks) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(command) => {
            if let Err(e) = handlers::dispatch(command) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
