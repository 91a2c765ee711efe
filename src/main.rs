mod accumulate;
mod assets;
mod cli;
mod config;
mod ending;
mod logging;
mod model;
mod router;
mod session;
mod story;
mod tui;

use std::process;

use config::Config;

fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
