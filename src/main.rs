use log::critical;
use log::logger::ConsoleLogger;

mod cli;
mod conf;
mod filters;
mod scope;

fn main() {
    if let Err(e) = ConsoleLogger::init(log::LogLevel::default()) {
        eprintln!("Failed to initialize logger: {e}");
    }

    if let Err(e) = cli::run() {
        critical!("{e:#}");
        std::process::exit(1);
    }
}
