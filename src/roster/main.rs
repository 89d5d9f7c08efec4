//! `roster` binary: an interactive menu over the roster library.
//!
//! All the work happens in [`cli::run`]; this only maps failures to an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
