use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Interactive student record keeper", long_about = None)]
pub struct Cli {
    /// Read settings from this TOML file instead of the default location
    #[arg(short, long, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Start with an empty roster
    #[arg(long, help_heading = "Options")]
    pub no_seed: bool,

    /// Disable colored output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Print a commented sample config file and exit
    #[arg(long, help_heading = "Options")]
    pub print_config: bool,
}
