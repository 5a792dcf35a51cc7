use std::path::PathBuf;

use clap::Parser;

/// recipients - fit a list of recipients into one terminal line ✉️
#[derive(Parser, Debug)]
#[command(name = "recipients", version, about)]
pub struct Args {
    /// Recipients to display, in order
    pub recipients: Vec<String>,

    /// Read recipients from a file (one per line, or a JSON array). Use "-" for stdin
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Print the fitted line for --width and exit instead of starting the UI
    #[arg(long, requires = "width")]
    pub print: bool,

    /// Width of the recipient row in cells for --print, badge column included
    #[arg(long, short = 'w')]
    pub width: Option<u16>,

    /// Log level filter (overrides config.toml, RUST_LOG still wins)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
