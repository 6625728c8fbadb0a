use std::path::PathBuf;

use clap::Parser;

/// Parsed command line.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "sfm", version)]
#[command(about = "Line-oriented file manager", long_about = None)]
pub struct CliArgs {
    /// Directory to open at startup (overrides general.start_dir)
    pub start_dir: Option<PathBuf>,

    /// Read settings from PATH instead of the default config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
