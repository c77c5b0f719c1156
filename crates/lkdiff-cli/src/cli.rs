use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lkdiff",
    about = "List translation keys present in only one of two JSON locale files",
    version,
)]
pub struct Cli {
    /// Reference locale file (e.g. en.json)
    #[arg(env = "LKDIFF_FIRST")]
    pub first: PathBuf,

    /// Locale file to compare against the reference (e.g. ar.json)
    #[arg(env = "LKDIFF_SECOND")]
    pub second: PathBuf,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
