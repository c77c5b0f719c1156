use std::io::IsTerminal;

use anyhow::Context;
use colored::Colorize;
use lkdiff_diff::{diff_key_sets, flatten_document, Report};
use lkdiff_types::LocaleDocument;
use tracing::info;

use crate::cli::Cli;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    // Both files are loaded before anything is printed.
    let first = LocaleDocument::load(&cli.first)
        .with_context(|| format!("failed to load first locale file {}", cli.first.display()))?;
    let second = LocaleDocument::load(&cli.second)
        .with_context(|| format!("failed to load second locale file {}", cli.second.display()))?;

    let diff = diff_key_sets(&flatten_document(&first), &flatten_document(&second));
    info!(
        only_in_first = diff.only_in_first.len(),
        only_in_second = diff.only_in_second.len(),
        "comparison finished"
    );

    let report = Report::new(
        first.name().display().to_string(),
        second.name().display().to_string(),
        &diff,
    );
    print!("{}", report.render(|h| h.bold().to_string()));
    Ok(())
}
