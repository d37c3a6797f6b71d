use crate::prelude::{eprintln, *};
use clap::Parser;
use colored::Colorize;

mod error;
mod extract;
mod prelude;
mod summary;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert an extracted course timetable into structured JSON",
    args_conflicts_with_subcommands = true
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    // Used when no subcommand is given.
    #[clap(flatten)]
    extract: crate::extract::ExtractOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TIMETABLE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Parse the timetable tables and write the course list as JSON (default)
    Extract(crate::extract::ExtractOptions),

    /// Print a summary of a previously written course list
    Summary(crate::summary::SummaryOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    let result = match app.command {
        Some(SubCommands::Extract(options)) => crate::extract::run(options, app.global),
        Some(SubCommands::Summary(options)) => crate::summary::run(options, app.global),
        None => crate::extract::run(app.extract, app.global),
    };

    // Failures are reported as a single line; nothing is re-raised.
    if let Err(err) = result {
        log::debug!("{err:?}");
        eprintln!("{} {}", "Error:".red().bold(), one_line(&err));
    }

    Ok(())
}

/// Render an error and its causes on one line.
fn one_line(err: &color_eyre::eyre::Report) -> String {
    err.chain()
        .map(|cause| cause.to_string().replace('\n', " "))
        .collect::<Vec<_>>()
        .join(": ")
}
