mod analyze;
mod report;
mod settings;

use clap::{Parser, Subcommand};

use crate::{
    cli::{analyze::AnalyzeArgs, report::ReportArgs, settings::SettingsArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    settings: SettingsArgs,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        let settings = self.settings.load()?;
        match self.command {
            Command::Analyze(args) => args.run(&settings),
            Command::Report(args) => args.run(&settings),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Analyze each readings file and print the analysis records.
    #[clap(name = "analyze")]
    Analyze(AnalyzeArgs),

    /// Analyze the readings files and print the report over the recent period.
    #[clap(name = "report")]
    Report(ReportArgs),
}
