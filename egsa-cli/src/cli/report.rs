use std::path::PathBuf;

use chrono::{Local, TimeDelta};
use clap::Parser;
use egsa_engine::{Analyzer, Settings};

use crate::{prelude::*, readings::read_batch};

#[derive(Parser)]
pub struct ReportArgs {
    /// JSON readings files, analyzed in the given order.
    #[clap(required = true)]
    readings: Vec<PathBuf>,

    /// Report period ending now.
    #[clap(long, env = "EGSA_REPORT_PERIOD", default_value = "30d")]
    period: humantime::Duration,
}

impl ReportArgs {
    #[instrument(skip_all)]
    pub fn run(self, settings: &Settings) -> Result {
        let mut analyzer = Analyzer::try_new(settings)?;
        for path in &self.readings {
            analyzer
                .analyze(read_batch(path)?)
                .with_context(|| format!("failed to analyze `{}`", path.display()))?;
        }
        let end = Local::now();
        let period = TimeDelta::from_std(self.period.into()).context("the period is too long")?;
        let start = end - period;
        let report = analyzer.summarize(start, end);
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
