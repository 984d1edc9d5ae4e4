use std::path::PathBuf;

use clap::Parser;
use egsa_engine::{Analyzer, Settings};

use crate::{prelude::*, readings::read_batch};

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// JSON files, each an object of utility type to `{usage, outdoor_temp, hour, benchmark}`.
    #[clap(required = true)]
    readings: Vec<PathBuf>,
}

impl AnalyzeArgs {
    #[instrument(skip_all)]
    pub fn run(self, settings: &Settings) -> Result {
        let mut analyzer = Analyzer::try_new(settings)?;
        for path in &self.readings {
            let record = analyzer
                .analyze(read_batch(path)?)
                .with_context(|| format!("failed to analyze `{}`", path.display()))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Ok(())
    }
}
