use std::{fs, path::PathBuf};

use clap::Parser;
use egsa_engine::Settings;

use crate::prelude::*;

#[derive(Parser)]
pub struct SettingsArgs {
    /// TOML file with the rates and calculator parameters, built-in defaults otherwise.
    #[clap(long = "settings", env = "EGSA_SETTINGS")]
    path: Option<PathBuf>,
}

impl SettingsArgs {
    pub fn load(&self) -> Result<Settings> {
        let Some(path) = &self.path else {
            info!("using the default settings");
            return Ok(Settings::default());
        };
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let settings = parse(&contents)
            .with_context(|| format!("invalid settings in `{}`", path.display()))?;
        info!(path = %path.display(), "loaded the settings");
        Ok(settings)
    }
}

fn parse(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents)?;
    settings.validate()?;
    Ok(settings)
}
