use std::{collections::BTreeMap, fs, path::Path};

use egsa_engine::RawSample;

use crate::prelude::*;

/// One analysis batch: utility type identifier to its reading.
pub type Batch = BTreeMap<String, RawSample>;

#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_batch(path: &Path) -> Result<Batch> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    let batch: Batch = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse `{}`", path.display()))?;
    debug!(n_utilities = batch.len(), "read the batch");
    Ok(batch)
}
