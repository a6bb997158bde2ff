use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::config::Paths;
use crate::model::{DecisionTree, FaqCatalog};

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}

/// Indented JSON, non-ASCII kept as-is.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize both artifacts first, then write; nothing is written if
/// serialization fails.
pub fn write_artifacts(paths: &Paths, catalog: &FaqCatalog, tree: &DecisionTree) -> Result<()> {
    let faqs_json = to_json(catalog).context("Failed to serialize FAQ catalog")?;
    let tree_json = to_json(tree).context("Failed to serialize decision tree")?;

    fs::write(&paths.faqs_out, faqs_json)
        .with_context(|| format!("Failed to write {:?}", paths.faqs_out))?;
    info!("Wrote {:?}", paths.faqs_out);
    fs::write(&paths.tree_out, tree_json)
        .with_context(|| format!("Failed to write {:?}", paths.tree_out))?;
    info!("Wrote {:?}", paths.tree_out);
    Ok(())
}

pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {:?}", path))
}
