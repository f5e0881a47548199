use anyhow::{Context, Result};
use std::path::Path;

use crate::core::Item;

/// Read a JSON array of item objects from disk
pub fn read_items(input: &Path) -> Result<Vec<Item>> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let json_content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let items: Vec<Item> = serde_json::from_str(&json_content).with_context(|| {
        format!(
            "Input must be a JSON array of objects: {}",
            input.display()
        )
    })?;

    Ok(items)
}
