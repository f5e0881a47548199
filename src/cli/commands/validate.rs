use anyhow::Result;
use std::path::PathBuf;

use super::input::read_items;
use crate::processing::validate_item;

/// Result of checking an item file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Count valid and invalid items without transforming them
pub fn execute_validate(input: PathBuf) -> Result<ValidationReport> {
    println!("🔍 アイテム検証");
    println!("📄 入力ファイル: {}", input.display());

    let items = read_items(&input)?;
    let valid = items.iter().filter(|item| validate_item(item)).count();
    let report = ValidationReport {
        total: items.len(),
        valid,
        invalid: items.len() - valid,
    };

    println!("📊 検証結果:");
    println!("   - アイテム総数: {}", report.total);
    println!("   - 有効: {}", report.valid);
    println!("   - 無効 (id または value が欠落): {}", report.invalid);

    Ok(report)
}
