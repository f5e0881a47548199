use anyhow::Result;
use std::path::PathBuf;

use crate::core::ProcessorConfig;
use crate::services::{load_config, DefaultProcessorConfig};

/// Load a configuration file and show the derived processor settings
pub fn execute_show_config(config: PathBuf) -> Result<DefaultProcessorConfig> {
    let config_map = load_config(&config)?;
    let settings = DefaultProcessorConfig::from_config(&config_map)?;

    println!("⚙️  設定ファイル: {}", config.display());
    println!("{}", serde_json::to_string_pretty(&config_map)?);
    println!("📋 処理設定:");
    println!("   - バッチサイズ: {}", settings.batch_size());
    println!("   - 進捗報告: {}", settings.enable_progress_reporting());

    Ok(settings)
}
