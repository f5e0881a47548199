use anyhow::{Context, Result};
use std::path::PathBuf;

use super::input::read_items;
use crate::core::{BatchReporter, Config, ProcessorConfig, ProcessorStats};
use crate::processing::DataProcessor;
use crate::services::{load_config, ConsoleBatchReporter, DefaultProcessorConfig, NoOpBatchReporter};

/// Process an item file in batches and write the transformed items
pub fn execute_process(
    input: PathBuf,
    config: Option<PathBuf>,
    batch_size: Option<usize>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<ProcessorStats> {
    // Settings come from the config file first, then CLI overrides
    let config_map = match &config {
        Some(path) => load_config(path)?,
        None => Config::new(),
    };
    let mut settings = DefaultProcessorConfig::from_config(&config_map)?;
    if let Some(size) = batch_size {
        settings = settings.with_batch_size(size);
    }

    let reporter: Box<dyn BatchReporter> = if !settings.enable_progress_reporting() {
        Box::new(NoOpBatchReporter::new())
    } else if quiet {
        Box::new(ConsoleBatchReporter::quiet())
    } else {
        Box::new(ConsoleBatchReporter::new())
    };
    let mut processor = DataProcessor::from_config(&settings, reporter)?;

    let items = read_items(&input)?;
    tracing::debug!(
        input = %input.display(),
        items = items.len(),
        batch_size = processor.batch_size(),
        "入力を読み込みました"
    );

    let processed = processor.process_batch(&items)?;
    let json_output = serde_json::to_string_pretty(&processed)?;

    match &output {
        Some(path) => {
            std::fs::write(path, format!("{json_output}\n"))
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::info!(output = %path.display(), "結果を書き込みました");
        }
        None => println!("{json_output}"),
    }

    let stats = processor.get_stats();
    tracing::info!(
        processed_count = stats.processed_count,
        batch_size = stats.batch_size,
        emitted = processed.len(),
        dropped = stats.processed_count - processed.len(),
        "処理が完了しました"
    );

    Ok(stats)
}
