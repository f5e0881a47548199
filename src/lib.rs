//! JSONアイテムのバッチ変換ユーティリティ
//!
//! `id`と`value`を持つアイテムを検証し、`value`を2倍して`processed`フラグを付与する。
//! 固定サイズのスライスに分けて処理する [`DataProcessor`] と、JSON設定ファイルを読み込む
//! [`load_config`] を提供する。
//!
//! ```
//! use data_processor::{DataProcessor, Item};
//! use serde_json::json;
//!
//! let items: Vec<Item> = serde_json::from_value(json!([
//!     {"id": 1, "value": 5},
//!     {"id": 2},
//!     {"id": 3, "value": 10}
//! ]))
//! .unwrap();
//!
//! let mut processor = DataProcessor::new(2).unwrap();
//! let output = processor.process_batch(&items).unwrap();
//!
//! assert_eq!(output.len(), 2);
//! assert_eq!(output[0]["value"], json!(10));
//! assert_eq!(processor.get_stats().processed_count, 3);
//! ```

pub mod cli;
pub mod core;
pub mod processing;
pub mod services;

pub use crate::core::{
    BatchReporter, Config, Item, ProcessingError, ProcessingResult, ProcessorConfig,
    ProcessorStats,
};
pub use processing::{process_data, transform_item, validate_item, DataProcessor};
pub use services::{load_config, ConsoleBatchReporter, DefaultProcessorConfig, NoOpBatchReporter};

/// バッチサイズの既定値
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// 再試行回数の上限
///
/// 宣言のみで、現在どの処理からも参照されていない。設定読み込みは失敗時に再試行しない。
pub const MAX_RETRIES: u32 = 3;
