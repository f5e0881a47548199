// 設定管理機能
// JSON設定ファイルの読み込みと、処理設定への変換

pub mod implementations;
pub mod loader;

// 公開API
pub use implementations::{DefaultProcessorConfig, BATCH_SIZE_KEY, REPORT_PROGRESS_KEY};
pub use loader::load_config;
