// サービス層 - 機能別の具象実装
// 各サービスは core のトレイトを実装し、処理本体とは疎結合に保つ

pub mod config;
pub mod monitoring;

// 公開API
pub use config::{load_config, DefaultProcessorConfig};
pub use monitoring::{ConsoleBatchReporter, NoOpBatchReporter};
