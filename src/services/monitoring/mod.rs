// 進捗監視機能
// スライス単位の進捗報告、失敗通知、完了通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleBatchReporter, NoOpBatchReporter};
