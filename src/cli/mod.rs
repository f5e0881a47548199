// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとライブラリ処理の橋渡し

pub mod args;
pub mod commands;
pub mod report;

// 公開API
pub use args::*;
pub use commands::*;
pub use report::{describe_failure, report_failure, FailureSummary};
