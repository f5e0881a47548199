// コマンド失敗時のエラー報告

use crate::core::{ErrorContext, ErrorSeverity, ProcessingError};

/// コマンド失敗の分類結果
#[derive(Debug, Clone)]
pub struct FailureSummary {
    pub severity: ErrorSeverity,
    pub recoverable: bool,
    pub context: ErrorContext,
}

/// エラーチェーンから最初の [`ProcessingError`] を探して分類する
///
/// ライブラリ由来でないエラー（入力ファイルの読み込み失敗など）は`None`。
pub fn describe_failure(error: &anyhow::Error) -> Option<FailureSummary> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ProcessingError>())
        .map(|processing_error| FailureSummary {
            severity: processing_error.severity(),
            recoverable: processing_error.is_recoverable(),
            context: processing_error.context(),
        })
}

/// コマンドの失敗をログに出す
pub fn report_failure(error: &anyhow::Error) {
    match describe_failure(error) {
        Some(summary) => tracing::error!(
            severity = summary.severity.as_str(),
            severity_level = summary.severity.as_level(),
            recoverable = summary.recoverable,
            operation = %summary.context.operation,
            resource = ?summary.context.resource,
            suggestion = ?summary.context.suggestion,
            "コマンドが失敗しました: {error:#}"
        ),
        None => tracing::error!("コマンドが失敗しました: {error:#}"),
    }
}
