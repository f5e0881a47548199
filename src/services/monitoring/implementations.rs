// 進捗監視の具象実装

use crate::core::BatchReporter;

/// tracing経由でコンソールに進捗を出力する実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleBatchReporter {
    quiet: bool,
}

impl ConsoleBatchReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 失敗だけを出力するモード
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl BatchReporter for ConsoleBatchReporter {
    fn report_started(&self, total_items: usize) {
        if !self.quiet {
            tracing::info!(total_items, "バッチ処理を開始します");
        }
    }

    fn report_batch(&self, batch_index: usize, batch_len: usize, accepted: usize) {
        if !self.quiet {
            tracing::info!(
                batch_index,
                batch_len,
                accepted,
                dropped = batch_len - accepted,
                "スライスを処理しました"
            );
        }
    }

    fn report_failed(&self, batch_index: usize, error: &str) {
        tracing::warn!(batch_index, error, "スライスの処理に失敗しました");
    }

    fn report_completed(&self, processed_count: usize, emitted: usize) {
        if !self.quiet {
            tracing::info!(processed_count, emitted, "バッチ処理が完了しました");
        }
    }
}

/// 何もしない進捗報告実装（ライブラリ利用時の既定値）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpBatchReporter;

impl NoOpBatchReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BatchReporter for NoOpBatchReporter {
    fn report_started(&self, _total_items: usize) {
        // 何もしない
    }

    fn report_batch(&self, _batch_index: usize, _batch_len: usize, _accepted: usize) {
        // 何もしない
    }

    fn report_failed(&self, _batch_index: usize, _error: &str) {
        // 何もしない
    }

    fn report_completed(&self, _processed_count: usize, _emitted: usize) {
        // 何もしない
    }
}
