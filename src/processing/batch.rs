// バッチ処理ドライバー
//
// 入力を固定サイズのスライスに分けて process_data を適用し、
// 処理したアイテム数を累計する

use std::num::NonZeroUsize;

use super::process_data;
use crate::core::{
    BatchReporter, Item, ProcessingError, ProcessingResult, ProcessorConfig, ProcessorStats,
};
use crate::services::NoOpBatchReporter;
use crate::DEFAULT_BATCH_SIZE;

const DEFAULT_NON_ZERO_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(DEFAULT_BATCH_SIZE) {
    Some(size) => size,
    None => panic!("DEFAULT_BATCH_SIZE must be non-zero"),
};

/// 状態を持つバッチ処理器
///
/// `processed_count`は`process_batch`でのみ増加し、リセットされない。
/// 更新には`&mut self`が必要なため、スレッド間で共有する場合は
/// 呼び出し側で`Mutex`などによる同期を行うこと。
#[derive(Debug)]
pub struct DataProcessor<R = NoOpBatchReporter> {
    batch_size: NonZeroUsize,
    processed_count: usize,
    reporter: R,
}

impl DataProcessor {
    /// 指定したバッチサイズで処理器を作成
    ///
    /// # Errors
    ///
    /// `batch_size`が0の場合は [`ProcessingError::ConfigurationError`]
    pub fn new(batch_size: usize) -> ProcessingResult<Self> {
        Self::with_reporter(batch_size, NoOpBatchReporter::new())
    }
}

impl Default for DataProcessor {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_NON_ZERO_BATCH_SIZE,
            processed_count: 0,
            reporter: NoOpBatchReporter::new(),
        }
    }
}

impl<R: BatchReporter> DataProcessor<R> {
    /// 進捗報告先を指定して処理器を作成
    pub fn with_reporter(batch_size: usize, reporter: R) -> ProcessingResult<Self> {
        let batch_size = NonZeroUsize::new(batch_size).ok_or_else(|| {
            ProcessingError::configuration("batch_sizeは1以上である必要があります")
        })?;

        Ok(Self {
            batch_size,
            processed_count: 0,
            reporter,
        })
    }

    /// 設定から処理器を作成
    pub fn from_config<C: ProcessorConfig + ?Sized>(
        config: &C,
        reporter: R,
    ) -> ProcessingResult<Self> {
        Self::with_reporter(config.batch_size(), reporter)
    }

    /// アイテム列をバッチサイズごとに処理し、結果を入力順に連結して返す
    ///
    /// 各スライスの処理後、`processed_count`をスライスの長さだけ増やす
    /// （検証を通過した件数ではない）。スライスの処理に失敗した場合はエラーを返し、
    /// それまでに完了したスライスの件数だけが累計に残る。
    pub fn process_batch(&mut self, items: &[Item]) -> ProcessingResult<Vec<Item>> {
        self.reporter.report_started(items.len());

        let mut results = Vec::with_capacity(items.len());
        for (batch_index, batch) in items.chunks(self.batch_size.get()).enumerate() {
            let processed = match process_data(batch) {
                Ok(processed) => processed,
                Err(error) => {
                    self.reporter.report_failed(batch_index, &error.to_string());
                    return Err(error);
                }
            };

            self.processed_count += batch.len();
            self.reporter
                .report_batch(batch_index, batch.len(), processed.len());
            results.extend(processed);
        }

        self.reporter
            .report_completed(self.processed_count, results.len());
        Ok(results)
    }

    /// 現在の統計を取得
    pub fn get_stats(&self) -> ProcessorStats {
        ProcessorStats {
            processed_count: self.processed_count,
            batch_size: self.batch_size.get(),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
