// データ処理の抽象化トレイト定義
//
// 具象実装は services 層に置き、処理本体はこのトレイト経由でのみ参照する

use mockall::automock;

/// バッチ処理の設定を抽象化するトレイト
#[automock]
pub trait ProcessorConfig {
    /// 1スライスあたりのアイテム数を取得
    fn batch_size(&self) -> usize;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

/// バッチ処理の進捗報告を抽象化するトレイト
#[automock]
pub trait BatchReporter {
    /// 処理開始時の報告
    fn report_started(&self, total_items: usize);

    /// スライス1件の処理完了を報告（`accepted`は検証を通過した件数）
    fn report_batch(&self, batch_index: usize, batch_len: usize, accepted: usize);

    /// スライスの処理失敗を報告
    fn report_failed(&self, batch_index: usize, error: &str);

    /// 処理完了時の報告
    fn report_completed(&self, processed_count: usize, emitted: usize);
}

impl<R: BatchReporter + ?Sized> BatchReporter for Box<R> {
    fn report_started(&self, total_items: usize) {
        self.as_ref().report_started(total_items)
    }

    fn report_batch(&self, batch_index: usize, batch_len: usize, accepted: usize) {
        self.as_ref().report_batch(batch_index, batch_len, accepted)
    }

    fn report_failed(&self, batch_index: usize, error: &str) {
        self.as_ref().report_failed(batch_index, error)
    }

    fn report_completed(&self, processed_count: usize, emitted: usize) {
        self.as_ref().report_completed(processed_count, emitted)
    }
}
