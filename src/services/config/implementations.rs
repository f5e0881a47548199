// 設定管理の具象実装

use serde_json::Value;

use crate::core::types::json_type_name;
use crate::core::{Config, ProcessingError, ProcessingResult, ProcessorConfig};
use crate::DEFAULT_BATCH_SIZE;

/// バッチサイズを指定する設定キー
pub const BATCH_SIZE_KEY: &str = "batch_size";
/// 進捗報告の有無を指定する設定キー
pub const REPORT_PROGRESS_KEY: &str = "report_progress";

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultProcessorConfig {
    batch_size: usize,
    enable_progress: bool,
}

impl DefaultProcessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }

    /// 読み込んだ設定マッピングから処理設定を組み立てる
    ///
    /// 認識するキーは`batch_size`と`report_progress`のみで、他のキーは無視する。
    /// キーが無い場合はデフォルト値のまま。
    pub fn from_config(config: &Config) -> ProcessingResult<Self> {
        let mut settings = Self::default();

        if let Some(value) = config.get(BATCH_SIZE_KEY) {
            settings.batch_size = parse_batch_size(value)?;
        }

        if let Some(value) = config.get(REPORT_PROGRESS_KEY) {
            settings.enable_progress = value.as_bool().ok_or_else(|| {
                ProcessingError::configuration(format!(
                    "{REPORT_PROGRESS_KEY}は真偽値である必要があります（実際: {}）",
                    json_type_name(value)
                ))
            })?;
        }

        Ok(settings)
    }
}

fn parse_batch_size(value: &Value) -> ProcessingResult<usize> {
    let batch_size = value
        .as_u64()
        .and_then(|size| usize::try_from(size).ok())
        .ok_or_else(|| {
            ProcessingError::configuration(format!(
                "{BATCH_SIZE_KEY}は正の整数である必要があります（実際: {value}）"
            ))
        })?;

    if batch_size == 0 {
        return Err(ProcessingError::configuration(format!(
            "{BATCH_SIZE_KEY}は1以上である必要があります"
        )));
    }
    Ok(batch_size)
}

impl Default for DefaultProcessorConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            enable_progress: true,
        }
    }
}

impl ProcessorConfig for DefaultProcessorConfig {
    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
