// 設定ファイルの読み込み

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::core::types::json_type_name;
use crate::core::{Config, ProcessingError, ProcessingResult};

/// JSON設定ファイルを読み込んでマッピングとして返す
///
/// 中身のスキーマは検証せず、読み込んだオブジェクトをそのまま返す。
/// ファイルハンドルは成功・失敗どちらの場合もこの関数を抜ける時点で閉じられる。
/// 失敗時に再試行は行わない。
///
/// # Errors
///
/// - ファイルが存在しない場合は [`ProcessingError::ConfigNotFoundError`]
/// - その他の読み込み失敗は [`ProcessingError::ConfigIoError`]
/// - JSONとして不正な場合は [`ProcessingError::ConfigParseError`]
/// - トップレベルがオブジェクトでない場合は [`ProcessingError::ConfigNotObjectError`]
pub fn load_config(path: impl AsRef<Path>) -> ProcessingResult<Config> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let file = File::open(path).map_err(|e| ProcessingError::config_io(&display_path, e))?;
    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            ProcessingError::config_io(&display_path, e.into())
        } else {
            ProcessingError::config_parse(&display_path, e)
        }
    })?;

    match value {
        Value::Object(config) => Ok(config),
        other => Err(ProcessingError::config_not_object(
            display_path,
            json_type_name(&other),
        )),
    }
}
