// 処理に関連するデータ型定義

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 1件分の入力データ（文字列キーから任意のJSON値へのマッピング）
pub type Item = Map<String, Value>;

/// 設定ファイルから読み込んだマッピング（スキーマは強制しない）
pub type Config = Map<String, Value>;

/// アイテムの識別子フィールド
pub const ID_FIELD: &str = "id";
/// 変換対象の数値フィールド
pub const VALUE_FIELD: &str = "value";
/// 変換済みフラグのフィールド
pub const PROCESSED_FIELD: &str = "processed";

/// バッチ処理の統計スナップショット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorStats {
    /// これまでにバッチ処理へ渡されたアイテムの累計（検証結果に関係なく数える）
    pub processed_count: usize,
    pub batch_size: usize,
}

/// JSON値の型名を取得（エラーメッセージ用）
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
