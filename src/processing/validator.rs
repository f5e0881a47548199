// アイテム検証

use crate::core::{Item, ID_FIELD, VALUE_FIELD};

/// 有効なアイテムが必ず持つキー
pub const REQUIRED_FIELDS: [&str; 2] = [ID_FIELD, VALUE_FIELD];

/// アイテムが必須キー（`id`と`value`）を両方持つかを判定
///
/// 値の型や範囲は確認しない。キーが欠けていてもエラーではなく`false`を返す。
pub fn validate_item(item: &Item) -> bool {
    REQUIRED_FIELDS.iter().all(|field| item.contains_key(*field))
}
