// 検証と変換を1パスで行う処理

use super::{transform_item, validate_item};
use crate::core::{Item, ProcessingResult};

/// 有効なアイテムだけを入力順に変換して返す
///
/// 無効なアイテムは黙って除外される（カウントもログも行わない）。
/// 変換に失敗した場合は最初のエラーで処理を中断する。
pub fn process_data(items: &[Item]) -> ProcessingResult<Vec<Item>> {
    items
        .iter()
        .filter(|item| validate_item(item))
        .map(transform_item)
        .collect()
}
