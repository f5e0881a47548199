// アイテム変換

use serde_json::{Number, Value};

use crate::core::types::json_type_name;
use crate::core::{
    Item, ProcessingError, ProcessingResult, ID_FIELD, PROCESSED_FIELD, VALUE_FIELD,
};

/// アイテムを変換して新しいアイテムを返す
///
/// 出力は`{id, value: value * 2, processed: true}`で、`id`はそのままコピーされる。
/// 検証は呼び出し側の責任であり、ここでは再検証しない。
///
/// 2倍できるのは数値のみ。文字列の繰り返し（`"5"` → `"55"`）や真偽値の整数扱い
/// （`true` → `2`）は行わず、どちらも [`ProcessingError::NonNumericValueError`] になる。
/// 2倍すると64ビット整数の範囲を超える整数は浮動小数点として2倍する。
///
/// # Errors
///
/// - `id`または`value`が無い場合は [`ProcessingError::MissingFieldError`]
/// - `value`が数値でない場合は [`ProcessingError::NonNumericValueError`]
/// - 2倍した結果が有限の数値にならない場合は [`ProcessingError::ValueOverflowError`]
pub fn transform_item(item: &Item) -> ProcessingResult<Item> {
    let id = item
        .get(ID_FIELD)
        .ok_or_else(|| ProcessingError::missing_field(ID_FIELD))?;
    let value = item
        .get(VALUE_FIELD)
        .ok_or_else(|| ProcessingError::missing_field(VALUE_FIELD))?;

    let mut transformed = Item::new();
    transformed.insert(ID_FIELD.to_string(), id.clone());
    transformed.insert(VALUE_FIELD.to_string(), double_value(value)?);
    transformed.insert(PROCESSED_FIELD.to_string(), Value::Bool(true));
    Ok(transformed)
}

/// 数値を2倍する
///
/// 整数は64ビットに収まる限り整数のまま、収まらなければ浮動小数点で2倍する。
/// serde_jsonは`u64`を超える整数リテラルを`f64`として読むため、これで入力の大きさに
/// 関係なく同じ扱いになる。
fn double_value(value: &Value) -> ProcessingResult<Value> {
    let Value::Number(number) = value else {
        return Err(ProcessingError::non_numeric(VALUE_FIELD, json_type_name(value)));
    };

    let doubled_integer = if let Some(n) = number.as_u64() {
        n.checked_mul(2).map(Number::from)
    } else if let Some(n) = number.as_i64() {
        n.checked_mul(2).map(Number::from)
    } else {
        None
    };

    doubled_integer
        // 非有限の結果はJSONで表現できないのでNoneになる
        .or_else(|| number.as_f64().and_then(|n| Number::from_f64(n * 2.0)))
        .map(Value::Number)
        .ok_or_else(|| ProcessingError::value_overflow(VALUE_FIELD, number.to_string()))
}
