// データ処理のモジュール
//
// 検証 → 変換 → 1パス処理 → バッチ処理 の順に積み上げる構成

pub mod batch;
pub mod pipeline;
pub mod transformer;
pub mod validator;

// 公開API
pub use batch::DataProcessor;
pub use pipeline::process_data;
pub use transformer::transform_item;
pub use validator::{validate_item, REQUIRED_FIELDS};
