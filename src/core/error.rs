// データ処理のカスタムエラー型定義

use thiserror::Error;

/// データ処理固有のエラー型
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("必須フィールドがありません: {field}")]
    MissingFieldError { field: String },

    #[error("数値以外の値は変換できません: {field} ({found})")]
    NonNumericValueError { field: String, found: String },

    #[error("値のオーバーフロー: {field} = {value}")]
    ValueOverflowError { field: String, value: String },

    #[error("設定ファイルが見つかりません: {path}")]
    ConfigNotFoundError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("設定ファイル読み込みエラー: {path} - {source}")]
    ConfigIoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("設定ファイル解析エラー: {path} - {source}")]
    ConfigParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("設定ファイル形式エラー: {path} - トップレベルは{found}ではなくオブジェクトである必要があります")]
    ConfigNotObjectError { path: String, found: String },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },
}

impl ProcessingError {
    /// 必須フィールド欠落エラーの作成
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingFieldError {
            field: field.into(),
        }
    }

    /// 非数値エラーの作成
    pub fn non_numeric(field: impl Into<String>, found: impl Into<String>) -> Self {
        Self::NonNumericValueError {
            field: field.into(),
            found: found.into(),
        }
    }

    /// オーバーフローエラーの作成
    pub fn value_overflow(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ValueOverflowError {
            field: field.into(),
            value: value.into(),
        }
    }

    /// 設定ファイル読み込み時のI/Oエラーを種類に応じて振り分ける
    pub fn config_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ConfigNotFoundError { path, source }
        } else {
            Self::ConfigIoError { path, source }
        }
    }

    /// 設定ファイル解析エラーの作成
    pub fn config_parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ConfigParseError {
            path: path.into(),
            source,
        }
    }

    /// 設定ファイル形式エラーの作成
    pub fn config_not_object(path: impl Into<String>, found: impl Into<String>) -> Self {
        Self::ConfigNotObjectError {
            path: path.into(),
            found: found.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingFieldError { .. } | Self::NonNumericValueError { .. } => {
                ErrorSeverity::Medium
            }
            Self::ValueOverflowError { .. } => ErrorSeverity::Medium,
            Self::ConfigNotFoundError { .. }
            | Self::ConfigIoError { .. }
            | Self::ConfigParseError { .. }
            | Self::ConfigNotObjectError { .. } => ErrorSeverity::High,
            Self::ConfigurationError { .. } => ErrorSeverity::Critical,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 入力データ起因のエラーは入力を直せば再実行できるため回復可能とみなす
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::MissingFieldError { .. }
            | Self::NonNumericValueError { .. }
            | Self::ValueOverflowError { .. } => true,
            Self::ConfigNotFoundError { .. } | Self::ConfigIoError { .. } => true,
            Self::ConfigParseError { .. } | Self::ConfigNotObjectError { .. } => false,
            Self::ConfigurationError { .. } => false,
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::MissingFieldError { field } => ErrorContext::new("transform_item")
                .with_resource(field.clone())
                .with_suggestion("変換前にvalidate_itemでアイテムを検証してください"),
            Self::NonNumericValueError { field, .. } | Self::ValueOverflowError { field, .. } => {
                ErrorContext::new("transform_item")
                    .with_resource(field.clone())
                    .with_suggestion("値が有限の数値であることを確認してください")
            }
            Self::ConfigNotFoundError { path, .. } | Self::ConfigIoError { path, .. } => {
                ErrorContext::new("load_config")
                    .with_resource(path.clone())
                    .with_suggestion("ファイルパスとアクセス権限を確認してください")
            }
            Self::ConfigParseError { path, .. } | Self::ConfigNotObjectError { path, .. } => {
                ErrorContext::new("load_config")
                    .with_resource(path.clone())
                    .with_suggestion("JSONオブジェクト形式で記述してください")
            }
            Self::ConfigurationError { message } => ErrorContext::new("configuration")
                .with_suggestion(format!("設定を確認してください: {message}")),
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - 処理継続不可
    Critical,
}

impl ErrorSeverity {
    /// 重要度の数値表現を取得
    pub const fn as_level(&self) -> u8 {
        match self {
            Self::Medium => 1,
            Self::High => 2,
            Self::Critical => 3,
        }
    }

    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（ファイルパス、フィールド名等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// データ処理の結果型
pub type ProcessingResult<T> = std::result::Result<T, ProcessingError>;
