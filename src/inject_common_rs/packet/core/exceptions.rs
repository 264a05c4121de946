/// 信号フィールド注入処理用エラー型定義
/// フィールド変換・フレーム書き込み・未対応モードの3系統に分かれる

use std::fmt;
use std::error::Error;

/// フィールド値エラー
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// フィールド幅が 1..=8 バイトの範囲外
    InvalidWidth(u8),
    /// 入力または出力のバイト列が短すぎる
    InsufficientData { required: usize, actual: usize },
    /// フィールド値が範囲外
    ValueOutOfRange { field: String, value: u64, max: u64 },
    /// 予期しないデータ形式
    UnexpectedFormat(String),
}

impl FieldError {
    /// 範囲外エラーを作成
    pub fn value_out_of_range(field: &str, value: u64, max: u64) -> Self {
        FieldError::ValueOutOfRange {
            field: field.to_string(),
            value,
            max,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidWidth(size) => {
                write!(f, "フィールド幅が不正です: {}バイト (1..=8)", size)
            }
            FieldError::InsufficientData { required, actual } => {
                write!(f, "データが不足しています: 必要 {}バイト, 実際 {}バイト", required, actual)
            }
            FieldError::ValueOutOfRange { field, value, max } => {
                write!(f, "フィールド '{}' の値が範囲外: 0x{:x} (最大: 0x{:x})", field, value, max)
            }
            FieldError::UnexpectedFormat(msg) => {
                write!(f, "予期しないデータ形式: {}", msg)
            }
        }
    }
}

impl Error for FieldError {}

/// フレームバッファ書き込みエラー
#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    /// 書き込み範囲がバッファ末尾を超える
    Overrun { offset: usize, len: usize, capacity: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Overrun { offset, len, capacity } => {
                write!(
                    f,
                    "バッファ範囲外への書き込み: オフセット {} から {}バイト (容量 {}バイト)",
                    offset, len, capacity
                )
            }
        }
    }
}

impl Error for BufferError {}

/// 未対応モードエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedModeError {
    /// HT 信号フィールドのパリティ検査・補正
    HtParity,
}

impl fmt::Display for UnsupportedModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedModeError::HtParity => write!(f, "HT MODE is not supported yet"),
        }
    }
}

impl Error for UnsupportedModeError {}

/// 注入処理の統合エラー型
#[derive(Debug, Clone, PartialEq)]
pub enum InjectError {
    /// フィールドエラー
    Field(FieldError),
    /// バッファエラー
    Buffer(BufferError),
    /// 未対応モード（呼び出し側で中断・スキップを判断する）
    Unsupported(UnsupportedModeError),
    /// 設定エラー
    Config(String),
}

impl InjectError {
    /// HT パリティ等の未対応モードかどうか
    pub fn is_unsupported(&self) -> bool {
        matches!(self, InjectError::Unsupported(_))
    }
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectError::Field(err) => write!(f, "フィールドエラー: {}", err),
            InjectError::Buffer(err) => write!(f, "バッファエラー: {}", err),
            InjectError::Unsupported(err) => write!(f, "未対応モード: {}", err),
            InjectError::Config(msg) => write!(f, "設定エラー: {}", msg),
        }
    }
}

impl Error for InjectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InjectError::Field(err) => Some(err),
            InjectError::Buffer(err) => Some(err),
            InjectError::Unsupported(err) => Some(err),
            InjectError::Config(_) => None,
        }
    }
}

// From実装で自動変換をサポート
impl From<FieldError> for InjectError {
    fn from(err: FieldError) -> Self {
        InjectError::Field(err)
    }
}

impl From<BufferError> for InjectError {
    fn from(err: BufferError) -> Self {
        InjectError::Buffer(err)
    }
}

impl From<UnsupportedModeError> for InjectError {
    fn from(err: UnsupportedModeError) -> Self {
        InjectError::Unsupported(err)
    }
}

/// 注入処理の結果型
pub type InjectResult<T> = Result<T, InjectError>;
