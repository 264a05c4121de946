/// フレームレイアウト定義
/// 信号フィールドと MAC フィールドの固定オフセット、各フィールドの最大値

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::exceptions::{FieldError, InjectResult};

/// レガシー信号フィールドの最大値 (24ビット)
pub const MAX_VALUE_LEGACY_SIGNAL_FIELD: u64 = 0xff_ffff;
/// MAC ヘッダ fuzzing 部分の最大値 (32ビット)
pub const MAX_VALUE_MAC_HDR_FUZZING_PART: u64 = 0xffff_ffff;
/// HT 信号フィールドの最大値 (48ビット)
pub const MAX_VALUE_HT_SIGNAL_FIELD: u64 = 0xffff_ffff_ffff;

/// 信号フィールド（タイムスタンプ領域）の開始オフセット
pub const OFFSET_TMSTMP: usize = 0x8;
/// 信号フィールド書き込み窓のサイズ（種別によらず固定）
pub const SIGNAL_WINDOW_SIZE: usize = 8;
/// MAC フィールドの開始オフセット
pub const OFFSET_MAC: usize = 28;
/// MAC フィールドのサイズ
pub const MAC_FIELD_SIZE: usize = 4;
/// 両フィールドを収めるのに必要な最小フレーム長
pub const MIN_FRAME_LEN: usize = OFFSET_MAC + MAC_FIELD_SIZE;

/// 信号フィールドの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// レガシー (L-SIG, 3バイト)
    Legacy,
    /// HT (HT-SIG, 6バイト)
    Ht,
}

impl SignalKind {
    /// `is_legacy` フラグ形式から変換
    pub fn from_legacy_flag(is_legacy: bool) -> Self {
        if is_legacy {
            SignalKind::Legacy
        } else {
            SignalKind::Ht
        }
    }

    pub fn is_legacy(self) -> bool {
        self == SignalKind::Legacy
    }

    /// フィールドのバイト数
    pub fn size(self) -> u8 {
        match self {
            SignalKind::Legacy => 3,
            SignalKind::Ht => 6,
        }
    }

    /// 書き込み窓の残りを埋めるセンチネル値
    pub fn fill(self) -> u8 {
        match self {
            SignalKind::Legacy => 0xaa,
            SignalKind::Ht => 0xbb,
        }
    }

    pub fn max_value(self) -> u64 {
        match self {
            SignalKind::Legacy => MAX_VALUE_LEGACY_SIGNAL_FIELD,
            SignalKind::Ht => MAX_VALUE_HT_SIGNAL_FIELD,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignalKind::Legacy => "legacy",
            SignalKind::Ht => "ht",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(SignalKind::Legacy),
            "ht" => Ok(SignalKind::Ht),
            _ => Err(format!("Invalid signal kind: {}", s)),
        }
    }
}

/// fuzzing 候補値が信号フィールドの幅に収まるか検証
pub fn validate_signal_value(value: u64, kind: SignalKind) -> InjectResult<()> {
    let max = kind.max_value();
    if value > max {
        let name = format!("{}_signal", kind);
        return Err(FieldError::value_out_of_range(&name, value, max).into());
    }
    Ok(())
}

/// fuzzing 候補値が MAC フィールド (32ビット) に収まるか検証
pub fn validate_mac_value(value: u64) -> InjectResult<u32> {
    if value > MAX_VALUE_MAC_HDR_FUZZING_PART {
        return Err(
            FieldError::value_out_of_range("mac_hdr", value, MAX_VALUE_MAC_HDR_FUZZING_PART).into(),
        );
    }
    Ok(value as u32)
}
