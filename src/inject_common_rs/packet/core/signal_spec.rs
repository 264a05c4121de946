/// レガシー信号フィールドのサブフィールド定義
///
/// 自然順の 24ビット値を LSB から tail(6) parity(1) length(12) reserved(1) rate(4)
/// に分割する。各値は自然順整数上のビット群そのもので、群の内部で
/// さらにビット順を入れ替えることはしない。

use once_cell::sync::Lazy;
use serde_json::Value;

use super::bit_utils::PacketFields;
use super::exceptions::{FieldError, InjectError, InjectResult};

// JSON仕様からフィールド定義を構築（コンパイル時埋め込み）
static LEGACY_SIGNAL_FIELDS: Lazy<PacketFields> = Lazy::new(|| {
    let json = include_str!("../format_spec/legacy_signal_fields.json");
    JsonSignalSpecLoader::load_from_json(json).expect("legacy signal spec parse")
});

/// レガシー信号フィールドの定義を取得
pub fn legacy_signal_fields() -> &'static PacketFields {
    &LEGACY_SIGNAL_FIELDS
}

/// JSON 配列からフィールド定義を読み込む（配列順に LSB から積み上げ）
pub struct JsonSignalSpecLoader;

impl JsonSignalSpecLoader {
    pub fn load_from_json(json_str: &str) -> InjectResult<PacketFields> {
        let json: Value = serde_json::from_str(json_str)
            .map_err(|e| Self::format_error(format!("JSON解析エラー: {}", e)))?;

        let entries = json
            .as_array()
            .ok_or_else(|| Self::format_error("フィールド定義は配列である必要があります".to_string()))?;

        let mut fields = PacketFields::new();
        for entry in entries {
            let name = entry["name"]
                .as_str()
                .ok_or_else(|| Self::format_error("name フィールドが見つかりません".to_string()))?;
            let length = entry["length"]
                .as_u64()
                .ok_or_else(|| Self::format_error("length フィールドが見つかりません".to_string()))?
                as usize;
            fields.add_field(name, length);
        }

        if fields.total_bits() > 64 {
            return Err(Self::format_error(format!(
                "フィールド合計が64ビットを超えています: {}",
                fields.total_bits()
            )));
        }

        Ok(fields)
    }

    fn format_error(msg: String) -> InjectError {
        InjectError::Field(FieldError::UnexpectedFormat(msg))
    }
}

/// レガシー信号フィールドの各ビット群
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegacySignalFields {
    pub rate: u8,
    pub reserved: bool,
    pub length: u16,
    pub parity: bool,
    pub tail: u8,
}

impl LegacySignalFields {
    /// 自然順の信号フィールド値を分解（24ビットより上は無視）
    pub fn decode(signal_field: u64) -> Self {
        let fields = legacy_signal_fields();
        let get = |name: &str| fields.get_field(name).map_or(0, |f| f.extract(signal_field));
        Self {
            rate: get("rate") as u8,
            reserved: get("reserved") != 0,
            length: get("length") as u16,
            parity: get("parity") != 0,
            tail: get("tail") as u8,
        }
    }

    /// 各ビット群を自然順の信号フィールド値に組み立てる
    ///
    /// ビット幅に収まらない値は切り捨てずに `ValueOutOfRange` を返す。
    pub fn encode(&self) -> InjectResult<u64> {
        let fields = legacy_signal_fields();
        let mut value = 0u64;
        let parts = [
            ("rate", self.rate as u64),
            ("reserved", self.reserved as u64),
            ("length", self.length as u64),
            ("parity", self.parity as u64),
            ("tail", self.tail as u64),
        ];
        for (name, part) in parts {
            if let Some(field) = fields.get_field(name) {
                let max = field.max_value();
                if part > max {
                    return Err(FieldError::value_out_of_range(name, part, max).into());
                }
                field.set(&mut value, part);
            }
        }
        Ok(value)
    }
}
