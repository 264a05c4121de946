/// ビット操作ユーティリティ
/// 無線区間のビット順（各バイト LSB 先頭送出）と自然順の整数表現の相互変換

use log::debug;

/// 1バイトのビット順を反転する
///
/// ニブル交換 → 2ビット交換 → 1ビット交換の3段で行う
#[inline]
pub fn reverse_byte(mut b: u8) -> u8 {
    b = (b & 0xF0) >> 4 | (b & 0x0F) << 4;
    b = (b & 0xCC) >> 2 | (b & 0x33) << 2;
    b = (b & 0xAA) >> 1 | (b & 0x55) << 1;
    b
}

/// 下位 `size` バイトそれぞれのビット順を反転する
///
/// バイトの並び順は変えない。`size` を超える上位バイトは捨てられる。
/// `size` が 8 を超える場合は 8 として扱う。
///
/// Args:
///     field: 元のフィールド値
///     size: フィールドのバイト数
///
/// Returns:
///     各バイトのビット順を反転した値
pub fn switch_bit_order(field: u64, size: u8) -> u64 {
    let size = size.min(8) as usize;
    let mut rest = field;
    let mut result = 0u64;

    for i in 0..size {
        let byte = reverse_byte((rest & 0xff) as u8);
        rest >>= 8;
        result |= (byte as u64) << (i * 8);
    }

    result
}

/// HT 信号フィールド (48ビット) 用のビット順反転
///
/// 24ビットずつの上位・下位に分けてそれぞれ `switch_bit_order(_, 3)` を適用し、
/// 上位を元の位置に戻して結合する。
pub fn switch_bit_order_ht(field: u64) -> u64 {
    let left = switch_bit_order(field >> 24, 3);
    let right = switch_bit_order(field & 0xff_ffff, 3);
    debug!("left: 0x{:x} right: 0x{:x}", left, right);
    (left << 24) | right
}

/// 指定されたビット範囲から値を抽出する
///
/// Args:
///     data: 元データ（整数値）
///     start_bit: 開始ビット位置（LSB基準）
///     length: 抽出するビット長
pub fn extract_bits(data: u64, start_bit: usize, length: usize) -> u64 {
    if length == 0 || start_bit >= 64 || start_bit + length > 64 {
        return 0;
    }

    let mask = if length >= 64 { u64::MAX } else { (1u64 << length) - 1 };
    (data >> start_bit) & mask
}

/// 指定されたビット範囲に値を設定する（範囲外のビットは切り捨て）
pub fn set_bits(data: &mut u64, start_bit: usize, length: usize, value: u64) {
    if length == 0 || start_bit >= 64 || start_bit + length > 64 {
        return;
    }

    let mask = if length >= 64 { u64::MAX } else { (1u64 << length) - 1 };

    // 既存ビットをクリア
    *data &= !(mask << start_bit);
    *data |= (value & mask) << start_bit;
}

/// ビットフィールドの定義構造体
#[derive(Debug, Clone, PartialEq)]
pub struct BitField {
    pub start: usize,
    pub length: usize,
    pub name: String,
}

impl BitField {
    pub fn new(name: &str, start: usize, length: usize) -> Self {
        Self {
            start,
            length,
            name: name.to_string(),
        }
    }

    /// このフィールドから値を抽出
    pub fn extract(&self, data: u64) -> u64 {
        extract_bits(data, self.start, self.length)
    }

    /// このフィールドに値を設定
    pub fn set(&self, data: &mut u64, value: u64) {
        set_bits(data, self.start, self.length, value);
    }

    /// このフィールドに収まる最大値
    pub fn max_value(&self) -> u64 {
        match self.length {
            0 => 0,
            len if len >= 64 => u64::MAX,
            len => (1u64 << len) - 1,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// LSB から順に積み上げるフィールドマネージャー
#[derive(Debug, Clone)]
pub struct PacketFields {
    fields: Vec<BitField>,
    total_bits: usize,
}

impl PacketFields {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            total_bits: 0,
        }
    }

    /// フィールドを追加
    pub fn add_field(&mut self, name: &str, length: usize) {
        let field = BitField::new(name, self.total_bits, length);
        self.total_bits = field.end();
        self.fields.push(field);
    }

    /// フィールドを名前で検索
    pub fn get_field(&self, name: &str) -> Option<&BitField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    pub fn total_bytes(&self) -> usize {
        (self.total_bits + 7) / 8
    }
}

impl Default for PacketFields {
    fn default() -> Self {
        Self::new()
    }
}
