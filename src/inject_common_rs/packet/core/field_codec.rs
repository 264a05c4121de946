/// フィールド変換
/// 自然順の整数・ビッグエンディアンのバイト列・16進文字列の相互変換
///
/// `reverse` を指定すると各バイトのビット順を反転した無線区間表現として扱う。

use super::bit_utils::switch_bit_order;
use super::exceptions::{FieldError, InjectResult};

/// フィールド幅の上限（バイト）
pub const MAX_FIELD_WIDTH: u8 = 8;

fn check_width(size: u8) -> InjectResult<usize> {
    if size == 0 || size > MAX_FIELD_WIDTH {
        return Err(FieldError::InvalidWidth(size).into());
    }
    Ok(size as usize)
}

/// `size` バイトで表せる最大値
fn width_max(size: usize) -> u64 {
    if size >= 8 {
        u64::MAX
    } else {
        (1u64 << (size * 8)) - 1
    }
}

/// フィールドを16進文字列に変換する
///
/// `size == 0` のときは "0x00" を返す。桁数は最低2桁で、それ以上の
/// ゼロ埋めは行わない。`reverse` なしで `size` バイトを超える値は
/// そのまま全桁出力する。
///
/// Args:
///     field: フィールド値
///     reverse: 各バイトのビット順を反転してから出力するか
///     size: フィールドのバイト数
pub fn to_hex_string(field: u64, reverse: bool, size: u8) -> String {
    if size < 1 {
        return "0x00".to_string();
    }
    let field = if reverse { switch_bit_order(field, size) } else { field };
    format!("0x{:02x}", field)
}

/// バイト列をビッグエンディアンで整数に変換する
///
/// Args:
///     bytes: 入力バイト列（先頭が最上位）
///     reverse: 読み込み後に各バイトのビット順を反転するか
///     size: 読み込むバイト数
pub fn to_unsigned_int(bytes: &[u8], reverse: bool, size: u8) -> InjectResult<u64> {
    let width = check_width(size)?;
    if bytes.len() < width {
        return Err(FieldError::InsufficientData {
            required: width,
            actual: bytes.len(),
        }
        .into());
    }

    let result = bytes[..width]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64);

    Ok(if reverse { switch_bit_order(result, size) } else { result })
}

/// 整数をビッグエンディアンでバイト列に書き込む（`to_unsigned_int` の逆変換）
///
/// `out` の先頭 `size` バイトのみ書き換える。`size` バイトに収まらない値は
/// 切り捨てずにエラーとする。
pub fn to_byte_array(field: u64, out: &mut [u8], reverse: bool, size: u8) -> InjectResult<()> {
    let width = check_width(size)?;
    if out.len() < width {
        return Err(FieldError::InsufficientData {
            required: width,
            actual: out.len(),
        }
        .into());
    }
    let max = width_max(width);
    if field > max {
        return Err(FieldError::value_out_of_range("field", field, max).into());
    }

    let mut value = if reverse { switch_bit_order(field, size) } else { field };
    for byte in out[..width].iter_mut().rev() {
        *byte = (value & 0xff) as u8;
        value >>= 8;
    }
    Ok(())
}

/// `to_byte_array` の結果を新しい Vec で返す
pub fn to_byte_vec(field: u64, reverse: bool, size: u8) -> InjectResult<Vec<u8>> {
    let mut out = vec![0u8; size as usize];
    to_byte_array(field, &mut out, reverse, size)?;
    Ok(out)
}

/// バイト列の16進ダンプ（大文字、区切りなし）
pub fn to_hex_dump(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}
