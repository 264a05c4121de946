/// レガシー信号フィールドの偶数パリティ検査・補正
///
/// 下位6ビット（テールビット）はパリティの対象外、ビット6がパリティビット。
/// HT 信号フィールドは未対応で、`UnsupportedModeError::HtParity` を返す。

use super::bit_utils::switch_bit_order;
use super::exceptions::{InjectResult, UnsupportedModeError};
use super::layout::SignalKind;

/// パリティビットの位置
pub const PARITY_BIT: u64 = 0x40;
/// パリティの対象外となる下位テールビット数
pub const PARITY_TAIL_BITS: u32 = 6;

fn ensure_legacy(kind: SignalKind) -> InjectResult<()> {
    if !kind.is_legacy() {
        return Err(UnsupportedModeError::HtParity.into());
    }
    Ok(())
}

/// 信号フィールドのパリティビットが正しいか検査する
///
/// テールビットを除いた残りの立っているビット数が偶数なら true
pub fn check_parity(signal_field: u64, kind: SignalKind) -> InjectResult<bool> {
    ensure_legacy(kind)?;
    Ok((signal_field >> PARITY_TAIL_BITS).count_ones() % 2 == 0)
}

/// 信号フィールドのパリティビットを補正する
///
/// パリティが既に正しければ値は変わらない。`bits_reverse_order` の場合は
/// 3バイト幅で自然順に戻してから検査し、最後に無線区間のビット順へ戻す。
pub fn correct_parity(
    signal_field: u64,
    bits_reverse_order: bool,
    kind: SignalKind,
) -> InjectResult<u64> {
    ensure_legacy(kind)?;
    let size = kind.size();

    let mut field = if bits_reverse_order {
        switch_bit_order(signal_field, size)
    } else {
        signal_field
    };

    if !check_parity(field, kind)? {
        field ^= PARITY_BIT;
    }

    if bits_reverse_order {
        field = switch_bit_order(field, size);
    }

    Ok(field)
}
