/// 組み立て済みフレームのデバッグ出力
///
/// 信号窓と MAC フィールドの16進ダンプ、無線区間のビット列、
/// レガシーサブフィールドとパリティ状態をまとめて表示する。

use bitvec::prelude::*;
use log::debug;

use crate::inject_common_rs::packet::core::exceptions::{FieldError, InjectResult};
use crate::inject_common_rs::packet::core::field_codec::{to_hex_dump, to_unsigned_int};
use crate::inject_common_rs::packet::core::layout::{
    SignalKind, MAC_FIELD_SIZE, MIN_FRAME_LEN, OFFSET_MAC, OFFSET_TMSTMP, SIGNAL_WINDOW_SIZE,
};
use crate::inject_common_rs::packet::core::parity::check_parity;
use crate::inject_common_rs::packet::core::signal_spec::LegacySignalFields;

/// フレーム内の注入領域を読み戻した結果
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary {
    pub kind: SignalKind,
    /// 8バイトの信号窓全体（16進）
    pub signal_window_hex: String,
    /// 送信順の信号ビット列（各バイト LSB 先頭）
    pub signal_wire_bits: String,
    /// 自然順の整数として読み戻した信号フィールド
    pub signal_natural: u64,
    pub legacy: Option<LegacySignalFields>,
    pub parity_ok: Option<bool>,
    pub mac_field: u32,
}

/// フレームデバッグロガー
/// - 信号窓と MAC フィールドをダンプ
/// - レガシーサブフィールドを分解してパリティを確認
pub struct FrameDebugLogger;

impl FrameDebugLogger {
    /// `signal_in_wire_order` は信号バイトがビット反転済みで書き込まれたかを示す
    pub fn inspect(buf: &[u8], kind: SignalKind, signal_in_wire_order: bool) -> InjectResult<FrameSummary> {
        if buf.len() < MIN_FRAME_LEN {
            return Err(FieldError::InsufficientData {
                required: MIN_FRAME_LEN,
                actual: buf.len(),
            }
            .into());
        }

        let window = &buf[OFFSET_TMSTMP..OFFSET_TMSTMP + SIGNAL_WINDOW_SIZE];
        let size = kind.size();
        let signal = &window[..size as usize];

        let bits = BitSlice::<u8, Lsb0>::from_slice(signal);
        let signal_wire_bits: String = bits.iter().map(|b| if *b { '1' } else { '0' }).collect();

        let signal_natural = to_unsigned_int(signal, signal_in_wire_order, size)?;
        let (legacy, parity_ok) = match kind {
            SignalKind::Legacy => (
                Some(LegacySignalFields::decode(signal_natural)),
                Some(check_parity(signal_natural, kind)?),
            ),
            SignalKind::Ht => (None, None),
        };

        let mac_field = to_unsigned_int(&buf[OFFSET_MAC..], false, MAC_FIELD_SIZE as u8)? as u32;

        Ok(FrameSummary {
            kind,
            signal_window_hex: to_hex_dump(window),
            signal_wire_bits,
            signal_natural,
            legacy,
            parity_ok,
            mac_field,
        })
    }

    pub fn log_frame(buf: &[u8], kind: SignalKind, signal_in_wire_order: bool) {
        match Self::inspect(buf, kind, signal_in_wire_order) {
            Ok(summary) => {
                debug!(
                    "[FrameDebug] {} window={} natural=0x{:x} wire_bits={}",
                    summary.kind, summary.signal_window_hex, summary.signal_natural, summary.signal_wire_bits
                );
                if let (Some(sig), Some(ok)) = (summary.legacy, summary.parity_ok) {
                    debug!(
                        "[FrameDebug] rate=0x{:x} reserved={} length={} parity={} tail=0x{:x} parity_ok={}",
                        sig.rate, sig.reserved, sig.length, sig.parity, sig.tail, ok
                    );
                }
                debug!("[FrameDebug] mac=0x{:08x}", summary.mac_field);
            }
            Err(e) => debug!("[FrameDebug] {}", e),
        }
    }
}
