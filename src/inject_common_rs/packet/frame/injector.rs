/// fuzzing 候補値からフレームへの注入までの一連の処理
///
/// 候補値は自然順の整数として受け取り、範囲検証 → パリティ補正（レガシーのみ、
/// 設定で有効時）→ バイト列化（設定に応じて無線区間のビット順）→ 書き込みを行う。

use log::{debug, info};

use crate::inject_common_rs::packet::core::bit_utils::switch_bit_order_ht;
use crate::inject_common_rs::packet::core::exceptions::InjectResult;
use crate::inject_common_rs::packet::core::field_codec::{to_byte_vec, to_hex_dump, to_hex_string};
use crate::inject_common_rs::packet::core::layout::{
    validate_mac_value, validate_signal_value, SignalKind, MAC_FIELD_SIZE, OFFSET_MAC, OFFSET_TMSTMP,
    SIGNAL_WINDOW_SIZE,
};
use crate::inject_common_rs::packet::core::parity::correct_parity;
use crate::inject_common_rs::utils::config_loader::InjectionConfig;

use super::splicer::{inject_mac, inject_signal_field, FrameBuffer};

/// 信号フィールド注入器
#[derive(Debug, Clone)]
pub struct SignalInjector {
    config: InjectionConfig,
}

impl SignalInjector {
    pub fn new(config: InjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InjectionConfig {
        &self.config
    }

    pub fn kind(&self) -> SignalKind {
        self.config.signal_kind
    }

    /// 候補値を書き込み用のバイト列に変換する
    ///
    /// HT で `auto_correct_parity` が有効な場合は `Unsupported` を返す。
    pub fn prepare_signal(&self, value: u64) -> InjectResult<Vec<u8>> {
        let kind = self.config.signal_kind;
        validate_signal_value(value, kind)?;

        let value = if self.config.auto_correct_parity {
            correct_parity(value, false, kind)?
        } else {
            value
        };

        let bytes = match (kind, self.config.bits_reverse_order) {
            (SignalKind::Ht, true) => to_byte_vec(switch_bit_order_ht(value), false, kind.size())?,
            (_, reverse) => to_byte_vec(value, reverse, kind.size())?,
        };

        debug!(
            "{} signal {} -> [{}]",
            kind,
            to_hex_string(value, false, kind.size()),
            to_hex_dump(&bytes)
        );
        Ok(bytes)
    }

    /// 信号フィールドと（指定時は）MAC フィールドをフレームに書き込む
    ///
    /// 検証と範囲検査をすべて終えてから書き込むため、エラー時はバッファを変更しない。
    pub fn inject(&self, buffer: &mut [u8], signal: u64, mac: Option<u64>) -> InjectResult<()> {
        let mac = mac.map(validate_mac_value).transpose()?;
        let bytes = self.prepare_signal(signal)?;

        let frame = FrameBuffer::new(buffer);
        frame.ensure_range(OFFSET_TMSTMP, SIGNAL_WINDOW_SIZE)?;
        if mac.is_some() {
            frame.ensure_range(OFFSET_MAC, MAC_FIELD_SIZE)?;
        }

        inject_signal_field(buffer, &bytes, self.config.signal_kind)?;
        info!(
            "SIGNAL FIELD ({}): {}",
            self.config.signal_kind,
            to_hex_string(signal, false, self.config.signal_kind.size())
        );

        if let Some(mac_field) = mac {
            inject_mac(buffer, mac_field)?;
        }
        Ok(())
    }
}

impl Default for SignalInjector {
    fn default() -> Self {
        Self::new(InjectionConfig::default())
    }
}
