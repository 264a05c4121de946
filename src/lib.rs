/// 802.11 フレーム注入用ユーティリティ
/// 物理層信号フィールド・MAC フィールドのビット順変換、パリティ補正、フレームへの書き込み

pub mod inject_common_rs;

// 便利な再エクスポート
pub mod prelude {
    pub use crate::inject_common_rs::packet::core::{
        check_parity, correct_parity, reverse_byte, switch_bit_order, switch_bit_order_ht,
        to_byte_array, to_hex_string, to_unsigned_int, InjectError, InjectResult, SignalKind,
    };
    pub use crate::inject_common_rs::packet::frame::{copy_range, inject_mac, inject_signal_field, FrameBuffer, SignalInjector};
    pub use crate::inject_common_rs::utils::{init_logging, ConfigLoader, InjectConfig};
}
