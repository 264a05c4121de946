//! パケットコア機能
//! ビット順変換、フィールド変換、パリティ処理、フレームレイアウト、エラー処理

pub mod bit_utils;
pub mod exceptions;
pub mod field_codec;
pub mod layout;
pub mod parity;
pub mod signal_spec;

// 便利な再エクスポート
pub use bit_utils::{reverse_byte, switch_bit_order, switch_bit_order_ht, extract_bits, set_bits, BitField, PacketFields};
pub use exceptions::{FieldError, BufferError, UnsupportedModeError, InjectError, InjectResult};
pub use field_codec::{to_hex_string, to_unsigned_int, to_byte_array, to_byte_vec, to_hex_dump};
pub use layout::{SignalKind, validate_signal_value, validate_mac_value};
pub use parity::{check_parity, correct_parity};
pub use signal_spec::{LegacySignalFields, JsonSignalSpecLoader};
