/// フレームバッファへのフィールド書き込み
///
/// 呼び出し側が所有するフレームバッファに、固定オフセットで信号フィールドと
/// MAC フィールドを書き込む。書き込み前に必ず範囲を検査し、バッファ末尾を
/// 超える場合は何も書かずにエラーを返す。

use log::info;

use crate::inject_common_rs::packet::core::exceptions::{BufferError, FieldError, InjectResult};
use crate::inject_common_rs::packet::core::field_codec::{to_byte_array, to_hex_string};
use crate::inject_common_rs::packet::core::layout::{
    SignalKind, MAC_FIELD_SIZE, OFFSET_MAC, OFFSET_TMSTMP, SIGNAL_WINDOW_SIZE,
};

/// 範囲検査付きのフレームバッファビュー
#[derive(Debug)]
pub struct FrameBuffer<'a> {
    buf: &'a mut [u8],
}

impl<'a> FrameBuffer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..]
    }

    /// `offset` から `len` バイトがバッファ内に収まるか検査
    pub fn ensure_range(&self, offset: usize, len: usize) -> Result<(), BufferError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.buf.len() => Ok(()),
            _ => Err(BufferError::Overrun {
                offset,
                len,
                capacity: self.buf.len(),
            }),
        }
    }

    /// `offset` から `bytes` を書き込む
    pub fn write_at(&mut self, offset: usize, bytes: &[u8]) -> Result<(), BufferError> {
        self.ensure_range(offset, bytes.len())?;
        self.buf[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// `offset` から `len` バイトを `byte` で埋める
    pub fn fill_at(&mut self, offset: usize, len: usize, byte: u8) -> Result<(), BufferError> {
        self.ensure_range(offset, len)?;
        self.buf[offset..offset + len].fill(byte);
        Ok(())
    }
}

/// 信号フィールドをタイムスタンプ領域に書き込む
///
/// 8バイトの窓のうち、レガシーは先頭3バイト、HT は先頭6バイトを
/// `signal_field` からコピーし、残りをセンチネル値 (0xAA / 0xBB) で埋める。
pub fn inject_signal_field(
    buffer: &mut [u8],
    signal_field: &[u8],
    kind: SignalKind,
) -> InjectResult<()> {
    let guard = kind.size() as usize;
    if signal_field.len() < guard {
        return Err(FieldError::InsufficientData {
            required: guard,
            actual: signal_field.len(),
        }
        .into());
    }

    let mut frame = FrameBuffer::new(buffer);
    frame.ensure_range(OFFSET_TMSTMP, SIGNAL_WINDOW_SIZE)?;
    frame.write_at(OFFSET_TMSTMP, &signal_field[..guard])?;
    frame.fill_at(OFFSET_TMSTMP + guard, SIGNAL_WINDOW_SIZE - guard, kind.fill())?;
    Ok(())
}

/// 注入する MAC フィールドを人が読める形とビット反転後の送出形で出力
pub fn log_injected_mac(mac_field: u32) {
    info!("MAC HDR (HR): {}", to_hex_string(mac_field as u64, false, MAC_FIELD_SIZE as u8));
    info!("MAC HDR (SEND OUT): {}", to_hex_string(mac_field as u64, true, MAC_FIELD_SIZE as u8));
}

/// MAC フィールドを自然順のビッグエンディアン4バイトで書き込む
pub fn inject_mac(buffer: &mut [u8], mac_field: u32) -> InjectResult<()> {
    let mut frame = FrameBuffer::new(buffer);
    frame.ensure_range(OFFSET_MAC, MAC_FIELD_SIZE)?;

    log_injected_mac(mac_field);

    let mut mac_field_arr = [0u8; MAC_FIELD_SIZE];
    to_byte_array(mac_field as u64, &mut mac_field_arr, false, MAC_FIELD_SIZE as u8)?;
    frame.write_at(OFFSET_MAC, &mac_field_arr)?;
    Ok(())
}

/// `source` の先頭 `size` バイトを `destination` の `offset` 以降にコピー
pub fn copy_range(
    destination: &mut [u8],
    source: &[u8],
    size: usize,
    offset: usize,
) -> InjectResult<()> {
    if source.len() < size {
        return Err(FieldError::InsufficientData {
            required: size,
            actual: source.len(),
        }
        .into());
    }
    FrameBuffer::new(destination).write_at(offset, &source[..size])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inject_common_rs::packet::core::exceptions::InjectError;

    #[test]
    fn test_inject_legacy_signal_field() {
        let mut buffer = [0u8; 16];
        inject_signal_field(&mut buffer, &[0x01, 0x02, 0x03], SignalKind::Legacy).unwrap();
        assert_eq!(&buffer[..8], &[0u8; 8]);
        assert_eq!(&buffer[8..16], &[0x01, 0x02, 0x03, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn test_inject_ht_signal_field() {
        let mut buffer = [0x11u8; 20];
        let sig = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        inject_signal_field(&mut buffer, &sig, SignalKind::Ht).unwrap();
        assert_eq!(&buffer[8..16], &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xBB, 0xBB]);
        assert_eq!(&buffer[16..], &[0x11; 4]);
    }

    #[test]
    fn test_inject_signal_field_short_buffer_writes_nothing() {
        let mut buffer = [0u8; 12];
        let err = inject_signal_field(&mut buffer, &[1, 2, 3], SignalKind::Legacy).unwrap_err();
        assert_eq!(
            err,
            InjectError::Buffer(BufferError::Overrun { offset: 8, len: 8, capacity: 12 })
        );
        assert_eq!(buffer, [0u8; 12]);
    }

    #[test]
    fn test_inject_signal_field_short_source() {
        let mut buffer = [0u8; 16];
        assert!(inject_signal_field(&mut buffer, &[1, 2, 3], SignalKind::Ht).is_err());
        assert_eq!(buffer, [0u8; 16]);
    }

    #[test]
    fn test_inject_mac() {
        let mut buffer = [0u8; 40];
        inject_mac(&mut buffer, 0x01020304).unwrap();
        assert_eq!(&buffer[28..32], &[0x01, 0x02, 0x03, 0x04]);
        assert!(buffer[..28].iter().all(|&b| b == 0));
        assert!(buffer[32..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_inject_mac_short_buffer() {
        let mut buffer = [0u8; 31];
        assert!(inject_mac(&mut buffer, 0xFFFFFFFF).is_err());
        assert_eq!(buffer, [0u8; 31]);
    }

    #[test]
    fn test_copy_range() {
        let mut dest = [0u8; 8];
        copy_range(&mut dest, &[0xA, 0xB, 0xC, 0xD], 3, 4).unwrap();
        assert_eq!(dest, [0, 0, 0, 0, 0xA, 0xB, 0xC, 0]);

        assert!(copy_range(&mut dest, &[1, 2], 3, 0).is_err());
        assert!(copy_range(&mut dest, &[1, 2, 3], 3, 6).is_err());
        assert!(copy_range(&mut dest, &[1], 1, usize::MAX).is_err());
    }

    #[test]
    fn test_frame_buffer_ranges() {
        let mut raw = [0u8; 4];
        let mut frame = FrameBuffer::new(&mut raw);
        assert_eq!(frame.capacity(), 4);
        assert!(frame.ensure_range(0, 4).is_ok());
        assert!(frame.ensure_range(1, 4).is_err());
        frame.fill_at(2, 2, 0xFF).unwrap();
        assert_eq!(frame.as_slice(), &[0, 0, 0xFF, 0xFF]);
    }
}
