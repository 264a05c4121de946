use inject80211_rust::inject_common_rs::packet::core::exceptions::{BufferError, FieldError, InjectError};
use inject80211_rust::inject_common_rs::packet::core::layout::{SignalKind, MIN_FRAME_LEN, OFFSET_MAC, OFFSET_TMSTMP};
use inject80211_rust::inject_common_rs::packet::debug::FrameDebugLogger;
use inject80211_rust::inject_common_rs::packet::frame::{copy_range, inject_mac, inject_signal_field, SignalInjector};
use inject80211_rust::inject_common_rs::utils::InjectionConfig;

#[test]
fn test_legacy_signal_field_scenario() {
    let mut buffer = vec![0x00u8; 24];
    inject_signal_field(&mut buffer, &[0x01, 0x02, 0x03], SignalKind::Legacy).unwrap();

    assert_eq!(&buffer[OFFSET_TMSTMP..OFFSET_TMSTMP + 8], &[0x01, 0x02, 0x03, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA]);
    assert!(buffer[..8].iter().all(|&b| b == 0));
    assert!(buffer[16..].iter().all(|&b| b == 0));
}

#[test]
fn test_ht_signal_field_fill() {
    let mut buffer = vec![0x00u8; 16];
    inject_signal_field(&mut buffer, &[0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6], SignalKind::Ht).unwrap();
    assert_eq!(&buffer[8..], &[0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xBB, 0xBB]);
}

#[test]
fn test_legacy_ignores_extra_source_bytes() {
    let mut buffer = vec![0x00u8; 16];
    inject_signal_field(&mut buffer, &[1, 2, 3, 4, 5, 6, 7, 8], SignalKind::Legacy).unwrap();
    assert_eq!(&buffer[8..], &[1, 2, 3, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA]);
}

#[test]
fn test_mac_scenario() {
    let mut buffer = vec![0x00u8; 64];
    inject_mac(&mut buffer, 0x01020304).unwrap();
    assert_eq!(&buffer[OFFSET_MAC..OFFSET_MAC + 4], &[0x01, 0x02, 0x03, 0x04]);
    assert!(buffer[..OFFSET_MAC].iter().all(|&b| b == 0));
    assert!(buffer[OFFSET_MAC + 4..].iter().all(|&b| b == 0));
}

#[test]
fn test_mac_overrun_is_reported() {
    let mut buffer = vec![0x00u8; 30];
    assert_eq!(
        inject_mac(&mut buffer, 0x01020304),
        Err(InjectError::Buffer(BufferError::Overrun { offset: 28, len: 4, capacity: 30 }))
    );
    assert!(buffer.iter().all(|&b| b == 0));
}

#[test]
fn test_copy_range_offsets() {
    let mut dest = vec![0u8; 10];
    copy_range(&mut dest, &[9, 8, 7], 3, 7).unwrap();
    assert_eq!(&dest[7..], &[9, 8, 7]);
    assert!(copy_range(&mut dest, &[9, 8, 7], 3, 8).is_err());
    assert_eq!(&dest[7..], &[9, 8, 7]);
}

#[test]
fn test_injector_and_debug_logger_agree() {
    let injector = SignalInjector::new(InjectionConfig {
        signal_kind: SignalKind::Legacy,
        bits_reverse_order: true,
        auto_correct_parity: true,
    });
    let mut frame = vec![0u8; MIN_FRAME_LEN];
    injector.inject(&mut frame, 0x0B_1234, Some(0xCAFEBABE)).unwrap();

    let summary = FrameDebugLogger::inspect(&frame, SignalKind::Legacy, true).unwrap();
    assert_eq!(summary.parity_ok, Some(true));
    assert_eq!(summary.signal_natural & !0x40, 0x0B_1234 & !0x40);
    assert_eq!(summary.mac_field, 0xCAFEBABE);
}

#[test]
fn test_injector_ht_without_parity() {
    let injector = SignalInjector::new(InjectionConfig {
        signal_kind: SignalKind::Ht,
        bits_reverse_order: false,
        auto_correct_parity: false,
    });
    let mut frame = vec![0u8; MIN_FRAME_LEN];
    injector.inject(&mut frame, 0x0102_0304_0506, None).unwrap();
    assert_eq!(&frame[8..16], &[1, 2, 3, 4, 5, 6, 0xBB, 0xBB]);
    assert!(frame[OFFSET_MAC..].iter().all(|&b| b == 0));
}

#[test]
fn test_failed_inject_leaves_frame_unchanged() {
    let injector = SignalInjector::new(InjectionConfig {
        signal_kind: SignalKind::Legacy,
        bits_reverse_order: false,
        auto_correct_parity: false,
    });

    // 信号窓は収まるが MAC フィールドが収まらない
    let mut frame = [0u8; 20];
    assert_eq!(
        injector.inject(&mut frame, 0x010203, Some(0x01020304)),
        Err(InjectError::Buffer(BufferError::Overrun { offset: 28, len: 4, capacity: 20 }))
    );
    assert_eq!(frame, [0u8; 20]);

    // 32ビットを超える MAC 候補値
    let mut frame = vec![0u8; MIN_FRAME_LEN];
    let err = injector.inject(&mut frame, 0x010203, Some(0x1_0000_0000)).unwrap_err();
    assert!(matches!(err, InjectError::Field(FieldError::ValueOutOfRange { .. })));
    assert!(frame.iter().all(|&b| b == 0));

    // 範囲外の信号値
    let err = injector.inject(&mut frame, 0x1_000000, None).unwrap_err();
    assert!(matches!(err, InjectError::Field(FieldError::ValueOutOfRange { .. })));
    assert!(frame.iter().all(|&b| b == 0));
}
