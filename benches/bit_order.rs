use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inject80211_rust::inject_common_rs::packet::core::bit_utils::{reverse_byte, switch_bit_order, switch_bit_order_ht};
use inject80211_rust::inject_common_rs::packet::core::field_codec::{to_byte_array, to_unsigned_int};
use inject80211_rust::inject_common_rs::packet::core::layout::SignalKind;
use inject80211_rust::inject_common_rs::packet::core::parity::correct_parity;

fn benchmark_reverse_byte(c: &mut Criterion) {
    c.bench_function("reverse_byte_all", |b| {
        b.iter(|| {
            let mut acc = 0u8;
            for v in 0..=255u8 {
                acc ^= reverse_byte(black_box(v));
            }
            black_box(acc)
        });
    });
}

fn benchmark_switch_bit_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("switch_bit_order");

    for size in [1u8, 3, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("width", size), &size, |b, &size| {
            b.iter(|| black_box(switch_bit_order(black_box(0x0123_4567_89AB_CDEF), size)));
        });
    }
    group.bench_function("ht_halves", |b| {
        b.iter(|| black_box(switch_bit_order_ht(black_box(0x0123_4567_89AB))));
    });

    group.finish();
}

fn benchmark_codec_round_trip(c: &mut Criterion) {
    let bytes = [0x12, 0x34, 0x56];
    c.bench_function("legacy_codec_round_trip", |b| {
        b.iter(|| {
            let value = to_unsigned_int(black_box(&bytes), true, 3).unwrap();
            let value = correct_parity(value, true, SignalKind::Legacy).unwrap();
            let mut out = [0u8; 3];
            to_byte_array(value, &mut out, true, 3).unwrap();
            black_box(out)
        });
    });
}

criterion_group!(
    benches,
    benchmark_reverse_byte,
    benchmark_switch_bit_order,
    benchmark_codec_round_trip
);
criterion_main!(benches);
