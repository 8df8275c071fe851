// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Bench code readability over pedantic
#![allow(clippy::cast_precision_loss)] // Payload generation
#![allow(clippy::semicolon_if_nothing_returned)] // Benchmark code formatting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use synwire::codec::{self, WordCursor, WordCursorMut};
use synwire::{EventKind, EventRegistry, GapJunctionEvent, SecondaryEvent, Word};

// ============================================================================
// Scalar codec
// ============================================================================

/// Benchmark: encode + decode of one f64 (2 words)
fn bench_scalar_f64(c: &mut Criterion) {
    let mut buffer: Vec<Word> = vec![0; 2];
    c.bench_function("codec_f64_roundtrip", |b| {
        b.iter(|| {
            codec::encode(black_box(-70.25f64), &mut WordCursorMut::new(&mut buffer));
            black_box(codec::decode::<f64>(&mut WordCursor::new(&buffer)))
        })
    });
}

/// Benchmark: odd-sized value (partial final word)
fn bench_scalar_odd(c: &mut Criterion) {
    let mut buffer: Vec<Word> = vec![0; 2];
    let value = [1u8, 2, 3, 4, 5, 6, 7];
    c.bench_function("codec_u8x7_roundtrip", |b| {
        b.iter(|| {
            codec::encode(black_box(value), &mut WordCursorMut::new(&mut buffer));
            black_box(codec::decode::<[u8; 7]>(&mut WordCursor::new(&buffer)))
        })
    });
}

// ============================================================================
// Event packing
// ============================================================================

fn registry_with_length(len: usize) -> EventRegistry {
    let mut registry = EventRegistry::new();
    registry.register_kind(EventKind::GapJunction, 0);
    registry.set_payload_length(EventKind::GapJunction, len);
    registry
}

/// Benchmark: write_to_buffer for growing gap-junction payloads
fn bench_event_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_write");
    for len in [1usize, 16, 256, 4096] {
        let registry = registry_with_length(len);
        let payload: Vec<f64> = (0..len).map(|i| i as f64 * 0.5).collect();
        let mut event = GapJunctionEvent::new(&registry);
        event.attach_payload(&payload);
        let mut buffer: Vec<Word> = vec![0; event.size()];

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| event.write_to_buffer(&mut WordCursorMut::new(&mut buffer)))
        });
    }
    group.finish();
}

/// Benchmark: read_from_buffer + full decode of the bound payload
fn bench_event_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_read");
    for len in [1usize, 16, 256, 4096] {
        let registry = registry_with_length(len);
        let payload: Vec<f64> = (0..len).map(|i| i as f64 - 3.0).collect();
        let mut buffer: Vec<Word> = vec![0; 2 * len];
        let mut sender = GapJunctionEvent::new(&registry);
        sender.attach_payload(&payload);
        sender.write_to_buffer(&mut WordCursorMut::new(&mut buffer));

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                let mut event = GapJunctionEvent::new(&registry);
                event.read_from_buffer(&mut WordCursor::new(&buffer));
                black_box(event.values().sum::<f64>())
            })
        });
    }
    group.finish();
}

criterion_group!(codec_benches, bench_scalar_f64, bench_scalar_odd);
criterion_group!(event_benches, bench_event_write, bench_event_read);
criterion_main!(codec_benches, event_benches);
