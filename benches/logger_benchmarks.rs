//! Criterion benchmarks for bff_logging

use bff_logging::appenders::format_message;
use bff_logging::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;

// ============================================================================
// Sink Creation Benchmarks
// ============================================================================

fn bench_sink_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sink_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("sync", |b| {
        b.iter(|| {
            let logger = Logger::new();
            black_box(logger)
        });
    });

    group.bench_function("buffered", |b| {
        b.iter(|| {
            let logger = Logger::with_buffer(1000);
            black_box(logger)
        });
    });

    group.bench_function("wrapper_over_shared_sink", |b| {
        let sink = Arc::new(Logger::new());
        b.iter(|| {
            let logger = ContextLogger::with_context(Arc::clone(&sink), black_box("Bench"));
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Wrapper Emission Benchmarks
// ============================================================================

fn bench_wrapper_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapper_emission");
    group.throughput(Throughput::Elements(1));

    let sink = Arc::new(Logger::builder().min_level(LogLevel::Trace).build());

    let plain = ContextLogger::with_context(Arc::clone(&sink), "Bench");
    group.bench_function("plain_text", |b| {
        b.iter(|| {
            plain.info(black_box("payment captured"));
        });
    });

    let mut prefixed = ContextLogger::with_context(Arc::clone(&sink), "Bench");
    prefixed.set_prefix("worker-1");
    group.bench_function("prefixed_text", |b| {
        b.iter(|| {
            prefixed.info(black_box("payment captured"));
        });
    });

    group.bench_function("structured_fields", |b| {
        b.iter(|| {
            plain.info((
                Metadata::new()
                    .with("order_id", black_box(42))
                    .with("amount", black_box(19.99)),
                "payment captured",
            ));
        });
    });

    group.bench_function("fields_only", |b| {
        b.iter(|| {
            plain.info(Metadata::new().with("event", black_box("tick")));
        });
    });

    let mut scoped = ContextLogger::with_context(Arc::clone(&sink), "Bench");
    let scope = RequestScope::new();
    scope.set("request_id", "req-bench");
    scope.set("machine_id", "m-7");
    scope.set("user_id", 42);
    scoped.bind_scope(scope);
    group.bench_function("with_bound_scope", |b| {
        b.iter(|| {
            scoped.info(black_box("payment captured"));
        });
    });

    group.finish();
}

// ============================================================================
// Buffered Emission Benchmarks
// ============================================================================

fn bench_buffered_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffered_emission");
    group.throughput(Throughput::Elements(1));

    let sink = Arc::new(
        Logger::builder()
            .min_level(LogLevel::Trace)
            .buffered(100_000)
            .build(),
    );
    let logger = ContextLogger::with_context(Arc::clone(&sink), "Bench");

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("buffered message"));
        });
    });

    group.bench_function("error", |b| {
        b.iter(|| {
            logger.error(black_box("buffered error"));
        });
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let sink = Arc::new(Logger::builder().min_level(LogLevel::Warn).build());
    let logger = ContextLogger::with_context(sink, "Bench");

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug(black_box("filtered out"));
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(black_box("written"));
        });
    });

    group.finish();
}

// ============================================================================
// Record Pipeline Benchmarks
// ============================================================================

fn bench_record_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_pipeline");
    group.throughput(Throughput::Elements(1));

    group.bench_function("record_creation", |b| {
        b.iter(|| {
            let record = LogRecord::new(
                black_box(LogLevel::Info),
                black_box("payment captured".to_string()),
            );
            black_box(record)
        });
    });

    let record = LogRecord::new(LogLevel::Info, "payment captured".to_string())
        .with_context("PaymentService")
        .with_fields(Metadata::new().with("order_id", 42).with("amount", 19.99));

    group.bench_function("to_json", |b| {
        b.iter(|| {
            let json = serde_json::to_string(&record).unwrap();
            black_box(json)
        });
    });

    group.bench_function("pretty_headline", |b| {
        b.iter(|| {
            let line = format_message(black_box(&record));
            black_box(line)
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_sink_creation,
    bench_wrapper_emission,
    bench_buffered_emission,
    bench_level_filtering,
    bench_record_pipeline
);

criterion_main!(benches);
