//! Criterion benchmarks for scoped_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scoped_logger::prelude::*;
use std::sync::Arc;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let logger = Logger::new();
            black_box(logger)
        });
    });

    let parent = Logger::new();
    group.bench_function("create_child", |b| {
        b.iter(|| {
            let child = parent.create_child(black_box("child"));
            black_box(child)
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let unheard = Logger::new();
    group.bench_function("no_listeners", |b| {
        b.iter(|| {
            unheard.info(black_box("Info message"));
        });
    });

    let plain = Logger::builder().timestamp(false).build().unwrap();
    plain.on("info", |event| {
        black_box(event.message);
    });
    group.bench_function("one_listener_no_timestamp", |b| {
        b.iter(|| {
            plain.info(black_box("Info message"));
        });
    });

    let stamped = Logger::builder().colors(false).build().unwrap();
    stamped.on("info", |event| {
        black_box(event.message);
    });
    group.bench_function("one_listener_timestamp", |b| {
        b.iter(|| {
            stamped.info(black_box("Info message"));
        });
    });

    group.finish();
}

// ============================================================================
// Forwarding Benchmarks
// ============================================================================

fn bench_child_forwarding(c: &mut Criterion) {
    let mut group = c.benchmark_group("child_forwarding");
    group.throughput(Throughput::Elements(1));

    let root = Logger::builder().timestamp(false).build().unwrap();
    root.on("warn", |event| {
        black_box(event.message);
    });

    let child = root.create_child("a");
    group.bench_function("depth_1", |b| {
        b.iter(|| {
            child.warn(black_box("Forwarded"));
        });
    });

    let deep = root
        .create_child("a")
        .create_child("b")
        .create_child("c")
        .create_child("d");
    group.bench_function("depth_4", |b| {
        b.iter(|| {
            deep.warn(black_box("Forwarded"));
        });
    });

    group.finish();
}

// ============================================================================
// Pipe Benchmarks
// ============================================================================

fn bench_pipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipe");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder().timestamp(false).build().unwrap();
    let _pipe = logger.pipe(WriterSink::new(std::io::sink()), PipeOptions::default());

    group.bench_function("selected", |b| {
        b.iter(|| {
            logger.info(black_box("Piped message"));
        });
    });

    group.bench_function("filtered_out", |b| {
        b.iter(|| {
            logger.debug(black_box("Filtered message"));
        });
    });

    group.bench_function("attach_finish", |b| {
        b.iter(|| {
            let pipe = logger.pipe(
                WriterSink::new(std::io::sink()),
                PipeOptions::level(LogLevel::DEBUG),
            );
            pipe.finish().unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(Logger::builder().timestamp(false).build().unwrap());
    let _pipe = logger.pipe(WriterSink::new(std::io::sink()), PipeOptions::default());

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(black_box("Concurrent message"));
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emit,
    bench_child_forwarding,
    bench_pipe,
    bench_concurrent_logging
);

criterion_main!(benches);
