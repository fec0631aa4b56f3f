//! # Compiler Benchmarks
//!
//! Performance benchmarks for pattern compilation and description parsing.
//!
//! Run with: `cargo bench -p kerneldb-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kerneldb_core::compile;
use kerneldb_core::grammar::{kernel_db, makedb};
use std::hint::black_box;

/// A kernel db file with `groups` selection groups, every fourth one special.
fn synthetic_kernel_db(groups: usize) -> String {
    let mut text = String::from("Object = SpacecraftPointing\n");
    for i in 0..groups {
        text.push_str("  Group = Selection\n");
        if i % 4 == 0 {
            text.push_str(&format!("    Match = (ck, \"grp{}\")\n", i));
            text.push_str("    File = (\"m\", \"kernels/sclk/clk_???.tsc\")\n");
        }
        text.push_str(&format!("    File = (\"m\", \"kernels/ck/ck{}_????_??.bc\")\n", i));
        text.push_str("  End_Group\n");
    }
    text.push_str("EndObject\n");
    text
}

fn synthetic_makedb(values: usize) -> String {
    let list: Vec<String> = (0..values).map(|i| format!("\"mk{}_????.bc\"", i)).collect();
    format!("# generated\nreconfilter = ({})\n", list.join(", "))
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_pattern_compile(c: &mut Criterion) {
    c.bench_function("compile_template", |b| {
        b.iter(|| compile(black_box("cas_iss_????_??_v???.bc")))
    });
}

fn bench_kernel_db_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel_db_parse");

    for size in [10, 100, 1000].iter() {
        let text = synthetic_kernel_db(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(kernel_db::parse(text, "ck")));
        });
    }

    group.finish();
}

fn bench_makedb_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("makedb_parse");

    for size in [1, 10, 100].iter() {
        let text = synthetic_makedb(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(makedb::parse(text, "ck")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pattern_compile,
    bench_kernel_db_parse,
    bench_makedb_parse
);
criterion_main!(benches);
