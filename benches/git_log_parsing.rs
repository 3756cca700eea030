use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jcrs::parse_git_log;

/// Generate synthetic `git log --stat` output with N commits
fn generate_verbose_log(num_commits: usize) -> String {
    let mut log = String::new();

    for i in 0..num_commits {
        log.push_str(&format!(
            "commit {:040x}\n\
             Author: Dev {} <dev{}@example.com>\n\
             Date:   Mon Jun {} 12:00:00 2024 +0200\n\
             \n    Change number {}\n\n    Longer description of the change.\n\n \
             src/module_{}.rs | {} ++++--\n \
             1 file changed, {} insertions(+), 2 deletions(-)\n\n",
            i,
            i,
            i,
            (i % 28) + 1,
            i,
            i,
            i % 50 + 6,
            i % 50 + 4,
        ));
    }

    log
}

/// Generate synthetic `git log --oneline` output with N commits
fn generate_oneline_log(num_commits: usize) -> String {
    (0..num_commits).map(|i| format!("{:040x} Change number {}\n", i, i)).collect()
}

fn bench_parse_verbose(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_git_log_verbose");

    for size in [100, 1_000, 10_000].iter() {
        let log = generate_verbose_log(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_git_log(black_box(log.as_bytes())).unwrap());
        });
    }

    group.finish();
}

fn bench_parse_oneline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_git_log_oneline");

    for size in [1_000, 10_000, 50_000].iter() {
        let log = generate_oneline_log(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_git_log(black_box(log.as_bytes())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_verbose, bench_parse_oneline);
criterion_main!(benches);
