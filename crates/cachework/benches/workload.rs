use cachework::{write_workload, OPERATION_COUNT};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_write_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("workload");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1 + OPERATION_COUNT as u64));

    group.bench_function("write_100_ops_buffered", |b| {
        let mut rng = rand::thread_rng();
        let mut buf = Vec::with_capacity(4096);

        b.iter(|| {
            buf.clear();
            write_workload(&mut buf, &mut rng).unwrap();
            black_box(buf.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_write_workload);
criterion_main!(benches);
