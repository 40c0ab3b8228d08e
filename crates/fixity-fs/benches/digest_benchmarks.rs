use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use fixity_fs::checksum::{compute_content_digest, compute_file_digest};
use fixity_fs::{CHUNK_SIZE, NormalizedPath, io};
use tempfile::tempdir;

fn content_digest_benchmark(c: &mut Criterion) {
    let data = vec![0x5au8; CHUNK_SIZE];
    let mut group = c.benchmark_group("checksum::compute_content_digest");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("64KiB", |b| {
        b.iter(|| compute_content_digest(black_box(&data)));
    });
    group.finish();
}

fn file_digest_benchmark(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("payload.bin");
    let data = vec![0xa5u8; 16 * CHUNK_SIZE];
    std::fs::write(&path, &data).unwrap();

    let mut group = c.benchmark_group("checksum::compute_file_digest");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("1MiB", |b| {
        b.iter(|| compute_file_digest(black_box(&path)).unwrap());
    });
    group.finish();
}

fn write_atomic_benchmark(c: &mut Criterion) {
    c.bench_function("io::write_atomic", |b| {
        let dir = tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("hashtable.json"));
        let content = "{\n}\n".as_bytes();

        b.iter(|| {
            io::write_atomic(black_box(&path), black_box(content)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    content_digest_benchmark,
    file_digest_benchmark,
    write_atomic_benchmark
);
criterion_main!(benches);
