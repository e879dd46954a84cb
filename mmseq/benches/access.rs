//! Access benchmarks comparing the two view disciplines.

use std::io::Write;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mmseq::{DequeView, ListView, SeqCursor};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tempfile::NamedTempFile;

const TEST_DATA: &str = "\
We don't need no education.\n\
We don't need no thought control.\n\
No dark sarcasm in the classroom.\n\
Teacher, leave those kids alone.\n\
Hey, Teacher, leave those kids alone!\n\
All in all it's just another brick in the wall.\n\
All in all you're just another brick in the wall.\n\
\n";

const FILE_SIZE: usize = 10 * 1024 * 1024;
const WINDOW: usize = 1024 * 1024;

fn fixture(size: usize) -> NamedTempFile {
    let bytes: Vec<u8> = TEST_DATA.bytes().cycle().take(size).collect();
    let mut file = NamedTempFile::new().expect("create bench file");
    file.write_all(&bytes).expect("fill bench file");
    file.flush().expect("flush bench file");
    file
}

fn bench_sequential(c: &mut Criterion) {
    let file = fixture(FILE_SIZE);
    let list: ListView<u8, WINDOW> = ListView::open(file.path()).expect("open list view");
    let deque: DequeView<u8, WINDOW> = DequeView::open(file.path()).expect("open deque view");

    let mut group = c.benchmark_group("sequential_iter");
    group.throughput(Throughput::Bytes(FILE_SIZE as u64));
    group.bench_function(BenchmarkId::new("list", FILE_SIZE), |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for byte in list.iter() {
                sum = sum.wrapping_add(byte.expect("read byte") as u64);
            }
            sum
        })
    });
    group.bench_function(BenchmarkId::new("deque", FILE_SIZE), |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for byte in deque.iter() {
                sum = sum.wrapping_add(byte.expect("read byte") as u64);
            }
            sum
        })
    });
    group.finish();
}

fn bench_random_at(c: &mut Criterion) {
    let file = fixture(FILE_SIZE);
    let list: ListView<u8, WINDOW> = ListView::open(file.path()).expect("open list view");
    let deque: DequeView<u8, WINDOW> = DequeView::open(file.path()).expect("open deque view");

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let positions: Vec<usize> = (0..4096).map(|_| rng.gen_range(0..FILE_SIZE)).collect();

    let mut group = c.benchmark_group("random_at");
    group.throughput(Throughput::Elements(positions.len() as u64));
    group.bench_function("list", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &pos in &positions {
                sum = sum.wrapping_add(list.at(pos).expect("read byte") as u64);
            }
            sum
        })
    });
    group.bench_function("deque", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &pos in &positions {
                sum = sum.wrapping_add(deque.at(pos).expect("read byte") as u64);
            }
            sum
        })
    });
    group.finish();
}

fn bench_cursor_stride(c: &mut Criterion) {
    let file = fixture(FILE_SIZE);
    let list: ListView<u8, WINDOW> = ListView::open(file.path()).expect("open list view");
    let deque: DequeView<u8, WINDOW> = DequeView::open(file.path()).expect("open deque view");

    // Strides just under the window size force frequent remaps
    let stride = (WINDOW - 1) as isize;
    let steps = (FILE_SIZE as isize) / stride;

    let mut group = c.benchmark_group("cursor_stride");
    group.throughput(Throughput::Elements(steps as u64));
    group.bench_function("list", |b| {
        b.iter(|| {
            let mut cursor = list.iter();
            let mut sum = 0u64;
            for _ in 0..steps {
                sum = sum.wrapping_add(cursor.value().expect("read byte") as u64);
                cursor.try_advance(stride).expect("advance");
            }
            sum
        })
    });
    group.bench_function("deque", |b| {
        b.iter(|| {
            let mut cursor = deque.iter();
            let mut sum = 0u64;
            for _ in 0..steps {
                sum = sum.wrapping_add(cursor.value().expect("read byte") as u64);
                cursor.try_advance(stride).expect("advance");
            }
            sum
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sequential, bench_random_at, bench_cursor_stride);
criterion_main!(benches);
