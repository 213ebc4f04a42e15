use benchmark_simple::*;
use city_hash::{hash128, hash64, hash_crc128, CrcBackend};
use core::hash::Hasher;
use fnv::FnvHasher;
use fxhash::FxHasher;
use xxhash_rust::xxh3::{xxh3_128, xxh3_64};

fn options() -> Options {
    Options {
        iterations: 100_000,
        warmup_iterations: 1_000,
        min_samples: 5,
        max_samples: 10,
        max_rsd: 1.0,
        ..Default::default()
    }
}

fn bench_sizes<T>(name: &str, f: impl Fn(&[u8]) -> T) {
    println!("\n* {}\n", name);

    let bench = Bench::new();
    let options = &options();

    let mut size = 1;
    loop {
        let m = vec![0u8; size];
        let res = bench.run(options, || f(&m));
        println!("{} bytes:\t{}", size, res.throughput(m.len() as _));
        if size >= 65536 {
            break;
        }
        size *= 2;
    }
}

fn main() {
    println!("CRC backend: {}", CrcBackend::detect());

    bench_sizes("CityHash64", |m| hash64(m));
    bench_sizes("CityHash128", |m| hash128(m));
    bench_sizes("CityHashCrc128", |m| hash_crc128(m));
    bench_sizes("CityHashCrc256 (portable)", |m| CrcBackend::Portable.crc256(m));
    bench_sizes("XXH3-64", xxh3_64);
    bench_sizes("XXH3-128", xxh3_128);
    bench_sizes("FxHash", |m| {
        let mut hasher = FxHasher::default();
        hasher.write(m);
        hasher.finish()
    });
    bench_sizes("FNV Hash", |m| {
        let mut hasher = FnvHasher::default();
        hasher.write(m);
        hasher.finish()
    });
}
