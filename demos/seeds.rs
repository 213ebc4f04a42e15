use city_hash::{hash128_with_seed, hash64_with_seed, hash64_with_seeds, Uint128};

fn main() {
    let data = b"Important message";

    // Seeds give independent hash functions over the same data, e.g. for
    // bloom filters or domain separation between uses.
    println!("Hashing {:?} with different seeds:", data);
    for seed in 0..5 {
        println!("  Seed {}: 0x{:016x}", seed, hash64_with_seed(data, seed));
    }

    // Two-seed form
    let h = hash64_with_seeds(data, 0x1234, 0x5678);
    println!("\nTwo seeds: 0x{:016x}", h);

    // 128-bit seeds are (low, high); the halves are not interchangeable
    let a = hash128_with_seed(data, Uint128::new(1, 2));
    let b = hash128_with_seed(data, Uint128::new(2, 1));
    assert_ne!(a, b);
    println!("Seed (1, 2): {:?}\nSeed (2, 1): {:?}", a, b);

    // Simple bloom filter with 3 seeded hash functions
    println!("\nSimple bloom filter example:");
    let num_bits = 64;
    let mut bloom_filter = vec![false; num_bits];
    let item = b"example@email.com";
    for k in 0..3 {
        let hash = hash64_with_seed(item, k);
        let bit_index = (hash % num_bits as u64) as usize;
        bloom_filter[bit_index] = true;
        println!("  Set bit {} for hash function {}", bit_index, k);
    }
}
