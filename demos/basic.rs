use city_hash::{hash128, hash64, hash_crc128, CrcBackend};

fn main() {
    let data = b"Hello, world!";

    // 64-bit hash
    let hash = hash64(data);
    println!("CityHash64 of {:?}: 0x{:016x}", data, hash);

    // 128-bit hash, as explicit low/high halves
    let wide = hash128(data);
    println!(
        "CityHash128 of {:?}: low 0x{:016x}, high 0x{:016x}",
        data,
        wide.low(),
        wide.high()
    );

    // Demonstrate hash stability
    assert_eq!(hash, hash64(data), "Hashes should be stable!");
    println!("Hash stability verified!");

    // The CRC variant only differs from CityHash128 above 900 bytes
    println!("\nCRC backend: {}", CrcBackend::detect());
    let small = vec![7u8; 900];
    let large = vec![7u8; 901];
    assert_eq!(hash_crc128(&small), hash128(&small));
    assert_ne!(hash_crc128(&large), hash128(&large));
    println!("CityHashCrc128 of 901 bytes: {:?}", hash_crc128(&large));
}
