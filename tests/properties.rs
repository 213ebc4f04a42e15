//! Property-based tests.
//!
//! These hold for all inputs, not just the pinned vectors.

use core::hash::{BuildHasher, Hasher};

use city_hash::*;
use proptest::prelude::*;

/// Byte vectors that cover every length branch, including the CRC path.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..2048)
}

fn arb_seed128() -> impl Strategy<Value = Uint128> {
    (any::<u64>(), any::<u64>()).prop_map(|(low, high)| Uint128::new(low, high))
}

proptest! {
    #[test]
    fn deterministic(data in arb_data(), s0 in any::<u64>(), s1 in any::<u64>(), seed in arb_seed128()) {
        let copy = data.clone();
        prop_assert_eq!(hash64(&data), hash64(&copy));
        prop_assert_eq!(hash64_with_seed(&data, s0), hash64_with_seed(&copy, s0));
        prop_assert_eq!(hash64_with_seeds(&data, s0, s1), hash64_with_seeds(&copy, s0, s1));
        prop_assert_eq!(hash128(&data), hash128(&copy));
        prop_assert_eq!(hash128_with_seed(&data, seed), hash128_with_seed(&copy, seed));
        prop_assert_eq!(hash_crc128(&data), hash_crc128(&copy));
        prop_assert_eq!(hash_crc128_with_seed(&data, seed), hash_crc128_with_seed(&copy, seed));
    }

    #[test]
    fn distinct_seeds_decorrelate(data in arb_data(), s1 in any::<u64>(), s2 in any::<u64>()) {
        prop_assume!(s1 != s2);
        prop_assert_ne!(hash64_with_seed(&data, s1), hash64_with_seed(&data, s2));
        prop_assert_ne!(
            hash128_with_seed(&data, (s1, 0u64)),
            hash128_with_seed(&data, (s2, 0u64))
        );
    }

    #[test]
    fn one_seed_is_two_seeds_with_k2(data in arb_data(), seed in any::<u64>()) {
        let k2 = hash64(b"");
        prop_assert_eq!(hash64_with_seed(&data, seed), hash64_with_seeds(&data, k2, seed));
    }

    #[test]
    fn seed_representations_agree(data in arb_data(), low in any::<u64>(), high in any::<u64>()) {
        let expected = hash128_with_seed(&data, Uint128::new(low, high));
        prop_assert_eq!(hash128_with_seed(&data, (low, high)), expected);
        prop_assert_eq!(
            hash128_with_seed(&data, ((high as u128) << 64) | low as u128),
            expected
        );
    }

    #[test]
    fn crc128_delegates_at_or_below_threshold(data in prop::collection::vec(any::<u8>(), 0..=900), seed in arb_seed128()) {
        prop_assert_eq!(hash_crc128(&data), hash128(&data));
        prop_assert_eq!(hash_crc128_with_seed(&data, seed), hash128_with_seed(&data, seed));
    }

    #[test]
    fn crc128_diverges_above_threshold(data in prop::collection::vec(any::<u8>(), 901..3000)) {
        prop_assert_ne!(hash_crc128(&data), hash128(&data));
    }

    #[test]
    fn crc_backends_agree(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let expected = CrcBackend::Portable.crc256(&data);
        for backend in CrcBackend::ALL {
            prop_assert_eq!(backend.crc256(&data), expected);
        }
        prop_assert_eq!(hash_crc256(&data), expected);
    }

    #[test]
    fn hasher_buffers_writes(data in arb_data(), split in any::<usize>(), seed in any::<u64>()) {
        let split = split % (data.len() + 1);
        let (a, b) = data.split_at(split);

        let mut hasher = CityHasher::new();
        hasher.write(a);
        hasher.write(b);
        prop_assert_eq!(hasher.finish(), hash64(&data));

        let mut hasher = BuildCityHasher::with_seed(seed).build_hasher();
        hasher.write(a);
        hasher.write(b);
        prop_assert_eq!(hasher.finish(), hash64_with_seed(&data, seed));
    }
}

#[test]
fn extreme_buffers_up_to_ten_megabytes() {
    const MAX: usize = 10 << 20;
    for fill in [0x00u8, 0xff] {
        let buf = vec![fill; MAX];
        let mut len = 0;
        while len <= MAX {
            let s = &buf[..len];
            let _ = hash64(s);
            let _ = hash64_with_seeds(s, 1, 2);
            let _ = hash128_with_seed(s, (3u64, 4u64));
            let _ = hash_crc128_with_seed(s, (5u64, 6u64));
            let _ = hash_crc256(s);
            len = if len < 1024 { len + 1 } else { len * 4 + 3 };
        }
        let _ = hash64(&buf);
        let _ = hash128(&buf);
        let _ = hash_crc128(&buf);
    }
}

#[test]
fn boundary_lengths_are_distinct() {
    let buf: Vec<u8> = (0..1024u32).map(|i| (i * 31 + 7) as u8).collect();
    let lens = [0, 1, 3, 4, 7, 8, 16, 17, 32, 33, 63, 64, 65, 900, 901];
    let mut seen64 = Vec::new();
    let mut seen128 = Vec::new();
    for len in lens {
        let h = hash64(&buf[..len]);
        assert!(!seen64.contains(&h), "hash64 collision at {len}");
        seen64.push(h);
        let h = hash_crc128(&buf[..len]);
        assert!(!seen128.contains(&h), "hash_crc128 collision at {len}");
        seen128.push(h);
    }
}
