//! CityHash: fast, non-cryptographic 64-bit and 128-bit hash functions.
//!
//! This crate implements CityHash v1.1 bit-for-bit, including the
//! CRC-accelerated `CityHashCrc128` and `CityHashCrc256`. Outputs match the
//! reference implementation on every platform: input words are always read
//! little-endian, and all arithmetic wraps.
//!
//! ```
//! use city_hash::{hash64, hash128, Uint128};
//!
//! assert_eq!(hash64(b""), 0x9ae16a3b2f90404f);
//!
//! let h = hash128(b"hello");
//! let (low, high): (u64, u64) = h.into();
//! assert_eq!(Uint128::new(low, high), h);
//! ```
//!
//! None of these functions are suitable where an attacker picks the input
//! and benefits from collisions.
//!
//! `hash128` and `hash_crc128` are different functions. They agree on inputs
//! up to 900 bytes and diverge above that.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod city128;
mod city64;
mod citycrc;
mod crc32c;
mod hasher;
mod mix;
mod uint128;

pub use crc32c::CrcBackend;
#[cfg(feature = "std")]
pub use hasher::{CityHashMap, CityHashSet};
pub use hasher::{BuildCityHasher, CityHasher};
pub use uint128::Uint128;

/// CityHash64.
#[inline]
pub fn hash64(buf: impl AsRef<[u8]>) -> u64 {
    city64::hash64(buf.as_ref())
}

/// CityHash64 with one seed.
#[inline]
pub fn hash64_with_seed(buf: impl AsRef<[u8]>, seed: u64) -> u64 {
    city64::hash64_with_seed(buf.as_ref(), seed)
}

/// CityHash64 with two seeds.
#[inline]
pub fn hash64_with_seeds(buf: impl AsRef<[u8]>, seed0: u64, seed1: u64) -> u64 {
    city64::hash64_with_seeds(buf.as_ref(), seed0, seed1)
}

/// CityHash128.
#[inline]
pub fn hash128(buf: impl AsRef<[u8]>) -> Uint128 {
    city128::hash128(buf.as_ref())
}

/// CityHash128 with a 128-bit seed. A `(u64, u64)` seed is read as
/// `(low, high)`.
#[inline]
pub fn hash128_with_seed(buf: impl AsRef<[u8]>, seed: impl Into<Uint128>) -> Uint128 {
    city128::hash128_with_seed(buf.as_ref(), seed.into())
}

/// CityHashCrc128. Identical to [`hash128`] for inputs of at most 900
/// bytes.
#[inline]
pub fn hash_crc128(buf: impl AsRef<[u8]>) -> Uint128 {
    citycrc::hash_crc128(buf.as_ref())
}

/// CityHashCrc128 with a 128-bit seed. Identical to [`hash128_with_seed`]
/// for inputs of at most 900 bytes.
#[inline]
pub fn hash_crc128_with_seed(buf: impl AsRef<[u8]>, seed: impl Into<Uint128>) -> Uint128 {
    citycrc::hash_crc128_with_seed(buf.as_ref(), seed.into())
}

/// CityHashCrc256, on the fastest CRC backend available.
#[inline]
pub fn hash_crc256(buf: impl AsRef<[u8]>) -> [u64; 4] {
    CrcBackend::detect().crc256(buf)
}

#[test]
fn test() {
    let mut t = 0u128;

    for i in 0..64u64 {
        let seed = Uint128::new(i.wrapping_mul(0x419a02900419a029), i);
        let mut size = 1;
        loop {
            let m = vec![i as u8; size];
            t = t.wrapping_add(hash64_with_seed(&m, i * 0x419a02900419a0) as u128);
            t = t.wrapping_add(hash128_with_seed(&m, seed).into());
            t = t.wrapping_add(hash_crc128(&m).into());
            if size >= 65536 {
                break;
            }
            size *= 2;
        }

        let mut size = 1;
        loop {
            let m = vec![i as u8; size];
            t = t.wrapping_add(hash64(&m) as u128);
            t = t.wrapping_add(hash128(&m).into());
            t = t.wrapping_add(hash_crc128_with_seed(&m, seed).into());
            if size >= 65536 {
                break;
            }
            size *= 3;
        }
    }

    assert_eq!(t, 0x9b0587c37be6a4c9fc4f028be55ad421);
}
