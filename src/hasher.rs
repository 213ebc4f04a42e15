use alloc::vec::Vec;
use core::hash::{BuildHasher, Hasher};

use crate::city64::{hash64, hash64_with_seed};

/// A [`Hasher`] that buffers everything written to it and runs CityHash64
/// over the buffer in [`finish`](Hasher::finish).
///
/// CityHash is not an incremental algorithm, so the result of a sequence of
/// `write` calls is the hash of their concatenation.
#[derive(Clone, Debug, Default)]
pub struct CityHasher {
    seed: Option<u64>,
    buf: Vec<u8>,
}

impl CityHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// `finish` will return `hash64_with_seed(bytes, seed)`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            buf: Vec::new(),
        }
    }
}

impl Hasher for CityHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        match self.seed {
            Some(seed) => hash64_with_seed(&self.buf, seed),
            None => hash64(&self.buf),
        }
    }
}

/// Builds [`CityHasher`]s that all share one optional seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildCityHasher {
    seed: Option<u64>,
}

impl BuildCityHasher {
    pub const fn new() -> Self {
        Self { seed: None }
    }

    pub const fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// A per-process random seed, drawn from the standard library's
    /// `RandomState`.
    #[cfg(feature = "std")]
    pub fn random() -> Self {
        use std::collections::hash_map::RandomState;

        Self::with_seed(RandomState::new().build_hasher().finish())
    }

    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl BuildHasher for BuildCityHasher {
    type Hasher = CityHasher;

    #[inline]
    fn build_hasher(&self) -> CityHasher {
        match self.seed {
            Some(seed) => CityHasher::with_seed(seed),
            None => CityHasher::new(),
        }
    }
}

#[cfg(feature = "std")]
pub type CityHashMap<K, V> = std::collections::HashMap<K, V, BuildCityHasher>;

#[cfg(feature = "std")]
pub type CityHashSet<T> = std::collections::HashSet<T, BuildCityHasher>;
