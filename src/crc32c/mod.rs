//! CRC32-C mixing rounds for the CRC-accelerated CityHash variants.
//!
//! CityHashCrc uses the CRC32-C instruction purely as a cheap, wide mixing
//! step that runs in parallel with the multiplier. Every backend computes the
//! same function, so the hash value never depends on which one was picked:
//!
//! - **x86_64**: SSE4.2 `crc32` → portable
//! - **aarch64**: CRC extension → portable
//! - everything else: portable slicing-by-8

pub(crate) mod portable;

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;

use core::fmt;

/// One CRC32-C round over a 64-bit word.
///
/// Reflected CRC32-C of the eight little-endian bytes of `v`, starting from
/// the low 32 bits of `crc`, with no pre- or post-inversion. The result is
/// zero-extended to 64 bits, which is what `_mm_crc32_u64` returns.
pub(crate) trait CrcRound {
    fn round(crc: u64, v: u64) -> u64;
}

/// A CRC32-C implementation the CRC-accelerated hashes can run on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrcBackend {
    /// Table-driven, available everywhere.
    Portable,
    /// x86_64 SSE4.2 `crc32` instruction.
    Sse42,
    /// aarch64 CRC extension.
    ArmCrc,
}

impl CrcBackend {
    /// Every backend, fastest first.
    pub const ALL: [CrcBackend; 3] = [CrcBackend::Sse42, CrcBackend::ArmCrc, CrcBackend::Portable];

    /// Returns the fastest backend the running CPU supports.
    ///
    /// With the `std` feature this performs (cached) runtime detection;
    /// without it only compile-time target features are considered.
    #[inline]
    pub fn detect() -> Self {
        Self::ALL
            .into_iter()
            .find(|backend| backend.is_supported())
            .unwrap_or(CrcBackend::Portable)
    }

    /// Whether this backend can run on the current CPU.
    #[inline]
    pub fn is_supported(self) -> bool {
        match self {
            CrcBackend::Portable => true,
            #[cfg(target_arch = "x86_64")]
            CrcBackend::Sse42 => x86_64::is_supported(),
            #[cfg(target_arch = "aarch64")]
            CrcBackend::ArmCrc => aarch64::is_supported(),
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CrcBackend::Portable => "portable",
            CrcBackend::Sse42 => "x86_64/sse4.2",
            CrcBackend::ArmCrc => "aarch64/crc",
        }
    }

    /// Computes CityHashCrc256 with this backend.
    ///
    /// An unsupported backend runs the portable round instead; the result
    /// is identical either way.
    pub fn crc256(self, buf: impl AsRef<[u8]>) -> [u64; 4] {
        let buf = buf.as_ref();
        let accelerated = match self {
            CrcBackend::Portable => None,
            #[cfg(target_arch = "x86_64")]
            CrcBackend::Sse42 => x86_64::crc256(buf),
            #[cfg(target_arch = "aarch64")]
            CrcBackend::ArmCrc => aarch64::crc256(buf),
            #[allow(unreachable_patterns)]
            _ => None,
        };
        accelerated.unwrap_or_else(|| crate::citycrc::crc256::<portable::Portable>(buf))
    }
}

impl Default for CrcBackend {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for CrcBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_backend_is_supported() {
        assert!(CrcBackend::detect().is_supported());
        assert!(CrcBackend::Portable.is_supported());
    }

    #[test]
    fn all_backends_agree() {
        let buf: Vec<u8> = (0..3000u32).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
        for len in [0, 1, 239, 240, 241, 479, 480, 520, 1000, 3000] {
            let expected = CrcBackend::Portable.crc256(&buf[..len]);
            for backend in CrcBackend::ALL {
                assert_eq!(backend.crc256(&buf[..len]), expected, "{backend} at {len}");
            }
        }
    }

    #[test]
    fn names() {
        assert_eq!(CrcBackend::Portable.to_string(), "portable");
        assert_eq!(CrcBackend::Sse42.name(), "x86_64/sse4.2");
    }
}
