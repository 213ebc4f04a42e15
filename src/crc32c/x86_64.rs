//! SSE4.2 `crc32` round.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

use core::arch::x86_64::_mm_crc32_u64;

use super::CrcRound;

pub(crate) struct Sse42;

impl CrcRound for Sse42 {
    #[inline(always)]
    fn round(crc: u64, v: u64) -> u64 {
        // SAFETY: `Sse42` is only instantiated by `crc256_sse42`, which is
        // entered after the `sse4.2` feature has been confirmed.
        unsafe { _mm_crc32_u64(crc, v) }
    }
}

/// CRC-256 with the SSE4.2 round.
///
/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[target_feature(enable = "sse4.2")]
unsafe fn crc256_sse42(buf: &[u8]) -> [u64; 4] {
    crate::citycrc::crc256::<Sse42>(buf)
}

/// Runs the CRC-256 with this round, or returns `None` when the running CPU
/// lacks the instruction.
#[inline]
pub(crate) fn crc256(buf: &[u8]) -> Option<[u64; 4]> {
    if !is_supported() {
        return None;
    }
    // SAFETY: `sse4.2` support was confirmed just above.
    Some(unsafe { crc256_sse42(buf) })
}

#[inline]
pub(crate) fn is_supported() -> bool {
    #[cfg(feature = "std")]
    {
        std::is_x86_feature_detected!("sse4.2")
    }
    #[cfg(not(feature = "std"))]
    {
        cfg!(target_feature = "sse4.2")
    }
}
