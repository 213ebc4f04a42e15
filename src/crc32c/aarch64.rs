//! ARMv8 CRC extension round (`crc32cx`).
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

use core::arch::aarch64::__crc32cd;

use super::CrcRound;

pub(crate) struct ArmCrc;

impl CrcRound for ArmCrc {
    #[inline(always)]
    fn round(crc: u64, v: u64) -> u64 {
        // SAFETY: `ArmCrc` is only instantiated by `crc256_arm`, which is
        // entered after the `crc` feature has been confirmed.
        unsafe { __crc32cd(crc as u32, v) as u64 }
    }
}

/// CRC-256 with the ARMv8 CRC round.
///
/// # Safety
/// Caller must ensure the CPU supports the `crc` target feature.
#[target_feature(enable = "crc")]
unsafe fn crc256_arm(buf: &[u8]) -> [u64; 4] {
    crate::citycrc::crc256::<ArmCrc>(buf)
}

/// Runs the CRC-256 with this round, or returns `None` when the running CPU
/// lacks the instruction.
#[inline]
pub(crate) fn crc256(buf: &[u8]) -> Option<[u64; 4]> {
    if !is_supported() {
        return None;
    }
    // SAFETY: `crc` support was confirmed just above.
    Some(unsafe { crc256_arm(buf) })
}

#[inline]
pub(crate) fn is_supported() -> bool {
    #[cfg(feature = "std")]
    {
        std::arch::is_aarch64_feature_detected!("crc")
    }
    #[cfg(not(feature = "std"))]
    {
        cfg!(target_feature = "crc")
    }
}
