use crate::uint128::Uint128;

pub(crate) const K0: u64 = 0xc3a5c85c97cb3127;
pub(crate) const K1: u64 = 0xb492b66fbe98f273;
pub(crate) const K2: u64 = 0x9ae16a3b2f90404f;
pub(crate) const K_MUL: u64 = 0x9ddfea08eb382d69;

#[inline(always)]
pub(crate) fn fetch64(buf: &[u8], at: usize) -> u64 {
    let mut tmp = [0u8; 8];
    tmp.copy_from_slice(&buf[at..][..8]);
    u64::from_le_bytes(tmp)
}

#[inline(always)]
pub(crate) fn fetch32(buf: &[u8], at: usize) -> u64 {
    let mut tmp = [0u8; 4];
    tmp.copy_from_slice(&buf[at..][..4]);
    u32::from_le_bytes(tmp) as u64
}

#[inline(always)]
pub(crate) fn shift_mix(v: u64) -> u64 {
    v ^ (v >> 47)
}

#[inline(always)]
pub(crate) fn hash_len16(u: u64, v: u64) -> u64 {
    Uint128::new(u, v).fold()
}

/// `hash_len16` with a caller-chosen odd multiplier.
#[inline(always)]
pub(crate) fn hash_len16_mul(u: u64, v: u64, mul: u64) -> u64 {
    let mut a = (u ^ v).wrapping_mul(mul);
    a ^= a >> 47;
    let mut b = (v ^ a).wrapping_mul(mul);
    b ^= b >> 47;
    b.wrapping_mul(mul)
}

#[inline(always)]
pub(crate) fn weak_hash_len32_with_seeds_words(
    w: u64,
    x: u64,
    y: u64,
    z: u64,
    mut a: u64,
    mut b: u64,
) -> (u64, u64) {
    a = a.wrapping_add(w);
    b = b.wrapping_add(a).wrapping_add(z).rotate_right(21);
    let c = a;
    a = a.wrapping_add(x).wrapping_add(y);
    b = b.wrapping_add(a.rotate_right(44));
    (a.wrapping_add(z), b.wrapping_add(c))
}

/// Mixes the 32 bytes at `buf[at..]` with two seed words.
#[inline(always)]
pub(crate) fn weak_hash_len32_with_seeds(buf: &[u8], at: usize, a: u64, b: u64) -> (u64, u64) {
    weak_hash_len32_with_seeds_words(
        fetch64(buf, at),
        fetch64(buf, at + 8),
        fetch64(buf, at + 16),
        fetch64(buf, at + 24),
        a,
        b,
    )
}

/// One 64-byte round of the main loop shared by the 64- and 128-bit cores.
#[inline(always)]
pub(crate) fn chunk64(
    buf: &[u8],
    at: usize,
    v: &mut (u64, u64),
    w: &mut (u64, u64),
    x: &mut u64,
    y: &mut u64,
    z: &mut u64,
) {
    *x = x
        .wrapping_add(*y)
        .wrapping_add(v.0)
        .wrapping_add(fetch64(buf, at + 8))
        .rotate_right(37)
        .wrapping_mul(K1);
    *y = y
        .wrapping_add(v.1)
        .wrapping_add(fetch64(buf, at + 48))
        .rotate_right(42)
        .wrapping_mul(K1);
    *x ^= w.1;
    *y = y.wrapping_add(v.0).wrapping_add(fetch64(buf, at + 40));
    *z = z.wrapping_add(w.0).rotate_right(33).wrapping_mul(K1);
    *v = weak_hash_len32_with_seeds(buf, at, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
    *w = weak_hash_len32_with_seeds(
        buf,
        at + 32,
        z.wrapping_add(w.1),
        y.wrapping_add(fetch64(buf, at + 16)),
    );
    core::mem::swap(z, x);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetches_are_little_endian() {
        let buf = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(fetch64(&buf, 0), 0x0807060504030201);
        assert_eq!(fetch64(&buf, 1), 0x0908070605040302);
        assert_eq!(fetch32(&buf, 5), 0x09080706);
    }

    #[test]
    fn default_multiplier_matches_fold() {
        for (u, v) in [(0, 0), (1, 2), (u64::MAX, K0), (K1, K2)] {
            assert_eq!(hash_len16(u, v), hash_len16_mul(u, v, K_MUL));
        }
    }

    #[test]
    fn weak_hash_reads_four_words() {
        let mut buf = [0u8; 40];
        for (i, b) in buf.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(
            weak_hash_len32_with_seeds(&buf, 8, 3, 4),
            weak_hash_len32_with_seeds_words(
                fetch64(&buf, 8),
                fetch64(&buf, 16),
                fetch64(&buf, 24),
                fetch64(&buf, 32),
                3,
                4
            )
        );
    }
}
