use crate::mix::*;

pub(crate) fn hash_len_0_to_16(buf: &[u8]) -> u64 {
    let len = buf.len();
    if len >= 8 {
        let mul = K2.wrapping_add(len as u64 * 2);
        let a = fetch64(buf, 0).wrapping_add(K2);
        let b = fetch64(buf, len - 8);
        let c = b.rotate_right(37).wrapping_mul(mul).wrapping_add(a);
        let d = a.rotate_right(25).wrapping_add(b).wrapping_mul(mul);
        return hash_len16_mul(c, d, mul);
    }
    if len >= 4 {
        let mul = K2.wrapping_add(len as u64 * 2);
        let a = fetch32(buf, 0);
        return hash_len16_mul((len as u64).wrapping_add(a << 3), fetch32(buf, len - 4), mul);
    }
    if len > 0 {
        let a = buf[0] as u32;
        let b = buf[len >> 1] as u32;
        let c = buf[len - 1] as u32;
        let y = a + (b << 8);
        let z = len as u32 + (c << 2);
        return shift_mix((y as u64).wrapping_mul(K2) ^ (z as u64).wrapping_mul(K0))
            .wrapping_mul(K2);
    }
    K2
}

fn hash_len_17_to_32(buf: &[u8]) -> u64 {
    let len = buf.len();
    let mul = K2.wrapping_add(len as u64 * 2);
    let a = fetch64(buf, 0).wrapping_mul(K1);
    let b = fetch64(buf, 8);
    let c = fetch64(buf, len - 8).wrapping_mul(mul);
    let d = fetch64(buf, len - 16).wrapping_mul(K2);
    hash_len16_mul(
        a.wrapping_add(b)
            .rotate_right(43)
            .wrapping_add(c.rotate_right(30))
            .wrapping_add(d),
        a.wrapping_add(b.wrapping_add(K2).rotate_right(18))
            .wrapping_add(c),
        mul,
    )
}

fn hash_len_33_to_64(buf: &[u8]) -> u64 {
    let len = buf.len();
    let mul = K2.wrapping_add(len as u64 * 2);
    let mut a = fetch64(buf, 0).wrapping_mul(K2);
    let mut b = fetch64(buf, 8);
    let c = fetch64(buf, len - 24);
    let d = fetch64(buf, len - 32);
    let e = fetch64(buf, 16).wrapping_mul(K2);
    let f = fetch64(buf, 24).wrapping_mul(9);
    let g = fetch64(buf, len - 8);
    let h = fetch64(buf, len - 16).wrapping_mul(mul);
    let u = a
        .wrapping_add(g)
        .rotate_right(43)
        .wrapping_add(b.rotate_right(30).wrapping_add(c).wrapping_mul(9));
    let v = (a.wrapping_add(g) ^ d).wrapping_add(f).wrapping_add(1);
    let w = u
        .wrapping_add(v)
        .wrapping_mul(mul)
        .swap_bytes()
        .wrapping_add(h);
    let x = e.wrapping_add(f).rotate_right(42).wrapping_add(c);
    let y = v
        .wrapping_add(w)
        .wrapping_mul(mul)
        .swap_bytes()
        .wrapping_add(g)
        .wrapping_mul(mul);
    let z = e.wrapping_add(f).wrapping_add(c);
    a = x
        .wrapping_add(z)
        .wrapping_mul(mul)
        .wrapping_add(y)
        .swap_bytes()
        .wrapping_add(b);
    b = shift_mix(
        z.wrapping_add(a)
            .wrapping_mul(mul)
            .wrapping_add(d)
            .wrapping_add(h),
    )
    .wrapping_mul(mul);
    b.wrapping_add(x)
}

pub(crate) fn hash64(buf: &[u8]) -> u64 {
    let len = buf.len();
    if len <= 32 {
        if len <= 16 {
            return hash_len_0_to_16(buf);
        }
        return hash_len_17_to_32(buf);
    } else if len <= 64 {
        return hash_len_33_to_64(buf);
    }

    // The tail is hashed first; the loop then keeps 56 bytes of state in
    // v, w, x, y and z.
    let mut x = fetch64(buf, len - 40);
    let mut y = fetch64(buf, len - 16).wrapping_add(fetch64(buf, len - 56));
    let mut z = hash_len16(
        fetch64(buf, len - 48).wrapping_add(len as u64),
        fetch64(buf, len - 24),
    );
    let mut v = weak_hash_len32_with_seeds(buf, len - 64, len as u64, z);
    let mut w = weak_hash_len32_with_seeds(buf, len - 32, y.wrapping_add(K1), x);
    x = x.wrapping_mul(K1).wrapping_add(fetch64(buf, 0));

    // Whole 64-byte chunks, not counting the bytes already in the tail.
    let mut remaining = (len - 1) & !63;
    let mut at = 0;
    loop {
        chunk64(buf, at, &mut v, &mut w, &mut x, &mut y, &mut z);
        at += 64;
        remaining -= 64;
        if remaining == 0 {
            break;
        }
    }
    hash_len16(
        hash_len16(v.0, w.0)
            .wrapping_add(shift_mix(y).wrapping_mul(K1))
            .wrapping_add(z),
        hash_len16(v.1, w.1).wrapping_add(x),
    )
}

#[inline]
pub(crate) fn hash64_with_seeds(buf: &[u8], seed0: u64, seed1: u64) -> u64 {
    hash_len16(hash64(buf).wrapping_sub(seed0), seed1)
}

#[inline]
pub(crate) fn hash64_with_seed(buf: &[u8], seed: u64) -> u64 {
    hash64_with_seeds(buf, K2, seed)
}
