use crate::city64::hash_len_0_to_16;
use crate::mix::*;
use crate::uint128::Uint128;

/// Murmur-style path for inputs shorter than 128 bytes.
fn city_murmur(buf: &[u8], seed: Uint128) -> Uint128 {
    let len = buf.len();
    let mut a = seed.low();
    let mut b = seed.high();
    let mut c;
    let mut d;
    if len <= 16 {
        a = shift_mix(a.wrapping_mul(K1)).wrapping_mul(K1);
        c = b.wrapping_mul(K1).wrapping_add(hash_len_0_to_16(buf));
        d = shift_mix(a.wrapping_add(if len >= 8 { fetch64(buf, 0) } else { c }));
    } else {
        c = hash_len16(fetch64(buf, len - 8).wrapping_add(K1), a);
        d = hash_len16(
            b.wrapping_add(len as u64),
            c.wrapping_add(fetch64(buf, len - 16)),
        );
        a = a.wrapping_add(d);
        // 16-byte steps from the front; the last step may overlap the
        // words already folded into c and d.
        let mut remaining = len - 16;
        let mut at = 0;
        loop {
            a ^= shift_mix(fetch64(buf, at).wrapping_mul(K1)).wrapping_mul(K1);
            a = a.wrapping_mul(K1);
            b ^= a;
            c ^= shift_mix(fetch64(buf, at + 8).wrapping_mul(K1)).wrapping_mul(K1);
            c = c.wrapping_mul(K1);
            d ^= c;
            at += 16;
            if remaining <= 16 {
                break;
            }
            remaining -= 16;
        }
    }
    a = hash_len16(a, c);
    b = hash_len16(d, b);
    Uint128::new(a ^ b, hash_len16(b, a))
}

pub(crate) fn hash128_with_seed(buf: &[u8], seed: Uint128) -> Uint128 {
    let len = buf.len();
    if len < 128 {
        return city_murmur(buf, seed);
    }

    let mut x = seed.low();
    let mut y = seed.high();
    let mut z = (len as u64).wrapping_mul(K1);
    let v0 = (y ^ K1)
        .rotate_right(49)
        .wrapping_mul(K1)
        .wrapping_add(fetch64(buf, 0));
    let mut v = (
        v0,
        v0.rotate_right(42)
            .wrapping_mul(K1)
            .wrapping_add(fetch64(buf, 8)),
    );
    let mut w = (
        y.wrapping_add(z)
            .rotate_right(35)
            .wrapping_mul(K1)
            .wrapping_add(x),
        x.wrapping_add(fetch64(buf, 88))
            .rotate_right(53)
            .wrapping_mul(K1),
    );

    // 128 bytes per iteration.
    let mut remaining = len;
    let mut at = 0;
    loop {
        chunk64(buf, at, &mut v, &mut w, &mut x, &mut y, &mut z);
        chunk64(buf, at + 64, &mut v, &mut w, &mut x, &mut y, &mut z);
        at += 128;
        remaining -= 128;
        if remaining < 128 {
            break;
        }
    }
    x = x.wrapping_add(v.0.wrapping_add(z).rotate_right(49).wrapping_mul(K0));
    y = y.wrapping_mul(K0).wrapping_add(w.1.rotate_right(37));
    z = z.wrapping_mul(K0).wrapping_add(w.0.rotate_right(27));
    w.0 = w.0.wrapping_mul(9);
    v.0 = v.0.wrapping_mul(K0);

    // Up to four 32-byte blocks counted back from the end of the input.
    let mut tail_done = 0;
    while tail_done < remaining {
        tail_done += 32;
        let block = len - tail_done;
        y = x
            .wrapping_add(y)
            .rotate_right(42)
            .wrapping_mul(K0)
            .wrapping_add(v.1);
        w.0 = w.0.wrapping_add(fetch64(buf, block + 16));
        x = x.wrapping_mul(K0).wrapping_add(w.0);
        z = z.wrapping_add(w.1).wrapping_add(fetch64(buf, block));
        w.1 = w.1.wrapping_add(v.0);
        v = weak_hash_len32_with_seeds(buf, block, v.0.wrapping_add(z), v.1);
        v.0 = v.0.wrapping_mul(K0);
    }

    // Two different 56-to-8-byte reductions give the two halves.
    x = hash_len16(x, v.0);
    y = hash_len16(y.wrapping_add(z), w.0);
    Uint128::new(
        hash_len16(x.wrapping_add(v.1), w.1).wrapping_add(y),
        hash_len16(x.wrapping_add(w.1), y.wrapping_add(v.1)),
    )
}

pub(crate) fn hash128(buf: &[u8]) -> Uint128 {
    if buf.len() >= 16 {
        hash128_with_seed(
            &buf[16..],
            Uint128::new(fetch64(buf, 0), fetch64(buf, 8).wrapping_add(K0)),
        )
    } else {
        hash128_with_seed(buf, Uint128::new(K0, K1))
    }
}
