//! CityHashCrc128 and CityHashCrc256.
//!
//! The 256-bit hash interleaves three CRC32-C chains with additive mixing
//! of eight 64-bit words, consuming 40 bytes per chunk. It is a distinct
//! function from CityHash128: the two only agree on inputs of 900 bytes or
//! less, where `hash_crc128` delegates to `hash128`.

use crate::city128::{hash128, hash128_with_seed};
use crate::crc32c::{CrcBackend, CrcRound};
use crate::mix::*;
use crate::uint128::Uint128;

/// Up to this length the CRC setup cost outweighs its throughput.
const CRC128_THRESHOLD: usize = 900;

const BLOCK: usize = 240;
const CHUNK: usize = 40;

struct State {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
    e: u64,
    f: u64,
    g: u64,
    h: u64,
    x: u64,
    y: u64,
    z: u64,
}

/// `(a, b, c) <- (c, a, b)`
#[inline(always)]
fn permute3(a: &mut u64, b: &mut u64, c: &mut u64) {
    core::mem::swap(a, b);
    core::mem::swap(a, c);
}

impl State {
    #[inline(always)]
    fn chunk<C: CrcRound>(&mut self, buf: &[u8], at: usize, r: u32) {
        permute3(&mut self.x, &mut self.z, &mut self.y);
        self.b = self.b.wrapping_add(fetch64(buf, at));
        self.c = self.c.wrapping_add(fetch64(buf, at + 8));
        self.d = self.d.wrapping_add(fetch64(buf, at + 16));
        self.e = self.e.wrapping_add(fetch64(buf, at + 24));
        self.f = self.f.wrapping_add(fetch64(buf, at + 32));
        self.a = self.a.wrapping_add(self.b);
        self.h = self.h.wrapping_add(self.f);
        self.b = self.b.wrapping_add(self.c);
        self.f = self.f.wrapping_add(self.d);
        self.g = self.g.wrapping_add(self.e);
        self.e = self.e.wrapping_add(self.z);
        self.g = self.g.wrapping_add(self.x);
        self.z = C::round(self.z, self.b.wrapping_add(self.g));
        self.y = C::round(self.y, self.e.wrapping_add(self.h));
        self.x = C::round(self.x, self.f.wrapping_add(self.a));
        self.e = self.e.rotate_right(r);
        self.c = self.c.wrapping_add(self.e);
    }
}

/// Requires `buf.len() >= 240`.
#[inline(always)]
fn crc256_long<C: CrcRound>(buf: &[u8], seed: u32) -> [u64; 4] {
    let len = buf.len();
    let seed = seed as u64;
    let mut result = [0u64; 4];
    let b = fetch64(buf, 96).wrapping_add(K0);
    let c = hash_len16(b, len as u64);
    let d = fetch64(buf, 120).wrapping_mul(K0).wrapping_add(len as u64);
    result[0] = c;
    result[1] = d;
    let mut s = State {
        a: fetch64(buf, 56).wrapping_add(K0),
        b,
        c,
        d,
        e: fetch64(buf, 184).wrapping_add(seed),
        f: 0,
        g: 0,
        h: c.wrapping_add(d),
        x: seed,
        y: 0,
        z: 0,
    };

    let iters = len / BLOCK;
    let mut remaining = len - iters * BLOCK;
    let mut at = 0;
    for _ in 0..iters {
        s.chunk::<C>(buf, at, 0);
        permute3(&mut s.a, &mut s.h, &mut s.c);
        s.chunk::<C>(buf, at + CHUNK, 33);
        permute3(&mut s.a, &mut s.h, &mut s.f);
        s.chunk::<C>(buf, at + 2 * CHUNK, 0);
        permute3(&mut s.b, &mut s.h, &mut s.f);
        s.chunk::<C>(buf, at + 3 * CHUNK, 42);
        permute3(&mut s.b, &mut s.h, &mut s.d);
        s.chunk::<C>(buf, at + 4 * CHUNK, 0);
        permute3(&mut s.b, &mut s.h, &mut s.e);
        s.chunk::<C>(buf, at + 5 * CHUNK, 33);
        permute3(&mut s.a, &mut s.h, &mut s.e);
        at += BLOCK;
    }

    while remaining >= CHUNK {
        s.chunk::<C>(buf, at, 29);
        s.e ^= s.a.rotate_right(20);
        s.h = s.h.wrapping_add(s.b.rotate_right(30));
        s.g ^= s.c.rotate_right(40);
        s.f = s.f.wrapping_add(s.d.rotate_right(34));
        permute3(&mut s.c, &mut s.h, &mut s.g);
        at += CHUNK;
        remaining -= CHUNK;
    }
    if remaining > 0 {
        // Final chunk overlaps bytes that were already consumed.
        s.chunk::<C>(buf, at + remaining - CHUNK, 33);
        s.e ^= s.a.rotate_right(43);
        s.h = s.h.wrapping_add(s.b.rotate_right(42));
        s.g ^= s.c.rotate_right(41);
        s.f = s.f.wrapping_add(s.d.rotate_right(40));
    }

    let State {
        mut a,
        mut b,
        mut c,
        mut d,
        mut e,
        f,
        mut g,
        mut h,
        mut x,
        mut y,
        mut z,
    } = s;
    result[0] ^= h;
    result[1] ^= g;
    g = g.wrapping_add(h);
    a = hash_len16(a, g.wrapping_add(z));
    x = x.wrapping_add(y << 32);
    b = b.wrapping_add(x);
    c = hash_len16(c, z).wrapping_add(h);
    d = hash_len16(d, e.wrapping_add(result[0]));
    g = g.wrapping_add(e);
    h = h.wrapping_add(hash_len16(x, f));
    e = hash_len16(a, d).wrapping_add(g);
    z = hash_len16(b, c).wrapping_add(a);
    y = hash_len16(g, h).wrapping_add(c);
    result[0] = e.wrapping_add(z).wrapping_add(y).wrapping_add(x);
    a = shift_mix(a.wrapping_add(y).wrapping_mul(K0))
        .wrapping_mul(K0)
        .wrapping_add(b);
    result[1] = result[1].wrapping_add(a).wrapping_add(result[0]);
    a = shift_mix(a.wrapping_mul(K0)).wrapping_mul(K0).wrapping_add(c);
    result[2] = a.wrapping_add(result[1]);
    a = shift_mix(a.wrapping_add(e).wrapping_mul(K0)).wrapping_mul(K0);
    result[3] = a.wrapping_add(result[2]);
    result
}

/// Short inputs are zero-padded to one block; the length goes into the seed.
#[inline(always)]
fn crc256_short<C: CrcRound>(buf: &[u8]) -> [u64; 4] {
    let mut padded = [0u8; BLOCK];
    padded[..buf.len()].copy_from_slice(buf);
    crc256_long::<C>(&padded, !(buf.len() as u32))
}

#[inline(always)]
pub(crate) fn crc256<C: CrcRound>(buf: &[u8]) -> [u64; 4] {
    if buf.len() >= BLOCK {
        crc256_long::<C>(buf, 0)
    } else {
        crc256_short::<C>(buf)
    }
}

pub(crate) fn hash_crc128_with_seed(buf: &[u8], seed: Uint128) -> Uint128 {
    if buf.len() <= CRC128_THRESHOLD {
        return hash128_with_seed(buf, seed);
    }
    let result = CrcBackend::detect().crc256(buf);
    let u = seed.high().wrapping_add(result[0]);
    let v = seed.low().wrapping_add(result[1]);
    Uint128::new(
        hash_len16(u, v.wrapping_add(result[2])),
        hash_len16(v.rotate_right(32), u.wrapping_mul(K0).wrapping_add(result[3])),
    )
}

pub(crate) fn hash_crc128(buf: &[u8]) -> Uint128 {
    if buf.len() <= CRC128_THRESHOLD {
        return hash128(buf);
    }
    let result = CrcBackend::detect().crc256(buf);
    Uint128::new(result[2], result[3])
}
