use crate::mix::K_MUL;

/// A 128-bit hash value, kept as two explicit 64-bit halves.
///
/// The halves are never interchangeable: the seeded functions consume `low`
/// and `high` asymmetrically, so `Uint128::new(a, b)` and `Uint128::new(b, a)`
/// are different seeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uint128 {
    // Field order makes the derived `Ord` compare `high` first.
    high: u64,
    low: u64,
}

impl Uint128 {
    #[inline(always)]
    pub const fn new(low: u64, high: u64) -> Self {
        Self { high, low }
    }

    #[inline(always)]
    pub const fn low(&self) -> u64 {
        self.low
    }

    #[inline(always)]
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Reduces the value to 64 bits with the Murmur-inspired fold used by
    /// every CityHash variant to combine two words.
    #[inline(always)]
    pub const fn fold(&self) -> u64 {
        let mut a = (self.low ^ self.high).wrapping_mul(K_MUL);
        a ^= a >> 47;
        let mut b = (self.high ^ a).wrapping_mul(K_MUL);
        b ^= b >> 47;
        b.wrapping_mul(K_MUL)
    }
}

impl From<u128> for Uint128 {
    #[inline]
    fn from(v: u128) -> Self {
        Self::new(v as u64, (v >> 64) as u64)
    }
}

impl From<Uint128> for u128 {
    #[inline]
    fn from(v: Uint128) -> Self {
        ((v.high as u128) << 64) | v.low as u128
    }
}

impl From<(u64, u64)> for Uint128 {
    /// Interprets the tuple as `(low, high)`.
    #[inline]
    fn from((low, high): (u64, u64)) -> Self {
        Self::new(low, high)
    }
}

impl From<Uint128> for (u64, u64) {
    #[inline]
    fn from(v: Uint128) -> Self {
        (v.low, v.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_keep_their_position() {
        let v = Uint128::new(1, 2);
        assert_eq!(v.low(), 1);
        assert_eq!(v.high(), 2);
        assert_ne!(v, Uint128::new(2, 1));
        assert_eq!(<(u64, u64)>::from(v), (1, 2));
    }

    #[test]
    fn native_conversion() {
        let n: u128 = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210;
        let v = Uint128::from(n);
        assert_eq!(v.low(), 0xfedc_ba98_7654_3210);
        assert_eq!(v.high(), 0x0123_4567_89ab_cdef);
        assert_eq!(u128::from(v), n);
        assert!(Uint128::new(u64::MAX, 0) < Uint128::new(0, 1));
    }

    #[test]
    fn fold_is_not_symmetric() {
        assert_ne!(Uint128::new(0, 1).fold(), Uint128::new(1, 0).fold());
        assert_eq!(Uint128::new(0, 0).fold(), 0);
    }
}
