//! Table-driven CRC32-C round, available on every target.
//!
//! Eight bytes are folded per round with slicing-by-8 tables generated at
//! compile time.

use super::CrcRound;

/// Reflected CRC32-C (Castagnoli) polynomial.
const POLY: u32 = 0x82F6_3B78;

static TABLES: [[u32; 256]; 8] = generate_slicing_tables(POLY);

const fn generate_table_0(poly: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ poly;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Table `k` holds the contribution of a byte followed by `k` zero bytes.
const fn generate_slicing_tables(poly: u32) -> [[u32; 256]; 8] {
    let mut tables = [[0u32; 256]; 8];
    tables[0] = generate_table_0(poly);
    let mut k = 1;
    while k < 8 {
        let mut i = 0;
        while i < 256 {
            let prev = tables[k - 1][i];
            tables[k][i] = (prev >> 8) ^ tables[0][(prev & 0xff) as usize];
            i += 1;
        }
        k += 1;
    }
    tables
}

pub(crate) struct Portable;

impl CrcRound for Portable {
    #[inline(always)]
    fn round(crc: u64, v: u64) -> u64 {
        let lo = (crc as u32) ^ (v as u32);
        let hi = (v >> 32) as u32;
        let crc = TABLES[7][(lo & 0xff) as usize]
            ^ TABLES[6][((lo >> 8) & 0xff) as usize]
            ^ TABLES[5][((lo >> 16) & 0xff) as usize]
            ^ TABLES[4][(lo >> 24) as usize]
            ^ TABLES[3][(hi & 0xff) as usize]
            ^ TABLES[2][((hi >> 8) & 0xff) as usize]
            ^ TABLES[1][((hi >> 16) & 0xff) as usize]
            ^ TABLES[0][(hi >> 24) as usize];
        crc as u64
    }
}
