// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `vlc` module provides a canonical-Huffman scalar decoder.
//!
//! A codebook is described by the number of codes of each length 1..=20 (`counts`), an offset
//! into a flat value table shared by related codebooks, and the length of its longest code.
//! Decoding walks the lengths accumulating the first code of each length; canonical ordering
//! guarantees a hit within `max_bits` steps for a complete code.

use crate::errors::Result;
use crate::io::BitReader;

/// The longest code length representable by a codebook description.
pub const MAX_HUFF_BITS: usize = 20;

/// Shape of one canonical-Huffman codebook.
pub struct CodebookInfo {
    /// Length in bits of the longest code in the book.
    pub max_bits: u32,
    /// Number of codes of each length, 1-bit codes first.
    pub counts: [u8; MAX_HUFF_BITS],
    /// Starting index of this book's values within the shared value table.
    pub offset: usize,
}

/// Decodes one scalar from a left-justified 32-bit window of peeked bits.
///
/// Returns the decoded value and the number of code bits it occupied. The window must hold at
/// least `info.max_bits` valid bits.
pub fn decode_scalar(table: &[i16], info: &CodebookInfo, packed: u32) -> (i32, u32) {
    let mut map = info.offset;
    let mut start = 0u32;
    let mut count = 0u32;
    let mut shift = 32;
    let mut len = 0;

    let index = loop {
        start = (start + count) << 1;
        map += count as usize;
        count = u32::from(info.counts[len]);
        len += 1;
        shift -= 1;
        let t = (packed >> shift).wrapping_sub(start);
        if t < count {
            break t;
        }
    };

    (i32::from(table[map + index as usize]), len as u32)
}

/// Reads one scalar from the bitstream using the given codebook.
///
/// Peeks `info.max_bits` bits, decodes, then consumes exactly the bits the code occupied.
pub fn read_scalar(bs: &mut BitReader<'_>, table: &[i16], info: &CodebookInfo) -> Result<i32> {
    let packed = bs.peek_bits_leq32(info.max_bits)? << (32 - info.max_bits);
    let (value, len) = decode_scalar(table, info, packed);
    bs.ignore_bits(u64::from(len))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A complete canonical code over { a:0, b:10, c:110, d:111 }.
    const TEST_TABLE: [i16; 4] = [7, 8, 9, 10];
    const TEST_INFO: CodebookInfo = CodebookInfo {
        max_bits: 3,
        counts: [1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        offset: 0,
    };

    #[test]
    fn verify_decode_scalar() {
        assert_eq!(decode_scalar(&TEST_TABLE, &TEST_INFO, 0b000 << 29), (7, 1));
        assert_eq!(decode_scalar(&TEST_TABLE, &TEST_INFO, 0b100 << 29), (8, 2));
        assert_eq!(decode_scalar(&TEST_TABLE, &TEST_INFO, 0b110 << 29), (9, 3));
        assert_eq!(decode_scalar(&TEST_TABLE, &TEST_INFO, 0b111 << 29), (10, 3));
    }

    #[test]
    fn verify_read_scalar_consumes_code_bits_only() {
        // b (10), d (111), a (0), then 3 literal bits 011.
        let mut bs = BitReader::new(&[0b10_111_0_01, 0b1_0000000]);
        assert_eq!(read_scalar(&mut bs, &TEST_TABLE, &TEST_INFO).unwrap(), 8);
        assert_eq!(read_scalar(&mut bs, &TEST_TABLE, &TEST_INFO).unwrap(), 10);
        assert_eq!(read_scalar(&mut bs, &TEST_TABLE, &TEST_INFO).unwrap(), 7);
        assert_eq!(bs.read_bits_leq32(3).unwrap(), 0b011);
    }
}
