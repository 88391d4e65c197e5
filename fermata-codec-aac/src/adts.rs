// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fermata_core::errors::{end_of_bitstream_error, unreachable_error, Result};
use fermata_core::io::BitReader;

/// One parsed ADTS fixed+variable header (ISO/IEC 14496-3 1.A.2).
#[derive(Clone, Copy, Debug)]
pub struct AdtsHeader {
    /// MPEG-2 (1) or MPEG-4 (0) stream.
    pub id: u8,
    pub layer: u8,
    /// Set when no CRC follows the header.
    pub protection_absent: bool,
    pub profile: u8,
    pub sampling_rate_index: u8,
    pub private_bit: u8,
    pub channel_config: u8,
    pub original_copy: u8,
    pub home: u8,
    pub copyright_id_bit: u8,
    pub copyright_id_start: u8,
    /// Total frame length in bytes, header included.
    pub frame_length: u32,
    pub buffer_fullness: u32,
    /// Raw data blocks in this frame (the transmitted field plus one).
    pub num_raw_data_blocks: u8,
    pub crc_check_word: Option<u16>,
}

impl AdtsHeader {
    /// Advances a byte-aligned reader to the next ADTS sync word without consuming it: after
    /// this returns, the sync word is the next 12 bits. Fails with `EndOfBitstream` when no
    /// sync word remains, so the caller can refill and retry.
    pub fn sync(bs: &mut BitReader<'_>) -> Result<()> {
        if !bs.is_aligned() {
            return unreachable_error();
        }

        let data = bs.remaining_bytes();
        match data.windows(2).position(|w| w[0] == 0xff && w[1] & 0xf0 == 0xf0) {
            Some(pos) => bs.skip_bytes(pos),
            None => end_of_bitstream_error(),
        }
    }

    /// Parses the header at the current position. The reader must sit exactly on the sync
    /// word.
    pub fn read(bs: &mut BitReader<'_>) -> Result<AdtsHeader> {
        let sync = bs.read_bits_leq32(12)?;
        if sync != 0xfff {
            return unreachable_error();
        }

        let id = bs.read_bits_leq32(1)? as u8;
        let layer = bs.read_bits_leq32(2)? as u8;
        let protection_absent = bs.read_bit()?;
        let profile = bs.read_bits_leq32(2)? as u8;
        let sampling_rate_index = bs.read_bits_leq32(4)? as u8;
        let private_bit = bs.read_bits_leq32(1)? as u8;
        let channel_config = bs.read_bits_leq32(3)? as u8;
        let original_copy = bs.read_bits_leq32(1)? as u8;
        let home = bs.read_bits_leq32(1)? as u8;

        let copyright_id_bit = bs.read_bits_leq32(1)? as u8;
        let copyright_id_start = bs.read_bits_leq32(1)? as u8;
        let frame_length = bs.read_bits_leq32(13)?;
        let buffer_fullness = bs.read_bits_leq32(11)?;
        let num_raw_data_blocks = bs.read_bits_leq32(2)? as u8 + 1;

        let crc_check_word = if !protection_absent {
            Some(bs.read_bits_leq32(16)? as u16)
        }
        else {
            None
        };

        if !bs.is_aligned() {
            return unreachable_error();
        }

        Ok(AdtsHeader {
            id,
            layer,
            protection_absent,
            profile,
            sampling_rate_index,
            private_bit,
            channel_config,
            original_copy,
            home,
            copyright_id_bit,
            copyright_id_start,
            frame_length,
            buffer_fullness,
            num_raw_data_blocks,
            crc_check_word,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AdtsHeader;
    use fermata_core::io::BitReader;

    #[test]
    fn verify_sync_scans_past_garbage() {
        let data = [0x00, 0xfe, 0xff, 0x0f, 0xff, 0xf1, 0x00];
        let mut bs = BitReader::new(&data);
        AdtsHeader::sync(&mut bs).unwrap();
        // The sync word itself must still be unread.
        assert_eq!(bs.peek_bits_leq32(12).unwrap(), 0xfff);
        assert_eq!(bs.bytes_consumed(), 4);
    }

    #[test]
    fn verify_sync_requires_two_bytes() {
        let data = [0x12, 0x34, 0xff];
        let mut bs = BitReader::new(&data);
        assert!(AdtsHeader::sync(&mut bs).is_err());
    }
}
