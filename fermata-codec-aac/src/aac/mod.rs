// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fermata_core::errors::{decode_error, unsupported_error, Result};
use fermata_core::io::BitReader;

use crate::adts::AdtsHeader;
use crate::common::*;

mod codebooks;
mod common;
mod cpe;
mod dsp;
mod ics;
mod tables;

use common::*;
use cpe::ChannelPair;

use log::debug;

/// What one decoded raw data block produced.
#[derive(Clone, Copy, Debug)]
pub struct Decoded {
    /// Total interleaved samples written, `SAMPLES_PER_FRAME` per channel.
    pub samples: usize,
    pub channels: usize,
    pub sample_rate: u32,
    /// Input bytes consumed, including any skipped garbage before the sync word.
    pub bytes_consumed: usize,
}

/// The AAC-LC decoder.
///
/// Owns all state persisting across frames: stream format and parameters, the per-output-
/// channel overlap buffers, and the noise-substitution generator. One instance decodes one
/// stream; feed it successive buffers and it reports how many bytes each call consumed.
pub struct Decoder {
    format: Format,
    profile: u8,
    sampling_rate_index: usize,
    channels: usize,
    use_implicit_channel_map: bool,
    adts_blocks_left: u8,

    pair: ChannelPair,
    lcg: Lcg,

    overlap: [[i32; NSAMPS_LONG]; MAX_CHANNELS],
    prev_window_shape: [u8; MAX_CHANNELS],
}

impl Decoder {
    /// A decoder that probes the stream format (ADTS, or ADIF which is rejected) on the first
    /// call.
    pub fn new() -> Self {
        Self {
            format: Format::Unknown,
            profile: PROFILE_LC,
            sampling_rate_index: 0,
            channels: 0,
            use_implicit_channel_map: false,
            adts_blocks_left: 0,
            pair: ChannelPair::new(),
            lcg: Lcg::new(0),
            overlap: [[0; NSAMPS_LONG]; MAX_CHANNELS],
            prev_window_shape: [0; MAX_CHANNELS],
        }
    }

    /// A decoder for headerless raw data blocks with caller-supplied parameters.
    pub fn new_raw(channels: usize, sample_rate: u32) -> Result<Self> {
        let sampling_rate_index = match SAMPLE_RATE_MAP.iter().position(|&r| r == sample_rate) {
            Some(index) => index,
            None => return decode_error("aac: unknown sampling frequency index"),
        };

        if channels == 0 || channels > MAX_CHANNELS {
            return decode_error("aac: unknown channel configuration");
        }

        let mut decoder = Decoder::new();
        decoder.format = Format::Raw;
        decoder.profile = PROFILE_LC;
        decoder.sampling_rate_index = sampling_rate_index;
        decoder.channels = channels;
        Ok(decoder)
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        SAMPLE_RATE_MAP.get(self.sampling_rate_index).copied().unwrap_or(0)
    }

    /// Decodes one raw data block from `data` into `pcm` as interleaved s16.
    ///
    /// `pcm` must hold at least `SAMPLES_PER_FRAME * channels` samples. On error the
    /// persistent state may be partially updated; the stream should be resynchronized by
    /// feeding the next buffer (ADTS) or the decoder rebuilt (raw).
    pub fn decode(&mut self, data: &[u8], pcm: &mut [i16]) -> Result<Decoded> {
        let mut bs = BitReader::new(data);

        if self.format == Format::Unknown {
            if bs.peek_bits_leq32(32)? == u32::from_be_bytes(*b"ADIF") {
                self.format = Format::Adif;
            }
            else {
                // Assume ADTS by default.
                self.format = Format::Adts;
            }
        }

        if self.format == Format::Adif {
            return unsupported_error("aac: adif framing");
        }

        if self.format == Format::Adts {
            // 1 to 4 raw data blocks follow each header.
            if self.adts_blocks_left == 0 {
                AdtsHeader::sync(&mut bs)?;
                let header = AdtsHeader::read(&mut bs)?;
                self.apply_adts_header(&header)?;

                if self.channels == 0 {
                    // Channel configuration 0: dry-decode this block to count the element
                    // channels, then decode it for real.
                    self.derive_implicit_channel_mapping(bs)?;
                }
            }
            self.adts_blocks_left -= 1;
        }

        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return decode_error("aac: unknown channel configuration");
        }
        if self.sampling_rate_index >= NUM_SAMPLE_RATES {
            return decode_error("aac: unknown sampling frequency index");
        }
        validate!(pcm.len() >= SAMPLES_PER_FRAME * self.channels);

        let sri = self.sampling_rate_index;
        let mut base_channel = 0;

        loop {
            let id = match ElementId::from_bits(bs.read_bits_leq32(3)?) {
                Some(id) => id,
                None => return decode_error("aac: unknown block id"),
            };
            self.pair.common_window = false;

            match id {
                ElementId::Sce | ElementId::Lfe => {
                    bs.ignore_bits(4)?;
                }
                ElementId::Cpe => {
                    bs.ignore_bits(4)?;
                    self.pair.decode_cpe_header(&mut bs, sri)?;
                }
                ElementId::Cce => return unsupported_error("aac: coupling channel element"),
                ElementId::Dse => skip_data_stream_element(&mut bs)?,
                ElementId::Pce => skip_program_config_element(&mut bs)?,
                ElementId::Fil => skip_fill_element(&mut bs)?,
                ElementId::End => {}
            }

            let element_channels = id.channels();
            if base_channel + element_channels > MAX_CHANNELS {
                return decode_error("aac: too many channels");
            }

            for ch in 0..element_channels {
                self.pair.decode_noiseless(&mut bs, ch, sri)?;
                self.pair.dequantize(ch, sri);
            }

            if id == ElementId::Cpe {
                self.pair.stereo_process(sri)?;
            }

            for ch in 0..element_channels {
                self.pair.apply_pns(ch, sri, id == ElementId::Cpe, &mut self.lcg)?;
                self.pair.apply_tns(ch, sri, self.profile);

                let out_ch = base_channel + ch;
                self.pair.apply_imdct(
                    ch,
                    out_ch,
                    self.channels,
                    &mut self.overlap[out_ch],
                    &mut self.prev_window_shape[out_ch],
                    pcm,
                );
            }

            base_channel += element_channels;

            if id == ElementId::End {
                break;
            }
        }

        bs.realign();

        Ok(Decoded {
            samples: SAMPLES_PER_FRAME * self.channels,
            channels: self.channels,
            sample_rate: SAMPLE_RATE_MAP[sri],
            bytes_consumed: bs.bytes_consumed(),
        })
    }

    /// Zeroes the overlap state so the next frame starts a fresh stream segment, e.g. after a
    /// seek. Stream parameters are kept.
    pub fn reset(&mut self) {
        self.overlap = [[0; NSAMPS_LONG]; MAX_CHANNELS];
        self.prev_window_shape = [0; MAX_CHANNELS];
        self.adts_blocks_left = 0;
    }

    fn apply_adts_header(&mut self, adts: &AdtsHeader) -> Result<()> {
        self.sampling_rate_index = adts.sampling_rate_index as usize;
        if self.sampling_rate_index >= NUM_SAMPLE_RATES {
            return decode_error("aac: unknown sampling frequency index");
        }

        if adts.profile > PROFILE_SSR {
            return decode_error("aac: reserved profile");
        }
        self.profile = adts.profile;

        if !self.use_implicit_channel_map {
            self.channels = CHANNEL_MAP[adts.channel_config as usize];
        }

        self.adts_blocks_left = adts.num_raw_data_blocks;
        Ok(())
    }

    /// Counts the channels of one raw data block by walking its elements without producing
    /// output. Takes the reader by value so the caller's position is untouched.
    fn derive_implicit_channel_mapping(&mut self, mut bs: BitReader<'_>) -> Result<()> {
        let sri = self.sampling_rate_index;
        let mut channels = 0;

        loop {
            let id = match ElementId::from_bits(bs.read_bits_leq32(3)?) {
                Some(id) => id,
                None => return decode_error("aac: unknown block id"),
            };
            self.pair.common_window = false;

            match id {
                ElementId::Sce | ElementId::Lfe => {
                    bs.ignore_bits(4)?;
                }
                ElementId::Cpe => {
                    bs.ignore_bits(4)?;
                    self.pair.decode_cpe_header(&mut bs, sri)?;
                }
                ElementId::Cce => return unsupported_error("aac: coupling channel element"),
                ElementId::Dse => skip_data_stream_element(&mut bs)?,
                ElementId::Pce => skip_program_config_element(&mut bs)?,
                ElementId::Fil => skip_fill_element(&mut bs)?,
                ElementId::End => {}
            }

            let element_channels = id.channels();
            for ch in 0..element_channels {
                self.pair.decode_noiseless(&mut bs, ch, sri)?;
            }
            channels += element_channels;

            if id == ElementId::End {
                break;
            }
        }

        validate!(channels > 0);
        debug!("implicit channel mapping: {} channels", channels);

        self.channels = channels;
        self.use_implicit_channel_map = true;
        Ok(())
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

fn skip_data_stream_element(bs: &mut BitReader<'_>) -> Result<()> {
    bs.ignore_bits(4)?;

    let align = bs.read_bit()?;
    let mut count = bs.read_bits_leq32(8)? as u64;
    if count == 255 {
        count += bs.read_bits_leq32(8)? as u64;
    }
    if align {
        bs.realign();
    }

    bs.ignore_bits(count * 8)
}

fn skip_fill_element(bs: &mut BitReader<'_>) -> Result<()> {
    let mut count = bs.read_bits_leq32(4)? as u64;
    if count == 15 {
        count += bs.read_bits_leq32(8)? as u64 - 1;
    }

    bs.ignore_bits(count * 8)
}

/// Parses past a program config element. The contents are not used: the channel layout comes
/// from the ADTS channel configuration or the implicit mapping.
fn skip_program_config_element(bs: &mut BitReader<'_>) -> Result<()> {
    // Instance tag, profile, sampling rate index.
    bs.ignore_bits(10)?;

    let num_fce = bs.read_bits_leq32(4)? as u64;
    let num_sce = bs.read_bits_leq32(4)? as u64;
    let num_bce = bs.read_bits_leq32(4)? as u64;
    let num_lce = bs.read_bits_leq32(2)? as u64;
    let num_ade = bs.read_bits_leq32(3)? as u64;
    let num_cce = bs.read_bits_leq32(4)? as u64;

    if bs.read_bit()? {
        // Mono mixdown element number.
        bs.ignore_bits(4)?;
    }
    if bs.read_bit()? {
        // Stereo mixdown element number.
        bs.ignore_bits(4)?;
    }
    if bs.read_bit()? {
        // Matrix mixdown index and pseudo-surround flag.
        bs.ignore_bits(3)?;
    }

    bs.ignore_bits(5 * (num_fce + num_sce + num_bce + num_cce))?;
    bs.ignore_bits(4 * (num_lce + num_ade))?;

    bs.realign();

    let comment_bytes = bs.read_bits_leq32(8)? as u64;
    bs.ignore_bits(comment_bytes * 8)
}
