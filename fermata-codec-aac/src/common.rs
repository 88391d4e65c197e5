// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The stream framings the decoder distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Not yet probed.
    Unknown,
    /// Audio Data Transport Stream framing, the self-synchronizing header per raw data block.
    Adts,
    /// Audio Data Interchange Format; recognized but not decoded.
    Adif,
    /// Raw data blocks with caller-supplied channel count and sample rate.
    Raw,
}

/// Channels supported by the LC-stereo scope of this decoder.
pub const MAX_CHANNELS: usize = 2;

/// PCM samples produced per channel per raw data block.
pub const SAMPLES_PER_FRAME: usize = 1024;

pub const NUM_SAMPLE_RATES: usize = 12;

/// Sampling rates by sampling-frequency index (ISO/IEC 14496-3 table 1.18).
pub const SAMPLE_RATE_MAP: [u32; NUM_SAMPLE_RATES] =
    [96000, 88200, 64000, 48000, 44100, 32000, 24000, 22050, 16000, 12000, 11025, 8000];

/// Channels per ADTS channel configuration. Configuration 0 leaves the count to an implicit
/// mapping pass over the first raw data block.
pub const CHANNEL_MAP: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 8];

/// Audio object profiles carried in the 2-bit ADTS profile field.
pub const PROFILE_MAIN: u8 = 0;
pub const PROFILE_LC: u8 = 1;
pub const PROFILE_SSR: u8 = 2;
