// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A bit-exact fixed-point decoder for MPEG-4 AAC Low Complexity, mono and stereo, framed as
//! ADTS or raw data blocks. ADIF streams are detected and rejected.

mod aac;
mod adts;
mod common;

pub use aac::{Decoded, Decoder};
pub use adts::AdtsHeader;
pub use common::{Format, MAX_CHANNELS, SAMPLES_PER_FRAME};
pub use common::{PROFILE_LC, PROFILE_MAIN, PROFILE_SSR};
