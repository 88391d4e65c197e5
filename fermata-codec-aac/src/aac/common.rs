// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub const MAX_WINDOWS: usize = 8;
pub const MAX_SFB_SHORT: usize = 15;
pub const MAX_SF_BANDS: usize = MAX_SFB_SHORT * MAX_WINDOWS;
pub const MAX_MS_MASK_BYTES: usize = (MAX_SF_BANDS + 7) >> 3;

pub const NSAMPS_LONG: usize = 1024;
pub const NSAMPS_SHORT: usize = 128;
pub const NWINDOWS_SHORT: usize = 8;

pub const ONLY_LONG_SEQUENCE: u8 = 0;
pub const LONG_START_SEQUENCE: u8 = 1;
pub const EIGHT_SHORT_SEQUENCE: u8 = 2;
pub const LONG_STOP_SEQUENCE: u8 = 3;

/// The 3-bit id_syn_element codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementId {
    /// Single channel element.
    Sce = 0,
    /// Channel pair element.
    Cpe = 1,
    /// Coupling channel element.
    Cce = 2,
    /// Low frequency effects element.
    Lfe = 3,
    /// Data stream element.
    Dse = 4,
    /// Program config element.
    Pce = 5,
    /// Fill element.
    Fil = 6,
    /// End of raw data block.
    End = 7,
}

/// Channels contributed by each element id.
const ELEMENT_CHANNELS: [usize; 8] = [1, 2, 0, 1, 0, 0, 0, 0];

impl ElementId {
    pub fn from_bits(bits: u32) -> Option<ElementId> {
        match bits {
            0 => Some(ElementId::Sce),
            1 => Some(ElementId::Cpe),
            2 => Some(ElementId::Cce),
            3 => Some(ElementId::Lfe),
            4 => Some(ElementId::Dse),
            5 => Some(ElementId::Pce),
            6 => Some(ElementId::Fil),
            7 => Some(ElementId::End),
            _ => None,
        }
    }

    /// Output channels this element carries.
    pub fn channels(self) -> usize {
        ELEMENT_CHANNELS[self as usize]
    }
}

// Fixed-point bookkeeping. Scale factors are stored with a +100 bias; dequantized spectra
// carry FBITS_OUT_DQ fractional bits; the DCT-IV and the windowing each cost one, leaving
// FBITS_OUT_IMDCT at the overlap-add.
pub const SF_OFFSET: i32 = 100;
pub const SF_DQ_OFFSET: i32 = 15;
pub const FBITS_OUT_DQ: i32 = 20;
pub const FBITS_OUT_DQ_OFF: i32 = FBITS_OUT_DQ - SF_DQ_OFFSET;
pub const FBITS_LOST_DCT4: i32 = 1;
pub const FBITS_LOST_WND: i32 = 1;
pub const FBITS_OUT_IMDCT: i32 = FBITS_OUT_DQ - FBITS_LOST_DCT4 - FBITS_LOST_WND;
pub const RND_VAL: i32 = 1 << (FBITS_OUT_IMDCT - 1);

/// A Linear Congruential Generator (LCG) pseudo-random number generator from Numerical
/// Recipes, used to synthesize perceptual-noise-substitution spectra.
#[derive(Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(state: u32) -> Self {
        Lcg { state }
    }

    #[inline(always)]
    pub fn next(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state as i32
    }
}

macro_rules! validate {
    ($a:expr) => {
        if !$a {
            log::error!("check failed at {}:{}", file!(), line!());
            return fermata_core::errors::decode_error("aac: invalid data");
        }
    };
}

pub(crate) use validate;
