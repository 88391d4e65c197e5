// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fermata_core::errors::Result;
use fermata_core::io::BitReader;

use crate::aac::common::{validate, NSAMPS_LONG};

/// Pulse data: up to four single-coefficient corrections applied to the quantized spectrum of
/// a long window (ISO/IEC 14496-3 4.6.3.3).
#[derive(Clone, Copy)]
pub struct Pulse {
    number_pulse: usize,
    start_sfb: usize,
    offset: [u8; 4],
    amp: [u8; 4],
}

impl Pulse {
    pub fn read(bs: &mut BitReader<'_>) -> Result<Option<Self>> {
        let pulse_data_present = bs.read_bit()?;

        if !pulse_data_present {
            return Ok(None);
        }

        let number_pulse = bs.read_bits_leq32(2)? as usize + 1;
        let start_sfb = bs.read_bits_leq32(6)? as usize;

        let mut offset = [0u8; 4];
        let mut amp = [0u8; 4];

        for i in 0..number_pulse {
            offset[i] = bs.read_bits_leq32(5)? as u8;
            amp[i] = bs.read_bits_leq32(4)? as u8;
        }

        Ok(Some(Self { number_pulse, start_sfb, offset, amp }))
    }

    /// Adds the pulse amplitudes onto the quantized coefficients, each in the direction of the
    /// coefficient's sign. Offsets accumulate from the start of `start_sfb`.
    pub fn apply(&self, sfb_tab: &[i16], coefs: &mut [i32; NSAMPS_LONG]) -> Result<()> {
        validate!(self.start_sfb < sfb_tab.len());

        let mut k = sfb_tab[self.start_sfb] as usize;

        for i in 0..self.number_pulse {
            k += self.offset[i] as usize;
            validate!(k < NSAMPS_LONG);

            let amp = i32::from(self.amp[i]);
            if coefs[k] > 0 {
                coefs[k] += amp;
            }
            else {
                coefs[k] -= amp;
            }
        }

        Ok(())
    }
}
