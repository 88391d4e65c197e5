// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temporal noise shaping: an all-pole filter applied in the frequency domain over a span of
//! scale-factor bands, forward or reverse. Coefficients are transmitted quantized at 3 or 4
//! bit resolution, inverse-quantized through the Q31 tables below, and unwound into LPC form
//! in Q20. The filter accumulates in a 64-bit MAC and saturates back to 32 bits.

use fermata_core::errors::Result;
use fermata_core::io::BitReader;
use fermata_core::util::fixed::{fastabs, madd64, mulshift32};

use crate::aac::common::{validate, EIGHT_SHORT_SEQUENCE, NWINDOWS_SHORT};
use crate::aac::ics::IcsInfo;
use crate::common::NUM_SAMPLE_RATES;

pub const MAX_TNS_FILTERS: usize = 8;
pub const MAX_TNS_ORDER: usize = 20;
pub const MAX_TNS_COEFS: usize = 60;

const FBITS_LPC_COEFS: i32 = 20;

const SGN_MASK: [i8; 3] = [0x02, 0x04, 0x08];
const NEG_MASK: [i8; 3] = [!0x03, !0x07, !0x0f];

// TNS max bands (table 4.139) and max order (table 4.138), per profile then sampling rate.
const TNS_MAX_BANDS_OFFSET: [usize; 3] = [0, 0, 12];
const TNS_MAX_ORDER_SHORT: [u8; 3] = [7, 7, 7];
const TNS_MAX_ORDER_LONG: [u8; 3] = [20, 12, 12];

/// TNS side info for one channel. Filters are stored flat in transmission order; `num_filt`
/// and `coef_res` are indexed by window, the rest by a running filter cursor.
#[derive(Clone, Copy)]
pub struct TnsData {
    num_filt: [u8; MAX_TNS_FILTERS],
    coef_res: [u8; MAX_TNS_FILTERS],
    length: [u8; MAX_TNS_FILTERS],
    order: [u8; MAX_TNS_FILTERS],
    dir: [u8; MAX_TNS_FILTERS],
    coef: [i8; MAX_TNS_COEFS],
}

impl TnsData {
    pub fn read(bs: &mut BitReader<'_>, window_seq: u8) -> Result<Option<Self>> {
        let tns_data_present = bs.read_bit()?;

        if !tns_data_present {
            return Ok(None);
        }

        let mut t = TnsData {
            num_filt: [0; MAX_TNS_FILTERS],
            coef_res: [0; MAX_TNS_FILTERS],
            length: [0; MAX_TNS_FILTERS],
            order: [0; MAX_TNS_FILTERS],
            dir: [0; MAX_TNS_FILTERS],
            coef: [0; MAX_TNS_COEFS],
        };

        let mut fi = 0;
        let mut di = 0;
        let mut ci = 0;

        if window_seq == EIGHT_SHORT_SEQUENCE {
            for w in 0..NWINDOWS_SHORT {
                t.num_filt[w] = bs.read_bits_leq32(1)? as u8;
                if t.num_filt[w] == 0 {
                    continue;
                }

                t.coef_res[w] = bs.read_bits_leq32(1)? as u8 + 3;
                t.length[fi] = bs.read_bits_leq32(4)? as u8;
                t.order[fi] = bs.read_bits_leq32(3)? as u8;
                if t.order[fi] != 0 {
                    t.dir[di] = bs.read_bits_leq32(1)? as u8;
                    di += 1;
                    let compress = bs.read_bits_leq32(1)?;
                    let coef_bits = u32::from(t.coef_res[w]) - compress;
                    ci = read_filter_coefs(bs, &mut t.coef, ci, t.order[fi], coef_bits)?;
                }
                fi += 1;
            }
        }
        else {
            t.num_filt[0] = bs.read_bits_leq32(2)? as u8;
            if t.num_filt[0] != 0 {
                t.coef_res[0] = bs.read_bits_leq32(1)? as u8 + 3;
            }

            for _ in 0..t.num_filt[0] {
                t.length[fi] = bs.read_bits_leq32(6)? as u8;
                t.order[fi] = bs.read_bits_leq32(5)? as u8;
                if t.order[fi] != 0 {
                    t.dir[di] = bs.read_bits_leq32(1)? as u8;
                    di += 1;
                    let compress = bs.read_bits_leq32(1)?;
                    let coef_bits = u32::from(t.coef_res[0]) - compress;
                    ci = read_filter_coefs(bs, &mut t.coef, ci, t.order[fi], coef_bits)?;
                }
                fi += 1;
            }
        }

        Ok(Some(t))
    }

    /// Filters the channel's spectrum in place. Returns the guard-bit mask of the words the
    /// filter touched.
    pub fn apply(
        &self,
        info: &IcsInfo,
        sr_index: usize,
        profile: u8,
        sfb_tab: &[i16],
        coefs: &mut [i32],
    ) -> i32 {
        let profile = profile as usize;

        let (num_windows, window_len, num_sfb, max_order, max_band_tab): (_, _, _, _, &[u8]) =
            if info.window_sequence == EIGHT_SHORT_SEQUENCE {
                (
                    NWINDOWS_SHORT,
                    128,
                    crate::aac::tables::SFB_BAND_TOTAL_SHORT[sr_index] as usize,
                    TNS_MAX_ORDER_SHORT[profile] as usize,
                    &TNS_MAX_BANDS_SHORT[TNS_MAX_BANDS_OFFSET[profile]..],
                )
            }
            else {
                (
                    1,
                    1024,
                    crate::aac::tables::SFB_BAND_TOTAL_LONG[sr_index] as usize,
                    TNS_MAX_ORDER_LONG[profile] as usize,
                    &TNS_MAX_BANDS_LONG[TNS_MAX_BANDS_OFFSET[profile]..],
                )
            };

        let tns_max_band = (max_band_tab[sr_index] as usize).min(info.max_sfb);

        let mut lpc = [0i32; MAX_TNS_ORDER];
        let mut work = [0i32; MAX_TNS_ORDER];

        let mut fi = 0;
        let mut di = 0;
        let mut ci = 0;
        let mut gb_mask = 0;
        let mut base = 0;

        for w in 0..num_windows {
            let mut bottom = num_sfb;
            for _ in 0..self.num_filt[w] {
                let top = bottom;
                bottom = top.saturating_sub(self.length[fi] as usize);
                let order = (self.order[fi] as usize).min(max_order);
                fi += 1;

                if order == 0 {
                    continue;
                }

                let start = sfb_tab[bottom.min(tns_max_band)] as usize;
                let end = sfb_tab[top.min(tns_max_band)] as usize;

                if end > start {
                    let dir = self.dir[di] != 0;
                    di += 1;

                    decode_lpc_coefs(&mut lpc, &mut work, &self.coef[ci..], self.coef_res[w], order);
                    gb_mask |=
                        filter_region(&mut coefs[base + start..base + end], dir, order, &lpc, &mut work);
                }
                ci += order;
            }
            base += window_len;
        }

        gb_mask
    }
}

fn read_filter_coefs(
    bs: &mut BitReader<'_>,
    coef: &mut [i8; MAX_TNS_COEFS],
    mut ci: usize,
    order: u8,
    coef_bits: u32,
) -> Result<usize> {
    validate!(ci + order as usize <= MAX_TNS_COEFS);

    let s = SGN_MASK[coef_bits as usize - 2];
    let n = NEG_MASK[coef_bits as usize - 2];

    for _ in 0..order {
        let mut c = bs.read_bits_leq32(coef_bits)? as i8;
        if c & s != 0 {
            c |= n;
        }
        coef[ci] = c;
        ci += 1;
    }

    Ok(ci)
}

/// Converts transmitted reflection-style coefficients into direct-form LPC coefficients, Q20.
fn decode_lpc_coefs(
    lpc: &mut [i32; MAX_TNS_ORDER],
    work: &mut [i32; MAX_TNS_ORDER],
    coef: &[i8],
    coef_res: u8,
    order: usize,
) {
    let inv_quant_tab: &[i32; 16] = match coef_res {
        3 => &INV_QUANT_3,
        4 => &INV_QUANT_4,
        _ => return,
    };

    for m in 0..order {
        let t = inv_quant_tab[(coef[m] & 0x0f) as usize];
        for i in 0..m {
            work[i] = lpc[i] - (mulshift32(t, lpc[m - i - 1]) << 1);
        }
        lpc[..m].copy_from_slice(&work[..m]);
        lpc[m] = t >> (31 - FBITS_LPC_COEFS);
    }
}

/// The all-pole filter over one region, forward or reverse. The accumulator runs in Q20 with
/// 64-bit headroom and saturates on overflow of the Q20 window.
fn filter_region(
    region: &mut [i32],
    reverse: bool,
    order: usize,
    lpc: &[i32; MAX_TNS_ORDER],
    work: &mut [i32; MAX_TNS_ORDER],
) -> i32 {
    work[..order].fill(0);

    let mut gb_mask = 0;
    let size = region.len();

    for step in 0..size {
        let idx = if reverse { size - 1 - step } else { step };

        let mut sum = i64::from(region[idx]) << FBITS_LPC_COEFS;
        for j in (1..order).rev() {
            sum = madd64(sum, work[j], lpc[j]);
            work[j] = work[j - 1];
        }
        sum = madd64(sum, work[0], lpc[0]);

        let hi = (sum >> 32) as i32;
        let mut y = (sum >> FBITS_LPC_COEFS) as i32;
        if (hi >> 31) != (hi >> (FBITS_LPC_COEFS - 1)) {
            y = (hi >> 31) ^ 0x7fffffff;
        }

        work[0] = y;
        region[idx] = y;
        gb_mask |= fastabs(y);
    }

    gb_mask
}

static INV_QUANT_3: [i32; 16] = [
    0x00000000, -0x3789809b, -0x64130dd4, -0x7cca7015, -0x7cca7015, -0x64130dd4, -0x3789809b, 0x00000000,
    0x2bc750e9, 0x5246dd49, 0x6ed9eba1, 0x7e0e2e32, 0x7e0e2e32, 0x6ed9eba1, 0x5246dd49, 0x2bc750e9,
];

static INV_QUANT_4: [i32; 16] = [
    0x00000000, -0x1a9cd9ac, -0x340ff242, -0x4b3c8c12, -0x5f1f5ea1, -0x6ed9eba1, -0x79bc384d, -0x7f4c7e54,
    0x7f7437ad, 0x7b1d1a49, 0x7294b5f2, 0x66256db2, 0x563ba8aa, 0x4362210e, 0x2e3d2abb, 0x17851aad,
];

static TNS_MAX_BANDS_SHORT: [u8; 2 * NUM_SAMPLE_RATES] = [
     9,  9, 10, 14, 14, 14, 14, 14, 14, 14, 14, 14,
     7,  7,  7,  6,  6,  6,  7,  7,  8,  8,  8,  7,
];

static TNS_MAX_BANDS_LONG: [u8; 2 * NUM_SAMPLE_RATES] = [
    31, 31, 34, 40, 42, 51, 46, 46, 42, 42, 42, 39,
    28, 28, 27, 26, 26, 26, 29, 29, 23, 23, 23, 19,
];
