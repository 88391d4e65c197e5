// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fermata_core::errors::{decode_error, unreachable_error, unsupported_error, Result};
use fermata_core::io::BitReader;
use fermata_core::util::fixed::{clip_2n, fastabs, guard_bits, mulshift32};

use fermata_core::dsp::dct::{dct4, Dct4Size};

use crate::aac::common::*;
use crate::aac::dsp;
use crate::aac::ics::pulse::Pulse;
use crate::aac::ics::tns::TnsData;
use crate::aac::ics::{band_layout, max_sfb_allowed, Ics, IcsInfo};
use crate::aac::tables::POW_14_STEREO;

const NOISE_HCB: u8 = 13;
const INTENSITY_HCB2: u8 = 14;
const INTENSITY_HCB: u8 = 15;

/// The per-element decode state: one or two individual channel streams plus the joint-stereo
/// side info of a channel pair element. Single-channel elements use only the left half.
pub struct ChannelPair {
    pub common_window: bool,
    ms_mask_present: u8,
    ms_mask: [u8; MAX_MS_MASK_BYTES],
    info: [IcsInfo; 2],
    pub ics: [Ics; 2],
}

impl ChannelPair {
    pub fn new() -> Self {
        Self {
            common_window: false,
            ms_mask_present: 0,
            ms_mask: [0; MAX_MS_MASK_BYTES],
            info: [IcsInfo::new(); 2],
            ics: [Ics::new(), Ics::new()],
        }
    }

    /// The window info governing a channel: with a common window the second channel shares the
    /// first channel's info.
    fn info_for(&self, ch: usize) -> &IcsInfo {
        if ch == 1 && self.common_window {
            &self.info[0]
        }
        else {
            &self.info[ch]
        }
    }

    /// Channel-pair element header: common-window flag and, when set, the shared ICS info and
    /// the mid-side mask (4.6.8.1).
    pub fn decode_cpe_header(&mut self, bs: &mut BitReader<'_>, sr_index: usize) -> Result<()> {
        self.common_window = bs.read_bit()?;

        if self.common_window {
            self.info[0].decode(bs)?;
            validate!(
                self.info[0].max_sfb <= max_sfb_allowed(self.info[0].window_sequence, sr_index)
            );

            self.ms_mask_present = bs.read_bits_leq32(2)? as u8;

            if self.ms_mask_present == 3 {
                return decode_error("aac: invalid mid-side mask");
            }

            if self.ms_mask_present == 1 {
                self.ms_mask = [0; MAX_MS_MASK_BYTES];
                let mut bit = 0;
                for _ in 0..self.info[0].num_window_groups * self.info[0].max_sfb {
                    let used = bs.read_bit()?;
                    if used {
                        self.ms_mask[bit >> 3] |= 1 << (bit & 0x7);
                    }
                    bit += 1;
                }
            }
        }

        Ok(())
    }

    /// Everything of one channel up to and including the quantized spectrum: ICS info, section
    /// data, scale factors, pulse, TNS, gain control (rejected), spectrum.
    pub fn decode_noiseless(
        &mut self,
        bs: &mut BitReader<'_>,
        ch: usize,
        sr_index: usize,
    ) -> Result<()> {
        self.ics[ch].global_gain = bs.read_bits_leq32(8)? as u8;

        if !self.common_window {
            self.info[ch].decode(bs)?;
            validate!(
                self.info[ch].max_sfb <= max_sfb_allowed(self.info[ch].window_sequence, sr_index)
            );
        }

        let info = *self.info_for(ch);
        let (sfb_tab, _) = band_layout(&info, sr_index);

        let ics = &mut self.ics[ch];
        ics.decode_section_data(bs, &info)?;
        ics.decode_scale_factors(bs, &info)?;

        ics.pulse = Pulse::read(bs)?;
        validate!(ics.pulse.is_none() || info.is_long());

        ics.tns = TnsData::read(bs, info.window_sequence)?;

        let gain_control_data_present = bs.read_bit()?;
        if gain_control_data_present {
            return unsupported_error("aac: gain control data");
        }

        if info.window_sequence == EIGHT_SHORT_SEQUENCE {
            ics.decode_spectrum_short(bs, &info, sfb_tab)
        }
        else {
            ics.decode_spectrum_long(bs, &info, sfb_tab)
        }
    }

    pub fn dequantize(&mut self, ch: usize, sr_index: usize) {
        let info = *self.info_for(ch);
        let (sfb_tab, nsamps) = band_layout(&info, sr_index);
        self.ics[ch].dequantize(&info, sfb_tab, nsamps);
    }

    /// Joint stereo over a common-window pair: mid-side reconstruction and intensity stereo,
    /// per scale-factor band (4.6.8.2).
    pub fn stereo_process(&mut self, sr_index: usize) -> Result<()> {
        if !self.common_window {
            return Ok(());
        }

        if self.ms_mask_present == 0 && !self.ics[1].intensity_used {
            return Ok(());
        }

        let info = self.info[0];
        let (sfb_tab, nsamps) = band_layout(&info, sr_index);

        let ms_mask = self.ms_mask;
        let ms_mask_present = self.ms_mask_present;

        let (left, right) = self.ics.split_at_mut(1);
        let (left, right) = (&mut left[0], &mut right[0]);

        let mut gb = [left.gb_current, right.gb_current];

        let mut pos = 0;
        for g in 0..info.num_window_groups {
            let row = g * info.max_sfb;
            for _ in 0..info.window_group_len[g] {
                stereo_process_group(
                    &mut left.coefs[pos..pos + nsamps],
                    &mut right.coefs[pos..pos + nsamps],
                    sfb_tab,
                    info.max_sfb,
                    ms_mask_present,
                    &ms_mask,
                    row,
                    &right.sfb_cb[row..row + info.max_sfb],
                    &right.scale_factors[row..row + info.max_sfb],
                    &mut gb,
                );
                pos += nsamps;
            }
        }

        left.gb_current = gb[0];
        right.gb_current = gb[1];

        if pos != NSAMPS_LONG {
            return unreachable_error();
        }

        Ok(())
    }

    /// Perceptual noise substitution: synthesizes noise spectra for bands coded with the noise
    /// codebook, correlating the channels when mid-side signalling asks for it (4.6.13.3).
    pub fn apply_pns(
        &mut self,
        ch: usize,
        sr_index: usize,
        is_cpe: bool,
        lcg: &mut Lcg,
    ) -> Result<()> {
        if !self.ics[ch].pns_used {
            return Ok(());
        }

        let info = *self.info_for(ch);
        let (sfb_tab, nsamps) = band_layout(&info, sr_index);

        let check_correction = is_cpe && self.common_window;
        let ms_mask = self.ms_mask;
        let ms_mask_present = self.ms_mask_present;

        let (first, second) = self.ics.split_at_mut(1);
        let (this, other) = if ch == 0 {
            (&mut first[0], &mut second[0])
        }
        else {
            (&mut second[0], &mut first[0])
        };

        let mut gb_mask = 0;
        let mut pos = 0;

        for g in 0..info.num_window_groups {
            let row = g * info.max_sfb;

            for _ in 0..info.window_group_len[g] {
                for sfb in 0..info.max_sfb {
                    let width = (sfb_tab[sfb + 1] - sfb_tab[sfb]) as usize;

                    if this.sfb_cb[row + sfb] == NOISE_HCB {
                        let ms_used = (ms_mask[(row + sfb) >> 3] >> ((row + sfb) & 0x7)) & 1 == 1;

                        if ch == 0 {
                            generate_noise_vector(lcg, &mut this.coefs[pos..pos + width]);

                            // A correlated right channel copies this exact vector.
                            if check_correction && other.sfb_cb[row + sfb] == NOISE_HCB {
                                other.coefs[pos..pos + width]
                                    .copy_from_slice(&this.coefs[pos..pos + width]);
                            }
                        }
                        else {
                            let correlated = check_correction
                                && other.sfb_cb[row + sfb] == NOISE_HCB
                                && (ms_mask_present == 2 || (ms_mask_present == 1 && ms_used));

                            if !correlated {
                                generate_noise_vector(lcg, &mut this.coefs[pos..pos + width]);
                            }
                        }

                        gb_mask |= scale_noise_vector(
                            &mut this.coefs[pos..pos + width],
                            i32::from(this.scale_factors[row + sfb]),
                        );
                    }

                    pos += width;
                }
                pos += nsamps - sfb_tab[info.max_sfb] as usize;
            }
        }

        let gb = guard_bits(gb_mask);
        if this.gb_current > gb {
            this.gb_current = gb;
        }

        Ok(())
    }

    pub fn apply_tns(&mut self, ch: usize, sr_index: usize, profile: u8) {
        let info = *self.info_for(ch);
        let (sfb_tab, _) = band_layout(&info, sr_index);

        let ics = &mut self.ics[ch];
        if let Some(tns) = &ics.tns {
            let gb_mask = tns.apply(&info, sr_index, profile, sfb_tab, &mut ics.coefs);

            let gb = guard_bits(gb_mask);
            if ics.gb_current > gb {
                ics.gb_current = gb;
            }
        }
    }

    /// Frequency-to-time: DCT-IV per window, then the window/overlap-add routine of the
    /// window sequence. Writes this channel's 1024 samples interleaved into `pcm` and leaves
    /// the frame tail in `overlap`.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_imdct(
        &mut self,
        ch: usize,
        out_ch: usize,
        channels: usize,
        overlap: &mut [i32; NSAMPS_LONG],
        prev_shape: &mut u8,
        pcm: &mut [i16],
    ) {
        let info = *self.info_for(ch);
        let ics = &mut self.ics[ch];

        if info.window_sequence == EIGHT_SHORT_SEQUENCE {
            for win in 0..NWINDOWS_SHORT {
                dct4(
                    &mut ics.coefs[win * NSAMPS_SHORT..(win + 1) * NSAMPS_SHORT],
                    ics.gb_current,
                    Dct4Size::N128,
                );
            }
        }
        else {
            dct4(&mut ics.coefs, ics.gb_current, Dct4Size::N1024);
        }

        let shape = info.window_shape;
        match info.window_sequence {
            ONLY_LONG_SEQUENCE => {
                dsp::window_overlap_long(&ics.coefs, overlap, pcm, out_ch, channels, shape, *prev_shape)
            }
            LONG_START_SEQUENCE => dsp::window_overlap_long_start(
                &ics.coefs,
                overlap,
                pcm,
                out_ch,
                channels,
                shape,
                *prev_shape,
            ),
            EIGHT_SHORT_SEQUENCE => dsp::window_overlap_short(
                &ics.coefs,
                overlap,
                pcm,
                out_ch,
                channels,
                shape,
                *prev_shape,
            ),
            LONG_STOP_SEQUENCE => dsp::window_overlap_long_stop(
                &ics.coefs,
                overlap,
                pcm,
                out_ch,
                channels,
                shape,
                *prev_shape,
            ),
            _ => unreachable!(),
        }

        *prev_shape = shape;
    }
}

impl Default for ChannelPair {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::too_many_arguments)]
fn stereo_process_group(
    left: &mut [i32],
    right: &mut [i32],
    sfb_tab: &[i16],
    max_sfb: usize,
    ms_mask_present: u8,
    ms_mask: &[u8; MAX_MS_MASK_BYTES],
    mask_base: usize,
    cb_right: &[u8],
    sf_right: &[i16],
    gb: &mut [i32; 2],
) {
    let mut gb_mask_left = 0;
    let mut gb_mask_right = 0;

    let mut pos = 0;
    for sfb in 0..max_sfb {
        let width = (sfb_tab[sfb + 1] - sfb_tab[sfb]) as usize;
        let mut cb = cb_right[sfb];
        let ms_used = (ms_mask[(mask_base + sfb) >> 3] >> ((mask_base + sfb) & 0x7)) & 1 == 1;

        if cb == INTENSITY_HCB || cb == INTENSITY_HCB2 {
            // Intensity stereo: the right channel is a scaled copy of the left. The mid-side
            // mask flips the intensity direction.
            if ms_mask_present == 1 && ms_used {
                cb ^= 0x01;
            }

            let sf = -i32::from(sf_right[sfb]);

            let scale_f = POW_14_STEREO[(cb & 0x01) as usize][(sf & 0x03) as usize];
            let scale_i = (sf >> 2) + 2;

            if scale_i > 0 {
                let scale_i = scale_i.min(30) as u32;
                for k in pos..pos + width {
                    let cr = clip_2n(mulshift32(left[k], scale_f), 31 - scale_i) << scale_i;
                    gb_mask_right |= fastabs(cr);
                    right[k] = cr;
                }
            }
            else {
                let scale_i = (-scale_i).min(31) as u32;
                for k in pos..pos + width {
                    let cr = mulshift32(left[k], scale_f) >> scale_i;
                    gb_mask_right |= fastabs(cr);
                    right[k] = cr;
                }
            }
        }
        else if cb != NOISE_HCB
            && (ms_mask_present == 2 || (ms_mask_present == 1 && ms_used))
        {
            // Mid-side: L' = L + R, R' = L - R, pre-shifting when a term could leave Q30.
            for k in pos..pos + width {
                let cl = left[k];
                let cr = right[k];

                let (sum, diff) = if (fastabs(cl) | fastabs(cr)) >> 30 != 0 {
                    let half = cl >> 1;
                    let sum = clip_2n(half + (cr >> 1), 30) << 1;
                    let diff = clip_2n(half - (cr >> 1), 30) << 1;
                    (sum, diff)
                }
                else {
                    (cl + cr, cl - cr)
                };

                left[k] = sum;
                gb_mask_left |= fastabs(sum);
                right[k] = diff;
                gb_mask_right |= fastabs(diff);
            }
        }

        pos += width;
    }

    let cl = guard_bits(gb_mask_left);
    if gb[0] > cl {
        gb[0] = cl;
    }

    let cr = guard_bits(gb_mask_right);
    if gb[1] > cr {
        gb[1] = cr;
    }
}

fn generate_noise_vector(lcg: &mut Lcg, dst: &mut [i32]) {
    for c in dst.iter_mut() {
        *c = lcg.next() >> 16;
    }
}

// Seeds for the Newton iteration of 1/sqrt(x), x in [0.25, 1) Q30.
const X0_COEF_2: i32 = -0x40000000;
const X0_OFF_2: i32 = 0x60000000;
const Q26_3: i32 = 0x0c000000;
const INVERSE_SQUARE_ROOT_ITERATIONS: usize = 4;

fn inverse_square_root(x: i32) -> i32 {
    let mut xn = (mulshift32(x, X0_COEF_2) << 2) + X0_OFF_2;

    for _ in 0..INVERSE_SQUARE_ROOT_ITERATIONS {
        let mut t = mulshift32(xn, xn);
        t = Q26_3 - (mulshift32(x, t) << 2);
        xn = mulshift32(xn, t) << (6 - 1);
    }

    if xn >> 30 != 0 {
        xn = (1 << 30) - 1;
    }

    xn
}

/// Normalizes a noise band to the transmitted energy: scale by 2^(sf/4) / sqrt(sum x^2).
fn scale_noise_vector(coefs: &mut [i32], sf: i32) -> i32 {
    let mut energy = 0i32;
    for &c in coefs.iter() {
        energy += (c * c) >> 8;
    }

    if energy == 0 {
        return 0;
    }

    let mut scale_f = POW_14_NOISE[(sf & 0x03) as usize];
    let mut scale_i = (sf >> 2) + FBITS_OUT_DQ_OFF;

    let z = (fermata_core::util::fixed::clz(energy) - 2) & !0x1;
    let inv_sqrt = inverse_square_root(energy << z);
    scale_i -= 15 - z / 2 + 4;

    let z = fermata_core::util::fixed::clz(inv_sqrt) - 1;
    let inv_sqrt = inv_sqrt << z;
    scale_i -= z - 3 - 2;
    scale_f = mulshift32(scale_f, inv_sqrt);

    let mut gb_mask = 0;
    if scale_i < 0 {
        let scale_i = (-scale_i).min(31) as u32;
        for c in coefs.iter_mut() {
            let v = mulshift32(*c, scale_f) >> scale_i;
            gb_mask |= fastabs(v);
            *c = v;
        }
    }
    else {
        let scale_i = scale_i.min(16) as u32;
        for c in coefs.iter_mut() {
            let v = mulshift32(*c << scale_i, scale_f);
            gb_mask |= fastabs(v);
            *c = v;
        }
    }

    gb_mask
}

const POW_14_NOISE: [i32; 4] = [0x40000000, 0x4c1bf829, 0x5a82799a, 0x6ba27e65];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_ms_matrix_is_invertible() {
        // With in-range inputs, (L', R') = (L+R, L-R) recovers L = (L'+R')/2, R = (L'-R')/2
        // bit-exactly for even values.
        let mut left = [1 << 20, -(1 << 18), 1234 << 8, 0];
        let mut right = [1 << 20, 1 << 18, -(1234 << 8), 2];
        let orig_left = left;
        let orig_right = right;
        let tab: [i16; 2] = [0, 4];
        let cb = [1u8];
        let sf = [0i16];
        let mut gb = [10, 10];

        stereo_process_group(&mut left, &mut right, &tab, 1, 2, &[0; MAX_MS_MASK_BYTES], 0, &cb, &sf, &mut gb);

        for k in 0..4 {
            assert_eq!((left[k] + right[k]) / 2, orig_left[k]);
            assert_eq!((left[k] - right[k]) / 2, orig_right[k]);
        }
    }

    #[test]
    fn verify_ms_all_bands_cancels_identical_channels() {
        // Identical L and R: after mid-side, L' doubles and R' is silent.
        let mut left = [1000i32; 8];
        let mut right = [1000i32; 8];
        let tab: [i16; 2] = [0, 8];
        let cb = [1u8];
        let sf = [0i16];
        let mut gb = [10, 10];

        stereo_process_group(&mut left, &mut right, &tab, 1, 2, &[0; MAX_MS_MASK_BYTES], 0, &cb, &sf, &mut gb);

        assert!(left.iter().all(|&v| v == 2000));
        assert!(right.iter().all(|&v| v == 0));
    }

    #[test]
    fn verify_noise_vector_is_deterministic() {
        let mut a = [0i32; 16];
        let mut b = [0i32; 16];
        generate_noise_vector(&mut Lcg::new(0), &mut a);
        generate_noise_vector(&mut Lcg::new(0), &mut b);
        assert_eq!(a, b);
        assert!(a.iter().any(|&v| v != 0));
    }

    #[test]
    fn verify_inverse_square_root() {
        // Over the normalized domain [0.25, 1) the result is positive, monotonically
        // decreasing, and capped below 2.0.
        let a = inverse_square_root(1 << 28);
        let b = inverse_square_root(1 << 29);
        let c = inverse_square_root(0x3fff_ffff);
        assert!(a > b && b > c, "not monotonic: {:#x} {:#x} {:#x}", a, b, c);
        assert!(c > 0);
        assert!(a <= (1 << 30) - 1);
    }
}
