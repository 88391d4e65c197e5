// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Windowing and overlap-add for the four window sequences.
//!
//! Input is the DCT-IV output in the channel's coefficient buffer. Each routine emits 1024
//! saturated s16 samples into the interleaved PCM frame and leaves the second half, windowed,
//! in the channel's overlap buffer for the next frame. Q31 window tables are applied through
//! `mulshift32`; each output adds the rounding constant before the final shift.
//!
//! The leading half of the output window is shaped by the previous frame's window shape, the
//! trailing half by the current one.

use fermata_core::util::fixed::{clip_to_short, mulshift32};

use crate::aac::common::{FBITS_OUT_IMDCT, NSAMPS_LONG, RND_VAL};
use crate::aac::tables::{KBD_WINDOW, KBD_WINDOW_OFFSET, SIN_WINDOW, SIN_WINDOW_OFFSET};

fn long_window(shape: u8) -> &'static [i32] {
    if shape == 1 {
        &KBD_WINDOW[KBD_WINDOW_OFFSET[1]..]
    }
    else {
        &SIN_WINDOW[SIN_WINDOW_OFFSET[1]..]
    }
}

fn short_window(shape: u8) -> &'static [i32] {
    if shape == 1 {
        &KBD_WINDOW[..128]
    }
    else {
        &SIN_WINDOW[..128]
    }
}

#[inline(always)]
fn emit(acc: i32) -> i16 {
    clip_to_short((acc + RND_VAL) >> FBITS_OUT_IMDCT)
}

/// ONLY_LONG_SEQUENCE: one 2048-point window, symmetric overlap with the previous frame.
pub fn window_overlap_long(
    coefs: &[i32; NSAMPS_LONG],
    overlap: &mut [i32; NSAMPS_LONG],
    pcm: &mut [i16],
    out_ch: usize,
    channels: usize,
    shape: u8,
    prev_shape: u8,
) {
    let wprev = long_window(prev_shape);
    let wcur = long_window(shape);

    for k in 0..512 {
        let w0 = wprev[2 * k];
        let w1 = wprev[2 * k + 1];
        let inb = coefs[512 + k];

        let f0 = mulshift32(w0, inb);
        let f1 = mulshift32(w1, inb);

        pcm[out_ch + k * channels] = emit(overlap[k] - f0);
        pcm[out_ch + (1023 - k) * channels] = emit(overlap[1023 - k] + f1);

        let w0 = wcur[2 * k];
        let w1 = wcur[2 * k + 1];
        let inb = coefs[511 - k];

        overlap[1023 - k] = mulshift32(w0, inb);
        overlap[k] = mulshift32(w1, inb);
    }
}

/// LONG_START_SEQUENCE: long leading half, flat middle, short trailing edge feeding the next
/// (short) frame's overlap.
pub fn window_overlap_long_start(
    coefs: &[i32; NSAMPS_LONG],
    overlap: &mut [i32; NSAMPS_LONG],
    pcm: &mut [i16],
    out_ch: usize,
    channels: usize,
    shape: u8,
    prev_shape: u8,
) {
    let wprev = long_window(prev_shape);
    let wshort = short_window(shape);

    for k in 0..448 {
        let w0 = wprev[2 * k];
        let w1 = wprev[2 * k + 1];
        let inb = coefs[512 + k];

        let f0 = mulshift32(w0, inb);
        let f1 = mulshift32(w1, inb);

        pcm[out_ch + k * channels] = emit(overlap[k] - f0);
        pcm[out_ch + (1023 - k) * channels] = emit(overlap[1023 - k] + f1);

        overlap[1023 - k] = 0;
        overlap[k] = coefs[511 - k] >> 1;
    }

    for k in 448..512 {
        let w0 = wprev[2 * k];
        let w1 = wprev[2 * k + 1];
        let inb = coefs[512 + k];

        let f0 = mulshift32(w0, inb);
        let f1 = mulshift32(w1, inb);

        pcm[out_ch + k * channels] = emit(overlap[k] - f0);
        pcm[out_ch + (1023 - k) * channels] = emit(overlap[1023 - k] + f1);

        let w0 = wshort[2 * (k - 448)];
        let w1 = wshort[2 * (k - 448) + 1];
        let inb = coefs[511 - k];

        overlap[1023 - k] = mulshift32(w0, inb);
        overlap[k] = mulshift32(w1, inb);
    }
}

/// EIGHT_SHORT_SEQUENCE: eight 256-point sub-windows at 128-sample strides, summed where they
/// overlap; the first and last 448 samples of the window are flat.
pub fn window_overlap_short(
    coefs: &[i32; NSAMPS_LONG],
    overlap: &mut [i32; NSAMPS_LONG],
    pcm: &mut [i16],
    out_ch: usize,
    channels: usize,
    shape: u8,
    prev_shape: u8,
) {
    let wprev = short_window(prev_shape);
    let wcur = short_window(shape);

    // Flat head: the previous frame's tail passes straight through.
    for k in 0..448 {
        pcm[out_ch + k * channels] = emit(overlap[k]);
    }

    // First sub-window overlaps the previous frame's final short edge.
    for j in 0..64 {
        let w0 = wprev[2 * j];
        let w1 = wprev[2 * j + 1];
        let inb = coefs[64 + j];

        let f0 = mulshift32(w0, inb);
        let f1 = mulshift32(w1, inb);

        pcm[out_ch + (448 + j) * channels] = emit(overlap[448 + j] - f0);
        pcm[out_ch + (575 - j) * channels] = emit(overlap[575 - j] + f1);

        let w0 = wcur[2 * j];
        let w1 = wcur[2 * j + 1];
        let inb = coefs[63 - j];

        overlap[575 - j] = mulshift32(w0, inb);
        overlap[448 + j] = mulshift32(w1, inb);
    }

    // Middle sub-windows: each output sums the tail of the previous sub-window (written into
    // the overlap buffer by the prior pass) with the head of the current one.
    for b in 0..3 {
        let pcm_base = 576 + 128 * b;
        let buf_base = 192 + 128 * b;

        for j in 0..64 {
            let w0 = wcur[2 * j];
            let w1 = wcur[2 * j + 1];
            let inb = coefs[buf_base + j];

            let f0 = mulshift32(w0, inb);
            let f1 = mulshift32(w1, inb);

            let acc = overlap[pcm_base - 128 + j] + overlap[pcm_base + j];
            pcm[out_ch + (pcm_base + j) * channels] = emit(acc - f0);

            let acc = overlap[pcm_base - 1 - j] + overlap[pcm_base + 127 - j];
            pcm[out_ch + (pcm_base + 127 - j) * channels] = emit(acc + f1);

            let inb = coefs[buf_base - 1 - j];
            overlap[pcm_base + 127 - j] = mulshift32(w0, inb);
            overlap[pcm_base + j] = mulshift32(w1, inb);
        }
    }

    // Fifth sub-window: emits the final 64 PCM samples and starts building the next frame's
    // overlap at the front of the buffer.
    for j in 0..64 {
        let w0 = wcur[2 * j];
        let w1 = wcur[2 * j + 1];
        let inb = coefs[576 + j];

        let f0 = mulshift32(w0, inb);
        let f1 = mulshift32(w1, inb);

        let acc = overlap[832 + j] + overlap[960 + j];
        pcm[out_ch + (960 + j) * channels] = emit(acc - f0);

        overlap[63 - j] = overlap[959 - j] + f1;

        let inb = coefs[575 - j];
        overlap[191 - j] = mulshift32(w0, inb);
        overlap[64 + j] = mulshift32(w1, inb);
    }

    // Remaining sub-windows fold into the freshly started overlap.
    for b in 0..3 {
        let over_base = 192 + 128 * b;
        let buf_base = 704 + 128 * b;

        for j in 0..64 {
            let w0 = wcur[2 * j];
            let w1 = wcur[2 * j + 1];
            let inb = coefs[buf_base + j];

            let f0 = mulshift32(w0, inb);
            let f1 = mulshift32(w1, inb);

            overlap[over_base - 128 + j] -= f0;
            overlap[over_base - 1 - j] += f1;

            let inb = coefs[buf_base - 1 - j];
            overlap[over_base + 127 - j] = mulshift32(w0, inb);
            overlap[over_base + j] = mulshift32(w1, inb);
        }
    }

    overlap[576..1024].fill(0);
}

/// LONG_STOP_SEQUENCE: flat leading half with a short rising edge, long trailing half.
pub fn window_overlap_long_stop(
    coefs: &[i32; NSAMPS_LONG],
    overlap: &mut [i32; NSAMPS_LONG],
    pcm: &mut [i16],
    out_ch: usize,
    channels: usize,
    shape: u8,
    prev_shape: u8,
) {
    let wshort = short_window(prev_shape);
    let wcur = long_window(shape);

    for k in 0..448 {
        let inb = coefs[512 + k];
        let f1 = inb >> 1;

        pcm[out_ch + k * channels] = emit(overlap[k]);
        pcm[out_ch + (1023 - k) * channels] = emit(overlap[1023 - k] + f1);

        let w0 = wcur[2 * k];
        let w1 = wcur[2 * k + 1];
        let inb = coefs[511 - k];

        overlap[1023 - k] = mulshift32(w0, inb);
        overlap[k] = mulshift32(w1, inb);
    }

    for k in 448..512 {
        let w0 = wshort[2 * (k - 448)];
        let w1 = wshort[2 * (k - 448) + 1];
        let inb = coefs[512 + k];

        let f0 = mulshift32(w0, inb);
        let f1 = mulshift32(w1, inb);

        pcm[out_ch + k * channels] = emit(overlap[k] - f0);
        pcm[out_ch + (1023 - k) * channels] = emit(overlap[1023 - k] + f1);

        let w0 = wcur[2 * k];
        let w1 = wcur[2 * k + 1];
        let inb = coefs[511 - k];

        overlap[1023 - k] = mulshift32(w0, inb);
        overlap[k] = mulshift32(w1, inb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_silence_stays_silent() {
        let coefs = [0i32; 1024];
        let mut overlap = [0i32; 1024];
        let mut pcm = [0i16; 1024];

        for seq in 0..4u8 {
            match seq {
                0 => window_overlap_long(&coefs, &mut overlap, &mut pcm, 0, 1, 0, 0),
                1 => window_overlap_long_start(&coefs, &mut overlap, &mut pcm, 0, 1, 0, 0),
                2 => window_overlap_short(&coefs, &mut overlap, &mut pcm, 0, 1, 0, 0),
                _ => window_overlap_long_stop(&coefs, &mut overlap, &mut pcm, 0, 1, 0, 0),
            }
            assert!(pcm.iter().all(|&v| v == 0), "seq {} leaked", seq);
            assert!(overlap.iter().all(|&v| v == 0), "seq {} dirtied overlap", seq);
        }
    }

    #[test]
    fn verify_overlap_passthrough() {
        // With zero spectra, a long window forwards the previous overlap verbatim (scaled out
        // of the Q18 accumulator).
        let coefs = [0i32; 1024];
        let mut overlap = [0i32; 1024];
        for (k, o) in overlap.iter_mut().enumerate() {
            *o = (k as i32 % 100 - 50) << FBITS_OUT_IMDCT;
        }
        let expect: Vec<i16> = overlap.iter().map(|&v| (v >> FBITS_OUT_IMDCT) as i16).collect();

        let mut pcm = [0i16; 1024];
        window_overlap_long(&coefs, &mut overlap, &mut pcm, 0, 1, 0, 0);

        assert_eq!(&pcm[..], &expect[..]);
        assert!(overlap.iter().all(|&v| v == 0));
    }

    #[test]
    fn verify_interleaving() {
        // Stereo interleave: channel 1 samples land at odd indices.
        let coefs = [0i32; 1024];
        let mut overlap = [0i32; 1024];
        overlap[0] = 7 << FBITS_OUT_IMDCT;
        let mut pcm = [0i16; 2048];
        window_overlap_long(&coefs, &mut overlap, &mut pcm, 1, 2, 0, 0);
        assert_eq!(pcm[1], 7);
        assert_eq!(pcm[0], 0);
    }
}
