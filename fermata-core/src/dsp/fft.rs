// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-point complex FFT, radix-4 with a radix-8 first pass when the order is odd.
//!
//! Buffers are interleaved re/im pairs of Q-format words. The supported sizes are 64 and 512
//! complex points, the inverse-transform kernels for 128 and 1024 point MDCTs. Twiddles are
//! Q30; every multiply is a 32x32 -> top-32 `mulshift32`. Each radix-4 pass scales by 1/4 and
//! the radix-8 first pass by 1/2, so the caller must guarantee enough guard bits on entry.

use crate::util::fixed::mulshift32;

/// Complex FFT sizes supported by [`fft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FftSize {
    /// 64 complex points.
    N64 = 0,
    /// 512 complex points.
    N512 = 1,
}

const NFFT_LOG2_TAB: [u32; 2] = [6, 9];
const NFFT_TAB: [usize; 2] = [64, 512];
const BIT_REV_TAB_OFFSET: [usize; 2] = [0, 17];

const SQRT_HALF: i32 = 0x5a82799a;

#[inline(always)]
fn swap_cplx(x: &mut [i32], i: usize, j: usize) {
    x.swap(i, j);
    x.swap(i + 1, j + 1);
}

/// Reorders `x` into bit-reversed order using the packed swap table for the size.
fn bit_reverse(x: &mut [i32], size: FftSize) {
    let tab = &BIT_REV_TAB[BIT_REV_TAB_OFFSET[size as usize]..];
    let part1 = 1 << NFFT_LOG2_TAB[size as usize];

    let mut t = 0;
    loop {
        let a = tab[t] as usize;
        t += 1;
        if a == 0 {
            break;
        }
        let b = tab[t] as usize;
        t += 1;

        swap_cplx(x, 4 * a, 4 * b);
        swap_cplx(x, 4 * a + 2, part1 + 4 * b);
        swap_cplx(x, part1 + 4 * a, 4 * b + 2);
        swap_cplx(x, part1 + 4 * a + 2, part1 + 4 * b + 2);
    }

    // The terminator doubles as the first entry of the self-conjugate group.
    let mut a = 0;
    loop {
        swap_cplx(x, 4 * a + 2, part1 + 4 * a);
        a = tab[t] as usize;
        t += 1;
        if a == 0 {
            break;
        }
    }
}

/// Radix-8 butterflies over groups of eight complex points, scaling by 1/2.
fn r8_first_pass(x: &mut [i32], mut bg: usize) {
    let mut i = 0;
    while bg != 0 {
        let ar = x[i] + x[i + 2];
        let br = x[i] - x[i + 2];
        let ai = x[i + 1] + x[i + 3];
        let bi = x[i + 1] - x[i + 3];
        let cr = x[i + 4] + x[i + 6];
        let dr = x[i + 4] - x[i + 6];
        let ci = x[i + 5] + x[i + 7];
        let di = x[i + 5] - x[i + 7];

        let sr = ar + cr;
        let ur = ar - cr;
        let si = ai + ci;
        let ui = ai - ci;
        let tr = br - di;
        let vr = br + di;
        let ti = bi + dr;
        let vi = bi - dr;

        let ar = x[i + 8] + x[i + 10];
        let br = x[i + 8] - x[i + 10];
        let ai = x[i + 9] + x[i + 11];
        let bi = x[i + 9] - x[i + 11];
        let cr = x[i + 12] + x[i + 14];
        let dr = x[i + 12] - x[i + 14];
        let ci = x[i + 13] + x[i + 15];
        let di = x[i + 13] - x[i + 15];

        let wr = (ar + cr) >> 1;
        let yr = (ar - cr) >> 1;
        let wi = (ai + ci) >> 1;
        let yi = (ai - ci) >> 1;

        x[i] = (sr >> 1) + wr;
        x[i + 8] = (sr >> 1) - wr;
        x[i + 1] = (si >> 1) + wi;
        x[i + 9] = (si >> 1) - wi;
        x[i + 4] = (ur >> 1) + yi;
        x[i + 12] = (ur >> 1) - yi;
        x[i + 5] = (ui >> 1) - yr;
        x[i + 13] = (ui >> 1) + yr;

        let ar = br - di;
        let cr = br + di;
        let ai = bi + dr;
        let ci = bi - dr;

        let xr = mulshift32(SQRT_HALF, ar - ai);
        let xi = mulshift32(SQRT_HALF, ar + ai);
        let zr = mulshift32(SQRT_HALF, cr - ci);
        let zi = mulshift32(SQRT_HALF, cr + ci);

        x[i + 6] = (tr >> 1) - xr;
        x[i + 14] = (tr >> 1) + xr;
        x[i + 7] = (ti >> 1) - xi;
        x[i + 15] = (ti >> 1) + xi;
        x[i + 2] = (vr >> 1) + zi;
        x[i + 10] = (vr >> 1) - zi;
        x[i + 3] = (vi >> 1) - zr;
        x[i + 11] = (vi >> 1) + zr;

        i += 16;
        bg -= 1;
    }
}

/// Radix-4 butterflies over groups of four complex points, no scaling.
fn r4_first_pass(x: &mut [i32], mut bg: usize) {
    let mut i = 0;
    while bg != 0 {
        let ar = x[i] + x[i + 2];
        let br = x[i] - x[i + 2];
        let ai = x[i + 1] + x[i + 3];
        let bi = x[i + 1] - x[i + 3];
        let cr = x[i + 4] + x[i + 6];
        let dr = x[i + 4] - x[i + 6];
        let ci = x[i + 5] + x[i + 7];
        let di = x[i + 5] - x[i + 7];

        x[i] = ar + cr;
        x[i + 4] = ar - cr;
        x[i + 1] = ai + ci;
        x[i + 5] = ai - ci;
        x[i + 2] = br + di;
        x[i + 6] = br - di;
        x[i + 3] = bi - dr;
        x[i + 7] = bi + dr;

        i += 8;
        bg -= 1;
    }
}

/// The remaining radix-4 passes, each scaling by 1/4. Twiddle pairs are stored as
/// (cos + sin, sin) so the three multiplies per rotation reconstruct the product.
fn r4_core(x: &mut [i32], mut bg: usize, mut gp: usize, wtab: &[i32]) {
    let mut wbase = 0;
    while bg != 0 {
        let step = 2 * gp;
        let mut xi = 0;

        for _ in 0..bg {
            let mut w = wbase;

            for _ in 0..gp {
                let ar = x[xi];
                let ai = x[xi + 1];
                xi += step;

                let ws = wtab[w];
                let wi = wtab[w + 1];
                let mut br = x[xi];
                let mut bi = x[xi + 1];
                let wd = ws + 2 * wi;
                let tr = mulshift32(wi, br + bi);
                br = mulshift32(wd, br) - tr;
                bi = mulshift32(ws, bi) + tr;
                xi += step;

                let ws = wtab[w + 2];
                let wi = wtab[w + 3];
                let mut cr = x[xi];
                let mut ci = x[xi + 1];
                let wd = ws + 2 * wi;
                let tr = mulshift32(wi, cr + ci);
                cr = mulshift32(wd, cr) - tr;
                ci = mulshift32(ws, ci) + tr;
                xi += step;

                let ws = wtab[w + 4];
                let wi = wtab[w + 5];
                let mut dr = x[xi];
                let mut di = x[xi + 1];
                let wd = ws + 2 * wi;
                let tr = mulshift32(wi, dr + di);
                dr = mulshift32(wd, dr) - tr;
                di = mulshift32(ws, di) + tr;
                w += 6;

                let tr = ar;
                let ti = ai;
                let ar = (tr >> 2) - br;
                let ai = (ti >> 2) - bi;
                let br = (tr >> 2) + br;
                let bi = (ti >> 2) + bi;

                let tr = cr;
                let ti = ci;
                let cr = tr + dr;
                let ci = di - ti;
                let dr = tr - dr;
                let di = di + ti;

                x[xi] = ar + ci;
                x[xi + 1] = ai + dr;
                xi -= step;
                x[xi] = br - cr;
                x[xi + 1] = bi - di;
                xi -= step;
                x[xi] = ar - ci;
                x[xi + 1] = ai - dr;
                xi -= step;
                x[xi] = br + cr;
                x[xi + 1] = bi + di;
                xi += 2;
            }
            xi += 3 * step;
        }
        wbase += 3 * step;

        gp <<= 2;
        bg >>= 2;
    }
}

/// In-place decimation-in-time FFT over `size` interleaved complex words.
pub fn fft(x: &mut [i32], size: FftSize) {
    let order = NFFT_LOG2_TAB[size as usize];
    let nfft = NFFT_TAB[size as usize];

    debug_assert!(x.len() >= 2 * nfft);

    bit_reverse(x, size);

    if order & 1 != 0 {
        r8_first_pass(x, nfft >> 3);
        r4_core(x, nfft >> 5, 8, &TWID_TAB_ODD);
    }
    else {
        r4_first_pass(x, nfft >> 2);
        r4_core(x, nfft >> 4, 4, &TWID_TAB_EVEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_bit_reverse_is_involution() {
        for size in [FftSize::N64, FftSize::N512] {
            let n = 2 * NFFT_TAB[size as usize];
            let mut x: Vec<i32> = (0..n as i32).collect();
            let orig = x.clone();
            bit_reverse(&mut x, size);
            assert_ne!(x, orig);
            bit_reverse(&mut x, size);
            assert_eq!(x, orig);
        }
    }

    #[test]
    fn verify_fft_of_zeros_is_zero() {
        for size in [FftSize::N64, FftSize::N512] {
            let n = 2 * NFFT_TAB[size as usize];
            let mut x = vec![0i32; n];
            fft(&mut x, size);
            assert!(x.iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn verify_fft_dc_input() {
        // A constant (DC) input transforms to a single spike in bin zero. The kernel's net
        // scaling is 1/(N/4), so the spike is 4x the input level.
        let n = NFFT_TAB[FftSize::N64 as usize];
        let mut x = vec![0i32; 2 * n];
        for c in x.chunks_exact_mut(2) {
            c[0] = 1 << 20;
        }
        fft(&mut x, FftSize::N64);
        assert_eq!(x[0], 4 << 20);
        assert_eq!(x[1], 0);
        // Remaining bins should be (near) zero; twiddle rounding may leave a few counts.
        for c in x[2..].chunks_exact(2) {
            assert!(c[0].abs() <= 8 && c[1].abs() <= 8, "leakage: {} {}", c[0], c[1]);
        }
    }
}
static BIT_REV_TAB: [u8; 146] = [
    0x01, 0x08, 0x02, 0x04, 0x03, 0x0c, 0x05, 0x0a, 0x07, 0x0e, 0x0b, 0x0d, 0x00, 0x06, 0x09, 0x0f,
    0x00, 0x01, 0x40, 0x02, 0x20, 0x03, 0x60, 0x04, 0x10, 0x05, 0x50, 0x06, 0x30, 0x07, 0x70, 0x09,
    0x48, 0x0a, 0x28, 0x0b, 0x68, 0x0c, 0x18, 0x0d, 0x58, 0x0e, 0x38, 0x0f, 0x78, 0x11, 0x44, 0x12,
    0x24, 0x13, 0x64, 0x15, 0x54, 0x16, 0x34, 0x17, 0x74, 0x19, 0x4c, 0x1a, 0x2c, 0x1b, 0x6c, 0x1d,
    0x5c, 0x1e, 0x3c, 0x1f, 0x7c, 0x21, 0x42, 0x23, 0x62, 0x25, 0x52, 0x26, 0x32, 0x27, 0x72, 0x29,
    0x4a, 0x2b, 0x6a, 0x2d, 0x5a, 0x2e, 0x3a, 0x2f, 0x7a, 0x31, 0x46, 0x33, 0x66, 0x35, 0x56, 0x37,
    0x76, 0x39, 0x4e, 0x3b, 0x6e, 0x3d, 0x5e, 0x3f, 0x7e, 0x43, 0x61, 0x45, 0x51, 0x47, 0x71, 0x4b,
    0x69, 0x4d, 0x59, 0x4f, 0x79, 0x53, 0x65, 0x57, 0x75, 0x5b, 0x6d, 0x5f, 0x7d, 0x67, 0x73, 0x6f,
    0x7b, 0x00, 0x08, 0x14, 0x1c, 0x22, 0x2a, 0x36, 0x3e, 0x41, 0x49, 0x55, 0x5d, 0x63, 0x6b, 0x77,
    0x7f, 0x00,
];

static TWID_TAB_ODD: [i32; 1008] = [
    0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x539eba45, -0x187de2a7,
    0x4b418bbe, -0x0c7c5c1e, 0x58c542c5, -0x238e7673, 0x5a82799a, -0x2d413ccd, 0x539eba45, -0x187de2a7,
    0x539eba45, -0x3b20d79e, 0x539eba45, -0x3b20d79e, 0x58c542c5, -0x238e7673, 0x3248d382, -0x3ec52fa0,
    0x40000000, -0x40000000, 0x5a82799a, -0x2d413ccd, 0x00000000, -0x2d413ccd, 0x22a2f4f8, -0x3b20d79e,
    0x58c542c5, -0x3536cc52, -0x3248d382, -0x0c7c5c1e, 0x00000000, -0x2d413ccd, 0x539eba45, -0x3b20d79e,
    -0x539eba45, 0x187de2a7, -0x22a2f4f8, -0x187de2a7, 0x4b418bbe, -0x3ec52fa0, -0x58c542c5, 0x3536cc52,
    0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x45f704f7, -0x0645e9af,
    0x43103085, -0x0323ecbe, 0x48b2b335, -0x09640837, 0x4b418bbe, -0x0c7c5c1e, 0x45f704f7, -0x0645e9af,
    0x4fd288dc, -0x1294062f, 0x4fd288dc, -0x1294062f, 0x48b2b335, -0x09640837, 0x553805f2, -0x1b5d100a,
    0x539eba45, -0x187de2a7, 0x4b418bbe, -0x0c7c5c1e, 0x58c542c5, -0x238e7673, 0x569cc31b, -0x1e2b5d38,
    0x4da1fab5, -0x0f8cfcbe, 0x5a6690ae, -0x2afad269, 0x58c542c5, -0x238e7673, 0x4fd288dc, -0x1294062f,
    0x5a12e720, -0x317900d6, 0x5a12e720, -0x2899e64a, 0x51d1dc80, -0x158f9a76, 0x57cc15bc, -0x36e5068a,
    0x5a82799a, -0x2d413ccd, 0x539eba45, -0x187de2a7, 0x539eba45, -0x3b20d79e, 0x5a12e720, -0x317900d6,
    0x553805f2, -0x1b5d100a, 0x4da1fab5, -0x3e14fdf7, 0x58c542c5, -0x3536cc52, 0x569cc31b, -0x1e2b5d38,
    0x45f704f7, -0x3fb11b48, 0x569cc31b, -0x387165e3, 0x57cc15bc, -0x20e70f32, 0x3cc85709, -0x3fec43c7,
    0x539eba45, -0x3b20d79e, 0x58c542c5, -0x238e7673, 0x3248d382, -0x3ec52fa0, 0x4fd288dc, -0x3d3e82ae,
    0x5987b08a, -0x261feffa, 0x26b2a794, -0x3c42420a, 0x4b418bbe, -0x3ec52fa0, 0x5a12e720, -0x2899e64a,
    0x1a4608ab, -0x387165e3, 0x45f704f7, -0x3fb11b48, 0x5a6690ae, -0x2afad269, 0x0d47d096, -0x3367c090,
    0x40000000, -0x40000000, 0x5a82799a, -0x2d413ccd, 0x00000000, -0x2d413ccd, 0x396b3199, -0x3fb11b48,
    0x5a6690ae, -0x2f6bbe45, -0x0d47d096, -0x261feffa, 0x3248d382, -0x3ec52fa0, 0x5a12e720, -0x317900d6,
    -0x1a4608ab, -0x1e2b5d38, 0x2aaa7c7f, -0x3d3e82ae, 0x5987b08a, -0x3367c090, -0x26b2a794, -0x158f9a76,
    0x22a2f4f8, -0x3b20d79e, 0x58c542c5, -0x3536cc52, -0x3248d382, -0x0c7c5c1e, 0x1a4608ab, -0x387165e3,
    0x57cc15bc, -0x36e5068a, -0x3cc85709, -0x0323ecbe, 0x11a855df, -0x3536cc52, 0x569cc31b, -0x387165e3,
    -0x45f704f7, 0x0645e9af, 0x08df1a8c, -0x317900d6, 0x553805f2, -0x39daf5e8, -0x4da1fab5, 0x0f8cfcbe,
    0x00000000, -0x2d413ccd, 0x539eba45, -0x3b20d79e, -0x539eba45, 0x187de2a7, -0x08df1a8c, -0x2899e64a,
    0x51d1dc80, -0x3c42420a, -0x57cc15bc, 0x20e70f32, -0x11a855df, -0x238e7673, 0x4fd288dc, -0x3d3e82ae,
    -0x5a12e720, 0x2899e64a, -0x1a4608ab, -0x1e2b5d38, 0x4da1fab5, -0x3e14fdf7, -0x5a6690ae, 0x2f6bbe45,
    -0x22a2f4f8, -0x187de2a7, 0x4b418bbe, -0x3ec52fa0, -0x58c542c5, 0x3536cc52, -0x2aaa7c7f, -0x1294062f,
    0x48b2b335, -0x3f4eaafe, -0x553805f2, 0x39daf5e8, -0x3248d382, -0x0c7c5c1e, 0x45f704f7, -0x3fb11b48,
    -0x4fd288dc, 0x3d3e82ae, -0x396b3199, -0x0645e9af, 0x43103085, -0x3fec43c7, -0x48b2b335, 0x3f4eaafe,
    0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x418d2621, -0x0192155f,
    0x40c7d2bd, -0x00c90e90, 0x424ff28f, -0x025b0caf, 0x43103085, -0x0323ecbe, 0x418d2621, -0x0192155f,
    0x4488e37f, -0x04b54825, 0x4488e37f, -0x04b54825, 0x424ff28f, -0x025b0caf, 0x46aa0d6d, -0x070de172,
    0x45f704f7, -0x0645e9af, 0x43103085, -0x0323ecbe, 0x48b2b335, -0x09640837, 0x475a5c77, -0x07d59396,
    0x43cdd89a, -0x03ecadcf, 0x4aa22036, -0x0bb6ecef, 0x48b2b335, -0x09640837, 0x4488e37f, -0x04b54825,
    0x4c77a88e, -0x0e05c135, 0x49ffd417, -0x0af10a22, 0x454149fc, -0x057db403, 0x4e32a956, -0x104fb80e,
    0x4b418bbe, -0x0c7c5c1e, 0x45f704f7, -0x0645e9af, 0x4fd288dc, -0x1294062f, 0x4c77a88e, -0x0e05c135,
    0x46aa0d6d, -0x070de172, 0x5156b6d9, -0x14d1e242, 0x4da1fab5, -0x0f8cfcbe, 0x475a5c77, -0x07d59396,
    0x52beac9f, -0x17088531, 0x4ec05432, -0x1111d263, 0x4807eb4b, -0x089cf867, 0x5409ed4b, -0x19372a64,
    0x4fd288dc, -0x1294062f, 0x48b2b335, -0x09640837, 0x553805f2, -0x1b5d100a, 0x50d86e6d, -0x14135c94,
    0x495aada2, -0x0a2abb59, 0x56488dc5, -0x1d79775c, 0x51d1dc80, -0x158f9a76, 0x49ffd417, -0x0af10a22,
    0x573b2635, -0x1f8ba4dc, 0x52beac9f, -0x17088531, 0x4aa22036, -0x0bb6ecef, 0x580f7b19, -0x2192e09b,
    0x539eba45, -0x187de2a7, 0x4b418bbe, -0x0c7c5c1e, 0x58c542c5, -0x238e7673, 0x5471e2e6, -0x19ef7944,
    0x4bde1089, -0x0d415013, 0x595c3e2a, -0x257db64c, 0x553805f2, -0x1b5d100a, 0x4c77a88e, -0x0e05c135,
    0x59d438e5, -0x275ff452, 0x55f104dc, -0x1cc66e99, 0x4d0e4de2, -0x0ec9a7f3, 0x5a2d0957, -0x29348937,
    0x569cc31b, -0x1e2b5d38, 0x4da1fab5, -0x0f8cfcbe, 0x5a6690ae, -0x2afad269, 0x573b2635, -0x1f8ba4dc,
    0x4e32a956, -0x104fb80e, 0x5a80baf6, -0x2cb2324c, 0x57cc15bc, -0x20e70f32, 0x4ec05432, -0x1111d263,
    0x5a7b7f1a, -0x2e5a1070, 0x584f7b58, -0x223d66a8, 0x4f4af5d1, -0x11d3443f, 0x5a56deec, -0x2ff1d9c7,
    0x58c542c5, -0x238e7673, 0x4fd288dc, -0x1294062f, 0x5a12e720, -0x317900d6, 0x592d59da, -0x24da0a9a,
    0x50570819, -0x135410c3, 0x59afaf4c, -0x32eefdea, 0x5987b08a, -0x261feffa, 0x50d86e6d, -0x14135c94,
    0x592d59da, -0x34534f41, 0x59d438e5, -0x275ff452, 0x5156b6d9, -0x14d1e242, 0x588c1404, -0x35a5793c,
    0x5a12e720, -0x2899e64a, 0x51d1dc80, -0x158f9a76, 0x57cc15bc, -0x36e5068a, 0x5a43b190, -0x29cd9578,
    0x5249daa2, -0x164c7ddd, 0x56eda1a0, -0x3811884d, 0x5a6690ae, -0x2afad269, 0x52beac9f, -0x17088531,
    0x55f104dc, -0x392a9642, 0x5a7b7f1a, -0x2c216eaa, 0x53304df6, -0x17c3a931, 0x54d69714, -0x3a2fcee8,
    0x5a82799a, -0x2d413ccd, 0x539eba45, -0x187de2a7, 0x539eba45, -0x3b20d79e, 0x5a7b7f1a, -0x2e5a1070,
    0x5409ed4b, -0x19372a64, 0x5249daa2, -0x3bfd5cc4, 0x5a6690ae, -0x2f6bbe45, 0x5471e2e6, -0x19ef7944,
    0x50d86e6d, -0x3cc511d9, 0x5a43b190, -0x30761c18, 0x54d69714, -0x1aa6c82b, 0x4f4af5d1, -0x3d77b192,
    0x5a12e720, -0x317900d6, 0x553805f2, -0x1b5d100a, 0x4da1fab5, -0x3e14fdf7, 0x59d438e5, -0x32744493,
    0x55962bc0, -0x1c1249d8, 0x4bde1089, -0x3e9cc076, 0x5987b08a, -0x3367c090, 0x55f104dc, -0x1cc66e99,
    0x49ffd417, -0x3f0ec9f5, 0x592d59da, -0x34534f41, 0x56488dc5, -0x1d79775c, 0x4807eb4b, -0x3f6af2e3,
    0x58c542c5, -0x3536cc52, 0x569cc31b, -0x1e2b5d38, 0x45f704f7, -0x3fb11b48, 0x584f7b58, -0x361214b0,
    0x56eda1a0, -0x1edc1953, 0x43cdd89a, -0x3fe12acb, 0x57cc15bc, -0x36e5068a, 0x573b2635, -0x1f8ba4dc,
    0x418d2621, -0x3ffb10c1, 0x573b2635, -0x37af8159, 0x57854ddd, -0x2039f90f, 0x3f35b59d, -0x3ffec42d,
    0x569cc31b, -0x387165e3, 0x57cc15bc, -0x20e70f32, 0x3cc85709, -0x3fec43c7, 0x55f104dc, -0x392a9642,
    0x580f7b19, -0x2192e09b, 0x3a45e1f7, -0x3fc395f9, 0x553805f2, -0x39daf5e8, 0x584f7b58, -0x223d66a8,
    0x37af354c, -0x3f84c8e2, 0x5471e2e6, -0x3a8269a3, 0x588c1404, -0x22e69ac8, 0x350536f1, -0x3f2ff24a,
    0x539eba45, -0x3b20d79e, 0x58c542c5, -0x238e7673, 0x3248d382, -0x3ec52fa0, 0x52beac9f, -0x3bb6276e,
    0x58fb0568, -0x2434f332, 0x2f7afdfc, -0x3e44a5ef, 0x51d1dc80, -0x3c42420a, 0x592d59da, -0x24da0a9a,
    0x2c9caf6c, -0x3dae81cf, 0x50d86e6d, -0x3cc511d9, 0x595c3e2a, -0x257db64c, 0x29aee694, -0x3d02f757,
    0x4fd288dc, -0x3d3e82ae, 0x5987b08a, -0x261feffa, 0x26b2a794, -0x3c42420a, 0x4ec05432, -0x3dae81cf,
    0x59afaf4c, -0x26c0b162, 0x23a8fb93, -0x3b6ca4c4, 0x4da1fab5, -0x3e14fdf7, 0x59d438e5, -0x275ff452,
    0x2092f05f, -0x3a8269a3, 0x4c77a88e, -0x3e71e759, 0x59f54bee, -0x27fdb2a7, 0x1d719810, -0x3983e1e8,
    0x4b418bbe, -0x3ec52fa0, 0x5a12e720, -0x2899e64a, 0x1a4608ab, -0x387165e3, 0x49ffd417, -0x3f0ec9f5,
    0x5a2d0957, -0x29348937, 0x17115bc0, -0x374b54ce, 0x48b2b335, -0x3f4eaafe, 0x5a43b190, -0x29cd9578,
    0x13d4ae08, -0x361214b0, 0x475a5c77, -0x3f84c8e2, 0x5a56deec, -0x2a650525, 0x10911f04, -0x34c61236,
    0x45f704f7, -0x3fb11b48, 0x5a6690ae, -0x2afad269, 0x0d47d096, -0x3367c090, 0x4488e37f, -0x3fd39b5a,
    0x5a72c63b, -0x2b8ef77d, 0x09f9e6a1, -0x31f79948, 0x43103085, -0x3fec43c7, 0x5a7b7f1a, -0x2c216eaa,
    0x06a886a0, -0x30761c18, 0x418d2621, -0x3ffb10c1, 0x5a80baf6, -0x2cb2324c, 0x0354d741, -0x2ee3cebe,
    0x40000000, -0x40000000, 0x5a82799a, -0x2d413ccd, 0x00000000, -0x2d413ccd, 0x3e68fb62, -0x3ffb10c1,
    0x5a80baf6, -0x2dce88aa, -0x0354d741, -0x2b8ef77d, 0x3cc85709, -0x3fec43c7, 0x5a7b7f1a, -0x2e5a1070,
    -0x06a886a0, -0x29cd9578, 0x3b1e5335, -0x3fd39b5a, 0x5a72c63b, -0x2ee3cebe, -0x09f9e6a1, -0x27fdb2a7,
    0x396b3199, -0x3fb11b48, 0x5a6690ae, -0x2f6bbe45, -0x0d47d096, -0x261feffa, 0x37af354c, -0x3f84c8e2,
    0x5a56deec, -0x2ff1d9c7, -0x10911f04, -0x2434f332, 0x35eaa2c7, -0x3f4eaafe, 0x5a43b190, -0x30761c18,
    -0x13d4ae08, -0x223d66a8, 0x341dbfd3, -0x3f0ec9f5, 0x5a2d0957, -0x30f8801f, -0x17115bc0, -0x2039f90f,
    0x3248d382, -0x3ec52fa0, 0x5a12e720, -0x317900d6, -0x1a4608ab, -0x1e2b5d38, 0x306c2624, -0x3e71e759,
    0x59f54bee, -0x31f79948, -0x1d719810, -0x1c1249d8, 0x2e88013a, -0x3e14fdf7, 0x59d438e5, -0x32744493,
    -0x2092f05f, -0x19ef7944, 0x2c9caf6c, -0x3dae81cf, 0x59afaf4c, -0x32eefdea, -0x23a8fb93, -0x17c3a931,
    0x2aaa7c7f, -0x3d3e82ae, 0x5987b08a, -0x3367c090, -0x26b2a794, -0x158f9a76, 0x28b1b544, -0x3cc511d9,
    0x595c3e2a, -0x33de87de, -0x29aee694, -0x135410c3, 0x26b2a794, -0x3c42420a, 0x592d59da, -0x34534f41,
    -0x2c9caf6c, -0x1111d263, 0x24ada23d, -0x3bb6276e, 0x58fb0568, -0x34c61236, -0x2f7afdfc, -0x0ec9a7f3,
    0x22a2f4f8, -0x3b20d79e, 0x58c542c5, -0x3536cc52, -0x3248d382, -0x0c7c5c1e, 0x2092f05f, -0x3a8269a3,
    0x588c1404, -0x35a5793c, -0x350536f1, -0x0a2abb59, 0x1e7de5df, -0x39daf5e8, 0x584f7b58, -0x361214b0,
    -0x37af354c, -0x07d59396, 0x1c6427a9, -0x392a9642, 0x580f7b19, -0x367c9a7e, -0x3a45e1f7, -0x057db403,
    0x1a4608ab, -0x387165e3, 0x57cc15bc, -0x36e5068a, -0x3cc85709, -0x0323ecbe, 0x1823dc7d, -0x37af8159,
    0x57854ddd, -0x374b54ce, -0x3f35b59d, -0x00c90e90, 0x15fdf758, -0x36e5068a, 0x573b2635, -0x37af8159,
    -0x418d2621, 0x0192155f, 0x13d4ae08, -0x361214b0, 0x56eda1a0, -0x3811884d, -0x43cdd89a, 0x03ecadcf,
    0x11a855df, -0x3536cc52, 0x569cc31b, -0x387165e3, -0x45f704f7, 0x0645e9af, 0x0f7944a7, -0x34534f41,
    0x56488dc5, -0x38cf1669, -0x4807eb4b, 0x089cf867, 0x0d47d096, -0x3367c090, 0x55f104dc, -0x392a9642,
    -0x49ffd417, 0x0af10a22, 0x0b145041, -0x32744493, 0x55962bc0, -0x3983e1e8, -0x4bde1089, 0x0d415013,
    0x08df1a8c, -0x317900d6, 0x553805f2, -0x39daf5e8, -0x4da1fab5, 0x0f8cfcbe, 0x06a886a0, -0x30761c18,
    0x54d69714, -0x3a2fcee8, -0x4f4af5d1, 0x11d3443f, 0x0470ebdc, -0x2f6bbe45, 0x5471e2e6, -0x3a8269a3,
    -0x50d86e6d, 0x14135c94, 0x0238a1c6, -0x2e5a1070, 0x5409ed4b, -0x3ad2c2e8, -0x5249daa2, 0x164c7ddd,
    0x00000000, -0x2d413ccd, 0x539eba45, -0x3b20d79e, -0x539eba45, 0x187de2a7, -0x0238a1c6, -0x2c216eaa,
    0x53304df6, -0x3b6ca4c4, -0x54d69714, 0x1aa6c82b, -0x0470ebdc, -0x2afad269, 0x52beac9f, -0x3bb6276e,
    -0x55f104dc, 0x1cc66e99, -0x06a886a0, -0x29cd9578, 0x5249daa2, -0x3bfd5cc4, -0x56eda1a0, 0x1edc1953,
    -0x08df1a8c, -0x2899e64a, 0x51d1dc80, -0x3c42420a, -0x57cc15bc, 0x20e70f32, -0x0b145041, -0x275ff452,
    0x5156b6d9, -0x3c84d496, -0x588c1404, 0x22e69ac8, -0x0d47d096, -0x261feffa, 0x50d86e6d, -0x3cc511d9,
    -0x592d59da, 0x24da0a9a, -0x0f7944a7, -0x24da0a9a, 0x50570819, -0x3d02f757, -0x59afaf4c, 0x26c0b162,
    -0x11a855df, -0x238e7673, 0x4fd288dc, -0x3d3e82ae, -0x5a12e720, 0x2899e64a, -0x13d4ae08, -0x223d66a8,
    0x4f4af5d1, -0x3d77b192, -0x5a56deec, 0x2a650525, -0x15fdf758, -0x20e70f32, 0x4ec05432, -0x3dae81cf,
    -0x5a7b7f1a, 0x2c216eaa, -0x1823dc7d, -0x1f8ba4dc, 0x4e32a956, -0x3de2f148, -0x5a80baf6, 0x2dce88aa,
    -0x1a4608ab, -0x1e2b5d38, 0x4da1fab5, -0x3e14fdf7, -0x5a6690ae, 0x2f6bbe45, -0x1c6427a9, -0x1cc66e99,
    0x4d0e4de2, -0x3e44a5ef, -0x5a2d0957, 0x30f8801f, -0x1e7de5df, -0x1b5d100a, 0x4c77a88e, -0x3e71e759,
    -0x59d438e5, 0x32744493, -0x2092f05f, -0x19ef7944, 0x4bde1089, -0x3e9cc076, -0x595c3e2a, 0x33de87de,
    -0x22a2f4f8, -0x187de2a7, 0x4b418bbe, -0x3ec52fa0, -0x58c542c5, 0x3536cc52, -0x24ada23d, -0x17088531,
    0x4aa22036, -0x3eeb3347, -0x580f7b19, 0x367c9a7e, -0x26b2a794, -0x158f9a76, 0x49ffd417, -0x3f0ec9f5,
    -0x573b2635, 0x37af8159, -0x28b1b544, -0x14135c94, 0x495aada2, -0x3f2ff24a, -0x56488dc5, 0x38cf1669,
    -0x2aaa7c7f, -0x1294062f, 0x48b2b335, -0x3f4eaafe, -0x553805f2, 0x39daf5e8, -0x2c9caf6c, -0x1111d263,
    0x4807eb4b, -0x3f6af2e3, -0x5409ed4b, 0x3ad2c2e8, -0x2e88013a, -0x0f8cfcbe, 0x475a5c77, -0x3f84c8e2,
    -0x52beac9f, 0x3bb6276e, -0x306c2624, -0x0e05c135, 0x46aa0d6d, -0x3f9c2bfb, -0x5156b6d9, 0x3c84d496,
    -0x3248d382, -0x0c7c5c1e, 0x45f704f7, -0x3fb11b48, -0x4fd288dc, 0x3d3e82ae, -0x341dbfd3, -0x0af10a22,
    0x454149fc, -0x3fc395f9, -0x4e32a956, 0x3de2f148, -0x35eaa2c7, -0x09640837, 0x4488e37f, -0x3fd39b5a,
    -0x4c77a88e, 0x3e71e759, -0x37af354c, -0x07d59396, 0x43cdd89a, -0x3fe12acb, -0x4aa22036, 0x3eeb3347,
    -0x396b3199, -0x0645e9af, 0x43103085, -0x3fec43c7, -0x48b2b335, 0x3f4eaafe, -0x3b1e5335, -0x04b54825,
    0x424ff28f, -0x3ff4e5e0, -0x46aa0d6d, 0x3f9c2bfb, -0x3cc85709, -0x0323ecbe, 0x418d2621, -0x3ffb10c1,
    -0x4488e37f, 0x3fd39b5a, -0x3e68fb62, -0x0192155f, 0x40c7d2bd, -0x3ffec42d, -0x424ff28f, 0x3ff4e5e0,
];

static TWID_TAB_EVEN: [i32; 504] = [
    0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x5a82799a, -0x2d413ccd,
    0x539eba45, -0x187de2a7, 0x539eba45, -0x3b20d79e, 0x40000000, -0x40000000, 0x5a82799a, -0x2d413ccd,
    0x00000000, -0x2d413ccd, 0x00000000, -0x2d413ccd, 0x539eba45, -0x3b20d79e, -0x539eba45, 0x187de2a7,
    0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x4b418bbe, -0x0c7c5c1e,
    0x45f704f7, -0x0645e9af, 0x4fd288dc, -0x1294062f, 0x539eba45, -0x187de2a7, 0x4b418bbe, -0x0c7c5c1e,
    0x58c542c5, -0x238e7673, 0x58c542c5, -0x238e7673, 0x4fd288dc, -0x1294062f, 0x5a12e720, -0x317900d6,
    0x5a82799a, -0x2d413ccd, 0x539eba45, -0x187de2a7, 0x539eba45, -0x3b20d79e, 0x58c542c5, -0x3536cc52,
    0x569cc31b, -0x1e2b5d38, 0x45f704f7, -0x3fb11b48, 0x539eba45, -0x3b20d79e, 0x58c542c5, -0x238e7673,
    0x3248d382, -0x3ec52fa0, 0x4b418bbe, -0x3ec52fa0, 0x5a12e720, -0x2899e64a, 0x1a4608ab, -0x387165e3,
    0x40000000, -0x40000000, 0x5a82799a, -0x2d413ccd, 0x00000000, -0x2d413ccd, 0x3248d382, -0x3ec52fa0,
    0x5a12e720, -0x317900d6, -0x1a4608ab, -0x1e2b5d38, 0x22a2f4f8, -0x3b20d79e, 0x58c542c5, -0x3536cc52,
    -0x3248d382, -0x0c7c5c1e, 0x11a855df, -0x3536cc52, 0x569cc31b, -0x387165e3, -0x45f704f7, 0x0645e9af,
    0x00000000, -0x2d413ccd, 0x539eba45, -0x3b20d79e, -0x539eba45, 0x187de2a7, -0x11a855df, -0x238e7673,
    0x4fd288dc, -0x3d3e82ae, -0x5a12e720, 0x2899e64a, -0x22a2f4f8, -0x187de2a7, 0x4b418bbe, -0x3ec52fa0,
    -0x58c542c5, 0x3536cc52, -0x3248d382, -0x0c7c5c1e, 0x45f704f7, -0x3fb11b48, -0x4fd288dc, 0x3d3e82ae,
    0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x40000000, 0x00000000, 0x43103085, -0x0323ecbe,
    0x418d2621, -0x0192155f, 0x4488e37f, -0x04b54825, 0x45f704f7, -0x0645e9af, 0x43103085, -0x0323ecbe,
    0x48b2b335, -0x09640837, 0x48b2b335, -0x09640837, 0x4488e37f, -0x04b54825, 0x4c77a88e, -0x0e05c135,
    0x4b418bbe, -0x0c7c5c1e, 0x45f704f7, -0x0645e9af, 0x4fd288dc, -0x1294062f, 0x4da1fab5, -0x0f8cfcbe,
    0x475a5c77, -0x07d59396, 0x52beac9f, -0x17088531, 0x4fd288dc, -0x1294062f, 0x48b2b335, -0x09640837,
    0x553805f2, -0x1b5d100a, 0x51d1dc80, -0x158f9a76, 0x49ffd417, -0x0af10a22, 0x573b2635, -0x1f8ba4dc,
    0x539eba45, -0x187de2a7, 0x4b418bbe, -0x0c7c5c1e, 0x58c542c5, -0x238e7673, 0x553805f2, -0x1b5d100a,
    0x4c77a88e, -0x0e05c135, 0x59d438e5, -0x275ff452, 0x569cc31b, -0x1e2b5d38, 0x4da1fab5, -0x0f8cfcbe,
    0x5a6690ae, -0x2afad269, 0x57cc15bc, -0x20e70f32, 0x4ec05432, -0x1111d263, 0x5a7b7f1a, -0x2e5a1070,
    0x58c542c5, -0x238e7673, 0x4fd288dc, -0x1294062f, 0x5a12e720, -0x317900d6, 0x5987b08a, -0x261feffa,
    0x50d86e6d, -0x14135c94, 0x592d59da, -0x34534f41, 0x5a12e720, -0x2899e64a, 0x51d1dc80, -0x158f9a76,
    0x57cc15bc, -0x36e5068a, 0x5a6690ae, -0x2afad269, 0x52beac9f, -0x17088531, 0x55f104dc, -0x392a9642,
    0x5a82799a, -0x2d413ccd, 0x539eba45, -0x187de2a7, 0x539eba45, -0x3b20d79e, 0x5a6690ae, -0x2f6bbe45,
    0x5471e2e6, -0x19ef7944, 0x50d86e6d, -0x3cc511d9, 0x5a12e720, -0x317900d6, 0x553805f2, -0x1b5d100a,
    0x4da1fab5, -0x3e14fdf7, 0x5987b08a, -0x3367c090, 0x55f104dc, -0x1cc66e99, 0x49ffd417, -0x3f0ec9f5,
    0x58c542c5, -0x3536cc52, 0x569cc31b, -0x1e2b5d38, 0x45f704f7, -0x3fb11b48, 0x57cc15bc, -0x36e5068a,
    0x573b2635, -0x1f8ba4dc, 0x418d2621, -0x3ffb10c1, 0x569cc31b, -0x387165e3, 0x57cc15bc, -0x20e70f32,
    0x3cc85709, -0x3fec43c7, 0x553805f2, -0x39daf5e8, 0x584f7b58, -0x223d66a8, 0x37af354c, -0x3f84c8e2,
    0x539eba45, -0x3b20d79e, 0x58c542c5, -0x238e7673, 0x3248d382, -0x3ec52fa0, 0x51d1dc80, -0x3c42420a,
    0x592d59da, -0x24da0a9a, 0x2c9caf6c, -0x3dae81cf, 0x4fd288dc, -0x3d3e82ae, 0x5987b08a, -0x261feffa,
    0x26b2a794, -0x3c42420a, 0x4da1fab5, -0x3e14fdf7, 0x59d438e5, -0x275ff452, 0x2092f05f, -0x3a8269a3,
    0x4b418bbe, -0x3ec52fa0, 0x5a12e720, -0x2899e64a, 0x1a4608ab, -0x387165e3, 0x48b2b335, -0x3f4eaafe,
    0x5a43b190, -0x29cd9578, 0x13d4ae08, -0x361214b0, 0x45f704f7, -0x3fb11b48, 0x5a6690ae, -0x2afad269,
    0x0d47d096, -0x3367c090, 0x43103085, -0x3fec43c7, 0x5a7b7f1a, -0x2c216eaa, 0x06a886a0, -0x30761c18,
    0x40000000, -0x40000000, 0x5a82799a, -0x2d413ccd, 0x00000000, -0x2d413ccd, 0x3cc85709, -0x3fec43c7,
    0x5a7b7f1a, -0x2e5a1070, -0x06a886a0, -0x29cd9578, 0x396b3199, -0x3fb11b48, 0x5a6690ae, -0x2f6bbe45,
    -0x0d47d096, -0x261feffa, 0x35eaa2c7, -0x3f4eaafe, 0x5a43b190, -0x30761c18, -0x13d4ae08, -0x223d66a8,
    0x3248d382, -0x3ec52fa0, 0x5a12e720, -0x317900d6, -0x1a4608ab, -0x1e2b5d38, 0x2e88013a, -0x3e14fdf7,
    0x59d438e5, -0x32744493, -0x2092f05f, -0x19ef7944, 0x2aaa7c7f, -0x3d3e82ae, 0x5987b08a, -0x3367c090,
    -0x26b2a794, -0x158f9a76, 0x26b2a794, -0x3c42420a, 0x592d59da, -0x34534f41, -0x2c9caf6c, -0x1111d263,
    0x22a2f4f8, -0x3b20d79e, 0x58c542c5, -0x3536cc52, -0x3248d382, -0x0c7c5c1e, 0x1e7de5df, -0x39daf5e8,
    0x584f7b58, -0x361214b0, -0x37af354c, -0x07d59396, 0x1a4608ab, -0x387165e3, 0x57cc15bc, -0x36e5068a,
    -0x3cc85709, -0x0323ecbe, 0x15fdf758, -0x36e5068a, 0x573b2635, -0x37af8159, -0x418d2621, 0x0192155f,
    0x11a855df, -0x3536cc52, 0x569cc31b, -0x387165e3, -0x45f704f7, 0x0645e9af, 0x0d47d096, -0x3367c090,
    0x55f104dc, -0x392a9642, -0x49ffd417, 0x0af10a22, 0x08df1a8c, -0x317900d6, 0x553805f2, -0x39daf5e8,
    -0x4da1fab5, 0x0f8cfcbe, 0x0470ebdc, -0x2f6bbe45, 0x5471e2e6, -0x3a8269a3, -0x50d86e6d, 0x14135c94,
    0x00000000, -0x2d413ccd, 0x539eba45, -0x3b20d79e, -0x539eba45, 0x187de2a7, -0x0470ebdc, -0x2afad269,
    0x52beac9f, -0x3bb6276e, -0x55f104dc, 0x1cc66e99, -0x08df1a8c, -0x2899e64a, 0x51d1dc80, -0x3c42420a,
    -0x57cc15bc, 0x20e70f32, -0x0d47d096, -0x261feffa, 0x50d86e6d, -0x3cc511d9, -0x592d59da, 0x24da0a9a,
    -0x11a855df, -0x238e7673, 0x4fd288dc, -0x3d3e82ae, -0x5a12e720, 0x2899e64a, -0x15fdf758, -0x20e70f32,
    0x4ec05432, -0x3dae81cf, -0x5a7b7f1a, 0x2c216eaa, -0x1a4608ab, -0x1e2b5d38, 0x4da1fab5, -0x3e14fdf7,
    -0x5a6690ae, 0x2f6bbe45, -0x1e7de5df, -0x1b5d100a, 0x4c77a88e, -0x3e71e759, -0x59d438e5, 0x32744493,
    -0x22a2f4f8, -0x187de2a7, 0x4b418bbe, -0x3ec52fa0, -0x58c542c5, 0x3536cc52, -0x26b2a794, -0x158f9a76,
    0x49ffd417, -0x3f0ec9f5, -0x573b2635, 0x37af8159, -0x2aaa7c7f, -0x1294062f, 0x48b2b335, -0x3f4eaafe,
    -0x553805f2, 0x39daf5e8, -0x2e88013a, -0x0f8cfcbe, 0x475a5c77, -0x3f84c8e2, -0x52beac9f, 0x3bb6276e,
    -0x3248d382, -0x0c7c5c1e, 0x45f704f7, -0x3fb11b48, -0x4fd288dc, 0x3d3e82ae, -0x35eaa2c7, -0x09640837,
    0x4488e37f, -0x3fd39b5a, -0x4c77a88e, 0x3e71e759, -0x396b3199, -0x0645e9af, 0x43103085, -0x3fec43c7,
    -0x48b2b335, 0x3f4eaafe, -0x3cc85709, -0x0323ecbe, 0x418d2621, -0x3ffb10c1, -0x4488e37f, 0x3fd39b5a,
];
