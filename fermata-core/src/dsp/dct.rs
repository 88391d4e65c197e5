// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-point DCT-IV over 128 or 1024 words, computed as pre-twiddle, N/2-point complex FFT,
//! post-twiddle.
//!
//! The input is consumed in place. When the caller's data carries fewer than [`GBITS_IN_DCT4`]
//! guard bits, the rescaling variants right-shift the input by the deficit on the way in and
//! left-shift with saturation on the way out, so the butterflies themselves never overflow.
//! The transform loses one fractional bit end to end.

use crate::dsp::fft::{fft, FftSize};
use crate::util::fixed::{clip_2n_shift, mulshift32};

/// DCT-IV sizes supported by [`dct4`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dct4Size {
    /// 128 points.
    N128 = 0,
    /// 1024 points.
    N1024 = 1,
}

impl Dct4Size {
    #[inline(always)]
    fn fft_size(self) -> FftSize {
        match self {
            Dct4Size::N128 => FftSize::N64,
            Dct4Size::N1024 => FftSize::N512,
        }
    }
}

/// Guard bits required on the input for the unscaled path.
pub const GBITS_IN_DCT4: i32 = 4;

const NMDCT_TAB: [usize; 2] = [128, 1024];
const COS_4_SIN_4_TAB_OFFSET: [usize; 2] = [0, 128];
const POST_SKIP: [usize; 2] = [15, 1];

/// In-place DCT-IV. `gb` is the number of guard bits in `coefs`; the rescaling path is taken
/// when it is below [`GBITS_IN_DCT4`].
pub fn dct4(coefs: &mut [i32], gb: i32, size: Dct4Size) {
    debug_assert!(coefs.len() >= NMDCT_TAB[size as usize]);

    if gb < GBITS_IN_DCT4 {
        let es = (GBITS_IN_DCT4 - gb) as u32;
        pre_multiply_rescale(coefs, es, size);
        fft(coefs, size.fft_size());
        post_multiply_rescale(coefs, es, size);
    }
    else {
        pre_multiply(coefs, size);
        fft(coefs, size.fft_size());
        post_multiply(coefs, size);
    }
}

fn pre_multiply(x: &mut [i32], size: Dct4Size) {
    let nmdct = NMDCT_TAB[size as usize];
    let mut z1 = 0;
    let mut z2 = nmdct - 1;
    let mut cs = COS_4_SIN_4_TAB_OFFSET[size as usize];

    for _ in 0..nmdct >> 2 {
        let cps2a = COS_4_SIN_4_TAB[cs];
        let sin2a = COS_4_SIN_4_TAB[cs + 1];
        let cps2b = COS_4_SIN_4_TAB[cs + 2];
        let sin2b = COS_4_SIN_4_TAB[cs + 3];
        cs += 4;

        let ar1 = x[z1];
        let ai2 = x[z1 + 1];
        let ai1 = x[z2];
        let ar2 = x[z2 - 1];

        let t = mulshift32(sin2a, ar1 + ai1);
        let za = mulshift32(cps2a, ai1) - t;
        let cms2 = cps2a - 2 * sin2a;
        x[z1] = mulshift32(cms2, ar1) + t;
        x[z1 + 1] = za;
        z1 += 2;

        let t = mulshift32(sin2b, ar2 + ai2);
        let zb = mulshift32(cps2b, ai2) - t;
        let cms2 = cps2b - 2 * sin2b;
        x[z2] = zb;
        x[z2 - 1] = mulshift32(cms2, ar2) + t;
        z2 -= 2;
    }
}

fn pre_multiply_rescale(x: &mut [i32], es: u32, size: Dct4Size) {
    let nmdct = NMDCT_TAB[size as usize];
    let mut z1 = 0;
    let mut z2 = nmdct - 1;
    let mut cs = COS_4_SIN_4_TAB_OFFSET[size as usize];

    for _ in 0..nmdct >> 2 {
        let cps2a = COS_4_SIN_4_TAB[cs];
        let sin2a = COS_4_SIN_4_TAB[cs + 1];
        let cps2b = COS_4_SIN_4_TAB[cs + 2];
        let sin2b = COS_4_SIN_4_TAB[cs + 3];
        cs += 4;

        let ar1 = x[z1] >> es;
        let ai1 = x[z2] >> es;
        let ai2 = x[z1 + 1] >> es;

        let t = mulshift32(sin2a, ar1 + ai1);
        let za = mulshift32(cps2a, ai1) - t;
        let cms2 = cps2a - 2 * sin2a;
        x[z1] = mulshift32(cms2, ar1) + t;
        x[z1 + 1] = za;
        z1 += 2;

        let ar2 = x[z2 - 1] >> es;

        let t = mulshift32(sin2b, ar2 + ai2);
        let zb = mulshift32(cps2b, ai2) - t;
        let cms2 = cps2b - 2 * sin2b;
        x[z2] = zb;
        x[z2 - 1] = mulshift32(cms2, ar2) + t;
        z2 -= 2;
    }
}

fn post_multiply(x: &mut [i32], size: Dct4Size) {
    let nmdct = NMDCT_TAB[size as usize];
    let skip = POST_SKIP[size as usize];
    let mut f1 = 0;
    let mut f2 = nmdct - 1;

    let mut cs = 0;
    let mut cps2 = COS_1_SIN_1_TAB[cs];
    let mut sin2 = COS_1_SIN_1_TAB[cs + 1];
    cs += 1 + skip;
    let mut cms2 = cps2 - 2 * sin2;

    for _ in 0..nmdct >> 2 {
        let ar1 = x[f1];
        let ai1 = x[f1 + 1];
        let ar2 = x[f2 - 1];
        let ai2 = x[f2];

        let t = mulshift32(sin2, ar1 + ai1);
        x[f2] = t - mulshift32(cps2, ai1);
        f2 -= 1;
        x[f1] = t + mulshift32(cms2, ar1);
        f1 += 1;

        cps2 = COS_1_SIN_1_TAB[cs];
        sin2 = COS_1_SIN_1_TAB[cs + 1];
        cs += 1 + skip;

        let ai2 = -ai2;
        let t = mulshift32(sin2, ar2 + ai2);
        x[f2] = t - mulshift32(cps2, ai2);
        f2 -= 1;
        cms2 = cps2 - 2 * sin2;
        x[f1] = t + mulshift32(cms2, ar2);
        f1 += 1;
    }
}

fn post_multiply_rescale(x: &mut [i32], es: u32, size: Dct4Size) {
    let nmdct = NMDCT_TAB[size as usize];
    let skip = POST_SKIP[size as usize];
    let mut f1 = 0;
    let mut f2 = nmdct - 1;

    let mut cs = 0;
    let mut cs2 = COS_1_SIN_1_TAB[cs];
    let mut sin2 = COS_1_SIN_1_TAB[cs + 1];
    cs += 1 + skip;

    for _ in 0..nmdct >> 2 {
        let ar1 = x[f1];
        let ai1 = x[f1 + 1];
        let ai2 = x[f2];

        let t = mulshift32(sin2, ar1 + ai1);
        x[f2] = clip_2n_shift(t - mulshift32(cs2, ai1), es);
        f2 -= 1;
        cs2 -= 2 * sin2;
        x[f1] = clip_2n_shift(t + mulshift32(cs2, ar1), es);
        f1 += 1;

        cs2 = COS_1_SIN_1_TAB[cs];
        sin2 = COS_1_SIN_1_TAB[cs + 1];
        cs += 1 + skip;

        let ar2 = x[f2];
        let ai2 = -ai2;
        let t = mulshift32(sin2, ar2 + ai2);
        x[f2] = clip_2n_shift(t - mulshift32(cs2, ai2), es);
        f2 -= 1;
        cs2 -= 2 * sin2;
        x[f1] = clip_2n_shift(t + mulshift32(cs2, ar2), es);
        f1 += 1;
        cs2 += 2 * sin2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_dct4_of_zeros_is_zero() {
        for size in [Dct4Size::N128, Dct4Size::N1024] {
            let mut x = vec![0i32; NMDCT_TAB[size as usize]];
            dct4(&mut x, 31, size);
            assert!(x.iter().all(|&v| v == 0));
            // The rescale path must also be a no-op on silence.
            dct4(&mut x, 0, size);
            assert!(x.iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn verify_dct4_linearity_in_sign() {
        // DCT-IV is linear, so negating the input negates the output (up to the one-count
        // asymmetry of two's complement truncation).
        let mut a = vec![0i32; 128];
        let mut b = vec![0i32; 128];
        for (i, v) in a.iter_mut().enumerate() {
            *v = ((i as i32).wrapping_mul(2654435761u32 as i32) >> 8) & 0xfffff;
        }
        for (x, y) in a.iter().zip(b.iter_mut()) {
            *y = -*x;
        }
        dct4(&mut a, 10, Dct4Size::N128);
        dct4(&mut b, 10, Dct4Size::N128);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x + y).abs() <= 2, "asymmetry {} vs {}", x, y);
        }
    }
}
static COS_4_SIN_4_TAB: [i32; 1152] = [
    -0x406438cf, -0x006487c4, -0x412accd4, -0x3ffd3969, -0x41eeddaf, -0x01f69373, -0x42b063d0, -0x3ff0e3b6,
    -0x436f57c1, -0x038851a2, -0x442bb227, -0x3fdab1d9, -0x44e56bbd, -0x0519845e, -0x459c7d5a, -0x3fbaa740,
    -0x4650dff1, -0x06a9edc9, -0x47028c8d, -0x3f90c8da, -0x47b17c54, -0x08395024, -0x485da887, -0x3f5d1d1d,
    -0x49070a84, -0x09c76dd8, -0x49ad9bc2, -0x3f1fabff, -0x4a5155d6, -0x0b540982, -0x4af23270, -0x3ed87efc,
    -0x4b902b5c, -0x0cdee5f9, -0x4c2b3a84, -0x3e87a10c, -0x4cc359ec, -0x0e67c65a, -0x4d5883b7, -0x3e2d1ea8,
    -0x4deab226, -0x0fee6e0d, -0x4e79df95, -0x3dc905c5, -0x4f06067f, -0x1172a0d7, -0x4f8f217e, -0x3d5b65d2,
    -0x50152b47, -0x12f422db, -0x50981eb1, -0x3ce44fb7, -0x5117f6ae, -0x1472b8a5, -0x5194ae52, -0x3c63d5d1,
    -0x520e40cc, -0x15ee2738, -0x5284a96e, -0x3bda0bf0, -0x52f7e3a6, -0x1766340f, -0x5367eb03, -0x3b470753,
    -0x53d4bb34, -0x18daa52f, -0x543e5007, -0x3aaadea6, -0x54a4a56a, -0x1a4b4128, -0x5507b76a, -0x3a05a9fd,
    -0x55678236, -0x1bb7cf23, -0x55c4021d, -0x395782d3, -0x561d338d, -0x1d2016e9, -0x56731317, -0x38a08402,
    -0x56c59d6a, -0x1e83e0eb, -0x5714cf59, -0x37e0c9c3, -0x5760a5d5, -0x1fe2f64c, -0x57a91df2, -0x371871a5,
    -0x57ee34e5, -0x213d20e8, -0x582fe804, -0x36479a8e, -0x586e34c7, -0x22922b5e, -0x58a918c6, -0x356e64b2,
    -0x58e091bd, -0x23e1e117, -0x59149d87, -0x348cf190, -0x59453a24, -0x252c0e4f, -0x597265b4, -0x33a363ec,
    -0x599c1e78, -0x2670801a, -0x59c262d5, -0x32b1dfc9, -0x59e53151, -0x27af0472, -0x5a048895, -0x31b88a66,
    -0x5a20676c, -0x28e76a37, -0x5a38ccc2, -0x30b78a36, -0x5a4db7a6, -0x2a19813f, -0x5a5f274b, -0x2faf06da,
    -0x5a6d1b03, -0x2b451a55, -0x5a779246, -0x2e9f291b, -0x5a7e8cac, -0x2c6a0746, -0x5a8209f1, -0x2d881ae8,
    -0x400c8fc2, -0x000c90fe, -0x4025a7dc, -0x3ffff4e6, -0x403eb613, -0x003ed4ea, -0x4057ba60, -0x3fffc38c,
    -0x4070b4c2, -0x007118b0, -0x4089a534, -0x3fff6ab9, -0x40a28bb2, -0x00a35c30, -0x40bb6838, -0x3ffeea6c,
    -0x40d43ac3, -0x00d59f4c, -0x40ed034e, -0x3ffe42a4, -0x4105c1d6, -0x0107e1e3, -0x411e7658, -0x3ffd7364,
    -0x413720ce, -0x013a23d8, -0x414fc136, -0x3ffc7caa, -0x4168578b, -0x016c650b, -0x4180e3ca, -0x3ffb5e78,
    -0x419965f0, -0x019ea55d, -0x41b1ddf7, -0x3ffa18cf, -0x41ca4bdd, -0x01d0e4b0, -0x41e2af9e, -0x3ff8abae,
    -0x41fb0935, -0x020322e3, -0x421358a0, -0x3ff71718, -0x422b9ddb, -0x02355fd9, -0x4243d8e0, -0x3ff55b0d,
    -0x425c09ae, -0x02679b73, -0x42743041, -0x3ff3778e, -0x428c4c93, -0x0299d590, -0x42a45ea3, -0x3ff16c9c,
    -0x42bc666b, -0x02cc0e13, -0x42d463e9, -0x3fef3a39, -0x42ec5719, -0x02fe44dc, -0x43043ff6, -0x3fece065,
    -0x431c1e7e, -0x033079cc, -0x4333f2ad, -0x3fea5f23, -0x434bbc7e, -0x0362acc5, -0x43637bef, -0x3fe7b674,
    -0x437b30fb, -0x0394dda7, -0x4392db9f, -0x3fe4e659, -0x43aa7bd8, -0x03c70c54, -0x43c211a1, -0x3fe1eed5,
    -0x43d99cf7, -0x03f938ac, -0x43f11dd6, -0x3fdecfe8, -0x4408943c, -0x042b6290, -0x44200023, -0x3fdb8996,
    -0x44376189, -0x045d89e2, -0x444eb86a, -0x3fd81bdf, -0x446604c2, -0x048fae83, -0x447d468e, -0x3fd486c7,
    -0x44947dcb, -0x04c1d054, -0x44abaa73, -0x3fd0ca4f, -0x44c2cc85, -0x04f3ef35, -0x44d9e3fc, -0x3fcce67a,
    -0x44f0f0d5, -0x05260b08, -0x4507f30c, -0x3fc8db4a, -0x451eea9f, -0x055823ae, -0x4535d788, -0x3fc4a8c1,
    -0x454cb9c5, -0x058a3908, -0x45639152, -0x3fc04ee3, -0x457a5e2c, -0x05bc4af8, -0x4591204f, -0x3fbbcdb1,
    -0x45a7d7b7, -0x05ee595d, -0x45be8462, -0x3fb7252f, -0x45d5264b, -0x0620641a, -0x45ebbd6f, -0x3fb2555f,
    -0x460249cb, -0x06526b10, -0x4618cb5c, -0x3fad5e45, -0x462f421c, -0x06846e1f, -0x4645ae0a, -0x3fa83fe3,
    -0x465c0f22, -0x06b66d29, -0x46726560, -0x3fa2fa3d, -0x4688b0c1, -0x06e86810, -0x469ef142, -0x3f9d8d56,
    -0x46b526de, -0x071a5eb3, -0x46cb5193, -0x3f97f932, -0x46e1715d, -0x074c50f4, -0x46f78639, -0x3f923dd2,
    -0x470d9024, -0x077e3eb5, -0x47238f19, -0x3f8c5b3d, -0x47398316, -0x07b027d7, -0x474f6c16, -0x3f865174,
    -0x47654a18, -0x07e20c3b, -0x477b1d17, -0x3f80207b, -0x4790e510, -0x0813ebc2, -0x47a6a200, -0x3f79c857,
    -0x47bc53e3, -0x0845c64d, -0x47d1fab7, -0x3f73490b, -0x47e79676, -0x08779bbe, -0x47fd2720, -0x3f6ca29c,
    -0x4812acaf, -0x08a96bf6, -0x48282721, -0x3f65d50d, -0x483d9672, -0x08db36d6, -0x4852fa9f, -0x3f5ee063,
    -0x486853a5, -0x090cfc40, -0x487da180, -0x3f57c4a2, -0x4892e42e, -0x093ebc14, -0x48a81bab, -0x3f5081cd,
    -0x48bd47f3, -0x09707635, -0x48d26903, -0x3f4917eb, -0x48e77ed9, -0x09a22a83, -0x48fc8970, -0x3f4186ff,
    -0x491188c6, -0x09d3d8df, -0x49267cd8, -0x3f39cf0e, -0x493b65a2, -0x0a05812c, -0x49504320, -0x3f31f01d,
    -0x49651550, -0x0a37234a, -0x4979dc2f, -0x3f29ea31, -0x498e97b9, -0x0a68bf1b, -0x49a347eb, -0x3f21bd4e,
    -0x49b7ecc2, -0x0a9a5480, -0x49cc863b, -0x3f19697a, -0x49e11452, -0x0acbe35b, -0x49f59705, -0x3f10eeb9,
    -0x4a0a0e4f, -0x0afd6b8d, -0x4a1e7a2f, -0x3f084d12, -0x4a32daa1, -0x0b2eecf8, -0x4a472fa1, -0x3eff8489,
    -0x4a5b792e, -0x0b60677c, -0x4a6fb742, -0x3ef69523, -0x4a83e9dc, -0x0b91dafc, -0x4a9810f8, -0x3eed7ee7,
    -0x4aac2c94, -0x0bc34759, -0x4ac03cab, -0x3ee441da, -0x4ad4413c, -0x0bf4ac75, -0x4ae83a42, -0x3edade01,
    -0x4afc27bb, -0x0c260a31, -0x4b1009a4, -0x3ed15363, -0x4b23dff9, -0x0c57606e, -0x4b37aab8, -0x3ec7a205,
    -0x4b4b69de, -0x0c88af0e, -0x4b5f1d67, -0x3ebdc9ed, -0x4b72c550, -0x0cb9f5f3, -0x4b866197, -0x3eb3cb21,
    -0x4b99f238, -0x0ceb34fe, -0x4bad7731, -0x3ea9a5a8, -0x4bc0f07e, -0x0d1c6c11, -0x4bd45e1c, -0x3e9f5988,
    -0x4be7c009, -0x0d4d9b0e, -0x4bfb1641, -0x3e94e6c6, -0x4c0e60c2, -0x0d7ec1d6, -0x4c219f88, -0x3e8a4d6a,
    -0x4c34d290, -0x0dafe04b, -0x4c47f9d8, -0x3e7f8d7b, -0x4c5b155c, -0x0de0f64f, -0x4c6e251a, -0x3e74a6fd,
    -0x4c81290f, -0x0e1203c3, -0x4c942137, -0x3e6999fa, -0x4ca70d91, -0x0e430889, -0x4cb9ee18, -0x3e5e6676,
    -0x4cccc2ca, -0x0e740483, -0x4cdf8ba4, -0x3e530c7a, -0x4cf248a3, -0x0ea4f793, -0x4d04f9c5, -0x3e478c0b,
    -0x4d179f06, -0x0ed5e19a, -0x4d2a3863, -0x3e3be532, -0x4d3cc5da, -0x0f06c27a, -0x4d4f4768, -0x3e3017f6,
    -0x4d61bd0a, -0x0f379a16, -0x4d7426bd, -0x3e24245d, -0x4d86847e, -0x0f68684e, -0x4d98d64b, -0x3e180a6f,
    -0x4dab1c20, -0x0f992d06, -0x4dbd55fb, -0x3e0bca34, -0x4dcf83d9, -0x0fc9e81e, -0x4de1a5b7, -0x3dff63b2,
    -0x4df3bb93, -0x0ffa9979, -0x4e05c569, -0x3df2d6f3, -0x4e17c337, -0x102b40f8, -0x4e29b4fa, -0x3de623fd,
    -0x4e3b9aaf, -0x105bde7f, -0x4e4d7453, -0x3dd94ad8, -0x4e5f41e5, -0x108c71ee, -0x4e710360, -0x3dcc4b8d,
    -0x4e82b8c3, -0x10bcfb28, -0x4e94620a, -0x3dbf2622, -0x4ea5ff33, -0x10ed7a0e, -0x4eb7903b, -0x3db1daa2,
    -0x4ec9151f, -0x111dee84, -0x4eda8ddd, -0x3da46912, -0x4eebfa72, -0x114e586a, -0x4efd5adc, -0x3d96d17d,
    -0x4f0eaf17, -0x117eb7a4, -0x4f1ff720, -0x3d8913ea, -0x4f3132f7, -0x11af0c13, -0x4f426296, -0x3d7b3061,
    -0x4f5385fd, -0x11df5599, -0x4f649d28, -0x3d6d26ec, -0x4f75a815, -0x120f941a, -0x4f86a6c1, -0x3d5ef793,
    -0x4f979929, -0x123fc776, -0x4fa87f4b, -0x3d50a25e, -0x4fb95925, -0x126fef90, -0x4fca26b2, -0x3d422757,
    -0x4fdae7f2, -0x12a00c4b, -0x4feb9ce2, -0x3d338687, -0x4ffc457e, -0x12d01d89, -0x500ce1c5, -0x3d24bff6,
    -0x501d71b3, -0x1300232c, -0x502df547, -0x3d15d3ad, -0x503e6c7d, -0x13301d16, -0x504ed753, -0x3d06c1b6,
    -0x505f35c7, -0x13600b2a, -0x506f87d6, -0x3cf78a1b, -0x507fcd7d, -0x138fed4b, -0x509006bb, -0x3ce82ce4,
    -0x50a0338c, -0x13bfc35b, -0x50b053ee, -0x3cd8aa1b, -0x50c067de, -0x13ef8d3c, -0x50d06f5b, -0x3cc901c9,
    -0x50e06a61, -0x141f4ad1, -0x50f058ee, -0x3cb933f9, -0x51003b00, -0x144efbfc, -0x51101094, -0x3ca940b3,
    -0x511fd9a8, -0x147ea0a0, -0x512f9639, -0x3c992803, -0x513f4645, -0x14ae38a0, -0x514ee9ca, -0x3c88e9f1,
    -0x515e80c5, -0x14ddc3de, -0x516e0b33, -0x3c788688, -0x517d8913, -0x150d423d, -0x518cfa61, -0x3c67fdd1,
    -0x519c5f1d, -0x153cb3a0, -0x51abb742, -0x3c574fd8, -0x51bb02cf, -0x156c17e9, -0x51ca41c1, -0x3c467ca6,
    -0x51d97417, -0x159b6efb, -0x51e899cd, -0x3c358446, -0x51f7b2e1, -0x15cab8ba, -0x5206bf52, -0x3c2466c2,
    -0x5215bf1c, -0x15f9f507, -0x5224b23e, -0x3c132424, -0x523398b5, -0x162923c5, -0x5242727e, -0x3c01bc78,
    -0x52513f99, -0x165844d8, -0x52600001, -0x3bf02fc9, -0x526eb3b5, -0x16875823, -0x527d5ab4, -0x3bde7e20,
    -0x528bf4f9, -0x16b65d88, -0x529a8284, -0x3bcca789, -0x52a90351, -0x16e554ea, -0x52b77760, -0x3bbaac0e,
    -0x52c5dead, -0x17143e2d, -0x52d43936, -0x3ba88bbc, -0x52e286f9, -0x17431933, -0x52f0c7f4, -0x3b96469d,
    -0x52fefc25, -0x1771e5e0, -0x530d2389, -0x3b83dcbc, -0x531b3e1e, -0x17a0a417, -0x53294be2, -0x3b714e25,
    -0x53374cd4, -0x17cf53bb, -0x534540f0, -0x3b5e9ae4, -0x53532835, -0x17fdf4ae, -0x536102a0, -0x3b4bc303,
    -0x536ed02f, -0x182c86d5, -0x537c90e1, -0x3b38c68e, -0x538a44b3, -0x185b0a13, -0x5397eba3, -0x3b25a591,
    -0x53a585ae, -0x18897e4a, -0x53b312d4, -0x3b126019, -0x53c09311, -0x18b7e35f, -0x53ce0663, -0x3afef630,
    -0x53db6cca, -0x18e63935, -0x53e8c641, -0x3aeb67e3, -0x53f612c8, -0x19147fae, -0x5403525d, -0x3ad7b53d,
    -0x541084fc, -0x1942b6af, -0x541daaa5, -0x3ac3de4c, -0x542ac356, -0x1970de1b, -0x5437cf0b, -0x3aafe31b,
    -0x5444cdc4, -0x199ef5d6, -0x5451bf7e, -0x3a9bc3b6, -0x545ea437, -0x19ccfdc2, -0x546b7bed, -0x3a87802a,
    -0x5478469e, -0x19faf5c5, -0x54850449, -0x3a731884, -0x5491b4eb, -0x1a28ddc0, -0x549e5883, -0x3a5e8cd0,
    -0x54aaef0d, -0x1a56b599, -0x54b7788a, -0x3a49dd1a, -0x54c3f4f5, -0x1a847d33, -0x54d0644f, -0x3a350970,
    -0x54dcc694, -0x1ab23471, -0x54e91bc3, -0x3a2011de, -0x54f563d9, -0x1adfdb37, -0x55019ed6, -0x3a0af671,
    -0x550dccb7, -0x1b0d716a, -0x5519ed7a, -0x39f5b737, -0x5526011d, -0x1b3af6ec, -0x5532079f, -0x39e0543c,
    -0x553e00fd, -0x1b686ba3, -0x5549ed36, -0x39cacd8d, -0x5555cc48, -0x1b95cf71, -0x55619e31, -0x39b52339,
    -0x556d62f0, -0x1bc3223c, -0x55791a82, -0x399f554b, -0x5584c4e5, -0x1bf063e6, -0x55906219, -0x398963d2,
    -0x559bf21a, -0x1c1d9454, -0x55a774e8, -0x39734edc, -0x55b2ea81, -0x1c4ab36b, -0x55be52e2, -0x395d1675,
    -0x55c9ae0a, -0x1c77c10e, -0x55d4fbf7, -0x3946baac, -0x55e03ca8, -0x1ca4bd21, -0x55eb701a, -0x39303b8e,
    -0x55f6964d, -0x1cd1a78a, -0x5601af3e, -0x39199929, -0x560cbaeb, -0x1cfe802b, -0x5617b953, -0x3902d38b,
    -0x5622aa75, -0x1d2b46ea, -0x562d8e4e, -0x38ebeac2, -0x563864dd, -0x1d57fbaa, -0x56432e20, -0x38d4dedd,
    -0x564dea16, -0x1d849e51, -0x565898bc, -0x38bdafea, -0x56633a12, -0x1db12ec3, -0x566dce15, -0x38a65df6,
    -0x567854c4, -0x1dddace4, -0x5682ce1d, -0x388ee910, -0x568d3a1f, -0x1e0a1898, -0x569798c8, -0x38775147,
    -0x56a1ea17, -0x1e3671c5, -0x56ac2e09, -0x385f96a9, -0x56b6649e, -0x1e62b84f, -0x56c08dd4, -0x3847b946,
    -0x56caa9a8, -0x1e8eec1b, -0x56d4b81b, -0x382fb92a, -0x56deb929, -0x1ebb0d0d, -0x56e8acd2, -0x38179666,
    -0x56f29314, -0x1ee71b0a, -0x56fc6bed, -0x37ff5109, -0x5706375c, -0x1f1315f7, -0x570ff560, -0x37e6e921,
    -0x5719a5f6, -0x1f3efdb9, -0x5723491e, -0x37ce5ebd, -0x572cded6, -0x1f6ad235, -0x5736671d, -0x37b5b1ec,
    -0x573fe1f0, -0x1f969350, -0x57494f4f, -0x379ce2be, -0x5752af38, -0x1fc240ef, -0x575c01a9, -0x3783f143,
    -0x576546a2, -0x1feddaf6, -0x576e7e21, -0x376add88, -0x5777a824, -0x2019614c, -0x5780c4a9, -0x3751a79e,
    -0x5789d3b1, -0x2044d3d4, -0x5792d538, -0x37384f95, -0x579bc93e, -0x20703275, -0x57a4afc2, -0x371ed57c,
    -0x57ad88c1, -0x209b7d13, -0x57b6543c, -0x37053962, -0x57bf122f, -0x20c6b395, -0x57c7c29a, -0x36eb7b58,
    -0x57d0657c, -0x20f1d5de, -0x57d8fad3, -0x36d19b6e, -0x57e1829e, -0x211ce3d5, -0x57e9fcdc, -0x36b799b3,
    -0x57f2698b, -0x2147dd5f, -0x57fac8aa, -0x369d7637, -0x58031a37, -0x2172c262, -0x580b5e32, -0x3683310b,
    -0x5813949a, -0x219d92c2, -0x581bbd6c, -0x3668ca3e, -0x5823d8a7, -0x21c84e67, -0x582be64c, -0x364e41e2,
    -0x5833e657, -0x21f2f534, -0x583bd8c8, -0x36339806, -0x5843bd9e, -0x221d8711, -0x584b94d7, -0x3618ccba,
    -0x58535e72, -0x224803e2, -0x585b1a6f, -0x35fde011, -0x5862c8cb, -0x22726b8e, -0x586a6986, -0x35e2d219,
    -0x5871fc9f, -0x229cbdfa, -0x58798214, -0x35c7a2e3, -0x5880f9e4, -0x22c6fb0c, -0x5888640e, -0x35ac5282,
    -0x588fc090, -0x22f122ab, -0x58970f6b, -0x3590e104, -0x589e509c, -0x231b34bc, -0x58a58423, -0x35754e7c,
    -0x58aca9fe, -0x23453125, -0x58b3c22c, -0x35599afa, -0x58baccad, -0x236f17cc, -0x58c1c97f, -0x353dc68f,
    -0x58c8b8a0, -0x2398e898, -0x58cf9a11, -0x3521d14d, -0x58d66dcf, -0x23c2a36f, -0x58dd33db, -0x3505bb44,
    -0x58e3ec32, -0x23ec4837, -0x58ea96d4, -0x34e98487, -0x58f133bf, -0x2415d6d5, -0x58f7c2f3, -0x34cd2d26,
    -0x58fe446f, -0x243f4f32, -0x5904b832, -0x34b0b533, -0x590b1e3a, -0x2468b132, -0x59117687, -0x34941cbf,
    -0x5917c118, -0x2491fcbe, -0x591dfdec, -0x347763dd, -0x59242d01, -0x24bb31ba, -0x592a4e57, -0x345a8a9d,
    -0x593061ed, -0x24e4500e, -0x593667c2, -0x343d9112, -0x593c5fd5, -0x250d57a0, -0x59424a26, -0x3420774d,
    -0x594826b2, -0x25364857, -0x594df57a, -0x34033d61, -0x5953b67c, -0x255f2219, -0x595969b7, -0x33e5e360,
    -0x595f0f2b, -0x2587e4cf, -0x5964a6d7, -0x33c8695b, -0x596a30ba, -0x25b0905d, -0x596facd3, -0x33aacf65,
    -0x59751b21, -0x25d924ac, -0x597a7ba4, -0x338d1590, -0x597fce5a, -0x2601a1a2, -0x59851343, -0x336f3bee,
    -0x598a4a5d, -0x262a0727, -0x598f73a9, -0x33514292, -0x59948f25, -0x26525521, -0x59999cd0, -0x3333298f,
    -0x599e9cab, -0x267a8b77, -0x59a38eb3, -0x3314f0f6, -0x59a872e8, -0x26a2aa11, -0x59ad494a, -0x32f698db,
    -0x59b211d8, -0x26cab0d6, -0x59b6cc90, -0x32d82150, -0x59bb7973, -0x26f29fad, -0x59c0187f, -0x32b98a67,
    -0x59c4a9b4, -0x271a767e, -0x59c92d12, -0x329ad435, -0x59cda296, -0x27423530, -0x59d20a41, -0x327bfecc,
    -0x59d66413, -0x2769dbaa, -0x59dab009, -0x325d0a3e, -0x59deee25, -0x279169d5, -0x59e31e64, -0x323df6a0,
    -0x59e740c7, -0x27b8df97, -0x59eb554d, -0x321ec403, -0x59ef5bf4, -0x27e03cd8, -0x59f354bd, -0x31ff727c,
    -0x59f73fa8, -0x28078181, -0x59fb1cb2, -0x31e0021e, -0x59feebdc, -0x282ead78, -0x5a02ad25, -0x31c072fb,
    -0x5a06608d, -0x2855c0a6, -0x5a0a0613, -0x31a0c528, -0x5a0d9db6, -0x287cbaf3, -0x5a112776, -0x3180f8b8,
    -0x5a14a352, -0x28a39c46, -0x5a18114a, -0x31610dbf, -0x5a1b715d, -0x28ca6488, -0x5a1ec38b, -0x31410450,
    -0x5a2207d3, -0x28f113a0, -0x5a253e35, -0x3120dc80, -0x5a2866b0, -0x2917a977, -0x5a2b8144, -0x31009661,
    -0x5a2e8df0, -0x293e25f5, -0x5a318cb3, -0x30e03208, -0x5a347d8e, -0x29648902, -0x5a376080, -0x30bfaf89,
    -0x5a3a3589, -0x298ad287, -0x5a3cfca7, -0x309f0ef8, -0x5a3fb5db, -0x29b1026c, -0x5a426124, -0x307e5069,
    -0x5a44fe81, -0x29d71899, -0x5a478df3, -0x305d73f0, -0x5a4a0f79, -0x29fd14f6, -0x5a4c8312, -0x303c79a2,
    -0x5a4ee8bf, -0x2a22f76e, -0x5a51407e, -0x301b6193, -0x5a538a50, -0x2a48bfe7, -0x5a55c633, -0x2ffa2bd6,
    -0x5a57f429, -0x2a6e6e4b, -0x5a5a1430, -0x2fd8d882, -0x5a5c2648, -0x2a940283, -0x5a5e2a70, -0x2fb767aa,
    -0x5a6020a9, -0x2ab97c77, -0x5a6208f2, -0x2f95d963, -0x5a63e34b, -0x2adedc10, -0x5a65afb4, -0x2f742dc1,
    -0x5a676e2c, -0x2b042137, -0x5a691eb2, -0x2f5264da, -0x5a6ac148, -0x2b294bd5, -0x5a6c55ec, -0x2f307ec2,
    -0x5a6ddc9e, -0x2b4e5bd4, -0x5a6f555e, -0x2f0e7b8e, -0x5a70c02c, -0x2b73511c, -0x5a721d08, -0x2eec5b53,
    -0x5a736bf1, -0x2b982b97, -0x5a74ace7, -0x2eca1e27, -0x5a75dfea, -0x2bbceb2d, -0x5a7704fa, -0x2ea7c41e,
    -0x5a781c16, -0x2be18fc9, -0x5a79253f, -0x2e854d4d, -0x5a7a2074, -0x2c061953, -0x5a7b0db5, -0x2e62b9ca,
    -0x5a7bed02, -0x2c2a87b6, -0x5a7cbe5b, -0x2e4009aa, -0x5a7d81c0, -0x2c4edada, -0x5a7e3730, -0x2e1d3d03,
    -0x5a7edeac, -0x2c7312a9, -0x5a7f7833, -0x2dfa53e9, -0x5a8003c5, -0x2c972f0d, -0x5a808163, -0x2dd74e73,
    -0x5a80f10b, -0x2cbb2fef, -0x5a8152bf, -0x2db42cb6, -0x5a81a67e, -0x2cdf153a, -0x5a81ec48, -0x2d90eec8,
    -0x5a82241c, -0x2d02ded7, -0x5a824dfc, -0x2d6d94bf, -0x5a8269e6, -0x2d268cb0, -0x5a8277db, -0x2d4a1eaf,
];

static COS_1_SIN_1_TAB: [i32; 514] = [
    0x40000000, 0x00000000, 0x40323034, 0x003243f1, 0x406438cf, 0x006487c4, 0x409619b2, 0x0096cb58,
    0x40c7d2bd, 0x00c90e90, 0x40f963d3, 0x00fb514b, 0x412accd4, 0x012d936c, 0x415c0da3, 0x015fd4d2,
    0x418d2621, 0x0192155f, 0x41be162f, 0x01c454f5, 0x41eeddaf, 0x01f69373, 0x421f7c84, 0x0228d0bb,
    0x424ff28f, 0x025b0caf, 0x42803fb2, 0x028d472e, 0x42b063d0, 0x02bf801a, 0x42e05ecb, 0x02f1b755,
    0x43103085, 0x0323ecbe, 0x433fd8e1, 0x03562038, 0x436f57c1, 0x038851a2, 0x439ead09, 0x03ba80df,
    0x43cdd89a, 0x03ecadcf, 0x43fcda59, 0x041ed854, 0x442bb227, 0x0451004d, 0x445a5fe8, 0x0483259d,
    0x4488e37f, 0x04b54825, 0x44b73ccf, 0x04e767c5, 0x44e56bbd, 0x0519845e, 0x4513702a, 0x054b9dd3,
    0x454149fc, 0x057db403, 0x456ef916, 0x05afc6d0, 0x459c7d5a, 0x05e1d61b, 0x45c9d6af, 0x0613e1c5,
    0x45f704f7, 0x0645e9af, 0x46240816, 0x0677edbb, 0x4650dff1, 0x06a9edc9, 0x467d8c6d, 0x06dbe9bb,
    0x46aa0d6d, 0x070de172, 0x46d662d6, 0x073fd4cf, 0x47028c8d, 0x0771c3b3, 0x472e8a76, 0x07a3adff,
    0x475a5c77, 0x07d59396, 0x47860275, 0x08077457, 0x47b17c54, 0x08395024, 0x47dcc9f9, 0x086b26de,
    0x4807eb4b, 0x089cf867, 0x4832e02d, 0x08cec4a0, 0x485da887, 0x09008b6a, 0x4888443d, 0x09324ca7,
    0x48b2b335, 0x09640837, 0x48dcf556, 0x0995bdfd, 0x49070a84, 0x09c76dd8, 0x4930f2a6, 0x09f917ac,
    0x495aada2, 0x0a2abb59, 0x49843b5f, 0x0a5c58c0, 0x49ad9bc2, 0x0a8defc3, 0x49d6ceb3, 0x0abf8043,
    0x49ffd417, 0x0af10a22, 0x4a28abd6, 0x0b228d42, 0x4a5155d6, 0x0b540982, 0x4a79d1ff, 0x0b857ec7,
    0x4aa22036, 0x0bb6ecef, 0x4aca4065, 0x0be853de, 0x4af23270, 0x0c19b374, 0x4b19f641, 0x0c4b0b94,
    0x4b418bbe, 0x0c7c5c1e, 0x4b68f2cf, 0x0cada4f5, 0x4b902b5c, 0x0cdee5f9, 0x4bb7354d, 0x0d101f0e,
    0x4bde1089, 0x0d415013, 0x4c04bcf8, 0x0d7278eb, 0x4c2b3a84, 0x0da39978, 0x4c518913, 0x0dd4b19a,
    0x4c77a88e, 0x0e05c135, 0x4c9d98de, 0x0e36c82a, 0x4cc359ec, 0x0e67c65a, 0x4ce8eb9f, 0x0e98bba7,
    0x4d0e4de2, 0x0ec9a7f3, 0x4d33809c, 0x0efa8b20, 0x4d5883b7, 0x0f2b650f, 0x4d7d571c, 0x0f5c35a3,
    0x4da1fab5, 0x0f8cfcbe, 0x4dc66e6a, 0x0fbdba40, 0x4deab226, 0x0fee6e0d, 0x4e0ec5d1, 0x101f1807,
    0x4e32a956, 0x104fb80e, 0x4e565c9f, 0x10804e06, 0x4e79df95, 0x10b0d9d0, 0x4e9d3222, 0x10e15b4e,
    0x4ec05432, 0x1111d263, 0x4ee345ad, 0x11423ef0, 0x4f06067f, 0x1172a0d7, 0x4f289692, 0x11a2f7fc,
    0x4f4af5d1, 0x11d3443f, 0x4f6d2427, 0x12038584, 0x4f8f217e, 0x1233bbac, 0x4fb0edc1, 0x1263e699,
    0x4fd288dc, 0x1294062f, 0x4ff3f2bb, 0x12c41a4f, 0x50152b47, 0x12f422db, 0x5036326e, 0x13241fb6,
    0x50570819, 0x135410c3, 0x5077ac37, 0x1383f5e3, 0x50981eb1, 0x13b3cefa, 0x50b85f74, 0x13e39be9,
    0x50d86e6d, 0x14135c94, 0x50f84b87, 0x144310dd, 0x5117f6ae, 0x1472b8a5, 0x51376fd0, 0x14a253d1,
    0x5156b6d9, 0x14d1e242, 0x5175cbb5, 0x150163dc, 0x5194ae52, 0x1530d881, 0x51b35e9b, 0x15604013,
    0x51d1dc80, 0x158f9a76, 0x51f027eb, 0x15bee78c, 0x520e40cc, 0x15ee2738, 0x522c270f, 0x161d595d,
    0x5249daa2, 0x164c7ddd, 0x52675b72, 0x167b949d, 0x5284a96e, 0x16aa9d7e, 0x52a1c482, 0x16d99864,
    0x52beac9f, 0x17088531, 0x52db61b0, 0x173763c9, 0x52f7e3a6, 0x1766340f, 0x5314326d, 0x1794f5e6,
    0x53304df6, 0x17c3a931, 0x534c362d, 0x17f24dd3, 0x5367eb03, 0x1820e3b0, 0x53836c66, 0x184f6aab,
    0x539eba45, 0x187de2a7, 0x53b9d48f, 0x18ac4b87, 0x53d4bb34, 0x18daa52f, 0x53ef6e23, 0x1908ef82,
    0x5409ed4b, 0x19372a64, 0x5424389d, 0x196555b8, 0x543e5007, 0x19937161, 0x5458337a, 0x19c17d44,
    0x5471e2e6, 0x19ef7944, 0x548b5e3b, 0x1a1d6544, 0x54a4a56a, 0x1a4b4128, 0x54bdb862, 0x1a790cd4,
    0x54d69714, 0x1aa6c82b, 0x54ef4171, 0x1ad47312, 0x5507b76a, 0x1b020d6c, 0x551ff8ef, 0x1b2f971e,
    0x553805f2, 0x1b5d100a, 0x554fde64, 0x1b8a7815, 0x55678236, 0x1bb7cf23, 0x557ef15a, 0x1be51518,
    0x55962bc0, 0x1c1249d8, 0x55ad315b, 0x1c3f6d47, 0x55c4021d, 0x1c6c7f4a, 0x55da9df7, 0x1c997fc4,
    0x55f104dc, 0x1cc66e99, 0x560736bd, 0x1cf34baf, 0x561d338d, 0x1d2016e9, 0x5632fb3f, 0x1d4cd02c,
    0x56488dc5, 0x1d79775c, 0x565deb11, 0x1da60c5d, 0x56731317, 0x1dd28f15, 0x568805c9, 0x1dfeff67,
    0x569cc31b, 0x1e2b5d38, 0x56b14b00, 0x1e57a86d, 0x56c59d6a, 0x1e83e0eb, 0x56d9ba4e, 0x1eb00696,
    0x56eda1a0, 0x1edc1953, 0x57015352, 0x1f081907, 0x5714cf59, 0x1f340596, 0x572815a8, 0x1f5fdee6,
    0x573b2635, 0x1f8ba4dc, 0x574e00f2, 0x1fb7575c, 0x5760a5d5, 0x1fe2f64c, 0x577314d2, 0x200e8190,
    0x57854ddd, 0x2039f90f, 0x579750ec, 0x20655cac, 0x57a91df2, 0x2090ac4d, 0x57bab4e6, 0x20bbe7d8,
    0x57cc15bc, 0x20e70f32, 0x57dd406a, 0x21122240, 0x57ee34e5, 0x213d20e8, 0x57fef323, 0x21680b0f,
    0x580f7b19, 0x2192e09b, 0x581fccbc, 0x21bda171, 0x582fe804, 0x21e84d76, 0x583fcce6, 0x2212e492,
    0x584f7b58, 0x223d66a8, 0x585ef351, 0x2267d3a0, 0x586e34c7, 0x22922b5e, 0x587d3fb0, 0x22bc6dca,
    0x588c1404, 0x22e69ac8, 0x589ab1b9, 0x2310b23e, 0x58a918c6, 0x233ab414, 0x58b74923, 0x2364a02e,
    0x58c542c5, 0x238e7673, 0x58d305a6, 0x23b836ca, 0x58e091bd, 0x23e1e117, 0x58ede700, 0x240b7543,
    0x58fb0568, 0x2434f332, 0x5907eced, 0x245e5acc, 0x59149d87, 0x2487abf7, 0x5921172e, 0x24b0e699,
    0x592d59da, 0x24da0a9a, 0x59396584, 0x250317df, 0x59453a24, 0x252c0e4f, 0x5950d7b3, 0x2554edd1,
    0x595c3e2a, 0x257db64c, 0x59676d82, 0x25a667a7, 0x597265b4, 0x25cf01c8, 0x597d26b8, 0x25f78497,
    0x5987b08a, 0x261feffa, 0x59920321, 0x264843d9, 0x599c1e78, 0x2670801a, 0x59a60288, 0x2698a4a6,
    0x59afaf4c, 0x26c0b162, 0x59b924bc, 0x26e8a637, 0x59c262d5, 0x2710830c, 0x59cb698f, 0x273847c8,
    0x59d438e5, 0x275ff452, 0x59dcd0d3, 0x27878893, 0x59e53151, 0x27af0472, 0x59ed5a5c, 0x27d667d5,
    0x59f54bee, 0x27fdb2a7, 0x59fd0603, 0x2824e4cc, 0x5a048895, 0x284bfe2f, 0x5a0bd3a1, 0x2872feb6,
    0x5a12e720, 0x2899e64a, 0x5a19c310, 0x28c0b4d2, 0x5a20676c, 0x28e76a37, 0x5a26d42f, 0x290e0661,
    0x5a2d0957, 0x29348937, 0x5a3306de, 0x295af2a3, 0x5a38ccc2, 0x2981428c, 0x5a3e5afe, 0x29a778db,
    0x5a43b190, 0x29cd9578, 0x5a48d074, 0x29f3984c, 0x5a4db7a6, 0x2a19813f, 0x5a526725, 0x2a3f503a,
    0x5a56deec, 0x2a650525, 0x5a5b1efa, 0x2a8a9fea, 0x5a5f274b, 0x2ab02071, 0x5a62f7dd, 0x2ad586a3,
    0x5a6690ae, 0x2afad269, 0x5a69f1bb, 0x2b2003ac, 0x5a6d1b03, 0x2b451a55, 0x5a700c84, 0x2b6a164d,
    0x5a72c63b, 0x2b8ef77d, 0x5a754827, 0x2bb3bdce, 0x5a779246, 0x2bd8692b, 0x5a79a498, 0x2bfcf97c,
    0x5a7b7f1a, 0x2c216eaa, 0x5a7d21cc, 0x2c45c8a0, 0x5a7e8cac, 0x2c6a0746, 0x5a7fbfbb, 0x2c8e2a87,
    0x5a80baf6, 0x2cb2324c, 0x5a817e5d, 0x2cd61e7f, 0x5a8209f1, 0x2cf9ef09, 0x5a825db0, 0x2d1da3d5,
    0x5a82799a, 0x2d413ccd,
];
