//! Packed 32-bit register operations: the CSKY DSP multiply/halving instructions,
//! the CSI SIMD intrinsics and a few RISC-V P extension instructions.
//!
//! Halfword `0` and byte `0` are the least significant lanes.
use super::*;

fn lo16(x: u32) -> i32 {
    x as u16 as i16 as i32
}

fn hi16(x: u32) -> i32 {
    (x >> 16) as u16 as i16 as i32
}

fn pack16(lo: i32, hi: i32) -> u32 {
    ((hi as u32) << 16) | (lo as u32 & 0xffff)
}

fn lanes8<F: Fn(u32, u32) -> u32>(x: u32, y: u32, f: F) -> u32 {
    (0..4).fold(0u32, |acc, i| {
        let a = (x >> (i * 8)) & 0xff;
        let b = (y >> (i * 8)) & 0xff;
        acc | ((f(a, b) & 0xff) << (i * 8))
    })
}

fn lanes16<F: Fn(u32, u32) -> u32>(x: u32, y: u32, f: F) -> u32 {
    (0..2).fold(0u32, |acc, i| {
        let a = (x >> (i * 16)) & 0xffff;
        let b = (y >> (i * 16)) & 0xffff;
        acc | ((f(a, b) & 0xffff) << (i * 16))
    })
}

fn packed(x: u32, y: u32, w: Width, f: fn(BitsT, BitsT, Width, Sign) -> BitsT, sign: Sign) -> u32 {
    map_lanes(x as BitsT, y as BitsT, w, 32, |a, b| f(a, b, w, sign)) as u32
}

// CSKY DSP

/// MUL.S32.RH: `(rx * ry + 0x80000000) >> 32`
pub fn mul_s32_rh(x: u32, y: u32) -> u32 {
    mul_high(x as BitsT, y as BitsT, Width::W32, Sign::Signed, Some(31), 32) as u32
}

/// MULLL.S16.F: low halfwords product, doubled, wraps
pub fn mulll_s16_f(x: u32, y: u32) -> u32 {
    (lo16(x) * lo16(y)).wrapping_shl(1) as u32
}

/// MULCSX.S16.F: `(x.lo * y.hi - x.hi * y.lo) << 1`, wraps
pub fn mulcsx_s16_f(x: u32, y: u32) -> u32 {
    let cross = (lo16(x) as i64) * (hi16(y) as i64) - (hi16(x) as i64) * (lo16(y) as i64);
    (cross << 1) as u32
}

/// PMULAWH.S16.F: two fractional products of the high halfword of `y`, each
/// accumulated into one 32-bit half of `acc`
pub fn pmulawh_s16_f(acc: u64, x: u32, y: u32) -> u64 {
    let acc_lo = acc as u32;
    let acc_hi = (acc >> 32) as u32;
    let lo = acc_lo.wrapping_add((lo16(x) * hi16(y)).wrapping_shl(1) as u32);
    let hi = acc_hi.wrapping_add((hi16(x) * hi16(y)).wrapping_shl(1) as u32);
    ((hi as u64) << 32) | lo as u64
}

/// DUP.16: halfword `index` of `x` copied into both halves
pub fn dup_16(x: u32, index: u32) -> u32 {
    let h = (x >> ((index & 1) * 16)) & 0xffff;
    (h << 16) | h
}

/// MULA.S32.HS: `acc + (x * y) >> 32`, saturated to 32 bits
pub fn mula_s32_hs(x: u32, y: u32, acc: u32) -> u32 {
    let high = (x as i32 as i64 * y as i32 as i64) >> 32;
    saturate(acc as i32 as i128 + high as i128, Width::W32, Sign::Signed) as u32
}

/// MULSCAX.S16.E: `acc - (x.lo * y.hi + x.hi * y.lo)` on a 64-bit pair, wraps
pub fn mulscax_s16_e(x: u32, y: u32, acc: u64) -> u64 {
    let cross = (lo16(x) as i64) * (hi16(y) as i64) + (hi16(x) as i64) * (lo16(y) as i64);
    (acc as i64).wrapping_sub(cross) as u64
}

/// PCMPLT.S8: all ones in each byte where `x < y`
pub fn pcmplt_s8(x: u32, y: u32) -> u32 {
    lanes8(x, y, |a, b| if (a as u8 as i8) < (b as u8 as i8) { 0xff } else { 0 })
}

/// PRMUL.S16.H: per halfword the high half of the doubled product, `-1 * -1` saturates
pub fn prmul_s16_h(x: u32, y: u32) -> u32 {
    lanes16(x, y, |a, b| {
        let p = (a as u16 as i16 as i32) * (b as u16 as i16 as i32);
        if p == 0x4000_0000 {
            0x7fff
        } else {
            (p >> 15) as u32
        }
    })
}

/// PADDH.S16: per halfword, the wrapped 16 bits sum halved toward zero
pub fn paddh_s16(x: u32, y: u32) -> u32 {
    lanes16(x, y, |a, b| {
        let sum = a.wrapping_add(b) as u16 as i16;
        (sum / 2) as u16 as u32
    })
}

// CSI intrinsics

pub fn qadd8(x: u32, y: u32) -> u32 {
    packed(x, y, Width::W8, sat_add, Sign::Signed)
}

pub fn qadd16(x: u32, y: u32) -> u32 {
    packed(x, y, Width::W16, sat_add, Sign::Signed)
}

pub fn uqadd8(x: u32, y: u32) -> u32 {
    packed(x, y, Width::W8, sat_add, Sign::Unsigned)
}

pub fn uqadd16(x: u32, y: u32) -> u32 {
    packed(x, y, Width::W16, sat_add, Sign::Unsigned)
}

pub fn qsub8(x: u32, y: u32) -> u32 {
    packed(x, y, Width::W8, sat_sub, Sign::Signed)
}

pub fn qsub16(x: u32, y: u32) -> u32 {
    packed(x, y, Width::W16, sat_sub, Sign::Signed)
}

pub fn uqsub8(x: u32, y: u32) -> u32 {
    packed(x, y, Width::W8, sat_sub, Sign::Unsigned)
}

pub fn uqsub16(x: u32, y: u32) -> u32 {
    packed(x, y, Width::W16, sat_sub, Sign::Unsigned)
}

pub fn sadd8(x: u32, y: u32) -> u32 {
    lanes8(x, y, |a, b| a.wrapping_add(b))
}

pub fn sadd16(x: u32, y: u32) -> u32 {
    lanes16(x, y, |a, b| a.wrapping_add(b))
}

//same bits as the signed forms, lanes are independent
pub fn uadd8(x: u32, y: u32) -> u32 {
    sadd8(x, y)
}

pub fn uadd16(x: u32, y: u32) -> u32 {
    sadd16(x, y)
}

pub fn shadd8(x: u32, y: u32) -> u32 {
    pair_add_halved(x as BitsT, y as BitsT, Width::W8, Sign::Signed, 32) as u32
}

pub fn shadd16(x: u32, y: u32) -> u32 {
    pair_add_halved(x as BitsT, y as BitsT, Width::W16, Sign::Signed, 32) as u32
}

pub fn uhadd8(x: u32, y: u32) -> u32 {
    pair_add_halved(x as BitsT, y as BitsT, Width::W8, Sign::Unsigned, 32) as u32
}

pub fn uhadd16(x: u32, y: u32) -> u32 {
    pair_add_halved(x as BitsT, y as BitsT, Width::W16, Sign::Unsigned, 32) as u32
}

pub fn shsub16(x: u32, y: u32) -> u32 {
    halving_sub(x as BitsT, y as BitsT, Width::W16, Sign::Signed, 32) as u32
}

/// QASX: `lo = sat(x.lo - y.hi)`, `hi = sat(x.hi + y.lo)`
pub fn qasx(x: u32, y: u32) -> u32 {
    pack16(clip((lo16(x) - hi16(y)) as i64, 16) as i32, clip((hi16(x) + lo16(y)) as i64, 16) as i32)
}

/// QSAX: `lo = sat(x.lo + y.hi)`, `hi = sat(x.hi - y.lo)`
pub fn qsax(x: u32, y: u32) -> u32 {
    pack16(clip((lo16(x) + hi16(y)) as i64, 16) as i32, clip((hi16(x) - lo16(y)) as i64, 16) as i32)
}

pub fn ssat16(x: u32, bits: u32) -> u32 {
    pack16(clip(lo16(x) as i64, bits) as i32, clip(hi16(x) as i64, bits) as i32)
}

pub fn usat16(x: u32, bits: u32) -> u32 {
    pack16(usat(lo16(x) as i64, bits) as i32, usat(hi16(x) as i64, bits) as i32)
}

pub fn smuad(x: u32, y: u32) -> u32 {
    (lo16(x) * lo16(y)).wrapping_add(hi16(x) * hi16(y)) as u32
}

pub fn smuadx(x: u32, y: u32) -> u32 {
    (lo16(x) * hi16(y)).wrapping_add(hi16(x) * lo16(y)) as u32
}

pub fn smusd(x: u32, y: u32) -> u32 {
    (lo16(x) * lo16(y)).wrapping_sub(hi16(x) * hi16(y)) as u32
}

pub fn smusdx(x: u32, y: u32) -> u32 {
    (lo16(x) * hi16(y)).wrapping_sub(hi16(x) * lo16(y)) as u32
}

pub fn smlad(x: u32, y: u32, sum: u32) -> u32 {
    smuad(x, y).wrapping_add(sum)
}

pub fn smladx(x: u32, y: u32, sum: u32) -> u32 {
    smuadx(x, y).wrapping_add(sum)
}

pub fn smlsd(x: u32, y: u32, sum: u32) -> u32 {
    smusd(x, y).wrapping_add(sum)
}

pub fn smlsdx(x: u32, y: u32, sum: u32) -> u32 {
    smusdx(x, y).wrapping_add(sum)
}

fn dual_product64(x: u32, y: u32, cross: bool, sub: bool) -> i64 {
    let (a0, a1) = (lo16(x) as i64, hi16(x) as i64);
    let (b0, b1) = if cross { (hi16(y) as i64, lo16(y) as i64) } else { (lo16(y) as i64, hi16(y) as i64) };
    if sub { a0 * b0 - a1 * b1 } else { a0 * b0 + a1 * b1 }
}

pub fn smlald(x: u32, y: u32, sum: u64) -> u64 {
    (dual_product64(x, y, false, false) as u64).wrapping_add(sum)
}

pub fn smlaldx(x: u32, y: u32, sum: u64) -> u64 {
    (dual_product64(x, y, true, false) as u64).wrapping_add(sum)
}

pub fn smlsld(x: u32, y: u32, sum: u64) -> u64 {
    (dual_product64(x, y, false, true) as u64).wrapping_add(sum)
}

pub fn smlsldx(x: u32, y: u32, sum: u64) -> u64 {
    (dual_product64(x, y, true, true) as u64).wrapping_add(sum)
}

/// SMMLA: high word of the signed product plus `sum`
pub fn smmla(x: u32, y: u32, sum: u32) -> u32 {
    let high = ((x as i32 as i64 * y as i32 as i64) >> 32) as u32;
    high.wrapping_add(sum)
}

pub fn qadd(x: u32, y: u32) -> u32 {
    sat_add(x as BitsT, y as BitsT, Width::W32, Sign::Signed) as u32
}

pub fn qsub(x: u32, y: u32) -> u32 {
    sat_sub(x as BitsT, y as BitsT, Width::W32, Sign::Signed) as u32
}

pub fn pkhbt(x: u32, y: u32, shift: u32) -> u32 {
    (x & 0xffff) | (y.wrapping_shl(shift) & 0xffff_0000)
}

pub fn pkhtb(x: u32, y: u32, shift: u32) -> u32 {
    let shifted = if shift >= 32 { ((y as i32) >> 31) as u32 } else { ((y as i32) >> shift) as u32 };
    (x & 0xffff_0000) | (shifted & 0xffff)
}

pub fn sxtb16(x: u32) -> u32 {
    pack16(x as u8 as i8 as i32, (x >> 16) as u8 as i8 as i32)
}

pub fn uxtb16(x: u32) -> u32 {
    x & 0x00ff_00ff
}

pub fn sxtab16(x: u32, y: u32) -> u32 {
    sadd16(x, sxtb16(y))
}

pub fn uxtab16(x: u32, y: u32) -> u32 {
    sadd16(x, uxtb16(y))
}

/// sum of absolute differences of the four unsigned bytes
pub fn usad8(x: u32, y: u32) -> u32 {
    (0..4).map(|i| {
        let a = ((x >> (i * 8)) & 0xff) as i32;
        let b = ((y >> (i * 8)) & 0xff) as i32;
        (a - b).abs() as u32
    }).sum()
}

pub fn usada8(x: u32, y: u32, sum: u32) -> u32 {
    usad8(x, y).wrapping_add(sum)
}

pub fn ror(x: u32, n: u32) -> u32 {
    x.rotate_right(n & 31)
}

pub fn rbit(x: u32) -> u32 {
    x.reverse_bits()
}

pub fn clz(x: u32) -> u32 {
    x.leading_zeros()
}

/// `__SSAT`: clamp to `[-2^(bits-1), 2^(bits-1) - 1]`
pub fn ssat(x: u32, bits: u32) -> u32 {
    clip(x as i32 as i64, bits) as i32 as u32
}

/// `__USAT`: any bit at or above `bits` saturates to `2^bits - 1`, negatives included
pub fn usat32(value: u32, bits: u32) -> u32 {
    if bits >= 32 {
        return value;
    }
    let max = (low_mask(bits as usize)) as u32;
    if value & !max != 0 {
        max
    } else {
        value
    }
}

// RISC-V P

/// SCLIP32: clip to `[-2^imm, 2^imm - 1]`
pub fn sclip32(value: u32, imm: u32) -> u32 {
    clip(value as i32 as i64, (imm & 0x1f) + 1) as i32 as u32
}

/// SRAI16.u: rounding arithmetic right shift of each halfword
pub fn srai16_u(value: u32, imm: u32) -> u32 {
    let sh = (imm & 0xf) as usize;
    lanes16(value, 0, |a, _| {
        round_shift_right(a as BitsT, sh, Width::W16, Sign::Signed, FixedRound::Rnu) as u32
    })
}
