use crate::bits::*;
use num::BigInt;
use num::bigint::Sign as BigSign;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::cmp::min;

pub mod packed;
pub mod filter;


/// fixed-point rounding mode, numbered as the RVV `vxrm` csr field
#[derive(Copy, Clone, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
pub enum FixedRound {
    //round-to-nearest-up
    Rnu = 0,
    //round-to-nearest-even
    Rne = 1,
    //round-down (truncate)
    Rdn = 2,
    //round-to-odd
    Rod = 3,
}

impl Default for FixedRound {
    fn default() -> Self {
        FixedRound::Rnu
    }
}

fn bigint_to_bits(b: BigInt, w: Width) -> BitsT {
    let v = b.to_signed_bytes_le();
    let size = w.size();
    let pad: BitsT = if b.sign() == BigSign::Minus { 0xff } else { 0 };
    (0..size).fold(0 as BitsT, |acc, i| {
        let byte = if i < v.len() { v[i] as BitsT } else { pad };
        acc | (byte << (i << 3))
    })
}

fn to_bigint(value: BitsT, w: Width) -> BigInt {
    BigInt::from(zext(value, w.len()))
}

pub fn sat_add(a: BitsT, b: BitsT, w: Width, sign: Sign) -> BitsT {
    saturate(to_i128(a, w, sign) + to_i128(b, w, sign), w, sign)
}

pub fn sat_sub(a: BitsT, b: BitsT, w: Width, sign: Sign) -> BitsT {
    saturate(to_i128(a, w, sign) - to_i128(b, w, sign), w, sign)
}

/// Full product of `a * b`, plus `1 << round_bit` when given, shifted right by `shift`
/// and truncated to `w`.
pub fn mul_high(a: BitsT, b: BitsT, w: Width, sign: Sign, round_bit: Option<usize>, shift: usize) -> BitsT {
    match sign {
        Sign::Signed => {
            let mut product = to_i128(a, w, sign) * to_i128(b, w, sign);
            if let Some(r) = round_bit {
                product = product.wrapping_add(1i128 << min(r, 126));
            }
            wrap(product >> min(shift, 127), w)
        }
        //u64 * u64 does not fit an i128
        Sign::Unsigned => {
            let mut product = to_bigint(a, w) * to_bigint(b, w);
            if let Some(r) = round_bit {
                product = product + (BigInt::from(1) << r);
            }
            bigint_to_bits(product >> shift, w)
        }
    }
}

//the final add wraps modulo 2^w_out
pub fn mul_accumulate(a: BitsT, b: BitsT, acc: BitsT, w_in: Width, sign: Sign, w_out: Width) -> BitsT {
    let product = to_i128(a, w_in, sign).wrapping_mul(to_i128(b, w_in, sign));
    wrap(to_i128(acc, w_out, sign).wrapping_add(product), w_out)
}

pub fn mul_accumulate_sat(a: BitsT, b: BitsT, acc: BitsT, w_in: Width, sign: Sign, w_out: Width) -> BitsT {
    let x = to_i128(a, w_in, sign);
    let y = to_i128(b, w_in, sign);
    match x.checked_mul(y).and_then(|p| p.checked_add(to_i128(acc, w_out, sign))) {
        Some(sum) => saturate(sum, w_out, sign),
        None => {
            //only reachable with 64 bits inputs, far outside any accumulator range
            if (x < 0) != (y < 0) {
                saturate(w_out.min(sign) - 1, w_out, sign)
            } else {
                saturate(w_out.max(sign) + 1, w_out, sign)
            }
        }
    }
}

/// lane-wise `(a + b) >> 1` over a packed `total` bits word, exact and floor-shifted
pub fn pair_add_halved(a: BitsT, b: BitsT, lane_w: Width, sign: Sign, total: usize) -> BitsT {
    map_lanes(a, b, lane_w, total, |x, y| {
        wrap((to_i128(x, lane_w, sign) + to_i128(y, lane_w, sign)) >> 1, lane_w)
    })
}

pub fn halving_sub(a: BitsT, b: BitsT, lane_w: Width, sign: Sign, total: usize) -> BitsT {
    map_lanes(a, b, lane_w, total, |x, y| {
        wrap((to_i128(x, lane_w, sign) - to_i128(y, lane_w, sign)) >> 1, lane_w)
    })
}

/// signed saturation of `value` to a `bits` wide two's complement range
pub fn clip(value: i64, bits: u32) -> i64 {
    if bits == 0 {
        return 0;
    }
    if bits >= 64 {
        return value;
    }
    let max = (1i64 << (bits - 1)) - 1;
    let min = -(1i64 << (bits - 1));
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// unsigned saturation of a signed `value` to `[0, 2^bits - 1]`
pub fn usat(value: i64, bits: u32) -> u64 {
    if value < 0 {
        return 0;
    }
    let max = low_mask(bits as usize);
    if value as u64 > max {
        max
    } else {
        value as u64
    }
}

fn round_increment(v: i128, shift: usize, mode: FixedRound) -> i128 {
    if shift == 0 {
        return 0;
    }
    let bit = |i: usize| -> i128 { (v >> i) & 1 };
    let below = |i: usize| -> bool { i > 0 && v & ((1i128 << i) - 1) != 0 };
    match mode {
        FixedRound::Rnu => bit(shift - 1),
        FixedRound::Rne => bit(shift - 1) & (below(shift - 1) as i128 | bit(shift)),
        FixedRound::Rdn => 0,
        FixedRound::Rod => (bit(shift) == 0 && below(shift)) as i128,
    }
}

/// `v >> shift` rounded by `mode`, the result is not narrowed
pub fn round_shift_right_wide(v: i128, shift: usize, mode: FixedRound) -> i128 {
    let shift = min(shift, 126);
    (v >> shift) + round_increment(v, shift, mode)
}

pub fn round_shift_right(v: BitsT, shift: usize, w: Width, sign: Sign, mode: FixedRound) -> BitsT {
    wrap(round_shift_right_wide(to_i128(v, w, sign), shift, mode), w)
}

/// Shift by a signed amount: positive amounts shift left with saturation,
/// negative amounts shift right rounding half up.
pub fn shift_sat_round(v: BitsT, sh: i64, w: Width, sign: Sign) -> BitsT {
    let x = to_i128(v, w, sign);
    if sh >= 0 {
        if x == 0 {
            return 0;
        }
        if sh >= 64 {
            return saturate(if x < 0 { w.min(sign) - 1 } else { w.max(sign) + 1 }, w, sign);
        }
        saturate(x << sh, w, sign)
    } else {
        let n = min(sh.unsigned_abs() as usize, 100);
        saturate((x + (1i128 << (n - 1))) >> n, w, sign)
    }
}

/// leading bits equal to the sign bit, the sign bit itself excluded
pub fn cls(v: BitsT, w: Width) -> BitsT {
    let x = zext(v, w.len());
    let folded = if (x >> (w.len() - 1)) & 1 == 1 { !x & w.mask() } else { x };
    (folded.leading_zeros() as usize - (64 - w.len()) - 1) as BitsT
}

pub fn popcount(v: BitsT, w: Width) -> BitsT {
    zext(v, w.len()).count_ones() as BitsT
}

pub fn narrow_clip(v: i128, w_out: Width, sign: Sign) -> BitsT {
    saturate(v, w_out, sign)
}
