use crate::bits::*;
use crate::error::{Error, Result};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::convert::TryFrom;

mod insns;
pub mod memory;

pub use insns::*;

#[cfg(test)]
mod test;

/// register width in bits
pub const VLEN: usize = 128;

/// Register group multiplier, numbered as the `vlmul` field of `vtype`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Lmul {
    M1 = 0,
    M2 = 1,
    M4 = 2,
    M8 = 3,
    Mf8 = 5,
    Mf4 = 6,
    Mf2 = 7,
}

impl Lmul {
    pub fn from_code(code: u64) -> Result<Lmul> {
        Lmul::try_from(code as u8).map_err(|_| Error::InvalidCode("lmul", code))
    }

    //(numerator, denominator)
    pub fn ratio(&self) -> (usize, usize) {
        match self {
            Lmul::M1 => (1, 1),
            Lmul::M2 => (2, 1),
            Lmul::M4 => (4, 1),
            Lmul::M8 => (8, 1),
            Lmul::Mf8 => (1, 8),
            Lmul::Mf4 => (1, 4),
            Lmul::Mf2 => (1, 2),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TailPolicy {
    //lanes at or past vl are written with zero
    Zero,
    //lanes at or past vl keep the destination's previous value
    Undisturbed,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VConfig {
    pub sew: Width,
    pub lmul: Lmul,
    pub vl: usize,
    pub tail: TailPolicy,
}

impl VConfig {
    pub fn new(sew: Width, lmul: Lmul) -> VConfig {
        let mut cfg = VConfig {
            sew,
            lmul,
            vl: 0,
            tail: TailPolicy::Zero,
        };
        cfg.vl = cfg.vlmax();
        cfg
    }

    /// the configuration whose group holds exactly `n` lanes of `sew`
    pub fn for_lanes(sew: Width, n: usize) -> Result<VConfig> {
        let bits = n * sew.len();
        let lmul = match bits {
            b if b == VLEN / 8 => Lmul::Mf8,
            b if b == VLEN / 4 => Lmul::Mf4,
            b if b == VLEN / 2 => Lmul::Mf2,
            b if b == VLEN => Lmul::M1,
            b if b == VLEN * 2 => Lmul::M2,
            b if b == VLEN * 4 => Lmul::M4,
            b if b == VLEN * 8 => Lmul::M8,
            _ => return Err(Error::InvalidCode("group bits", bits as u64)),
        };
        Ok(VConfig::new(sew, lmul))
    }

    pub fn vlmax(&self) -> usize {
        let (num, den) = self.lmul.ratio();
        VLEN * num / den / self.sew.len()
    }

    pub fn with_vl(mut self, vl: usize) -> VConfig {
        self.vl = std::cmp::min(vl, self.vlmax());
        self
    }

    pub fn with_tail(mut self, tail: TailPolicy) -> VConfig {
        self.tail = tail;
        self
    }
}

/// A vector register (or register group) image, lane 0 in the lowest bytes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct VReg {
    pub sew: Width,
    pub lanes: Vec<BitsT>,
}

impl VReg {
    pub fn new(sew: Width, lanes: Vec<BitsT>) -> VReg {
        let lanes = lanes.into_iter().map(|v| v & sew.mask()).collect();
        VReg { sew, lanes }
    }

    pub fn from_slice(sew: Width, lanes: &[BitsT]) -> VReg {
        VReg::new(sew, lanes.to_vec())
    }

    pub fn splat(sew: Width, value: BitsT, n: usize) -> VReg {
        VReg::new(sew, vec![value; n])
    }

    pub fn zeros(sew: Width, n: usize) -> VReg {
        VReg::splat(sew, 0, n)
    }

    /// every byte of the group set to `byte`, the harness fill pattern
    pub fn pad(sew: Width, n: usize, byte: u8) -> VReg {
        let value = (0..sew.size()).fold(0 as BitsT, |acc, i| acc | ((byte as BitsT) << (i * 8)));
        VReg::splat(sew, value, n)
    }

    pub fn from_bytes(sew: Width, bytes: &[u8]) -> VReg {
        let lanes = bytes.chunks(sew.size())
            .map(|c| c.iter().enumerate().fold(0 as BitsT, |acc, (i, b)| acc | ((*b as BitsT) << (i * 8))))
            .collect();
        VReg::new(sew, lanes)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.lanes.iter()
            .flat_map(|v| (0..self.sew.size()).map(move |i| (*v >> (i * 8)) as u8))
            .collect()
    }

    /// the same bytes seen with another element width
    pub fn reinterpret(&self, sew: Width) -> VReg {
        VReg::from_bytes(sew, &self.to_bytes())
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn get(&self, i: usize) -> BitsT {
        self.lanes.get(i).copied().unwrap_or(0)
    }

    pub fn get_signed(&self, i: usize) -> i128 {
        to_i128(self.get(i), self.sew, Sign::Signed)
    }

    pub fn get_as(&self, i: usize, sign: Sign) -> i128 {
        to_i128(self.get(i), self.sew, sign)
    }

    pub fn set(&mut self, i: usize, v: BitsT) {
        if let Some(l) = self.lanes.get_mut(i) {
            *l = v & self.sew.mask()
        }
    }

    /// concatenate registers into a group
    pub fn group(regs: &[VReg]) -> VReg {
        let sew = regs.first().map(|r| r.sew).unwrap_or(Width::W8);
        VReg::new(sew, regs.iter().flat_map(|r| r.lanes.iter().copied()).collect())
    }

    /// split a group into registers of `VLEN` bits
    pub fn split(&self) -> Vec<VReg> {
        let per_reg = VLEN / self.sew.len();
        self.lanes.chunks(per_reg).map(|c| VReg::from_slice(self.sew, c)).collect()
    }
}

/// One predicate bit per lane; its length is the lane count it guards.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Mask {
    bits: Vec<bool>,
}

impl Mask {
    pub fn from_bits(bits: u64, n: usize) -> Mask {
        Mask {
            bits: (0..n).map(|i| i < 64 && (bits >> i) & 1 == 1).collect()
        }
    }

    pub fn from_fn<F: Fn(usize) -> bool>(n: usize, f: F) -> Mask {
        Mask {
            bits: (0..n).map(f).collect()
        }
    }

    pub fn all(n: usize) -> Mask {
        Mask::from_fn(n, |_| true)
    }

    pub fn even(n: usize) -> Mask {
        Mask::from_fn(n, |i| i & 1 == 0)
    }

    pub fn odd(n: usize) -> Mask {
        Mask::from_fn(n, |i| i & 1 == 1)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn enabled(&self, i: usize) -> bool {
        self.bits.get(i).copied().unwrap_or(false)
    }
}

fn enabled(mask: Option<&Mask>, i: usize) -> bool {
    mask.map(|m| m.enabled(i)).unwrap_or(true)
}

/// Lane engine: lane `i` of the result is
/// the tail value when `i >= vl`, `old[i]` when masked off, `f(i)` otherwise.
pub fn apply<F: FnMut(usize) -> BitsT>(cfg: &VConfig, mask: Option<&Mask>, old: &VReg, mut f: F) -> VReg {
    let n = cfg.vlmax();
    let mut res = VReg::zeros(cfg.sew, n);
    for i in 0..n {
        let v = if i >= cfg.vl {
            match cfg.tail {
                TailPolicy::Zero => 0,
                TailPolicy::Undisturbed => old.get(i),
            }
        } else if !enabled(mask, i) {
            old.get(i)
        } else {
            f(i)
        };
        res.set(i, v);
    }
    res
}

pub(crate) fn check_lanes(insn: &str, idx: usize, reg: &VReg, n: usize) -> Result<()> {
    if reg.len() < n {
        Err(Error::Shape {
            insn: insn.to_string(),
            idx,
            msg: format!("expects {} lanes, got {}", n, reg.len()),
        })
    } else {
        Ok(())
    }
}
