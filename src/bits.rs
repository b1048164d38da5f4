use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use crate::error::{Error, Result};

pub type BitsT = u64;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Width {
    W8 = 8,
    W16 = 16,
    W32 = 32,
    W64 = 64,
}

impl Width {
    pub fn from_len(len: usize) -> Result<Width> {
        if len > u8::max_value() as usize {
            return Err(Error::InvalidCode("width", len as u64));
        }
        Width::try_from(len as u8).map_err(|_| Error::InvalidCode("width", len as u64))
    }

    pub fn len(&self) -> usize {
        *self as usize
    }

    pub fn size(&self) -> usize {
        self.len() >> 3
    }

    pub fn mask(&self) -> BitsT {
        low_mask(self.len())
    }

    pub fn double(&self) -> Option<Width> {
        match self {
            Width::W8 => Some(Width::W16),
            Width::W16 => Some(Width::W32),
            Width::W32 => Some(Width::W64),
            Width::W64 => None,
        }
    }

    pub fn half(&self) -> Option<Width> {
        match self {
            Width::W8 => None,
            Width::W16 => Some(Width::W8),
            Width::W32 => Some(Width::W16),
            Width::W64 => Some(Width::W32),
        }
    }

    pub fn max(&self, sign: Sign) -> i128 {
        match sign {
            Sign::Signed => (1i128 << (self.len() - 1)) - 1,
            Sign::Unsigned => (1i128 << self.len()) - 1,
        }
    }

    pub fn min(&self, sign: Sign) -> i128 {
        match sign {
            Sign::Signed => -(1i128 << (self.len() - 1)),
            Sign::Unsigned => 0,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Signed,
    Unsigned,
}

impl Sign {
    pub fn is_signed(&self) -> bool {
        *self == Sign::Signed
    }
}

pub fn low_mask(len: usize) -> BitsT {
    if len >= 64 {
        BitsT::max_value()
    } else {
        ((1 as BitsT) << len) - 1
    }
}

pub fn sext(value: BitsT, len: usize) -> BitsT {
    assert!(len > 0 && len <= 64);
    if len == 64 {
        return value;
    }
    let shift = 64 - len;
    (((value << shift) as i64) >> shift) as BitsT
}

pub fn zext(value: BitsT, len: usize) -> BitsT {
    value & low_mask(len)
}

//interpret the low `w` bits of `value` as a number
pub fn to_i128(value: BitsT, w: Width, sign: Sign) -> i128 {
    match sign {
        Sign::Signed => sext(value, w.len()) as i64 as i128,
        Sign::Unsigned => zext(value, w.len()) as i128,
    }
}

pub fn wrap(value: i128, w: Width) -> BitsT {
    (value as BitsT) & w.mask()
}

pub fn saturate(value: i128, w: Width, sign: Sign) -> BitsT {
    wrap(clamp(value, w.min(sign), w.max(sign)), w)
}

pub fn clamp(value: i128, min: i128, max: i128) -> i128 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

pub fn lane(word: BitsT, idx: usize, w: Width) -> BitsT {
    let shift = idx * w.len();
    if shift >= 64 {
        0
    } else {
        (word >> shift) & w.mask()
    }
}

pub fn set_lane(word: BitsT, idx: usize, w: Width, value: BitsT) -> BitsT {
    let shift = idx * w.len();
    if shift >= 64 {
        return word;
    }
    word & !(w.mask() << shift) | ((value & w.mask()) << shift)
}

//apply `f` to every `w` lane of a `total` bits wide packed word
pub fn map_lanes<F: Fn(BitsT, BitsT) -> BitsT>(a: BitsT, b: BitsT, w: Width, total: usize, f: F) -> BitsT {
    (0..total / w.len()).fold(0, |acc, i| {
        set_lane(acc, i, w, f(lane(a, i, w), lane(b, i, w)))
    })
}
