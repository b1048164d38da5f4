extern crate simple_soft_float;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use simple_soft_float::{FloatClass, FloatTraits, RoundingMode, StatusFlags};
use std::ops::{BitOr, BitOrAssign};

pub use simple_soft_float::{Float, FPState, F16, F32, F64, F16Traits, F32Traits, F64Traits};

mod insns;

pub use insns::*;


#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum FWidth {
    H = 16,
    S = 32,
    D = 64,
}

impl FWidth {
    pub fn len(&self) -> usize {
        *self as usize
    }

    pub fn mask(&self) -> u64 {
        crate::bits::low_mask(self.len())
    }

    pub fn sign_bit(&self) -> u64 {
        1 << (self.len() - 1)
    }

    pub fn canonical_nan(&self) -> u64 {
        match self {
            FWidth::H => 0x7e00,
            FWidth::S => 0x7fc0_0000,
            FWidth::D => 0x7ff8_0000_0000_0000,
        }
    }

    pub fn widen(&self) -> Option<FWidth> {
        match self {
            FWidth::H => Some(FWidth::S),
            FWidth::S => Some(FWidth::D),
            FWidth::D => None,
        }
    }
}

/// float rounding mode, numbered as the RISC-V `frm` field
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
pub enum RoundMode {
    //round to nearest, ties to even (CSKY "rn")
    Rne = 0,
    //toward zero (CSKY "rz")
    Rtz = 1,
    //toward negative infinity (CSKY "rni")
    Rdn = 2,
    //toward positive infinity (CSKY "rpi")
    Rup = 3,
    //round to nearest, ties to max magnitude
    Rmm = 4,
}

impl Default for RoundMode {
    fn default() -> Self {
        RoundMode::Rne
    }
}

impl RoundMode {
    pub fn soft(&self) -> RoundingMode {
        match self {
            RoundMode::Rne => RoundingMode::TiesToEven,
            RoundMode::Rtz => RoundingMode::TowardZero,
            RoundMode::Rdn => RoundingMode::TowardNegative,
            RoundMode::Rup => RoundingMode::TowardPositive,
            RoundMode::Rmm => RoundingMode::TiesToAway,
        }
    }

    pub fn from_mnemonic(s: &str) -> Option<RoundMode> {
        match s {
            "rne" | "rn" => Some(RoundMode::Rne),
            "rtz" | "rz" => Some(RoundMode::Rtz),
            "rdn" | "rni" => Some(RoundMode::Rdn),
            "rup" | "rpi" => Some(RoundMode::Rup),
            "rmm" => Some(RoundMode::Rmm),
            _ => None
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenormalMode {
    Gradual,
    FlushToZero,
}

impl Default for DenormalMode {
    fn default() -> Self {
        DenormalMode::Gradual
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NanPolicy {
    //every NaN result is the fixed quiet NaN of its format
    Canonical,
    //NaN results keep the payload the soft float library produced
    Propagate,
}

impl Default for NanPolicy {
    fn default() -> Self {
        NanPolicy::Canonical
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FpEnv {
    pub rm: RoundMode,
    pub denormal: DenormalMode,
    pub nan: NanPolicy,
}

impl FpEnv {
    pub fn with_rm(&self, rm: RoundMode) -> FpEnv {
        FpEnv { rm, ..*self }
    }

    fn state(&self) -> FPState {
        let mut fp_state = FPState::default();
        fp_state.rounding_mode = self.rm.soft();
        fp_state
    }

    fn flush(&self) -> bool {
        self.denormal == DenormalMode::FlushToZero
    }
}

/// accrued exception flags, laid out as the RISC-V `fflags` csr
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Flags(pub u8);

impl Flags {
    pub const NX: Flags = Flags(0x1);
    pub const UF: Flags = Flags(0x2);
    pub const OF: Flags = Flags(0x4);
    pub const DZ: Flags = Flags(0x8);
    pub const NV: Flags = Flags(0x10);

    pub fn contains(&self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn from_status(s: &StatusFlags) -> Flags {
        Flags((s.bits() << 27).reverse_bits() as u8)
    }
}

impl BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FpResult {
    pub bits: u64,
    pub flags: Flags,
}

impl FpResult {
    pub fn new(bits: u64, flags: Flags) -> FpResult {
        FpResult { bits, flags }
    }
}

pub trait FpFormat: FloatTraits + Default {
    const WIDTH: FWidth;
    fn pack(bits: u64) -> Float<Self>;
    fn unpack(f: &Float<Self>) -> u64;
}

impl FpFormat for F16Traits {
    const WIDTH: FWidth = FWidth::H;
    fn pack(bits: u64) -> F16 {
        F16::from_bits(bits as u16)
    }
    fn unpack(f: &F16) -> u64 {
        *f.bits() as u64
    }
}

impl FpFormat for F32Traits {
    const WIDTH: FWidth = FWidth::S;
    fn pack(bits: u64) -> F32 {
        F32::from_bits(bits as u32)
    }
    fn unpack(f: &F32) -> u64 {
        *f.bits() as u64
    }
}

impl FpFormat for F64Traits {
    const WIDTH: FWidth = FWidth::D;
    fn pack(bits: u64) -> F64 {
        F64::from_bits(bits)
    }
    fn unpack(f: &F64) -> u64 {
        *f.bits()
    }
}

//flush a subnormal operand to the zero of the same sign
fn flush_in<FT: FpFormat>(f: Float<FT>, env: &FpEnv) -> Float<FT> {
    if env.flush() && f.is_subnormal() {
        FT::pack(FT::unpack(&f) & FT::WIDTH.sign_bit())
    } else {
        f
    }
}

fn finish<FT: FpFormat>(res: Float<FT>, fp_state: &FPState, env: &FpEnv) -> FpResult {
    let w = FT::WIDTH;
    let mut flags = Flags::from_status(&fp_state.status_flags);
    let mut bits = FT::unpack(&res);
    if res.is_nan() {
        if env.nan == NanPolicy::Canonical {
            bits = w.canonical_nan();
        }
    } else if env.flush() && res.is_subnormal() {
        bits &= w.sign_bit();
        flags |= Flags::UF | Flags::NX;
    }
    FpResult::new(bits, flags)
}
