//! Order-2 IIR filter of the MCA accelerator.
//!
//! `y[n] = c0*x[n-2] + c1*x[n-1] + c2*x[n] + c3*y[n-1] + c4*y[n-2]`, summed in a
//! 128-bit accumulator, rounded and shifted by the output q format then
//! saturated to the io type.
use super::*;
use crate::error::{Error, Result};

pub const IIR_ORDER: usize = 2;
pub const NUM_IIR_COEFF: usize = 2 * IIR_ORDER + 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FxpType {
    Fxp16,
    Fxp24,
    Fxp32,
}

impl FxpType {
    pub fn bits(&self) -> u32 {
        match self {
            FxpType::Fxp16 => 16,
            FxpType::Fxp24 => 24,
            FxpType::Fxp32 => 32,
        }
    }

    /// a Q1.31 sample expressed in this type
    pub fn from_q31(&self, raw: i32) -> i64 {
        (raw >> (32 - self.bits())) as i64
    }

    fn saturate(&self, v: i128) -> i64 {
        let max = (1i128 << (self.bits() - 1)) - 1;
        let min = -(1i128 << (self.bits() - 1));
        clamp(v, min, max) as i64
    }
}

/// `output_loc_sel` of 64-bit coefficients, the output q format in nibbles
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OutputLoc(u8);

impl OutputLoc {
    //q_output must stay below the 128-bit accumulator width
    pub const MAX: u8 = 31;

    pub fn new(sel: u64) -> Result<OutputLoc> {
        if sel > OutputLoc::MAX as u64 {
            Err(Error::InvalidCode("output_loc_sel", sel))
        } else {
            Ok(OutputLoc(sel as u8))
        }
    }

    pub fn sel(&self) -> u8 {
        self.0
    }

    pub fn q(&self) -> u32 {
        self.0 as u32 * 4
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IirCoeff {
    //Q1.7.24
    Fxp32([i32; NUM_IIR_COEFF]),
    //Q1.15.48
    Fxp64([i64; NUM_IIR_COEFF], OutputLoc),
}

impl IirCoeff {
    /// the 32-bit coefficients the hardware derives from Q1.15.48 ones
    pub fn narrow(coeff: &[i64; NUM_IIR_COEFF]) -> IirCoeff {
        let mut c = [0i32; NUM_IIR_COEFF];
        for (d, s) in c.iter_mut().zip(coeff.iter()) {
            *d = (*s >> 24) as i32;
        }
        IirCoeff::Fxp32(c)
    }

    pub fn q_output(&self) -> u32 {
        match self {
            IirCoeff::Fxp32(_) => 24,
            IirCoeff::Fxp64(_, loc) => loc.q(),
        }
    }

    fn get(&self, i: usize) -> i128 {
        match self {
            IirCoeff::Fxp32(c) => c[i] as i128,
            IirCoeff::Fxp64(c, _) => c[i] as i128,
        }
    }
}

fn output(io: FxpType, coeff: &IirCoeff, window: &[i64], yn1: i64, yn2: i64) -> i64 {
    let mut sum = window.iter().enumerate()
        .fold(0i128, |acc, (k, x)| acc.wrapping_add((*x as i128).wrapping_mul(coeff.get(k))));
    sum = sum.wrapping_add((yn1 as i128).wrapping_mul(coeff.get(IIR_ORDER + 1)));
    sum = sum.wrapping_add((yn2 as i128).wrapping_mul(coeff.get(IIR_ORDER + 2)));
    let q = coeff.q_output() as usize;
    let shifted = if q == 0 { sum } else { sum.wrapping_add(1i128 << (q - 1)) >> q };
    io.saturate(shifted)
}

/// One filter pass over `input`, whose first `IIR_ORDER` samples are history;
/// produces `input.len() - IIR_ORDER` samples.
pub fn iir2(io: FxpType, coeff: &IirCoeff, input: &[i64], yn1: i64, yn2: i64) -> Vec<i64> {
    let mut out: Vec<i64> = Vec::with_capacity(input.len().saturating_sub(IIR_ORDER));
    let (mut y1, mut y2) = (yn1, yn2);
    for o_idx in 0..input.len().saturating_sub(IIR_ORDER) {
        let y = output(io, coeff, &input[o_idx..o_idx + IIR_ORDER + 1], y1, y2);
        y2 = y1;
        y1 = y;
        out.push(y);
    }
    out
}

/// Streaming form of [`iir2`], history carried between calls.
#[derive(Clone, Debug)]
pub struct Iir2 {
    io: FxpType,
    coeff: IirCoeff,
    x: [i64; IIR_ORDER],
    yn1: i64,
    yn2: i64,
}

impl Iir2 {
    pub fn new(io: FxpType, coeff: IirCoeff) -> Iir2 {
        Iir2 {
            io,
            coeff,
            x: [0; IIR_ORDER],
            yn1: 0,
            yn2: 0,
        }
    }

    pub fn with_history(mut self, yn1: i64, yn2: i64) -> Iir2 {
        self.yn1 = yn1;
        self.yn2 = yn2;
        self
    }

    pub fn process(&mut self, samples: &[i64]) -> Vec<i64> {
        let mut window = self.x.to_vec();
        window.extend_from_slice(samples);
        let out = iir2(self.io, &self.coeff, &window, self.yn1, self.yn2);
        if let [.., y2, y1] = out.as_slice() {
            self.yn1 = *y1;
            self.yn2 = *y2;
        } else if let [y1] = out.as_slice() {
            self.yn2 = self.yn1;
            self.yn1 = *y1;
        }
        self.x.copy_from_slice(&window[window.len() - IIR_ORDER..]);
        out
    }
}

/// Runs `input` (history included) through the filter `chunk` new samples at a time,
/// as the accelerator's continuous mode does.
pub fn iir2_continuous(io: FxpType, coeff: &IirCoeff, input: &[i64], chunk: usize, yn1: i64, yn2: i64) -> Vec<i64> {
    let mut out: Vec<i64> = vec![];
    let (mut y1, mut y2) = (yn1, yn2);
    let mut idx = 0;
    while idx < input.len() && chunk > 0 {
        let end = min(idx + chunk + IIR_ORDER, input.len());
        if end - idx <= IIR_ORDER {
            break;
        }
        let part = iir2(io, coeff, &input[idx..end], y1, y2);
        out.extend_from_slice(&part);
        let n = out.len();
        if n >= 2 {
            y1 = out[n - 1];
            y2 = out[n - 2];
        } else if n == 1 {
            y2 = y1;
            y1 = out[0];
        }
        idx += chunk;
    }
    out
}
