use super::*;
use crate::bits::{sext, wrap, zext, Sign, Width};
use simple_soft_float::Sign as FSign;
use std::cmp::Ordering;

macro_rules! by_width {
    ($w:expr, $f:ident($($arg:expr),*)) => {
        match $w {
            FWidth::H => $f::<F16Traits>($($arg),*),
            FWidth::S => $f::<F32Traits>($($arg),*),
            FWidth::D => $f::<F64Traits>($($arg),*),
        }
    };
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FArith {
    Add,
    Sub,
    Mul,
    Div,
}

fn arith_imp<FT: FpFormat>(op: FArith, a: u64, b: u64, env: &FpEnv) -> FpResult {
    let mut fp_state = env.state();
    let rm = Some(env.rm.soft());
    let x = flush_in(FT::pack(a), env);
    let y = flush_in(FT::pack(b), env);
    let res = match op {
        FArith::Add => x.add(&y, rm, Some(&mut fp_state)),
        FArith::Sub => x.sub(&y, rm, Some(&mut fp_state)),
        FArith::Mul => x.mul(&y, rm, Some(&mut fp_state)),
        FArith::Div => x.div(&y, rm, Some(&mut fp_state)),
    };
    finish(res, &fp_state, env)
}

pub fn arith(w: FWidth, op: FArith, a: u64, b: u64, env: &FpEnv) -> FpResult {
    by_width!(w, arith_imp(op, a, b, env))
}

pub fn add(w: FWidth, a: u64, b: u64, env: &FpEnv) -> FpResult {
    arith(w, FArith::Add, a, b, env)
}

pub fn sub(w: FWidth, a: u64, b: u64, env: &FpEnv) -> FpResult {
    arith(w, FArith::Sub, a, b, env)
}

pub fn mul(w: FWidth, a: u64, b: u64, env: &FpEnv) -> FpResult {
    arith(w, FArith::Mul, a, b, env)
}

pub fn div(w: FWidth, a: u64, b: u64, env: &FpEnv) -> FpResult {
    arith(w, FArith::Div, a, b, env)
}

fn sqrt_imp<FT: FpFormat>(a: u64, env: &FpEnv) -> FpResult {
    let mut fp_state = env.state();
    let x = flush_in(FT::pack(a), env);
    let res = x.sqrt(Some(env.rm.soft()), Some(&mut fp_state));
    finish(res, &fp_state, env)
}

pub fn sqrt(w: FWidth, a: u64, env: &FpEnv) -> FpResult {
    by_width!(w, sqrt_imp(a, env))
}

/// single rounding multiply-add forms, named as the RISC-V scalar instructions
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FusedOp {
    //a * b + c
    MAdd,
    //a * b - c
    MSub,
    //-(a * b) + c
    NMSub,
    //-(a * b) - c
    NMAdd,
}

fn fused_imp<FT: FpFormat>(op: FusedOp, a: u64, b: u64, c: u64, env: &FpEnv) -> FpResult {
    let mut fp_state = env.state();
    let rm = Some(env.rm.soft());
    let x = flush_in(FT::pack(a), env);
    let y = flush_in(FT::pack(b), env);
    let z = flush_in(FT::pack(c), env);
    let res = match op {
        FusedOp::MAdd => x.fused_mul_add(&y, &z, rm, Some(&mut fp_state)),
        FusedOp::MSub => x.fused_mul_add(&y, &z.neg(), rm, Some(&mut fp_state)),
        FusedOp::NMSub => x.fused_mul_add(&y, &z.neg(), rm, Some(&mut fp_state)).neg(),
        FusedOp::NMAdd => x.fused_mul_add(&y, &z, rm, Some(&mut fp_state)).neg(),
    };
    finish(res, &fp_state, env)
}

pub fn fused(w: FWidth, op: FusedOp, a: u64, b: u64, c: u64, env: &FpEnv) -> FpResult {
    by_width!(w, fused_imp(op, a, b, c, env))
}

pub fn fmadd(w: FWidth, a: u64, b: u64, c: u64, env: &FpEnv) -> FpResult {
    fused(w, FusedOp::MAdd, a, b, c, env)
}

pub fn fmsub(w: FWidth, a: u64, b: u64, c: u64, env: &FpEnv) -> FpResult {
    fused(w, FusedOp::MSub, a, b, c, env)
}

pub fn fnmsub(w: FWidth, a: u64, b: u64, c: u64, env: &FpEnv) -> FpResult {
    fused(w, FusedOp::NMSub, a, b, c, env)
}

pub fn fnmadd(w: FWidth, a: u64, b: u64, c: u64, env: &FpEnv) -> FpResult {
    fused(w, FusedOp::NMAdd, a, b, c, env)
}

//sign bit operations never signal, NaN payloads included
pub fn abs(w: FWidth, a: u64) -> u64 {
    a & w.mask() & !w.sign_bit()
}

pub fn neg(w: FWidth, a: u64) -> u64 {
    (a ^ w.sign_bit()) & w.mask()
}

fn compare_imp<FT: FpFormat>(a: u64, b: u64, signaling: bool) -> (Option<Ordering>, Flags) {
    let mut fp_state = FPState::default();
    let x = FT::pack(a);
    let y = FT::pack(b);
    let res = x.compare_quiet(&y, Some(&mut fp_state));
    if signaling {
        if x.is_nan() || y.is_nan() {
            fp_state.status_flags = StatusFlags::INVALID_OPERATION;
        }
    }
    (res, Flags::from_status(&fp_state.status_flags))
}

/// `None` when unordered; subnormal operands are compared as they are in every denormal mode
pub fn compare(w: FWidth, a: u64, b: u64, signaling: bool) -> (Option<Ordering>, Flags) {
    by_width!(w, compare_imp(a, b, signaling))
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FCmp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Unordered,
}

impl FCmp {
    fn signaling(&self) -> bool {
        match self {
            FCmp::Lt | FCmp::Le | FCmp::Gt | FCmp::Ge => true,
            _ => false
        }
    }

    pub fn holds(&self, ord: Option<Ordering>) -> bool {
        match (self, ord) {
            (FCmp::Unordered, o) => o.is_none(),
            (FCmp::Ne, o) => o != Some(Ordering::Equal),
            (_, None) => false,
            (FCmp::Eq, Some(o)) => o == Ordering::Equal,
            (FCmp::Lt, Some(o)) => o == Ordering::Less,
            (FCmp::Le, Some(o)) => o != Ordering::Greater,
            (FCmp::Gt, Some(o)) => o == Ordering::Greater,
            (FCmp::Ge, Some(o)) => o != Ordering::Less,
        }
    }
}

/// predicate result as `1`/`0`
pub fn fcmp(w: FWidth, pred: FCmp, a: u64, b: u64) -> FpResult {
    let (ord, flags) = compare(w, a, b, pred.signaling());
    FpResult::new(pred.holds(ord) as u64, flags)
}

fn class_imp<FT: FpFormat>(a: u64) -> u64 {
    1 << match class_of::<FT>(a) {
        FloatClass::NegativeInfinity => 0,
        FloatClass::NegativeNormal => 1,
        FloatClass::NegativeSubnormal => 2,
        FloatClass::NegativeZero => 3,
        FloatClass::PositiveZero => 4,
        FloatClass::PositiveSubnormal => 5,
        FloatClass::PositiveNormal => 6,
        FloatClass::PositiveInfinity => 7,
        FloatClass::SignalingNaN => 8,
        FloatClass::QuietNaN => 9
    }
}

/// one-hot class mask, bit order as RISC-V `fclass`
pub fn classify(w: FWidth, a: u64) -> u64 {
    by_width!(w, class_imp(a))
}

fn convert_imp<Src: FpFormat, Dst: FpFormat>(a: u64, env: &FpEnv) -> FpResult {
    let mut fp_state = env.state();
    let x = flush_in(Src::pack(a), env);
    let res = x.convert_to_float::<Dst>(Some(env.rm.soft()), Some(&mut fp_state));
    finish(res, &fp_state, env)
}

pub fn convert(from: FWidth, to: FWidth, a: u64, env: &FpEnv) -> FpResult {
    match (from, to) {
        (FWidth::H, FWidth::H) => convert_imp::<F16Traits, F16Traits>(a, env),
        (FWidth::H, FWidth::S) => convert_imp::<F16Traits, F32Traits>(a, env),
        (FWidth::H, FWidth::D) => convert_imp::<F16Traits, F64Traits>(a, env),
        (FWidth::S, FWidth::H) => convert_imp::<F32Traits, F16Traits>(a, env),
        (FWidth::S, FWidth::S) => convert_imp::<F32Traits, F32Traits>(a, env),
        (FWidth::S, FWidth::D) => convert_imp::<F32Traits, F64Traits>(a, env),
        (FWidth::D, FWidth::H) => convert_imp::<F64Traits, F16Traits>(a, env),
        (FWidth::D, FWidth::S) => convert_imp::<F64Traits, F32Traits>(a, env),
        (FWidth::D, FWidth::D) => convert_imp::<F64Traits, F64Traits>(a, env),
    }
}

fn to_int_imp<FT: FpFormat>(a: u64, iw: Width, sign: Sign, env: &FpEnv) -> FpResult {
    let mut fp_state = env.state();
    let rm = Some(env.rm.soft());
    let x = flush_in(FT::pack(a), env);
    let value: Option<i128> = match (iw, sign) {
        (Width::W64, Sign::Signed) => x.to_i64(true, rm, Some(&mut fp_state)).map(|v| v as i128),
        (Width::W64, Sign::Unsigned) => x.to_u64(true, rm, Some(&mut fp_state)).map(|v| v as i128),
        (_, Sign::Signed) => x.to_i32(true, rm, Some(&mut fp_state)).map(|v| v as i128),
        (_, Sign::Unsigned) => x.to_u32(true, rm, Some(&mut fp_state)).map(|v| v as i128),
    };
    match value {
        Some(v) if v >= iw.min(sign) && v <= iw.max(sign) => {
            FpResult::new(wrap(v, iw), Flags::from_status(&fp_state.status_flags))
        }
        _ => {
            let sat = if x.is_nan() || x.sign() == FSign::Positive { iw.max(sign) } else { iw.min(sign) };
            FpResult::new(wrap(sat, iw), Flags::NV)
        }
    }
}

/// float to integer under `env.rm`, out of range and NaN inputs saturate and raise NV
pub fn to_int(w: FWidth, a: u64, iw: Width, sign: Sign, env: &FpEnv) -> FpResult {
    by_width!(w, to_int_imp(a, iw, sign, env))
}

fn from_int_imp<FT: FpFormat>(v: u64, iw: Width, sign: Sign, env: &FpEnv) -> FpResult {
    let mut fp_state = env.state();
    let rm = Some(env.rm.soft());
    let res = match (iw, sign) {
        (Width::W64, Sign::Signed) => Float::<FT>::from_i64(v as i64, rm, Some(&mut fp_state)),
        (Width::W64, Sign::Unsigned) => Float::<FT>::from_u64(v, rm, Some(&mut fp_state)),
        (_, Sign::Signed) => Float::<FT>::from_i32(sext(v, iw.len()) as i32, rm, Some(&mut fp_state)),
        (_, Sign::Unsigned) => Float::<FT>::from_u32(zext(v, iw.len()) as u32, rm, Some(&mut fp_state)),
    };
    finish(res, &fp_state, env)
}

pub fn from_int(w: FWidth, v: u64, iw: Width, sign: Sign, env: &FpEnv) -> FpResult {
    by_width!(w, from_int_imp(v, iw, sign, env))
}

fn round_imp<FT: FpFormat>(a: u64, env: &FpEnv) -> FpResult {
    let mut fp_state = env.state();
    let x = flush_in(FT::pack(a), env);
    let res = x.round_to_integral(true, Some(env.rm.soft()), Some(&mut fp_state));
    finish(res, &fp_state, env)
}

/// Rounds to an integral value in the same format under `env.rm`, NX is raised
/// when the value changes.
pub fn round_to_integral(w: FWidth, a: u64, env: &FpEnv) -> FpResult {
    by_width!(w, round_imp(a, env))
}

fn class_of<FT: FpFormat>(a: u64) -> FloatClass {
    FT::pack(a).class()
}

pub fn is_nan(w: FWidth, bits: u64) -> bool {
    by_width!(w, class_of(bits)).is_nan()
}

pub fn is_subnormal(w: FWidth, bits: u64) -> bool {
    by_width!(w, class_of(bits)).is_subnormal()
}

fn paired(d: u64, x: u64, y: u64, env: &FpEnv, sub_acc: bool) -> FpResult {
    let mut flags = Flags::default();
    let mut out = 0u64;
    for i in 0..2 {
        let lane = |v: u64| (v >> (i * 32)) & 0xffff_ffff;
        let product = mul(FWidth::S, lane(x), lane(y), env);
        let sum = if sub_acc {
            sub(FWidth::S, product.bits, lane(d), env)
        } else {
            add(FWidth::S, lane(d), product.bits, env)
        };
        flags |= product.flags | sum.flags;
        out |= sum.bits << (i * 32);
    }
    FpResult::new(out, flags)
}

/// FMACM: paired single `d + x * y`, two f32 lanes in a 64-bit register
pub fn fmacm(d: u64, x: u64, y: u64, env: &FpEnv) -> FpResult {
    paired(d, x, y, env, false)
}

/// FMSCM: paired single `x * y - d`
pub fn fmscm(d: u64, x: u64, y: u64, env: &FpEnv) -> FpResult {
    paired(d, x, y, env, true)
}
