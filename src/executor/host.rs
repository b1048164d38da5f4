//! The host CPU as the instruction under test: native saturating integer
//! arithmetic and IEEE binary32/binary64 arithmetic.
//!
//! Only what the host can express without emulation is supported; the host's
//! rounding mode is fixed to nearest-even and subnormals are never flushed.
use super::*;
use crate::float::{DenormalMode, NanPolicy, RoundMode};
use num::traits::{PrimInt, Saturating};

trait HostInt: PrimInt + Saturating {
    fn from_raw(v: u64) -> Self;
    fn to_raw(self) -> u64;
}

macro_rules! host_int {
    ($($t:ty),*) => {
        $(
        impl HostInt for $t {
            fn from_raw(v: u64) -> Self {
                v as $t
            }
            fn to_raw(self) -> u64 {
                (self as u64) & low_mask(std::mem::size_of::<$t>() * 8)
            }
        }
        )*
    };
}

host_int!(i8, i16, i32, i64, u8, u16, u32, u64);

trait HostFloat: num::Float {
    fn from_raw(v: u64) -> Self;
    fn to_raw(self) -> u64;
}

impl HostFloat for f32 {
    fn from_raw(v: u64) -> Self {
        f32::from_bits(v as u32)
    }
    fn to_raw(self) -> u64 {
        f32::to_bits(self) as u64
    }
}

impl HostFloat for f64 {
    fn from_raw(v: u64) -> Self {
        f64::from_bits(v)
    }
    fn to_raw(self) -> u64 {
        f64::to_bits(self)
    }
}

fn int_op<T: HostInt>(op: &str, a: &Args) -> Option<Result<Value>> {
    let binary = |f: fn(T, T) -> T| -> Result<Value> {
        Ok(f(T::from_raw(a.scalar(0)?), T::from_raw(a.scalar(1)?)).to_raw().into())
    };
    match op {
        "add.sat" => Some(binary(|x, y| x.saturating_add(y))),
        "sub.sat" => Some(binary(|x, y| x.saturating_sub(y))),
        "vadd.t.s" => Some(a.lanes(0).and_then(|x| {
            let y = a.lanes(1)?;
            if x.len() != y.len() {
                return Err(Error::Shape {
                    insn: op.to_string(),
                    idx: 1,
                    msg: format!("{} lanes against {}", y.len(), x.len()),
                });
            }
            Ok(Value::Lanes(x.iter().zip(y.iter())
                .map(|(x, y)| T::from_raw(*x).saturating_add(T::from_raw(*y)).to_raw())
                .collect()))
        })),
        _ => None
    }
}

fn popcount<T: HostInt>(a: &Args) -> Result<Value> {
    Ok((T::from_raw(a.scalar(0)?).count_ones() as u64).into())
}

fn float_op<F: HostFloat>(op: &str, a: &Args) -> Option<Result<Value>> {
    let x = |i: usize| a.scalar(i).map(F::from_raw);
    let unary = |f: fn(F) -> F| -> Result<Value> { Ok(f(x(0)?).to_raw().into()) };
    let binary = |f: fn(F, F) -> F| -> Result<Value> { Ok(f(x(0)?, x(1)?).to_raw().into()) };
    let ternary = |f: fn(F, F, F) -> F| -> Result<Value> { Ok(f(x(0)?, x(1)?, x(2)?).to_raw().into()) };
    let pred = |f: fn(F, F) -> bool| -> Result<Value> { Ok((f(x(0)?, x(1)?) as u64).into()) };
    match op {
        "fadd" => Some(binary(|a, b| a + b)),
        "fsub" => Some(binary(|a, b| a - b)),
        "fmul" => Some(binary(|a, b| a * b)),
        "fdiv" => Some(binary(|a, b| a / b)),
        "fsqrt" => Some(unary(|a| a.sqrt())),
        "fabs" => Some(unary(|a| a.abs())),
        "fneg" => Some(unary(|a| -a)),
        "fmadd" => Some(ternary(|a, b, c| a.mul_add(b, c))),
        "fmsub" => Some(ternary(|a, b, c| a.mul_add(b, -c))),
        "fnmsub" => Some(ternary(|a, b, c| (-a).mul_add(b, c))),
        "fnmadd" => Some(ternary(|a, b, c| (-a).mul_add(b, -c))),
        "feq" => Some(pred(|a, b| a == b)),
        "fne" => Some(pred(|a, b| a != b)),
        "flt" => Some(pred(|a, b| a < b)),
        "fle" => Some(pred(|a, b| a <= b)),
        "fgt" => Some(pred(|a, b| a > b)),
        "fge" => Some(pred(|a, b| a >= b)),
        "funord" => Some(pred(|a, b| a.is_nan() || b.is_nan())),
        _ => None
    }
}

pub struct HostExecutor {
    env: Env,
}

impl HostExecutor {
    pub fn new(env: Env) -> HostExecutor {
        if env.fp.nan != NanPolicy::default() {
            log::warn!("host NaN results keep the cpu encoding, nan_policy {:?} is not applied", env.fp.nan);
        }
        HostExecutor { env }
    }

    fn native(&self, insn: &str, a: &Args) -> Option<Result<Value>> {
        let (op, ty) = match insn.rfind('.') {
            Some(i) => (&insn[..i], &insn[i + 1..]),
            None => (insn, ""),
        };
        let fp_native = self.env.fp.rm == RoundMode::Rne && self.env.fp.denormal == DenormalMode::Gradual;
        let typed = match ty {
            "s8" => int_op::<i8>(op, a),
            "s16" => int_op::<i16>(op, a),
            "s32" => int_op::<i32>(op, a),
            "s64" => int_op::<i64>(op, a),
            "u8" => int_op::<u8>(op, a),
            "u16" => int_op::<u16>(op, a),
            "u32" => int_op::<u32>(op, a),
            "u64" => int_op::<u64>(op, a),
            "s" if fp_native => float_op::<f32>(op, a),
            "d" if fp_native => float_op::<f64>(op, a),
            _ => None
        };
        typed.or_else(|| match insn {
            "popcount.8" => Some(popcount::<u8>(a)),
            "popcount.16" => Some(popcount::<u16>(a)),
            "popcount.32" => Some(popcount::<u32>(a)),
            "popcount.64" => Some(popcount::<u64>(a)),
            "fstod" | "fcvt.d.s" => Some(a.scalar(0).map(|v| (f32::from_bits(v as u32) as f64).to_bits().into())),
            "fdtos" | "fcvt.s.d" if fp_native => Some(a.scalar(0).map(|v| ((f64::from_bits(v) as f32).to_bits() as u64).into())),
            "fsitos" if fp_native => Some(a.scalar(0).map(|v| ((v as i32 as f32).to_bits() as u64).into())),
            "fsitod" => Some(a.scalar(0).map(|v| (v as i32 as f64).to_bits().into())),
            //`as` truncates toward zero and saturates, NaN becomes 0
            "fstosi.rz" => Some(a.scalar(0).map(|v| (f32::from_bits(v as u32) as i32 as u32 as u64).into())),
            "fdtosi.rz" => Some(a.scalar(0).map(|v| (f64::from_bits(v) as i32 as u32 as u64).into())),
            _ => None
        })
    }
}

impl Executor for HostExecutor {
    fn name(&self) -> &'static str {
        "host"
    }

    fn execute(&self, insn: &str, args: &[Value]) -> Result<Value> {
        let def = GINSNS.get(insn)?;
        if args.len() != def.arity() {
            return Err(Error::Arity {
                insn: insn.to_string(),
                expected: def.arity(),
                actual: args.len(),
            });
        }
        let res = self.native(insn, &Args::new(insn, args))
            .ok_or_else(|| Error::Unsupported("host", insn.to_string()))??;
        log::debug!("host {}{:x?} = {:x?}", insn, args, res);
        Ok(res)
    }
}
