use super::*;
use crate::float::{self, FArith, FCmp, FWidth, FusedOp, RoundMode};

const FWIDTHS: [(FWidth, &str); 3] = [(FWidth::H, "h"), (FWidth::S, "s"), (FWidth::D, "d")];

const INT_TYPES: [(Width, Sign, &str); 4] = [
    (Width::W32, Sign::Signed, "w"),
    (Width::W32, Sign::Unsigned, "wu"),
    (Width::W64, Sign::Signed, "l"),
    (Width::W64, Sign::Unsigned, "lu"),
];

//CSKY conversion mnemonics carry the rounding mode, `fstosi.rz`
const CSKY_RMS: [&str; 4] = ["rn", "rz", "rpi", "rni"];

fn registery_riscv(map: &mut GlobalInsnMap) {
    for &(w, t) in FWIDTHS.iter() {
        for &(op, name) in [(FArith::Add, "fadd"), (FArith::Sub, "fsub"), (FArith::Mul, "fmul"), (FArith::Div, "fdiv")].iter() {
            map.registery(InsnDef::new(&format!("{}.{}", name, t), 2, move |a, env| {
                Ok(float::arith(w, op, a.scalar(0)?, a.scalar(1)?, &env.fp).bits.into())
            }));
        }
        for &(op, name) in [(FusedOp::MAdd, "fmadd"), (FusedOp::MSub, "fmsub"), (FusedOp::NMSub, "fnmsub"), (FusedOp::NMAdd, "fnmadd")].iter() {
            map.registery(InsnDef::new(&format!("{}.{}", name, t), 3, move |a, env| {
                Ok(float::fused(w, op, a.scalar(0)?, a.scalar(1)?, a.scalar(2)?, &env.fp).bits.into())
            }));
        }
        for &(pred, name) in [(FCmp::Eq, "feq"), (FCmp::Ne, "fne"), (FCmp::Lt, "flt"), (FCmp::Le, "fle"),
            (FCmp::Gt, "fgt"), (FCmp::Ge, "fge"), (FCmp::Unordered, "funord")].iter() {
            map.registery(InsnDef::new(&format!("{}.{}", name, t), 2, move |a, _| {
                Ok(float::fcmp(w, pred, a.scalar(0)?, a.scalar(1)?).bits.into())
            }));
        }
        map.registery(InsnDef::new(&format!("fsqrt.{}", t), 1, move |a, env| Ok(float::sqrt(w, a.scalar(0)?, &env.fp).bits.into())));
        map.registery(InsnDef::new(&format!("fabs.{}", t), 1, move |a, _| Ok(float::abs(w, a.scalar(0)?).into())));
        map.registery(InsnDef::new(&format!("fneg.{}", t), 1, move |a, _| Ok(float::neg(w, a.scalar(0)?).into())));
        map.registery(InsnDef::new(&format!("fclass.{}", t), 1, move |a, _| Ok(float::classify(w, a.scalar(0)?).into())));
        map.registery(InsnDef::new(&format!("fround.{}", t), 1, move |a, env| {
            Ok(float::round_to_integral(w, a.scalar(0)?, &env.fp).bits.into())
        }));
        for &(to, tt) in FWIDTHS.iter().filter(|(to, _)| *to != w) {
            map.registery(InsnDef::new(&format!("fcvt.{}.{}", tt, t), 1, move |a, env| {
                Ok(float::convert(w, to, a.scalar(0)?, &env.fp).bits.into())
            }));
        }
        for &(iw, sign, it) in INT_TYPES.iter() {
            map.registery(InsnDef::new(&format!("fcvt.{}.{}", it, t), 1, move |a, env| {
                Ok(float::to_int(w, a.scalar(0)?, iw, sign, &env.fp).bits.into())
            }));
            map.registery(InsnDef::new(&format!("fcvt.{}.{}", t, it), 1, move |a, env| {
                Ok(float::from_int(w, a.scalar(0)?, iw, sign, &env.fp).bits.into())
            }));
        }
    }
}

fn registery_csky(map: &mut GlobalInsnMap) {
    for &(w, t) in [(FWidth::S, "s"), (FWidth::D, "d")].iter() {
        for &(sign, st) in [(Sign::Signed, "si"), (Sign::Unsigned, "ui")].iter() {
            for rm_name in CSKY_RMS.iter() {
                let rm = RoundMode::from_mnemonic(rm_name).unwrap_or_default();
                map.registery(InsnDef::new(&format!("f{}to{}.{}", t, st, rm_name), 1, move |a, env| {
                    Ok(float::to_int(w, a.scalar(0)?, Width::W32, sign, &env.fp.with_rm(rm)).bits.into())
                }));
            }
            map.registery(InsnDef::new(&format!("f{}to{}", st, t), 1, move |a, env| {
                Ok(float::from_int(w, a.scalar(0)?, Width::W32, sign, &env.fp).bits.into())
            }));
        }
    }
    for &(from, to, name) in [(FWidth::S, FWidth::D, "fstod"), (FWidth::D, FWidth::S, "fdtos"),
        (FWidth::S, FWidth::H, "fstoh"), (FWidth::H, FWidth::S, "fhtos")].iter() {
        map.registery(InsnDef::new(name, 1, move |a, env| Ok(float::convert(from, to, a.scalar(0)?, &env.fp).bits.into())));
    }
    //paired single, [d, x, y]
    map.registery(InsnDef::new("fmacm", 3, |a, env| {
        Ok(float::fmacm(a.scalar(0)?, a.scalar(1)?, a.scalar(2)?, &env.fp).bits.into())
    }));
    map.registery(InsnDef::new("fmscm", 3, |a, env| {
        Ok(float::fmscm(a.scalar(0)?, a.scalar(1)?, a.scalar(2)?, &env.fp).bits.into())
    }));
}

#[distributed_slice(REGISTERY_INSN)]
static FPU_INSNS: fn(&mut GlobalInsnMap) = |map| {
    registery_riscv(map);
    registery_csky(map);
};
