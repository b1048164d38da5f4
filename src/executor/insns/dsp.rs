use super::*;
use crate::fixed::{self, packed, filter::*};

type Binary = fn(u32, u32) -> u32;
type Ternary = fn(u32, u32, u32) -> u32;
type Long = fn(u32, u32, u64) -> u64;

const BINARY: &[(&str, Binary)] = &[
    ("mul.s32.rh", packed::mul_s32_rh),
    ("mulll.s16.f", packed::mulll_s16_f),
    ("mulcsx.s16.f", packed::mulcsx_s16_f),
    ("paddh.s16", packed::paddh_s16),
    ("pcmplt.s8", packed::pcmplt_s8),
    ("prmul.s16.h", packed::prmul_s16_h),
    ("qadd8", packed::qadd8),
    ("qadd16", packed::qadd16),
    ("uqadd8", packed::uqadd8),
    ("uqadd16", packed::uqadd16),
    ("qsub8", packed::qsub8),
    ("qsub16", packed::qsub16),
    ("uqsub8", packed::uqsub8),
    ("uqsub16", packed::uqsub16),
    ("sadd8", packed::sadd8),
    ("sadd16", packed::sadd16),
    ("uadd8", packed::uadd8),
    ("uadd16", packed::uadd16),
    ("shadd8", packed::shadd8),
    ("shadd16", packed::shadd16),
    ("uhadd8", packed::uhadd8),
    ("uhadd16", packed::uhadd16),
    ("shsub16", packed::shsub16),
    ("qasx", packed::qasx),
    ("qsax", packed::qsax),
    ("ssat16", packed::ssat16),
    ("usat16", packed::usat16),
    ("smuad", packed::smuad),
    ("smuadx", packed::smuadx),
    ("smusd", packed::smusd),
    ("smusdx", packed::smusdx),
    ("qadd", packed::qadd),
    ("qsub", packed::qsub),
    ("sxtab16", packed::sxtab16),
    ("uxtab16", packed::uxtab16),
    ("usad8", packed::usad8),
    ("ror", packed::ror),
    ("ssat", packed::ssat),
    ("usat", packed::usat32),
    ("sclip32", packed::sclip32),
    ("srai16.u", packed::srai16_u),
];

const TERNARY: &[(&str, Ternary)] = &[
    ("mula.s32.hs", packed::mula_s32_hs),
    ("smlad", packed::smlad),
    ("smladx", packed::smladx),
    ("smlsd", packed::smlsd),
    ("smlsdx", packed::smlsdx),
    ("smmla", packed::smmla),
    ("usada8", packed::usada8),
    ("pkhbt", packed::pkhbt),
    ("pkhtb", packed::pkhtb),
];

const LONG: &[(&str, Long)] = &[
    ("mulscax.s16.e", packed::mulscax_s16_e),
    ("smlald", packed::smlald),
    ("smlaldx", packed::smlaldx),
    ("smlsld", packed::smlsld),
    ("smlsldx", packed::smlsldx),
];

const UNARY: &[(&str, fn(u32) -> u32)] = &[
    ("sxtb16", packed::sxtb16),
    ("uxtb16", packed::uxtb16),
    ("rbit", packed::rbit),
    ("clz", packed::clz),
];

fn word(a: &Args, idx: usize) -> Result<u32> {
    Ok(a.scalar(idx)? as u32)
}

fn registery_packed(map: &mut GlobalInsnMap) {
    for &(name, f) in BINARY {
        map.registery(InsnDef::new(name, 2, move |a, _| Ok((f(word(a, 0)?, word(a, 1)?) as u64).into())))
    }
    for &(name, f) in TERNARY {
        map.registery(InsnDef::new(name, 3, move |a, _| Ok((f(word(a, 0)?, word(a, 1)?, word(a, 2)?) as u64).into())))
    }
    for &(name, f) in LONG {
        map.registery(InsnDef::new(name, 3, move |a, _| Ok(f(word(a, 0)?, word(a, 1)?, a.scalar(2)?).into())))
    }
    for &(name, f) in UNARY {
        map.registery(InsnDef::new(name, 1, move |a, _| Ok((f(word(a, 0)?) as u64).into())))
    }
    map.registery(InsnDef::new("dup.16", 2, |a, _| {
        let index = a.scalar(1)?;
        if index > 1 {
            return Err(Error::InvalidCode("dup.16 index", index));
        }
        Ok((packed::dup_16(word(a, 0)?, index as u32) as u64).into())
    }));
    map.registery(InsnDef::new("pmulawh.s16.f", 3, |a, _| {
        Ok(packed::pmulawh_s16_f(a.scalar(0)?, word(a, 1)?, word(a, 2)?).into())
    }));
}

fn registery_generic(map: &mut GlobalInsnMap) {
    for &w in WIDTHS.iter() {
        for &sign in SIGNS.iter() {
            let ty = int_suffix(w, sign);
            map.registery(InsnDef::new(&format!("add.sat.{}", ty), 2, move |a, _| {
                Ok(fixed::sat_add(a.scalar(0)?, a.scalar(1)?, w, sign).into())
            }));
            map.registery(InsnDef::new(&format!("sub.sat.{}", ty), 2, move |a, _| {
                Ok(fixed::sat_sub(a.scalar(0)?, a.scalar(1)?, w, sign).into())
            }));
            map.registery(InsnDef::new(&format!("mulh.{}", ty), 2, move |a, _| {
                Ok(fixed::mul_high(a.scalar(0)?, a.scalar(1)?, w, sign, None, w.len()).into())
            }));
            map.registery(InsnDef::new(&format!("mulhr.{}", ty), 2, move |a, _| {
                Ok(fixed::mul_high(a.scalar(0)?, a.scalar(1)?, w, sign, Some(w.len() - 1), w.len()).into())
            }));
            map.registery(InsnDef::new(&format!("shift.sat.{}", ty), 2, move |a, _| {
                Ok(fixed::shift_sat_round(a.scalar(0)?, a.scalar(1)? as i64, w, sign).into())
            }));
            //shift amount is an unsigned count, the rounding mode comes from vxrm
            map.registery(InsnDef::new(&format!("shift.round.{}", ty), 2, move |a, env| {
                Ok(fixed::round_shift_right(a.scalar(0)?, a.scalar(1)? as usize, w, sign, env.vxrm).into())
            }));
            map.registery(InsnDef::new(&format!("havg.{}", ty), 2, move |a, _| {
                Ok(fixed::pair_add_halved(a.scalar(0)?, a.scalar(1)?, w, sign, w.len()).into())
            }));
            map.registery(InsnDef::new(&format!("hsub.{}", ty), 2, move |a, _| {
                Ok(fixed::halving_sub(a.scalar(0)?, a.scalar(1)?, w, sign, w.len()).into())
            }));
            if let Some(wide) = w.double() {
                map.registery(InsnDef::new(&format!("macw.{}", ty), 3, move |a, _| {
                    Ok(fixed::mul_accumulate(a.scalar(0)?, a.scalar(1)?, a.scalar(2)?, w, sign, wide).into())
                }));
                map.registery(InsnDef::new(&format!("macw.sat.{}", ty), 3, move |a, _| {
                    Ok(fixed::mul_accumulate_sat(a.scalar(0)?, a.scalar(1)?, a.scalar(2)?, w, sign, wide).into())
                }));
                map.registery(InsnDef::new(&format!("nclip.{}", ty), 1, move |a, _| {
                    Ok(fixed::narrow_clip(to_i128(a.scalar(0)?, wide, sign), w, sign).into())
                }));
            }
        }
        map.registery(InsnDef::new(&format!("cls.{}", w.len()), 1, move |a, _| Ok(fixed::cls(a.scalar(0)?, w).into())));
        map.registery(InsnDef::new(&format!("popcount.{}", w.len()), 1, move |a, _| Ok(fixed::popcount(a.scalar(0)?, w).into())));
    }
    map.registery(InsnDef::new("clip", 2, |a, _| Ok((fixed::clip(a.scalar(0)? as i64, a.scalar(1)? as u32) as u64).into())));
    map.registery(InsnDef::new("clipu", 2, |a, _| Ok(fixed::usat(a.scalar(0)? as i64, a.scalar(1)? as u32).into())));
}

fn registery_filter(map: &mut GlobalInsnMap) {
    for &(name, io) in [("fxp16", FxpType::Fxp16), ("fxp24", FxpType::Fxp24), ("fxp32", FxpType::Fxp32)].iter() {
        let samples = move |a: &Args, idx: usize| -> Result<Vec<i64>> {
            Ok(a.lanes(idx)?.iter().map(|v| sext(*v, io.bits() as usize) as i64).collect())
        };
        //[coeff x5 (Q1.7.24), input with history, yn1, yn2]
        map.registery(InsnDef::new(&format!("iir2.{}", name), 4, move |a, _| {
            let c = coeffs(a, 0)?;
            let mut narrow = [0i32; NUM_IIR_COEFF];
            for (d, s) in narrow.iter_mut().zip(c.iter()) {
                *d = *s as i32;
            }
            let out = iir2(io, &IirCoeff::Fxp32(narrow), &samples(a, 1)?, a.scalar(2)? as i64, a.scalar(3)? as i64);
            Ok(Value::Lanes(out.into_iter().map(|v| v as u64).collect()))
        }));
        //[coeff x5 (Q1.15.48), output_loc_sel, input with history, yn1, yn2]
        map.registery(InsnDef::new(&format!("iir2l.{}", name), 5, move |a, _| {
            let coeff = IirCoeff::Fxp64(coeffs(a, 0)?, OutputLoc::new(a.scalar(1)?)?);
            let out = iir2(io, &coeff, &samples(a, 2)?, a.scalar(3)? as i64, a.scalar(4)? as i64);
            Ok(Value::Lanes(out.into_iter().map(|v| v as u64).collect()))
        }));
    }
}

fn coeffs(a: &Args, idx: usize) -> Result<[i64; NUM_IIR_COEFF]> {
    let l = a.lanes(idx)?;
    if l.len() != NUM_IIR_COEFF {
        return Err(Error::Shape {
            insn: "iir2".to_string(),
            idx,
            msg: format!("expects {} coefficients, got {}", NUM_IIR_COEFF, l.len()),
        });
    }
    let mut c = [0i64; NUM_IIR_COEFF];
    for (d, s) in c.iter_mut().zip(l.iter()) {
        *d = *s as i64;
    }
    Ok(c)
}

#[distributed_slice(REGISTERY_INSN)]
static DSP_INSNS: fn(&mut GlobalInsnMap) = |map| {
    registery_packed(map);
    registery_generic(map);
    registery_filter(map);
};
