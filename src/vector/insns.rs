use super::*;
use crate::fixed::{self, FixedRound};
use crate::float::{self, FWidth, FpEnv, Flags, RoundMode};

/// float format carried by an element width
pub fn fwidth(sew: Width) -> Result<FWidth> {
    match sew {
        Width::W16 => Ok(FWidth::H),
        Width::W32 => Ok(FWidth::S),
        Width::W64 => Ok(FWidth::D),
        Width::W8 => Err(Error::InvalidCode("float width", 8)),
    }
}

fn same_len(insn: &str, a: &VReg, b: &VReg) -> Result<()> {
    if a.len() != b.len() || a.sew != b.sew {
        Err(Error::Shape {
            insn: insn.to_string(),
            idx: 1,
            msg: format!("{} x {:?} lanes against {} x {:?}", b.len(), b.sew, a.len(), a.sew),
        })
    } else {
        Ok(())
    }
}

/// vadd.t.s: lane-wise saturating add over a whole register, no predication
pub fn vadd_t_s(a: &VReg, b: &VReg, sign: Sign) -> Result<VReg> {
    same_len("vadd.t.s", a, b)?;
    let lanes = a.lanes.iter().zip(b.lanes.iter())
        .map(|(x, y)| fixed::sat_add(*x, *y, a.sew, sign))
        .collect();
    Ok(VReg::new(a.sew, lanes))
}

/// vpkg.t.2: `vd` and `vs` are register pairs. Lane 0 of each source register
/// lands in the two lanes either side of the pair boundary, the rest keep `vd`.
pub fn vpkg_t_2(vd: &VReg, vs: &VReg) -> Result<VReg> {
    same_len("vpkg.t.2", vd, vs)?;
    let n = vd.len() / 2;
    if n == 0 || vd.len() % 2 != 0 {
        return Err(Error::Shape {
            insn: "vpkg.t.2".to_string(),
            idx: 0,
            msg: format!("{} lanes are not a register pair", vd.len()),
        });
    }
    let mut res = vd.clone();
    res.set(n - 1, vs.get(0));
    res.set(n, vs.get(n));
    Ok(res)
}

/// vsadd.vx / vsaddu.vx
pub fn vsadd_vx(cfg: &VConfig, mask: Option<&Mask>, old: &VReg, vs2: &VReg, rs1: BitsT, sign: Sign) -> Result<VReg> {
    check_lanes("vsadd.vx", 1, vs2, cfg.vl)?;
    Ok(apply(cfg, mask, old, |i| fixed::sat_add(vs2.get(i), rs1, cfg.sew, sign)))
}

fn shift_vv(insn: &str, cfg: &VConfig, mask: Option<&Mask>, old: &VReg, vs2: &VReg, vs1: &VReg, sign: Sign) -> Result<VReg> {
    check_lanes(insn, 1, vs2, cfg.vl)?;
    check_lanes(insn, 2, vs1, cfg.vl)?;
    let sew = cfg.sew;
    Ok(apply(cfg, mask, old, |i| {
        let sh = (vs1.get(i) as usize) & (sew.len() - 1);
        wrap(vs2.get_as(i, sign) >> sh, sew)
    }))
}

pub fn vsra_vv(cfg: &VConfig, mask: Option<&Mask>, old: &VReg, vs2: &VReg, vs1: &VReg) -> Result<VReg> {
    shift_vv("vsra.vv", cfg, mask, old, vs2, vs1, Sign::Signed)
}

pub fn vsrl_vv(cfg: &VConfig, mask: Option<&Mask>, old: &VReg, vs2: &VReg, vs1: &VReg) -> Result<VReg> {
    shift_vv("vsrl.vv", cfg, mask, old, vs2, vs1, Sign::Unsigned)
}

/// vnsrl.vi: `cfg.sew` is the narrow destination width, `vs2` holds 2*SEW elements
pub fn vnsrl_vi(cfg: &VConfig, mask: Option<&Mask>, old: &VReg, vs2: &VReg, imm: u64) -> Result<VReg> {
    check_lanes("vnsrl.vi", 1, vs2, cfg.vl)?;
    let wide = cfg.sew.double().ok_or(Error::InvalidCode("narrowing sew", cfg.sew.len() as u64))?;
    if vs2.sew != wide {
        return Err(Error::Shape {
            insn: "vnsrl.vi".to_string(),
            idx: 1,
            msg: format!("expects {:?} elements, got {:?}", wide, vs2.sew),
        });
    }
    let sh = (imm as usize) & (wide.len() - 1);
    Ok(apply(cfg, mask, old, |i| vs2.get(i) >> sh))
}

/// vcompress.vm: enabled elements of `vs2` within `vl` packed from lane 0, the rest zero
pub fn vcompress_vm(cfg: &VConfig, vs2: &VReg, sel: &Mask) -> Result<VReg> {
    check_lanes("vcompress.vm", 1, vs2, cfg.vl)?;
    let mut res = VReg::zeros(cfg.sew, cfg.vlmax());
    let mut j = 0;
    for i in 0..cfg.vl {
        if sel.enabled(i) {
            res.set(j, vs2.get(i));
            j += 1;
        }
    }
    Ok(res)
}

pub fn vcls(a: &VReg) -> VReg {
    VReg::new(a.sew, a.lanes.iter().map(|v| fixed::cls(*v, a.sew)).collect())
}

pub fn vcnt1(a: &VReg) -> VReg {
    VReg::new(a.sew, a.lanes.iter().map(|v| fixed::popcount(*v, a.sew)).collect())
}

fn indexed(insn: &str, b: &VReg, idx: usize) -> Result<BitsT> {
    if idx >= b.len() {
        Err(Error::Shape {
            insn: insn.to_string(),
            idx: 2,
            msg: format!("element index {} out of {} lanes", idx, b.len()),
        })
    } else {
        Ok(b.get(idx))
    }
}

/// vmulai.t.e: `acc[i] + a[i] * b[idx]` into 2*SEW lanes, wrapping
pub fn vmulai_t_e(acc: &VReg, a: &VReg, b: &VReg, idx: usize, sign: Sign) -> Result<VReg> {
    let wide = a.sew.double().ok_or(Error::InvalidCode("widening sew", a.sew.len() as u64))?;
    check_lanes("vmulai.t.e", 0, acc, a.len())?;
    let y = indexed("vmulai.t.e", b, idx)?;
    let lanes = (0..a.len())
        .map(|i| fixed::mul_accumulate(a.get(i), y, acc.get(i), a.sew, sign, wide))
        .collect();
    Ok(VReg::new(wide, lanes))
}

/// vrmuli.t.se: `sat(2 * a[i] * b[idx])` into 2*SEW lanes; the result spans two registers
pub fn vrmuli_t_se(a: &VReg, b: &VReg, idx: usize) -> Result<VReg> {
    let wide = a.sew.double().ok_or(Error::InvalidCode("widening sew", a.sew.len() as u64))?;
    let y = to_i128(indexed("vrmuli.t.se", b, idx)?, a.sew, Sign::Signed);
    let lanes = (0..a.len())
        .map(|i| saturate(a.get_signed(i) * y * 2, wide, Sign::Signed))
        .collect();
    Ok(VReg::new(wide, lanes))
}

/// vsht.t.rs: shift by the signed amount in `b`, saturating left and rounding right
pub fn vsht_t_rs(a: &VReg, b: &VReg, sign: Sign) -> Result<VReg> {
    same_len("vsht.t.rs", a, b)?;
    let lanes = (0..a.len())
        .map(|i| fixed::shift_sat_round(a.get(i), b.get_signed(i) as i64, a.sew, sign))
        .collect();
    Ok(VReg::new(a.sew, lanes))
}

/// Operand signedness of the quad multiply-accumulate family,
/// `vs2` is the vector source and `rs1` the scalar (or second vector) one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum QuadMac {
    //signed x signed
    Maqa,
    //unsigned x unsigned
    Maqau,
    //signed rs1 x unsigned vs2
    Maqasu,
    //unsigned rs1 x signed vs2
    Maqaus,
}

impl QuadMac {
    fn signs(&self) -> (Sign, Sign) {
        match self {
            QuadMac::Maqa => (Sign::Signed, Sign::Signed),
            QuadMac::Maqau => (Sign::Unsigned, Sign::Unsigned),
            QuadMac::Maqasu => (Sign::Unsigned, Sign::Signed),
            QuadMac::Maqaus => (Sign::Signed, Sign::Unsigned),
        }
    }
}

// vl and mask count bytes of vs2, each 32-bit accumulator takes four of them
fn quad_mac<F: Fn(usize, usize) -> i128>(insn: &str, acc: &VReg, vs2: &VReg, vl: usize, mask: Option<&Mask>, f: F) -> Result<VReg> {
    check_lanes(insn, 1, vs2, acc.len() * 4)?;
    let lanes = (0..acc.len()).map(|i| {
        let sum = (0..4).fold(acc.get(i) as i128, |sum, k| {
            let byte = i * 4 + k;
            if byte < vl && mask.map(|m| m.enabled(byte)).unwrap_or(true) {
                sum + f(byte, k)
            } else {
                sum
            }
        });
        wrap(sum, Width::W32)
    }).collect();
    Ok(VReg::new(Width::W32, lanes))
}

fn byte_of(v: BitsT, k: usize) -> BitsT {
    (v >> (k * 8)) & 0xff
}

/// vmaqa*.vx: `acc[i] += sum(vs2[4i+k] * rs1.byte(k))`
pub fn vmaqa_vx(kind: QuadMac, acc: &VReg, vs2: &VReg, rs1: BitsT, vl: usize, mask: Option<&Mask>) -> Result<VReg> {
    let (vs2_sign, rs1_sign) = kind.signs();
    let vs2 = vs2.reinterpret(Width::W8);
    quad_mac("vmaqa.vx", acc, &vs2, vl, mask, |byte, k| {
        vs2.get_as(byte, vs2_sign) * to_i128(byte_of(rs1, k), Width::W8, rs1_sign)
    })
}

/// vmaqa*.vv: `acc[i] += sum(vs2[4i+k] * vs1[4i+k])`
pub fn vmaqa_vv(kind: QuadMac, acc: &VReg, vs2: &VReg, vs1: &VReg, vl: usize, mask: Option<&Mask>) -> Result<VReg> {
    let (vs2_sign, vs1_sign) = kind.signs();
    let vs2 = vs2.reinterpret(Width::W8);
    let vs1 = vs1.reinterpret(Width::W8);
    check_lanes("vmaqa.vv", 2, &vs1, acc.len() * 4)?;
    quad_mac("vmaqa.vv", acc, &vs2, vl, mask, |byte, _| {
        vs2.get_as(byte, vs2_sign) * vs1.get_as(byte, vs1_sign)
    })
}

fn nibbles(byte: BitsT, sign: Sign) -> (i128, i128) {
    let lo = byte & 0xf;
    let hi = (byte >> 4) & 0xf;
    match sign {
        Sign::Signed => (sext(lo, 4) as i64 as i128, sext(hi, 4) as i64 as i128),
        Sign::Unsigned => (lo as i128, hi as i128),
    }
}

/// vpmaqaus.vx: packed nibble quad MAC, signed nibbles of `vs2` against
/// unsigned nibbles of `rs1`, low with low and high with high
pub fn vpmaqaus_vx(acc: &VReg, vs2: &VReg, rs1: BitsT, vl: usize, mask: Option<&Mask>) -> Result<VReg> {
    let vs2 = vs2.reinterpret(Width::W8);
    quad_mac("vpmaqaus.vx", acc, &vs2, vl, mask, |byte, k| {
        let (xl, xh) = nibbles(vs2.get(byte), Sign::Signed);
        let (yl, yh) = nibbles(byte_of(rs1, k), Sign::Unsigned);
        xl * yl + xh * yh
    })
}

/// vpnclip.wv: each halfword of `vs2` is two signed bytes, shifted right by the
/// matching nibble of `vs1` and clipped to a signed nibble
pub fn vpnclip_wv(cfg: &VConfig, mask: Option<&Mask>, old: &VReg, vs2: &VReg, vs1: &VReg, mode: FixedRound) -> Result<VReg> {
    check_lanes("vpnclip.wv", 1, vs2, cfg.vl)?;
    check_lanes("vpnclip.wv", 2, vs1, cfg.vl)?;
    let clip = |byte: BitsT, sh: BitsT| -> BitsT {
        let v = fixed::round_shift_right_wide(to_i128(byte, Width::W8, Sign::Signed), (sh & 0x7) as usize, mode);
        clamp(v, -8, 7) as BitsT & 0xf
    };
    Ok(apply(cfg, mask, old, |i| {
        let h = vs2.get(i);
        let sh = vs1.get(i);
        clip(h & 0xff, sh & 0xf) | (clip((h >> 8) & 0xff, sh >> 4) << 4)
    }))
}

fn float_lanes<F: FnMut(usize) -> float::FpResult>(cfg: &VConfig, mask: Option<&Mask>, old: &VReg, mut f: F) -> (VReg, Flags) {
    let mut flags = Flags::default();
    let res = apply(cfg, mask, old, |i| {
        let r = f(i);
        flags |= r.flags;
        r.bits
    });
    (res, flags)
}

/// vfwmacc.vf: `vd[i] = widen(vs2[i]) * widen(f) + vd[i]`, `cfg.sew` is the wide width;
/// masked lanes keep the accumulator
pub fn vfwmacc_vf(cfg: &VConfig, mask: Option<&Mask>, vd: &VReg, vs2: &VReg, f: BitsT, env: &FpEnv) -> Result<(VReg, Flags)> {
    widening_fma("vfwmacc.vf", float::FusedOp::MAdd, cfg, mask, vd, vs2, f, env)
}

/// vfwnmacc.vf: `vd[i] = -(widen(vs2[i]) * widen(f)) - vd[i]`
pub fn vfwnmacc_vf(cfg: &VConfig, mask: Option<&Mask>, vd: &VReg, vs2: &VReg, f: BitsT, env: &FpEnv) -> Result<(VReg, Flags)> {
    widening_fma("vfwnmacc.vf", float::FusedOp::NMAdd, cfg, mask, vd, vs2, f, env)
}

fn widening_fma(insn: &str, op: float::FusedOp, cfg: &VConfig, mask: Option<&Mask>, vd: &VReg, vs2: &VReg, f: BitsT, env: &FpEnv) -> Result<(VReg, Flags)> {
    check_lanes(insn, 0, vd, cfg.vl)?;
    check_lanes(insn, 1, vs2, cfg.vl)?;
    let wide = fwidth(cfg.sew)?;
    let narrow = fwidth(vs2.sew)?;
    if narrow.widen() != Some(wide) {
        return Err(Error::Shape {
            insn: insn.to_string(),
            idx: 1,
            msg: format!("{:?} does not widen to {:?}", narrow, wide),
        });
    }
    let y = float::convert(narrow, wide, f, env);
    let (res, flags) = float_lanes(cfg, mask, vd, |i| {
        let x = float::convert(narrow, wide, vs2.get(i), env);
        let r = float::fused(wide, op, x.bits, y.bits, vd.get(i), env);
        float::FpResult::new(r.bits, r.flags | x.flags)
    });
    Ok((res, flags | y.flags))
}

/// vfmsub.vf: `vd[i] = vd[i] * f - vs2[i]`
pub fn vfmsub_vf(cfg: &VConfig, mask: Option<&Mask>, vd: &VReg, f: BitsT, vs2: &VReg, env: &FpEnv) -> Result<(VReg, Flags)> {
    check_lanes("vfmsub.vf", 0, vd, cfg.vl)?;
    check_lanes("vfmsub.vf", 2, vs2, cfg.vl)?;
    let w = fwidth(cfg.sew)?;
    Ok(float_lanes(cfg, mask, vd, |i| float::fmsub(w, vd.get(i), f, vs2.get(i), env)))
}

/// vfrdiv.vf: `f / vs2[i]`
pub fn vfrdiv_vf(cfg: &VConfig, mask: Option<&Mask>, old: &VReg, vs2: &VReg, f: BitsT, env: &FpEnv) -> Result<(VReg, Flags)> {
    check_lanes("vfrdiv.vf", 1, vs2, cfg.vl)?;
    let w = fwidth(cfg.sew)?;
    Ok(float_lanes(cfg, mask, old, |i| float::div(w, f, vs2.get(i), env)))
}

/// vftofi.rz: round every lane to an integral value toward zero
pub fn vftofi_rz(cfg: &VConfig, mask: Option<&Mask>, old: &VReg, vs2: &VReg, env: &FpEnv) -> Result<(VReg, Flags)> {
    check_lanes("vftofi.rz", 1, vs2, cfg.vl)?;
    let w = fwidth(cfg.sew)?;
    let env = env.with_rm(RoundMode::Rtz);
    Ok(float_lanes(cfg, mask, old, |i| float::round_to_integral(w, vs2.get(i), &env)))
}
