//! Vector operands are lane lists; predicated forms take `[vl, mask, old, ...]`
//! where the group size (and so LMUL) is the lane count of `old`.
use super::*;
use crate::vector::{self, memory, QuadMac, TailPolicy, VConfig};

fn prologue(a: &Args, sew: Width, old: usize) -> Result<(VConfig, Option<Mask>, VReg)> {
    let old = a.reg(old, sew)?;
    let cfg = VConfig::for_lanes(sew, old.len())?.with_vl(a.scalar(0)? as usize);
    let mask = a.mask(1, cfg.vlmax())?;
    Ok((cfg, mask, old))
}

fn lanes(r: VReg) -> Value {
    Value::Lanes(r.lanes)
}

fn registery_int(map: &mut GlobalInsnMap) {
    for &w in WIDTHS.iter() {
        let e = format!("e{}", w.len());
        for &sign in SIGNS.iter() {
            let ty = int_suffix(w, sign);
            map.registery(InsnDef::new(&format!("vadd.t.s.{}", ty), 2, move |a, _| {
                Ok(lanes(vector::vadd_t_s(&a.reg(0, w)?, &a.reg(1, w)?, sign)?))
            }));
            map.registery(InsnDef::new(&format!("vsht.t.rs.{}", ty), 2, move |a, _| {
                Ok(lanes(vector::vsht_t_rs(&a.reg(0, w)?, &a.reg(1, w)?, sign)?))
            }));
        }
        //[vd pair, vs pair]
        map.registery(InsnDef::new(&format!("vpkg.t.2.{}", e), 2, move |a, _| {
            Ok(lanes(vector::vpkg_t_2(&a.reg(0, w)?, &a.reg(1, w)?)?))
        }));
        for &(sign, name) in [(Sign::Signed, "vsadd"), (Sign::Unsigned, "vsaddu")].iter() {
            map.registery(InsnDef::new(&format!("{}.vx.{}", name, e), 5, move |a, _| {
                let (cfg, mask, old) = prologue(a, w, 2)?;
                Ok(lanes(vector::vsadd_vx(&cfg, mask.as_ref(), &old, &a.reg(3, w)?, a.scalar(4)?, sign)?))
            }));
        }
        map.registery(InsnDef::new(&format!("vsra.vv.{}", e), 5, move |a, _| {
            let (cfg, mask, old) = prologue(a, w, 2)?;
            Ok(lanes(vector::vsra_vv(&cfg, mask.as_ref(), &old, &a.reg(3, w)?, &a.reg(4, w)?)?))
        }));
        map.registery(InsnDef::new(&format!("vsrl.vv.{}", e), 5, move |a, _| {
            let (cfg, mask, old) = prologue(a, w, 2)?;
            Ok(lanes(vector::vsrl_vv(&cfg, mask.as_ref(), &old, &a.reg(3, w)?, &a.reg(4, w)?)?))
        }));
        if let Some(wide) = w.double() {
            map.registery(InsnDef::new(&format!("vnsrl.vi.{}", e), 5, move |a, _| {
                let (cfg, mask, old) = prologue(a, w, 2)?;
                Ok(lanes(vector::vnsrl_vi(&cfg, mask.as_ref(), &old, &a.reg(3, wide)?, a.scalar(4)?)?))
            }));
            for &sign in SIGNS.iter() {
                map.registery(InsnDef::new(&format!("vmulai.t.e.{}", int_suffix(w, sign)), 4, move |a, _| {
                    let acc = a.reg(0, wide)?;
                    Ok(lanes(vector::vmulai_t_e(&acc, &a.reg(1, w)?, &a.reg(2, w)?, a.scalar(3)? as usize, sign)?))
                }));
            }
            map.registery(InsnDef::new(&format!("vrmuli.t.se.{}", w.len()), 3, move |a, _| {
                Ok(lanes(vector::vrmuli_t_se(&a.reg(0, w)?, &a.reg(1, w)?, a.scalar(2)? as usize)?))
            }));
        }
        //[vl, selector, vs2]
        map.registery(InsnDef::new(&format!("vcompress.vm.{}", e), 3, move |a, _| {
            let vs2 = a.reg(2, w)?;
            let cfg = VConfig::for_lanes(w, vs2.len())?.with_vl(a.scalar(0)? as usize);
            let sel = a.mask(1, cfg.vlmax())?.unwrap_or_else(|| Mask::all(cfg.vlmax()));
            Ok(lanes(vector::vcompress_vm(&cfg, &vs2, &sel)?))
        }));
        map.registery(InsnDef::new(&format!("vcls.{}", e), 1, move |a, _| Ok(lanes(vector::vcls(&a.reg(0, w)?)))));
        map.registery(InsnDef::new(&format!("vcnt1.{}", e), 1, move |a, _| Ok(lanes(vector::vcnt1(&a.reg(0, w)?)))));
    }
}

fn registery_quad(map: &mut GlobalInsnMap) {
    for &(kind, name) in [(QuadMac::Maqa, "vmaqa"), (QuadMac::Maqau, "vmaqau"),
        (QuadMac::Maqasu, "vmaqasu"), (QuadMac::Maqaus, "vmaqaus")].iter() {
        //[vl (bytes), mask (bytes), acc, vs2, rs1]
        map.registery(InsnDef::new(&format!("{}.vx", name), 5, move |a, _| {
            let acc = a.reg(2, Width::W32)?;
            let mask = a.mask(1, acc.len() * 4)?;
            Ok(lanes(vector::vmaqa_vx(kind, &acc, &a.reg(3, Width::W8)?, a.scalar(4)?, a.scalar(0)? as usize, mask.as_ref())?))
        }));
        map.registery(InsnDef::new(&format!("{}.vv", name), 5, move |a, _| {
            let acc = a.reg(2, Width::W32)?;
            let mask = a.mask(1, acc.len() * 4)?;
            Ok(lanes(vector::vmaqa_vv(kind, &acc, &a.reg(3, Width::W8)?, &a.reg(4, Width::W8)?, a.scalar(0)? as usize, mask.as_ref())?))
        }));
    }
    map.registery(InsnDef::new("vpmaqaus.vx", 5, |a, _| {
        let acc = a.reg(2, Width::W32)?;
        let mask = a.mask(1, acc.len() * 4)?;
        Ok(lanes(vector::vpmaqaus_vx(&acc, &a.reg(3, Width::W8)?, a.scalar(4)?, a.scalar(0)? as usize, mask.as_ref())?))
    }));
    map.registery(InsnDef::new("vpnclip.wv", 5, |a, env| {
        let (cfg, mask, old) = prologue(a, Width::W8, 2)?;
        let cfg = cfg.with_tail(TailPolicy::Undisturbed);
        Ok(lanes(vector::vpnclip_wv(&cfg, mask.as_ref(), &old, &a.reg(3, Width::W16)?, &a.reg(4, Width::W8)?, env.vxrm)?))
    }));
}

fn registery_float(map: &mut GlobalInsnMap) {
    for &w in [Width::W16, Width::W32, Width::W64].iter() {
        let e = format!("e{}", w.len());
        if let Some(narrow) = w.half().filter(|n| *n != Width::W8) {
            //[vl, mask, vd, vs2 (narrow), f (narrow)]
            map.registery(InsnDef::new(&format!("vfwmacc.vf.{}", e), 5, move |a, env| {
                let (cfg, mask, vd) = prologue(a, w, 2)?;
                Ok(lanes(vector::vfwmacc_vf(&cfg, mask.as_ref(), &vd, &a.reg(3, narrow)?, a.scalar(4)?, &env.fp)?.0))
            }));
            map.registery(InsnDef::new(&format!("vfwnmacc.vf.{}", e), 5, move |a, env| {
                let (cfg, mask, vd) = prologue(a, w, 2)?;
                Ok(lanes(vector::vfwnmacc_vf(&cfg, mask.as_ref(), &vd, &a.reg(3, narrow)?, a.scalar(4)?, &env.fp)?.0))
            }));
        }
        //[vl, mask, vd, f, vs2]
        map.registery(InsnDef::new(&format!("vfmsub.vf.{}", e), 5, move |a, env| {
            let (cfg, mask, vd) = prologue(a, w, 2)?;
            Ok(lanes(vector::vfmsub_vf(&cfg, mask.as_ref(), &vd, a.scalar(3)?, &a.reg(4, w)?, &env.fp)?.0))
        }));
        map.registery(InsnDef::new(&format!("vfrdiv.vf.{}", e), 5, move |a, env| {
            let (cfg, mask, old) = prologue(a, w, 2)?;
            Ok(lanes(vector::vfrdiv_vf(&cfg, mask.as_ref(), &old, &a.reg(3, w)?, a.scalar(4)?, &env.fp)?.0))
        }));
        map.registery(InsnDef::new(&format!("vftofi.rz.{}", e), 4, move |a, env| {
            let (cfg, mask, old) = prologue(a, w, 2)?;
            Ok(lanes(vector::vftofi_rz(&cfg, mask.as_ref(), &old, &a.reg(3, w)?, &env.fp)?.0))
        }));
    }
}

fn registery_memory(map: &mut GlobalInsnMap) {
    for &w in WIDTHS.iter() {
        let e = format!("e{}", w.len());
        //[vl, mask, old, memory bytes, stride]
        map.registery(InsnDef::new(&format!("vlse.{}", e), 5, move |a, _| {
            let (cfg, mask, old) = prologue(a, w, 2)?;
            let mem: Vec<u8> = a.lanes(3)?.iter().map(|b| *b as u8).collect();
            Ok(lanes(memory::strided_load(&mem, a.scalar(4)? as i64, &cfg, mask.as_ref(), &old)?))
        }));
        //[vl, mask, memory bytes, index, field0, field1, ...], returns the memory
        for nf in 2..=8usize {
            map.registery(InsnDef::new(&format!("vsxseg{}.{}", nf, e), nf + 4, move |a, _| {
                let vl = a.scalar(0)? as usize;
                let index = a.reg(3, Width::W64)?;
                let mask = a.mask(1, index.len())?;
                let mut mem: Vec<u8> = a.lanes(2)?.iter().map(|b| *b as u8).collect();
                let fields = (0..nf).map(|f| a.reg(4 + f, Width::W64)).collect::<Result<Vec<VReg>>>()?;
                memory::indexed_segment_store(&mut mem, &fields, &index, w, vl, mask.as_ref())?;
                Ok(Value::Lanes(mem.into_iter().map(|b| b as u64).collect()))
            }));
        }
    }
}

#[distributed_slice(REGISTERY_INSN)]
static RVV_INSNS: fn(&mut GlobalInsnMap) = |map| {
    registery_int(map);
    registery_quad(map);
    registery_float(map);
    registery_memory(map);
};
