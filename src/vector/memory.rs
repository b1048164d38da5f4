//! Element address generation for strided and indexed-segment accesses.
//!
//! Offsets are in bytes relative to the base of `mem`; the lane engine only
//! decides which elements are touched, the address functions decide where.
//! Address arithmetic wraps at 64 bits as the XLEN adder does, a wrapped
//! offset then falls outside `mem` and is reported as an access error.

use super::*;
use std::ops::Range;

/// byte span of element `i` for a constant `stride` in bytes
pub fn strided_offset(i: usize, stride: i64, eew: Width) -> Range<i64> {
    let start = (i as i64).wrapping_mul(stride);
    start..start.wrapping_add(eew.size() as i64)
}

/// byte span of `field` of segment `i`, the segment starting at byte offset `index[i]`
pub fn indexed_segment_offset(i: usize, field: usize, index: &VReg, eew: Width) -> Range<i64> {
    let start = (index.get(i) as i64).wrapping_add((field * eew.size()) as i64);
    start..start.wrapping_add(eew.size() as i64)
}

fn span(insn: &str, mem_len: usize, r: Range<i64>) -> Result<Range<usize>> {
    if r.start < 0 || r.end < r.start || r.end as u64 > mem_len as u64 {
        Err(Error::Shape {
            insn: insn.to_string(),
            idx: 0,
            msg: format!("access {:#x}..{:#x} outside {:#x} bytes", r.start, r.end, mem_len),
        })
    } else {
        Ok(r.start as usize..r.end as usize)
    }
}

fn read(mem: &[u8], r: Range<usize>) -> BitsT {
    mem[r].iter().rev().fold(0 as BitsT, |acc, b| (acc << 8) | *b as BitsT)
}

fn write(mem: &mut [u8], r: Range<usize>, v: BitsT) {
    for (k, b) in mem[r].iter_mut().enumerate() {
        *b = (v >> (k * 8)) as u8
    }
}

/// vlse<eew>: lane `i` loads from `strided_offset(i, stride, cfg.sew)`
pub fn strided_load(mem: &[u8], stride: i64, cfg: &VConfig, mask: Option<&Mask>, old: &VReg) -> Result<VReg> {
    let mut fault = None;
    let res = apply(cfg, mask, old, |i| {
        match span("vlse", mem.len(), strided_offset(i, stride, cfg.sew)) {
            Ok(r) => read(mem, r),
            Err(e) => {
                if fault.is_none() {
                    fault = Some(e)
                }
                0
            }
        }
    });
    match fault {
        Some(e) => Err(e),
        None => Ok(res),
    }
}

/// vsxseg<nf><eew>: field `f` of every active segment stores the low `eew`
/// bytes of `fields[f][i]`; later lanes win on overlapping offsets.
/// Every access is checked before the first byte is written.
pub fn indexed_segment_store(mem: &mut [u8], fields: &[VReg], index: &VReg, eew: Width, vl: usize, mask: Option<&Mask>) -> Result<()> {
    check_lanes("vsxseg", 1, index, vl)?;
    for (f, reg) in fields.iter().enumerate() {
        check_lanes("vsxseg", f + 2, reg, vl)?;
    }
    let mut stores = vec![];
    for i in (0..vl).filter(|i| mask.map(|m| m.enabled(*i)).unwrap_or(true)) {
        for (f, reg) in fields.iter().enumerate() {
            stores.push((span("vsxseg", mem.len(), indexed_segment_offset(i, f, index, eew))?, reg.get(i)));
        }
    }
    for (r, v) in stores {
        write(mem, r, v)
    }
    Ok(())
}
