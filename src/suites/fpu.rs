use super::*;

const M1_5: u64 = 0xbff8_0000_0000_0000;

const ROUNDING: &[(&str, &[u64], u64)] = &[
    ("fdtosi.rn", &[M1_5], 0xffff_fffe),
    ("fdtosi.rz", &[M1_5], 0xffff_ffff),
    ("fdtosi.rpi", &[M1_5], 0xffff_ffff),
    ("fdtosi.rni", &[M1_5], 0xffff_fffe),
    ("fstoui.rn", &[0x3fc0_0000], 2),
    ("fstoui.rz", &[0x3fc0_0000], 1),
    ("fstoui.rpi", &[0x3fc0_0000], 2),
    ("fstoui.rni", &[0x3fc0_0000], 1),
    ("fstoui.rn", &[0x400c_cccd], 2),
    ("fstoui.rn", &[0x3f99_999a], 1),
    ("fstosi.rn", &[0x7fc0_0000], 0x7fff_ffff),
    ("fstosi.rn", &[0x5015_02f9], 0x7fff_ffff),
    ("fsitos", &[0xffff_ffff], 0xbf80_0000),
    ("fsitos", &[16777217], 0x4b80_0000),
    ("fcvt.w.d", &[M1_5], 0xffff_fffe),
    ("fcvt.l.s", &[0xff80_0000], 0x8000_0000_0000_0000),
    ("fcvt.wu.s", &[0xff80_0000], 0),
    ("fcvt.d.lu", &[0xffff_ffff_ffff_ffff], 0x43f0_0000_0000_0000),
];

const ARITH: &[(&str, &[u64], u64)] = &[
    ("fadd.s", &[0xbfc0_0000, 0x3f80_0000], 0xbf00_0000),
    ("fadd.s", &[0x3fc0_0000, 0x3f80_0000], 0x4020_0000),
    ("fadd.s", &[1, 2], 3),
    ("fsub.s", &[0x3f80_0000, 0x3f80_0000], 0),
    ("fmul.s", &[0xbfc0_0000, 0x3fc0_0000], 0xc010_0000),
    ("fdiv.d", &[0xbff8_0000_0000_0000, 0x3ff8_0000_0000_0000], 0xbff0_0000_0000_0000),
    ("fdiv.s", &[0x3f80_0000, 0], 0x7f80_0000),
    ("fsqrt.s", &[0x4080_0000], 0x4000_0000),
    ("fsqrt.s", &[0x4110_0000], 0x4040_0000),
    ("fsqrt.h", &[0x3400], 0x3800),
    ("fsqrt.s", &[0xbf80_0000], 0x7fc0_0000),
    ("fabs.d", &[0xc000_0000_0000_0000], 0x4000_0000_0000_0000),
    ("fneg.h", &[0x3c00], 0xbc00),
    ("fneg.s", &[0x7fc0_0000], 0xffc0_0000),
    ("fmadd.s", &[0x4000_0000, 0x4040_0000, 0x3f80_0000], 0x40e0_0000),
    ("fmsub.s", &[0x4000_0000, 0x4040_0000, 0x3f80_0000], 0x40a0_0000),
    ("fnmsub.s", &[0x4000_0000, 0x4040_0000, 0x3f80_0000], 0xc0a0_0000),
    ("fnmadd.s", &[0x4000_0000, 0x4040_0000, 0x3f80_0000], 0xc0e0_0000),
    ("fmacm", &[0xbf800000bf800000, 0xbfc000003fc00000, 0x3fc00000bfc00000], 0xc0500000c0500000),
    ("fmscm", &[0xbf800000c0400000, 0x3f8000003f800000, 0x4000000040000000], 0x4040000040a00000),
    ("fmscm", &[0xbf800000c0000000, 0x4000000040000000, 0x4000000040000000], 0x40a0000040c00000),
];

const COMPARE: &[(&str, &[u64], u64)] = &[
    ("fne.s", &[0xbfc0_0000, 0x3fc0_0000], 1),
    ("fne.s", &[0x3fc0_0000, 0x3fc0_0000], 0),
    //subnormals are never flushed by comparisons
    ("fne.s", &[0, 1], 1),
    ("fne.s", &[0, 0], 0),
    ("fne.s", &[0x7fc0_0000, 0], 1),
    ("feq.s", &[0x8000_0000, 0], 1),
    ("feq.s", &[0x7fc0_0000, 0x7fc0_0000], 0),
    ("funord.s", &[0x3f80_0000, 0], 0),
    ("funord.s", &[0x7fc0_0000, 0], 1),
    ("flt.d", &[0xbff8_0000_0000_0000, 0], 1),
    ("fge.d", &[0xbff8_0000_0000_0000, 0], 0),
    ("flt.s", &[0x7fc0_0000, 0], 0),
];

const CONVERT: &[(&str, &[u64], u64)] = &[
    ("fstoh", &[0xbf80_0000], 0xbc00),
    ("fstoh", &[0x3f00_0000], 0x3800),
    ("fstoh", &[0x7f80_0000], 0x7c00),
    //signaling NaN quiets to the canonical payload
    ("fstoh", &[0x7f80_0001], 0x7e00),
    ("fcvt.d.h", &[0x3c00], 0x3ff0_0000_0000_0000),
    ("fcvt.s.d", &[0x7ff4_0000_0000_0000], 0x7fc0_0000),
    ("fclass.s", &[0x3f80_0000], 1 << 6),
    ("fclass.s", &[0xff80_0000], 1 << 0),
    ("fclass.s", &[0x8000_0001], 1 << 2),
    ("fclass.h", &[0x7d00], 1 << 8),
    ("fclass.d", &[0x7ff8_0000_0000_0000], 1 << 9),
    ("fround.s", &[0x4020_0000], 0x4000_0000),
    ("fround.s", &[0x3fc0_0000], 0x4000_0000),
    ("fround.s", &[0xbf00_0000], 0x8000_0000),
    ("fround.s", &[0x7f80_0001], 0x7fc0_0000),
];

fn rows(c: &mut Checker, rows: &[(&str, &[u64], u64)]) {
    for &(insn, args, r) in rows {
        c.scalar(insn, args, r);
    }
}

#[distributed_slice(SUITES)]
static FP_ROUNDING: Suite = Suite {
    name: "fpu.rounding",
    run: |c| rows(c, ROUNDING),
};

#[distributed_slice(SUITES)]
static FP_ARITH: Suite = Suite {
    name: "fpu.arith",
    run: |c| rows(c, ARITH),
};

#[distributed_slice(SUITES)]
static FP_COMPARE: Suite = Suite {
    name: "fpu.compare",
    run: |c| rows(c, COMPARE),
};

#[distributed_slice(SUITES)]
static FP_CONVERT: Suite = Suite {
    name: "fpu.convert",
    run: |c| rows(c, CONVERT),
};
