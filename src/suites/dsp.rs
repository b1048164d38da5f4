use super::*;
use crate::bits::sext;
use paste::paste;

const MUL_S32_RH: [(u64, u64, u64); 16] = [
    (0x7fffffff, 0x7fffffff, 0x3fffffff),
    (0x80000000, 0x80000000, 0x40000000),
    (0xffffffff, 0xffffffff, 0),
    (0, 0, 0),
    (0x7fffffff, 0x80000000, 0xc0000001),
    (0x80000000, 0x7fffffff, 0xc0000001),
    (0x7fffffff, 0xffffffff, 0),
    (0xffffffff, 0x7fffffff, 0),
    (0x7fffffff, 0, 0),
    (0, 0x7fffffff, 0),
    (0x80000000, 0xffffffff, 1),
    (0xffffffff, 0x80000000, 1),
    (0, 0x80000000, 0),
    (0x80000000, 0, 0),
    (0xffffffff, 0, 0),
    (0, 0xffffffff, 0),
];

const MULCSX_S16_F: [(u64, u64, u64); 12] = [
    (0x00010001, 0x00010000, 0x00000002),
    (0x00010001, 0x7FFF7FFF, 0x00000000),
    (0x00010010, 0x7FFF8000, 0x0010FFE0),
    (0x00010001, 0xFFFF0000, 0xFFFFFFFE),
    (0x00010002, 0x80007FFF, 0xFFFD0002),
    (0x00017FFF, 0xFFFF8000, 0x00000002),
    (0x0001FFFF, 0xFFFF0000, 0x00000002),
    (0x0001FFFF, 0x80007FFF, 0x00000002),
    (0x00018000, 0x80008000, 0x80010000),
    (0x00010000, 0x00000000, 0x00000000),
    (0x00010000, 0x7FFF7FFF, 0xFFFF0002),
    (0x00010000, 0x80008000, 0x00010000),
];

const MULLL_S16_F: [(u64, u64, u64); 6] = [
    (1, 1, 2),
    (1, 0x7FFF7FFF, 0xFFFE),
    (1, 0xFFFFFFFF, 0xFFFFFFFE),
    (0xFFFFFFFF, 0xFFFFFFFF, 2),
    (0x8000, 0x80008000, 0x80000000),
    (0x80000000, 0x8000, 0),
];

const PADDH_S16: [(u64, u64, u64); 14] = [
    (0x56785678, 0xc000b000, 0x0b3c033c),
    (0x12345678, 0x12345678, 0x1234d678),
    (0x8080c0c0, 0x9090a0a0, 0x088830b0),
    (0xf0007fff, 0x90000001, 0xc000c000),
    (0, 0, 0),
    (1, 0x10000, 0),
    (0x10001, 0x10001, 0x10001),
    (0xFFFF0001, 0x0001FFFF, 0),
    (0xFFFFFFFF, 0xFFFF0000, 0xffff0000),
    (0x0000FFFF, 0xFFFFFFFF, 0x0000ffff),
    (0x60003000, 0x30006000, 0xc800c800),
    (0x80018001, 0x80000001, 0x0000c001),
    (0x7FFF8000, 0x7FFF8000, 0xffff0000),
    (0x7FFF8000, 0x80007FFF, 0),
];

const DSPV2: &[(&str, &[u64], u64)] = &[
    ("dup.16", &[0x1234_5678, 0], 0x5678_5678),
    ("dup.16", &[0x1234_5678, 1], 0x1234_1234),
    ("dup.16", &[0x8000_ffff, 1], 0x8000_8000),
    ("mula.s32.hs", &[0x4000_0000, 0x4000_0000, 1], 0x1000_0001),
    ("mula.s32.hs", &[0xffff_ffff, 1, 5], 4),
    ("mula.s32.hs", &[0x7fff_ffff, 0x7fff_ffff, 0x7fff_0000], 0x7fff_ffff),
    ("mula.s32.hs", &[0x8000_0000, 0x7fff_ffff, 0x8000_0000], 0x8000_0000),
    ("mulscax.s16.e", &[0x0003_0002, 0x0005_0004, 100], 78),
    ("mulscax.s16.e", &[0x8000_8000, 0x8000_8000, 0], 0xffff_ffff_8000_0000),
    ("mulscax.s16.e", &[0x0000_0001, 0x0001_0000, 0x8000_0000_0000_0000], 0x7fff_ffff_ffff_ffff),
    ("pcmplt.s8", &[0x807f_0001, 0x7f80_0100], 0xff00_ff00),
    ("pcmplt.s8", &[0x1234_5678, 0x1234_5678], 0),
    ("pcmplt.s8", &[0xffff_ffff, 0], 0xffff_ffff),
    ("prmul.s16.h", &[0x4000_4000, 0x4000_c000], 0x2000_e000),
    ("prmul.s16.h", &[0x8000_8000, 0x8000_7fff], 0x7fff_8001),
    ("prmul.s16.h", &[0x0000_ffff, 0x0000_0001], 0x0000_ffff),
];

const CSI: &[(&str, &[u64], u64)] = &[
    ("qadd8", &[0x7f80_0102, 0x01ff_0102], 0x7f80_0204),
    ("uqsub8", &[0x0010_ff00, 0x0101_0001], 0x000f_ff00),
    ("uqadd16", &[0xffff_0001, 0x0001_0001], 0xffff_0002),
    ("qasx", &[0x7fff0001, 0x0001ffff], 0x7ffe0000),
    ("qsax", &[0x7fff0001, 0x0001ffff], 0x7fff0002),
    ("sadd8", &[0x7f7f_ffff, 0x0101_0101], 0x8080_0000),
    ("shadd8", &[0x80ff7f01, 0x80017f01], 0x80007f01),
    ("uhadd8", &[0x80ff7f01, 0x80017f01], 0x80807f01),
    ("shadd16", &[0xffff, 0], 0xffff),
    ("shsub16", &[0x00000000, 0x00010001], 0xffffffff),
    ("ssat16", &[0x8000_7fff, 8], 0xff80_007f),
    ("usat16", &[0x8000_0123, 8], 0x0000_00ff),
    ("smuad", &[0x80008000, 0x80008000], 0x80000000),
    ("smusdx", &[0x00020003, 0x00050007], 1),
    ("smlald", &[0x80008000, 0x80008000, 0], 0x0000_0000_8000_0000),
    ("smlsld", &[0x00010001, 0x00020001, 0], 0xffff_ffff_ffff_ffff),
    ("smmla", &[0x40000000, 0x40000000, 1], 0x10000001),
    ("qadd", &[0x7fffffff, 1], 0x7fffffff),
    ("qsub", &[0x80000000, 1], 0x80000000),
    ("pkhbt", &[0x1111_2222, 0x0000_3333, 16], 0x3333_2222),
    ("pkhtb", &[0x1111_2222, 0x8000_0000, 16], 0x1111_8000),
    ("sxtb16", &[0x0080_007f], 0xff80_007f),
    ("uxtab16", &[0x0001_0001, 0x00ff_00ff], 0x0100_0100),
    ("usad8", &[0x01ff0010, 0x02000020], 272),
    ("usada8", &[0x01ff0010, 0x02000020, 8], 280),
    ("ror", &[0x0000_0001, 1], 0x8000_0000),
    ("rbit", &[0x0000_0001], 0x8000_0000),
    ("clz", &[0x0000_ffff], 16),
    ("ssat", &[0x12345, 16], 0x7fff),
    ("ssat", &[0xffff0000, 16], 0xffff8000),
    ("usat", &[0xffffff00, 8], 0xff),
    ("usat", &[0x80, 8], 0x80),
];

const RVP: &[(&str, &[u64], u64)] = &[
    ("sclip32", &[0x7fffffff, 7], 0x7f),
    ("sclip32", &[0x80000000, 7], 0xffffff80),
    ("sclip32", &[0x80000000, 31], 0x80000000),
    ("srai16.u", &[0x8001_7fff, 1], 0xc001_4000),
];

const GENERIC: &[(&str, &[u64], u64)] = &[
    ("add.sat.s32", &[0x7fffffff, 0x7fffffff], 0x7fffffff),
    ("add.sat.s32", &[1, 1], 2),
    ("add.sat.s32", &[0x80000000, 0x80000000], 0x80000000),
    ("mulh.u64", &[0xffff_ffff_ffff_ffff, 0xffff_ffff_ffff_ffff], 0xffff_ffff_ffff_fffe),
    ("mulh.s64", &[0xffff_ffff_ffff_ffff, 0xffff_ffff_ffff_ffff], 0),
    ("shift.sat.s8", &[0xa5, 1], 0x80),
    ("shift.sat.s8", &[0x74, 0xffff_ffff_ffff_ffff], 0x3a),
    ("shift.sat.u8", &[0x29, 2], 0xa4),
    ("shift.sat.u8", &[0xc2, 1], 0xff),
    ("shift.sat.u64", &[0x1c626bcd2f15a031, 0xffff_ffff_ffff_ffe4], 0x1c626bcd3),
    ("shift.sat.s64", &[0xc6a630b347e7377b, 0xffff_ffff_ffff_fffc], 0xfc6a630b347e7378),
    ("shift.sat.s64", &[0x3970b5993ab1f212, 1], 0x72E16B327563E424),
    ("cls.8", &[0xa5], 0),
    ("cls.8", &[0x34], 1),
    ("cls.8", &[0xfd], 5),
    ("cls.64", &[0], 63),
    ("popcount.64", &[0x0123456789abcdef], 32),
    ("popcount.8", &[0xffff], 8),
    ("macw.s8", &[0xff, 0xff, 0x10], 0x11),
    ("macw.s16", &[0x7fff, 0x7fff, 0x7fffffff], 0xbfff0000),
    ("macw.sat.s16", &[0x7fff, 0x7fff, 0x7fffffff], 0x7fffffff),
    ("clip", &[0x8000_0000, 32], 0x7fffffff),
    ("clip", &[0xffff_ff00_0000_0000, 32], 0xffff_ffff_8000_0000),
    ("clip", &[3, 1], 0),
    ("clipu", &[0xffff_ffff_ffff_ffff, 8], 0),
    ("clipu", &[256, 8], 255),
];

const IIR_SAMPLES: [u64; 12] = [
    0x00000000, 0x4d3ea0bb, 0x53a7a333, 0x3cae6280, 0x40000000, 0x39934cbd,
    0x06dad667, 0xe3bd2492, 0x00000000, 0x1c42db6e, 0xf9252999, 0xc66cb343,
];

const IIR_UNIT: [u64; 12] = [0, 0, 0, 0x4d3ea0c, 0x53a7a33, 0x3cae628, 0x4000000, 0x39934cc, 0x6dad66, 0xfe3bd249, 0, 0x1c42db7];

const IIR_FEEDBACK: [u64; 12] = [0, 0, 0, 0x4d3ea0bb, 0x7a46f391, 0x79d1dc49, 0x7ce8ee25, 0x7807c3d0, 0x42deb84f, 0x52c80ba, 0x296405d, 0x1d8dfb9d];

fn rows(c: &mut Checker, rows: &[(&str, &[u64], u64)]) {
    for &(insn, args, r) in rows {
        c.scalar(insn, args, r);
    }
}

fn fxp32(v: &[u64]) -> Value {
    Value::Lanes(v.iter().map(|x| sext(*x, 32)).collect())
}

#[distributed_slice(SUITES)]
static CSKY_DSP: Suite = Suite {
    name: "csky.dsp",
    run: |c| {
        c.table("mul.s32.rh", &MUL_S32_RH);
        c.table("mulcsx.s16.f", &MULCSX_S16_F);
        c.table("mulll.s16.f", &MULLL_S16_F);
        c.table("paddh.s16", &PADDH_S16);
        c.scalar("pmulawh.s16.f", &[0, 0x00020001, 0x00030000], 0x0000000c_00000006);
        c.scalar("pmulawh.s16.f", &[0xffffffff_ffffffff, 0x00010001, 0x00010000], 0x00000001_00000001);
        rows(c, DSPV2);
    },
};

#[distributed_slice(SUITES)]
static CSI_SIMD: Suite = Suite {
    name: "csi.simd",
    run: |c| rows(c, CSI),
};

#[distributed_slice(SUITES)]
static RVP_SIMD: Suite = Suite {
    name: "rvp",
    run: |c| rows(c, RVP),
};

#[distributed_slice(SUITES)]
static FIXED_GENERIC: Suite = Suite {
    name: "fixed",
    run: |c| rows(c, GENERIC),
};

#[distributed_slice(SUITES)]
static MCA_IIR: Suite = Suite {
    name: "mca.iir",
    run: |c| {
        let mut input = vec![0u64; 2];
        input.extend_from_slice(&IIR_SAMPLES);
        let unit = Value::Lanes(vec![0x1000000000000, 0, 0, 0, 0]);
        c.check("iir2l.fxp32", &[unit, Value::Scalar(13), Value::Lanes(input.clone()), Value::Scalar(0), Value::Scalar(0)],
                &fxp32(&IIR_UNIT));
        let feedback = Value::Lanes(vec![1 << 24, 0, 0, 1 << 23, 0]);
        c.check("iir2.fxp32", &[feedback, Value::Lanes(input), Value::Scalar(0), Value::Scalar(0)],
                &fxp32(&IIR_FEEDBACK));
    },
};

//saturation boundaries of every width
macro_rules! sat_suite {
    ($w:literal, $max:literal, $min:literal, $umax:literal) => {
        paste! {
            #[distributed_slice(SUITES)]
            static [<SAT_E $w>]: Suite = Suite {
                name: concat!("sat.e", $w),
                run: |c| {
                    c.scalar(concat!("add.sat.s", $w), &[$max, 1], $max);
                    c.scalar(concat!("add.sat.s", $w), &[$min, $umax], $min);
                    c.scalar(concat!("sub.sat.s", $w), &[$min, 1], $min);
                    c.scalar(concat!("sub.sat.s", $w), &[$max, $umax], $max);
                    c.scalar(concat!("add.sat.s", $w), &[1, 1], 2);
                    c.scalar(concat!("add.sat.u", $w), &[$umax, 1], $umax);
                    c.scalar(concat!("sub.sat.u", $w), &[0, 1], 0);
                    c.scalar(concat!("add.sat.u", $w), &[$max, 1], $min);
                },
            };
        }
    };
}

sat_suite!(8, 0x7f, 0x80, 0xff);
sat_suite!(16, 0x7fff, 0x8000, 0xffff);
sat_suite!(32, 0x7fff_ffff, 0x8000_0000, 0xffff_ffff);
sat_suite!(64, 0x7fff_ffff_ffff_ffff, 0x8000_0000_0000_0000, 0xffff_ffff_ffff_ffff);
