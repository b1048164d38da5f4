use super::*;
use super::memory::*;
use crate::fixed::FixedRound;
use crate::float::{FpEnv, Flags};

fn reg(sew: Width, lanes: &[u64]) -> VReg {
    VReg::from_slice(sew, lanes)
}

fn twice(lanes: &[u64]) -> Vec<u64> {
    [lanes, lanes].concat()
}

const S8: [u64; 16] = [0xa5, 0x34, 0x8c, 0x74, 0xcd, 0x75, 0x92, 0x7a, 0x60, 0x19, 0x3c, 0x91, 0xfd, 0xab, 0x23, 0x21];
const S16: [u64; 8] = [0xd6d6, 0x51f2, 0x10ef, 0x0ea1, 0xa349, 0x4d3f, 0x475d, 0xa164];
const S32: [u64; 4] = [0xcfe06686, 0x8262f661, 0x15fc5221, 0xd6b9745a];
const S64: [u64; 2] = [0x3970b5993ab1f212, 0xc6a630b347e7377b];
const U8: [u64; 16] = [0xc2, 0x29, 0x99, 0x3e, 0xe3, 0x82, 0x47, 0x89, 0xcd, 0xfb, 0xad, 0x9e, 0xe6, 0x27, 0x14, 0xc9];
const U16: [u64; 8] = [0xfe56, 0x4b63, 0xf166, 0x08bc, 0x6f16, 0x0ddb, 0xdeb9, 0xafbe];
const U32: [u64; 4] = [0xc5cf5eb9, 0x75bc7c30, 0xf0bec11d, 0x683e0475];
const U64: [u64; 2] = [0x7ff0e92e56fe196a, 0x1c626bcd2715a031];

const S8_1: [u64; 16] = [0x21, 0xb6, 0x8d, 0x3a, 0xe2, 0x09, 0x90, 0x15, 0x2c, 0x13, 0xac, 0x86, 0x28, 0xce, 0x4f, 0xbb];
const S16_1: [u64; 8] = [0x4fb8, 0x39b3, 0x6744, 0xfa98, 0xce81, 0x997d, 0x301c, 0xcfb5];
const S32_1: [u64; 4] = [0x7794d541, 0xf1bfac15, 0x67e3b37f, 0x12df3e7c];
const S64_1: [u64; 2] = [0x07d215928aa0d7b6, 0x07186161e5f9e80f];

#[test]
fn vlmax_test() {
    assert_eq!(VConfig::new(Width::W8, Lmul::M1).vlmax(), 16);
    assert_eq!(VConfig::new(Width::W8, Lmul::M2).vlmax(), 32);
    assert_eq!(VConfig::new(Width::W64, Lmul::M8).vlmax(), 16);
    assert_eq!(VConfig::new(Width::W16, Lmul::Mf2).vlmax(), 4);
    assert_eq!(VConfig::new(Width::W32, Lmul::M1).with_vl(100).vl, 4);
    assert_eq!(Lmul::from_code(3).unwrap(), Lmul::M8);
    assert_eq!(Lmul::from_code(7).unwrap(), Lmul::Mf2);
    assert!(Lmul::from_code(4).is_err());
}

#[test]
fn reg_bytes_test() {
    let r = reg(Width::W16, &[0x1234, 0xabcd]);
    assert_eq!(r.to_bytes(), vec![0x34, 0x12, 0xcd, 0xab]);
    assert_eq!(r.reinterpret(Width::W32), reg(Width::W32, &[0xabcd1234]));
    assert_eq!(VReg::pad(Width::W32, 2, 0x11), reg(Width::W32, &[0x11111111, 0x11111111]));
    let group = VReg::group(&[reg(Width::W8, &S8), reg(Width::W8, &U8)]);
    assert_eq!(group.len(), 32);
    assert_eq!(group.split()[1], reg(Width::W8, &U8));
}

#[test]
fn mask_tail_test() {
    let cfg = VConfig::new(Width::W8, Lmul::M1).with_vl(6);
    let old = VReg::pad(Width::W8, 16, 0x11);
    let even = Mask::even(16);
    let res = apply(&cfg, Some(&even), &old, |i| i as u64);
    assert_eq!(res.lanes, vec![0, 0x11, 2, 0x11, 4, 0x11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let res = apply(&cfg.with_tail(TailPolicy::Undisturbed), Some(&even), &old, |i| i as u64);
    assert_eq!(res.lanes, vec![0, 0x11, 2, 0x11, 4, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11]);
    //mask bits past vl have no effect
    let res_all = apply(&cfg, Some(&Mask::from_bits(0x3f, 16)), &old, |i| i as u64);
    let res_none = apply(&cfg, None, &old, |i| i as u64);
    assert_eq!(res_all, res_none);
}

#[test]
fn vpkg_t_2_test() {
    let vd = reg(Width::W32, &[0x2ef3c1ca, 0xd167753f, 0xd345a93c, 0xcb8a4543, 0xb62db774, 0x0709f7b4, 0x6c9c7bcc, 0xa8c6d274]);
    let vs = reg(Width::W32, &[S32, S32_1].concat());
    assert_eq!(vpkg_t_2(&vd, &vs).unwrap().lanes,
               vec![0x2ef3c1ca, 0xd167753f, 0xd345a93c, 0xcfe06686, 0x7794d541, 0x0709f7b4, 0x6c9c7bcc, 0xa8c6d274]);
    let res = vpkg_t_2(&reg(Width::W8, &[0u64; 2]), &reg(Width::W8, &[1, 2])).unwrap();
    assert_eq!(res.lanes, vec![1, 2]);
    assert!(vpkg_t_2(&reg(Width::W8, &[0u64; 3]), &reg(Width::W8, &[0u64; 3])).is_err());
    assert!(vpkg_t_2(&reg(Width::W8, &[0u64; 4]), &reg(Width::W16, &[0u64; 4])).is_err());
}

#[test]
fn vadd_t_s_test() {
    let cases: &[(Width, Sign, &[u64], &[u64], &[u64])] = &[
        (Width::W64, Sign::Signed, &S64, &S64_1, &[0x4142cb2bc552c9c8, 0xcdbe92152de11f8a]),
        (Width::W32, Sign::Signed, &S32, &S32_1, &[0x47753bc7, 0x80000000, 0x7de005a0, 0xe998b2d6]),
        (Width::W16, Sign::Signed, &S16, &S16_1, &[0x268e, 0x7fff, 0x7833, 0x0939, 0x8000, 0xe6bc, 0x7779, 0x8000]),
        (Width::W8, Sign::Signed, &S8, &S8_1,
         &[0xc6, 0xea, 0x80, 0x7f, 0xaf, 0x7e, 0x80, 0x7f, 0x7f, 0x2c, 0xe8, 0x80, 0x25, 0x80, 0x72, 0xdc]),
        (Width::W64, Sign::Unsigned, &U64, &[0xbc73041be547e732, 0x0afd8a490d762d5e],
         &[0xffffffffffffffff, 0x275ff616348bcd8f]),
        (Width::W32, Sign::Unsigned, &U32, &[0xe391e1de, 0xb2c0dd9f, 0x888fed5e, 0x1c3b70fe],
         &[0xffffffff, 0xffffffff, 0xffffffff, 0x84797573]),
        (Width::W16, Sign::Unsigned, &U16, &[0x6371, 0x3b45, 0x49ed, 0x7e26, 0x9ea1, 0xd612, 0x5c92, 0xfc48],
         &[0xffff, 0x86a8, 0xffff, 0x86e2, 0xffff, 0xe3ed, 0xffff, 0xffff]),
        (Width::W8, Sign::Unsigned, &U8,
         &[0x1c, 0x42, 0xd3, 0x53, 0x94, 0x57, 0x7b, 0xa3, 0xae, 0x96, 0x41, 0x28, 0x3a, 0x59, 0x9b, 0x70],
         &[0xde, 0x6b, 0xff, 0x91, 0xff, 0xd9, 0xc2, 0xff, 0xff, 0xff, 0xee, 0xc6, 0xff, 0x80, 0xaf, 0xff]),
    ];
    for &(w, sign, a, b, expected) in cases {
        assert_eq!(vadd_t_s(&reg(w, a), &reg(w, b), sign).unwrap().lanes, expected.to_vec());
    }
    assert!(vadd_t_s(&reg(Width::W8, &S8), &reg(Width::W16, &S16), Sign::Signed).is_err());
}

#[test]
fn vsadd_vx_test() {
    let s32: [u64; 4] = [0xcfe06686, 0x80000001, 0x15fc5221, 0x7fff745a];
    let cases: &[(Width, &[u64], u64, &[u64])] = &[
        (Width::W8, &S8, 0x7d,
         &[0x22, 0x7f, 0x09, 0x7f, 0x4a, 0x7f, 0x0f, 0x7f, 0x7f, 0x7f, 0x7f, 0x0e, 0x7a, 0x28, 0x7f, 0x7f]),
        (Width::W8, &S8, 0x3f,
         &[0xe4, 0x73, 0xcb, 0x7f, 0x0c, 0x7f, 0xd1, 0x7f, 0x7f, 0x58, 0x7b, 0xd0, 0x3c, 0xea, 0x62, 0x60]),
        (Width::W16, &S16, 0xaf83, &[0x8659, 0x0175, 0xc072, 0xbe24, 0x8000, 0xfcc2, 0xf6e0, 0x8000]),
        (Width::W16, &S16, 0x5f3f, &[0x3615, 0x7fff, 0x702e, 0x6de0, 0x0288, 0x7fff, 0x7fff, 0x00a3]),
        (Width::W32, &s32, 0x80000083, &[0x80000000, 0x80000000, 0x95fc52a4, 0xffff74dd]),
        (Width::W32, &s32, 0x7fff3278, &[0x4fdf98fe, 0xffff3279, 0x7fffffff, 0x7fffffff]),
        (Width::W64, &S64, 0x8000011d617caf83, &[0xb970b6b69c2ea195, 0x8000000000000000]),
        (Width::W64, &S64, 0x7ffff11d617caf3f, &[0x7fffffffffffffff, 0x46a621d0a963e6ba]),
    ];
    for &(w, src, rs1, expected) in cases {
        let cfg = VConfig::new(w, Lmul::M2);
        let n = cfg.vlmax();
        let vs2 = reg(w, &twice(src));
        let pad = VReg::pad(w, n, 0x11);
        let full = twice(expected);
        assert_eq!(vsadd_vx(&cfg, None, &pad, &vs2, rs1, Sign::Signed).unwrap().lanes, full);

        let mut tail = full.clone();
        tail[n - 1] = 0;
        let short = cfg.with_vl(n - 1);
        assert_eq!(vsadd_vx(&short, None, &pad, &vs2, rs1, Sign::Signed).unwrap().lanes, tail);

        let even: Vec<u64> = full.iter().enumerate().map(|(i, v)| if i & 1 == 0 { *v } else { pad.get(i) }).collect();
        assert_eq!(vsadd_vx(&cfg, Some(&Mask::even(n)), &pad, &vs2, rs1, Sign::Signed).unwrap().lanes, even);
        let odd: Vec<u64> = full.iter().enumerate().map(|(i, v)| if i & 1 == 1 { *v } else { pad.get(i) }).collect();
        assert_eq!(vsadd_vx(&cfg, Some(&Mask::odd(n)), &pad, &vs2, rs1, Sign::Signed).unwrap().lanes, odd);
    }
}

#[test]
fn vshift_vv_test() {
    let cases: &[(Width, &[u64], &[u64], &[u64], &[u64])] = &[
        (Width::W8, &S8, &S8_1,
         &[0xd2, 0x00, 0xfc, 0x1d, 0xf3, 0x3a, 0x92, 0x03, 0x06, 0x03, 0x03, 0xfe, 0xfd, 0xfe, 0x00, 0x04],
         &[0x52, 0x00, 0x04, 0x1d, 0x33, 0x3a, 0x92, 0x03, 0x06, 0x03, 0x03, 0x02, 0xfd, 0x02, 0x00, 0x04]),
        (Width::W16, &S16, &S16_1,
         &[0xffd6, 0x0a3e, 0x010e, 0x000e, 0xd1a4, 0x0002, 0x0004, 0xfd0b],
         &[0x00d6, 0x0a3e, 0x010e, 0x000e, 0x51a4, 0x0002, 0x0004, 0x050b]),
        (Width::W32, &S32, &S32_1,
         &[0xe7f03343, 0xfffffc13, 0, 0xfffffffd],
         &[0x67f03343, 0x00000413, 0, 0x0000000d]),
        (Width::W64, &S64, &S64_1,
         &[0xe5, 0xffff8d4c61668fce],
         &[0xe5, 0x00018d4c61668fce]),
    ];
    for &(w, vs2, vs1, sra, srl) in cases {
        let cfg = VConfig::new(w, Lmul::M1);
        let old = VReg::zeros(w, cfg.vlmax());
        assert_eq!(vsra_vv(&cfg, None, &old, &reg(w, vs2), &reg(w, vs1)).unwrap().lanes, sra.to_vec());
        assert_eq!(vsrl_vv(&cfg, None, &old, &reg(w, vs2), &reg(w, vs1)).unwrap().lanes, srl.to_vec());
    }
}

#[test]
fn vnsrl_vi_test() {
    let cases: &[(Width, &[u64], &[u64], &[u64])] = &[
        (Width::W8, &S16, &[0xd6, 0xf2, 0xef, 0xa1, 0x49, 0x3f, 0x5d, 0x64], &[0xb6, 0x8f, 0x87, 0x75, 0x1a, 0x69, 0x3a, 0x0b]),
        (Width::W16, &S32, &[0xcfe0, 0x8262, 0x15fc, 0xd6b9], &[0x0334, 0x17b3, 0xe291, 0xcba2]),
        (Width::W32, &S64, &[0xb5993ab1, 0x30b347e7], &[0xc9d58f90, 0x9a3f39bb]),
    ];
    for &(w, src, imm16, imm5) in cases {
        let cfg = VConfig::new(w, Lmul::Mf2);
        let vs2 = reg(w.double().unwrap(), src);
        let old = VReg::zeros(w, cfg.vlmax());
        assert_eq!(vnsrl_vi(&cfg, None, &old, &vs2, 16).unwrap().lanes, imm16.to_vec());
        assert_eq!(vnsrl_vi(&cfg, None, &old, &vs2, 5).unwrap().lanes, imm5.to_vec());
    }
    let cfg = VConfig::new(Width::W8, Lmul::Mf2);
    assert!(vnsrl_vi(&cfg, None, &VReg::zeros(Width::W8, 8), &reg(Width::W8, &S8), 1).is_err());
}

#[test]
fn vcompress_test() {
    let cfg = VConfig::new(Width::W8, Lmul::M2);
    let vs2 = reg(Width::W8, &twice(&S8));
    let sel = Mask::from_bits(0x5ccda6b9, 32);
    let packed: [u64; 17] = [0xa5, 0x74, 0xcd, 0x75, 0x7a, 0x19, 0x3c, 0xab, 0x21, 0xa5, 0x8c, 0x74, 0x92, 0x7a, 0x3c, 0x91, 0xfd];
    let mut expected: Vec<u64> = vec![0; 32];
    expected[..17].copy_from_slice(&packed);
    assert_eq!(vcompress_vm(&cfg.with_vl(30), &vs2, &sel).unwrap().lanes, expected);
    expected[17] = 0x23;
    assert_eq!(vcompress_vm(&cfg.with_vl(32), &vs2, &sel).unwrap().lanes, expected);

    let cfg = VConfig::new(Width::W16, Lmul::M2);
    let vs2 = reg(Width::W16, &twice(&S16));
    let sel = Mask::from_bits(0x6db9, 16);
    let mut expected: Vec<u64> = vec![0xd6d6, 0x0ea1, 0xa349, 0x4d3f, 0xa164, 0xd6d6, 0x10ef, 0x0ea1, 0x4d3f, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(vcompress_vm(&cfg.with_vl(14), &vs2, &sel).unwrap().lanes, expected);
    expected[9] = 0x475d;
    assert_eq!(vcompress_vm(&cfg.with_vl(16), &vs2, &sel).unwrap().lanes, expected);

    let cfg = VConfig::new(Width::W32, Lmul::M2);
    let vs2 = reg(Width::W32, &twice(&S32));
    let sel = Mask::from_bits(0x7e, 8);
    let mut expected: Vec<u64> = vec![0x8262f661, 0x15fc5221, 0xd6b9745a, 0xcfe06686, 0x8262f661, 0, 0, 0];
    assert_eq!(vcompress_vm(&cfg.with_vl(6), &vs2, &sel).unwrap().lanes, expected);
    expected[5] = 0x15fc5221;
    assert_eq!(vcompress_vm(&cfg.with_vl(8), &vs2, &sel).unwrap().lanes, expected);

    let cfg = VConfig::new(Width::W64, Lmul::M2);
    let vs2 = reg(Width::W64, &twice(&S64));
    let sel = Mask::from_bits(0b0110, 4);
    assert_eq!(vcompress_vm(&cfg.with_vl(2), &vs2, &sel).unwrap().lanes, vec![0xc6a630b347e7377b, 0, 0, 0]);
    assert_eq!(vcompress_vm(&cfg.with_vl(4), &vs2, &sel).unwrap().lanes,
               vec![0xc6a630b347e7377b, 0x3970b5993ab1f212, 0, 0]);
}

#[test]
fn vcls_vcnt1_test() {
    assert_eq!(vcls(&reg(Width::W8, &S8)).lanes, vec![0, 1, 0, 0, 1, 0, 0, 0, 0, 2, 1, 0, 5, 0, 1, 1]);
    assert_eq!(vcls(&reg(Width::W16, &S16)).lanes, vec![1, 0, 2, 3, 0, 0, 0, 0]);
    assert_eq!(vcls(&reg(Width::W32, &S32)).lanes, vec![1, 0, 2, 1]);
    assert_eq!(vcnt1(&reg(Width::W8, &S8)).lanes, vec![4, 3, 3, 4, 5, 5, 3, 5, 2, 3, 4, 3, 7, 5, 3, 2]);
    assert_eq!(vcnt1(&reg(Width::W16, &S16)).lanes, vec![10, 8, 8, 6, 7, 10, 9, 6]);
    assert_eq!(vcnt1(&reg(Width::W32, &S32)).lanes, vec![16, 14, 14, 18]);
    assert_eq!(vcnt1(&reg(Width::W64, &[0x0123456789abcdef, 0xffffffff00000000])).lanes, vec![32, 32]);
}

#[test]
fn vmulai_t_e_test() {
    let acc = reg(Width::W16, &[0xf0f6, 0x8940, 0xf0cf, 0x70e1, 0x43dc, 0xd684, 0xd39d, 0x86d3,
        0x64c6, 0x1d30, 0xdd97, 0xa399, 0x2754, 0xcccc, 0xd175, 0x62b3]);
    let res = vmulai_t_e(&acc, &reg(Width::W8, &S8), &reg(Width::W8, &S8_1), 0, Sign::Signed).unwrap();
    assert_eq!(res.sew, Width::W16);
    assert_eq!(res.lanes, vec![0xe53b, 0x8ff4, 0xe1db, 0x7fd5, 0x3d49, 0xe599, 0xc56f, 0x968d,
                               0x7126, 0x2069, 0xe553, 0x954a, 0x26f1, 0xc1d7, 0xd5f8, 0x66f4]);
    assert!(vmulai_t_e(&acc, &reg(Width::W8, &S8), &reg(Width::W8, &S8_1), 16, Sign::Signed).is_err());
}

#[test]
fn vrmuli_t_se_test() {
    let res = vrmuli_t_se(&reg(Width::W8, &S8), &reg(Width::W8, &S8_1), 0).unwrap().split();
    assert_eq!(res[0].lanes, vec![0xe88a, 0x0d68, 0xe218, 0x1de8, 0xf2da, 0x1e2a, 0xe3a4, 0x1f74]);
    assert_eq!(res[1].lanes, vec![0x18c0, 0x0672, 0x0f78, 0xe362, 0xff3a, 0xea16, 0x0906, 0x0882]);

    let res = vrmuli_t_se(&reg(Width::W16, &S16), &reg(Width::W16, &S16_1), 0).unwrap().split();
    assert_eq!(res[0].lanes, vec![0xe65ce7a0, 0x330927e0, 0x0a8bd990, 0x091c6570]);
    assert_eq!(res[1].lanes, vec![0xc641c6f0, 0x301bec90, 0x2c71fbb0, 0xc513b7c0]);

    let src = reg(Width::W32, &[0xcfe06686, 0x80000000, 0x15fc5221, 0xd6b9745a]);
    let res = vrmuli_t_se(&src, &reg(Width::W32, &[0x80000000, 0, 0, 0]), 0).unwrap().split();
    assert_eq!(res[0].lanes, vec![0x301f997a00000000, 0x7fffffffffffffff]);
    assert_eq!(res[1].lanes, vec![0xea03addf00000000, 0x29468ba600000000]);
}

#[test]
fn vsht_t_rs_test() {
    let cases: &[(Width, Sign, &[u64], &[u64], &[u64])] = &[
        (Width::W8, Sign::Signed, &S8,
         &[0x01, 0x01, 0x09, 0xff, 0xf8, 0x09, 0x90, 0x15, 0x2c, 0x13, 0xac, 0x86, 0x28, 0xce, 0x4f, 0xbb],
         &[0x80, 0x68, 0x80, 0x3a, 0x00, 0x7f, 0x00, 0x7f, 0x7f, 0x7f, 0x00, 0x00, 0x80, 0x00, 0x7f, 0x00]),
        (Width::W16, Sign::Signed, &S16,
         &[0x1, 0x1, 0x0, 0xfff8, 0xffdf, 0xff8d, 0x1c, 0xffb5],
         &[0xadac, 0x7fff, 0x10ef, 0x000f, 0, 0, 0x7fff, 0]),
        (Width::W32, Sign::Signed, &S32,
         &[0x1, 0x1, 0xffffffff, 0xffffffe0],
         &[0x9fc0cd0c, 0x80000000, 0x0afe2911, 0]),
        (Width::W64, Sign::Signed, &S64,
         &[0x1, 0xfffffffffffffffc],
         &[0x72e16b327563e424, 0xfc6a630b347e7378]),
        (Width::W8, Sign::Unsigned, &U8,
         &[0x01, 0x02, 0x00, 0xfc, 0xf8, 0x57, 0x7b, 0xa3, 0xae, 0x96, 0x41, 0x28, 0x3a, 0x59, 0x9b, 0x70],
         &[0xff, 0xa4, 0x99, 0x04, 0x01, 0xff, 0xff, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0x00, 0xff]),
        (Width::W16, Sign::Unsigned, &U16,
         &[0x1, 0x1, 0xfff8, 0x0, 0xfff0, 0xff92, 0x52, 0xffa8],
         &[0xffff, 0x96c6, 0x00f1, 0x08bc, 0, 0, 0xffff, 0]),
        (Width::W32, Sign::Unsigned, &U32,
         &[0x1, 0x1, 0xfffffff8, 0x0],
         &[0xffffffff, 0xeb78f860, 0x00f0bec1, 0x683e0475]),
        (Width::W64, Sign::Unsigned, &[0x7ff0e92e56fe196a, 0x1c626bcd2f15a031],
         &[0x2, 0xffffffffffffffe4],
         &[0xffffffffffffffff, 0x1c626bcd3]),
    ];
    for &(w, sign, a, b, expected) in cases {
        assert_eq!(vsht_t_rs(&reg(w, a), &reg(w, b), sign).unwrap().lanes, expected.to_vec());
    }
}

fn quad_src() -> VReg {
    reg(Width::W8, &[1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4])
}

#[test]
fn vmaqa_test() {
    let acc = VReg::pad(Width::W32, 4, 0x11);
    let res = vmaqa_vx(QuadMac::Maqasu, &acc, &quad_src(), 0xffffffff, 15, Some(&Mask::all(16))).unwrap();
    assert_eq!(res.lanes, vec![0x1111110d, 0x11111109, 0x11111105, 0x11111105]);
    for mask in [Mask::even(16), Mask::odd(16)].iter() {
        let res = vmaqa_vx(QuadMac::Maqasu, &acc, &quad_src(), 0xffffffff, 16, Some(mask)).unwrap();
        assert_eq!(res.lanes, vec![0x1111110f, 0x1111110d, 0x1111110b, 0x11111109]);
    }
    //the same scalar read unsigned is 255 per byte
    let res = vmaqa_vx(QuadMac::Maqau, &acc, &quad_src(), 0xffffffff, 16, None).unwrap();
    assert_eq!(res.lanes, vec![0x11111111 + 4 * 255, 0x11111111 + 8 * 255, 0x11111111 + 12 * 255, 0x11111111 + 16 * 255]);
    let res = vmaqa_vv(QuadMac::Maqa, &acc, &quad_src(), &reg(Width::W8, &[0xff; 16]), 16, None).unwrap();
    assert_eq!(res.lanes, vec![0x1111110d, 0x11111109, 0x11111105, 0x11111101]);
}

#[test]
fn vpmaqaus_test() {
    let acc = VReg::pad(Width::W32, 4, 0x11);
    let rs1 = 0x0808080808080808;
    let res = vpmaqaus_vx(&acc, &quad_src(), rs1, 15, Some(&Mask::all(16))).unwrap();
    assert_eq!(res.lanes, vec![0x11111131, 0x11111151, 0x11111171, 0x11111171]);
    for mask in [Mask::even(16), Mask::odd(16)].iter() {
        let res = vpmaqaus_vx(&acc, &quad_src(), rs1, 16, Some(mask)).unwrap();
        assert_eq!(res.lanes, vec![0x11111121, 0x11111131, 0x11111141, 0x11111151]);
    }
}

#[test]
fn vpnclip_wv_test() {
    let cfg = VConfig::new(Width::W8, Lmul::M1).with_tail(TailPolicy::Undisturbed);
    let pad = VReg::pad(Width::W8, 16, 0x11);
    let vs2 = reg(Width::W16, &[[0x2211u64; 8], [0x9988; 8]].concat());
    let vs1 = reg(Width::W8, &[[0x44u64; 4], [0x88; 4], [0x44; 4], [0x88; 4]].concat());
    let res = vpnclip_wv(&cfg.with_vl(15), Some(&Mask::all(16)), &pad, &vs2, &vs1, FixedRound::Rdn).unwrap();
    assert_eq!(res.lanes, vec![0x21, 0x21, 0x21, 0x21, 0x77, 0x77, 0x77, 0x77,
                               0x98, 0x98, 0x98, 0x98, 0x88, 0x88, 0x88, 0x11]);
    let res = vpnclip_wv(&cfg, Some(&Mask::even(16)), &pad, &vs2, &vs1, FixedRound::Rdn).unwrap();
    assert_eq!(res.lanes, vec![0x21, 0x11, 0x21, 0x11, 0x77, 0x11, 0x77, 0x11,
                               0x98, 0x11, 0x98, 0x11, 0x88, 0x11, 0x88, 0x11]);
    let res = vpnclip_wv(&cfg, Some(&Mask::odd(16)), &pad, &vs2, &vs1, FixedRound::Rdn).unwrap();
    assert_eq!(res.lanes, vec![0x11, 0x21, 0x11, 0x21, 0x11, 0x77, 0x11, 0x77,
                               0x11, 0x98, 0x11, 0x98, 0x11, 0x88, 0x11, 0x88]);
}

const FW_SRC: [u64; 8] = [0x4aee, 0x40aa, 0xc524, 0x46a9, 0x4a65, 0x404e, 0xc4bf, 0x4626];

fn fw_acc() -> VReg {
    let a: [u64; 4] = [0xbf6befd1, 0x3e24f025, 0x3fb6de33, 0x07ad69da];
    let b: [u64; 4] = [0xbf6befd1, 0x3e24f025, 0x77aedcbf, 0x483c7bbf];
    reg(Width::W32, &[a, a, b, b].concat())
}

const FWMACC: [u64; 16] = [0xc3515a88, 0xc20ba458, 0x429d7a49, 0xc2c85334, 0xc34141d4, 0xc200d528, 0x42919c65, 0xc2b8eef8,
    0xc3515a88, 0xc20ba458, 0x77aedcbf, 0x483c62b5, 0xc34141d4, 0xc200d528, 0x77aedcbf, 0x483c64a1];

#[test]
fn vfwmacc_vf_test() {
    let env = FpEnv::default();
    let cfg = VConfig::new(Width::W32, Lmul::M4);
    let vs2 = reg(Width::W16, &twice(&FW_SRC));
    let acc = fw_acc();

    let mut expected = FWMACC.to_vec();
    let (res, _) = vfwmacc_vf(&cfg, None, &acc, &vs2, 0xcb85, &env).unwrap();
    assert_eq!(res.lanes, expected);
    expected[15] = 0;
    let (res, _) = vfwmacc_vf(&cfg.with_vl(15), None, &acc, &vs2, 0xcb85, &env).unwrap();
    assert_eq!(res.lanes, expected);

    let even: Vec<u64> = FWMACC.iter().enumerate().map(|(i, v)| if i & 1 == 0 { *v } else { acc.get(i) }).collect();
    let (res, _) = vfwmacc_vf(&cfg, Some(&Mask::even(16)), &acc, &vs2, 0xcb85, &env).unwrap();
    assert_eq!(res.lanes, even);

    let negated: Vec<u64> = FWMACC.iter().map(|v| v ^ 0x8000_0000).collect();
    let (res, _) = vfwnmacc_vf(&cfg, None, &acc, &vs2, 0xcb85, &env).unwrap();
    assert_eq!(res.lanes, negated);

    assert!(vfwmacc_vf(&cfg, None, &acc, &reg(Width::W32, &[0; 16]), 0xcb85, &env).is_err());
}

#[test]
fn vfmsub_vf_test() {
    let env = FpEnv::default();
    let cfg = VConfig::new(Width::W32, Lmul::M2);
    let vd = reg(Width::W32, &[0xbf6befd1, 0x3e24f025, 0x3fb6de33, 0x07ad69da, 0xbf6befd1, 0x3e24f025, 0x77aedcbf, 0x483c7bbf]);
    let vs2 = reg(Width::W32, &[0x483471f7, 0x46f2e02b, 0xc785dc35, 0x47ad69d9, 0x483471f7, 0x46f2e02b, 0xff7fffff, 0x47ad69d9]);
    let (res, flags) = vfmsub_vf(&cfg, None, &vd, 0xc843ca22, &vs2, &env).unwrap();
    assert_eq!(res.lanes, vec![0xbb70f0f8, 0xc777953d, 0xc854c92e, 0xc7ad69d9, 0xbb70f0f8, 0xc777953d, 0xff800000, 0xd110272b]);
    assert!(flags.contains(Flags::OF));

    let cfg = VConfig::new(Width::W16, Lmul::M2);
    let vd = reg(Width::W16, &[0xbb5f, 0x3128, 0x3db7, 0x385e, 0xbb5f, 0x3128, 0x3db8, 0x385e,
        0x0aef, 0x3128, 0x0525, 0x385e, 0xbb5f, 0x3128, 0x3db8, 0x49a2]);
    let (res, _) = vfmsub_vf(&cfg, None, &vd, 0xcb85, &reg(Width::W16, &twice(&FW_SRC)), &env).unwrap();
    assert_eq!(res.lanes, vec![0x994a, 0xc4c1, 0xcc16, 0xcb6f, 0x3c45, 0xc493, 0xcc30, 0xcb2e,
                               0xcaee, 0xc4c1, 0x4524, 0xcb6f, 0x3c45, 0xc493, 0xcc30, 0xd97d]);
}

#[test]
fn vfrdiv_vf_test() {
    let env = FpEnv::default();
    let cfg = VConfig::new(Width::W32, Lmul::M2);
    let old = VReg::zeros(Width::W32, 8);
    let vs2 = reg(Width::W32, &[0x483471f7, 0x46f2e02b, 0xc785dc35, 0x47ad69d9, 0x483471f7, 0x46f2e02b, 0xff7fffff, 0x47ad69d9]);
    let (res, _) = vfrdiv_vf(&cfg, None, &old, &vs2, 0xc843ca22, &env).unwrap();
    assert_eq!(res.lanes, vec![0xbf8ae279, 0xc0ce5e99, 0x403b37de, 0xc010842a, 0xbf8ae279, 0xc0ce5e99, 0x0843ca23, 0xc010842a]);

    let cfg = VConfig::new(Width::W16, Lmul::M2);
    let old = VReg::zeros(Width::W16, 16);
    let (res, _) = vfrdiv_vf(&cfg, None, &old, &reg(Width::W16, &twice(&FW_SRC)), 0xcb85, &env).unwrap();
    assert_eq!(res.lanes, twice(&[0xbc57, 0xc673, 0x41da, 0xc084, 0xbcb4, 0xc6fd, 0x4256, 0xc0e4]));
    assert!(vfrdiv_vf(&VConfig::new(Width::W8, Lmul::M1), None, &old, &old, 0, &env).is_err());
}

#[test]
fn vftofi_rz_test() {
    let cfg = VConfig::new(Width::W16, Lmul::M1);
    let old = VReg::zeros(Width::W16, 8);
    let vs2 = reg(Width::W16, &[0x3c00, 0x3e00, 0xbe00, 0x4540, 0x3400, 0xc600, 0x7c00, 0x0001]);
    let (res, flags) = vftofi_rz(&cfg, None, &old, &vs2, &FpEnv::default()).unwrap();
    assert_eq!(res.lanes, vec![0x3c00, 0x3c00, 0xbc00, 0x4500, 0x0000, 0xc600, 0x7c00, 0x0000]);
    assert!(flags.contains(Flags::NX));
}

#[test]
fn strided_load_test() {
    let env_cfg = |w: Width| VConfig::new(w, Lmul::M2).with_vl(VConfig::new(w, Lmul::M2).vlmax() / 2);

    let cfg = env_cfg(Width::W8);
    let mem = VReg::from_slice(Width::W8, &twice(&S8)).to_bytes();
    let res = strided_load(&mem, 2, &cfg, None, &VReg::zeros(Width::W8, 32)).unwrap();
    let mut expected = twice(&[0xa5, 0x8c, 0xcd, 0x92, 0x60, 0x3c, 0xfd, 0x23]);
    expected.resize(32, 0);
    assert_eq!(res.lanes, expected);

    let sext16: Vec<u64> = S8.iter().map(|v| sext(*v, 8) & 0xffff).collect();
    let mem = reg(Width::W16, &sext16).to_bytes();
    let res = strided_load(&mem, 4, &env_cfg(Width::W16), None, &VReg::zeros(Width::W16, 16)).unwrap();
    let mut expected: Vec<u64> = vec![0xffa5, 0xff8c, 0xffcd, 0xff92, 0x0060, 0x003c, 0xfffd, 0x0023];
    expected.resize(16, 0);
    assert_eq!(res.lanes, expected);

    let sext32: Vec<u64> = S8.iter().map(|v| sext(*v, 8) & 0xffff_ffff).collect();
    let mem = reg(Width::W32, &sext32).to_bytes();
    let res = strided_load(&mem, 8, &env_cfg(Width::W32), None, &VReg::zeros(Width::W32, 8)).unwrap();
    assert_eq!(res.lanes, vec![0xffffffa5, 0xffffff8c, 0xffffffcd, 0xffffff92, 0, 0, 0, 0]);

    let sext64: Vec<u64> = S8.iter().map(|v| sext(*v, 8)).collect();
    let mem = reg(Width::W64, &sext64).to_bytes();
    let res = strided_load(&mem, 16, &env_cfg(Width::W64), None, &VReg::zeros(Width::W64, 4)).unwrap();
    assert_eq!(res.lanes, vec![0xffffffffffffffa5, 0xffffffffffffff8c, 0, 0]);

    //masked lanes are not accessed, so an out of range masked lane is fine
    let cfg = VConfig::new(Width::W32, Lmul::M1);
    let old = VReg::pad(Width::W32, 4, 0x11);
    let res = strided_load(&[0u8; 8], 8, &cfg.with_vl(2), Some(&Mask::even(4)), &old).unwrap();
    assert_eq!(res.lanes, vec![0, 0x11111111, 0, 0]);
    assert!(strided_load(&[0u8; 8], 8, &cfg.with_vl(2), None, &old).is_err());
}

#[test]
fn offset_test() {
    assert_eq!(strided_offset(3, -4, Width::W16), -12..-10);
    let index = reg(Width::W32, &[0, 0x10, 0x20, 0x20]);
    assert_eq!(indexed_segment_offset(1, 0, &index, Width::W32), 0x10..0x14);
    assert_eq!(indexed_segment_offset(1, 1, &index, Width::W32), 0x14..0x18);
}

#[test]
fn indexed_segment_store_test() {
    let mut mem = vec![0x11u8; 64];
    let field0 = reg(Width::W64, &[0xffffffffffffffa5, 0xffffffffffffff8c, 0xffffffffffffffcd, 0xffffffffffffff92]);
    let field1 = reg(Width::W64, &[0x34, 0x74, 0x75, 0x7a]);
    let index = reg(Width::W32, &[0, 0x10, 0x20, 0x20]);
    indexed_segment_store(&mut mem, &[field0, field1], &index, Width::W32, 4, None).unwrap();
    let words = VReg::from_bytes(Width::W32, &mem);
    assert_eq!(words.lanes[..10].to_vec(), vec![0xffffffa5, 0x34, 0x11111111, 0x11111111,
                                               0xffffff8c, 0x74, 0x11111111, 0x11111111,
                                               0xffffff92, 0x7a]);
    assert_eq!(words.get(10), 0x11111111);
}

#[test]
fn offset_wrap_test() {
    //the address adder wraps instead of overflowing
    assert_eq!(strided_offset(2, i64::max_value(), Width::W32), -2..2);
    assert_eq!(strided_offset(1, i64::max_value(), Width::W32), i64::max_value()..i64::min_value() + 3);
    let index = reg(Width::W64, &[0x7fff_ffff_ffff_fffe]);
    assert_eq!(indexed_segment_offset(0, 1, &index, Width::W32).start, i64::min_value() + 2);

    let cfg = VConfig::new(Width::W32, Lmul::M1);
    let old = VReg::zeros(Width::W32, 4);
    let mem = [0u8; 64];
    assert!(strided_load(&mem, i64::max_value(), &cfg.with_vl(2), None, &old).is_err());
    assert!(strided_load(&mem, i64::max_value(), &cfg, None, &old).is_err());
    assert!(strided_load(&mem, i64::min_value(), &cfg, None, &old).is_err());
    //only lane 0 is touched
    assert_eq!(strided_load(&mem, i64::max_value(), &cfg.with_vl(1), None, &old).unwrap().lanes, vec![0u64; 4]);
}

#[test]
fn indexed_segment_store_fault_test() {
    let field0 = reg(Width::W64, &[1, 2, 3, 4]);
    let field1 = reg(Width::W64, &[5, 6, 7, 8]);
    let fields = [field0, field1];

    //a bad segment after good ones leaves memory untouched
    for bad in [0x7fff_ffff_ffff_fffeu64, 0x3e, u64::max_value()].iter() {
        let mut mem = vec![0x11u8; 64];
        let index = reg(Width::W64, &[0, 0x10, *bad, 0x20]);
        assert!(indexed_segment_store(&mut mem, &fields, &index, Width::W32, 4, None).is_err());
        assert_eq!(mem, vec![0x11u8; 64]);
    }

    //a masked off segment is never checked
    let mut mem = vec![0x11u8; 64];
    let index = reg(Width::W64, &[0, 0x7fff_ffff_ffff_fffe, 0x20, u64::max_value()]);
    indexed_segment_store(&mut mem, &fields, &index, Width::W32, 4, Some(&Mask::even(4))).unwrap();
    let words = VReg::from_bytes(Width::W32, &mem);
    assert_eq!(words.lanes[..2].to_vec(), vec![1u64, 5]);
    assert_eq!(words.lanes[8..10].to_vec(), vec![3u64, 7]);
    assert_eq!(words.get(2), 0x11111111);
}
