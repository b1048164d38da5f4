use super::*;

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

const UNMASKED: u64 = 0xffff_ffff_ffff_ffff;
const EVEN: u64 = 0x5555_5555_5555_5555;
const ODD: u64 = 0xaaaa_aaaa_aaaa_aaaa;

const VADD_T_S: &[(&str, &[u64], &[u64], &[u64])] = &[
    ("vadd.t.s.s64", &S64, &S64_1, &[0x4142cb2bc552c9c8, 0xcdbe92152de11f8a]),
    ("vadd.t.s.s32", &S32, &S32_1, &[0x47753bc7, 0x80000000, 0x7de005a0, 0xe998b2d6]),
    ("vadd.t.s.s16", &S16, &S16_1, &[0x268e, 0x7fff, 0x7833, 0x0939, 0x8000, 0xe6bc, 0x7779, 0x8000]),
    ("vadd.t.s.s8", &S8, &S8_1,
     &[0xc6, 0xea, 0x80, 0x7f, 0xaf, 0x7e, 0x80, 0x7f, 0x7f, 0x2c, 0xe8, 0x80, 0x25, 0x80, 0x72, 0xdc]),
    ("vadd.t.s.u64", &U64, &[0xbc73041be547e732, 0x0afd8a490d762d5e], &[0xffffffffffffffff, 0x275ff616348bcd8f]),
    ("vadd.t.s.u32", &U32, &[0xe391e1de, 0xb2c0dd9f, 0x888fed5e, 0x1c3b70fe], &[0xffffffff, 0xffffffff, 0xffffffff, 0x84797573]),
    ("vadd.t.s.u16", &U16, &[0x6371, 0x3b45, 0x49ed, 0x7e26, 0x9ea1, 0xd612, 0x5c92, 0xfc48],
     &[0xffff, 0x86a8, 0xffff, 0x86e2, 0xffff, 0xe3ed, 0xffff, 0xffff]),
    ("vadd.t.s.u8", &U8, &[0x1c, 0x42, 0xd3, 0x53, 0x94, 0x57, 0x7b, 0xa3, 0xae, 0x96, 0x41, 0x28, 0x3a, 0x59, 0x9b, 0x70],
     &[0xde, 0x6b, 0xff, 0x91, 0xff, 0xd9, 0xc2, 0xff, 0xff, 0xff, 0xee, 0xc6, 0xff, 0x80, 0xaf, 0xff]),
];

const VSADD_VX: &[(&str, u64, &[u64], u64, &[u64])] = &[
    ("vsadd.vx.e8", 0x11, &S8, 0x7d,
     &[0x22, 0x7f, 0x09, 0x7f, 0x4a, 0x7f, 0x0f, 0x7f, 0x7f, 0x7f, 0x7f, 0x0e, 0x7a, 0x28, 0x7f, 0x7f]),
    ("vsadd.vx.e8", 0x11, &S8, 0x3f,
     &[0xe4, 0x73, 0xcb, 0x7f, 0x0c, 0x7f, 0xd1, 0x7f, 0x7f, 0x58, 0x7b, 0xd0, 0x3c, 0xea, 0x62, 0x60]),
    ("vsadd.vx.e16", 0x1111, &S16, 0xaf83, &[0x8659, 0x0175, 0xc072, 0xbe24, 0x8000, 0xfcc2, 0xf6e0, 0x8000]),
    ("vsadd.vx.e16", 0x1111, &S16, 0x5f3f, &[0x3615, 0x7fff, 0x702e, 0x6de0, 0x0288, 0x7fff, 0x7fff, 0x00a3]),
    ("vsadd.vx.e32", 0x1111_1111, &[0xcfe06686, 0x80000001, 0x15fc5221, 0x7fff745a], 0x80000083,
     &[0x80000000, 0x80000000, 0x95fc52a4, 0xffff74dd]),
    ("vsadd.vx.e32", 0x1111_1111, &[0xcfe06686, 0x80000001, 0x15fc5221, 0x7fff745a], 0x7fff3278,
     &[0x4fdf98fe, 0xffff3279, 0x7fffffff, 0x7fffffff]),
    ("vsadd.vx.e64", 0x1111_1111_1111_1111, &S64, 0x8000011d617caf83, &[0xb970b6b69c2ea195, 0x8000000000000000]),
    ("vsadd.vx.e64", 0x1111_1111_1111_1111, &S64, 0x7ffff11d617caf3f, &[0x7fffffffffffffff, 0x46a621d0a963e6ba]),
    ("vsaddu.vx.e8", 0x11, &U8, 0x5f,
     &[0xff, 0x88, 0xf8, 0x9d, 0xff, 0xe1, 0xa6, 0xe8, 0xff, 0xff, 0xff, 0xfd, 0xff, 0x86, 0x73, 0xff]),
    ("vsaddu.vx.e16", 0x1111, &U16, 0x5fff, &[0xffff, 0xab62, 0xffff, 0x68bb, 0xcf15, 0x6dda, 0xffff, 0xffff]),
    ("vsaddu.vx.e32", 0x1111_1111, &U32, 0x3fffffff, &[0xffffffff, 0xb5bc7c2f, 0xffffffff, 0xa83e0474]),
    ("vsaddu.vx.e64", 0x1111_1111_1111_1111, &U64, 0x9234567887654321, &[0xffffffffffffffff, 0xae96c245ae7ae352]),
];

const VSHIFT_VV: &[(&str, u64, &[u64], &[u64], &[u64], &[u64])] = &[
    ("e8", 0x11, &S8, &S8_1,
     &[0xd2, 0x00, 0xfc, 0x1d, 0xf3, 0x3a, 0x92, 0x03, 0x06, 0x03, 0x03, 0xfe, 0xfd, 0xfe, 0x00, 0x04],
     &[0x52, 0x00, 0x04, 0x1d, 0x33, 0x3a, 0x92, 0x03, 0x06, 0x03, 0x03, 0x02, 0xfd, 0x02, 0x00, 0x04]),
    ("e16", 0x1111, &S16, &S16_1,
     &[0xffd6, 0x0a3e, 0x010e, 0x000e, 0xd1a4, 0x0002, 0x0004, 0xfd0b],
     &[0x00d6, 0x0a3e, 0x010e, 0x000e, 0x51a4, 0x0002, 0x0004, 0x050b]),
    ("e32", 0x1111_1111, &S32, &S32_1, &[0xe7f03343, 0xfffffc13, 0, 0xfffffffd], &[0x67f03343, 0x00000413, 0, 0x0000000d]),
    ("e64", 0x1111_1111_1111_1111, &S64, &S64_1, &[0xe5, 0xffff8d4c61668fce], &[0xe5, 0x00018d4c61668fce]),
];

const VNSRL_VI: &[(&str, u64, &[u64], &[u64], &[u64])] = &[
    ("vnsrl.vi.e8", 0x11, &S16, &[0xd6, 0xf2, 0xef, 0xa1, 0x49, 0x3f, 0x5d, 0x64], &[0xb6, 0x8f, 0x87, 0x75, 0x1a, 0x69, 0x3a, 0x0b]),
    ("vnsrl.vi.e16", 0x1111, &S32, &[0xcfe0, 0x8262, 0x15fc, 0xd6b9], &[0x0334, 0x17b3, 0xe291, 0xcba2]),
    ("vnsrl.vi.e32", 0x1111_1111, &S64, &[0xb5993ab1, 0x30b347e7], &[0xc9d58f90, 0x9a3f39bb]),
];

const VSHT_T_RS: &[(&str, &[u64], &[u64], &[u64])] = &[
    ("vsht.t.rs.s8", &S8,
     &[0x01, 0x01, 0x09, 0xff, 0xf8, 0x09, 0x90, 0x15, 0x2c, 0x13, 0xac, 0x86, 0x28, 0xce, 0x4f, 0xbb],
     &[0x80, 0x68, 0x80, 0x3a, 0x00, 0x7f, 0x00, 0x7f, 0x7f, 0x7f, 0x00, 0x00, 0x80, 0x00, 0x7f, 0x00]),
    ("vsht.t.rs.s16", &S16, &[0x1, 0x1, 0x0, 0xfff8, 0xffdf, 0xff8d, 0x1c, 0xffb5],
     &[0xadac, 0x7fff, 0x10ef, 0x000f, 0, 0, 0x7fff, 0]),
    ("vsht.t.rs.s32", &S32, &[0x1, 0x1, 0xffffffff, 0xffffffe0], &[0x9fc0cd0c, 0x80000000, 0x0afe2911, 0]),
    ("vsht.t.rs.s64", &S64, &[0x1, 0xfffffffffffffffc], &[0x72e16b327563e424, 0xfc6a630b347e7378]),
    ("vsht.t.rs.u8", &U8,
     &[0x01, 0x02, 0x00, 0xfc, 0xf8, 0x57, 0x7b, 0xa3, 0xae, 0x96, 0x41, 0x28, 0x3a, 0x59, 0x9b, 0x70],
     &[0xff, 0xa4, 0x99, 0x04, 0x01, 0xff, 0xff, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0x00, 0xff]),
    ("vsht.t.rs.u16", &U16, &[0x1, 0x1, 0xfff8, 0x0, 0xfff0, 0xff92, 0x52, 0xffa8],
     &[0xffff, 0x96c6, 0x00f1, 0x08bc, 0, 0, 0xffff, 0]),
    ("vsht.t.rs.u32", &U32, &[0x1, 0x1, 0xfffffff8, 0x0], &[0xffffffff, 0xeb78f860, 0x00f0bec1, 0x683e0475]),
];

//insn, vd pair, vs pair, expected pair
const VPKG_T_2: &[(&str, [&[u64]; 2], [&[u64]; 2], [&[u64]; 2])] = &[
    ("vpkg.t.2.e8",
     [&[0x5a, 0xeb, 0x19, 0x10, 0x5b, 0xcd, 0xa0, 0xda, 0x8f, 0x29, 0xb3, 0x35, 0x3d, 0xda, 0x0d, 0x99],
      &[0xb5, 0x33, 0x70, 0x25, 0xd1, 0xaf, 0x8c, 0x2b, 0x97, 0xcd, 0x2d, 0x8a, 0xf5, 0x3a, 0x83, 0x10]],
     [&S8, &S8_1],
     [&[0x5a, 0xeb, 0x19, 0x10, 0x5b, 0xcd, 0xa0, 0xda, 0x8f, 0x29, 0xb3, 0x35, 0x3d, 0xda, 0x0d, 0xa5],
      &[0x21, 0x33, 0x70, 0x25, 0xd1, 0xaf, 0x8c, 0x2b, 0x97, 0xcd, 0x2d, 0x8a, 0xf5, 0x3a, 0x83, 0x10]]),
    ("vpkg.t.2.e16",
     [&[0xf0f6, 0x8940, 0xf0cf, 0x70e1, 0x43dc, 0xd684, 0xd39d, 0x86d3],
      &[0xbb9b, 0xb82a, 0x94a5, 0x70b4, 0x29b7, 0x8c06, 0x7c45, 0xaca1]],
     [&S16, &S16_1],
     [&[0xf0f6, 0x8940, 0xf0cf, 0x70e1, 0x43dc, 0xd684, 0xd39d, 0xd6d6],
      &[0x4fb8, 0xb82a, 0x94a5, 0x70b4, 0x29b7, 0x8c06, 0x7c45, 0xaca1]]),
    ("vpkg.t.2.e32",
     [&[0x2ef3c1ca, 0xd167753f, 0xd345a93c, 0xcb8a4543], &[0xb62db774, 0x0709f7b4, 0x6c9c7bcc, 0xa8c6d274]],
     [&S32, &S32_1],
     [&[0x2ef3c1ca, 0xd167753f, 0xd345a93c, 0xcfe06686], &[0x7794d541, 0x0709f7b4, 0x6c9c7bcc, 0xa8c6d274]]),
];

const FW_SRC: [u64; 8] = [0x4aee, 0x40aa, 0xc524, 0x46a9, 0x4a65, 0x404e, 0xc4bf, 0x4626];

const FWMACC: [u64; 16] = [0xc3515a88, 0xc20ba458, 0x429d7a49, 0xc2c85334, 0xc34141d4, 0xc200d528, 0x42919c65, 0xc2b8eef8,
    0xc3515a88, 0xc20ba458, 0x77aedcbf, 0x483c62b5, 0xc34141d4, 0xc200d528, 0x77aedcbf, 0x483c64a1];

fn lanes(v: &[u64]) -> Value {
    Value::Lanes(v.to_vec())
}

fn twice(v: &[u64]) -> Vec<u64> {
    [v, v].concat()
}

//lanes of `full` where `keep` holds, `old` elsewhere
fn select<F: Fn(usize) -> bool>(full: &[u64], old: u64, keep: F) -> Vec<u64> {
    full.iter().enumerate().map(|(i, v)| if keep(i) { *v } else { old }).collect()
}

fn bytes(words: &[u64], size: usize) -> Vec<u64> {
    words.iter().flat_map(|w| (0..size).map(move |b| (w >> (b * 8)) & 0xff)).collect()
}

//full width, one lane short of vl with a zeroed tail, then even and odd lanes over `pad`
fn predicated(c: &mut Checker, insn: &str, pad: u64, operands: &[Value], full: &[u64]) {
    let n = full.len();
    let args = |vl: usize, mask: u64| {
        let mut args = vec![Value::Scalar(vl as u64), Value::Scalar(mask), lanes(&vec![pad; n])];
        args.extend_from_slice(operands);
        args
    };
    c.check(insn, &args(n, UNMASKED), &lanes(full));
    c.check(insn, &args(n - 1, UNMASKED), &lanes(&select(full, 0, |i| i < n - 1)));
    c.check(insn, &args(n, EVEN), &lanes(&select(full, pad, |i| i & 1 == 0)));
    c.check(insn, &args(n, ODD), &lanes(&select(full, pad, |i| i & 1 == 1)));
}

fn integer(c: &mut Checker) {
    for &(insn, a, b, r) in VADD_T_S {
        c.check(insn, &[lanes(a), lanes(b)], &lanes(r));
    }
    for &(insn, pad, src, rs1, r) in VSADD_VX {
        predicated(c, insn, pad, &[lanes(&twice(src)), Value::Scalar(rs1)], &twice(r));
    }
    for &(e, pad, vs2, vs1, sra, srl) in VSHIFT_VV {
        let operands = [lanes(&twice(vs2)), lanes(&twice(vs1))];
        predicated(c, &format!("vsra.vv.{}", e), pad, &operands, &twice(sra));
        predicated(c, &format!("vsrl.vv.{}", e), pad, &operands, &twice(srl));
    }
    for &(insn, pad, vs2, imm16, imm5) in VNSRL_VI {
        let vs2 = lanes(&twice(vs2));
        predicated(c, insn, pad, &[vs2.clone(), Value::Scalar(16)], &twice(imm16));
        predicated(c, insn, pad, &[vs2, Value::Scalar(5)], &twice(imm5));
    }
    for &(insn, vd, vs, r) in VPKG_T_2 {
        c.check(insn, &[lanes(&vd.concat()), lanes(&vs.concat())], &lanes(&r.concat()));
    }
    for &(insn, a, b, r) in VSHT_T_RS {
        c.check(insn, &[lanes(a), lanes(b)], &lanes(r));
    }

    let packed: [u64; 17] = [0xa5, 0x74, 0xcd, 0x75, 0x7a, 0x19, 0x3c, 0xab, 0x21, 0xa5, 0x8c, 0x74, 0x92, 0x7a, 0x3c, 0x91, 0xfd];
    let mut expected = vec![0u64; 32];
    expected[..17].copy_from_slice(&packed);
    let vs2 = lanes(&twice(&S8));
    c.check("vcompress.vm.e8", &[Value::Scalar(30), Value::Scalar(0x5ccda6b9), vs2.clone()], &lanes(&expected));
    expected[17] = 0x23;
    c.check("vcompress.vm.e8", &[Value::Scalar(32), Value::Scalar(0x5ccda6b9), vs2], &lanes(&expected));
    c.check("vcompress.vm.e64", &[Value::Scalar(4), Value::Scalar(0b0110), lanes(&twice(&S64))],
            &lanes(&[0xc6a630b347e7377b, 0x3970b5993ab1f212, 0, 0]));

    c.check("vcls.e8", &[lanes(&S8)], &lanes(&[0, 1, 0, 0, 1, 0, 0, 0, 0, 2, 1, 0, 5, 0, 1, 1]));
    c.check("vcls.e32", &[lanes(&S32)], &lanes(&[1, 0, 2, 1]));
    c.check("vcnt1.e16", &[lanes(&S16)], &lanes(&[10, 8, 8, 6, 7, 10, 9, 6]));
    c.check("vcnt1.e64", &[lanes(&[0x0123456789abcdef, 0xffffffff00000000])], &lanes(&[32, 32]));
}

fn widening(c: &mut Checker) {
    let acc = lanes(&[0xf0f6, 0x8940, 0xf0cf, 0x70e1, 0x43dc, 0xd684, 0xd39d, 0x86d3,
        0x64c6, 0x1d30, 0xdd97, 0xa399, 0x2754, 0xcccc, 0xd175, 0x62b3]);
    c.check("vmulai.t.e.s8", &[acc, lanes(&S8), lanes(&S8_1), Value::Scalar(0)],
            &lanes(&[0xe53b, 0x8ff4, 0xe1db, 0x7fd5, 0x3d49, 0xe599, 0xc56f, 0x968d,
                0x7126, 0x2069, 0xe553, 0x954a, 0x26f1, 0xc1d7, 0xd5f8, 0x66f4]));
    c.check("vrmuli.t.se.8", &[lanes(&S8), lanes(&S8_1), Value::Scalar(0)],
            &lanes(&[0xe88a, 0x0d68, 0xe218, 0x1de8, 0xf2da, 0x1e2a, 0xe3a4, 0x1f74,
                0x18c0, 0x0672, 0x0f78, 0xe362, 0xff3a, 0xea16, 0x0906, 0x0882]));
    c.check("vrmuli.t.se.32", &[lanes(&[0xcfe06686, 0x80000000, 0x15fc5221, 0xd6b9745a]), lanes(&[0x80000000, 0, 0, 0]), Value::Scalar(0)],
            &lanes(&[0x301f997a00000000, 0x7fffffffffffffff, 0xea03addf00000000, 0x29468ba600000000]));
}

fn quad(c: &mut Checker) {
    let acc = lanes(&[0x1111_1111; 4]);
    let src = lanes(&[1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4]);
    let args = |vl: u64, mask: u64, rs1: u64| [Value::Scalar(vl), Value::Scalar(mask), acc.clone(), src.clone(), Value::Scalar(rs1)];
    c.check("vmaqasu.vx", &args(15, UNMASKED, 0xffffffff), &lanes(&[0x1111110d, 0x11111109, 0x11111105, 0x11111105]));
    c.check("vmaqasu.vx", &args(16, EVEN, 0xffffffff), &lanes(&[0x1111110f, 0x1111110d, 0x1111110b, 0x11111109]));
    c.check("vmaqasu.vx", &args(16, ODD, 0xffffffff), &lanes(&[0x1111110f, 0x1111110d, 0x1111110b, 0x11111109]));
    c.check("vpmaqaus.vx", &args(15, UNMASKED, 0x0808080808080808), &lanes(&[0x11111131, 0x11111151, 0x11111171, 0x11111171]));
    c.check("vpmaqaus.vx", &args(16, EVEN, 0x0808080808080808), &lanes(&[0x11111121, 0x11111131, 0x11111141, 0x11111151]));
    c.check("vmaqa.vv", &[Value::Scalar(16), Value::Scalar(UNMASKED), acc.clone(), src.clone(), lanes(&[0xff; 16])],
            &lanes(&[0x1111110d, 0x11111109, 0x11111105, 0x11111101]));

    //exact shifts, so the result does not depend on vxrm
    let pad = lanes(&[0x11; 16]);
    let vs2 = lanes(&[0x3010; 16]);
    let vs1 = lanes(&[0x44, 0x44, 0x44, 0x44, 0x88, 0x88, 0x88, 0x88, 0x44, 0x44, 0x44, 0x44, 0x88, 0x88, 0x88, 0x88]);
    let clipped: [u64; 16] = [0x31, 0x31, 0x31, 0x31, 0x77, 0x77, 0x77, 0x77, 0x31, 0x31, 0x31, 0x31, 0x77, 0x77, 0x77, 0x77];
    let args = |vl: u64, mask: u64| [Value::Scalar(vl), Value::Scalar(mask), pad.clone(), vs2.clone(), vs1.clone()];
    c.check("vpnclip.wv", &args(15, UNMASKED), &lanes(&select(&clipped, 0x11, |i| i < 15)));
    c.check("vpnclip.wv", &args(16, EVEN), &lanes(&select(&clipped, 0x11, |i| i & 1 == 0)));
}

fn float(c: &mut Checker) {
    let a: [u64; 4] = [0xbf6befd1, 0x3e24f025, 0x3fb6de33, 0x07ad69da];
    let b: [u64; 4] = [0xbf6befd1, 0x3e24f025, 0x77aedcbf, 0x483c7bbf];
    let acc = [a, a, b, b].concat();
    let vs2 = lanes(&twice(&FW_SRC));
    let args = |vl: u64, mask: u64| [Value::Scalar(vl), Value::Scalar(mask), lanes(&acc), vs2.clone(), Value::Scalar(0xcb85)];
    c.check("vfwmacc.vf.e32", &args(16, UNMASKED), &lanes(&FWMACC));
    c.check("vfwmacc.vf.e32", &args(15, UNMASKED), &lanes(&select(&FWMACC, 0, |i| i < 15)));
    let even: Vec<u64> = FWMACC.iter().zip(acc.iter()).enumerate()
        .map(|(i, (r, o))| if i & 1 == 0 { *r } else { *o }).collect();
    c.check("vfwmacc.vf.e32", &args(16, EVEN), &lanes(&even));
    let negated: Vec<u64> = FWMACC.iter().map(|v| v ^ 0x8000_0000).collect();
    c.check("vfwnmacc.vf.e32", &args(16, UNMASKED), &lanes(&negated));

    let vd = lanes(&[0xbf6befd1, 0x3e24f025, 0x3fb6de33, 0x07ad69da, 0xbf6befd1, 0x3e24f025, 0x77aedcbf, 0x483c7bbf]);
    let vs2 = lanes(&[0x483471f7, 0x46f2e02b, 0xc785dc35, 0x47ad69d9, 0x483471f7, 0x46f2e02b, 0xff7fffff, 0x47ad69d9]);
    c.check("vfmsub.vf.e32", &[Value::Scalar(8), Value::Scalar(UNMASKED), vd, Value::Scalar(0xc843ca22), vs2.clone()],
            &lanes(&[0xbb70f0f8, 0xc777953d, 0xc854c92e, 0xc7ad69d9, 0xbb70f0f8, 0xc777953d, 0xff800000, 0xd110272b]));
    c.check("vfrdiv.vf.e32", &[Value::Scalar(8), Value::Scalar(UNMASKED), lanes(&[0u64; 8]), vs2, Value::Scalar(0xc843ca22)],
            &lanes(&[0xbf8ae279, 0xc0ce5e99, 0x403b37de, 0xc010842a, 0xbf8ae279, 0xc0ce5e99, 0x0843ca23, 0xc010842a]));
    c.check("vfrdiv.vf.e16", &[Value::Scalar(16), Value::Scalar(UNMASKED), lanes(&[0u64; 16]), lanes(&twice(&FW_SRC)), Value::Scalar(0xcb85)],
            &lanes(&twice(&[0xbc57, 0xc673, 0x41da, 0xc084, 0xbcb4, 0xc6fd, 0x4256, 0xc0e4])));
    c.check("vftofi.rz.e16", &[Value::Scalar(8), Value::Scalar(UNMASKED), lanes(&[0u64; 8]),
        lanes(&[0x3c00, 0x3e00, 0xbe00, 0x4540, 0x3400, 0xc600, 0x7c00, 0x0001])],
            &lanes(&[0x3c00, 0x3c00, 0xbc00, 0x4500, 0x0000, 0xc600, 0x7c00, 0x0000]));
}

fn memory(c: &mut Checker) {
    let mem = lanes(&twice(&S8));
    let mut expected = twice(&[0xa5, 0x8c, 0xcd, 0x92, 0x60, 0x3c, 0xfd, 0x23]);
    expected.resize(32, 0);
    c.check("vlse.e8", &[Value::Scalar(16), Value::Scalar(UNMASKED), lanes(&[0u64; 32]), mem, Value::Scalar(2)], &lanes(&expected));

    let fields = [
        lanes(&[0xffffffffffffffa5, 0xffffffffffffff8c, 0xffffffffffffffcd, 0xffffffffffffff92]),
        lanes(&[0x34, 0x74, 0x75, 0x7a]),
    ];
    let mut words = vec![0x1111_1111u64; 16];
    words[..10].copy_from_slice(&[0xffffffa5, 0x34, 0x11111111, 0x11111111, 0xffffff8c, 0x74, 0x11111111, 0x11111111, 0xffffff92, 0x7a]);
    let args = [Value::Scalar(4), Value::Scalar(UNMASKED), lanes(&[0x11; 64]), lanes(&[0, 0x10, 0x20, 0x20]),
        fields[0].clone(), fields[1].clone()];
    c.check("vsxseg2.e32", &args, &lanes(&bytes(&words, 4)));
}

#[distributed_slice(SUITES)]
static RVV_INT: Suite = Suite {
    name: "rvv.int",
    run: integer,
};

#[distributed_slice(SUITES)]
static RVV_WIDENING: Suite = Suite {
    name: "rvv.widening",
    run: widening,
};

#[distributed_slice(SUITES)]
static THEAD_QUAD: Suite = Suite {
    name: "thead.quad",
    run: quad,
};

#[distributed_slice(SUITES)]
static RVV_FLOAT: Suite = Suite {
    name: "rvv.float",
    run: float,
};

#[distributed_slice(SUITES)]
static RVV_MEMORY: Suite = Suite {
    name: "rvv.memory",
    run: memory,
};
