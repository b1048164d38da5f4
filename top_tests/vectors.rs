use isa_golden::executor::{Env, SoftExecutor};
use isa_golden::vectors;
use std::fs;

#[test]
fn vector_file() {
    let path = std::env::temp_dir().join(format!("isa-golden-vectors-{}.json", std::process::id()));
    fs::write(&path, r#"[
        {"insn": "add.sat.s32", "args": [2147483647, 2147483647], "expected": 2147483647},
        {"insn": "add.sat.s32", "args": [1, 1], "expected": 2},
        {"insn": "fstoh", "args": [2139095041], "expected": 32256},
        {"insn": "fdtosi.rn", "args": [13832806255468478464], "expected": 4294967294},
        {"insn": "fdtosi.rpi", "args": [13832806255468478464], "expected": 4294967295},
        {"insn": "vadd.t.s.u8", "args": [[250, 1], [10, 1]], "expected": [255, 2]}
    ]"#).unwrap();
    let cases = vectors::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let summary = vectors::check("vector_file", &cases, &SoftExecutor::new(Env::default()));
    assert_eq!((summary.passed, summary.failed), (6, 0));
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn vector_file_mismatch() {
    let cases = vectors::parse(r#"[
        {"insn": "add.sat.u8", "args": [255, 1], "expected": 0}
    ]"#).unwrap();
    let summary = vectors::check("wrapping", &cases, &SoftExecutor::new(Env::default()));
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.mismatches[0].actual, 255);
    assert_eq!(summary.exit_code(), 1);
}
