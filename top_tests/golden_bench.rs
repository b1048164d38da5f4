#![feature(test)]
extern crate test;

use test::Bencher;
use isa_golden::executor::{Env, Executor, SoftExecutor, Value};
use isa_golden::suites;

#[bench]
fn paddh_bench(b: &mut Bencher) {
    let e = SoftExecutor::new(Env::default());
    let args = vec![Value::Scalar(0x5678_5678), Value::Scalar(0xc000_b000)];
    b.iter(|| {
        e.execute("paddh.s16", &args).unwrap();
    });
}

#[bench]
fn fadd_bench(b: &mut Bencher) {
    let e = SoftExecutor::new(Env::default());
    let args = vec![Value::Scalar(0xbfc0_0000), Value::Scalar(0x3f80_0000)];
    b.iter(|| {
        e.execute("fadd.s", &args).unwrap();
    });
}

#[bench]
fn suites_bench(b: &mut Bencher) {
    let e = SoftExecutor::new(Env::default());
    b.iter(|| {
        suites::run_suites(&[], &e, false).unwrap();
    });
}
