//! Golden vectors read from json files:
//! `[{"insn": "paddh.s16", "args": [1450727032, 3221270528], "expected": 188482364}]`,
//! vector operands and results are arrays of lanes.
use crate::error::Result;
use crate::executor::{Executor, Value};
use crate::report::Summary;
use crate::suites::Checker;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VectorCase {
    pub insn: String,
    #[serde(default)]
    pub args: Vec<Value>,
    pub expected: Value,
}

pub fn parse(s: &str) -> Result<Vec<VectorCase>> {
    Ok(serde_json::from_str(s)?)
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<VectorCase>> {
    let cases = parse(&fs::read_to_string(path.as_ref())?)?;
    log::info!("{} vectors from {}", cases.len(), path.as_ref().display());
    Ok(cases)
}

pub fn check(name: &str, cases: &[VectorCase], executor: &dyn Executor) -> Summary {
    let mut checker = Checker::new(name, executor);
    for case in cases {
        checker.check(&case.insn, &case.args, &case.expected);
    }
    checker.suite().done();
    checker.suite().summary()
}
