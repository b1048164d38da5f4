//! Golden-table suites, each registered into `SUITES` and run against any
//! `Executor`.
use crate::error::{Error, Result};
use crate::executor::{Executor, Value};
use crate::report::{Summary, TestSuite};
use linkme::distributed_slice;

mod dsp;
mod fpu;
mod rvv;


pub struct Suite {
    pub name: &'static str,
    pub run: fn(&mut Checker),
}

#[distributed_slice]
pub static SUITES: [Suite] = [..];

/// Feeds operands to the executor and folds each result into a `TestSuite`.
pub struct Checker<'a> {
    executor: &'a dyn Executor,
    suite: TestSuite,
}

impl<'a> Checker<'a> {
    pub fn new(name: &str, executor: &'a dyn Executor) -> Checker<'a> {
        Checker {
            executor,
            suite: TestSuite::init(name),
        }
    }

    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }

    pub fn check(&mut self, insn: &str, args: &[Value], expected: &Value) -> bool {
        let test = format!("{} {:x?}", insn, args);
        match self.executor.execute(insn, args) {
            Ok(actual) => self.suite.compare_lanes(&test, &expected.to_lanes(), &actual.to_lanes()),
            Err(Error::Unsupported(backend, _)) => {
                self.suite.skip(&test, &format!("not supported by {}", backend));
                true
            }
            Err(e) => {
                log::error!("{}: {}", test, e);
                self.suite.test(&test, false)
            }
        }
    }

    pub fn scalar(&mut self, insn: &str, args: &[u64], expected: u64) -> bool {
        let args: Vec<Value> = args.iter().map(|v| Value::Scalar(*v)).collect();
        self.check(insn, &args, &Value::Scalar(expected))
    }

    pub fn table(&mut self, insn: &str, rows: &[(u64, u64, u64)]) {
        for &(a, b, r) in rows {
            self.scalar(insn, &[a, b], r);
        }
    }
}

pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = SUITES.iter().map(|s| s.name).collect();
    names.sort();
    names
}

pub fn find(name: &str) -> Result<&'static Suite> {
    SUITES.iter().find(|s| s.name == name).ok_or_else(|| Error::UnknownSuite(name.to_string()))
}

pub fn run_suite(suite: &Suite, executor: &dyn Executor) -> Summary {
    let mut checker = Checker::new(suite.name, executor);
    (suite.run)(&mut checker);
    checker.suite.done();
    checker.suite.summary()
}

/// Runs the named suites, or every registered suite when `names` is empty,
/// and returns the summaries in run order.
pub fn run_suites(names: &[String], executor: &dyn Executor, stop_on_fail: bool) -> Result<Vec<Summary>> {
    let suites = if names.is_empty() {
        self::names().into_iter().map(find).collect::<Result<Vec<_>>>()?
    } else {
        names.iter().map(|n| find(n)).collect::<Result<Vec<_>>>()?
    };
    let mut summaries = vec![];
    for suite in suites {
        let summary = run_suite(suite, executor);
        let failed = summary.failed != 0;
        summaries.push(summary);
        if failed && stop_on_fail {
            log::warn!("stop after {}", suite.name);
            break;
        }
    }
    Ok(summaries)
}

/// 0 when every suite passed
pub fn exit_code(summaries: &[Summary]) -> i32 {
    summaries.iter().map(|s| s.exit_code()).max().unwrap_or(0)
}
