use serde::Serialize;

#[cfg(test)]
mod test;

/// bit-identical lane comparison, a length difference never matches
pub fn compare_lanes(expected: &[u64], actual: &[u64]) -> bool {
    expected.len() == actual.len() && expected.iter().zip(actual.iter()).all(|(e, a)| e == a)
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Mismatch {
    pub test: String,
    pub lane: Option<usize>,
    pub expected: u64,
    pub actual: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Summary {
    pub suite: String,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Summary {
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 { 0 } else { 1 }
    }
}

/// A named group of checks. Failures are recorded and never abort the group,
/// `done` folds them into a process exit status.
pub struct TestSuite {
    name: String,
    passed: usize,
    failed: usize,
    skipped: usize,
    mismatches: Vec<Mismatch>,
}

impl TestSuite {
    pub fn init(name: &str) -> TestSuite {
        log::info!("Testing {}", name);
        TestSuite {
            name: name.to_string(),
            passed: 0,
            failed: 0,
            skipped: 0,
            mismatches: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn test(&mut self, test: &str, cond: bool) -> bool {
        if cond {
            self.passed += 1;
            log::debug!("{}: {} ok", self.name, test);
        } else {
            self.failed += 1;
            log::warn!("{}: {} failed", self.name, test);
        }
        cond
    }

    /// a check the backend cannot run, neither passed nor failed
    pub fn skip(&mut self, test: &str, reason: &str) {
        self.skipped += 1;
        log::info!("{}: {} skipped, {}", self.name, test, reason);
    }

    pub fn compare(&mut self, test: &str, expected: u64, actual: u64) -> bool {
        if expected != actual {
            self.record(test, None, expected, actual);
        }
        self.test(test, expected == actual)
    }

    pub fn compare_lanes(&mut self, test: &str, expected: &[u64], actual: &[u64]) -> bool {
        let ok = compare_lanes(expected, actual);
        if !ok {
            let n = std::cmp::max(expected.len(), actual.len());
            for i in 0..n {
                let e = expected.get(i).copied();
                let a = actual.get(i).copied();
                if e != a {
                    self.record(test, Some(i), e.unwrap_or(0), a.unwrap_or(0));
                }
            }
        }
        self.test(test, ok)
    }

    fn record(&mut self, test: &str, lane: Option<usize>, expected: u64, actual: u64) {
        match lane {
            Some(i) => log::error!("{}: {} lane {}: expected {:#x}, got {:#x}", self.name, test, i, expected, actual),
            None => log::error!("{}: {}: expected {:#x}, got {:#x}", self.name, test, expected, actual),
        }
        self.mismatches.push(Mismatch {
            test: test.to_string(),
            lane,
            expected,
            actual,
        })
    }

    pub fn summary(&self) -> Summary {
        Summary {
            suite: self.name.clone(),
            passed: self.passed,
            failed: self.failed,
            skipped: self.skipped,
            mismatches: self.mismatches.clone(),
        }
    }

    /// 0 when every check passed
    pub fn done(&self) -> i32 {
        let summary = self.summary();
        if summary.failed == 0 {
            log::info!("{}: all {} passed, {} skipped", self.name, self.passed, self.skipped);
        } else {
            log::warn!("{}: {} of {} failed", self.name, self.failed, self.passed + self.failed);
        }
        summary.exit_code()
    }
}
