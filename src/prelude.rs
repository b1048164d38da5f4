pub use linkme::*;
pub use crate::bits::{BitsT, Sign, Width};
pub use crate::error::{Error, Result};
pub use crate::fixed::FixedRound;
pub use crate::float::{DenormalMode, Flags, FpEnv, FpResult, FWidth, NanPolicy, RoundMode};
pub use crate::vector::{Mask, VConfig, VReg};
pub use crate::report::{Summary, TestSuite};
pub use crate::executor::{Backend, Env, Executor, HostExecutor, SoftExecutor, Value};
pub use crate::suites::{Suite, SUITES, run_suites};
pub use crate::config::Config;
pub use crate::vectors::VectorCase;
