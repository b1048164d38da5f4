use crate::error::Result;
use crate::executor::{Backend, Env, Executor};
use crate::fixed::FixedRound;
use crate::float::{DenormalMode, FpEnv, NanPolicy, RoundMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Run settings, every field optional in the json file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: Backend,
    pub rounding: RoundMode,
    pub denormal: DenormalMode,
    pub nan_policy: NanPolicy,
    pub vxrm: FixedRound,
    pub stop_on_fail: bool,
    //empty runs every registered suite
    pub suites: Vec<String>,
}

impl Config {
    pub fn parse(s: &str) -> Result<Config> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Config::parse(&content)?;
        log::info!("config {}: {:?}", path.as_ref().display(), config);
        Ok(config)
    }

    pub fn env(&self) -> Env {
        Env {
            fp: FpEnv {
                rm: self.rounding,
                denormal: self.denormal,
                nan: self.nan_policy,
            },
            vxrm: self.vxrm,
        }
    }

    pub fn executor(&self) -> Box<dyn Executor> {
        self.backend.executor(self.env())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_test() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.env(), Env::default());
        assert_eq!(config.executor().name(), "soft");
    }

    #[test]
    fn parse_test() {
        let config = Config::parse(r#"{
            "backend": "host",
            "rounding": "rtz",
            "denormal": "flush_to_zero",
            "nan_policy": "propagate",
            "vxrm": "rod",
            "stop_on_fail": true,
            "suites": ["sat.e8", "fpu.arith"]
        }"#).unwrap();
        assert_eq!(config.backend, Backend::Host);
        assert_eq!(config.suites, vec!["sat.e8".to_string(), "fpu.arith".to_string()]);
        assert!(config.stop_on_fail);
        let env = config.env();
        assert_eq!(env.fp.rm, RoundMode::Rtz);
        assert_eq!(env.fp.denormal, DenormalMode::FlushToZero);
        assert_eq!(env.fp.nan, NanPolicy::Propagate);
        assert_eq!(env.vxrm, FixedRound::Rod);
        assert_eq!(config.executor().name(), "host");
    }

    #[test]
    fn bad_config_test() {
        assert!(matches!(Config::parse(r#"{"backend": "fpga"}"#), Err(Error::Json(_))));
        assert!(matches!(Config::load("/nonexistent/isa-golden.json"), Err(Error::Io(_))));
    }
}
