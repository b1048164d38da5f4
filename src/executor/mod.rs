use crate::bits::*;
use crate::error::{Error, Result};
use crate::fixed::FixedRound;
use crate::float::FpEnv;
use crate::vector::{Mask, VReg};
use linkme::distributed_slice;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod insns;
mod host;

pub use host::HostExecutor;


/// An operand or result: one register value or a list of lanes.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(u64),
    Lanes(Vec<u64>),
}

impl Value {
    pub fn lanes_of(reg: &VReg) -> Value {
        Value::Lanes(reg.lanes.clone())
    }

    pub fn to_lanes(&self) -> Vec<u64> {
        match self {
            Value::Scalar(v) => vec![*v],
            Value::Lanes(l) => l.clone(),
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Value {
        Value::Scalar(v)
    }
}

impl From<Vec<u64>> for Value {
    fn from(v: Vec<u64>) -> Value {
        Value::Lanes(v)
    }
}

/// Typed access to the operands of one instruction.
pub struct Args<'a> {
    insn: &'a str,
    args: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(insn: &'a str, args: &'a [Value]) -> Args<'a> {
        Args { insn, args }
    }

    fn shape(&self, idx: usize, msg: &str) -> Error {
        Error::Shape {
            insn: self.insn.to_string(),
            idx,
            msg: msg.to_string(),
        }
    }

    fn get(&self, idx: usize) -> Result<&'a Value> {
        self.args.get(idx).ok_or(Error::Arity {
            insn: self.insn.to_string(),
            expected: idx + 1,
            actual: self.args.len(),
        })
    }

    pub fn scalar(&self, idx: usize) -> Result<u64> {
        match self.get(idx)? {
            Value::Scalar(v) => Ok(*v),
            Value::Lanes(_) => Err(self.shape(idx, "expects a scalar")),
        }
    }

    pub fn lanes(&self, idx: usize) -> Result<&'a [u64]> {
        match self.get(idx)? {
            Value::Lanes(l) => Ok(l),
            Value::Scalar(_) => Err(self.shape(idx, "expects lanes")),
        }
    }

    pub fn reg(&self, idx: usize, sew: Width) -> Result<VReg> {
        Ok(VReg::from_slice(sew, self.lanes(idx)?))
    }

    /// `u64::MAX` or a lane list of all ones disables predication,
    /// a scalar is a bitmap and a lane list holds one flag per lane
    pub fn mask(&self, idx: usize, n: usize) -> Result<Option<Mask>> {
        match self.get(idx)? {
            Value::Scalar(b) if *b == u64::max_value() => Ok(None),
            Value::Scalar(b) => Ok(Some(Mask::from_bits(*b, n))),
            Value::Lanes(l) => {
                if l.iter().all(|v| *v != 0) && l.len() >= n {
                    Ok(None)
                } else {
                    Ok(Some(Mask::from_fn(n, |i| l.get(i).map(|v| *v != 0).unwrap_or(false))))
                }
            }
        }
    }
}

/// Mode state instructions read besides their operands.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Env {
    pub fp: FpEnv,
    pub vxrm: FixedRound,
}

pub type EvalFn = Box<dyn Fn(&Args, &Env) -> Result<Value> + Send + Sync>;

pub struct InsnDef {
    name: String,
    arity: usize,
    eval: EvalFn,
}

impl InsnDef {
    pub fn new<F>(name: &str, arity: usize, eval: F) -> InsnDef
        where F: Fn(&Args, &Env) -> Result<Value> + Send + Sync + 'static {
        InsnDef {
            name: name.to_string(),
            arity,
            eval: Box::new(eval),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn eval(&self, args: &[Value], env: &Env) -> Result<Value> {
        if args.len() != self.arity {
            return Err(Error::Arity {
                insn: self.name.clone(),
                expected: self.arity,
                actual: args.len(),
            });
        }
        (self.eval)(&Args::new(&self.name, args), env)
    }
}

pub trait InsnMap {
    fn registery(&mut self, def: InsnDef);
    fn get(&self, name: &str) -> Result<&InsnDef>;
    fn names(&self) -> Vec<&str>;
    fn lock(&mut self) {}
}

pub struct SimpleInsnMap(HashMap<String, InsnDef>);

impl SimpleInsnMap {
    pub fn new() -> SimpleInsnMap {
        SimpleInsnMap(HashMap::new())
    }
}

impl InsnMap for SimpleInsnMap {
    fn registery(&mut self, def: InsnDef) {
        if self.0.contains_key(&def.name) {
            log::warn!("instruction {} registered twice", def.name);
        }
        self.0.insert(def.name.clone(), def);
    }

    fn get(&self, name: &str) -> Result<&InsnDef> {
        self.0.get(name).ok_or_else(|| Error::UnknownInsn(name.to_string()))
    }

    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(|k| k.as_str()).collect();
        names.sort();
        names
    }
}

pub type GlobalInsnMap = SimpleInsnMap;

lazy_static! {
    pub static ref GINSNS: GlobalInsnMap = {
        let mut map = GlobalInsnMap::new();
        for r in REGISTERY_INSN {
            r(&mut map)
        }
        map.lock();
        map
    };
}

#[distributed_slice]
pub static REGISTERY_INSN: [fn(&mut GlobalInsnMap)] = [..];

/// The instruction under test.
pub trait Executor {
    fn name(&self) -> &'static str;
    fn execute(&self, insn: &str, args: &[Value]) -> Result<Value>;
}

/// Runs every registered instruction on its golden model.
pub struct SoftExecutor {
    env: Env,
}

impl SoftExecutor {
    pub fn new(env: Env) -> SoftExecutor {
        SoftExecutor { env }
    }
}

impl Executor for SoftExecutor {
    fn name(&self) -> &'static str {
        "soft"
    }

    fn execute(&self, insn: &str, args: &[Value]) -> Result<Value> {
        let def = GINSNS.get(insn)?;
        let res = def.eval(args, &self.env)?;
        log::debug!("{}{:x?} = {:x?}", insn, args, res);
        Ok(res)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Soft,
    Host,
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Soft
    }
}

impl Backend {
    pub fn from_name(s: &str) -> Option<Backend> {
        match s {
            "soft" => Some(Backend::Soft),
            "host" => Some(Backend::Host),
            _ => None
        }
    }

    pub fn executor(&self, env: Env) -> Box<dyn Executor> {
        match self {
            Backend::Soft => Box::new(SoftExecutor::new(env)),
            Backend::Host => Box::new(HostExecutor::new(env)),
        }
    }
}
