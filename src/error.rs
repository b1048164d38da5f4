use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown instruction `{0}`")]
    UnknownInsn(String),
    #[error("`{insn}` expects {expected} operands, got {actual}")]
    Arity { insn: String, expected: usize, actual: usize },
    #[error("`{insn}` operand {idx}: {msg}")]
    Shape { insn: String, idx: usize, msg: String },
    #[error("`{1}` is not supported by the {0} backend")]
    Unsupported(&'static str, String),
    #[error("invalid {0} code {1:#x}")]
    InvalidCode(&'static str, u64),
    #[error("unknown suite `{0}`")]
    UnknownSuite(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
