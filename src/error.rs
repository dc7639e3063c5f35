use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no parameter set reaches {requested}-bit security (strongest is {available}-bit)")]
    UnsupportedSecurity { requested: u32, available: u32 },
    #[error("unknown operator shift {0}, expected 0 (ADD), 1 (NEG) or 2 (IF)")]
    UnknownOperator(u8),
    #[error("invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },
    #[error("expected {expected} encrypted bits, found {found}")]
    WidthMismatch { expected: usize, found: usize },
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
}
