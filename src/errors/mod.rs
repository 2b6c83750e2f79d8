use std::fmt;

pub mod prelude {
    pub use super::{err_msg, ClError, ClErrorKind, ClResult};
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ClErrorKind {
    #[error("Malformed encoding")]
    MalformedEncoding,
    #[error("Value is not invertible")]
    NotInvertible,
    #[error("Arithmetic underflow")]
    Underflow,
    #[error("Invalid modulus")]
    InvalidModulus,
    #[error("Proof does not match the public key schema")]
    SchemaError,
    #[error("Proof rejected")]
    ProofRejected,
    #[error("Invalid library state")]
    InvalidState,
}

impl ClErrorKind {
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            ClErrorKind::NotInvertible | ClErrorKind::Underflow | ClErrorKind::InvalidModulus
        )
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{kind}: {msg}")]
pub struct ClError {
    kind: ClErrorKind,
    msg: String,
}

impl ClError {
    pub fn from_msg<D>(kind: ClErrorKind, msg: D) -> ClError
    where
        D: fmt::Display,
    {
        ClError {
            kind,
            msg: msg.to_string(),
        }
    }

    pub fn kind(&self) -> ClErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// True for `NotInvertible`, `Underflow` and `InvalidModulus`.
    pub fn is_arithmetic(&self) -> bool {
        self.kind.is_arithmetic()
    }
}

impl From<ClErrorKind> for ClError {
    fn from(kind: ClErrorKind) -> ClError {
        ClError::from_msg(kind, kind)
    }
}

impl From<num_bigint::ParseBigIntError> for ClError {
    fn from(err: num_bigint::ParseBigIntError) -> ClError {
        ClError::from_msg(ClErrorKind::MalformedEncoding, err)
    }
}

impl From<log::SetLoggerError> for ClError {
    fn from(err: log::SetLoggerError) -> ClError {
        ClError::from_msg(ClErrorKind::InvalidState, err)
    }
}

pub type ClResult<T> = Result<T, ClError>;

pub fn err_msg<D>(kind: ClErrorKind, msg: D) -> ClError
where
    D: fmt::Display,
{
    ClError::from_msg(kind, msg)
}
