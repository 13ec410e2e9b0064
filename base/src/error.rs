use crate::kind::ValueKind;

pub type JsonTreeError = anyhow::Error;

pub use anyhow::Context;
pub use anyhow::bail;
pub use anyhow::ensure;
pub use anyhow::format_err;

/// Raised when a value is read, indexed or iterated as a kind it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("type mismatch: expected {expected}, but value is {actual}")]
pub struct TypeMismatch {
    pub expected: ValueKind,
    pub actual: ValueKind,
}

impl TypeMismatch {
    pub fn new(expected: ValueKind, actual: ValueKind) -> TypeMismatch {
        TypeMismatch { expected, actual }
    }
}
