//! Scoped id errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type IdResult<T> = Result<T, IdNotFound>;

/// Requested id text is not registered in the looked-up domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdNotFound {
    /// Diagnostic name of the id kind.
    pub kind: &'static str,
    /// Looked-up id text.
    pub value: String,
}

impl Display for IdNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} id not found: {}", self.kind, self.value)
    }
}

impl Error for IdNotFound {}
