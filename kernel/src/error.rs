use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    Invalid(Violation),
    NotFound,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Invalid(violation) => write!(f, "Invalid input: {violation}"),
            KernelError::NotFound => write!(f, "Target not found"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Reasons a book payload is rejected before it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    MissingName,
    ReadPageExceedsPageCount,
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingName => write!(f, "name is required"),
            Violation::ReadPageExceedsPageCount => write!(f, "readPage exceeds pageCount"),
        }
    }
}

impl From<Violation> for KernelError {
    fn from(value: Violation) -> Self {
        Self::Invalid(value)
    }
}
