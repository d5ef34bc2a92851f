use std::fmt;

/// Raised when an operation is invoked on an absent object reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullDereference {
    pub operation: &'static str,
    pub binding: &'static str,
}

impl NullDereference {
    pub fn new(operation: &'static str, binding: &'static str) -> Self {
        NullDereference { operation, binding }
    }
}

impl fmt::Display for NullDereference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot invoke \"{}\" because \"{}\" is null",
            self.operation, self.binding
        )
    }
}

impl std::error::Error for NullDereference {}
