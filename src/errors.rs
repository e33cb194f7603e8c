use thiserror::Error;

/// The result type for the `fsagen` crate.
pub type Result<T> = std::result::Result<T, FsaError>;

/// A macro that constructs a new FsaErrorKind::InvalidArgument error.
#[macro_export]
macro_rules! invalid_argument {
    ($reason:expr) => {
        $crate::FsaError::new($crate::FsaErrorKind::InvalidArgument(
            $reason.to_string(),
        ))
    };
}

/// The error type for the `fsagen` crate.
#[derive(Error, Debug)]
pub struct FsaError {
    /// The source of the error.
    pub source: Box<FsaErrorKind>,
}

impl FsaError {
    /// Create a new `FsaError`.
    pub fn new(kind: FsaErrorKind) -> Self {
        FsaError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &FsaErrorKind {
        &self.source
    }
}

impl std::fmt::Display for FsaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FsaErrorKind {
    /// An operation was called with arguments that violate its precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let error = invalid_argument!("nothing to concatenate");
        assert_eq!(
            error.kind(),
            &FsaErrorKind::InvalidArgument("nothing to concatenate".to_string())
        );
        assert_eq!(
            error.to_string(),
            "Invalid argument: nothing to concatenate"
        );
    }
}
