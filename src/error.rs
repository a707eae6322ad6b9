use core::fmt;

use crate::value::ValueFormat;

/// Errors raised inside the control core.
///
/// None of them reach the bridge: setters turn them into no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Value format does not match the characteristic
    TypeMismatch {
        expected: ValueFormat,
        actual: ValueFormat,
    },
}

impl Error {
    pub(crate) const fn mismatch(expected: ValueFormat, actual: ValueFormat) -> Self {
        Self::TypeMismatch { expected, actual }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, actual } => {
                write!(f, "expected {} value, got {}", expected, actual)
            }
        }
    }
}
