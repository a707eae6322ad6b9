//! Characteristic values exchanged with the accessory-protocol bridge.

use core::fmt;

use crate::error::Error;

/// Declared format of a characteristic value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Bool,
    Int,
    Float,
}

impl ValueFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged value as delivered by the bridge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Float(f32),
}

impl Value {
    /// Format tag of the value
    pub const fn format(self) -> ValueFormat {
        match self {
            Self::Bool(_) => ValueFormat::Bool,
            Self::Int(_) => ValueFormat::Int,
            Self::Float(_) => ValueFormat::Float,
        }
    }

    pub const fn as_bool(self) -> Result<bool, Error> {
        match self {
            Self::Bool(value) => Ok(value),
            other => Err(Error::mismatch(ValueFormat::Bool, other.format())),
        }
    }

    pub const fn as_int(self) -> Result<i32, Error> {
        match self {
            Self::Int(value) => Ok(value),
            other => Err(Error::mismatch(ValueFormat::Int, other.format())),
        }
    }

    pub const fn as_float(self) -> Result<f32, Error> {
        match self {
            Self::Float(value) => Ok(value),
            other => Err(Error::mismatch(ValueFormat::Float, other.format())),
        }
    }
}
