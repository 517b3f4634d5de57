//! Error type definitions for elliptic-curve arithmetic

#[cfg(feature = "std")]
use std::string::String;

use crate::types::CoordinateSystem;

/// Primary error type for field and curve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value is outside the range accepted at construction
    InvalidValue {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Two operands belong to different fields or curves
    InvalidOperand {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Inversion or division by the zero element
    DivisionByZero {
        context: &'static str,
    },

    /// A curve was asked to work in a coordinate system it does not implement
    UnsupportedCoordinateSystem {
        context: &'static str,
        system: CoordinateSystem,
    },

    /// Malformed curve or field parameters
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// An operation was invoked on an object in the wrong state
    InvalidState {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A feature the receiver does not provide
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for curve arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidValue {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidValue {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidOperand {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidOperand {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::UnsupportedCoordinateSystem { system, .. } => {
                Self::UnsupportedCoordinateSystem { context, system }
            }
            Self::InvalidParameter {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidState {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidState {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::Other {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message,
            },
        }
    }

    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidValue { context, .. }
            | Self::InvalidOperand { context, .. }
            | Self::DivisionByZero { context }
            | Self::UnsupportedCoordinateSystem { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidState { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidValue { context, message } => {
                write!(f, "Invalid value in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidValue { context } => write!(f, "Invalid value in {}", context),
            #[cfg(feature = "std")]
            Self::InvalidOperand { context, message } => {
                write!(f, "Invalid operand in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidOperand { context } => write!(f, "Invalid operand in {}", context),
            Self::DivisionByZero { context } => write!(f, "Division by zero in {}", context),
            Self::UnsupportedCoordinateSystem { context, system } => {
                write!(f, "{}: unsupported coordinate system {}", context, system)
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            #[cfg(feature = "std")]
            Self::InvalidState { context, message } => {
                write!(f, "Invalid state in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidState { context } => write!(f, "Invalid state in {}", context),
            #[cfg(feature = "std")]
            Self::Other { context, message } => write!(f, "{}: {}", context, message),
            #[cfg(not(feature = "std"))]
            Self::Other { context } => write!(f, "Error: {}", context),
        }
    }
}
