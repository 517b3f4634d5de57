//! Error handling for curve arithmetic

use alloc::borrow::Cow;
#[cfg(feature = "std")]
use alloc::string::ToString;
use core::fmt;

use ecarith_api::{CoordinateSystem, Error as CoreError, Result as CoreResult};

/// The error type for field, point and multiplier operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Integer or encoding out of the range accepted by the receiver
    InvalidValue {
        /// Operation that rejected the value
        context: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Operands from different fields or curves were combined
    InvalidOperand {
        /// Operation that received the operands
        context: &'static str,
    },

    /// Inversion of, or division by, zero
    DivisionByZero {
        /// Operation that attempted the division
        context: &'static str,
    },

    /// Curve asked to use a coordinate system it does not implement
    UnsupportedCoordinateSystem {
        /// The rejected system
        system: CoordinateSystem,
    },

    /// Operation invoked on an object in the wrong state
    InvalidState {
        /// Operation that was invoked
        context: &'static str,
        /// What was wrong with the receiver
        reason: &'static str,
    },

    /// Feature not implemented
    NotImplemented {
        /// Name of the unimplemented feature
        feature: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an InvalidValue error
    pub fn value(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidValue { context, reason }
    }

    /// Shorthand to create an InvalidOperand error
    pub fn operand(context: &'static str) -> Self {
        Error::InvalidOperand { context }
    }

    /// Shorthand to create an InvalidState error
    pub fn state(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidState { context, reason }
    }
}

/// Result type for curve arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::InvalidValue { context, reason } => {
                write!(f, "Invalid value in {}: {}", context, reason)
            }
            Error::InvalidOperand { context } => {
                write!(f, "Operands of {} belong to different fields or curves", context)
            }
            Error::DivisionByZero { context } => write!(f, "Division by zero in {}", context),
            Error::UnsupportedCoordinateSystem { system } => {
                write!(f, "Unsupported coordinate system: {}", system)
            }
            Error::InvalidState { context, reason } => {
                write!(f, "Invalid state for {}: {}", context, reason)
            }
            Error::NotImplemented { feature } => write!(f, "Feature not implemented: {}", feature),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = (name, reason);
                CoreError::InvalidParameter {
                    context: "curve parameter",
                    #[cfg(feature = "std")]
                    message: std::format!("{}: {}", name, reason),
                }
            }
            Error::InvalidValue { context, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidValue {
                    context,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            }
            Error::InvalidOperand { context } => CoreError::InvalidOperand {
                context,
                #[cfg(feature = "std")]
                message: "operands belong to different fields or curves".to_string(),
            },
            Error::DivisionByZero { context } => CoreError::DivisionByZero { context },
            Error::UnsupportedCoordinateSystem { system } => {
                CoreError::UnsupportedCoordinateSystem {
                    context: "curve configuration",
                    system,
                }
            }
            Error::InvalidState { context, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidState {
                    context,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            }
            Error::NotImplemented { feature } => CoreError::Other {
                context: feature,
                #[cfg(feature = "std")]
                message: "not implemented".to_string(),
            },
        }
    }
}

/// Convert a curve-arithmetic result to an API result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub use ecarith_api::error::ResultExt;

pub mod validate;
