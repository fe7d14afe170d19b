use core::fmt;

/// Status code reported by the native display-configuration API
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NativeStatus {
    Success,
    Failure,
    IllegalArgument,
    InvalidConnection,
    InvalidContext,
    CannotComplete,
    NotImplemented,
    RangeCheck,
    TypeCheck,
    InvalidOperation,
    NoneAvailable,
    /// A code this crate does not know about
    Unknown(i32),
}

impl NativeStatus {
    /// Converts a raw `CGError` value
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => NativeStatus::Success,
            1000 => NativeStatus::Failure,
            1001 => NativeStatus::IllegalArgument,
            1002 => NativeStatus::InvalidConnection,
            1003 => NativeStatus::InvalidContext,
            1004 => NativeStatus::CannotComplete,
            1006 => NativeStatus::NotImplemented,
            1007 => NativeStatus::RangeCheck,
            1008 => NativeStatus::TypeCheck,
            1010 => NativeStatus::InvalidOperation,
            1011 => NativeStatus::NoneAvailable,
            other => NativeStatus::Unknown(other),
        }
    }

    /// Converts back to the raw `CGError` value
    pub fn code(&self) -> i32 {
        match self {
            NativeStatus::Success => 0,
            NativeStatus::Failure => 1000,
            NativeStatus::IllegalArgument => 1001,
            NativeStatus::InvalidConnection => 1002,
            NativeStatus::InvalidContext => 1003,
            NativeStatus::CannotComplete => 1004,
            NativeStatus::NotImplemented => 1006,
            NativeStatus::RangeCheck => 1007,
            NativeStatus::TypeCheck => 1008,
            NativeStatus::InvalidOperation => 1010,
            NativeStatus::NoneAvailable => 1011,
            NativeStatus::Unknown(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        *self == NativeStatus::Success
    }

    /// Turns a raw code into `Ok(())` on success and `Err(status)` otherwise
    pub fn check(code: i32) -> Result<(), NativeStatus> {
        match Self::from_code(code) {
            NativeStatus::Success => Ok(()),
            status => Err(status),
        }
    }
}

impl fmt::Display for NativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeStatus::Success => write!(f, "success"),
            NativeStatus::Failure => write!(f, "failure"),
            NativeStatus::IllegalArgument => write!(f, "illegal argument"),
            NativeStatus::InvalidConnection => write!(f, "invalid connection"),
            NativeStatus::InvalidContext => write!(f, "invalid context"),
            NativeStatus::CannotComplete => write!(f, "cannot complete"),
            NativeStatus::NotImplemented => write!(f, "not implemented"),
            NativeStatus::RangeCheck => write!(f, "range check"),
            NativeStatus::TypeCheck => write!(f, "type check"),
            NativeStatus::InvalidOperation => write!(f, "invalid operation"),
            NativeStatus::NoneAvailable => write!(f, "none available"),
            NativeStatus::Unknown(_) => write!(f, "unknown"),
        }
    }
}
