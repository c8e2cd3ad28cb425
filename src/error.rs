/*!
Error type and status codes.

Inside Rust, failures are reported as `Error`.  At the C boundary they are flattened into the `i32` status codes defined here.
*/
use std::error::Error as StdError;
use std::fmt::{self, Display};

/**
The operation completed.
*/
pub const S_OK: i32 = 0;

/**
A parameter was out of range, or the output had to be truncated.
*/
pub const ERROR_INVALID_PARAMETER: i32 = 87;

/**
An arithmetic result did not fit in the target width.
*/
pub const INTSAFE_E_ARITHMETIC_OVERFLOW: i32 = 0x8007_0216_u32 as i32;

/**
Result type used throughout this crate.
*/
pub type Result<T> = ::std::result::Result<T, Error>;

/**
The two ways a bounded operation can fail.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /**
    Capacity was zero or above `STRSAFE_MAX_CCH`, a pointer was null, no terminator was found within capacity, or the output was truncated.
    */
    InvalidParameter,

    /**
    An add or multiply would have wrapped.  Any result written alongside this error is the all-ones sentinel.
    */
    ArithmeticOverflow,
}

impl Error {
    /**
    Returns the status code this error is reported as at the C boundary.
    */
    pub fn code(&self) -> i32 {
        match *self {
            Error::InvalidParameter => ERROR_INVALID_PARAMETER,
            Error::ArithmeticOverflow => INTSAFE_E_ARITHMETIC_OVERFLOW,
        }
    }

    /**
    Interprets a status code.

    Returns `None` for codes this crate never produces.
    */
    pub fn from_code(code: i32) -> Option<Result<()>> {
        match code {
            S_OK => Some(Ok(())),
            ERROR_INVALID_PARAMETER => Some(Err(Error::InvalidParameter)),
            INTSAFE_E_ARITHMETIC_OVERFLOW => Some(Err(Error::ArithmeticOverflow)),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidParameter => write!(fmt, "invalid parameter or truncated output"),
            Error::ArithmeticOverflow => write!(fmt, "arithmetic overflow"),
        }
    }
}

impl StdError for Error {}

/**
Flattens a result into a status code.
*/
pub fn status<T>(r: Result<T>) -> i32 {
    match r {
        Ok(_) => S_OK,
        Err(err) => err.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for &err in &[Error::InvalidParameter, Error::ArithmeticOverflow] {
            assert_eq!(Error::from_code(err.code()), Some(Err(err)));
        }
        assert_eq!(Error::from_code(S_OK), Some(Ok(())));
        assert_eq!(Error::from_code(1), None);
    }

    #[test]
    fn test_overflow_code_is_negative() {
        assert!(INTSAFE_E_ARITHMETIC_OVERFLOW < 0);
        assert_eq!(INTSAFE_E_ARITHMETIC_OVERFLOW as u32, 0x8007_0216);
    }

    #[test]
    fn test_status() {
        assert_eq!(status(Ok::<_, Error>(5usize)), S_OK);
        assert_eq!(status::<()>(Err(Error::InvalidParameter)), 87);
        assert_eq!(Error::ArithmeticOverflow.to_string(), "arithmetic overflow");
    }
}
