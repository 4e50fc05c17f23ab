use std::io;
use thiserror::Error;

/// Binder `status_t` values reported for parcel failures.
pub mod status {
    pub const OK: i32 = 0;
    pub const NO_MEMORY: i32 = -12;
    pub const BAD_VALUE: i32 = -22;
    pub const NOT_ENOUGH_DATA: i32 = -61;
    pub const UNKNOWN_ERROR: i32 = i32::MIN;
    pub const UNEXPECTED_NULL: i32 = UNKNOWN_ERROR + 8;
}

#[derive(Error, Debug)]
pub enum ParcelError {
    #[error("Not enough data: needed {needed} bytes, {available} available")]
    NotEnoughData { needed: usize, available: usize },
    #[error("Bad value: {0}")]
    BadValue(String),
    #[error("Payload too large: {len} bytes exceeds limit of {max}")]
    PayloadTooLarge { len: usize, max: usize },
    #[error("Unexpected null {0}")]
    UnexpectedNull(&'static str),
    #[error("String is not valid UTF-8")]
    InvalidUtf8,
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl ParcelError {
    /// The binder status code a native parcel would have returned.
    pub fn status(&self) -> i32 {
        match self {
            ParcelError::NotEnoughData { .. } => status::NOT_ENOUGH_DATA,
            ParcelError::BadValue(_) | ParcelError::InvalidUtf8 => status::BAD_VALUE,
            ParcelError::PayloadTooLarge { .. } => status::NO_MEMORY,
            ParcelError::UnexpectedNull(_) => status::UNEXPECTED_NULL,
            ParcelError::IoError(_) => status::UNKNOWN_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParcelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = ParcelError::NotEnoughData { needed: 4, available: 0 };
        assert_eq!(err.status(), status::NOT_ENOUGH_DATA);
        assert_eq!(ParcelError::BadValue("x".into()).status(), status::BAD_VALUE);
        assert_eq!(ParcelError::UnexpectedNull("string").status(), status::UNEXPECTED_NULL);
        assert_ne!(err.status(), status::OK);
    }
}
