//! Parcel layout constants.

/// Every primitive and every array body is padded to this many bytes.
pub const PARCEL_ALIGNMENT: usize = 4;

/// Largest byte array or string accepted by a single write or read.
pub const MAX_ARRAY_LEN: usize = 1 << 20;

/// Initial buffer capacity of [`crate::Parcel::new`].
pub const DEFAULT_CAPACITY: usize = 256;

/// Length prefix written in place of an absent array or string.
pub const NULL_LENGTH: i32 = -1;
