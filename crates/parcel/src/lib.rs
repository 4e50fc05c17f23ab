//! Binder-style parcel buffer.
//!
//! A [`Parcel`] is a growable little-endian byte buffer with a single data
//! position shared by reads and writes. Values that know how to flatten
//! themselves implement [`Parcelable`]; [`round_trip`] pushes one through a
//! fresh parcel and reads it back.

pub mod config;
pub mod error;
pub mod parcel;
pub mod parcelable;
pub mod round_trip;

pub use error::{ParcelError, Result};
pub use parcel::Parcel;
pub use parcelable::Parcelable;
pub use round_trip::round_trip;
