// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! iorap-binder: app launch events exchanged with the activity manager.
//!
//! Events carry optional protobuf payloads, compare by payload content, and
//! flatten into a binder [`Parcel`].

pub mod codec;
pub mod config;
pub mod error;
pub mod event;
pub mod proto;

pub use error::{EventError, Result};
pub use event::{AppLaunchEvent, EventKind, EventParts, Temperature};
pub use iorap_parcel::{assert_parceling_round_trip, round_trip, Parcel, ParcelError, Parcelable};
