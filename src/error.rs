// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use crate::event::EventKind;
use iorap_parcel::ParcelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Unknown event kind: {0}")]
    UnknownKind(i32),

    #[error("Unknown temperature: {0}")]
    UnknownTemperature(i32),

    #[error("{kind} event is missing {field}")]
    MissingField { kind: EventKind, field: &'static str },

    #[error("{kind} event must not carry {field}")]
    UnexpectedField { kind: EventKind, field: &'static str },

    #[error("Malformed {field}: {source}")]
    MalformedProto {
        field: &'static str,
        #[source]
        source: prost::DecodeError,
    },

    #[error("{field} is {len} bytes, limit is {max}")]
    ProtoTooLarge {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Parcel error: {0}")]
    Parcel(#[from] ParcelError),
}

pub type Result<T> = std::result::Result<T, EventError>;
