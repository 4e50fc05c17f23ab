// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protobuf payloads embedded in launch events, and how they compare.
//!
//! Payloads are compared by concrete message type and serialized bytes rather
//! than field by field. Two messages that are semantically equal but encode
//! differently (unknown fields, non-canonical ordering) compare unequal.

pub mod activity_record;
pub mod intent;

pub use activity_record::{ActivityRecordProto, IdentifierProto};
pub use intent::IntentProto;

use prost::Name;

/// Same message type and identical encoded bytes.
pub fn proto_content_eq<A: Name, B: Name>(lhs: &A, rhs: &B) -> bool {
    A::full_name() == B::full_name()
        && prost::Message::encode_to_vec(lhs) == prost::Message::encode_to_vec(rhs)
}

/// Both absent, or both present and content-equal.
pub fn proto_ptr_eq<A: Name, B: Name>(lhs: Option<&A>, rhs: Option<&B>) -> bool {
    match (lhs, rhs) {
        (None, None) => true,
        (Some(lhs), Some(rhs)) => proto_content_eq(lhs, rhs),
        _ => false,
    }
}
