// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Maximum encoded size in bytes of a single embedded proto payload.
pub const MAX_PROTO_SIZE: usize = 64 * 1024;
