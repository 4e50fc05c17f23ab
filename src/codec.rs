// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Parcel encoding of [`AppLaunchEvent`].
//!
//! Format:
//! [i32] Event kind
//! [i64] Sequence id
//! Then, by kind:
//!   IntentStarted:           [byte array] intent proto
//!   IntentFailed:            -
//!   ActivityLaunched:        [i32] temperature, [byte array] activity proto
//!   ActivityLaunchFinished:  [byte array] activity proto
//!   ActivityLaunchCancelled: [byte array] activity proto, null when absent
//!   ReportFullyDrawn:        [i64] timestamp in nanoseconds
//!
//! A null array means "no payload"; an empty array is a present message with
//! every field at its default.

use crate::config::MAX_PROTO_SIZE;
use crate::error::{EventError, Result};
use crate::event::{AppLaunchEvent, EventKind, EventParts, Temperature};
use crate::proto::{ActivityRecordProto, IntentProto};
use iorap_parcel::{Parcel, Parcelable};
use prost::Message;

const INTENT_FIELD: &str = "intent_proto";
const ACTIVITY_FIELD: &str = "activity_record_proto";

fn write_proto<M: Message>(parcel: &mut Parcel, field: &'static str, proto: Option<&M>) -> Result<()> {
    let Some(proto) = proto else {
        parcel.write_byte_array(None)?;
        return Ok(());
    };
    let bytes = proto.encode_to_vec();
    if bytes.len() > MAX_PROTO_SIZE {
        return Err(EventError::ProtoTooLarge {
            field,
            len: bytes.len(),
            max: MAX_PROTO_SIZE,
        });
    }
    parcel.write_byte_array(Some(bytes.as_slice()))?;
    Ok(())
}

fn read_proto<M: Message + Default>(parcel: &mut Parcel, field: &'static str) -> Result<Option<Box<M>>> {
    let Some(bytes) = parcel.read_byte_array()? else {
        return Ok(None);
    };
    if bytes.len() > MAX_PROTO_SIZE {
        return Err(EventError::ProtoTooLarge {
            field,
            len: bytes.len(),
            max: MAX_PROTO_SIZE,
        });
    }
    let proto = M::decode(bytes.as_slice())
        .map_err(|source| EventError::MalformedProto { field, source })?;
    Ok(Some(Box::new(proto)))
}

fn read_temperature(parcel: &mut Parcel) -> Result<Temperature> {
    let raw = parcel.read_i32()?;
    Temperature::from_i32(raw).ok_or(EventError::UnknownTemperature(raw))
}

fn decode(parcel: &mut Parcel) -> Result<AppLaunchEvent> {
    let raw_kind = parcel.read_i32()?;
    let kind = EventKind::from_i32(raw_kind).ok_or(EventError::UnknownKind(raw_kind))?;
    let sequence_id = parcel.read_i64()?;

    let mut parts = EventParts::new(kind, sequence_id);
    match kind {
        EventKind::IntentStarted => {
            parts.intent_proto = read_proto::<IntentProto>(parcel, INTENT_FIELD)?;
        }
        EventKind::IntentFailed => {}
        EventKind::ActivityLaunched => {
            parts.temperature = read_temperature(parcel)?;
            parts.activity_record_proto = read_proto::<ActivityRecordProto>(parcel, ACTIVITY_FIELD)?;
        }
        EventKind::ActivityLaunchFinished | EventKind::ActivityLaunchCancelled => {
            parts.activity_record_proto = read_proto::<ActivityRecordProto>(parcel, ACTIVITY_FIELD)?;
        }
        EventKind::ReportFullyDrawn => {
            parts.timestamp_ns = Some(parcel.read_i64()?);
        }
    }
    AppLaunchEvent::from_parts(parts)
}

impl Parcelable for AppLaunchEvent {
    type Error = EventError;

    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<()> {
        tracing::trace!(kind = %self.kind(), sequence_id = self.sequence_id(), "writing app launch event");

        parcel.write_i32(self.kind() as i32)?;
        parcel.write_i64(self.sequence_id())?;
        match self {
            AppLaunchEvent::IntentStarted { intent, .. } => {
                write_proto(parcel, INTENT_FIELD, Some(&**intent))?;
            }
            AppLaunchEvent::IntentFailed { .. } => {}
            AppLaunchEvent::ActivityLaunched { temperature, activity, .. } => {
                parcel.write_i32(*temperature as i32)?;
                write_proto(parcel, ACTIVITY_FIELD, Some(&**activity))?;
            }
            AppLaunchEvent::ActivityLaunchFinished { activity, .. } => {
                write_proto(parcel, ACTIVITY_FIELD, Some(&**activity))?;
            }
            AppLaunchEvent::ActivityLaunchCancelled { activity, .. } => {
                write_proto(parcel, ACTIVITY_FIELD, activity.as_deref())?;
            }
            AppLaunchEvent::ReportFullyDrawn { timestamp_ns, .. } => {
                parcel.write_i64(*timestamp_ns)?;
            }
        }
        Ok(())
    }

    fn read_from_parcel(parcel: &mut Parcel) -> Result<Self> {
        let start = parcel.data_position();
        match decode(parcel) {
            Ok(event) => {
                tracing::trace!(kind = %event.kind(), sequence_id = event.sequence_id(), "read app launch event");
                Ok(event)
            }
            Err(err) => {
                tracing::warn!(position = start, error = %err, "rejected app launch event");
                Err(err)
            }
        }
    }
}
