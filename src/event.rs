// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! App launch events as reported by the activity manager.
//!
//! Every launch attempt is a sequence of events sharing one `sequence_id`:
//! an intent starts (or fails), an activity launches, and the launch either
//! finishes or is cancelled. `ReportFullyDrawn` may follow a finished launch.
//!
//! # Invariants
//! - Only the intent-started event carries an intent payload
//! - Launched and finished events always carry an activity payload
//! - A cancelled event may carry an activity payload
//! - Temperature is only meaningful for launched events
//!
//! Each event kind is its own variant, so these hold for every value.

use crate::error::{EventError, Result};
use crate::proto::{proto_ptr_eq, ActivityRecordProto, IntentProto};
use core::fmt;

/// Launch phase discriminator. Values match the wire encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum EventKind {
    IntentStarted = 0,
    IntentFailed = 1,
    ActivityLaunched = 2,
    ActivityLaunchFinished = 3,
    ActivityLaunchCancelled = 4,
    ReportFullyDrawn = 5,
}

impl EventKind {
    /// Wire value reserved for an uninitialized event; never decoded.
    pub const UNINITIALIZED: i32 = -1;

    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            0 => Some(EventKind::IntentStarted),
            1 => Some(EventKind::IntentFailed),
            2 => Some(EventKind::ActivityLaunched),
            3 => Some(EventKind::ActivityLaunchFinished),
            4 => Some(EventKind::ActivityLaunchCancelled),
            5 => Some(EventKind::ReportFullyDrawn),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::IntentStarted => "IntentStarted",
            EventKind::IntentFailed => "IntentFailed",
            EventKind::ActivityLaunched => "ActivityLaunched",
            EventKind::ActivityLaunchFinished => "ActivityLaunchFinished",
            EventKind::ActivityLaunchCancelled => "ActivityLaunchCancelled",
            EventKind::ReportFullyDrawn => "ReportFullyDrawn",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache warmth of a launch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Temperature {
    Uninitialized = -1,
    Cold = 1,
    Warm = 2,
    Hot = 3,
}

impl Temperature {
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            -1 => Some(Temperature::Uninitialized),
            1 => Some(Temperature::Cold),
            2 => Some(Temperature::Warm),
            3 => Some(Temperature::Hot),
            _ => None,
        }
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Temperature::Uninitialized
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Temperature::Uninitialized => "Uninitialized",
            Temperature::Cold => "Cold",
            Temperature::Warm => "Warm",
            Temperature::Hot => "Hot",
        };
        f.write_str(name)
    }
}

/// One observed phase of an app launch.
///
/// Payloads are owned exclusively by the event. Equality compares payloads by
/// message content (see [`crate::proto::proto_content_eq`]), not identity.
#[derive(Clone, Debug)]
pub enum AppLaunchEvent {
    IntentStarted {
        sequence_id: i64,
        intent: Box<IntentProto>,
    },
    IntentFailed {
        sequence_id: i64,
    },
    ActivityLaunched {
        sequence_id: i64,
        temperature: Temperature,
        activity: Box<ActivityRecordProto>,
    },
    ActivityLaunchFinished {
        sequence_id: i64,
        activity: Box<ActivityRecordProto>,
    },
    ActivityLaunchCancelled {
        sequence_id: i64,
        activity: Option<Box<ActivityRecordProto>>,
    },
    ReportFullyDrawn {
        sequence_id: i64,
        timestamp_ns: i64,
    },
}

/// Flat view of an event, shaped like the wire format.
///
/// Fields that do not apply to `kind` must be left at their defaults;
/// [`AppLaunchEvent::from_parts`] rejects anything else.
#[derive(Clone, Debug)]
pub struct EventParts {
    pub kind: EventKind,
    pub sequence_id: i64,
    pub intent_proto: Option<Box<IntentProto>>,
    pub temperature: Temperature,
    pub activity_record_proto: Option<Box<ActivityRecordProto>>,
    pub timestamp_ns: Option<i64>,
}

impl EventParts {
    pub fn new(kind: EventKind, sequence_id: i64) -> Self {
        Self {
            kind,
            sequence_id,
            intent_proto: None,
            temperature: Temperature::Uninitialized,
            activity_record_proto: None,
            timestamp_ns: None,
        }
    }
}

fn require<T>(value: Option<T>, kind: EventKind, field: &'static str) -> Result<T> {
    value.ok_or(EventError::MissingField { kind, field })
}

fn reject<T>(value: &Option<T>, kind: EventKind, field: &'static str) -> Result<()> {
    match value {
        Some(_) => Err(EventError::UnexpectedField { kind, field }),
        None => Ok(()),
    }
}

impl AppLaunchEvent {
    pub fn intent_started(sequence_id: i64, intent: impl Into<Box<IntentProto>>) -> Self {
        AppLaunchEvent::IntentStarted {
            sequence_id,
            intent: intent.into(),
        }
    }

    pub fn intent_failed(sequence_id: i64) -> Self {
        AppLaunchEvent::IntentFailed { sequence_id }
    }

    pub fn activity_launched(
        sequence_id: i64,
        temperature: Temperature,
        activity: impl Into<Box<ActivityRecordProto>>,
    ) -> Self {
        AppLaunchEvent::ActivityLaunched {
            sequence_id,
            temperature,
            activity: activity.into(),
        }
    }

    pub fn activity_launch_finished(
        sequence_id: i64,
        activity: impl Into<Box<ActivityRecordProto>>,
    ) -> Self {
        AppLaunchEvent::ActivityLaunchFinished {
            sequence_id,
            activity: activity.into(),
        }
    }

    /// The activity is optional: a launch can be cancelled before any
    /// activity record exists.
    pub fn activity_launch_cancelled(
        sequence_id: i64,
        activity: Option<Box<ActivityRecordProto>>,
    ) -> Self {
        AppLaunchEvent::ActivityLaunchCancelled {
            sequence_id,
            activity,
        }
    }

    pub fn report_fully_drawn(sequence_id: i64, timestamp_ns: i64) -> Self {
        AppLaunchEvent::ReportFullyDrawn {
            sequence_id,
            timestamp_ns,
        }
    }

    /// Rebuilds an event from its flat view, checking that exactly the
    /// fields belonging to `parts.kind` are populated.
    pub fn from_parts(parts: EventParts) -> Result<Self> {
        let EventParts {
            kind,
            sequence_id,
            intent_proto,
            temperature,
            activity_record_proto,
            timestamp_ns,
        } = parts;

        if kind != EventKind::IntentStarted {
            reject(&intent_proto, kind, "intent_proto")?;
        }
        if kind != EventKind::ActivityLaunched && temperature != Temperature::Uninitialized {
            return Err(EventError::UnexpectedField { kind, field: "temperature" });
        }
        if !matches!(
            kind,
            EventKind::ActivityLaunched
                | EventKind::ActivityLaunchFinished
                | EventKind::ActivityLaunchCancelled
        ) {
            reject(&activity_record_proto, kind, "activity_record_proto")?;
        }
        if kind != EventKind::ReportFullyDrawn {
            reject(&timestamp_ns, kind, "timestamp_ns")?;
        }

        let event = match kind {
            EventKind::IntentStarted => AppLaunchEvent::IntentStarted {
                sequence_id,
                intent: require(intent_proto, kind, "intent_proto")?,
            },
            EventKind::IntentFailed => AppLaunchEvent::IntentFailed { sequence_id },
            EventKind::ActivityLaunched => AppLaunchEvent::ActivityLaunched {
                sequence_id,
                temperature,
                activity: require(activity_record_proto, kind, "activity_record_proto")?,
            },
            EventKind::ActivityLaunchFinished => AppLaunchEvent::ActivityLaunchFinished {
                sequence_id,
                activity: require(activity_record_proto, kind, "activity_record_proto")?,
            },
            EventKind::ActivityLaunchCancelled => AppLaunchEvent::ActivityLaunchCancelled {
                sequence_id,
                activity: activity_record_proto,
            },
            EventKind::ReportFullyDrawn => AppLaunchEvent::ReportFullyDrawn {
                sequence_id,
                timestamp_ns: require(timestamp_ns, kind, "timestamp_ns")?,
            },
        };
        Ok(event)
    }

    /// Inverse of [`AppLaunchEvent::from_parts`].
    pub fn into_parts(self) -> EventParts {
        let mut parts = EventParts::new(self.kind(), self.sequence_id());
        match self {
            AppLaunchEvent::IntentStarted { intent, .. } => parts.intent_proto = Some(intent),
            AppLaunchEvent::IntentFailed { .. } => {}
            AppLaunchEvent::ActivityLaunched { temperature, activity, .. } => {
                parts.temperature = temperature;
                parts.activity_record_proto = Some(activity);
            }
            AppLaunchEvent::ActivityLaunchFinished { activity, .. } => {
                parts.activity_record_proto = Some(activity);
            }
            AppLaunchEvent::ActivityLaunchCancelled { activity, .. } => {
                parts.activity_record_proto = activity;
            }
            AppLaunchEvent::ReportFullyDrawn { timestamp_ns, .. } => {
                parts.timestamp_ns = Some(timestamp_ns);
            }
        }
        parts
    }

    pub fn kind(&self) -> EventKind {
        match self {
            AppLaunchEvent::IntentStarted { .. } => EventKind::IntentStarted,
            AppLaunchEvent::IntentFailed { .. } => EventKind::IntentFailed,
            AppLaunchEvent::ActivityLaunched { .. } => EventKind::ActivityLaunched,
            AppLaunchEvent::ActivityLaunchFinished { .. } => EventKind::ActivityLaunchFinished,
            AppLaunchEvent::ActivityLaunchCancelled { .. } => EventKind::ActivityLaunchCancelled,
            AppLaunchEvent::ReportFullyDrawn { .. } => EventKind::ReportFullyDrawn,
        }
    }

    pub fn sequence_id(&self) -> i64 {
        match self {
            AppLaunchEvent::IntentStarted { sequence_id, .. }
            | AppLaunchEvent::IntentFailed { sequence_id }
            | AppLaunchEvent::ActivityLaunched { sequence_id, .. }
            | AppLaunchEvent::ActivityLaunchFinished { sequence_id, .. }
            | AppLaunchEvent::ActivityLaunchCancelled { sequence_id, .. }
            | AppLaunchEvent::ReportFullyDrawn { sequence_id, .. } => *sequence_id,
        }
    }

    pub fn intent_proto(&self) -> Option<&IntentProto> {
        match self {
            AppLaunchEvent::IntentStarted { intent, .. } => Some(&**intent),
            _ => None,
        }
    }

    /// `Uninitialized` for every kind except `ActivityLaunched`.
    pub fn temperature(&self) -> Temperature {
        match self {
            AppLaunchEvent::ActivityLaunched { temperature, .. } => *temperature,
            _ => Temperature::Uninitialized,
        }
    }

    pub fn activity_record_proto(&self) -> Option<&ActivityRecordProto> {
        match self {
            AppLaunchEvent::ActivityLaunched { activity, .. }
            | AppLaunchEvent::ActivityLaunchFinished { activity, .. } => Some(&**activity),
            AppLaunchEvent::ActivityLaunchCancelled { activity, .. } => activity.as_deref(),
            _ => None,
        }
    }

    pub fn timestamp_ns(&self) -> Option<i64> {
        match self {
            AppLaunchEvent::ReportFullyDrawn { timestamp_ns, .. } => Some(*timestamp_ns),
            _ => None,
        }
    }
}

impl PartialEq for AppLaunchEvent {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && self.sequence_id() == other.sequence_id()
            && proto_ptr_eq(self.intent_proto(), other.intent_proto())
            && self.temperature() == other.temperature()
            && proto_ptr_eq(self.activity_record_proto(), other.activity_record_proto())
            && self.timestamp_ns() == other.timestamp_ns()
    }
}

impl Eq for AppLaunchEvent {}

impl fmt::Display for AppLaunchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppLaunchEvent{{type={}, sequence_id={}", self.kind(), self.sequence_id())?;
        if let Some(intent) = self.intent_proto() {
            write!(f, ", intent_proto={}", intent.action)?;
        }
        if let AppLaunchEvent::ActivityLaunched { temperature, .. } = self {
            write!(f, ", temperature={}", temperature)?;
        }
        match self.activity_record_proto() {
            Some(activity) => write!(f, ", activity_record_proto={}", activity.title())?,
            None if self.kind() == EventKind::ActivityLaunchCancelled => {
                f.write_str(", activity_record_proto=(null)")?
            }
            None => {}
        }
        if let Some(timestamp_ns) = self.timestamp_ns() {
            write!(f, ", timestamp_ns={}", timestamp_ns)?;
        }
        f.write_str("}")
    }
}
