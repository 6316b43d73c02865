//! Event row and the fixed kind enumeration

use serde::{Deserialize, Serialize};

/// A recorded lifecycle event. Append-only: events are facts on a timeline,
/// not state transitions enforced by the service.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub order_code: String,
    pub kind: String,
    /// Unix millis
    pub created_at: i64,
}

/// The fixed enumeration of event kinds, stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Return,
    Collect,
    InstalmentCancel,
    Buyback,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        Self::Return,
        Self::Collect,
        Self::InstalmentCancel,
        Self::Buyback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Return => "RETURN",
            Self::Collect => "COLLECT",
            Self::InstalmentCancel => "INSTALMENT_CANCEL",
            Self::Buyback => "BUYBACK",
        }
    }

    /// Parse the wire representation; `None` for anything outside the enumeration
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.as_str()).collect()
    }
}
