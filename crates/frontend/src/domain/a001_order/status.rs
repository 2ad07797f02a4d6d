//! Line-item status codes as reported by the lookup service

use serde::{Serialize, Serializer};

/// Known line-item statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemStatus {
    Completed,
    Processing,
    Cancelled,
    Unknown,
}

impl ItemStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            202 => ItemStatus::Completed,
            200 => ItemStatus::Processing,
            400 => ItemStatus::Cancelled,
            _ => ItemStatus::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Completed => "Completed",
            ItemStatus::Processing => "Processing",
            ItemStatus::Cancelled => "Cancelled",
            ItemStatus::Unknown => "Unknown",
        }
    }

    /// An absent code is `Unknown`
    pub fn from_opt(code: Option<i64>) -> Self {
        code.map_or(ItemStatus::Unknown, Self::from_code)
    }
}

/// Serialized as its label
impl Serialize for ItemStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Human-readable label of a status code; total over `i64`.
pub fn classify(code: i64) -> &'static str {
    ItemStatus::from_code(code).label()
}
