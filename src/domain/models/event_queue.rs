// No producer in this service yet; the recommendation pipeline consumes it.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Recommendation signal correlating a member with a category at a point in time.
///
/// `last_updated_at` carries the timestamp as lowercase hex of its epoch
/// milliseconds so entries sort and compare as plain strings in the queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventQueue {
    pub member_id: i64,
    pub category_id: i64,
    pub last_updated_at: String,
}

impl EventQueue {
    pub fn of(member_id: i64, category_id: i64, last_updated_at: DateTime<Utc>) -> Self {
        Self {
            member_id,
            category_id,
            last_updated_at: encode_timestamp(last_updated_at),
        }
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        decode_timestamp(&self.last_updated_at)
    }
}

fn encode_timestamp(at: DateTime<Utc>) -> String {
    format!("{:x}", at.timestamp_millis())
}

fn decode_timestamp(encoded: &str) -> Option<DateTime<Utc>> {
    let millis = i64::from_str_radix(encoded, 16).ok()?;
    Utc.timestamp_millis_opt(millis).single()
}
