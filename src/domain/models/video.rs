use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub object_key: String,
    pub mime_type: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// Zero-based page request over persisted videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 0;
    pub const DEFAULT_SIZE: u32 = 5;
    pub const MAX_SIZE: u32 = 100;

    /// Returns `None` when `size` is outside `1..=MAX_SIZE`.
    pub fn new(page: u32, size: u32) -> Option<Self> {
        if size == 0 || size > Self::MAX_SIZE {
            return None;
        }
        Some(Self { page, size })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            size: Self::DEFAULT_SIZE,
        }
    }
}
