use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct FileData {
    pub content: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl FileData {
    pub fn new(content: Vec<u8>, filename: String, mime_type: String) -> Self {
        Self {
            content,
            filename,
            mime_type,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }
}

/// Where an uploaded file ended up in the object store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredObject {
    pub object_key: String,
    pub size: u64,
    pub mime_type: String,
}
