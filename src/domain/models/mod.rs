pub mod event_queue;
pub mod file;
pub mod reaction;
pub mod short_video;
pub mod video;
