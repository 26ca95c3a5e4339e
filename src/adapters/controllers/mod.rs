pub mod health_controller;
pub mod reaction_controller;
pub mod video_controller;
pub mod youtube_controller;
