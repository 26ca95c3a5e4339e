pub mod reaction_dto;
pub mod video_dto;
pub mod youtube_dto;
