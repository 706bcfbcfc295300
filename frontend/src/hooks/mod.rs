pub mod use_camera;
pub mod use_media_progress;

pub use use_camera::*;
pub use use_media_progress::*;
