pub mod bucket_list;
pub mod cassette;
pub mod finale;
pub mod puzzle;
pub mod scanner;
pub mod scratch_cards;
pub mod spin_wheel;
pub mod splash;
pub mod time_since_met;
pub mod video_songs;
pub mod voice_note;
