pub mod constants;
pub mod result_store;
pub mod shared_bucket_list;
pub mod shared_countdown;
pub mod shared_journey;
pub mod shared_media;
pub mod shared_puzzle_game;
pub mod shared_scanner;
pub mod shared_scratch_cards;
pub mod shared_wheel_game;
