pub mod board;
pub mod engine_config;
pub mod game_match;
pub mod player_profile;

pub use board::*;
pub use engine_config::*;
pub use game_match::*;
pub use player_profile::*;
