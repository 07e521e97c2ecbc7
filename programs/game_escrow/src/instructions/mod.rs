pub mod create_match;
pub mod get_match;
pub mod get_matches;
pub mod get_player_elo;
pub mod get_player_history;
pub mod get_player_match_ids;
pub mod get_player_stats;
pub mod initialize;
pub mod join_match;
pub mod play_move;
pub mod shared;
pub mod update_config;

pub use create_match::*;
pub use get_match::*;
pub use get_matches::*;
pub use get_player_elo::*;
pub use get_player_history::*;
pub use get_player_match_ids::*;
pub use get_player_stats::*;
pub use initialize::*;
pub use join_match::*;
pub use play_move::*;
pub use update_config::*;
