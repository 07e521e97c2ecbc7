use anchor_lang::prelude::*;

pub const ENGINE_CONFIG_SEED: &[u8] = b"engine";
pub const MATCH_SEED: &[u8] = b"match";
pub const PLAYER_PROFILE_SEED: &[u8] = b"player";

pub const BOARD_CELLS: usize = 9;
pub const DEFAULT_RATING: i64 = 1000;
pub const RATING_DELTA: i64 = 25;

/// Stand-in for "nobody": unset `player2`/`current_turn`, and the winner of a draw.
pub const NO_WINNER: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// Return data is capped at 1024 bytes: a 4-byte length prefix plus 127 ids.
pub const MATCH_IDS_PER_PAGE: usize = 127;
