use anchor_lang::prelude::*;

use crate::constants::DEFAULT_RATING;

/// Per-wallet rating plus the ids of every match the wallet created or
/// joined, earliest first. Grows by one `u64` per match.
#[account]
#[derive(Default, Debug)]
pub struct PlayerProfile {
    pub player: Pubkey,
    pub rating: i64,
    pub match_ids: Vec<u64>,
    pub bump: u8,
}

impl PlayerProfile {
    pub const BASE_LEN: usize = 8 // discriminator
        + 32  // player
        + 8   // rating
        + 4   // match_ids length prefix
        + 1;  // bump

    pub fn space(match_count: usize) -> usize {
        Self::BASE_LEN + match_count * 8
    }

    /// True until `ensure_initialized` has bound the profile to a wallet.
    pub fn is_fresh(&self) -> bool {
        self.player == Pubkey::default()
    }

    pub fn ensure_initialized(&mut self, player: Pubkey, bump: u8) {
        if self.is_fresh() {
            self.player = player;
            self.rating = DEFAULT_RATING;
            self.match_ids = Vec::new();
            self.bump = bump;
        }
    }

    pub fn record_match(&mut self, match_id: u64) {
        self.match_ids.push(match_id);
    }
}
