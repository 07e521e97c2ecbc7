use anchor_lang::prelude::*;

use crate::errors::GameEscrowError;

#[account]
#[derive(Default, Debug)]
pub struct EngineConfig {
    pub authority: Pubkey,
    pub match_count: u64,
    pub paused: bool,
    pub bump: u8,
}

impl EngineConfig {
    pub const LEN: usize = 8  // discriminator
        + 32  // authority
        + 8   // match_count
        + 1   // paused
        + 1;  // bump

    /// Hands out the next match id. Ids are dense and never reused.
    pub fn allocate_match_id(&mut self) -> Result<u64> {
        let id = self.match_count;
        self.match_count = id.checked_add(1).ok_or(GameEscrowError::Overflow)?;
        Ok(id)
    }

    pub fn contains(&self, match_id: u64) -> bool {
        match_id < self.match_count
    }
}
