use anchor_lang::prelude::*;

use crate::constants::*;
use crate::store;

#[derive(Accounts)]
#[instruction(player: Pubkey)]
pub struct GetPlayerMatchIds<'info> {
    /// CHECK: may not exist yet; read through the match store
    #[account(
        seeds = [PLAYER_PROFILE_SEED, player.as_ref()],
        bump,
    )]
    pub player_profile: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetPlayerMatchIds>, player: Pubkey, start: u64) -> Result<Vec<u64>> {
    let profile = store::load_profile(
        &ctx.accounts.player_profile.to_account_info(),
        ctx.program_id,
        player,
    )?;
    let match_ids = store::match_ids_of(profile);
    Ok(store::id_page(&match_ids, start)?.to_vec())
}
