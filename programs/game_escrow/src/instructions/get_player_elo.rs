use anchor_lang::prelude::*;

use crate::constants::*;
use crate::store;

#[derive(Accounts)]
#[instruction(player: Pubkey)]
pub struct GetPlayerElo<'info> {
    /// CHECK: may not exist yet; read through the match store
    #[account(
        seeds = [PLAYER_PROFILE_SEED, player.as_ref()],
        bump,
    )]
    pub player_profile: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetPlayerElo>, player: Pubkey) -> Result<i64> {
    let profile = store::load_profile(
        &ctx.accounts.player_profile.to_account_info(),
        ctx.program_id,
        player,
    )?;
    Ok(store::rating_of(profile.as_ref()))
}
