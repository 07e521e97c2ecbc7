use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::EngineConfig;
use crate::stats::{self, PlayerStats};
use crate::store;

/// The player's match accounts, starting at position `start` of their index,
/// are passed as remaining accounts in index order. Long histories are
/// summarized in runs and combined with `PlayerStats::merge`.
#[derive(Accounts)]
#[instruction(player: Pubkey)]
pub struct GetPlayerStats<'info> {
    #[account(
        seeds = [ENGINE_CONFIG_SEED],
        bump = engine_config.bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,

    /// CHECK: may not exist yet; read through the match store
    #[account(
        seeds = [PLAYER_PROFILE_SEED, player.as_ref()],
        bump,
    )]
    pub player_profile: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetPlayerStats>, player: Pubkey, start: u64) -> Result<PlayerStats> {
    let profile = store::load_profile(
        &ctx.accounts.player_profile.to_account_info(),
        ctx.program_id,
        player,
    )?;
    let rating = store::rating_of(profile.as_ref());
    let match_ids = store::match_ids_of(profile);
    let ids = store::history_slice(&match_ids, start, ctx.remaining_accounts.len())?;

    let history = store::load_matches(
        ctx.remaining_accounts,
        ctx.program_id,
        &ctx.accounts.engine_config,
        ids,
    )?;

    stats::summarize(player, rating, &history)
}
