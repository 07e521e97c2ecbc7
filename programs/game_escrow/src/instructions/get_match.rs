use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{EngineConfig, Match};
use crate::store;

#[derive(Accounts)]
#[instruction(match_id: u64)]
pub struct GetMatch<'info> {
    #[account(
        seeds = [ENGINE_CONFIG_SEED],
        bump = engine_config.bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,

    /// CHECK: loaded and verified by the match store
    pub game_match: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetMatch>, match_id: u64) -> Result<Match> {
    store::load_match(
        &ctx.accounts.game_match.to_account_info(),
        ctx.program_id,
        &ctx.accounts.engine_config,
        match_id,
    )
}
