use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{EngineConfig, Match};
use crate::store;

/// Match accounts for ids `start..` are passed as remaining accounts, in id
/// order. Return data is capped at 1024 bytes, so large tables are read in runs.
#[derive(Accounts)]
pub struct GetMatches<'info> {
    #[account(
        seeds = [ENGINE_CONFIG_SEED],
        bump = engine_config.bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,
}

pub fn handler(ctx: Context<GetMatches>, start: u64) -> Result<Vec<Match>> {
    let engine = &ctx.accounts.engine_config;
    let ids = store::id_range(engine, start, ctx.remaining_accounts.len())?;
    store::load_matches(ctx.remaining_accounts, ctx.program_id, engine, &ids)
}
