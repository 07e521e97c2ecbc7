use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::EngineConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = EngineConfig::LEN,
        seeds = [ENGINE_CONFIG_SEED],
        bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.engine_config;
    config.authority = ctx.accounts.authority.key();
    config.match_count = 0;
    config.paused = false;
    config.bump = ctx.bumps.engine_config;

    Ok(())
}
