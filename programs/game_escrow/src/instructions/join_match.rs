use anchor_lang::prelude::*;

use crate::constants::*;
use crate::escrow;
use crate::events::{MatchJoined, MatchStarted};
use crate::instructions::shared;
use crate::state::EngineConfig;
use crate::store;

#[derive(Accounts)]
#[instruction(match_id: u64)]
pub struct JoinMatch<'info> {
    #[account(
        seeds = [ENGINE_CONFIG_SEED],
        bump = engine_config.bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,

    /// CHECK: loaded and verified by the match store
    #[account(mut)]
    pub game_match: UncheckedAccount<'info>,

    /// CHECK: created on the joiner's first match and grown by one id per
    /// match; read and written through the match store
    #[account(
        mut,
        seeds = [PLAYER_PROFILE_SEED, joiner.key().as_ref()],
        bump,
    )]
    pub joiner_profile: UncheckedAccount<'info>,

    #[account(mut)]
    pub joiner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<JoinMatch>, match_id: u64, stake: u64) -> Result<()> {
    let match_info = ctx.accounts.game_match.to_account_info();
    let mut game = store::load_match(
        &match_info,
        ctx.program_id,
        &ctx.accounts.engine_config,
        match_id,
    )?;

    let joiner = ctx.accounts.joiner.key();
    game.join(joiner, stake)?;

    let joiner_info = ctx.accounts.joiner.to_account_info();
    let system_info = ctx.accounts.system_program.to_account_info();
    escrow::deposit(&joiner_info, &match_info, &system_info, stake)?;
    store::save_match(&match_info, &game)?;

    shared::register_match(
        &ctx.accounts.joiner_profile.to_account_info(),
        ctx.program_id,
        joiner,
        ctx.bumps.joiner_profile,
        match_id,
        &joiner_info,
        &system_info,
    )?;

    emit!(MatchJoined {
        match_id,
        player: joiner,
    });
    emit!(MatchStarted { match_id });

    Ok(())
}
