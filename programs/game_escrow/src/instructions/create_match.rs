use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GameEscrowError;
use crate::escrow;
use crate::events::MatchCreated;
use crate::instructions::shared;
use crate::state::{EngineConfig, Match};

#[derive(Accounts)]
pub struct CreateMatch<'info> {
    #[account(
        mut,
        seeds = [ENGINE_CONFIG_SEED],
        bump = engine_config.bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,

    #[account(
        init,
        payer = creator,
        space = Match::LEN,
        seeds = [MATCH_SEED, engine_config.match_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub game_match: Account<'info, Match>,

    /// CHECK: created on the creator's first match and grown by one id per
    /// match; read and written through the match store
    #[account(
        mut,
        seeds = [PLAYER_PROFILE_SEED, creator.key().as_ref()],
        bump,
    )]
    pub creator_profile: UncheckedAccount<'info>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateMatch>, stake: u64) -> Result<u64> {
    require!(!ctx.accounts.engine_config.paused, GameEscrowError::EnginePaused);
    require!(stake > 0, GameEscrowError::InvalidBet);

    let match_id = ctx.accounts.engine_config.allocate_match_id()?;
    let creator = ctx.accounts.creator.key();
    ctx.accounts
        .game_match
        .open(match_id, creator, stake, ctx.bumps.game_match)?;

    let creator_info = ctx.accounts.creator.to_account_info();
    let system_info = ctx.accounts.system_program.to_account_info();
    escrow::deposit(
        &creator_info,
        &ctx.accounts.game_match.to_account_info(),
        &system_info,
        stake,
    )?;

    shared::register_match(
        &ctx.accounts.creator_profile.to_account_info(),
        ctx.program_id,
        creator,
        ctx.bumps.creator_profile,
        match_id,
        &creator_info,
        &system_info,
    )?;

    emit!(MatchCreated {
        match_id,
        creator,
        bet_amount: stake,
    });

    Ok(match_id)
}
