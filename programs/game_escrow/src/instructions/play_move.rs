use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GameEscrowError;
use crate::escrow::Settlement;
use crate::events::{MatchFinished, MovePlayed};
use crate::rating;
use crate::state::{EngineConfig, Match, MoveOutcome, PlayerProfile};
use crate::store;

#[derive(Accounts)]
#[instruction(match_id: u64)]
pub struct PlayMove<'info> {
    #[account(
        seeds = [ENGINE_CONFIG_SEED],
        bump = engine_config.bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,

    /// CHECK: loaded and verified by the match store
    #[account(mut)]
    pub game_match: UncheckedAccount<'info>,

    /// CHECK: must be the match's player1; receives winnings or a refund
    #[account(mut)]
    pub player_one: UncheckedAccount<'info>,

    /// CHECK: must be the match's player2; receives winnings or a refund
    #[account(mut)]
    pub player_two: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [PLAYER_PROFILE_SEED, player_one.key().as_ref()],
        bump = player_one_profile.bump,
    )]
    pub player_one_profile: Account<'info, PlayerProfile>,

    #[account(
        mut,
        seeds = [PLAYER_PROFILE_SEED, player_two.key().as_ref()],
        bump = player_two_profile.bump,
    )]
    pub player_two_profile: Account<'info, PlayerProfile>,

    #[account(mut)]
    pub player: Signer<'info>,
}

pub fn handler(ctx: Context<PlayMove>, match_id: u64, cell: u8) -> Result<()> {
    let match_info = ctx.accounts.game_match.to_account_info();
    let mut game = store::load_match(
        &match_info,
        ctx.program_id,
        &ctx.accounts.engine_config,
        match_id,
    )?;

    let mover = ctx.accounts.player.key();
    game.check_move(mover, cell)?;
    require_keys_eq!(
        ctx.accounts.player_one.key(),
        game.player1,
        GameEscrowError::PlayerAccountMismatch
    );
    require_keys_eq!(
        ctx.accounts.player_two.key(),
        game.player2,
        GameEscrowError::PlayerAccountMismatch
    );

    let outcome = game.play(mover, cell)?;
    match outcome {
        MoveOutcome::Continued { .. } => {
            store::save_match(&match_info, &game)?;
            emit!(MovePlayed {
                match_id,
                player: mover,
                cell,
            });
        }
        MoveOutcome::Won { winner, pot, .. } => {
            settle(ctx.accounts, &match_info, &mut game, &outcome)?;

            let (winner_profile, loser_profile) = if winner == game.player1 {
                (
                    &mut ctx.accounts.player_one_profile,
                    &mut ctx.accounts.player_two_profile,
                )
            } else {
                (
                    &mut ctx.accounts.player_two_profile,
                    &mut ctx.accounts.player_one_profile,
                )
            };
            rating::apply_decisive_result(winner_profile, loser_profile)?;

            msg!("match {} won by {}, pot {}", match_id, winner, pot);
            emit!(MatchFinished {
                match_id,
                winner,
                is_draw: false,
                pot,
            });
        }
        MoveOutcome::Drawn { pot, .. } => {
            settle(ctx.accounts, &match_info, &mut game, &outcome)?;

            msg!("match {} drawn, stakes refunded", match_id);
            emit!(MatchFinished {
                match_id,
                winner: NO_WINNER,
                is_draw: true,
                pot,
            });
        }
    }

    Ok(())
}

/// Finished is written to the match account before any lamport leaves it.
fn settle<'info>(
    accounts: &PlayMove<'info>,
    match_info: &AccountInfo<'info>,
    game: &mut Match,
    outcome: &MoveOutcome,
) -> Result<()> {
    let settlement = Settlement::release(game, outcome)?;
    store::save_match(match_info, game)?;
    settlement.execute(
        match_info,
        &[
            accounts.player_one.to_account_info(),
            accounts.player_two.to_account_info(),
        ],
    )
}
