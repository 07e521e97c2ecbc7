use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod escrow;
pub mod events;
pub mod instructions;
pub mod rating;
pub mod state;
pub mod stats;
pub mod store;

#[cfg(test)]
mod test_helpers;

use instructions::*;
use state::Match;
use stats::PlayerStats;
use store::PlayerHistory;

declare_id!("9J4zNQXvTHyCVi3mGqPeQDgkvGGJvgDiAkV4ZBa3EBtk");

#[program]
pub mod game_escrow {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        paused: Option<bool>,
        new_authority: Option<Pubkey>,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, paused, new_authority)
    }

    pub fn create_match(ctx: Context<CreateMatch>, stake: u64) -> Result<u64> {
        instructions::create_match::handler(ctx, stake)
    }

    pub fn join_match(ctx: Context<JoinMatch>, match_id: u64, stake: u64) -> Result<()> {
        instructions::join_match::handler(ctx, match_id, stake)
    }

    pub fn play_move(ctx: Context<PlayMove>, match_id: u64, cell: u8) -> Result<()> {
        instructions::play_move::handler(ctx, match_id, cell)
    }

    pub fn get_match(ctx: Context<GetMatch>, match_id: u64) -> Result<Match> {
        instructions::get_match::handler(ctx, match_id)
    }

    pub fn get_matches(ctx: Context<GetMatches>, start: u64) -> Result<Vec<Match>> {
        instructions::get_matches::handler(ctx, start)
    }

    pub fn get_player_match_ids(
        ctx: Context<GetPlayerMatchIds>,
        player: Pubkey,
        start: u64,
    ) -> Result<Vec<u64>> {
        instructions::get_player_match_ids::handler(ctx, player, start)
    }

    pub fn get_player_history(
        ctx: Context<GetPlayerHistory>,
        player: Pubkey,
        start: u64,
    ) -> Result<PlayerHistory> {
        instructions::get_player_history::handler(ctx, player, start)
    }

    pub fn get_player_elo(ctx: Context<GetPlayerElo>, player: Pubkey) -> Result<i64> {
        instructions::get_player_elo::handler(ctx, player)
    }

    pub fn get_player_stats(
        ctx: Context<GetPlayerStats>,
        player: Pubkey,
        start: u64,
    ) -> Result<PlayerStats> {
        instructions::get_player_stats::handler(ctx, player, start)
    }
}
