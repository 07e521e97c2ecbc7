use anchor_lang::prelude::*;

use crate::constants::NO_WINNER;
use crate::errors::GameEscrowError;
use crate::state::{Match, MatchState};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub in_progress: u32,
    pub total_matches: u32,
    pub finished_matches: u32,
    /// Wins over finished matches, in basis points.
    pub win_rate_bps: u16,
    pub total_stake: u64,
    pub rating: i64,
}

pub fn summarize(player: Pubkey, rating: i64, history: &[Match]) -> Result<PlayerStats> {
    let mut stats = PlayerStats {
        rating,
        ..PlayerStats::default()
    };

    for game in history {
        stats.total_stake = stats
            .total_stake
            .checked_add(game.bet_amount)
            .ok_or(GameEscrowError::Overflow)?;

        if game.state != MatchState::Finished {
            stats.in_progress += 1;
        } else if game.winner == NO_WINNER {
            stats.draws += 1;
        } else if game.winner == player {
            stats.wins += 1;
        } else {
            stats.losses += 1;
        }
    }

    stats.finished_matches = stats.wins + stats.losses + stats.draws;
    stats.total_matches = stats.finished_matches + stats.in_progress;
    stats.refresh_win_rate();

    Ok(stats)
}

impl PlayerStats {
    /// Folds in the summary of a further run of the same player's history.
    pub fn merge(&mut self, page: &PlayerStats) -> Result<()> {
        fn add(a: u32, b: u32) -> Result<u32> {
            a.checked_add(b)
                .ok_or_else(|| error!(GameEscrowError::Overflow))
        }

        self.wins = add(self.wins, page.wins)?;
        self.losses = add(self.losses, page.losses)?;
        self.draws = add(self.draws, page.draws)?;
        self.in_progress = add(self.in_progress, page.in_progress)?;
        self.total_matches = add(self.total_matches, page.total_matches)?;
        self.finished_matches = add(self.finished_matches, page.finished_matches)?;
        self.total_stake = self
            .total_stake
            .checked_add(page.total_stake)
            .ok_or(GameEscrowError::Overflow)?;
        self.rating = page.rating;
        self.refresh_win_rate();

        Ok(())
    }

    fn refresh_win_rate(&mut self) {
        self.win_rate_bps = match self.finished_matches {
            0 => 0,
            finished => (self.wins as u64 * 10_000 / finished as u64) as u16,
        };
    }
}
