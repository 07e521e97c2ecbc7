use anchor_lang::prelude::*;

use crate::constants::RATING_DELTA;
use crate::errors::GameEscrowError;
use crate::state::PlayerProfile;

/// Fixed-step rating: the winner gains `RATING_DELTA`, the loser drops by the
/// same amount. Draws never reach here. Ratings are not floored.
pub fn apply_decisive_result(winner: &mut PlayerProfile, loser: &mut PlayerProfile) -> Result<()> {
    let winner_rating = winner
        .rating
        .checked_add(RATING_DELTA)
        .ok_or(GameEscrowError::Overflow)?;
    let loser_rating = loser
        .rating
        .checked_sub(RATING_DELTA)
        .ok_or(GameEscrowError::Overflow)?;

    winner.rating = winner_rating;
    loser.rating = loser_rating;

    Ok(())
}
