use anchor_lang::prelude::*;

#[event]
pub struct MatchCreated {
    pub match_id: u64,
    pub creator: Pubkey,
    pub bet_amount: u64,
}

#[event]
pub struct MatchJoined {
    pub match_id: u64,
    pub player: Pubkey,
}

#[event]
pub struct MatchStarted {
    pub match_id: u64,
}

#[event]
pub struct MovePlayed {
    pub match_id: u64,
    pub player: Pubkey,
    pub cell: u8,
}

/// `winner` is `NO_WINNER` when `is_draw` is set.
#[event]
pub struct MatchFinished {
    pub match_id: u64,
    pub winner: Pubkey,
    pub is_draw: bool,
    pub pot: u64,
}

#[event]
pub struct ConfigUpdated {
    pub field: String,
    pub value: u64,
}
