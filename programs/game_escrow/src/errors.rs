use anchor_lang::prelude::*;

#[error_code]
pub enum GameEscrowError {
    #[msg("Stake must be greater than zero")]
    InvalidBet,

    #[msg("Stake must equal the match bet amount exactly")]
    IncorrectBetAmount,

    #[msg("Cell is out of range or already taken")]
    InvalidMove,

    #[msg("Signer is not a participant of this match")]
    NotParticipant,

    #[msg("It is not this player's turn")]
    NotPlayerTurn,

    #[msg("The match creator cannot join their own match")]
    CreatorCannotJoin,

    #[msg("Unauthorized: only the engine authority can perform this action")]
    Unauthorized,

    #[msg("Match is not in the expected state")]
    WrongState,

    #[msg("Match does not exist")]
    MatchNotFound,

    #[msg("Match creation is paused")]
    EnginePaused,

    #[msg("Settlement payouts do not add up to the escrowed amount")]
    EscrowMismatch,

    #[msg("Escrow for this match has already been released")]
    EscrowAlreadyReleased,

    #[msg("Match account holds less than the payout")]
    InsufficientEscrow,

    #[msg("Player accounts do not belong to this match")]
    PlayerAccountMismatch,

    #[msg("Supplied match accounts do not follow the expected ids")]
    HistoryMismatch,

    #[msg("Account is not a player profile of this program")]
    InvalidProfileAccount,

    #[msg("Arithmetic overflow")]
    Overflow,
}
