use anchor_lang::prelude::*;

use super::board::{evaluate, BoardStatus, Cell};
use crate::constants::*;
use crate::errors::GameEscrowError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum MatchState {
    #[default]
    WaitingOpponent,
    InProgress,
    Finished,
}

/// What a successful move did to the match. Terminal outcomes carry the
/// amounts settlement has to move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Continued { next_turn: Pubkey },
    Won { winner: Pubkey, loser: Pubkey, pot: u64 },
    Drawn { refund: u64, pot: u64 },
}

impl MoveOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continued { .. })
    }
}

/// One staked game. The account itself custodies the stakes.
#[account]
#[derive(Default, Debug)]
pub struct Match {
    pub id: u64,
    pub player1: Pubkey,
    pub player2: Pubkey,
    pub bet_amount: u64,
    pub state: MatchState,
    pub board: [Cell; BOARD_CELLS],
    pub current_turn: Pubkey,
    pub winner: Pubkey,
    pub moves: u8,
    pub escrowed: u64,
    pub bump: u8,
}

impl Match {
    pub const LEN: usize = 8   // discriminator
        + 8    // id
        + 32   // player1
        + 32   // player2
        + 8    // bet_amount
        + 1    // state
        + BOARD_CELLS // board
        + 32   // current_turn
        + 32   // winner
        + 1    // moves
        + 8    // escrowed
        + 1;   // bump

    pub fn open(&mut self, id: u64, creator: Pubkey, stake: u64, bump: u8) -> Result<()> {
        require!(stake > 0, GameEscrowError::InvalidBet);

        self.id = id;
        self.player1 = creator;
        self.player2 = NO_WINNER;
        self.bet_amount = stake;
        self.state = MatchState::WaitingOpponent;
        self.board = [Cell::Empty; BOARD_CELLS];
        self.current_turn = NO_WINNER;
        self.winner = NO_WINNER;
        self.moves = 0;
        self.escrowed = stake;
        self.bump = bump;

        Ok(())
    }

    pub fn join(&mut self, joiner: Pubkey, stake: u64) -> Result<()> {
        require!(
            self.state == MatchState::WaitingOpponent,
            GameEscrowError::WrongState
        );
        require_keys_neq!(joiner, self.player1, GameEscrowError::CreatorCannotJoin);
        require!(stake == self.bet_amount, GameEscrowError::IncorrectBetAmount);

        let escrowed = self
            .escrowed
            .checked_add(stake)
            .ok_or(GameEscrowError::Overflow)?;

        self.player2 = joiner;
        self.escrowed = escrowed;
        self.state = MatchState::InProgress;
        self.current_turn = self.player1;

        Ok(())
    }

    pub fn is_participant(&self, player: Pubkey) -> bool {
        player != NO_WINNER && (player == self.player1 || player == self.player2)
    }

    pub fn opponent_of(&self, player: Pubkey) -> Pubkey {
        if player == self.player1 {
            self.player2
        } else {
            self.player1
        }
    }

    pub fn pot(&self) -> Result<u64> {
        Ok(self
            .bet_amount
            .checked_mul(2)
            .ok_or(GameEscrowError::Overflow)?)
    }

    /// Validates a move without touching the match, in precedence order.
    pub fn check_move(&self, mover: Pubkey, cell: u8) -> Result<Cell> {
        require!(self.is_participant(mover), GameEscrowError::NotParticipant);
        require!(
            self.state == MatchState::InProgress,
            GameEscrowError::WrongState
        );
        require_keys_eq!(mover, self.current_turn, GameEscrowError::NotPlayerTurn);

        let index = cell as usize;
        require!(
            index < BOARD_CELLS && self.board[index] == Cell::Empty,
            GameEscrowError::InvalidMove
        );

        Ok(if mover == self.player1 {
            Cell::Player1
        } else {
            Cell::Player2
        })
    }

    pub fn play(&mut self, mover: Pubkey, cell: u8) -> Result<MoveOutcome> {
        let mark = self.check_move(mover, cell)?;
        let pot = self.pot()?;

        self.board[cell as usize] = mark;
        self.moves += 1;

        let outcome = match evaluate(&self.board) {
            BoardStatus::Winner(_) => {
                let loser = self.opponent_of(mover);
                self.finish(mover);
                MoveOutcome::Won {
                    winner: mover,
                    loser,
                    pot,
                }
            }
            BoardStatus::Draw => {
                self.finish(NO_WINNER);
                MoveOutcome::Drawn {
                    refund: self.bet_amount,
                    pot,
                }
            }
            BoardStatus::Ongoing => {
                let next_turn = self.opponent_of(mover);
                self.current_turn = next_turn;
                MoveOutcome::Continued { next_turn }
            }
        };

        Ok(outcome)
    }

    fn finish(&mut self, winner: Pubkey) {
        self.state = MatchState::Finished;
        self.winner = winner;
        self.current_turn = NO_WINNER;
    }

    pub fn is_draw(&self) -> bool {
        self.state == MatchState::Finished && self.winner == NO_WINNER
    }

    pub fn filled_cells(&self) -> usize {
        self.board.iter().filter(|cell| **cell != Cell::Empty).count()
    }
}
