use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::GameEscrowError;
use crate::state::{Match, MatchState, MoveOutcome};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Payout {
    pub recipient: Pubkey,
    pub amount: u64,
}

/// The lamport movements owed when a match finishes. Only a terminal
/// `MoveOutcome` produces one, and producing it empties the match escrow.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Settlement {
    pub payouts: Vec<Payout>,
}

impl Settlement {
    pub fn release(game: &mut Match, outcome: &MoveOutcome) -> Result<Settlement> {
        require!(game.state == MatchState::Finished, GameEscrowError::WrongState);
        require!(game.escrowed > 0, GameEscrowError::EscrowAlreadyReleased);

        let payouts = match *outcome {
            MoveOutcome::Won { winner, pot, .. } => vec![Payout {
                recipient: winner,
                amount: pot,
            }],
            // Each side gets its own stake back, not half the pot.
            MoveOutcome::Drawn { refund, .. } => vec![
                Payout {
                    recipient: game.player1,
                    amount: refund,
                },
                Payout {
                    recipient: game.player2,
                    amount: refund,
                },
            ],
            MoveOutcome::Continued { .. } => return err!(GameEscrowError::WrongState),
        };

        let settlement = Settlement { payouts };
        require!(
            settlement.total()? == game.escrowed,
            GameEscrowError::EscrowMismatch
        );
        game.escrowed = 0;

        Ok(settlement)
    }

    pub fn total(&self) -> Result<u64> {
        self.payouts.iter().try_fold(0u64, |sum, payout| {
            sum.checked_add(payout.amount)
                .ok_or_else(|| error!(GameEscrowError::Overflow))
        })
    }

    /// Moves every payout out of `escrow`. All recipients and the escrow
    /// balance are checked before the first lamport moves.
    pub fn execute<'info>(
        &self,
        escrow: &AccountInfo<'info>,
        recipients: &[AccountInfo<'info>],
    ) -> Result<()> {
        let mut targets = Vec::with_capacity(self.payouts.len());
        for payout in &self.payouts {
            let recipient = recipients
                .iter()
                .find(|info| *info.key == payout.recipient)
                .ok_or(GameEscrowError::PlayerAccountMismatch)?;
            targets.push((recipient, payout.amount));
        }
        require!(
            escrow.lamports() >= self.total()?,
            GameEscrowError::InsufficientEscrow
        );

        for (recipient, amount) in targets {
            pay_out(escrow, recipient, amount)?;
        }

        Ok(())
    }
}

/// Stake intake: a plain system transfer from the signer into the match account.
pub fn deposit<'info>(
    from: &AccountInfo<'info>,
    escrow: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            system_program::Transfer {
                from: from.clone(),
                to: escrow.clone(),
            },
        ),
        amount,
    )
}

/// Debits a program-owned escrow account directly.
pub fn pay_out(escrow: &AccountInfo, recipient: &AccountInfo, amount: u64) -> Result<()> {
    let remaining = escrow
        .lamports()
        .checked_sub(amount)
        .ok_or(GameEscrowError::InsufficientEscrow)?;
    let credited = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(GameEscrowError::Overflow)?;

    **escrow.try_borrow_mut_lamports()? = remaining;
    **recipient.try_borrow_mut_lamports()? = credited;

    Ok(())
}
