use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GameEscrowError;
use crate::events::ConfigUpdated;
use crate::state::EngineConfig;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [ENGINE_CONFIG_SEED],
        bump = engine_config.bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,

    #[account(
        constraint = authority.key() == engine_config.authority @ GameEscrowError::Unauthorized,
    )]
    pub authority: Signer<'info>,
}

/// Pausing only stops new matches; joins and moves keep working so escrowed
/// stakes can always settle.
pub fn handler(
    ctx: Context<UpdateConfig>,
    paused: Option<bool>,
    new_authority: Option<Pubkey>,
) -> Result<()> {
    let config = &mut ctx.accounts.engine_config;

    if let Some(paused) = paused {
        config.paused = paused;
        emit!(ConfigUpdated {
            field: "paused".to_string(),
            value: paused as u64,
        });
    }

    if let Some(new_authority) = new_authority {
        config.authority = new_authority;
        emit!(ConfigUpdated {
            field: "authority".to_string(),
            value: 0,
        });
    }

    Ok(())
}
