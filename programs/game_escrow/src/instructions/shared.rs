use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::constants::*;
use crate::state::PlayerProfile;
use crate::store;

/// Reallocates `profile` to hold `match_count` ids, with `payer` covering the
/// extra rent.
fn grow_profile<'info>(
    profile: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    match_count: usize,
) -> Result<()> {
    let new_len = PlayerProfile::space(match_count);
    if profile.data_len() >= new_len {
        return Ok(());
    }

    top_up_rent(profile, payer, system_program, new_len)?;
    profile.realloc(new_len, false)?;
    Ok(())
}

/// Appends `match_id` to `player`'s index. The profile PDA is created on the
/// player's first match and grows by one id on every later one, so its size
/// never matches a fixed `space`.
pub fn register_match<'info>(
    profile_info: &AccountInfo<'info>,
    program_id: &Pubkey,
    player: Pubkey,
    bump: u8,
    match_id: u64,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    let mut profile = match store::load_profile(profile_info, program_id, player)? {
        Some(profile) => profile,
        None => {
            create_profile(profile_info, program_id, player, bump, payer, system_program)?;
            let mut profile = PlayerProfile::default();
            profile.ensure_initialized(player, bump);
            profile
        }
    };

    profile.record_match(match_id);
    grow_profile(profile_info, payer, system_program, profile.match_ids.len())?;
    store::save_profile(profile_info, &profile)
}

fn create_profile<'info>(
    profile: &AccountInfo<'info>,
    program_id: &Pubkey,
    player: Pubkey,
    bump: u8,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    let bump_seed = [bump];
    let profile_seeds: &[&[u8]] = &[PLAYER_PROFILE_SEED, player.as_ref(), &bump_seed];
    let signer_seeds = [profile_seeds];
    let space = PlayerProfile::space(0);

    if profile.lamports() == 0 {
        let lamports = Rent::get()?.minimum_balance(space);
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: profile.clone(),
                },
                &signer_seeds,
            ),
            lamports,
            space as u64,
            program_id,
        );
    }

    // create_account refuses an address that already holds lamports.
    top_up_rent(profile, payer, system_program, space)?;
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: profile.clone(),
            },
            &signer_seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: profile.clone(),
            },
            &signer_seeds,
        ),
        program_id,
    )
}

fn top_up_rent<'info>(
    account: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    len: usize,
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(len);
    let shortfall = required.saturating_sub(account.lamports());
    if shortfall == 0 {
        return Ok(());
    }

    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            Transfer {
                from: payer.clone(),
                to: account.clone(),
            },
        ),
        shortfall,
    )
}
