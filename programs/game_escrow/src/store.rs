use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GameEscrowError;
use crate::state::{EngineConfig, Match, PlayerProfile};

/// A participant's matches and their ids, index-aligned.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct PlayerHistory {
    pub matches: Vec<Match>,
    pub ids: Vec<u64>,
}

/// Reads the match with `match_id` out of `info`, refusing anything that is not
/// the program's match PDA for that id.
pub fn load_match(
    info: &AccountInfo,
    program_id: &Pubkey,
    engine: &EngineConfig,
    match_id: u64,
) -> Result<Match> {
    require!(engine.contains(match_id), GameEscrowError::MatchNotFound);
    require!(
        info.owner == program_id && !info.data_is_empty(),
        GameEscrowError::MatchNotFound
    );

    let game = {
        let mut data: &[u8] = &info.try_borrow_data()?;
        Match::try_deserialize(&mut data)?
    };
    require!(game.id == match_id, GameEscrowError::MatchNotFound);

    let expected = Pubkey::create_program_address(
        &[MATCH_SEED, &match_id.to_le_bytes(), &[game.bump]],
        program_id,
    )
    .map_err(|_| error!(GameEscrowError::MatchNotFound))?;
    require_keys_eq!(expected, *info.key, GameEscrowError::MatchNotFound);

    Ok(game)
}

pub fn save_match(info: &AccountInfo, game: &Match) -> Result<()> {
    write_account(info, game)
}

/// The account must already be sized for `profile`.
pub fn save_profile(info: &AccountInfo, profile: &PlayerProfile) -> Result<()> {
    write_account(info, profile)
}

fn write_account<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let dst: &mut [u8] = &mut data;
    let mut writer = std::io::Cursor::new(dst);
    value.try_serialize(&mut writer)
}

/// Loads `infos` as the matches with `ids`, in order.
pub fn load_matches(
    infos: &[AccountInfo],
    program_id: &Pubkey,
    engine: &EngineConfig,
    ids: &[u64],
) -> Result<Vec<Match>> {
    require!(infos.len() == ids.len(), GameEscrowError::HistoryMismatch);
    infos
        .iter()
        .zip(ids)
        .map(|(info, id)| load_match(info, program_id, engine, *id))
        .collect()
}

/// Ids `start..start + len`, every one of which must already exist.
pub fn id_range(engine: &EngineConfig, start: u64, len: usize) -> Result<Vec<u64>> {
    let end = start
        .checked_add(len as u64)
        .ok_or(GameEscrowError::Overflow)?;
    require!(end <= engine.match_count, GameEscrowError::MatchNotFound);
    Ok((start..end).collect())
}

/// The slice of a participant's index that `len` supplied accounts starting at
/// `start` must correspond to.
pub fn history_slice(match_ids: &[u64], start: u64, len: usize) -> Result<&[u64]> {
    let start = usize::try_from(start).map_err(|_| error!(GameEscrowError::HistoryMismatch))?;
    let end = start
        .checked_add(len)
        .ok_or(GameEscrowError::HistoryMismatch)?;
    match match_ids.get(start..end) {
        Some(ids) => Ok(ids),
        None => err!(GameEscrowError::HistoryMismatch),
    }
}

/// Up to `MATCH_IDS_PER_PAGE` ids from position `start` of a participant's
/// index. `start == len` is an empty page.
pub fn id_page(match_ids: &[u64], start: u64) -> Result<&[u64]> {
    let start = usize::try_from(start).map_err(|_| error!(GameEscrowError::HistoryMismatch))?;
    require!(start <= match_ids.len(), GameEscrowError::HistoryMismatch);
    let end = match_ids.len().min(start + MATCH_IDS_PER_PAGE);
    Ok(&match_ids[start..end])
}

/// `None` when the participant has never created or joined a match.
pub fn load_profile(
    info: &AccountInfo,
    program_id: &Pubkey,
    player: Pubkey,
) -> Result<Option<PlayerProfile>> {
    if info.data_is_empty() {
        return Ok(None);
    }
    require!(info.owner == program_id, GameEscrowError::InvalidProfileAccount);

    let profile = {
        let mut data: &[u8] = &info.try_borrow_data()?;
        PlayerProfile::try_deserialize(&mut data)?
    };
    require_keys_eq!(profile.player, player, GameEscrowError::InvalidProfileAccount);

    Ok(Some(profile))
}

pub fn rating_of(profile: Option<&PlayerProfile>) -> i64 {
    profile.map_or(DEFAULT_RATING, |profile| profile.rating)
}

pub fn match_ids_of(profile: Option<PlayerProfile>) -> Vec<u64> {
    profile.map(|profile| profile.match_ids).unwrap_or_default()
}
