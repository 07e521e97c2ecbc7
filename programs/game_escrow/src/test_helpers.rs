use std::fs;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, Discriminator, InstructionData, ToAccountMetas};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use litesvm::types::{TransactionMetadata, TransactionResult};
use litesvm::LiteSVM;
use solana_keypair::Keypair;
use solana_kite::{get_pda_and_bump, seeds, send_transaction_from_instructions};
use solana_signer::Signer;
use solana_transaction::Transaction;

use crate::constants::*;
use crate::errors::GameEscrowError;
use crate::events::{ConfigUpdated, MatchCreated, MatchFinished, MatchJoined, MatchStarted, MovePlayed};
use crate::state::{EngineConfig, Match, PlayerProfile};

pub const PROGRAM_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../target/deploy/game_escrow.so"
);

pub const TENTH_SOL: u64 = 100_000_000;
pub const STARTING_BALANCE: u64 = 10_000_000_000;
const MAX_RETURN_DATA: usize = 1024;

/// A LiteSVM instance with the program deployed and the engine initialized.
/// `house` pays every transaction fee, so player balances move only by what
/// the program does to them.
pub struct GameTestEnvironment {
    pub litesvm: LiteSVM,
    pub house: Keypair,
    pub authority: Keypair,
    pub engine_config: Pubkey,
}

/// `None` when the program has not been built with `anchor build`.
pub fn setup_game_test() -> Option<GameTestEnvironment> {
    let program_bytes = match fs::read(PROGRAM_PATH) {
        Ok(bytes) => bytes,
        Err(_) => {
            eprintln!("skipping: {PROGRAM_PATH} is missing, run `anchor build` first");
            return None;
        }
    };

    let mut litesvm = LiteSVM::new();
    deploy_program(&mut litesvm, &crate::ID, program_bytes);

    let house = Keypair::new();
    let authority = Keypair::new();
    litesvm.airdrop(&house.pubkey(), STARTING_BALANCE).unwrap();
    litesvm.airdrop(&authority.pubkey(), STARTING_BALANCE).unwrap();

    let engine_config = engine_config_address();
    let initialize = program_instruction(
        crate::accounts::Initialize {
            engine_config,
            authority: authority.pubkey(),
            system_program: system_program::ID,
        },
        crate::instruction::Initialize {},
    );
    let result = send_transaction_from_instructions(
        &mut litesvm,
        vec![initialize],
        &[&authority],
        &authority.pubkey(),
    );
    assert!(result.is_ok(), "Engine initialization should succeed");

    Some(GameTestEnvironment {
        litesvm,
        house,
        authority,
        engine_config,
    })
}

pub fn deploy_program(litesvm: &mut LiteSVM, program_id: &Pubkey, program_bytes: Vec<u8>) {
    litesvm
        .set_account(
            *program_id,
            solana_account::Account {
                lamports: litesvm.minimum_balance_for_rent_exemption(program_bytes.len()),
                data: program_bytes,
                owner: bpf_loader::ID,
                executable: true,
                rent_epoch: 0,
            },
        )
        .expect("Failed to deploy program");
}

pub fn engine_config_address() -> Pubkey {
    Pubkey::find_program_address(&[ENGINE_CONFIG_SEED], &crate::ID).0
}

pub fn match_address(match_id: u64) -> Pubkey {
    get_pda_and_bump(&seeds!["match", match_id], &crate::ID).0
}

pub fn profile_address(player: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[PLAYER_PROFILE_SEED, player.as_ref()], &crate::ID).0
}

fn program_instruction(accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}

fn with_match_accounts(mut instruction: Instruction, match_ids: &[u64]) -> Instruction {
    instruction.accounts.extend(
        match_ids
            .iter()
            .map(|match_id| AccountMeta::new_readonly(match_address(*match_id), false)),
    );
    instruction
}

/// Signs with `house` as fee payer plus `signers`, on a fresh blockhash so
/// repeating an identical instruction is a new transaction.
fn send(
    litesvm: &mut LiteSVM,
    house: &Keypair,
    instruction: Instruction,
    signers: &[&Keypair],
) -> TransactionResult {
    litesvm.expire_blockhash();
    let mut keypairs: Vec<&Keypair> = vec![house];
    keypairs.extend_from_slice(signers);

    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&house.pubkey()),
        &keypairs[..],
        litesvm.latest_blockhash(),
    );
    litesvm.send_transaction(transaction)
}

impl GameTestEnvironment {
    pub fn new_player(&mut self) -> Keypair {
        let player = Keypair::new();
        self.litesvm
            .airdrop(&player.pubkey(), STARTING_BALANCE)
            .unwrap();
        player
    }

    pub fn execute(&mut self, instruction: Instruction, signers: &[&Keypair]) -> TransactionResult {
        send(&mut self.litesvm, &self.house, instruction, signers)
    }

    pub fn balance(&self, address: &Pubkey) -> u64 {
        self.litesvm.get_balance(address).unwrap_or(0)
    }

    pub fn rent(&self, len: usize) -> u64 {
        self.litesvm.minimum_balance_for_rent_exemption(len)
    }

    pub fn engine(&self) -> EngineConfig {
        read_account(&self.litesvm, &self.engine_config).expect("engine config exists")
    }

    pub fn game(&self, match_id: u64) -> Match {
        read_account(&self.litesvm, &match_address(match_id)).expect("match account exists")
    }

    pub fn profile(&self, player: &Pubkey) -> Option<PlayerProfile> {
        read_account(&self.litesvm, &profile_address(player))
    }

    pub fn profile_len(&self, player: &Pubkey) -> usize {
        self.litesvm
            .get_account(&profile_address(player))
            .map_or(0, |account| account.data.len())
    }

    /// Creates the match that will receive the engine's next id.
    pub fn create_match(&mut self, creator: &Keypair, stake: u64) -> TransactionResult {
        let match_id = self.engine().match_count;
        let instruction = program_instruction(
            crate::accounts::CreateMatch {
                engine_config: self.engine_config,
                game_match: match_address(match_id),
                creator_profile: profile_address(&creator.pubkey()),
                creator: creator.pubkey(),
                system_program: system_program::ID,
            },
            crate::instruction::CreateMatch { stake },
        );
        self.execute(instruction, &[creator])
    }

    pub fn join_match(&mut self, joiner: &Keypair, match_id: u64, stake: u64) -> TransactionResult {
        let instruction = program_instruction(
            crate::accounts::JoinMatch {
                engine_config: self.engine_config,
                game_match: match_address(match_id),
                joiner_profile: profile_address(&joiner.pubkey()),
                joiner: joiner.pubkey(),
                system_program: system_program::ID,
            },
            crate::instruction::JoinMatch { match_id, stake },
        );
        self.execute(instruction, &[joiner])
    }

    pub fn play_move(&mut self, player: &Keypair, match_id: u64, cell: u8) -> TransactionResult {
        let game = self.game(match_id);
        let instruction = program_instruction(
            crate::accounts::PlayMove {
                engine_config: self.engine_config,
                game_match: match_address(match_id),
                player_one: game.player1,
                player_two: game.player2,
                player_one_profile: profile_address(&game.player1),
                player_two_profile: profile_address(&game.player2),
                player: player.pubkey(),
            },
            crate::instruction::PlayMove { match_id, cell },
        );
        self.execute(instruction, &[player])
    }

    /// Plays `cells` in order, alternating from the creator, and returns the
    /// result of the last move.
    pub fn play_sequence(
        &mut self,
        creator: &Keypair,
        joiner: &Keypair,
        match_id: u64,
        cells: &[u8],
    ) -> TransactionResult {
        let mut last = None;
        for (turn, cell) in cells.iter().enumerate() {
            let player = if turn % 2 == 0 { creator } else { joiner };
            let result = self.play_move(player, match_id, *cell);
            if turn + 1 < cells.len() {
                assert!(result.is_ok(), "Move {turn} at cell {cell} should succeed");
            }
            last = Some(result);
        }
        last.expect("at least one move")
    }

    pub fn update_config(&mut self, signer: Option<&Keypair>, paused: Option<bool>) -> TransactionResult {
        let authority = signer.unwrap_or(&self.authority);
        let instruction = program_instruction(
            crate::accounts::UpdateConfig {
                engine_config: self.engine_config,
                authority: authority.pubkey(),
            },
            crate::instruction::UpdateConfig {
                paused,
                new_authority: None,
            },
        );
        send(&mut self.litesvm, &self.house, instruction, &[authority])
    }

    pub fn get_match(&mut self, match_id: u64) -> TransactionResult {
        let instruction = program_instruction(
            crate::accounts::GetMatch {
                engine_config: self.engine_config,
                game_match: match_address(match_id),
            },
            crate::instruction::GetMatch { match_id },
        );
        self.execute(instruction, &[])
    }

    pub fn get_player_match_ids(&mut self, player: &Pubkey, start: u64) -> TransactionResult {
        let instruction = program_instruction(
            crate::accounts::GetPlayerMatchIds {
                player_profile: profile_address(player),
            },
            crate::instruction::GetPlayerMatchIds {
                player: *player,
                start,
            },
        );
        self.execute(instruction, &[])
    }

    pub fn get_player_history(
        &mut self,
        player: &Pubkey,
        start: u64,
        match_ids: &[u64],
    ) -> TransactionResult {
        let instruction = program_instruction(
            crate::accounts::GetPlayerHistory {
                engine_config: self.engine_config,
                player_profile: profile_address(player),
            },
            crate::instruction::GetPlayerHistory {
                player: *player,
                start,
            },
        );
        self.execute(with_match_accounts(instruction, match_ids), &[])
    }

    pub fn get_player_elo(&mut self, player: &Pubkey) -> TransactionResult {
        let instruction = program_instruction(
            crate::accounts::GetPlayerElo {
                player_profile: profile_address(player),
            },
            crate::instruction::GetPlayerElo { player: *player },
        );
        self.execute(instruction, &[])
    }

    pub fn get_player_stats(
        &mut self,
        player: &Pubkey,
        start: u64,
        match_ids: &[u64],
    ) -> TransactionResult {
        let instruction = program_instruction(
            crate::accounts::GetPlayerStats {
                engine_config: self.engine_config,
                player_profile: profile_address(player),
            },
            crate::instruction::GetPlayerStats {
                player: *player,
                start,
            },
        );
        self.execute(with_match_accounts(instruction, match_ids), &[])
    }
}

pub fn read_account<T: AccountDeserialize>(litesvm: &LiteSVM, address: &Pubkey) -> Option<T> {
    let account = litesvm.get_account(address)?;
    T::try_deserialize(&mut account.data.as_slice()).ok()
}

pub fn succeeded(result: TransactionResult, what: &str) -> TransactionMetadata {
    match result {
        Ok(meta) => meta,
        Err(failed) => panic!("{what} should succeed, logs: {:#?}", failed.meta.logs),
    }
}

/// Fails unless the transaction was rejected with `error`.
pub fn assert_program_error(result: TransactionResult, error: GameEscrowError) {
    let code = format!("Error Code: {}.", error.name());
    match result {
        Ok(_) => panic!("expected {code} but the transaction succeeded"),
        Err(failed) => assert!(
            failed.meta.logs.iter().any(|line| line.contains(&code)),
            "expected {code}, logs: {:#?}",
            failed.meta.logs
        ),
    }
}

/// Decodes the instruction's return value. The runtime drops trailing zero
/// bytes from return data, so the buffer is padded back before decoding.
pub fn return_value<T: AnchorDeserialize>(meta: &TransactionMetadata) -> T {
    let mut data = meta.return_data.data.clone();
    data.resize(MAX_RETURN_DATA, 0);
    T::deserialize(&mut data.as_slice()).expect("return data decodes")
}

pub fn emitted_events(meta: &TransactionMetadata) -> Vec<Vec<u8>> {
    meta.logs
        .iter()
        .filter_map(|line| line.strip_prefix("Program data: "))
        .filter_map(|encoded| STANDARD.decode(encoded).ok())
        .collect()
}

pub fn event_names(meta: &TransactionMetadata) -> Vec<&'static str> {
    let known: [(&[u8], &'static str); 6] = [
        (MatchCreated::DISCRIMINATOR, "MatchCreated"),
        (MatchJoined::DISCRIMINATOR, "MatchJoined"),
        (MatchStarted::DISCRIMINATOR, "MatchStarted"),
        (MovePlayed::DISCRIMINATOR, "MovePlayed"),
        (MatchFinished::DISCRIMINATOR, "MatchFinished"),
        (ConfigUpdated::DISCRIMINATOR, "ConfigUpdated"),
    ];
    emitted_events(meta)
        .iter()
        .map(|data| {
            known
                .iter()
                .find(|(discriminator, _)| data.starts_with(discriminator))
                .map_or("unknown", |(_, name)| *name)
        })
        .collect()
}

pub fn decode_event<T: AnchorDeserialize + Discriminator>(meta: &TransactionMetadata) -> T {
    emitted_events(meta)
        .iter()
        .find_map(|data| {
            let mut body = data.strip_prefix(T::DISCRIMINATOR)?;
            T::deserialize(&mut body).ok()
        })
        .expect("event was emitted")
}
