//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! Account order in every builder must match the program's Accounts structs

use blink_tipping::pda;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("Hgdc6LBYxZeXTpA3Dr53HxwxWf96wsQBX3tS1R8ArDNS");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
pub const DISCRIMINATOR_INITIALIZE_PLATFORM_CONFIG: [u8; 8] = [0x17, 0x34, 0xed, 0x35, 0xb0, 0xeb, 0x03, 0xbb];
pub const DISCRIMINATOR_UPDATE_PLATFORM_FEE: [u8; 8] = [0xa2, 0x61, 0xba, 0x2f, 0x5d, 0x71, 0xb0, 0xf3];
pub const DISCRIMINATOR_TRANSFER_PLATFORM_AUTHORITY: [u8; 8] = [0x6e, 0xd7, 0x21, 0xc2, 0x7f, 0xe9, 0x81, 0x92];
pub const DISCRIMINATOR_ACCEPT_PLATFORM_AUTHORITY: [u8; 8] = [0x93, 0xd7, 0x90, 0x37, 0x0b, 0x05, 0x97, 0x82];
pub const DISCRIMINATOR_INITIALIZE_CREATOR: [u8; 8] = [0x1d, 0x99, 0x2c, 0x63, 0x34, 0xac, 0x51, 0x73];
pub const DISCRIMINATOR_SEND_TIP: [u8; 8] = [0xe7, 0x58, 0x38, 0xf2, 0xf1, 0x06, 0x1f, 0x3b];
pub const DISCRIMINATOR_WITHDRAW_TIPS: [u8; 8] = [0x6b, 0xc0, 0xe4, 0x44, 0xa5, 0x78, 0xa4, 0x17];

// Currency tags (Borsh enum order)
pub const CURRENCY_NATIVE: u8 = 0;
pub const CURRENCY_TOKEN: u8 = 1;

// Addresses come from the program's own derivation helpers
pub fn derive_platform_config() -> (Pubkey, u8) {
    pda::find_platform_config_address()
}

pub fn derive_creator_account(creator: &Pubkey) -> (Pubkey, u8) {
    pda::find_creator_account_address(creator)
}

pub fn derive_native_vault(creator: &Pubkey) -> (Pubkey, u8) {
    pda::find_native_vault_address(creator)
}

pub fn derive_token_vault(creator: &Pubkey) -> (Pubkey, u8) {
    pda::find_token_vault_address(creator)
}

/// Derive program data PDA for BPF upgradeable loader
pub fn derive_program_data() -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROGRAM_ID.as_ref()],
        &solana_sdk::bpf_loader_upgradeable::id(),
    )
}

fn amount_and_currency(discriminator: [u8; 8], amount: u64, currency: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(8 + 8 + 1);
    data.extend_from_slice(&discriminator);
    data.extend_from_slice(&amount.to_le_bytes());
    data.push(currency);
    data
}

/// Build initialize_platform_config instruction
///
/// Accounts:
/// 0. platform_config (writable) - PDA to initialize
/// 1. authority (writable, signer) - Must be upgrade authority
/// 2. program_data - BPF loader program data
/// 3. system_program
pub fn build_initialize_platform_config(authority: Pubkey, program_data: Pubkey) -> Instruction {
    let (platform_config, _) = derive_platform_config();

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(platform_config, false),
            AccountMeta::new(authority, true),
            AccountMeta::new_readonly(program_data, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: DISCRIMINATOR_INITIALIZE_PLATFORM_CONFIG.to_vec(),
    }
}

/// Build update_platform_fee instruction
///
/// Accounts:
/// 0. platform_config (writable)
/// 1. authority (signer)
pub fn build_update_platform_fee(authority: Pubkey, new_fee_basis_points: u16) -> Instruction {
    let (platform_config, _) = derive_platform_config();

    let mut data = Vec::with_capacity(8 + 2);
    data.extend_from_slice(&DISCRIMINATOR_UPDATE_PLATFORM_FEE);
    data.extend_from_slice(&new_fee_basis_points.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(platform_config, false),
            AccountMeta::new_readonly(authority, true),
        ],
        data,
    }
}

/// Build transfer_platform_authority instruction
///
/// Accounts:
/// 0. platform_config (writable)
/// 1. authority (signer)
pub fn build_transfer_platform_authority(authority: Pubkey, new_authority: Pubkey) -> Instruction {
    let (platform_config, _) = derive_platform_config();

    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_TRANSFER_PLATFORM_AUTHORITY);
    data.extend_from_slice(&new_authority.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(platform_config, false),
            AccountMeta::new_readonly(authority, true),
        ],
        data,
    }
}

/// Build accept_platform_authority instruction
///
/// Accounts:
/// 0. platform_config (writable)
/// 1. new_authority (signer)
pub fn build_accept_platform_authority(new_authority: Pubkey) -> Instruction {
    let (platform_config, _) = derive_platform_config();

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(platform_config, false),
            AccountMeta::new_readonly(new_authority, true),
        ],
        data: DISCRIMINATOR_ACCEPT_PLATFORM_AUTHORITY.to_vec(),
    }
}

/// Build initialize_creator instruction
///
/// Accounts:
/// 0. creator (writable, signer)
/// 1. creator_account (writable) - init
/// 2. native_vault (writable)
/// 3. token_mint
/// 4. token_vault (writable) - init
/// 5. token_program
/// 6. system_program
pub fn build_initialize_creator(creator: Pubkey, token_mint: Pubkey) -> Instruction {
    let (creator_account, _) = derive_creator_account(&creator);
    let (native_vault, _) = derive_native_vault(&creator);
    let (token_vault, _) = derive_token_vault(&creator);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(creator, true),
            AccountMeta::new(creator_account, false),
            AccountMeta::new(native_vault, false),
            AccountMeta::new_readonly(token_mint, false),
            AccountMeta::new(token_vault, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: DISCRIMINATOR_INITIALIZE_CREATOR.to_vec(),
    }
}

/// Build send_tip instruction
///
/// Accounts:
/// 0. tipper (writable, signer)
/// 1. creator
/// 2. creator_account (writable)
/// 3. native_vault (writable)
/// 4. token_vault (writable)
/// 5. token_mint
/// 6. tipper_token_account (writable) - only read for token tips
/// 7. token_program
/// 8. system_program
pub fn build_send_tip(
    tipper: Pubkey,
    creator: Pubkey,
    token_mint: Pubkey,
    tipper_token_account: Pubkey,
    amount: u64,
    currency: u8,
) -> Instruction {
    let (creator_account, _) = derive_creator_account(&creator);
    let (native_vault, _) = derive_native_vault(&creator);
    let (token_vault, _) = derive_token_vault(&creator);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(tipper, true),
            AccountMeta::new_readonly(creator, false),
            AccountMeta::new(creator_account, false),
            AccountMeta::new(native_vault, false),
            AccountMeta::new(token_vault, false),
            AccountMeta::new_readonly(token_mint, false),
            AccountMeta::new(tipper_token_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: amount_and_currency(DISCRIMINATOR_SEND_TIP, amount, currency),
    }
}

/// Destinations for a withdrawal
pub struct WithdrawAccounts {
    /// Signer; must be the creator recorded on the creator account
    pub signer: Pubkey,
    /// Creator whose PDAs are used
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub creator_token_account: Pubkey,
    pub platform_wallet: Pubkey,
    pub platform_token_account: Pubkey,
}

/// Build withdraw_tips instruction
///
/// Accounts:
/// 0. creator (writable, signer)
/// 1. creator_account (writable)
/// 2. platform_config (writable)
/// 3. platform_wallet (writable)
/// 4. native_vault (writable)
/// 5. token_vault (writable)
/// 6. token_mint
/// 7. creator_token_account (writable)
/// 8. platform_token_account (writable)
/// 9. token_program
/// 10. system_program
pub fn build_withdraw_tips(accounts: &WithdrawAccounts, amount: u64, currency: u8) -> Instruction {
    let (creator_account, _) = derive_creator_account(&accounts.creator);
    let (platform_config, _) = derive_platform_config();
    let (native_vault, _) = derive_native_vault(&accounts.creator);
    let (token_vault, _) = derive_token_vault(&accounts.creator);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(accounts.signer, true),
            AccountMeta::new(creator_account, false),
            AccountMeta::new(platform_config, false),
            AccountMeta::new(accounts.platform_wallet, false),
            AccountMeta::new(native_vault, false),
            AccountMeta::new(token_vault, false),
            AccountMeta::new_readonly(accounts.token_mint, false),
            AccountMeta::new(accounts.creator_token_account, false),
            AccountMeta::new(accounts.platform_token_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: amount_and_currency(DISCRIMINATOR_WITHDRAW_TIPS, amount, currency),
    }
}
