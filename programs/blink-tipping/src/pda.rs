//! Program-derived addresses used by the tipping program
//!
//! Every address is derivable from public keys alone, so clients can locate a
//! creator's accounts without any lookup.

use anchor_lang::prelude::*;

use crate::{
    constants::{CREATOR_SEED, NATIVE_VAULT_SEED, PLATFORM_CONFIG_SEED, TOKEN_VAULT_SEED},
    ID,
};

pub fn find_platform_config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLATFORM_CONFIG_SEED], &ID)
}

pub fn find_creator_account_address(creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CREATOR_SEED, creator.as_ref()], &ID)
}

pub fn find_native_vault_address(creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NATIVE_VAULT_SEED, creator.as_ref()], &ID)
}

pub fn find_token_vault_address(creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_VAULT_SEED, creator.as_ref()], &ID)
}

/// Signer seeds for the creator account, which is the token vault authority
pub fn creator_account_seeds<'a>(creator: &'a Pubkey, bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
    [CREATOR_SEED, creator.as_ref(), bump]
}

/// Signer seeds for the system-owned native vault
pub fn native_vault_seeds<'a>(creator: &'a Pubkey, bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
    [NATIVE_VAULT_SEED, creator.as_ref(), bump]
}
