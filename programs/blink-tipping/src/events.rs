use anchor_lang::prelude::*;

use crate::state::Currency;

#[event]
pub struct PlatformConfigCreated {
    pub authority: Pubkey,
    pub fee_basis_points: u16,
    pub timestamp: i64,
}

#[event]
pub struct PlatformFeeUpdated {
    pub authority: Pubkey,
    pub old_fee_basis_points: u16,
    pub new_fee_basis_points: u16,
    pub timestamp: i64,
}

#[event]
pub struct PlatformAuthorityTransferProposed {
    pub authority: Pubkey,
    pub pending_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PlatformAuthorityTransferAccepted {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CreatorInitialized {
    pub creator: Pubkey,
    pub creator_account: Pubkey,
    pub token_mint: Pubkey,
    pub native_vault: Pubkey,
    pub token_vault: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct TipSent {
    pub tipper: Pubkey,
    pub creator: Pubkey,
    pub currency: Currency,
    pub amount: u64,
    pub total_tips: u64,
    pub tip_count: u64,
    pub timestamp: i64,
}

#[event]
pub struct TipsWithdrawn {
    pub creator: Pubkey,
    pub currency: Currency,
    pub amount: u64,
    pub net_to_creator: u64,
    pub fee: u64,
    pub remaining_tips: u64,
    pub timestamp: i64,
}
