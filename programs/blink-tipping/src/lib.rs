use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;
mod utils;

use instructions::*;

declare_id!("Hgdc6LBYxZeXTpA3Dr53HxwxWf96wsQBX3tS1R8ArDNS");

#[program]
pub mod blink_tipping {
    use super::*;

    /// Initializes the platform configuration with the default 0.25% fee
    /// Can only be called once by the program's upgrade authority
    pub fn initialize_platform_config(ctx: Context<InitializePlatformConfig>) -> Result<()> {
        instructions::initialize_platform_config::handler(ctx)
    }

    /// Updates the withdrawal fee rate
    /// Only callable by current platform authority
    pub fn update_platform_fee(
        ctx: Context<UpdatePlatformFee>,
        new_fee_basis_points: u16,
    ) -> Result<()> {
        instructions::update_platform_fee::handler(ctx, new_fee_basis_points)
    }

    /// Proposes platform authority transfer to a new address (two-step pattern)
    /// Only callable by current platform authority
    /// New authority must call accept_platform_authority to complete
    pub fn transfer_platform_authority(
        ctx: Context<TransferPlatformAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::transfer_platform_authority::handler(ctx, new_authority)
    }

    /// Accepts a pending platform authority transfer
    /// Only callable by the pending authority
    pub fn accept_platform_authority(ctx: Context<AcceptPlatformAuthority>) -> Result<()> {
        instructions::accept_platform_authority::handler(ctx)
    }

    /// Creates a creator account with its native and token vaults
    /// The token mint is pinned for the life of the creator account
    pub fn initialize_creator(ctx: Context<InitializeCreator>) -> Result<()> {
        instructions::initialize_creator::handler(ctx)
    }

    /// Sends a tip to a creator's vault
    /// `currency`: 0 = native SOL, 1 = creator's token mint
    pub fn send_tip(ctx: Context<SendTip>, amount: u64, currency: u8) -> Result<()> {
        instructions::send_tip::handler(ctx, amount, currency)
    }

    /// Withdraws tips minus the platform fee
    /// Only callable by the creator
    pub fn withdraw_tips(ctx: Context<WithdrawTips>, amount: u64, currency: u8) -> Result<()> {
        instructions::withdraw_tips::handler(ctx, amount, currency)
    }
}
