use anchor_lang::prelude::*;

use crate::{
    constants::PLATFORM_CONFIG_SEED, errors::ErrorCode, events::PlatformAuthorityTransferProposed,
    state::PlatformConfig,
};

#[derive(Accounts)]
pub struct TransferPlatformAuthority<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub authority: Signer<'info>,
}

/// Proposes platform authority transfer to a new address (two-step pattern)
/// Can be overwritten by calling again; Pubkey::default() cancels
pub fn handler(ctx: Context<TransferPlatformAuthority>, new_authority: Pubkey) -> Result<()> {
    let platform_config = &mut ctx.accounts.platform_config;

    platform_config.pending_authority = new_authority;

    emit!(PlatformAuthorityTransferProposed {
        authority: ctx.accounts.authority.key(),
        pending_authority: new_authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
