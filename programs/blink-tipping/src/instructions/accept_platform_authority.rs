use anchor_lang::prelude::*;

use crate::{
    constants::PLATFORM_CONFIG_SEED, errors::ErrorCode, events::PlatformAuthorityTransferAccepted,
    state::PlatformConfig,
};

#[derive(Accounts)]
pub struct AcceptPlatformAuthority<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub new_authority: Signer<'info>,
}

/// Accepts a pending platform authority transfer
/// The new authority also becomes the fee recipient for later withdrawals
pub fn handler(ctx: Context<AcceptPlatformAuthority>) -> Result<()> {
    let platform_config = &mut ctx.accounts.platform_config;

    require!(
        platform_config.pending_authority != Pubkey::default(),
        ErrorCode::NoPendingTransfer
    );
    require!(
        platform_config.pending_authority == ctx.accounts.new_authority.key(),
        ErrorCode::Unauthorized
    );

    let old_authority = platform_config.authority;
    let new_authority = ctx.accounts.new_authority.key();

    platform_config.authority = new_authority;
    platform_config.pending_authority = Pubkey::default();

    emit!(PlatformAuthorityTransferAccepted {
        old_authority,
        new_authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
