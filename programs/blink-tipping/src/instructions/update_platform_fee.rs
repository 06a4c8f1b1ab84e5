use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_FEE_BASIS_POINTS, PLATFORM_CONFIG_SEED},
    errors::ErrorCode,
    events::PlatformFeeUpdated,
    state::PlatformConfig,
};

#[derive(Accounts)]
pub struct UpdatePlatformFee<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub authority: Signer<'info>,
}

/// Updates the withdrawal fee rate
/// Only callable by current platform authority
pub fn handler(ctx: Context<UpdatePlatformFee>, new_fee_basis_points: u16) -> Result<()> {
    require!(
        new_fee_basis_points <= MAX_FEE_BASIS_POINTS,
        ErrorCode::InvalidFeeBasisPoints
    );

    let platform_config = &mut ctx.accounts.platform_config;
    let old_fee_basis_points = platform_config.fee_basis_points;

    platform_config.fee_basis_points = new_fee_basis_points;

    emit!(PlatformFeeUpdated {
        authority: ctx.accounts.authority.key(),
        old_fee_basis_points,
        new_fee_basis_points,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
