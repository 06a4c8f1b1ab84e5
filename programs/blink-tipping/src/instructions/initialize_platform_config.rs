use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_FEE_BASIS_POINTS, PLATFORM_CONFIG_SEED, PLATFORM_CONFIG_SIZE},
    errors::ErrorCode,
    events::PlatformConfigCreated,
    state::PlatformConfig,
    ID,
};

#[derive(Accounts)]
pub struct InitializePlatformConfig<'info> {
    #[account(
        init,
        payer = authority,
        space = PLATFORM_CONFIG_SIZE,
        seeds = [PLATFORM_CONFIG_SEED],
        bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: The program's executable data account - validated in handler
    #[account(
        constraint = program_data.owner == &anchor_lang::solana_program::bpf_loader_upgradeable::id()
            @ ErrorCode::Unauthorized
    )]
    pub program_data: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the platform config singleton with the default fee
/// Can only be called once, by the program's upgrade authority
pub fn handler(ctx: Context<InitializePlatformConfig>) -> Result<()> {
    // Verify program_data is the correct PDA for our program
    let (expected_program_data, _) = Pubkey::find_program_address(
        &[ID.as_ref()],
        &anchor_lang::solana_program::bpf_loader_upgradeable::id(),
    );
    require!(
        ctx.accounts.program_data.key() == expected_program_data,
        ErrorCode::Unauthorized
    );

    let data = ctx.accounts.program_data.try_borrow_data()?;

    // UpgradeableLoaderState::ProgramData layout:
    // - 4 bytes: discriminant
    // - 8 bytes: slot
    // - 1 byte: Option discriminant for upgrade_authority
    // - 32 bytes: upgrade_authority pubkey (if Some)
    require!(data.len() >= 45, ErrorCode::Unauthorized);
    require!(data[12] == 1, ErrorCode::Unauthorized); // Must have upgrade authority

    let upgrade_authority = Pubkey::try_from(&data[13..45])
        .map_err(|_| ErrorCode::Unauthorized)?;

    require!(
        upgrade_authority == ctx.accounts.authority.key(),
        ErrorCode::Unauthorized
    );

    let platform_config = &mut ctx.accounts.platform_config;

    platform_config.authority = ctx.accounts.authority.key();
    platform_config.pending_authority = Pubkey::default(); // No pending transfer initially
    platform_config.fee_basis_points = DEFAULT_FEE_BASIS_POINTS;
    platform_config.total_fees_collected_native = 0;
    platform_config.total_fees_collected_token = 0;
    platform_config.bump = ctx.bumps.platform_config;

    #[cfg(feature = "verbose")]
    msg!(
        "Platform config initialized with fee: {} bps",
        platform_config.fee_basis_points
    );

    emit!(PlatformConfigCreated {
        authority: ctx.accounts.authority.key(),
        fee_basis_points: DEFAULT_FEE_BASIS_POINTS,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
