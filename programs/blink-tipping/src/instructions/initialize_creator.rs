use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{CREATOR_ACCOUNT_SIZE, CREATOR_SEED, NATIVE_VAULT_SEED, TOKEN_VAULT_SEED},
    events::CreatorInitialized,
    state::CreatorAccount,
    utils::send_lamports,
};

#[derive(Accounts)]
pub struct InitializeCreator<'info> {
    /// Creator wallet, pays for all three accounts
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = CREATOR_ACCOUNT_SIZE,
        seeds = [CREATOR_SEED, creator.key().as_ref()],
        bump
    )]
    pub creator_account: Account<'info, CreatorAccount>,

    /// Plain lamport vault; stays owned by the system program
    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED, creator.key().as_ref()],
        bump
    )]
    pub native_vault: SystemAccount<'info>,

    /// Token mint pinned to this creator for life
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT_SEED, creator.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = creator_account,
        token::token_program = token_program,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Creates the creator ledger and both vaults
/// Fails if the creator was already initialized
pub fn handler(ctx: Context<InitializeCreator>) -> Result<()> {
    // Fund the native vault up to the rent-exempt minimum so tips can sit on top of it
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let shortfall = rent_reserve.saturating_sub(ctx.accounts.native_vault.lamports());
    send_lamports(
        ctx.accounts.creator.to_account_info(),
        ctx.accounts.native_vault.to_account_info(),
        &ctx.accounts.system_program,
        shortfall,
        &[],
    )?;

    let creator_account = &mut ctx.accounts.creator_account;

    creator_account.creator = ctx.accounts.creator.key();
    creator_account.token_mint = ctx.accounts.token_mint.key();
    creator_account.total_tips_native = 0;
    creator_account.total_tips_token = 0;
    creator_account.tip_count = 0;
    creator_account.bump = ctx.bumps.creator_account;
    creator_account.native_vault_bump = ctx.bumps.native_vault;
    creator_account.token_vault_bump = ctx.bumps.token_vault;

    #[cfg(feature = "verbose")]
    msg!("Creator account initialized for: {}", ctx.accounts.creator.key());

    emit!(CreatorInitialized {
        creator: ctx.accounts.creator.key(),
        creator_account: ctx.accounts.creator_account.key(),
        token_mint: ctx.accounts.token_mint.key(),
        native_vault: ctx.accounts.native_vault.key(),
        token_vault: ctx.accounts.token_vault.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
