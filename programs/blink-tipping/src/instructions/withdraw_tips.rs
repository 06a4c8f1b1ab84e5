use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{CREATOR_SEED, NATIVE_VAULT_SEED, PLATFORM_CONFIG_SEED, TOKEN_VAULT_SEED},
    errors::ErrorCode,
    events::TipsWithdrawn,
    pda::{creator_account_seeds, native_vault_seeds},
    state::{CreatorAccount, Currency, PlatformConfig},
    utils::{send_lamports, send_tokens, validate_token_account},
};

#[derive(Accounts)]
pub struct WithdrawTips<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [CREATOR_SEED, creator_account.creator.as_ref()],
        bump = creator_account.bump,
        has_one = creator @ ErrorCode::Unauthorized
    )]
    pub creator_account: Account<'info, CreatorAccount>,

    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// Receives native fees; always the platform authority
    #[account(
        mut,
        address = platform_config.authority @ ErrorCode::InvalidFeeRecipient
    )]
    pub platform_wallet: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED, creator_account.creator.as_ref()],
        bump = creator_account.native_vault_bump
    )]
    pub native_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [TOKEN_VAULT_SEED, creator_account.creator.as_ref()],
        bump = creator_account.token_vault_bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        address = creator_account.token_mint @ ErrorCode::InvalidMint
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: Creator's token destination; validated in handler for token withdrawals only
    #[account(mut)]
    pub creator_token_account: UncheckedAccount<'info>,

    /// CHECK: Platform's token fee destination; validated in handler for token withdrawals only
    #[account(mut)]
    pub platform_token_account: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Withdraws tips from a vault, paying the platform fee
/// Only callable by the creator recorded on the creator account
pub fn handler(ctx: Context<WithdrawTips>, amount: u64, currency: u8) -> Result<()> {
    let currency = Currency::try_from(currency)?;
    require!(amount > 0, ErrorCode::ZeroAmount);
    require!(
        amount <= ctx.accounts.creator_account.total_tips(currency),
        ErrorCode::InsufficientBalance
    );

    let (net_to_creator, fee) = ctx.accounts.platform_config.fee_split(amount)?;

    // Phase 1: compute both ledgers before any funds move
    let mut creator_ledger: CreatorAccount = (*ctx.accounts.creator_account).clone();
    creator_ledger.record_withdrawal(currency, amount)?;
    let mut platform_ledger: PlatformConfig = (*ctx.accounts.platform_config).clone();
    platform_ledger.record_fee(currency, fee)?;

    let creator_key = ctx.accounts.creator.key();

    // Phase 2: validate destinations, then transfer
    match currency {
        Currency::Native => {
            // The rent reserve funded at creation is never withdrawable
            let rent_reserve = Rent::get()?.minimum_balance(0);
            let available = ctx
                .accounts
                .native_vault
                .lamports()
                .saturating_sub(rent_reserve);
            require!(amount <= available, ErrorCode::InsufficientBalance);

            let bump = [creator_ledger.native_vault_bump];
            let seeds = native_vault_seeds(&creator_key, &bump);
            let signer_seeds = &[&seeds[..]];

            send_lamports(
                ctx.accounts.native_vault.to_account_info(),
                ctx.accounts.creator.to_account_info(),
                &ctx.accounts.system_program,
                net_to_creator,
                signer_seeds,
            )?;
            send_lamports(
                ctx.accounts.native_vault.to_account_info(),
                ctx.accounts.platform_wallet.to_account_info(),
                &ctx.accounts.system_program,
                fee,
                signer_seeds,
            )?;
        }
        Currency::Token => {
            require!(
                amount <= ctx.accounts.token_vault.amount,
                ErrorCode::InsufficientBalance
            );
            require!(
                ctx.accounts.creator_token_account.key() != ctx.accounts.token_vault.key(),
                ErrorCode::InvalidTokenAccount
            );

            let mint = ctx.accounts.token_mint.key();
            validate_token_account(&ctx.accounts.creator_token_account, &mint, None)?;
            validate_token_account(
                &ctx.accounts.platform_token_account,
                &mint,
                Some((&ctx.accounts.platform_config.authority, ErrorCode::InvalidFeeRecipient)),
            )?;

            let bump = [creator_ledger.bump];
            let seeds = creator_account_seeds(&creator_key, &bump);
            let signer_seeds = &[&seeds[..]];

            send_tokens(
                ctx.accounts.token_vault.to_account_info(),
                ctx.accounts.creator_token_account.to_account_info(),
                ctx.accounts.creator_account.to_account_info(),
                &ctx.accounts.token_mint,
                &ctx.accounts.token_program,
                net_to_creator,
                signer_seeds,
            )?;
            send_tokens(
                ctx.accounts.token_vault.to_account_info(),
                ctx.accounts.platform_token_account.to_account_info(),
                ctx.accounts.creator_account.to_account_info(),
                &ctx.accounts.token_mint,
                &ctx.accounts.token_program,
                fee,
                signer_seeds,
            )?;
        }
    }

    // Phase 3: write back ledgers
    ctx.accounts.creator_account.set_inner(creator_ledger);
    ctx.accounts.platform_config.set_inner(platform_ledger);

    #[cfg(feature = "verbose")]
    msg!(
        "Withdrew {} ({:?}): fee {}, creator {}",
        amount,
        currency,
        fee,
        net_to_creator
    );

    emit!(TipsWithdrawn {
        creator: creator_key,
        currency,
        amount,
        net_to_creator,
        fee,
        remaining_tips: ctx.accounts.creator_account.total_tips(currency),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
