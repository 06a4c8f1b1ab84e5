use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{CREATOR_SEED, NATIVE_VAULT_SEED, TOKEN_VAULT_SEED},
    errors::ErrorCode,
    events::TipSent,
    state::{CreatorAccount, Currency},
    utils::{send_lamports, send_tokens, validate_token_account},
};

#[derive(Accounts)]
pub struct SendTip<'info> {
    #[account(mut)]
    pub tipper: Signer<'info>,

    /// CHECK: Only used as PDA seed; the creator does not sign tips
    pub creator: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CREATOR_SEED, creator.key().as_ref()],
        bump = creator_account.bump
    )]
    pub creator_account: Account<'info, CreatorAccount>,

    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED, creator.key().as_ref()],
        bump = creator_account.native_vault_bump
    )]
    pub native_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [TOKEN_VAULT_SEED, creator.key().as_ref()],
        bump = creator_account.token_vault_bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        address = creator_account.token_mint @ ErrorCode::InvalidMint
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: Tipper's token account; validated in handler for token tips only
    #[account(mut)]
    pub tipper_token_account: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Moves a tip into the creator's vault and credits the creator ledger
/// Permissionless - any wallet can tip any initialized creator
pub fn handler(ctx: Context<SendTip>, amount: u64, currency: u8) -> Result<()> {
    let currency = Currency::try_from(currency)?;
    require!(amount > 0, ErrorCode::ZeroAmount);

    // Compute the new ledger state before moving funds
    let mut updated: CreatorAccount = (*ctx.accounts.creator_account).clone();
    updated.record_tip(currency, amount)?;

    match currency {
        Currency::Native => {
            send_lamports(
                ctx.accounts.tipper.to_account_info(),
                ctx.accounts.native_vault.to_account_info(),
                &ctx.accounts.system_program,
                amount,
                &[],
            )?;
        }
        Currency::Token => {
            require!(
                ctx.accounts.tipper_token_account.key() != ctx.accounts.token_vault.key(),
                ErrorCode::InvalidTokenAccount
            );
            validate_token_account(
                &ctx.accounts.tipper_token_account,
                &ctx.accounts.token_mint.key(),
                None,
            )?;

            send_tokens(
                ctx.accounts.tipper_token_account.to_account_info(),
                ctx.accounts.token_vault.to_account_info(),
                ctx.accounts.tipper.to_account_info(),
                &ctx.accounts.token_mint,
                &ctx.accounts.token_program,
                amount,
                &[],
            )?;
        }
    }

    ctx.accounts.creator_account.set_inner(updated);

    #[cfg(feature = "verbose")]
    msg!(
        "Tip sent: {} ({:?}) to {}",
        amount,
        currency,
        ctx.accounts.creator.key()
    );

    emit!(TipSent {
        tipper: ctx.accounts.tipper.key(),
        creator: ctx.accounts.creator.key(),
        currency,
        amount,
        total_tips: ctx.accounts.creator_account.total_tips(currency),
        tip_count: ctx.accounts.creator_account.tip_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
