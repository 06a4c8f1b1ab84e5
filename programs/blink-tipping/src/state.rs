use anchor_lang::prelude::*;

use crate::{
    constants::{CREATOR_ACCOUNT_SIZE, MAX_FEE_BASIS_POINTS, PLATFORM_CONFIG_SIZE},
    errors::ErrorCode,
    utils::split_fee,
};

/// Currency a tip is paid in
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Currency {
    /// Lamports held directly by the native vault
    Native = 0,
    /// Units of the creator's pinned token mint
    Token = 1,
}

impl TryFrom<u8> for Currency {
    type Error = anchor_lang::error::Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Currency::Native),
            1 => Ok(Currency::Token),
            _ => err!(ErrorCode::InvalidCurrency),
        }
    }
}

/// Global platform configuration (single instance)
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Authority that can update config and receives withdrawal fees
    pub authority: Pubkey,
    /// Pending authority for two-step transfer (default = no pending transfer)
    pub pending_authority: Pubkey,
    /// Fee charged on withdrawals, in 1/10000ths
    pub fee_basis_points: u16,
    /// Lifetime fees collected in lamports
    pub total_fees_collected_native: u64,
    /// Lifetime fees collected in token base units
    pub total_fees_collected_token: u64,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl PlatformConfig {
    /// Splits a withdrawal into `(net_to_creator, fee)` at the current rate
    pub fn fee_split(&self, amount: u64) -> Result<(u64, u64)> {
        require!(
            self.fee_basis_points <= MAX_FEE_BASIS_POINTS,
            ErrorCode::InvalidFeeBasisPoints
        );
        split_fee(amount, self.fee_basis_points).ok_or_else(|| ErrorCode::ArithmeticOverflow.into())
    }

    pub fn record_fee(&mut self, currency: Currency, fee: u64) -> Result<()> {
        let total = match currency {
            Currency::Native => &mut self.total_fees_collected_native,
            Currency::Token => &mut self.total_fees_collected_token,
        };
        *total = total.checked_add(fee).ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }
}

/// Per-creator tip ledger
///
/// Totals track the withdrawable balance credited through `send_tip`, which
/// never exceeds what the matching vault holds.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct CreatorAccount {
    /// Creator wallet, the only key allowed to withdraw
    pub creator: Pubkey,
    /// Token mint accepted by the token vault (fixed at creation)
    pub token_mint: Pubkey,
    /// Withdrawable lamports
    pub total_tips_native: u64,
    /// Withdrawable token base units
    pub total_tips_token: u64,
    /// Number of tips received
    pub tip_count: u64,
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Native vault PDA bump
    pub native_vault_bump: u8,
    /// Token vault PDA bump
    pub token_vault_bump: u8,
}

impl CreatorAccount {
    pub fn total_tips(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Native => self.total_tips_native,
            Currency::Token => self.total_tips_token,
        }
    }

    fn total_tips_mut(&mut self, currency: Currency) -> &mut u64 {
        match currency {
            Currency::Native => &mut self.total_tips_native,
            Currency::Token => &mut self.total_tips_token,
        }
    }

    /// Credits a tip and bumps the tip counter; nothing changes on overflow
    pub fn record_tip(&mut self, currency: Currency, amount: u64) -> Result<()> {
        let total = self
            .total_tips(currency)
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        let tip_count = self
            .tip_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        *self.total_tips_mut(currency) = total;
        self.tip_count = tip_count;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, currency: Currency, amount: u64) -> Result<()> {
        let total = self
            .total_tips(currency)
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientBalance)?;
        *self.total_tips_mut(currency) = total;
        Ok(())
    }
}

const _: () = assert!(PLATFORM_CONFIG_SIZE == 8 + PlatformConfig::INIT_SPACE);
const _: () = assert!(CREATOR_ACCOUNT_SIZE == 8 + CreatorAccount::INIT_SPACE);
