use anchor_lang::{prelude::*, system_program};
use anchor_spl::{
    token, token_2022,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{constants::BASIS_POINTS_DIVISOR, errors::ErrorCode};

/// Splits `amount` into `(net, fee)` where `fee = floor(amount * fee_bps / 10000)`
/// Multiplies before dividing; returns None on overflow
pub fn split_fee(amount: u64, fee_basis_points: u16) -> Option<(u64, u64)> {
    let fee: u64 = (amount as u128)
        .checked_mul(fee_basis_points as u128)?
        .checked_div(BASIS_POINTS_DIVISOR)?
        .try_into()
        .ok()?;
    let net = amount.checked_sub(fee)?;
    Some((net, fee))
}

/// Validates that an unchecked account is a token account for `mint`
/// Optionally requires a specific owner, failing with `owner_error` otherwise
pub fn validate_token_account(
    account_info: &AccountInfo,
    mint: &Pubkey,
    owner: Option<(&Pubkey, ErrorCode)>,
) -> Result<TokenAccount> {
    // Must have data
    require!(!account_info.data_is_empty(), ErrorCode::InvalidTokenAccount);

    // Must be owned by token program (SPL Token or Token-2022)
    let valid_owner = account_info.owner == &token::ID || account_info.owner == &token_2022::ID;
    require!(valid_owner, ErrorCode::InvalidTokenAccount);

    let token_account = TokenAccount::try_deserialize(&mut &account_info.data.borrow()[..])
        .map_err(|_| ErrorCode::InvalidTokenAccount)?;

    require!(token_account.mint == *mint, ErrorCode::InvalidMint);

    if let Some((expected_owner, owner_error)) = owner {
        if token_account.owner != *expected_owner {
            return Err(owner_error.into());
        }
    }

    Ok(token_account)
}

/// Moves lamports through the system program; zero amounts are skipped
pub fn send_lamports<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = system_program::Transfer { from, to };
    let cpi_ctx = CpiContext::new_with_signer(
        system_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    system_program::transfer(cpi_ctx, amount)
}

/// Moves tokens with `transfer_checked`; zero amounts are skipped
pub fn send_tokens<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = TransferChecked {
        from,
        mint: mint.to_account_info(),
        to,
        authority,
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}
