use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Insufficient balance in vault")]
    InsufficientBalance,

    #[msg("Invalid fee basis points (must be <= 10000)")]
    InvalidFeeBasisPoints,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid currency type")]
    InvalidCurrency,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Token account mint does not match the creator's token mint")]
    InvalidMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid platform fee recipient")]
    InvalidFeeRecipient,

    #[msg("No pending authority transfer")]
    NoPendingTransfer,
}
