// Fee configuration
pub const DEFAULT_FEE_BASIS_POINTS: u16 = 25;    // 0.25%
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;    // 100%
pub const BASIS_POINTS_DIVISOR: u128 = 10_000;

// PDA seeds
pub const PLATFORM_CONFIG_SEED: &[u8] = b"platform_config";
pub const CREATOR_SEED: &[u8] = b"creator";
pub const NATIVE_VAULT_SEED: &[u8] = b"vault_sol";
pub const TOKEN_VAULT_SEED: &[u8] = b"vault_usdc";

// Account sizes (Borsh, no padding)
// PlatformConfig: discriminator (8) + authority (32) + pending_authority (32)
//   + fee_basis_points (2) + total_fees_collected_native (8)
//   + total_fees_collected_token (8) + bump (1)
pub const PLATFORM_CONFIG_SIZE: usize = 8 + 32 + 32 + 2 + 8 + 8 + 1; // 91 bytes

// CreatorAccount: discriminator (8) + creator (32) + token_mint (32)
//   + total_tips_native (8) + total_tips_token (8) + tip_count (8)
//   + bump (1) + native_vault_bump (1) + token_vault_bump (1)
pub const CREATOR_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1 + 1 + 1; // 99 bytes
