use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// 10_000 basis points = 100%
pub const BASIS_POINTS_DIVISOR: u128 = 10_000;

// Request policy published for clients. The program itself only requires a
// non-zero collateral deposit.
pub const MIN_COLLATERAL_LAMPORTS: u64 = LAMPORTS_PER_SOL;
pub const MIN_INTEREST_RATE_BPS: u64 = 100; // 1%
pub const MIN_DURATION_SECONDS: u64 = 60 * 60; // 1 hour
