//! Error types for the Reward Staking program.
//!
//! Each error has a unique code and descriptive message.
//!
//! ## Error Code Ranges
//! - 6000-6004: Parameter validation errors
//! - 6005-6008: Position/pool state errors
//! - 6009: Time/lock errors
//! - 6010-6011: Math/transfer errors
//! - 6012-6013: Authorization errors
//! - 6014-6016: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the Reward Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Parameter Validation Errors (6000-6004) ==========

    /// [6000] Cannot stake or fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6001] The stake asset identifier is missing.
    #[msg("Invalid stake asset")]
    InvalidStakeAsset,

    /// [6002] The reward asset identifier is missing.
    #[msg("Invalid reward asset")]
    InvalidRewardAsset,

    /// [6003] Lock duration must be a positive number of seconds.
    #[msg("Lock duration must be greater than zero")]
    InvalidLockDuration,

    /// [6004] Reward rate must be greater than zero.
    #[msg("Reward rate must be greater than zero")]
    InvalidRewardRate,

    // ========== Position/Pool State Errors (6005-6009) ==========

    /// [6005] The caller has no active position to withdraw.
    #[msg("Nothing to unstake")]
    NothingToUnstake,

    /// [6006] The caller has no pending reward.
    #[msg("Nothing to claim")]
    NothingToClaim,

    /// [6007] The reward vault holds no reward tokens.
    #[msg("No rewards in pool")]
    NoRewardsInPool,

    /// [6008] The payout would exceed the funded reward pool.
    #[msg("Insufficient reward pool")]
    InsufficientRewardPool,

    // ========== Time/Lock Errors (6009) ==========

    /// [6009] The lock window of the position has not elapsed yet.
    #[msg("Lock duration has not elapsed - cannot unstake yet")]
    LockNotElapsed,

    // ========== Math/Transfer Errors (6010-6011) ==========

    /// [6010] An asset transfer into or out of the ledger failed.
    #[msg("Token transfer failed")]
    TransferFailed,

    /// [6011] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6012-6013) ==========

    /// [6012] Unauthorized - caller is not the pool owner.
    #[msg("Unauthorized: caller is not the pool owner")]
    Unauthorized,

    /// [6013] The new owner cannot be the default (zero) key.
    #[msg("New owner must be a non-default key")]
    InvalidOwner,

    // ========== Account Validation Errors (6014-6016) ==========

    /// [6014] The provided mint does not match the pool's mint for that channel.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6015] The provided vault does not match the pool's vault.
    #[msg("Vault address mismatch")]
    VaultMismatch,

    /// [6016] Signer does not match the position owner or token account owner.
    #[msg("Unauthorized: signer does not match stake owner")]
    InvalidStakeOwner,
}
