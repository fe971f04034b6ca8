//! Program constants for the Reward Staking program.
//!
//! PDA seeds, the fixed-point reward scale and time helpers.

/// Seed for deriving the stake pool PDA
pub const STAKE_POOL_SEED: &[u8] = b"stake_pool";

/// Seed for deriving user stake account PDAs
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Seed for deriving the vault that holds staked principal
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";

/// Seed for deriving the vault that holds reward liquidity
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Fixed-point scale of the reward rate (10^18).
///
/// A rate of `SCALE` pays one reward unit per staked unit per second.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;
