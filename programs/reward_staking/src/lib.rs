//! # Reward Staking Program
//!
//! A time-locked staking program that pays rewards in a separate reward token
//! from a pool funded by anyone.
//!
//! ## Features
//! - One position per user; top-ups merge and restart the lock window
//! - Linear reward accrual: `amount * elapsed * reward_rate / 10^18`
//! - Claim rewards without unstaking
//! - Principal is always withdrawable after the lock, even when the reward
//!   pool is empty
//! - Owner controls for lock duration, reward rate and ownership
//! - Checked arithmetic with a 256-bit intermediate for accrual

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;
pub mod token_bank;

use instructions::*;
use state::{PoolInfo, UserStakeInfo};

#[program]
pub mod reward_staking {
    use super::*;

    /// Initializes a staking pool for the given stake and reward mints.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `lock_duration` - Seconds a stake must remain before unstaking
    /// * `reward_rate` - Reward units per staked unit per second, scaled by 10^18
    ///
    /// # Errors
    /// Returns an error if either mint is missing or a parameter is zero.
    pub fn initialize(
        ctx: Context<Initialize>,
        lock_duration: i64,
        reward_rate: u128,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, lock_duration, reward_rate)
    }

    /// Stakes tokens, opening or topping up the caller's position.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - The token transfer fails
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Withdraws the caller's full position and pays pending rewards if the
    /// reward pool can.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The caller has no position
    /// - The lock duration has not elapsed
    /// - The principal transfer fails
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        instructions::unstake::handler(ctx)
    }

    /// Claims accrued rewards without unstaking.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No reward is pending
    /// - The reward vault is empty
    /// - The payout exceeds the funded reward pool
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Funds the reward pool. Anyone may call this.
    ///
    /// # Errors
    /// Returns an error if amount is zero or the transfer fails.
    pub fn fund_reward_pool(ctx: Context<FundRewardPool>, amount: u64) -> Result<()> {
        instructions::fund_reward_pool::handler(ctx, amount)
    }

    /// Owner function to change the lock duration.
    ///
    /// # Errors
    /// Returns an error if the caller is not the owner or the value is not positive.
    pub fn set_lock_duration(ctx: Context<AdminControl>, lock_duration: i64) -> Result<()> {
        instructions::admin::set_lock_duration_handler(ctx, lock_duration)
    }

    /// Owner function to change the reward rate.
    ///
    /// # Errors
    /// Returns an error if the caller is not the owner or the rate is zero.
    pub fn set_reward_rate(ctx: Context<AdminControl>, reward_rate: u128) -> Result<()> {
        instructions::admin::set_reward_rate_handler(ctx, reward_rate)
    }

    /// Owner function to hand the pool to a new owner.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the current owner
    /// - New owner is the default key
    pub fn transfer_ownership(ctx: Context<AdminControl>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership_handler(ctx, new_owner)
    }

    /// Returns the reward a user could claim right now.
    pub fn calculate_reward(ctx: Context<UserStakeQuery>) -> Result<u64> {
        instructions::queries::calculate_reward_handler(ctx)
    }

    /// Returns a user's position and pending reward; all zero without a position.
    pub fn get_user_stake_info(ctx: Context<UserStakeQuery>) -> Result<UserStakeInfo> {
        instructions::queries::get_user_stake_info_handler(ctx)
    }

    /// Returns pool parameters and counters.
    pub fn get_pool_info(ctx: Context<PoolQuery>) -> Result<PoolInfo> {
        instructions::queries::get_pool_info_handler(ctx)
    }
}
