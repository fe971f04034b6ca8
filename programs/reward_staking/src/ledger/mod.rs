//! Reward accounting core.
//!
//! Every operation works on plain `StakePool` / `UserStake` values and an
//! [`AssetTransfer`] implementation, so the same code runs behind the
//! instruction handlers (SPL token CPI) and in unit tests (in-memory bank).
//!
//! Ordering rule: validate, move assets, then write ledger state. State is only
//! written once every transfer of the operation has succeeded.

use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::math::{accrued_reward, elapsed_seconds};
use crate::state::{StakePool, UserStake, UserStakeInfo};

#[cfg(test)]
pub(crate) mod testing;

/// The two asset channels the ledger holds in custody.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    Stake,
    Reward,
}

/// Moves assets between users and the ledger's custody.
///
/// Implementations report any failed movement as `StakingError::TransferFailed`.
pub trait AssetTransfer {
    /// Moves `amount` of `asset` from `from` into ledger custody.
    fn pull(&mut self, asset: Asset, from: &Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` of `asset` out of ledger custody to `to`.
    fn push(&mut self, asset: Asset, to: &Pubkey, amount: u64) -> Result<()>;

    /// Balance of `asset` currently held by the ledger.
    fn balance_of(&self, asset: Asset) -> u64;
}

/// Outcome of a successful unstake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnstakeReceipt {
    /// Principal returned to the caller.
    pub principal: u64,
    /// Reward accrued over the open window at unstake time.
    pub reward_owed: u64,
    /// Reward actually paid; may be less than owed, or zero when the pool is dry.
    pub reward_paid: u64,
}

/// Outcome of a successful claim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub reward_owed: u64,
    pub reward_paid: u64,
}

/// Validates construction parameters and resets every counter.
pub fn initialize_pool(
    pool: &mut StakePool,
    owner: Pubkey,
    stake_mint: Pubkey,
    reward_mint: Pubkey,
    lock_duration: i64,
    reward_rate: u128,
    now: i64,
) -> Result<()> {
    require!(stake_mint != Pubkey::default(), StakingError::InvalidStakeAsset);
    require!(reward_mint != Pubkey::default(), StakingError::InvalidRewardAsset);
    require!(lock_duration > 0, StakingError::InvalidLockDuration);
    require!(reward_rate > 0, StakingError::InvalidRewardRate);

    pool.owner = owner;
    pool.stake_mint = stake_mint;
    pool.reward_mint = reward_mint;
    pool.lock_duration = lock_duration;
    pool.reward_rate = reward_rate;
    pool.total_staked = 0;
    pool.total_reward_pool = 0;
    pool.total_distributed = 0;
    pool.staker_count = 0;
    pool.created_at = now;
    pool.last_updated = now;

    Ok(())
}

/// Reward accrued by `position` over `[last_claim_time, now]`.
///
/// Uses the current amount and the current rate for the whole window, so
/// top-ups and rate changes apply retroactively to unclaimed time.
pub fn calculate_reward(pool: &StakePool, position: &UserStake, now: i64) -> u64 {
    if !position.is_active() {
        return 0;
    }
    let elapsed = elapsed_seconds(position.last_claim_time, now);
    accrued_reward(position.amount, elapsed, pool.reward_rate)
}

/// Snapshot of a position including its pending reward; all zero when absent.
pub fn user_stake_info(pool: &StakePool, position: Option<&UserStake>, now: i64) -> UserStakeInfo {
    let Some(position) = position else {
        return UserStakeInfo::default();
    };
    UserStakeInfo {
        amount: position.amount,
        stake_start_time: position.stake_start_time,
        last_claim_time: position.last_claim_time,
        pending_reward: calculate_reward(pool, position, now),
    }
}

/// Deposits `amount` into the caller's position.
///
/// Every deposit restarts the lock window for the whole balance. The accrual
/// window only opens on the first deposit into an empty position.
pub fn stake<T: AssetTransfer>(
    pool: &mut StakePool,
    position: &mut UserStake,
    bank: &mut T,
    caller: &Pubkey,
    amount: u64,
    now: i64,
) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let new_amount = position
        .amount
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    let new_total = pool
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    let opening = !position.is_active();
    if !opening {
        require_keys_eq!(position.owner, *caller, StakingError::InvalidStakeOwner);
    }

    bank.pull(Asset::Stake, caller, amount)?;

    if opening {
        position.owner = *caller;
        position.last_claim_time = now;
        pool.staker_count = pool.staker_count.saturating_add(1);
    }
    position.amount = new_amount;
    position.stake_start_time = now;

    pool.total_staked = new_total;
    pool.last_updated = now;

    Ok(())
}

/// Withdraws the full position once its lock has elapsed.
///
/// The reward leg is best effort: an empty or under-funded reward pool skips
/// the payout but never blocks the principal. A failed principal transfer
/// fails the whole operation.
pub fn unstake<T: AssetTransfer>(
    pool: &mut StakePool,
    position: &mut UserStake,
    bank: &mut T,
    caller: &Pubkey,
    now: i64,
) -> Result<UnstakeReceipt> {
    require!(position.is_active(), StakingError::NothingToUnstake);
    require_keys_eq!(position.owner, *caller, StakingError::InvalidStakeOwner);
    require!(
        position.is_lock_ended(now, pool.lock_duration),
        StakingError::LockNotElapsed
    );

    let reward_owed = calculate_reward(pool, position, now);
    let principal = position.amount;

    let mut next_pool = pool.clone();
    next_pool.total_staked = next_pool
        .total_staked
        .checked_sub(principal)
        .ok_or(StakingError::MathOverflow)?;

    let mut reward_paid = 0;
    if reward_owed > 0 {
        match quote_reward_payout(&next_pool, bank.balance_of(Asset::Reward), reward_owed) {
            Ok(payout) => {
                reward_paid = settle_reward_payout(&mut next_pool, bank, caller, payout)?;
            }
            Err(err) => {
                msg!("Reward payout skipped on unstake: {}", err);
            }
        }
    }

    bank.push(Asset::Stake, caller, principal)?;

    next_pool.staker_count = next_pool.staker_count.saturating_sub(1);
    next_pool.last_updated = now;
    *pool = next_pool;
    position.clear();

    Ok(UnstakeReceipt {
        principal,
        reward_owed,
        reward_paid,
    })
}

/// Pays the pending reward and closes the accrual window at `now`.
///
/// The window advance and the payout form one unit: if the payout fails the
/// position is left untouched.
pub fn claim<T: AssetTransfer>(
    pool: &mut StakePool,
    position: &mut UserStake,
    bank: &mut T,
    caller: &Pubkey,
    now: i64,
) -> Result<ClaimReceipt> {
    let reward_owed = calculate_reward(pool, position, now);
    require!(reward_owed > 0, StakingError::NothingToClaim);
    require_keys_eq!(position.owner, *caller, StakingError::InvalidStakeOwner);

    let mut next_position = position.clone();
    next_position.last_claim_time = now;

    let mut next_pool = pool.clone();
    let payout = quote_reward_payout(&next_pool, bank.balance_of(Asset::Reward), reward_owed)?;
    let reward_paid = settle_reward_payout(&mut next_pool, bank, caller, payout)?;
    next_pool.last_updated = now;

    *position = next_position;
    *pool = next_pool;

    Ok(ClaimReceipt {
        reward_owed,
        reward_paid,
    })
}

/// Adds reward liquidity. Open to any funder.
pub fn fund_reward_pool<T: AssetTransfer>(
    pool: &mut StakePool,
    bank: &mut T,
    funder: &Pubkey,
    amount: u64,
    now: i64,
) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let new_pool = pool
        .total_reward_pool
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    bank.pull(Asset::Reward, funder, amount)?;

    pool.total_reward_pool = new_pool;
    pool.last_updated = now;

    Ok(())
}

/// Owner-only. Returns the previous lock duration.
pub fn set_lock_duration(
    pool: &mut StakePool,
    caller: &Pubkey,
    lock_duration: i64,
    now: i64,
) -> Result<i64> {
    require_keys_eq!(*caller, pool.owner, StakingError::Unauthorized);
    require!(lock_duration > 0, StakingError::InvalidLockDuration);

    let previous = pool.lock_duration;
    pool.lock_duration = lock_duration;
    pool.last_updated = now;
    Ok(previous)
}

/// Owner-only. Returns the previous reward rate.
pub fn set_reward_rate(
    pool: &mut StakePool,
    caller: &Pubkey,
    reward_rate: u128,
    now: i64,
) -> Result<u128> {
    require_keys_eq!(*caller, pool.owner, StakingError::Unauthorized);
    require!(reward_rate > 0, StakingError::InvalidRewardRate);

    let previous = pool.reward_rate;
    pool.reward_rate = reward_rate;
    pool.last_updated = now;
    Ok(previous)
}

/// Owner-only. Returns the previous owner.
pub fn transfer_ownership(
    pool: &mut StakePool,
    caller: &Pubkey,
    new_owner: Pubkey,
    now: i64,
) -> Result<Pubkey> {
    require_keys_eq!(*caller, pool.owner, StakingError::Unauthorized);
    require!(new_owner != Pubkey::default(), StakingError::InvalidOwner);

    let previous = pool.owner;
    pool.owner = new_owner;
    pool.last_updated = now;
    Ok(previous)
}

/// Amount a reward payout of `requested` may actually move.
///
/// Clamps to the custody balance; the clamped amount must still fit under the
/// funded pool ceiling.
pub fn quote_reward_payout(pool: &StakePool, reward_balance: u64, requested: u64) -> Result<u64> {
    require!(reward_balance > 0, StakingError::NoRewardsInPool);

    let payout = requested.min(reward_balance);
    require!(
        payout <= pool.total_reward_pool,
        StakingError::InsufficientRewardPool
    );
    Ok(payout)
}

/// Pushes a quoted payout and books it against the pool.
fn settle_reward_payout<T: AssetTransfer>(
    pool: &mut StakePool,
    bank: &mut T,
    to: &Pubkey,
    payout: u64,
) -> Result<u64> {
    let remaining = pool
        .total_reward_pool
        .checked_sub(payout)
        .ok_or(StakingError::InsufficientRewardPool)?;
    let distributed = pool
        .total_distributed
        .checked_add(payout)
        .ok_or(StakingError::MathOverflow)?;

    bank.push(Asset::Reward, to, payout)?;

    pool.total_reward_pool = remaining;
    pool.total_distributed = distributed;
    Ok(payout)
}
