/// Admin instruction handlers.
///
/// Handles owner-only operations for the staking pool.
///
/// ## Security Guarantees
/// - Every handler requires signer == pool.owner
/// - PDA validation ensures the correct pool
/// - Zero parameters are rejected

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{OwnershipTransferred, ParameterUpdated, PoolParameter};
use crate::ledger;
use crate::state::StakePool;

/// Accounts required for admin operations.
///
/// The owner check itself lives in the ledger so it is shared with tests.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The pool owner.
    pub owner: Signer<'info>,

    /// The stake pool to modify.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.stake_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,
}

/// Set the lock duration for all positions, including ones already locked.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `lock_duration` - New lock duration in seconds
pub fn set_lock_duration_handler(ctx: Context<AdminControl>, lock_duration: i64) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    let previous = ledger::set_lock_duration(
        &mut ctx.accounts.stake_pool,
        &owner,
        lock_duration,
        clock.unix_timestamp,
    )?;

    msg!("Lock duration updated: {}s -> {}s", previous, lock_duration);
    msg!("Owner: {}", owner);

    emit!(ParameterUpdated {
        owner,
        parameter: PoolParameter::LockDuration,
        old_value: previous as u128,
        new_value: lock_duration as u128,
    });

    Ok(())
}

/// Set the reward rate. Applies to every open accrual window.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `reward_rate` - New rate, scaled by `SCALE`
pub fn set_reward_rate_handler(ctx: Context<AdminControl>, reward_rate: u128) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    let previous = ledger::set_reward_rate(
        &mut ctx.accounts.stake_pool,
        &owner,
        reward_rate,
        clock.unix_timestamp,
    )?;

    msg!("Reward rate updated: {} -> {}", previous, reward_rate);
    msg!("Owner: {}", owner);

    emit!(ParameterUpdated {
        owner,
        parameter: PoolParameter::RewardRate,
        old_value: previous,
        new_value: reward_rate,
    });

    Ok(())
}

/// Transfer pool ownership to a new address.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `new_owner` - New owner pubkey (must not be the default key)
pub fn transfer_ownership_handler(ctx: Context<AdminControl>, new_owner: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    let previous = ledger::transfer_ownership(
        &mut ctx.accounts.stake_pool,
        &owner,
        new_owner,
        clock.unix_timestamp,
    )?;

    msg!("Ownership transferred: {} -> {}", previous, new_owner);

    emit!(OwnershipTransferred {
        previous_owner: previous,
        new_owner,
    });

    Ok(())
}
