//! Read-only query handlers.
//!
//! These never write state; results are returned to the caller as
//! instruction return data.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::ledger;
use crate::state::{PoolInfo, StakePool, UserStake, UserStakeInfo};

/// Accounts required to read one user's position.
#[derive(Accounts)]
pub struct UserStakeQuery<'info> {
    /// CHECK: identity whose position is read; no signature required.
    pub user: UncheckedAccount<'info>,

    #[account(
        seeds = [STAKE_POOL_SEED, stake_pool.stake_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// CHECK: address pinned by seeds; may not exist yet, decoded in the handler.
    #[account(
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: UncheckedAccount<'info>,
}

/// Accounts required to read pool state.
#[derive(Accounts)]
pub struct PoolQuery<'info> {
    #[account(
        seeds = [STAKE_POOL_SEED, stake_pool.stake_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,
}

/// Decodes a position account, treating a missing account as no position.
fn load_position(info: &AccountInfo) -> Result<Option<UserStake>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    Ok(Some(UserStake::try_deserialize(&mut &data[..])?))
}

pub fn calculate_reward_handler(ctx: Context<UserStakeQuery>) -> Result<u64> {
    let clock = Clock::get()?;
    let position = load_position(&ctx.accounts.user_stake)?;
    Ok(position.map_or(0, |position| {
        ledger::calculate_reward(&ctx.accounts.stake_pool, &position, clock.unix_timestamp)
    }))
}

pub fn get_user_stake_info_handler(ctx: Context<UserStakeQuery>) -> Result<UserStakeInfo> {
    let clock = Clock::get()?;
    let position = load_position(&ctx.accounts.user_stake)?;
    Ok(ledger::user_stake_info(
        &ctx.accounts.stake_pool,
        position.as_ref(),
        clock.unix_timestamp,
    ))
}

pub fn get_pool_info_handler(ctx: Context<PoolQuery>) -> Result<PoolInfo> {
    Ok(PoolInfo::from(&*ctx.accounts.stake_pool))
}
