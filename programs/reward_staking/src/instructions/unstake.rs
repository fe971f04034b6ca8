//! Unstake instruction handler.
//!
//! Withdraws the full position and pays pending rewards when the pool can.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{RewardClaimed, UnstakeRecorded};
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::token_bank::{TokenBank, TokenChannel};

/// Accounts required for unstaking.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The user unstaking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.stake_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = stake_vault @ StakingError::VaultMismatch,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's position.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ StakingError::InvalidStakeOwner,
        constraint = user_stake.stake_pool == stake_pool.key()
    )]
    pub user_stake: Account<'info, UserStake>,

    /// User's token account receiving the principal.
    #[account(
        mut,
        constraint = user_stake_token_account.mint == stake_pool.stake_mint @ StakingError::MintMismatch,
        constraint = user_stake_token_account.owner == user.key() @ StakingError::InvalidStakeOwner
    )]
    pub user_stake_token_account: Account<'info, TokenAccount>,

    /// User's token account receiving rewards. Required even when the reward
    /// pool is empty, so a user must hold a reward-mint token account to unstake.
    #[account(
        mut,
        constraint = user_reward_token_account.mint == stake_pool.reward_mint @ StakingError::MintMismatch,
        constraint = user_reward_token_account.owner == user.key() @ StakingError::InvalidStakeOwner
    )]
    pub user_reward_token_account: Account<'info, TokenAccount>,

    /// Pool's stake vault.
    #[account(mut)]
    pub stake_vault: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Unstake the full position.
///
/// Principal is always returned once the lock has elapsed; the reward leg is
/// skipped when the reward pool cannot cover it. The caller must pass a token
/// account for the reward mint even if no reward will be paid.
pub fn handler(ctx: Context<Unstake>) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();

    let stake_mint = ctx.accounts.stake_pool.stake_mint;
    let bump = [ctx.accounts.stake_pool.bump];
    let seeds: &[&[u8]] = &[STAKE_POOL_SEED, stake_mint.as_ref(), &bump];
    let signer_seeds = &[seeds];

    let mut bank = TokenBank::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.user.to_account_info(),
        ctx.accounts.stake_pool.to_account_info(),
        signer_seeds,
    )
    .with_stake(TokenChannel::new(
        &ctx.accounts.user_stake_token_account,
        &ctx.accounts.stake_vault,
    ))
    .with_reward(TokenChannel::new(
        &ctx.accounts.user_reward_token_account,
        &ctx.accounts.reward_vault,
    ));

    let receipt = ledger::unstake(
        &mut ctx.accounts.stake_pool,
        &mut ctx.accounts.user_stake,
        &mut bank,
        &user,
        clock.unix_timestamp,
    )?;

    msg!("Unstaked {} tokens", receipt.principal);
    msg!(
        "Reward owed: {}, paid: {}",
        receipt.reward_owed,
        receipt.reward_paid
    );
    msg!("Total staked in pool: {}", ctx.accounts.stake_pool.total_staked);

    if receipt.reward_paid > 0 {
        emit!(RewardClaimed {
            user,
            reward_owed: receipt.reward_owed,
            reward_paid: receipt.reward_paid,
        });
    }
    emit!(UnstakeRecorded {
        user,
        principal: receipt.principal,
        reward_owed: receipt.reward_owed,
        reward_paid: receipt.reward_paid,
    });

    Ok(())
}
