//! Claim rewards instruction handler.
//!
//! Handles claiming accrued rewards without unstaking.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardClaimed;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::token_bank::{TokenBank, TokenChannel};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// The user claiming rewards.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.stake_mint.as_ref()],
        bump = stake_pool.bump,
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

    /// User's token account for receiving rewards.
    #[account(
        mut,
        constraint = user_reward_token_account.mint == stake_pool.reward_mint @ StakingError::MintMismatch,
        constraint = user_reward_token_account.owner == user.key() @ StakingError::InvalidStakeOwner
    )]
    pub user_reward_token_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Claim accrued rewards.
///
/// Pays at most the reward vault balance. A successful claim consumes the
/// accrual window in full, clamped payouts included; a failed payout leaves
/// the window where it was.
pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
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
    .with_reward(TokenChannel::new(
        &ctx.accounts.user_reward_token_account,
        &ctx.accounts.reward_vault,
    ));

    let receipt = ledger::claim(
        &mut ctx.accounts.stake_pool,
        &mut ctx.accounts.user_stake,
        &mut bank,
        &user,
        clock.unix_timestamp,
    )?;

    let stake_pool = &ctx.accounts.stake_pool;
    msg!("Claimed {} reward tokens (owed {})", receipt.reward_paid, receipt.reward_owed);
    msg!("Reward pool remaining: {}", stake_pool.total_reward_pool);
    msg!("Total distributed from pool: {}", stake_pool.total_distributed);

    emit!(RewardClaimed {
        user,
        reward_owed: receipt.reward_owed,
        reward_paid: receipt.reward_paid,
    });

    Ok(())
}
