//! Stake instruction handler.
//!
//! Handles depositing stake tokens into the pool.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::StakeRecorded;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::token_bank::{TokenBank, TokenChannel};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.stake_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = stake_vault @ StakingError::VaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's position (created if first time staking).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// User's token account for the stake token.
    #[account(
        mut,
        constraint = user_token_account.mint == stake_pool.stake_mint @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::InvalidStakeOwner
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's stake vault.
    #[account(mut)]
    pub stake_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,

    pub rent: Sysvar<'info, Rent>,
}

/// Stake tokens into the pool.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of tokens to stake
pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();
    let pool_key = ctx.accounts.stake_pool.key();

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
        &ctx.accounts.user_token_account,
        &ctx.accounts.stake_vault,
    ));

    let user_stake = &mut ctx.accounts.user_stake;
    if user_stake.stake_pool == Pubkey::default() {
        user_stake.owner = user;
        user_stake.stake_pool = pool_key;
        user_stake.bump = ctx.bumps.user_stake;
    }
    require_keys_eq!(user_stake.stake_pool, pool_key, StakingError::InvalidStakeOwner);

    ledger::stake(
        &mut ctx.accounts.stake_pool,
        user_stake,
        &mut bank,
        &user,
        amount,
        clock.unix_timestamp,
    )?;

    msg!("Staked {} tokens", amount);
    msg!("Total staked by user: {}", user_stake.amount);
    if let Some(unlock) = user_stake.unlocks_at(ctx.accounts.stake_pool.lock_duration) {
        msg!("Unlocks at: {}", unlock);
    }

    emit!(StakeRecorded {
        user,
        amount,
        position_amount: user_stake.amount,
        stake_start_time: user_stake.stake_start_time,
    });

    Ok(())
}
