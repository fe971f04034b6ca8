/// Initialize instruction handler.
///
/// Creates a staking pool for one stake mint, with one vault per asset channel.
///
/// ## Security Guarantees
/// - Both vaults are PDAs whose token authority is the stake pool PDA
/// - Stake and reward mints are locked to pool state permanently
/// - All parameters validated before the pool is usable

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::events::PoolInitialized;
use crate::ledger;
use crate::state::StakePool;

/// Accounts required for pool initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the accounts and becomes the pool owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The stake pool account to be created.
    /// SECURITY: PDA derived from STAKE_POOL_SEED + stake mint ensures one pool per token.
    #[account(
        init,
        payer = owner,
        space = StakePool::LEN,
        seeds = [STAKE_POOL_SEED, stake_mint.key().as_ref()],
        bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// Mint of the asset users deposit.
    pub stake_mint: Account<'info, Mint>,

    /// Mint of the asset rewards are paid in.
    pub reward_mint: Account<'info, Mint>,

    /// Vault holding staked principal.
    #[account(
        init,
        payer = owner,
        seeds = [STAKE_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = stake_mint,
        token::authority = stake_pool
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// Vault holding reward liquidity.
    #[account(
        init,
        payer = owner,
        seeds = [REWARD_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = stake_pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,

    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new staking pool.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `lock_duration` - Seconds a stake must remain before it can be withdrawn
/// * `reward_rate` - Reward units per staked unit per second, scaled by `SCALE`
pub fn handler(ctx: Context<Initialize>, lock_duration: i64, reward_rate: u128) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();
    let stake_mint = ctx.accounts.stake_mint.key();
    let reward_mint = ctx.accounts.reward_mint.key();

    let stake_pool = &mut ctx.accounts.stake_pool;
    ledger::initialize_pool(
        stake_pool,
        owner,
        stake_mint,
        reward_mint,
        lock_duration,
        reward_rate,
        clock.unix_timestamp,
    )?;

    stake_pool.stake_vault = ctx.accounts.stake_vault.key();
    stake_pool.reward_vault = ctx.accounts.reward_vault.key();
    stake_pool.bump = ctx.bumps.stake_pool;
    stake_pool.stake_vault_bump = ctx.bumps.stake_vault;
    stake_pool.reward_vault_bump = ctx.bumps.reward_vault;

    msg!("Reward staking pool initialized");
    msg!("Owner: {}", owner);
    msg!("Stake mint: {}, reward mint: {}", stake_mint, reward_mint);
    msg!("Lock duration: {}s, reward rate: {}", lock_duration, reward_rate);

    emit!(PoolInitialized {
        owner,
        stake_mint,
        reward_mint,
        lock_duration,
        reward_rate,
    });

    Ok(())
}
