/// Fund reward pool instruction handler.
///
/// Handles depositing reward tokens into the reward vault.
///
/// ## Security Guarantees
/// - Vault validation ensures the pool's own reward PDA
/// - Mint validation prevents wrong token deposits
/// - Anyone can fund (no owner restriction)

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolFunded;
use crate::ledger;
use crate::state::StakePool;
use crate::token_bank::{TokenBank, TokenChannel};

/// Accounts required for funding the reward pool.
#[derive(Accounts)]
pub struct FundRewardPool<'info> {
    /// The funder (anyone can fund).
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.stake_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// Funder's reward token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == stake_pool.reward_mint @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key() @ StakingError::InvalidStakeOwner
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Fund the reward pool.
///
/// # Arguments
/// * `ctx` - FundRewardPool accounts context
/// * `amount` - Amount of reward tokens to deposit
pub fn handler(ctx: Context<FundRewardPool>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let funder = ctx.accounts.funder.key();

    let stake_mint = ctx.accounts.stake_pool.stake_mint;
    let bump = [ctx.accounts.stake_pool.bump];
    let seeds: &[&[u8]] = &[STAKE_POOL_SEED, stake_mint.as_ref(), &bump];
    let signer_seeds = &[seeds];

    let mut bank = TokenBank::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.stake_pool.to_account_info(),
        signer_seeds,
    )
    .with_reward(TokenChannel::new(
        &ctx.accounts.funder_token_account,
        &ctx.accounts.reward_vault,
    ));

    ledger::fund_reward_pool(
        &mut ctx.accounts.stake_pool,
        &mut bank,
        &funder,
        amount,
        clock.unix_timestamp,
    )?;

    let total_reward_pool = ctx.accounts.stake_pool.total_reward_pool;
    msg!("Reward pool funded with {} tokens", amount);
    msg!("Reward pool ceiling: {}", total_reward_pool);
    msg!("Funder: {}", funder);

    emit!(PoolFunded {
        funder,
        amount,
        total_reward_pool,
    });

    Ok(())
}
