use anchor_lang::prelude::*;

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakePool {
    pub owner: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub stake_vault: Pubkey,
    pub reward_vault: Pubkey,

    pub lock_duration: i64,
    pub reward_rate: u128,

    pub total_staked: u64,
    pub total_reward_pool: u64,
    pub total_distributed: u64,
    pub staker_count: u64,

    pub created_at: i64,
    pub last_updated: i64,

    pub stake_vault_bump: u8,
    pub reward_vault_bump: u8,
    pub bump: u8,
}

impl StakePool {
    pub const LEN: usize = 8
        + (32 * 5)
        + 8
        + 16
        + (8 * 4)
        + (8 * 2)
        + 3;
}

/// Global parameters and counters returned by `get_pool_info`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolInfo {
    pub owner: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub lock_duration: i64,
    pub reward_rate: u128,
    pub total_staked: u64,
    pub total_reward_pool: u64,
    pub total_distributed: u64,
    pub staker_count: u64,
}

impl From<&StakePool> for PoolInfo {
    fn from(pool: &StakePool) -> Self {
        Self {
            owner: pool.owner,
            stake_mint: pool.stake_mint,
            reward_mint: pool.reward_mint,
            lock_duration: pool.lock_duration,
            reward_rate: pool.reward_rate,
            total_staked: pool.total_staked,
            total_reward_pool: pool.total_reward_pool,
            total_distributed: pool.total_distributed,
            staker_count: pool.staker_count,
        }
    }
}
