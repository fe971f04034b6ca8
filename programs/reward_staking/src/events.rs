use anchor_lang::prelude::*;

//
// Events: emitted for off-chain indexers. Each names the actor and the quantity.
//

/// Emitted once when a pool is created.
#[event]
pub struct PoolInitialized {
    pub owner: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub lock_duration: i64,
    pub reward_rate: u128,
}

/// Emitted on every deposit, including top-ups.
#[event]
pub struct StakeRecorded {
    pub user: Pubkey,
    pub amount: u64,
    /// Position balance after the deposit.
    pub position_amount: u64,
    /// Restarted lock window start.
    pub stake_start_time: i64,
}

/// Emitted when a position is withdrawn.
#[event]
pub struct UnstakeRecorded {
    pub user: Pubkey,
    pub principal: u64,
    pub reward_owed: u64,
    /// Zero when the reward pool could not pay.
    pub reward_paid: u64,
}

/// Emitted when rewards leave the pool through `claim_rewards`.
#[event]
pub struct RewardClaimed {
    pub user: Pubkey,
    pub reward_owed: u64,
    pub reward_paid: u64,
}

/// Emitted when reward liquidity is added.
#[event]
pub struct PoolFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub total_reward_pool: u64,
}

/// Which admin parameter changed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolParameter {
    LockDuration,
    RewardRate,
}

/// Emitted by the owner-only parameter setters.
#[event]
pub struct ParameterUpdated {
    pub owner: Pubkey,
    pub parameter: PoolParameter,
    pub old_value: u128,
    pub new_value: u128,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
