use anchor_lang::prelude::*;

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UserStake {
    pub owner: Pubkey,
    pub stake_pool: Pubkey,

    pub amount: u64,

    pub stake_start_time: i64,
    pub last_claim_time: i64,

    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1;

    /// A zero amount is indistinguishable from a position that never existed.
    pub fn is_active(&self) -> bool {
        self.amount > 0
    }

    /// Earliest timestamp at which the position may be withdrawn.
    pub fn unlocks_at(&self, lock_duration: i64) -> Option<i64> {
        self.stake_start_time.checked_add(lock_duration)
    }

    pub fn is_lock_ended(&self, now: i64, lock_duration: i64) -> bool {
        match self.unlocks_at(lock_duration) {
            Some(unlock) => now >= unlock,
            None => false,
        }
    }

    /// Clears the position back to its never-staked shape.
    pub fn clear(&mut self) {
        self.amount = 0;
        self.stake_start_time = 0;
        self.last_claim_time = 0;
    }
}

/// Snapshot of a position returned by `get_user_stake_info`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStakeInfo {
    pub amount: u64,
    pub stake_start_time: i64,
    pub last_claim_time: i64,
    pub pending_reward: u64,
}
