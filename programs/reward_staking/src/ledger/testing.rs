//! In-memory asset bank and a transactional harness for ledger tests.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use anchor_lang::prelude::*;

use super::{Asset, AssetTransfer, ClaimReceipt, UnstakeReceipt};
use crate::constants::SCALE;
use crate::error::StakingError;
use crate::state::{StakePool, UserStake};

/// Token balances for user wallets plus the ledger's two custody vaults.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockBank {
    wallets: HashMap<(Asset, Pubkey), u64>,
    custody: HashMap<Asset, u64>,
    failing_pulls: HashSet<Asset>,
    failing_pushes: HashSet<Asset>,
}

impl MockBank {
    pub fn mint(&mut self, asset: Asset, owner: &Pubkey, amount: u64) {
        *self.wallets.entry((asset, *owner)).or_default() += amount;
    }

    pub fn wallet(&self, asset: Asset, owner: &Pubkey) -> u64 {
        self.wallets.get(&(asset, *owner)).copied().unwrap_or(0)
    }

    /// Sends tokens straight to a vault, bypassing `fund_reward_pool`.
    pub fn donate(&mut self, asset: Asset, amount: u64) {
        *self.custody.entry(asset).or_default() += amount;
    }

    /// Removes tokens from a vault without ledger involvement.
    pub fn drain(&mut self, asset: Asset, amount: u64) {
        let held = self.custody.entry(asset).or_default();
        *held = held.saturating_sub(amount);
    }

    pub fn fail_pulls(&mut self, asset: Asset) {
        self.failing_pulls.insert(asset);
    }

    pub fn fail_pushes(&mut self, asset: Asset) {
        self.failing_pushes.insert(asset);
    }

    pub fn heal(&mut self) {
        self.failing_pulls.clear();
        self.failing_pushes.clear();
    }
}

impl AssetTransfer for MockBank {
    fn pull(&mut self, asset: Asset, from: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.failing_pulls.contains(&asset), StakingError::TransferFailed);
        let held = self.wallets.entry((asset, *from)).or_default();
        require!(*held >= amount, StakingError::TransferFailed);
        *held -= amount;
        *self.custody.entry(asset).or_default() += amount;
        Ok(())
    }

    fn push(&mut self, asset: Asset, to: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.failing_pushes.contains(&asset), StakingError::TransferFailed);
        let held = self.custody.entry(asset).or_default();
        require!(*held >= amount, StakingError::TransferFailed);
        *held -= amount;
        *self.wallets.entry((asset, *to)).or_default() += amount;
        Ok(())
    }

    fn balance_of(&self, asset: Asset) -> u64 {
        self.custody.get(&asset).copied().unwrap_or(0)
    }
}

/// A pool, its positions and the bank, driven one transaction at a time.
///
/// A failed operation restores the whole world, the way the runtime discards
/// every account write and token movement of a failed transaction.
#[derive(Clone, Debug)]
pub(crate) struct World {
    pub pool: StakePool,
    pub positions: HashMap<Pubkey, UserStake>,
    pub bank: MockBank,
    pub owner: Pubkey,
    pub now: i64,
}

impl World {
    pub fn new(lock_duration: i64, reward_rate: u128) -> Self {
        let owner = Pubkey::new_unique();
        let mut pool = StakePool::default();
        super::initialize_pool(
            &mut pool,
            owner,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            lock_duration,
            reward_rate,
            0,
        )
        .unwrap();

        Self {
            pool,
            positions: HashMap::new(),
            bank: MockBank::default(),
            owner,
            now: 0,
        }
    }

    /// One reward unit per staked unit per second, one-day lock.
    pub fn simple() -> Self {
        Self::new(crate::constants::SECONDS_PER_DAY, SCALE)
    }

    pub fn user(&mut self, stake_balance: u64) -> Pubkey {
        let user = Pubkey::new_unique();
        self.bank.mint(Asset::Stake, &user, stake_balance);
        user
    }

    pub fn funder(&mut self, reward_balance: u64) -> Pubkey {
        let funder = Pubkey::new_unique();
        self.bank.mint(Asset::Reward, &funder, reward_balance);
        funder
    }

    pub fn warp(&mut self, now: i64) {
        self.now = now;
    }

    pub fn position(&self, user: &Pubkey) -> UserStake {
        self.positions.get(user).cloned().unwrap_or_default()
    }

    pub fn reward(&self, user: &Pubkey) -> u64 {
        super::calculate_reward(&self.pool, &self.position(user), self.now)
    }

    fn transact<R>(&mut self, op: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        let snapshot = self.clone();
        let result = op(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    pub fn stake(&mut self, user: &Pubkey, amount: u64) -> Result<()> {
        let user = *user;
        self.transact(|w| {
            let now = w.now;
            let position = w.positions.entry(user).or_default();
            super::stake(&mut w.pool, position, &mut w.bank, &user, amount, now)
        })
    }

    pub fn unstake(&mut self, user: &Pubkey) -> Result<UnstakeReceipt> {
        let user = *user;
        self.transact(|w| {
            let now = w.now;
            let position = w.positions.entry(user).or_default();
            super::unstake(&mut w.pool, position, &mut w.bank, &user, now)
        })
    }

    pub fn claim(&mut self, user: &Pubkey) -> Result<ClaimReceipt> {
        let user = *user;
        self.transact(|w| {
            let now = w.now;
            let position = w.positions.entry(user).or_default();
            super::claim(&mut w.pool, position, &mut w.bank, &user, now)
        })
    }

    pub fn fund(&mut self, funder: &Pubkey, amount: u64) -> Result<()> {
        let funder = *funder;
        self.transact(|w| {
            let now = w.now;
            super::fund_reward_pool(&mut w.pool, &mut w.bank, &funder, amount, now)
        })
    }

    /// Sum of all position amounts; must always equal `total_staked`.
    pub fn staked_sum(&self) -> u64 {
        self.positions.values().map(|p| p.amount).sum()
    }
}

pub(crate) fn assert_err<T: Debug>(result: Result<T>, expected: StakingError) {
    let err = result.expect_err("operation should have failed");
    assert_eq!(err, anchor_lang::error::Error::from(expected));
}
