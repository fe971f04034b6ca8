//! Instruction handlers for the Reward Staking program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod claim_rewards;
pub mod fund_reward_pool;
pub mod initialize;
pub mod queries;
pub mod stake;
pub mod unstake;

pub use admin::*;
pub use claim_rewards::*;
pub use fund_reward_pool::*;
pub use initialize::*;
pub use queries::*;
pub use stake::*;
pub use unstake::*;
