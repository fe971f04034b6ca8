//! SPL token implementation of [`AssetTransfer`].
//!
//! Pulls are signed by the user; pushes are signed by the stake pool PDA,
//! which is the authority of both vaults.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::ledger::{Asset, AssetTransfer};

/// A user token account paired with the pool vault of the same mint.
pub struct TokenChannel<'info> {
    user_token_account: AccountInfo<'info>,
    user_token_owner: Pubkey,
    vault: AccountInfo<'info>,
    vault_balance: u64,
}

impl<'info> TokenChannel<'info> {
    pub fn new(
        user_token_account: &Account<'info, TokenAccount>,
        vault: &Account<'info, TokenAccount>,
    ) -> Self {
        Self {
            user_token_account: user_token_account.to_account_info(),
            user_token_owner: user_token_account.owner,
            vault: vault.to_account_info(),
            vault_balance: vault.amount,
        }
    }
}

pub struct TokenBank<'a, 'info> {
    token_program: AccountInfo<'info>,
    user: AccountInfo<'info>,
    pool: AccountInfo<'info>,
    pool_signer_seeds: &'a [&'a [&'a [u8]]],
    stake: Option<TokenChannel<'info>>,
    reward: Option<TokenChannel<'info>>,
}

impl<'a, 'info> TokenBank<'a, 'info> {
    pub fn new(
        token_program: AccountInfo<'info>,
        user: AccountInfo<'info>,
        pool: AccountInfo<'info>,
        pool_signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            token_program,
            user,
            pool,
            pool_signer_seeds,
            stake: None,
            reward: None,
        }
    }

    pub fn with_stake(mut self, channel: TokenChannel<'info>) -> Self {
        self.stake = Some(channel);
        self
    }

    pub fn with_reward(mut self, channel: TokenChannel<'info>) -> Self {
        self.reward = Some(channel);
        self
    }

    fn channel(&mut self, asset: Asset) -> Result<&mut TokenChannel<'info>> {
        let channel = match asset {
            Asset::Stake => self.stake.as_mut(),
            Asset::Reward => self.reward.as_mut(),
        };
        channel.ok_or_else(|| error!(StakingError::TransferFailed))
    }
}

impl<'a, 'info> AssetTransfer for TokenBank<'a, 'info> {
    fn pull(&mut self, asset: Asset, from: &Pubkey, amount: u64) -> Result<()> {
        let token_program = self.token_program.clone();
        let authority = self.user.clone();
        let channel = self.channel(asset)?;
        require_keys_eq!(channel.user_token_owner, *from, StakingError::InvalidStakeOwner);

        let cpi_accounts = Transfer {
            from: channel.user_token_account.clone(),
            to: channel.vault.clone(),
            authority,
        };
        let cpi_ctx = CpiContext::new(token_program, cpi_accounts);
        token::transfer(cpi_ctx, amount).map_err(|_| error!(StakingError::TransferFailed))?;

        channel.vault_balance = channel
            .vault_balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    fn push(&mut self, asset: Asset, to: &Pubkey, amount: u64) -> Result<()> {
        let token_program = self.token_program.clone();
        let authority = self.pool.clone();
        let signer_seeds = self.pool_signer_seeds;
        let channel = self.channel(asset)?;
        require_keys_eq!(channel.user_token_owner, *to, StakingError::InvalidStakeOwner);
        require!(channel.vault_balance >= amount, StakingError::TransferFailed);

        let cpi_accounts = Transfer {
            from: channel.vault.clone(),
            to: channel.user_token_account.clone(),
            authority,
        };
        let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, amount).map_err(|_| error!(StakingError::TransferFailed))?;

        channel.vault_balance -= amount;
        Ok(())
    }

    fn balance_of(&self, asset: Asset) -> u64 {
        let channel = match asset {
            Asset::Stake => self.stake.as_ref(),
            Asset::Reward => self.reward.as_ref(),
        };
        channel.map(|c| c.vault_balance).unwrap_or(0)
    }
}
