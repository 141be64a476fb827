//! Vault flow types for user-facing API

use crate::amount::parse_units;
use crate::constants::unscale_from_decimals;
use crate::convert::RedeemTarget;
use crate::route::WithdrawalSource;
use alloy::primitives::{Address, U256};
use eyre::{ensure, eyre, Result};

/// Parameters for depositing into the vault
#[derive(Debug, Clone)]
pub struct DepositParams {
    /// Amount to deposit, in raw units of the source token
    pub amount: U256,
    /// Token being deposited (defaults to the vault's underlying asset)
    pub source_token: Option<Address>,
    /// Chain the source token lives on (defaults to the vault's chain)
    pub source_chain: Option<u64>,
    /// Receiver of the shares (defaults to sender)
    pub receiver: Option<Address>,
}

impl DepositParams {
    /// Create deposit params with a raw amount of the underlying asset
    pub fn new(amount: U256) -> Self {
        Self {
            amount,
            source_token: None,
            source_chain: None,
            receiver: None,
        }
    }

    /// Create deposit params from user-typed text at the given precision
    pub fn from_text(text: &str, decimals: u8) -> Result<Self> {
        let amount =
            parse_units(text, decimals).ok_or_else(|| eyre!("Invalid amount: {:?}", text))?;
        Ok(Self::new(amount))
    }

    /// Deposit a different source token (zap route)
    pub fn with_source_token(mut self, token: Address) -> Self {
        self.source_token = Some(token);
        self
    }

    /// Deposit from another chain (cross-chain route)
    pub fn with_source_chain(mut self, chain_id: u64) -> Self {
        self.source_chain = Some(chain_id);
        self
    }

    /// Set the shares receiver
    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.amount.is_zero(), "Deposit amount must be positive");
        Ok(())
    }
}

/// Parameters for withdrawing from the vault or staking position
#[derive(Debug, Clone)]
pub struct WithdrawParams {
    /// Target: a specific asset amount, or the entire balance
    pub target: RedeemTarget,
    /// Where the shares come from (wallet vault shares or staked)
    pub source: WithdrawalSource,
    /// Token to receive (defaults to the underlying asset)
    pub destination_token: Option<Address>,
    /// Chain to receive on (defaults to the vault's chain)
    pub destination_chain: Option<u64>,
    /// Receiver of the output (defaults to sender)
    pub receiver: Option<Address>,
}

impl WithdrawParams {
    /// Withdraw enough shares to receive `assets` raw units of the asset
    pub fn assets(assets: U256) -> Self {
        Self {
            target: RedeemTarget::Assets(assets),
            source: WithdrawalSource::Vault,
            destination_token: None,
            destination_chain: None,
            receiver: None,
        }
    }

    /// Withdraw the entire held balance
    pub fn max() -> Self {
        Self {
            target: RedeemTarget::Max,
            source: WithdrawalSource::Vault,
            destination_token: None,
            destination_chain: None,
            receiver: None,
        }
    }

    /// Withdraw from user-typed text at the asset's precision
    pub fn from_text(text: &str, decimals: u8) -> Result<Self> {
        let amount =
            parse_units(text, decimals).ok_or_else(|| eyre!("Invalid amount: {:?}", text))?;
        Ok(Self::assets(amount))
    }

    /// Take the shares from the staking position instead of the wallet
    pub fn from_staking(mut self) -> Self {
        self.source = WithdrawalSource::Staking;
        self
    }

    /// Receive a different token (zap route)
    pub fn with_destination_token(mut self, token: Address) -> Self {
        self.destination_token = Some(token);
        self
    }

    /// Receive on another chain (cross-chain route)
    pub fn with_destination_chain(mut self, chain_id: u64) -> Self {
        self.destination_chain = Some(chain_id);
        self
    }

    /// Set the output receiver
    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<()> {
        if let RedeemTarget::Assets(assets) = self.target {
            ensure!(!assets.is_zero(), "Withdraw amount must be positive");
        }
        Ok(())
    }
}

/// Parameters for migrating a position to another vault
#[derive(Debug, Clone)]
pub struct MigrateParams {
    /// Vault to move the position into
    pub to_vault: Address,
    /// Receiver of the new shares (defaults to sender)
    pub receiver: Option<Address>,
}

impl MigrateParams {
    /// Migrate the full position into `to_vault`
    pub fn new(to_vault: Address) -> Self {
        Self {
            to_vault,
            receiver: None,
        }
    }

    /// Set the new-shares receiver
    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.receiver = Some(receiver);
        self
    }
}

/// User's vault position
#[derive(Debug, Clone)]
pub struct VaultPosition {
    /// Share balance in raw units
    pub shares: U256,
    /// Equivalent asset amount in raw units
    pub assets: U256,
    /// Equivalent asset value for display
    pub value: f64,
}

impl VaultPosition {
    /// Create from raw values
    pub fn new(shares: U256, assets: U256, asset_decimals: u8) -> Self {
        Self {
            shares,
            assets,
            value: unscale_from_decimals(assets, asset_decimals),
        }
    }
}

/// User's staking position
#[derive(Debug, Clone)]
pub struct StakeInfo {
    /// Staked share balance in raw units
    pub staked: U256,
    /// Accrued, unclaimed rewards in raw units of the rewards token
    pub earned: U256,
}
