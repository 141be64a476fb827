//! Deployment configuration for vaultkit

use crate::route::VaultIdentity;
use alloy::primitives::Address;

/// Configuration for one vault deployment: RPC endpoint, chain id, and the
/// contract addresses flows are routed against (Ethereum mainnet USDC vault
/// by default).
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Chain ID (1 for Ethereum mainnet)
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Underlying asset token address (USDC)
    pub asset: Address,
    /// Underlying asset decimals
    pub asset_decimals: u8,
    /// Vault contract address (also the share token)
    pub vault: Address,
    /// Staking contract address (optional, for stake/claim operations)
    pub staking: Option<Address>,
    /// Enso API key (optional, for aggregated swap routes)
    pub enso_api_key: Option<String>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultConfig {
    /// Create Ethereum mainnet configuration (default)
    pub fn new() -> Self {
        let alchemy_key = std::env::var("ALCHEMY_API_KEY")
            .expect("ALCHEMY_API_KEY environment variable must be set");

        Self {
            chain_id: 1,
            rpc_url: format!("https://eth-mainnet.g.alchemy.com/v2/{}", alchemy_key),
            asset: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
                .parse()
                .unwrap(),
            asset_decimals: crate::constants::USDC_DECIMALS,
            vault: "0xBe53A109B494E5c9f97b9Cd39Fe969BE68BF6204"
                .parse()
                .unwrap(),
            staking: Some(
                "0x622fA41799406B120f9a40dA843D358b7b2CFEE3"
                    .parse()
                    .unwrap(),
            ),
            enso_api_key: std::env::var("ENSO_API_KEY").ok(),
        }
    }

    /// Alias for new() - Ethereum mainnet configuration
    pub fn mainnet() -> Self {
        Self::new()
    }

    /// Create custom configuration with specific RPC URL
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Set the chain id
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Set the underlying asset token
    pub fn with_asset(mut self, asset: Address, decimals: u8) -> Self {
        self.asset = asset;
        self.asset_decimals = decimals;
        self
    }

    /// Set the vault address
    pub fn with_vault(mut self, vault: Address) -> Self {
        self.vault = vault;
        self
    }

    /// Set the staking contract address
    pub fn with_staking(mut self, staking: Address) -> Self {
        self.staking = Some(staking);
        self
    }

    /// Set the Enso API key
    pub fn with_enso_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.enso_api_key = Some(api_key.into());
        self
    }

    /// The identity tuple route classification runs against
    pub fn identity(&self) -> VaultIdentity {
        VaultIdentity {
            chain_id: self.chain_id,
            asset: self.asset,
            vault: self.vault,
            staking: self.staking,
        }
    }
}
