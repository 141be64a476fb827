//! vaultkit - Rust SDK for yield vault flows
//!
//! A Rust SDK for ERC-4626 yield vaults: deposit, withdraw, stake/unstake,
//! claim rewards, and migrate positions, with zap and cross-chain cases
//! routed through the Enso aggregation API.
//!
//! # Features
//!
//! - Exact fixed-point parsing of user-typed amounts (no floats on-chain)
//! - Share/asset conversion with never-under-deliver rounding
//! - Route classification: direct vault/staking calls vs. aggregated swaps
//! - Deposit, withdraw, stake, claim, and migrate flows over `alloy`
//!
//! # Example
//!
//! ```rust,ignore
//! use vaultkit::{DepositParams, LocalSigner, VaultClient, VaultConfig};
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let config = VaultConfig::default();
//!     let signer = LocalSigner::from_private_key("0x...", &config.rpc_url).await?;
//!     let client = VaultClient::new(signer, config).await?;
//!
//!     // Deposit 100.5 USDC, parsed exactly from text
//!     let params = DepositParams::from_text("100.5", 6)?;
//!     let tx_hash = client.deposit(params).await?;
//!
//!     client.wait_for_receipt(tx_hash).await?;
//!     Ok(())
//! }
//! ```

pub mod amount;
pub mod client;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod convert;
pub mod enso;
pub mod error;
pub mod route;
pub mod settings;
pub mod signer;
pub mod types;

// Re-export main types for convenience
pub use amount::{format_units, parse_units, AmountInput};
pub use client::VaultClient;
pub use config::VaultConfig;
pub use convert::{assets_to_shares, shares_to_assets, RedeemTarget};
pub use enso::{EnsoClient, RouteQuote};
pub use error::{eyre, Context, Report, Result};
pub use route::{classify_deposit, classify_withdrawal, Route, VaultIdentity, WithdrawalSource};
pub use settings::TxSettings;
pub use signer::{LocalSigner, TransactionSigner, TxRequest};
pub use types::{DepositParams, MigrateParams, StakeInfo, VaultPosition, WithdrawParams};
