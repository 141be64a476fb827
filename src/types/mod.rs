//! User-facing types for vault flows

pub mod vault;

pub use vault::{DepositParams, MigrateParams, StakeInfo, VaultPosition, WithdrawParams};
