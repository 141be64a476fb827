//! Contract bindings for vault deployments

pub mod erc20;
pub mod staking;
pub mod vault;

pub use erc20::*;
pub use staking::*;
pub use vault::*;
