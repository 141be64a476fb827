//! Transaction settings shared across flows
//!
//! Slippage tolerance, the auto-stake toggle, and the approval mode are
//! process-wide configuration: many flows read them, a settings panel writes
//! them. There is one writer and access is single-task, so the contract is
//! plain last-write-wins on the client's copy.

use crate::constants::{scale_slippage, DEFAULT_SLIPPAGE, MAX_SLIPPAGE};
use eyre::{ensure, Result};

/// User-adjustable transaction settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TxSettings {
    /// Slippage tolerance in percentage (e.g., 0.5 for 0.5%)
    pub slippage_percent: f64,
    /// Stake vault shares immediately after depositing
    pub auto_stake: bool,
    /// Approve `U256::MAX` instead of the exact amount
    pub infinite_approval: bool,
}

impl Default for TxSettings {
    fn default() -> Self {
        Self {
            slippage_percent: DEFAULT_SLIPPAGE,
            auto_stake: false,
            infinite_approval: false,
        }
    }
}

impl TxSettings {
    /// Set slippage tolerance
    pub fn with_slippage(mut self, slippage_percent: f64) -> Self {
        self.slippage_percent = slippage_percent;
        self
    }

    /// Set the auto-stake toggle
    pub fn with_auto_stake(mut self, auto_stake: bool) -> Self {
        self.auto_stake = auto_stake;
        self
    }

    /// Set the approval mode
    pub fn with_infinite_approval(mut self, infinite_approval: bool) -> Self {
        self.infinite_approval = infinite_approval;
        self
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.slippage_percent >= 0.0 && self.slippage_percent <= MAX_SLIPPAGE,
            "Slippage must be between 0 and {}%",
            MAX_SLIPPAGE
        );
        Ok(())
    }

    /// Slippage as basis points for the routing API
    pub fn slippage_bps(&self) -> u16 {
        scale_slippage(self.slippage_percent)
    }
}
