//! Transaction route classification
//!
//! A deposit or withdrawal takes one of a closed set of paths: a direct vault
//! call, a direct staking call, or the Enso aggregated swap as the catch-all.
//! Classification is a pure function of token addresses and chain ids; the
//! aggregated route is the universal fallback, so it never fails. Callers
//! branch exhaustively on the tag - each variant implies a different target
//! contract and approval.

use alloy::primitives::Address;

/// The transaction path chosen for a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Deposit the underlying asset straight into the vault.
    DirectDeposit,
    /// Stake already-held vault shares into the staking contract.
    DirectStake,
    /// Redeem shares for the underlying asset from the vault.
    DirectWithdraw,
    /// Unstake shares from the staking contract, no redemption.
    DirectUnstake,
    /// Everything else: cross-chain, arbitrary tokens, combined hops.
    Enso,
}

impl Route {
    /// True for single-contract paths that skip the aggregator.
    pub fn is_direct(&self) -> bool {
        !matches!(self, Route::Enso)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::DirectDeposit => "direct-deposit",
            Route::DirectStake => "direct-stake",
            Route::DirectWithdraw => "direct-withdraw",
            Route::DirectUnstake => "direct-unstake",
            Route::Enso => "enso",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The contract identities one vault deployment is classified against.
///
/// The vault address doubles as the share token address (ERC-4626 vaults are
/// their own share token).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultIdentity {
    /// Chain the vault lives on.
    pub chain_id: u64,
    /// Underlying asset token.
    pub asset: Address,
    /// Vault / share token.
    pub vault: Address,
    /// Staking contract, if the deployment has one.
    pub staking: Option<Address>,
}

impl VaultIdentity {
    fn is_staking(&self, token: Address) -> bool {
        self.staking == Some(token)
    }
}

/// Where a withdrawal is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalSource {
    /// Unstaked shares held in the wallet.
    Vault,
    /// Shares locked in the staking contract.
    Staking,
}

/// Classify a deposit.
///
/// Precedence: direct deposit (source is the underlying asset, destination is
/// the vault itself), then direct stake (source is the share token,
/// destination is the staking contract), then Enso. Any cross-chain source
/// falls through to Enso.
pub fn classify_deposit(
    identity: &VaultIdentity,
    source_token: Address,
    source_chain: u64,
    destination_token: Address,
) -> Route {
    let same_chain = source_chain == identity.chain_id;
    if same_chain && source_token == identity.asset && destination_token == identity.vault {
        Route::DirectDeposit
    } else if same_chain && source_token == identity.vault && identity.is_staking(destination_token)
    {
        Route::DirectStake
    } else {
        Route::Enso
    }
}

/// Classify a withdrawal.
///
/// Precedence: direct unstake (staked shares out to the share token), then
/// direct withdraw (vault shares redeemed to the underlying asset on the same
/// chain), then Enso for cross-chain exits, zaps to arbitrary tokens, and
/// combined unstake-redeem-swap hops.
pub fn classify_withdrawal(
    identity: &VaultIdentity,
    source: WithdrawalSource,
    destination_token: Address,
    destination_chain: u64,
) -> Route {
    let same_chain = destination_chain == identity.chain_id;
    match source {
        WithdrawalSource::Staking if same_chain && destination_token == identity.vault => {
            Route::DirectUnstake
        }
        WithdrawalSource::Vault if same_chain && destination_token == identity.asset => {
            Route::DirectWithdraw
        }
        _ => Route::Enso,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const CHAIN: u64 = 1;

    fn identity() -> VaultIdentity {
        VaultIdentity {
            chain_id: CHAIN,
            asset: address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
            vault: address!("be53a109b494e5c9f97b9cd39fe969be68bf6204"),
            staking: Some(address!("622fa41799406b120f9a40da843d358b7b2cfee3")),
        }
    }

    fn unrelated_token() -> Address {
        address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")
    }

    #[test]
    fn test_asset_into_vault_is_direct_deposit() {
        let id = identity();
        assert_eq!(
            classify_deposit(&id, id.asset, CHAIN, id.vault),
            Route::DirectDeposit
        );
    }

    #[test]
    fn test_shares_into_staking_is_direct_stake() {
        let id = identity();
        assert_eq!(
            classify_deposit(&id, id.vault, CHAIN, id.staking.unwrap()),
            Route::DirectStake
        );
    }

    #[test]
    fn test_other_tokens_deposit_via_enso() {
        let id = identity();
        // An unrelated ERC-20 as the source
        assert_eq!(
            classify_deposit(&id, unrelated_token(), CHAIN, id.vault),
            Route::Enso
        );
        // Underlying asset but aimed at the staking contract (auto-stake zap)
        assert_eq!(
            classify_deposit(&id, id.asset, CHAIN, id.staking.unwrap()),
            Route::Enso
        );
    }

    #[test]
    fn test_cross_chain_deposit_via_enso() {
        let id = identity();
        assert_eq!(
            classify_deposit(&id, id.asset, 42161, id.vault),
            Route::Enso
        );
    }

    #[test]
    fn test_no_staking_contract_configured() {
        let id = VaultIdentity {
            staking: None,
            ..identity()
        };
        // Nothing can classify as a stake without a staking address
        assert_eq!(
            classify_deposit(&id, id.vault, CHAIN, unrelated_token()),
            Route::Enso
        );
    }

    #[test]
    fn test_staked_shares_out_is_direct_unstake() {
        let id = identity();
        assert_eq!(
            classify_withdrawal(&id, WithdrawalSource::Staking, id.vault, CHAIN),
            Route::DirectUnstake
        );
    }

    #[test]
    fn test_shares_to_asset_is_direct_withdraw() {
        let id = identity();
        assert_eq!(
            classify_withdrawal(&id, WithdrawalSource::Vault, id.asset, CHAIN),
            Route::DirectWithdraw
        );
    }

    #[test]
    fn test_zap_and_cross_chain_withdrawals_via_enso() {
        let id = identity();
        // Zap out to an arbitrary token
        assert_eq!(
            classify_withdrawal(&id, WithdrawalSource::Vault, unrelated_token(), CHAIN),
            Route::Enso
        );
        // Same asset, different chain
        assert_eq!(
            classify_withdrawal(&id, WithdrawalSource::Vault, id.asset, 10),
            Route::Enso
        );
        // Staked position straight to the underlying (unstake + redeem)
        assert_eq!(
            classify_withdrawal(&id, WithdrawalSource::Staking, id.asset, CHAIN),
            Route::Enso
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let id = identity();
        let first = classify_deposit(&id, id.asset, CHAIN, id.vault);
        for _ in 0..3 {
            assert_eq!(classify_deposit(&id, id.asset, CHAIN, id.vault), first);
        }
        let first = classify_withdrawal(&id, WithdrawalSource::Vault, id.asset, CHAIN);
        for _ in 0..3 {
            assert_eq!(
                classify_withdrawal(&id, WithdrawalSource::Vault, id.asset, CHAIN),
                first
            );
        }
    }
}
