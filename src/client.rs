//! VaultClient - main entry point for the SDK

use crate::config::VaultConfig;
use crate::contracts::{IStakingRewards, IYieldVault, IERC20};
use crate::convert::{shares_for_redeem, shares_to_assets};
use crate::enso::{EnsoClient, RouteParams, RouteQuote};
use crate::route::{classify_deposit, classify_withdrawal, Route, WithdrawalSource};
use crate::settings::TxSettings;
use crate::signer::{TransactionSigner, TxRequest};
use crate::types::{DepositParams, MigrateParams, StakeInfo, VaultPosition, WithdrawParams};
use alloy::network::{Ethereum, TransactionBuilder};
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use alloy::rpc::types::TransactionReceipt;
use alloy::sol_types::SolCall;
use alloy::transports::http::reqwest::Url;
use eyre::{ensure, Context, Result};
use std::sync::Arc;

/// Type alias for read-only provider
type ReadProvider = Arc<RootProvider<Ethereum>>;

/// Main client for vault flows: deposit, withdraw, stake, claim, migrate
pub struct VaultClient<S: TransactionSigner> {
    signer: S,
    config: VaultConfig,
    settings: TxSettings,
    provider: ReadProvider,
    enso: EnsoClient,
}

impl<S: TransactionSigner> VaultClient<S> {
    /// Create a new VaultClient with default settings
    pub async fn new(signer: S, config: VaultConfig) -> Result<Self> {
        let url: Url = config.rpc_url.parse().context("Invalid RPC URL")?;
        // Read-only provider without fillers (we only do eth_call operations)
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_http(url);

        let enso = EnsoClient::new(config.enso_api_key.clone());

        Ok(Self {
            signer,
            config,
            settings: TxSettings::default(),
            provider: Arc::new(provider),
            enso,
        })
    }

    /// Get the signer's address
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the deployment configuration
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Get the current transaction settings
    pub fn settings(&self) -> &TxSettings {
        &self.settings
    }

    /// Replace the transaction settings (last write wins)
    pub fn set_settings(&mut self, settings: TxSettings) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    // ========== Read Helpers ==========

    /// Execute a read-only contract call and decode its return value
    async fn read<C: SolCall>(&self, to: Address, call: C) -> Result<C::Return> {
        let data = call.abi_encode();
        let result: Bytes = self
            .provider
            .call(
                alloy::rpc::types::TransactionRequest::default()
                    .with_to(to)
                    .with_input(data),
            )
            .await
            .context("Contract call failed")?;

        C::abi_decode_returns(&result).context("Failed to decode call return")
    }

    fn staking_address(&self) -> Result<Address> {
        self.config
            .staking
            .ok_or_else(|| eyre::eyre!("Staking contract not configured"))
    }

    // ========== Token Operations ==========

    /// Get a token balance for the signer
    pub async fn get_token_balance(&self, token: Address) -> Result<U256> {
        self.read(
            token,
            IERC20::balanceOfCall {
                account: self.address(),
            },
        )
        .await
    }

    /// Get the underlying asset balance
    pub async fn get_asset_balance(&self) -> Result<U256> {
        self.get_token_balance(self.config.asset).await
    }

    /// Approve token spending (raw amount)
    async fn approve_token(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let call = IERC20::approveCall { spender, amount };
        let data = Bytes::from(call.abi_encode());

        let tx = TxRequest::new(token, data);
        self.signer
            .sign_and_send(tx)
            .await
            .context("Failed to approve token")
    }

    /// Check and ensure a token allowance, approving when short.
    ///
    /// Approves the exact amount, or `U256::MAX` when the infinite-approval
    /// setting is on. The approval is confirmed before returning so the
    /// follow-up transaction does not race it.
    async fn ensure_allowance(&self, token: Address, spender: Address, amount: U256) -> Result<()> {
        let allowance = self
            .read(
                token,
                IERC20::allowanceCall {
                    owner: self.address(),
                    spender,
                },
            )
            .await?;

        if allowance < amount {
            let approve_amount = if self.settings.infinite_approval {
                U256::MAX
            } else {
                amount
            };
            tracing::info!(%token, %spender, amount = %approve_amount, "approving token");
            let tx_hash = self.approve_token(token, spender, approve_amount).await?;
            self.signer.wait_for_receipt(tx_hash).await?;
        }

        Ok(())
    }

    // ========== Vault Reads ==========

    /// Asset value of one share, scaled by 10^decimals
    pub async fn price_per_share(&self) -> Result<U256> {
        self.read(self.config.vault, IYieldVault::pricePerShareCall {})
            .await
    }

    /// Vault share balance of the signer
    pub async fn get_share_balance(&self) -> Result<U256> {
        self.read(
            self.config.vault,
            IYieldVault::balanceOfCall {
                account: self.address(),
            },
        )
        .await
    }

    /// Get the signer's vault position
    ///
    /// Share balance and price-per-share are independent reads, so they are
    /// fetched concurrently; a vault that has not priced yet reports a
    /// zero-valued position.
    pub async fn get_position(&self) -> Result<VaultPosition> {
        let (shares, price_per_share) =
            futures::future::try_join(self.get_share_balance(), self.price_per_share()).await?;

        let decimals = self.config.asset_decimals;
        let assets = shares_to_assets(shares, price_per_share, decimals);
        Ok(VaultPosition::new(shares, assets, decimals))
    }

    /// Staked share balance of the signer
    pub async fn get_staked_balance(&self) -> Result<U256> {
        let staking = self.staking_address()?;
        self.read(
            staking,
            IStakingRewards::balanceOfCall {
                account: self.address(),
            },
        )
        .await
    }

    /// Get the signer's staking position (staked shares + accrued rewards)
    pub async fn get_stake_info(&self) -> Result<StakeInfo> {
        let staking = self.staking_address()?;
        let account = self.address();
        let (staked, earned) = futures::future::try_join(
            self.read(staking, IStakingRewards::balanceOfCall { account }),
            self.read(staking, IStakingRewards::earnedCall { account }),
        )
        .await?;

        Ok(StakeInfo { staked, earned })
    }

    // ========== Deposit Flow ==========

    /// Deposit into the vault
    ///
    /// The route is classified from the source token/chain and the
    /// destination implied by the auto-stake setting: a direct vault deposit,
    /// a direct stake of already-held shares, or an Enso route for everything
    /// else (zaps, cross-chain sources, deposit-and-stake combinations).
    pub async fn deposit(&self, params: DepositParams) -> Result<TxHash> {
        params.validate()?;

        let source_token = params.source_token.unwrap_or(self.config.asset);
        let source_chain = params.source_chain.unwrap_or(self.config.chain_id);
        let destination = if self.settings.auto_stake {
            self.staking_address()?
        } else {
            self.config.vault
        };
        let receiver = params.receiver.unwrap_or_else(|| self.address());

        let route = classify_deposit(
            &self.config.identity(),
            source_token,
            source_chain,
            destination,
        );
        tracing::info!(%route, amount = %params.amount, "executing deposit");

        match route {
            Route::DirectDeposit => {
                self.ensure_allowance(self.config.asset, self.config.vault, params.amount)
                    .await?;

                let call = IYieldVault::depositCall {
                    assets: params.amount,
                    receiver,
                };
                let tx = TxRequest::new(self.config.vault, Bytes::from(call.abi_encode()));
                self.signer
                    .sign_and_send(tx)
                    .await
                    .context("Failed to deposit to vault")
            }
            Route::DirectStake => {
                let staking = self.staking_address()?;
                self.ensure_allowance(self.config.vault, staking, params.amount)
                    .await?;

                let call = IStakingRewards::stakeCall {
                    amount: params.amount,
                };
                let tx = TxRequest::new(staking, Bytes::from(call.abi_encode()));
                self.signer
                    .sign_and_send(tx)
                    .await
                    .context("Failed to stake shares")
            }
            Route::Enso => {
                let quote = self
                    .quote_enso_route(
                        source_token,
                        source_chain,
                        destination,
                        self.config.chain_id,
                        params.amount,
                        receiver,
                    )
                    .await?;
                self.execute_enso_route(source_token, params.amount, &quote)
                    .await
            }
            Route::DirectWithdraw | Route::DirectUnstake => {
                eyre::bail!("Route {} is not a deposit path", route)
            }
        }
    }

    // ========== Withdraw Flow ==========

    /// Withdraw from the vault or the staking position
    ///
    /// The share amount is derived once: the exact held balance for a max
    /// withdrawal, otherwise a ceiling conversion of the target asset amount
    /// clamped to the held balance. Routing picks a direct redeem, a direct
    /// unstake, or an Enso exit (zap or cross-chain); an Enso exit from the
    /// staking position unstakes first, then routes the freed shares.
    pub async fn withdraw(&self, params: WithdrawParams) -> Result<TxHash> {
        params.validate()?;

        let owner = self.address();
        let receiver = params.receiver.unwrap_or(owner);
        let destination_token = params.destination_token.unwrap_or(self.config.asset);
        let destination_chain = params.destination_chain.unwrap_or(self.config.chain_id);

        let held = match params.source {
            WithdrawalSource::Vault => self.get_share_balance().await?,
            WithdrawalSource::Staking => self.get_staked_balance().await?,
        };
        let price_per_share = self.price_per_share().await?;
        let shares = shares_for_redeem(
            params.target,
            held,
            price_per_share,
            self.config.asset_decimals,
        );
        ensure!(!shares.is_zero(), "Nothing to withdraw");

        let route = classify_withdrawal(
            &self.config.identity(),
            params.source,
            destination_token,
            destination_chain,
        );
        tracing::info!(%route, %shares, "executing withdrawal");

        match route {
            Route::DirectWithdraw => {
                let call = IYieldVault::redeemCall {
                    shares,
                    receiver,
                    owner,
                };
                let tx = TxRequest::new(self.config.vault, Bytes::from(call.abi_encode()));
                self.signer
                    .sign_and_send(tx)
                    .await
                    .context("Failed to redeem from vault")
            }
            Route::DirectUnstake => {
                let staking = self.staking_address()?;
                let call = IStakingRewards::withdrawCall { amount: shares };
                let tx = TxRequest::new(staking, Bytes::from(call.abi_encode()));
                self.signer
                    .sign_and_send(tx)
                    .await
                    .context("Failed to unstake shares")
            }
            Route::Enso => {
                if params.source == WithdrawalSource::Staking {
                    // Shares must be in the wallet before the router can pull them
                    let staking = self.staking_address()?;
                    let call = IStakingRewards::withdrawCall { amount: shares };
                    let tx = TxRequest::new(staking, Bytes::from(call.abi_encode()));
                    let tx_hash = self
                        .signer
                        .sign_and_send(tx)
                        .await
                        .context("Failed to unstake shares")?;
                    self.signer.wait_for_receipt(tx_hash).await?;
                }

                let quote = self
                    .quote_enso_route(
                        self.config.vault,
                        self.config.chain_id,
                        destination_token,
                        destination_chain,
                        shares,
                        receiver,
                    )
                    .await?;
                self.execute_enso_route(self.config.vault, shares, &quote)
                    .await
            }
            Route::DirectDeposit | Route::DirectStake => {
                eyre::bail!("Route {} is not a withdrawal path", route)
            }
        }
    }

    // ========== Staking Rewards ==========

    /// Claim accrued staking rewards
    pub async fn claim_rewards(&self) -> Result<TxHash> {
        let staking = self.staking_address()?;
        let call = IStakingRewards::getRewardCall {};
        let tx = TxRequest::new(staking, Bytes::from(call.abi_encode()));
        self.signer
            .sign_and_send(tx)
            .await
            .context("Failed to claim rewards")
    }

    // ========== Migration ==========

    /// Move the full vault position into another vault
    ///
    /// Redeems every held share, waits for confirmation, then deposits the
    /// redeemed assets into the target vault. Returns both transaction
    /// hashes in order.
    pub async fn migrate(&self, params: MigrateParams) -> Result<(TxHash, TxHash)> {
        let owner = self.address();
        let receiver = params.receiver.unwrap_or(owner);

        let shares = self.get_share_balance().await?;
        ensure!(!shares.is_zero(), "No position to migrate");

        let balance_before = self.get_asset_balance().await?;

        let redeem_call = IYieldVault::redeemCall {
            shares,
            receiver: owner,
            owner,
        };
        let redeem_tx = TxRequest::new(self.config.vault, Bytes::from(redeem_call.abi_encode()));
        let redeem_hash = self
            .signer
            .sign_and_send(redeem_tx)
            .await
            .context("Failed to redeem from vault")?;
        self.signer.wait_for_receipt(redeem_hash).await?;

        let balance_after = self.get_asset_balance().await?;
        let proceeds = balance_after.saturating_sub(balance_before);
        ensure!(!proceeds.is_zero(), "Redeem produced no assets");

        tracing::info!(%proceeds, to_vault = %params.to_vault, "migrating position");

        self.ensure_allowance(self.config.asset, params.to_vault, proceeds)
            .await?;

        let deposit_call = IYieldVault::depositCall {
            assets: proceeds,
            receiver,
        };
        let deposit_tx = TxRequest::new(params.to_vault, Bytes::from(deposit_call.abi_encode()));
        let deposit_hash = self
            .signer
            .sign_and_send(deposit_tx)
            .await
            .context("Failed to deposit into target vault")?;

        Ok((redeem_hash, deposit_hash))
    }

    // ========== Enso Route Execution ==========

    async fn quote_enso_route(
        &self,
        token_in: Address,
        chain_in: u64,
        token_out: Address,
        chain_out: u64,
        amount_in: U256,
        receiver: Address,
    ) -> Result<RouteQuote> {
        self.enso
            .quote_route(&RouteParams {
                chain_id: chain_in,
                destination_chain_id: chain_out,
                from_address: self.address(),
                token_in,
                token_out,
                amount_in,
                slippage_bps: self.settings.slippage_bps(),
                receiver: Some(receiver),
            })
            .await
    }

    async fn execute_enso_route(
        &self,
        token_in: Address,
        amount_in: U256,
        quote: &RouteQuote,
    ) -> Result<TxHash> {
        // The router pulls the input token from the sender
        self.ensure_allowance(token_in, quote.tx.to, amount_in)
            .await?;

        let tx = TxRequest::new(quote.tx.to, quote.tx.data.clone()).with_value(quote.tx.value_raw());
        self.signer
            .sign_and_send(tx)
            .await
            .context("Failed to execute route")
    }

    // ========== Utility Methods ==========

    /// Wait for transaction confirmation
    pub async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt> {
        self.signer.wait_for_receipt(tx_hash).await
    }

    /// Get native token (ETH) balance
    pub async fn get_eth_balance(&self) -> Result<U256> {
        self.signer.get_balance().await
    }
}
