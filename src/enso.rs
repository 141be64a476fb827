//! Enso routing API client
//!
//! The aggregated-swap route delegates pathfinding to Enso: given a source
//! token/chain and a destination token/chain, the API returns the expected
//! output amount and a ready-to-send transaction. The SDK treats both as
//! opaque values; "no route" surfaces as an error the caller can map to its
//! own unavailable state.

use alloy::primitives::{Address, Bytes, U256};
use eyre::{Context, Result};
use serde::Deserialize;

const ENSO_API_BASE: &str = "https://api.enso.finance/api/v1";

/// Parameters for a route quote request
#[derive(Debug, Clone)]
pub struct RouteParams {
    /// Source chain id
    pub chain_id: u64,
    /// Destination chain id (same as `chain_id` for single-chain routes)
    pub destination_chain_id: u64,
    /// Address executing the route
    pub from_address: Address,
    /// Token to sell (source token, vault, or share token)
    pub token_in: Address,
    /// Token to buy (vault share, underlying, or arbitrary ERC-20)
    pub token_out: Address,
    /// Exact input amount in raw units
    pub amount_in: U256,
    /// Slippage tolerance in basis points
    pub slippage_bps: u16,
    /// Receiver of the output (defaults to `from_address`)
    pub receiver: Option<Address>,
}

/// Transaction payload returned by the routing API
#[derive(Debug, Clone, Deserialize)]
pub struct RouteTransaction {
    /// Contract to call (the Enso router)
    pub to: Address,
    /// Encoded calldata
    pub data: Bytes,
    /// Native value to attach
    pub value: String,
}

impl RouteTransaction {
    /// Native value as U256 (0 if unparseable)
    pub fn value_raw(&self) -> U256 {
        self.value.parse().unwrap_or_default()
    }
}

/// A route quote from the Enso API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuote {
    /// Expected output amount in raw units (string-encoded)
    pub amount_out: String,
    /// Price impact in basis points, when the API can estimate it
    #[serde(default)]
    pub price_impact: Option<f64>,
    /// Gas estimate for the route transaction
    #[serde(default)]
    pub gas: Option<String>,
    /// The transaction to execute the route
    pub tx: RouteTransaction,
}

impl RouteQuote {
    /// Expected output as U256 (0 if unparseable)
    pub fn amount_out_raw(&self) -> U256 {
        self.amount_out.parse().unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

/// Client for the Enso routing API
pub struct EnsoClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl EnsoClient {
    /// Create a new client, optionally authenticated
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            base_url: ENSO_API_BASE.to_string(),
            api_key,
            client: reqwest::Client::builder()
                .user_agent("vaultkit/0.1.0")
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .use_rustls_tls()
                .build()
                .expect("reqwest client construction cannot fail with static config"),
        }
    }

    /// Override the API base URL (for testing or self-hosted routers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch a route quote for an exact-in swap
    pub async fn quote_route(&self, params: &RouteParams) -> Result<RouteQuote> {
        let receiver = params.receiver.unwrap_or(params.from_address);
        let query = [
            ("chainId", params.chain_id.to_string()),
            ("destinationChainId", params.destination_chain_id.to_string()),
            ("fromAddress", params.from_address.to_string()),
            ("tokenIn", params.token_in.to_string()),
            ("tokenOut", params.token_out.to_string()),
            ("amountIn", params.amount_in.to_string()),
            ("slippage", params.slippage_bps.to_string()),
            ("receiver", receiver.to_string()),
            ("routingStrategy", "router".to_string()),
        ];

        let mut request = self
            .client
            .get(format!("{}/shortcuts/route", self.base_url))
            .query(&query);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        tracing::debug!(
            token_in = %params.token_in,
            token_out = %params.token_out,
            amount_in = %params.amount_in,
            "requesting Enso route"
        );

        let response = request.send().await.context("Failed to fetch route")?;

        let status = response.status();
        let text = response.text().await.context("Failed to read route response")?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.message)
                .unwrap_or_else(|_| text.clone());
            eyre::bail!("No route available: {} ({})", message, status);
        }

        let quote: RouteQuote = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse route response: {}", &text[..text.len().min(200)]))?;

        tracing::debug!(amount_out = %quote.amount_out, "Enso route found");

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_route_quote() {
        let payload = r#"{
            "amountOut": "995123456",
            "priceImpact": 12.5,
            "gas": "310000",
            "tx": {
                "to": "0x80eba3855878739f4710233a8a19d89bdd2ffb8e",
                "data": "0xb35d7e73",
                "value": "0"
            }
        }"#;

        let quote: RouteQuote = serde_json::from_str(payload).unwrap();
        assert_eq!(quote.amount_out_raw(), U256::from(995_123_456u64));
        assert_eq!(quote.price_impact, Some(12.5));
        assert_eq!(quote.tx.value_raw(), U256::ZERO);
        assert_eq!(
            quote.tx.to,
            "0x80eba3855878739f4710233a8a19d89bdd2ffb8e"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn test_decode_route_quote_without_optionals() {
        let payload = r#"{
            "amountOut": "1",
            "tx": { "to": "0x80eba3855878739f4710233a8a19d89bdd2ffb8e", "data": "0x", "value": "2" }
        }"#;

        let quote: RouteQuote = serde_json::from_str(payload).unwrap();
        assert_eq!(quote.price_impact, None);
        assert_eq!(quote.gas, None);
        assert_eq!(quote.tx.value_raw(), U256::from(2u64));
    }
}
