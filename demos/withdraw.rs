//! Withdraw from the vault
//!
//! Run with: cargo run --example withdraw -- [amount|max]
//!
//! Requires PRIVATE_KEY and ALCHEMY_API_KEY environment variables

use vaultkit::{format_units, LocalSigner, VaultClient, VaultConfig, WithdrawParams};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let target = std::env::args().nth(1).unwrap_or_else(|| "max".to_string());

    let private_key = std::env::var("PRIVATE_KEY").expect("PRIVATE_KEY must be set");

    let config = VaultConfig::default();
    let decimals = config.asset_decimals;
    let signer = LocalSigner::from_private_key(&private_key, &config.rpc_url).await?;
    let client = VaultClient::new(signer, config).await?;

    println!("Connected wallet: {}", client.address());

    let position = client.get_position().await?;
    println!(
        "Current position: {} shares (~{:.2} assets)",
        format_units(position.shares, decimals),
        position.value
    );

    let params = if target == "max" {
        WithdrawParams::max()
    } else {
        WithdrawParams::from_text(&target, decimals)?
    };

    let tx_hash = client.withdraw(params).await?;
    println!("Sent: {tx_hash}");

    let receipt = client.wait_for_receipt(tx_hash).await?;
    println!("Confirmed in block {:?}", receipt.block_number);

    Ok(())
}
