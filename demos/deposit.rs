//! Deposit into the vault
//!
//! Run with: cargo run --example deposit -- <amount>
//!
//! Requires PRIVATE_KEY and ALCHEMY_API_KEY environment variables

use vaultkit::{format_units, DepositParams, LocalSigner, TxSettings, VaultClient, VaultConfig};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let amount_text = std::env::args().nth(1).unwrap_or_else(|| "10".to_string());

    let private_key = std::env::var("PRIVATE_KEY").expect("PRIVATE_KEY must be set");

    let config = VaultConfig::default();
    let decimals = config.asset_decimals;
    let signer = LocalSigner::from_private_key(&private_key, &config.rpc_url).await?;
    let mut client = VaultClient::new(signer, config).await?;
    client.set_settings(TxSettings::default().with_slippage(0.5))?;

    println!("Connected wallet: {}", client.address());

    let balance = client.get_asset_balance().await?;
    println!("Asset balance: {}", format_units(balance, decimals));

    let params = DepositParams::from_text(&amount_text, decimals)?;
    println!("Depositing {}...", amount_text);

    let tx_hash = client.deposit(params).await?;
    println!("Sent: {tx_hash}");

    let receipt = client.wait_for_receipt(tx_hash).await?;
    println!("Confirmed in block {:?}", receipt.block_number);

    let position = client.get_position().await?;
    println!(
        "Position: {} shares (~{:.2} assets)",
        format_units(position.shares, decimals),
        position.value
    );

    Ok(())
}
