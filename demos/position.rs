//! Show the connected wallet's vault and staking position
//!
//! Run with: cargo run --example position
//!
//! Requires PRIVATE_KEY and ALCHEMY_API_KEY environment variables

use vaultkit::{format_units, LocalSigner, VaultClient, VaultConfig};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let private_key = std::env::var("PRIVATE_KEY").expect("PRIVATE_KEY must be set");

    let config = VaultConfig::default();
    let decimals = config.asset_decimals;
    let signer = LocalSigner::from_private_key(&private_key, &config.rpc_url).await?;
    let client = VaultClient::new(signer, config).await?;

    println!("Wallet: {}", client.address());

    let pps = client.price_per_share().await?;
    println!("Price per share: {}", format_units(pps, decimals));

    let position = client.get_position().await?;
    println!(
        "Vault: {} shares = {} assets (~{:.2})",
        format_units(position.shares, decimals),
        format_units(position.assets, decimals),
        position.value
    );

    match client.get_stake_info().await {
        Ok(info) => {
            println!(
                "Staked: {} shares, earned {} rewards",
                format_units(info.staked, decimals),
                info.earned
            );
        }
        Err(e) => println!("No staking info: {e}"),
    }

    Ok(())
}
