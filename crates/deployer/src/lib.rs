pub mod arguments;
pub mod deployment;

use {
    anyhow::{Context as _, Result},
    arguments::Arguments,
    chrono::Utc,
    deployment::DeploymentRecord,
    ethcontract::U256,
    shared::{ethrpc, network},
};

/// Deploys the contract and reports its address.
///
/// Prints the deployed address to stdout and, unless disabled, persists a
/// [`DeploymentRecord`] for downstream consumers. Any failure along the way
/// propagates to the caller; nothing is written in that case.
pub async fn run(args: Arguments) -> Result<()> {
    let web3 = ethrpc::web3(&args.node_url)?;
    let chain_id = chain_id(
        web3.eth()
            .chain_id()
            .await
            .context("failed to query chain id")?,
    )?;
    let network = args
        .network
        .clone()
        .unwrap_or_else(|| network::network_name(chain_id));
    tracing::info!("connected to network {network} (chain id {chain_id})");

    let contract = deployment::deploy(&web3, &args).await?;
    let address = deployment::format_address(contract.address());
    println!("Contract deployed to: {address}");

    if !args.skip_deployment_file {
        let record = DeploymentRecord {
            contract_name: deployment::CONTRACT_NAME.to_string(),
            contract_address: address,
            network,
            deployed_at: Utc::now(),
        };
        record.write(&args.deployment_file)?;
        println!(
            "Saved deployed address to: {}",
            args.deployment_file.display()
        );
    }

    Ok(())
}

fn chain_id(id: U256) -> Result<u64> {
    u64::try_from(id)
        .ok()
        .with_context(|| format!("chain id {id} does not fit in u64"))
}
