use std::sync::Arc;

use anyhow::Result;
use alloy::providers::Provider;
use alloy::{
    node_bindings::Anvil,
    providers::ProviderBuilder,
    transports::http::reqwest::Url,
};

use crate::chain::actors::get_chain_actors;
use crate::core::deploy::{deploy_contract, first_account};
use crate::source::abi::position_manager_constructor_args;
use crate::source::artifact::ContractArtifact;
use crate::types::ChainConfig;

/// Smoke-deploy against a disposable Anvil fork instead of the configured
/// chain. A fresh node every run, so repeated runs land the contract at
/// distinct addresses.
pub async fn run_eth_anvil(config: &ChainConfig, chain: &str, contract: &str) -> Result<()> {
    let actors = get_chain_actors(chain)?;

    // Fork from the configured RPC at its current height.
    let rpc_url = config.rpc_url.parse::<Url>()?;
    let provider = ProviderBuilder::new().on_http(rpc_url.clone());
    let provider = Arc::new(provider);
    let fork_block = provider.get_block_number().await?;

    let anvil = Anvil::new()
        .fork(rpc_url)
        .fork_block_number(fork_block)
        .block_time(1_u64)
        .spawn();

    let anvil_provider = ProviderBuilder::new()
        .on_http(anvil.endpoint().parse::<Url>()?);
    let anvil_provider = Arc::new(anvil_provider);

    let deployer = first_account(&*anvil_provider).await?;

    let artifact = ContractArtifact::load(config.artifact_path(contract)?)?;
    let args = position_manager_constructor_args(
        config.addr(actors.factory_key)?,
        config.addr(actors.native_token_key)?,
        config.addr(actors.token_descriptor_key)?,
    );
    let init_code = artifact.init_code(&args)?;

    let deployment = deploy_contract(&*anvil_provider, config, deployer, init_code).await?;
    println!(
        "{} deployed on anvil fork at {} (gas used {})",
        contract, deployment.address, deployment.gas_used
    );

    drop(anvil); // cleanup anvil instance

    Ok(())
}
