use std::sync::Arc;

use anyhow::{anyhow, Result};
use alloy::{
    primitives::{Address, Bytes, B256},
    providers::{Provider, ProviderBuilder},
    transports::http::{Client, Http},
};
use log::info;

use crate::chain::actors::get_chain_actors;
use crate::core::logger::{log_deploy, measure_end, measure_start, DeployLog};
use crate::source::abi::position_manager_constructor_args;
use crate::source::artifact::ContractArtifact;
use crate::source::builder::build_deploy_tx;
use crate::types::ChainConfig;

pub struct Deployment {
    pub address: Address,
    pub tx_hash: B256,
    pub gas_used: u128,
}

/// The node's first exposed account plays the deployer, the same account a
/// Hardhat/Anvil dev node hands out as its default signer.
pub async fn first_account<P>(provider: &P) -> Result<Address>
where
    P: Provider<Http<Client>>,
{
    provider
        .get_accounts()
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Node exposes no accounts; cannot resolve a deployer"))
}

/// Submit a contract-creation transaction and wait for its receipt.
pub async fn deploy_contract<P>(
    provider: &P,
    config: &ChainConfig,
    deployer: Address,
    init_code: Bytes,
) -> Result<Deployment>
where
    P: Provider<Http<Client>>,
{
    let max_fee = config.scaled_fee(provider.get_gas_price().await?);
    let nonce = provider.get_transaction_count(deployer).await?;

    let tx = build_deploy_tx(deployer, init_code, max_fee, nonce);
    let receipt = provider.send_transaction(tx).await?.get_receipt().await?;

    let address = receipt
        .contract_address
        .ok_or_else(|| anyhow!("Deployment receipt carries no contract address"))?;

    Ok(Deployment {
        address,
        tx_hash: receipt.transaction_hash,
        gas_used: receipt.gas_used,
    })
}

/// Deploy a named contract from its Hardhat artifact, constructor bound to
/// the three configured addresses (factory, WETH9, token descriptor).
pub async fn run_eth_deploy(config: &ChainConfig, chain: &str, contract: &str) -> Result<()> {
    let actors = get_chain_actors(chain)?;

    let provider = ProviderBuilder::new().on_http(config.rpc_url.parse()?);
    let provider = Arc::new(provider);

    let deployer = first_account(&*provider).await?;
    info!("deployer account: {}", deployer);

    let artifact = ContractArtifact::load(config.artifact_path(contract)?)?;
    let args = position_manager_constructor_args(
        config.addr(actors.factory_key)?,
        config.addr(actors.native_token_key)?,
        config.addr(actors.token_descriptor_key)?,
    );
    let init_code = artifact.init_code(&args)?;
    info!("init code: {} bytes", init_code.len());

    let start = measure_start("deploy");
    let deployment = deploy_contract(&*provider, config, deployer, init_code).await?;
    let elapsed_ms = start.1.elapsed().as_millis();
    measure_end(start);

    println!("{} deployed at {}", contract, deployment.address);
    log_deploy(&DeployLog {
        chain: chain.to_string(),
        contract: contract.to_string(),
        address: deployment.address.to_string(),
        tx_hash: deployment.tx_hash.to_string(),
        gas_used: deployment.gas_used,
        elapsed_ms,
    })?;

    Ok(())
}
