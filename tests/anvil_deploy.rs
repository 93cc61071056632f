use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::providers::ProviderBuilder;

use univ3_deployer::core::deploy::{deploy_contract, first_account};
use univ3_deployer::source::artifact::ContractArtifact;
use univ3_deployer::types::{parse_chain_config, ChainConfig};

// Init code that deploys an empty runtime; enough to exercise the
// deployment path without the multi-megabyte periphery artifacts.
const TINY_ARTIFACT: &str = r#"{"abi": [], "bytecode": "0x60006000f3"}"#;

fn local_config(anvil: &AnvilInstance) -> ChainConfig {
    let raw = format!(
        "chain_id = 31337\nrpc_url = \"{}\"\ngas_multiplier = 1.2\n[tokens]\n",
        anvil.endpoint()
    );
    parse_chain_config(&raw).unwrap()
}

#[tokio::test]
#[ignore = "spawns an anvil node"]
async fn repeated_deploys_yield_distinct_addresses() {
    let anvil = Anvil::new().spawn();
    let config = local_config(&anvil);
    let provider = ProviderBuilder::new().on_http(anvil.endpoint().parse().unwrap());

    let deployer = first_account(&provider).await.unwrap();
    let artifact = ContractArtifact::parse(TINY_ARTIFACT).unwrap();
    let init_code = artifact.init_code(&[]).unwrap();

    let first = deploy_contract(&provider, &config, deployer, init_code.clone())
        .await
        .unwrap();
    let second = deploy_contract(&provider, &config, deployer, init_code)
        .await
        .unwrap();

    assert!(!first.address.is_zero());
    assert!(!second.address.is_zero());
    assert_ne!(first.address, second.address);
}
