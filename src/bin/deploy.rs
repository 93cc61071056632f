use clap::Parser;
use univ3_deployer::core::{
    anvil::run_eth_anvil,
    deploy::run_eth_deploy,
    inspect::run_eth_inspect,
    swap::run_eth_swap,
};
use univ3_deployer::types::{load_chain_config, ChainConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Deploy and poke Uniswap V3 periphery contracts")]
struct Args {
    /// Chain name (eth, anvil)
    #[arg(long, default_value = "eth")]
    chain: String,

    /// What to run (deploy, swap, inspect, anvil)
    #[arg(long, default_value = "deploy")]
    method: String,

    /// Contract name, must have an artifact entry in the chain config
    #[arg(long, default_value = "NonfungiblePositionManager")]
    contract: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Config lives at src/config/<chain>.toml
    let config_path = format!("src/config/{}.toml", args.chain);
    let config: ChainConfig = load_chain_config(&config_path)?;

    match args.method.as_str() {
        "deploy" => run_eth_deploy(&config, &args.chain, &args.contract).await?,
        "swap" => run_eth_swap(&config, &args.chain).await?,
        "inspect" => run_eth_inspect(&config, &args.chain).await?,
        "anvil" => run_eth_anvil(&config, &args.chain, &args.contract).await?,
        _ => eprintln!("Unknown method: {}", args.method),
    }

    Ok(())
}
