use std::sync::Arc;

use anyhow::Result;
use alloy::{
    primitives::{utils::format_ether, Address, U256},
    providers::{Provider, ProviderBuilder},
    transports::http::{Client, Http},
};

use crate::chain::actors::get_chain_actors;
use crate::core::deploy::first_account;
use crate::source::abi::*;
use crate::source::builder::build_tx;
use crate::types::ChainConfig;

pub async fn erc20_balance<P>(
    provider: &P,
    token: Address,
    owner: Address,
    from: Address,
    max_fee: u128,
) -> Result<U256>
where
    P: Provider<Http<Client>>,
{
    let tx = build_tx(token, from, balance_of_calldata(owner), max_fee);
    let response = provider.call(&tx).await?;
    decode_balance_response(&response)
}

pub async fn pool_state<P>(
    provider: &P,
    pool: Address,
    from: Address,
    max_fee: u128,
) -> Result<(PoolSlot0, u128)>
where
    P: Provider<Http<Client>>,
{
    let tx = build_tx(pool, from, slot0_calldata(), max_fee);
    let slot0 = decode_slot0_response(&provider.call(&tx).await?)?;

    let tx = build_tx(pool, from, liquidity_calldata(), max_fee);
    let liquidity = decode_liquidity_response(&provider.call(&tx).await?)?;

    Ok((slot0, liquidity))
}

/// Read-only look at the configured pool: token balances, slot0, liquidity.
pub async fn run_eth_inspect(config: &ChainConfig, chain: &str) -> Result<()> {
    let actors = get_chain_actors(chain)?;

    let provider = ProviderBuilder::new().on_http(config.rpc_url.parse()?);
    let provider = Arc::new(provider);

    // eth_call only; any address serves as the caller.
    let from = first_account(&*provider).await.unwrap_or(Address::ZERO);
    let max_fee = config.scaled_fee(provider.get_gas_price().await?);

    let weth = config.addr(actors.native_token_key)?;
    let token = config.addr(actors.paired_token_key)?;
    let pool = config.addr(actors.pool_key)?;

    let weth_balance = erc20_balance(&*provider, weth, pool, from, max_fee).await?;
    let token_balance = erc20_balance(&*provider, token, pool, from, max_fee).await?;
    println!("pool {} balance: {} {}", actors.native_token_key, format_ether(weth_balance), actors.native_token_key);
    println!("pool {} balance: {} {}", actors.paired_token_key, format_ether(token_balance), actors.paired_token_key);

    let (slot0, liquidity) = pool_state(&*provider, pool, from, max_fee).await?;
    println!("pool sqrtPriceX96: {}", slot0.sqrt_price_x96);
    println!("pool tick: {}", slot0.tick);
    println!("pool unlocked: {}", slot0.unlocked);
    println!("pool liquidity: {}", liquidity);

    Ok(())
}
