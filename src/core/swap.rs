use std::sync::Arc;

use anyhow::Result;
use alloy::{
    primitives::{
        utils::{format_ether, parse_ether},
        U256,
    },
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    transports::http::{Client, Http},
};
use log::info;

use crate::chain::actors::get_chain_actors;
use crate::core::deploy::first_account;
use crate::core::inspect::{erc20_balance, pool_state};
use crate::core::logger::{log_swap, measure_end, measure_start, SwapLog};
use crate::source::abi::*;
use crate::source::builder::{build_send_tx, build_value_tx, swap_deadline};
use crate::types::ChainConfig;

async fn send<P>(provider: &P, tx: TransactionRequest) -> Result<()>
where
    P: Provider<Http<Client>>,
{
    let receipt = provider.send_transaction(tx).await?.get_receipt().await?;
    info!("tx {} mined, gas used {}", receipt.transaction_hash, receipt.gas_used);
    Ok(())
}

/// Allowance granted to the router, the oversized 1e38 figure the pool was
/// first drained with.
fn router_allowance() -> Result<U256> {
    Ok("100000000000000000000000000000000000000".parse::<U256>()?)
}

fn balance_diff(before: U256, after: U256) -> String {
    if after >= before {
        format!("+{}", format_ether(after - before))
    } else {
        format!("-{}", format_ether(before - after))
    }
}

/// Swap WETH into the paired token through the router and show how the pool
/// moves: deposit ETH, approve, record balances and slot0/liquidity, swap,
/// diff.
pub async fn run_eth_swap(config: &ChainConfig, chain: &str) -> Result<()> {
    let actors = get_chain_actors(chain)?;

    let provider = ProviderBuilder::new().on_http(config.rpc_url.parse()?);
    let provider = Arc::new(provider);

    let signer = first_account(&*provider).await?;
    let max_fee = config.scaled_fee(provider.get_gas_price().await?);

    let weth = config.addr(actors.native_token_key)?;
    let token = config.addr(actors.paired_token_key)?;
    let router = config.addr(actors.router_key)?;
    let pool = config.addr(actors.pool_key)?;

    // Wrap ETH so the router has something to pull.
    let nonce = provider.get_transaction_count(signer).await?;
    let deposit = build_value_tx(
        weth,
        signer,
        deposit_calldata(),
        parse_ether("100")?,
        max_fee,
        nonce,
    );
    send(&*provider, deposit).await?;

    let signer_weth = erc20_balance(&*provider, weth, signer, signer, max_fee).await?;
    let signer_token = erc20_balance(&*provider, token, signer, signer, max_fee).await?;
    println!("signer WETH balance: {}", format_ether(signer_weth));
    println!("signer token balance: {}", format_ether(signer_token));

    // One oversized approval covers this run and any rerun.
    let nonce = provider.get_transaction_count(signer).await?;
    let approval = build_send_tx(
        weth,
        signer,
        approve_calldata(router, router_allowance()?),
        max_fee,
        nonce,
    );
    send(&*provider, approval).await?;

    let pool_weth_before = erc20_balance(&*provider, weth, pool, signer, max_fee).await?;
    let pool_token_before = erc20_balance(&*provider, token, pool, signer, max_fee).await?;
    println!("pool WETH balance: {}", format_ether(pool_weth_before));
    println!("pool token balance: {}", format_ether(pool_token_before));

    let (slot0, liquidity) = pool_state(&*provider, pool, signer, max_fee).await?;
    println!("pool sqrtPriceX96 before swap: {}", slot0.sqrt_price_x96);
    println!("pool liquidity before swap: {}", liquidity);

    let amount_in = parse_ether("0.01")?;
    // Floor of 100 tokens out; the router reverts below it.
    let amount_out_minimum = parse_ether("100")?;
    let calldata = swap_calldata(
        weth,
        token,
        actors.default_fee,
        signer,
        swap_deadline(),
        amount_in,
        amount_out_minimum,
    );

    let nonce = provider.get_transaction_count(signer).await?;
    let swap = build_send_tx(router, signer, calldata, max_fee, nonce);

    // Simulate first to learn the amount out, then submit the same request.
    let start = measure_start("swap");
    let amount_out = decode_swap_response(&provider.call(&swap).await?)?;
    send(&*provider, swap).await?;
    let elapsed_ms = start.1.elapsed().as_millis();
    measure_end(start);

    println!("swapped {} WETH for {} token", format_ether(amount_in), format_ether(amount_out));

    let pool_weth_after = erc20_balance(&*provider, weth, pool, signer, max_fee).await?;
    let pool_token_after = erc20_balance(&*provider, token, pool, signer, max_fee).await?;
    println!("pool WETH diff: {}", balance_diff(pool_weth_before, pool_weth_after));
    println!("pool token diff: {}", balance_diff(pool_token_before, pool_token_after));

    let (slot0, liquidity) = pool_state(&*provider, pool, signer, max_fee).await?;
    println!("pool sqrtPriceX96 after swap: {}", slot0.sqrt_price_x96);
    println!("pool liquidity after swap: {}", liquidity);

    log_swap(&SwapLog {
        chain: chain.to_string(),
        from_token: weth.to_string(),
        to_token: token.to_string(),
        amount_in: amount_in.to_string(),
        amount_out: amount_out.to_string(),
        elapsed_ms,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_allowance_is_1e38() {
        let expected = U256::from(10).pow(U256::from(38));
        assert_eq!(router_allowance().unwrap(), expected);
    }

    #[test]
    fn balance_diff_is_signed() {
        let one = parse_ether("1").unwrap();
        let three = parse_ether("3").unwrap();
        assert_eq!(balance_diff(one, three), "+2.000000000000000000");
        assert_eq!(balance_diff(three, one), "-2.000000000000000000");
    }
}
