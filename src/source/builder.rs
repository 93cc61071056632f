use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
};

/// exactInputSingle deadline, far enough in the future to never expire.
pub const SWAP_DEADLINE: u64 = 4_815_162_342;

pub fn swap_deadline() -> U256 {
    U256::from(SWAP_DEADLINE)
}

/// Read-only call against a deployed contract, submitted via `eth_call`.
/// `max_fee` arrives pre-scaled by the config's gas multiplier; the builders
/// apply no headroom of their own.
pub fn build_tx(to: Address, from: Address, calldata: Bytes, max_fee: u128) -> TransactionRequest {
    TransactionRequest::default()
        .to(to)
        .from(from)
        .with_input(calldata)
        .gas_limit(1_000_000)
        .max_fee_per_gas(max_fee)
        .max_priority_fee_per_gas(max_fee / 10)
}

/// State-changing call, nonce fetched by the caller from the node.
pub fn build_send_tx(
    to: Address,
    from: Address,
    calldata: Bytes,
    max_fee: u128,
    nonce: u64,
) -> TransactionRequest {
    build_tx(to, from, calldata, max_fee).nonce(nonce)
}

/// Payable call, e.g. WETH `deposit`.
pub fn build_value_tx(
    to: Address,
    from: Address,
    calldata: Bytes,
    value: U256,
    max_fee: u128,
    nonce: u64,
) -> TransactionRequest {
    build_send_tx(to, from, calldata, max_fee, nonce).value(value)
}

/// Contract creation: init code in place of a `to` address. The gas limit is
/// sized for the Uniswap periphery contracts, which run past a million gas.
pub fn build_deploy_tx(
    from: Address,
    init_code: Bytes,
    max_fee: u128,
    nonce: u64,
) -> TransactionRequest {
    TransactionRequest::default()
        .from(from)
        .with_deploy_code(init_code)
        .nonce(nonce)
        .gas_limit(6_000_000)
        .max_fee_per_gas(max_fee)
        .max_priority_fee_per_gas(max_fee / 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn deploy_tx_has_no_recipient() {
        let from = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        let tx = build_deploy_tx(from, Bytes::from(vec![0x60, 0x80]), 1_000_000_000, 7);

        assert!(tx.to.is_none() || tx.to == Some(alloy::primitives::TxKind::Create));
        assert_eq!(tx.nonce, Some(7));
        // the fee passes through unscaled; the config multiplier is the
        // only headroom applied
        assert_eq!(tx.max_fee_per_gas, Some(1_000_000_000));
    }

    #[test]
    fn value_tx_carries_value_and_nonce() {
        let from = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        let weth = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
        let tx = build_value_tx(
            weth,
            from,
            Bytes::from(vec![0xd0, 0xe3, 0x0d, 0xb0]),
            U256::from(100),
            1_000_000_000,
            3,
        );

        assert_eq!(tx.value, Some(U256::from(100)));
        assert_eq!(tx.nonce, Some(3));
        assert_eq!(tx.max_priority_fee_per_gas, Some(100_000_000));
    }
}
