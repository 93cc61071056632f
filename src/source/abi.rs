use alloy::{
    primitives::{aliases::{I24, U24}, Address, Bytes, U160, U256},
    sol,
    sol_types::{SolCall, SolValue},
};

use anyhow::Result;

sol! {
    function approve(address spender, uint256 amount) external returns (bool);

    function balanceOf(address owner) external view returns (uint256);

    function deposit() external payable;
}

sol! {
    struct ExactInputSingleParams {
        address tokenIn;
        address tokenOut;
        uint24 fee;
        address recipient;
        uint256 deadline;
        uint256 amountIn;
        uint256 amountOutMinimum;
        uint160 sqrtPriceLimitX96;
    }

    function exactInputSingle(ExactInputSingleParams memory params)
    external
    payable
    returns (uint256 amountOut);
}

sol! {
    function slot0()
    external
    view
    returns (
        uint160 sqrtPriceX96,
        int24 tick,
        uint16 observationIndex,
        uint16 observationCardinality,
        uint16 observationCardinalityNext,
        uint8 feeProtocol,
        bool unlocked
    );

    function liquidity() external view returns (uint128);
}

/// Decoded view of a pool's `slot0()`.
#[derive(Debug)]
pub struct PoolSlot0 {
    pub sqrt_price_x96: U160,
    pub tick: I24,
    pub unlocked: bool,
}

pub fn approve_calldata(spender: Address, amount: U256) -> Bytes {
    Bytes::from(approveCall { spender, amount }.abi_encode())
}

pub fn balance_of_calldata(owner: Address) -> Bytes {
    Bytes::from(balanceOfCall { owner }.abi_encode())
}

pub fn deposit_calldata() -> Bytes {
    Bytes::from(depositCall {}.abi_encode())
}

pub fn decode_balance_response(response: &Bytes) -> Result<U256> {
    let balance = U256::abi_decode(response, false)?;
    Ok(balance)
}

/// `exactInputSingle` calldata with the price limit left open, as the
/// router interprets 0 as "no limit".
pub fn swap_calldata(
    token_in: Address,
    token_out: Address,
    fee: u32,
    recipient: Address,
    deadline: U256,
    amount_in: U256,
    amount_out_minimum: U256,
) -> Bytes {
    let params = ExactInputSingleParams {
        tokenIn: token_in,
        tokenOut: token_out,
        fee: U24::from(fee),
        recipient,
        deadline,
        amountIn: amount_in,
        amountOutMinimum: amount_out_minimum,
        sqrtPriceLimitX96: U160::ZERO,
    };

    Bytes::from(exactInputSingleCall { params }.abi_encode())
}

pub fn decode_swap_response(response: &Bytes) -> Result<U256> {
    let amount_out = U256::abi_decode(response, false)?;
    Ok(amount_out)
}

pub fn slot0_calldata() -> Bytes {
    Bytes::from(slot0Call {}.abi_encode())
}

pub fn decode_slot0_response(response: &Bytes) -> Result<PoolSlot0> {
    let decoded = slot0Call::abi_decode_returns(response, false)?;
    Ok(PoolSlot0 {
        sqrt_price_x96: decoded.sqrtPriceX96,
        tick: decoded.tick,
        unlocked: decoded.unlocked,
    })
}

pub fn liquidity_calldata() -> Bytes {
    Bytes::from(liquidityCall {}.abi_encode())
}

pub fn decode_liquidity_response(response: &Bytes) -> Result<u128> {
    let decoded = liquidityCall::abi_decode_returns(response, false)?;
    Ok(decoded._0)
}

/// ABI-encode the NonfungiblePositionManager constructor arguments
/// (factory, WETH9, token descriptor), appended to the creation bytecode.
pub fn position_manager_constructor_args(
    factory: Address,
    weth9: Address,
    token_descriptor: Address,
) -> Vec<u8> {
    (factory, weth9, token_descriptor).abi_encode()
}
