use cosmwasm_std::Uint128;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Execute interface of the liquidity router.
///
/// Both variants revert as a whole when either minimum cannot be met or the
/// deadline has passed. Pool-share tokens are minted to `to`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Pulls both CW20 tokens from the sender with `TransferFrom`.
    AddLiquidity {
        token_a: String,
        token_b: String,
        amount_a_desired: Uint128,
        amount_b_desired: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        to: String,
        deadline: u64,
    },
    /// Pairs a CW20 token with the native coin attached as funds. The native
    /// side is wrapped by the router and any unused part is refunded to `to`.
    AddLiquidityNative {
        token: String,
        amount_token_desired: Uint128,
        amount_token_min: Uint128,
        amount_native_min: Uint128,
        to: String,
        deadline: u64,
    },
}
