use cosmwasm_schema::QueryResponses;
use cosmwasm_std::{Addr, HexBinary, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::Config;

/// Selects the farm contract, and the ledger namespace, a deposit targets.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FarmVersion {
    V1,
    V2,
}

impl FarmVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            FarmVersion::V1 => "v1",
            FarmVersion::V2 => "v2",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct InstantiateMsg {
    /// Defaults to the instantiating account.
    pub owner: Option<String>,
    /// CW20 wrapper of the native coin; the native side of a pair.
    pub wrapped_native: String,
    pub native_denom: String,
    pub router: String,
    pub farm_v1: String,
    pub farm_v2: String,
    /// Factory that instantiates pairs, and the code they are instantiated
    /// from. Both feed the pair address derivation.
    pub pair_factory: String,
    pub pair_code_checksum: HexBinary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct AddLiquidityParams {
    pub token_a: String,
    pub token_b: String,
    pub amount_a_desired: Uint128,
    pub amount_b_desired: Uint128,
    pub amount_a_min: Uint128,
    pub amount_b_min: Uint128,
    pub farm: FarmVersion,
    pub pool_id: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct AddLiquidityNativeParams {
    pub token: String,
    pub amount_token_desired: Uint128,
    pub amount_native_desired: Uint128,
    pub amount_token_min: Uint128,
    pub amount_native_min: Uint128,
    pub farm: FarmVersion,
    pub pool_id: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Provides two CW20 tokens held by the wallet and stakes the pool shares.
    AddLiquidity { params: AddLiquidityParams },
    /// Provides a CW20 token and the native coin held by the wallet and
    /// stakes the pool shares.
    AddLiquidityNative { params: AddLiquidityNativeParams },
    ProposeNewOwner { new_owner: String },
    AcceptOwnership {},
    CancelOwnershipProposal {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema, QueryResponses)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    /// Liquidity the wallet has staked into a farm pool.
    #[returns(PoolLiquidityResponse)]
    PoolLiquidity { farm: FarmVersion, pool_id: u64 },
    /// Compares the ledger with the farm's own record for the wallet.
    #[returns(ReconcileResponse)]
    Reconcile { farm: FarmVersion, pool_id: u64 },
    #[returns(PairResponse)]
    Pair { token_a: String, token_b: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PoolLiquidityResponse {
    pub farm: FarmVersion,
    pub pool_id: u64,
    pub amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ReconcileResponse {
    pub ledger_amount: Uint128,
    pub farm_amount: Uint128,
    pub in_sync: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PairResponse {
    pub pair: Addr,
}
