//! Interfaces of the two farm generations.
//!
//! The farms do not share a calling convention: V1 pulls stake through an
//! allowance, V2 receives it through a CW20 `Send` hook and can credit a
//! different account than the sender.

use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct UserInfoResponse {
    pub amount: Uint128,
    pub reward_debt: Uint128,
}

pub mod v1 {
    use super::*;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum ExecuteMsg {
        /// Pulls `amount` of the pool's lp token from the sender.
        Deposit { pid: u64, amount: Uint128 },
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum QueryMsg {
        PoolInfo { pid: u64 },
        UserInfo { pid: u64, user: String },
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
    pub struct PoolInfoResponse {
        pub lp_token: Addr,
        pub alloc_point: u64,
        pub last_reward_block: u64,
        pub acc_reward_per_share: Uint128,
    }
}

pub mod v2 {
    use super::*;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum Cw20HookMsg {
        /// Credits the received lp tokens to `to` in pool `pid`.
        Deposit { pid: u64, to: String },
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum QueryMsg {
        LpToken { pid: u64 },
        UserInfo { pid: u64, user: String },
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
    pub struct LpTokenResponse {
        pub lp_token: Addr,
    }
}
